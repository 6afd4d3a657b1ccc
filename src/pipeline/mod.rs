//! tispc 工作管线

mod expander;
#[allow(clippy::module_inception)]
mod pipeline;

pub use expander::*;
pub use pipeline::*;
