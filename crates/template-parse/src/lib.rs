//! 模板块解析
//!
//! 提供 TemplateParser 从文本中切分 `#begin_template` / `#end_template` 模板块,
//! 以及 Block 完成 `$0` / `$1` 占位符的文本替换

mod block;
mod error;
mod parser;
mod token;

pub use block::Block;
pub use error::*;
pub use parser::TemplateParser;
pub use token::{Marker, Placeholder};
