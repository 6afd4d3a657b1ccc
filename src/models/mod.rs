//! tispc 数据模型

mod substitution;

pub use substitution::*;
