//! tispc 模板展开
//!
//! 读取带有 `#begin_template` / `#end_template` 模板块的文件,
//! 将每个块按固定的类型替换表展开为多份, 拼接后写入输出文件.

pub mod models;
pub mod pipeline;

pub mod constant {
    //! tispc 常量定义

    /// 展开结果之间的分隔 (一个空行)
    pub const EXPANSION_SEPARATOR: &str = "\n\n";
}

pub mod error {
    //! tispc 错误类型

    use std::{io, path::PathBuf};

    /// 通用返回类型
    pub type Result<T> = std::result::Result<T, Error>;

    /// 通用错误类型
    #[derive(Debug, thiserror::Error)]
    pub enum Error {
        #[error("failed to read template: path: {path:?}, error: {source}")]
        Read {
            path: PathBuf,
            #[source]
            source: io::Error,
        },

        #[error("failed to write output: path: {path:?}, error: {source}")]
        Write {
            path: PathBuf,
            #[source]
            source: io::Error,
        },
    }
}

pub use error::*;
