use thiserror::Error;

/// 解析诊断
///
/// 均为非致命错误: 解析总会完成, 这些内容只说明哪些输入被丢弃或被宽松处理.
/// 行号从 1 开始.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("lines {from}..={to} are outside any template block and were discarded")]
    DiscardedLines { from: usize, to: usize },

    #[error("template block opened at line {line} is never closed")]
    UnterminatedBlock { line: usize },

    #[error("end marker at line {line} has no matching begin marker")]
    UnopenedBlock { line: usize },
}
