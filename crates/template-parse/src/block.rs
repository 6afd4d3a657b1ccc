//! 模板块

use crate::token::Placeholder;

/// 一个模板块: 起止标记之间的行, 逐行去除首尾空白后以 `\n` 连接
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Block(String);

impl Block {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 依次以 values 的第 n 项替换全部 `$n`
    ///
    /// 纯文本替换, 按 `$0`, `$1`, ... 的顺序逐轮进行, 后一轮会扫描前一轮的结果.
    /// 因此替换值本身不应包含占位符. 不做边界检查, `$1` 也会命中 `$10` 的前缀.
    pub fn substitute<'v, I>(&self, values: I) -> String
    where
        I: IntoIterator<Item = &'v str>,
    {
        values
            .into_iter()
            .enumerate()
            .fold(self.0.clone(), |text, (k, value)| {
                text.replace(&Placeholder(k).to_string(), value)
            })
    }
}
