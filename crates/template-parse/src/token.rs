//! 模板标记与占位符

use std::fmt;

use strum::{AsRefStr, Display, EnumString};

/// 模板块边界标记
///
/// 行在去除首尾空白后与标记完全相等时才被识别.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr)]
pub enum Marker {
    #[strum(serialize = "#begin_template")]
    Begin,

    #[strum(serialize = "#end_template")]
    End,
}

impl Marker {
    /// 尝试将 (已去除空白的) 行识别为标记
    pub fn parse_line(line: &str) -> Option<Self> {
        line.parse().ok()
    }
}

/// 占位符 `$n`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placeholder(pub usize);

impl Placeholder {
    pub const SIGIL: char = '$';
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::SIGIL, self.0)
    }
}
