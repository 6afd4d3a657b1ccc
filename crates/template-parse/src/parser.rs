//! 模板块切分

use crate::{block::Block, error::*, token::Marker};

/// 模板块解析器
///
/// 两状态 (块外 / 块内) 的逐行解析:
///
/// - `#begin_template` 清空当前累积的行 (块外的游离行就此丢弃)
/// - `#end_template` 将累积的行以 `\n` 连接为一个块, 并清空累积
/// - 其余行去除首尾空白后追加到累积中
///
/// 输入结束时仍未闭合的块被丢弃. 被丢弃或被宽松处理的输入以诊断形式返回.
#[derive(Debug, Clone, Default)]
pub struct TemplateParser(Vec<Block>);

/// 按 `\n`, `\r\n`, `\r` 切分行, 末尾的换行不产生空行
fn lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let (line, next) = match rest.find(['\r', '\n']) {
            Some(p) if rest[p..].starts_with("\r\n") => (&rest[..p], &rest[p + 2..]),
            Some(p) => (&rest[..p], &rest[p + 1..]),
            None => (rest, ""),
        };
        rest = next;
        Some(line)
    })
}

/// 当前累积的行及其来源
struct Pending<'t> {
    lines: Vec<&'t str>,
    /// 块内时为起始标记所在行
    opened: Option<usize>,
    /// 累积中第一行的行号
    first: usize,
}

impl<'t> Pending<'t> {
    fn new() -> Self {
        Self {
            lines: Vec::new(),
            opened: None,
            first: 0,
        }
    }

    fn push(&mut self, lineno: usize, line: &'t str) {
        if self.lines.is_empty() {
            self.first = lineno;
        }
        self.lines.push(line);
    }

    fn has_content(&self) -> bool {
        self.lines.iter().any(|l| !l.is_empty())
    }

    /// 丢弃累积内容, 返回对应的诊断
    fn discard(&mut self, lineno: usize) -> Option<Error> {
        let err = match self.opened {
            Some(line) => Some(Error::UnterminatedBlock { line }),
            None if self.has_content() => Some(Error::DiscardedLines {
                from: self.first,
                to: lineno - 1,
            }),
            None => None,
        };
        self.lines.clear();
        self.opened = None;
        err
    }

    fn take(&mut self) -> Block {
        let block = Block::new(self.lines.join("\n"));
        self.lines.clear();
        self.opened = None;
        block
    }
}

impl TemplateParser {
    /// 从模板文本切分模板块
    ///
    /// 解析总会成功, 同时返回收集到的诊断
    pub fn new(template: &str) -> (Self, Vec<Error>) {
        let mut blocks = Vec::new();
        let mut errs = Vec::new();
        let mut pending = Pending::new();
        let mut last = 0;

        for (k, raw) in lines(template).enumerate() {
            let lineno = k + 1;
            let line = raw.trim();
            last = lineno;

            match Marker::parse_line(line) {
                Some(Marker::Begin) => {
                    errs.extend(pending.discard(lineno));
                    pending.opened = Some(lineno);
                }
                Some(Marker::End) => {
                    if pending.opened.is_none() {
                        errs.push(Error::UnopenedBlock { line: lineno });
                    }
                    blocks.push(pending.take());
                }
                None => pending.push(lineno, line),
            }
        }

        errs.extend(pending.discard(last + 1));

        (Self(blocks), errs)
    }

    pub fn blocks(&self) -> &[Block] {
        &self.0
    }

    pub fn into_blocks(self) -> Vec<Block> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
