//! 模板块展开

use template_parse::Block;

use crate::models::{SUBSTITUTION_TABLE, Substitution};

/// 模板块展开器
///
/// 每个块按替换表顺序展开为 `table.len()` 份, 结果以块为主序, 替换为次序.
#[derive(Debug, Clone, Copy)]
pub struct Expander<'t> {
    table: &'t [Substitution],
}

impl Default for Expander<'static> {
    fn default() -> Self {
        Self::new(&SUBSTITUTION_TABLE)
    }
}

impl<'t> Expander<'t> {
    pub fn new(table: &'t [Substitution]) -> Self {
        Self { table }
    }

    /// 展开单个块
    pub fn expand_block<'a>(&'a self, block: &'a Block) -> impl Iterator<Item = String> + 'a {
        self.table.iter().map(move |sub| block.substitute(sub.values()))
    }

    /// 依次展开全部块
    pub fn expand<'a>(&'a self, blocks: &'a [Block]) -> impl Iterator<Item = String> + 'a {
        blocks.iter().flat_map(move |block| self.expand_block(block))
    }
}
