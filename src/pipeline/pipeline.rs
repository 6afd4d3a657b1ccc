//! 读取, 展开, 写出

use std::{fs, path::Path};

use template_parse::{Error as Diagnostic, TemplateParser};
use tracing::{debug, info};

use super::Expander;
use crate::{constant::EXPANSION_SEPARATOR, error::*};

/// 展开统计
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExpandState {
    pub blocks: usize,
    pub expansions: usize,
}

/// 展开结果
#[derive(Debug, Clone)]
pub struct ExpandResult {
    pub output: String,
    pub state: ExpandState,
    /// 解析诊断, 不影响输出
    pub diagnostics: Vec<Diagnostic>,
}

/// 在内存中展开模板文本
pub fn expand_text(template: &str, expander: &Expander<'_>) -> ExpandResult {
    let (parser, diagnostics) = TemplateParser::new(template);
    let expanded: Vec<String> = expander.expand(parser.blocks()).collect();

    ExpandResult {
        state: ExpandState {
            blocks: parser.len(),
            expansions: expanded.len(),
        },
        output: expanded.join(EXPANSION_SEPARATOR),
        diagnostics,
    }
}

/// 展开 input 中的模板块并写入 output (覆盖原有内容)
pub fn expand(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<ExpandState> {
    let (input, output) = (input.as_ref(), output.as_ref());

    debug!(path = %input.display(), "reading template");
    let template = fs::read_to_string(input).map_err(|source| Error::Read {
        path: input.to_path_buf(),
        source,
    })?;

    let ExpandResult {
        output: text,
        state,
        diagnostics,
    } = expand_text(&template, &Expander::default());

    for diagnostic in &diagnostics {
        debug!(path = %input.display(), "{diagnostic}");
    }

    debug!(path = %output.display(), bytes = text.len(), "writing output");
    fs::write(output, text).map_err(|source| Error::Write {
        path: output.to_path_buf(),
        source,
    })?;

    info!(
        blocks = state.blocks,
        expansions = state.expansions,
        "template expanded"
    );
    Ok(state)
}
