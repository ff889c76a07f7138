//! 单元处理流程 - 流程层
//!
//! 定义"一个数据块"的完整处理：序号 → 片段 → 逐个提取答案。
//! 纯函数，不共享状态，各单元可以独立处理。

use std::fmt::Display;

use tracing::debug;

use crate::extract::{self, SpanOutcome};
use crate::models::{KeyResolution, ResultEntry, Unit};
use crate::utils::truncate_text;

/// 单个单元的处理结果，包含跳过计数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitOutcome {
    pub position: usize,
    pub resolution: KeyResolution,
    pub answers: Vec<String>,
    pub spans_total: usize,
    pub spans_without_letter: usize,
    pub spans_without_content: usize,
}

impl UnitOutcome {
    /// 零答案的单元不进入结果集
    pub fn into_entry(self) -> Option<ResultEntry> {
        if self.answers.is_empty() {
            return None;
        }
        Some(ResultEntry {
            key: self.resolution.key,
            position: self.position,
            answers: self.answers,
        })
    }
}

impl Display for UnitOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[数据块 #{} {}]", self.position, self.resolution.key)
    }
}

/// 处理一个单元
pub fn process_unit(unit: &Unit<'_>) -> UnitOutcome {
    let resolution = extract::resolve(unit.text);
    let spans = extract::find_spans(unit);

    let mut outcome = UnitOutcome {
        position: unit.position,
        resolution,
        answers: Vec::with_capacity(spans.len()),
        spans_total: spans.len(),
        spans_without_letter: 0,
        spans_without_content: 0,
    };

    for (index, span) in spans.iter().enumerate() {
        match extract::inspect(span) {
            SpanOutcome::Answer { letter, text } => {
                debug!(
                    "{} 第 {} 小题: {} {}",
                    outcome,
                    index + 1,
                    letter,
                    truncate_text(text, 40)
                );
                outcome.answers.push(text.to_string());
            }
            SpanOutcome::NoLetter => {
                debug!("{} 第 {} 小题: 未找到选项字母，跳过", outcome, index + 1);
                outcome.spans_without_letter += 1;
            }
            SpanOutcome::NoContent(letter) => {
                debug!(
                    "{} 第 {} 小题: 选项 {} 没有对应内容，跳过",
                    outcome,
                    index + 1,
                    letter
                );
                outcome.spans_without_content += 1;
            }
        }
    }

    outcome
}
