use super::unit::ResultEntry;
use serde::{Deserialize, Serialize};

/// 提取过程中的计数
///
/// 每一次“静默跳过”都会在这里留下记录，便于判断数据源质量。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionStats {
    /// 非空白单元总数
    pub units_total: usize,
    /// 没有找到音频序号的单元
    pub units_unordered: usize,
    /// 出现多个不一致序号的单元
    pub units_ambiguous_key: usize,
    /// 没有任何 answer_text…knowledge 片段的单元
    pub units_without_spans: usize,
    /// 有片段但一个答案都没提取到的单元
    pub units_without_answers: usize,
    pub spans_total: usize,
    /// 片段内找不到 A-D 字母
    pub spans_without_letter: usize,
    /// 找到字母但没有对应的 id/content
    pub spans_without_content: usize,
    pub answers_total: usize,
}

impl ExtractionStats {
    pub fn spans_skipped(&self) -> usize {
        self.spans_without_letter + self.spans_without_content
    }
}

/// 一次完整提取的结果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    /// 全局排序、展平后的答案
    pub answers: Vec<String>,
    /// 排序后的各单元结果（不含零答案单元）
    pub entries: Vec<ResultEntry>,
    pub stats: ExtractionStats,
}

impl Extraction {
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }
}
