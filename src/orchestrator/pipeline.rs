//! 提取流水线
//!
//! 切分 → 逐单元处理 → 汇总排序。
//! 数据内容有问题只会让结果变少，唯一的错误是完全没有输入。

use tracing::{debug, info, warn};

use crate::error::{AppResult, InputError};
use crate::extract::{aggregator, segment};
use crate::models::{concat_corpus, Extraction, ExtractionStats, SourceDocument};
use crate::workflow::{process_unit, UnitOutcome};

/// 对已拼接好的文本执行提取，从不失败
pub fn extract_from_corpus(corpus: &str) -> Extraction {
    let units = segment(corpus);
    info!("初步切分出 {} 个数据块", units.len());

    let mut stats = ExtractionStats::default();
    let mut entries = Vec::new();

    for unit in &units {
        let outcome = process_unit(unit);
        record_unit(&mut stats, &outcome);

        let label = outcome.to_string();
        match outcome.into_entry() {
            Some(entry) => {
                debug!("--> {} 提取到 {} 条内容", label, entry.answers.len());
                entries.push(entry);
            }
            None => debug!("--> {} 没有可用答案", label),
        }
    }

    let answers = aggregator::aggregate(&mut entries);
    stats.answers_total = answers.len();

    log_summary(&stats);

    Extraction {
        answers,
        entries,
        stats,
    }
}

/// 拼接多个文件后执行提取
///
/// 没有任何文件，或拼接前所有内容都为空时返回 `InputError::Absent`。
pub fn run(documents: &[SourceDocument]) -> AppResult<Extraction> {
    if documents.iter().all(|doc| doc.content.is_empty()) {
        return Err(InputError::Absent.into());
    }

    let corpus = concat_corpus(documents);
    Ok(extract_from_corpus(&corpus))
}

fn record_unit(stats: &mut ExtractionStats, outcome: &UnitOutcome) {
    stats.units_total += 1;
    stats.spans_total += outcome.spans_total;
    stats.spans_without_letter += outcome.spans_without_letter;
    stats.spans_without_content += outcome.spans_without_content;

    if !outcome.resolution.key.is_ordered() {
        stats.units_unordered += 1;
    }
    if outcome.resolution.ambiguous {
        stats.units_ambiguous_key += 1;
        warn!("{} 包含多个不一致的音频序号，使用第一个", outcome);
    }
    if outcome.spans_total == 0 {
        stats.units_without_spans += 1;
    } else if outcome.answers.is_empty() {
        stats.units_without_answers += 1;
    }
}

// ========== 日志辅助函数 ==========

fn log_summary(stats: &ExtractionStats) {
    info!(
        "有效数据块 {}，其中无序号 {}，无小题 {}，无答案 {}",
        stats.units_total,
        stats.units_unordered,
        stats.units_without_spans,
        stats.units_without_answers
    );
    if stats.spans_skipped() > 0 {
        info!(
            "跳过小题 {}（无字母 {}，无内容 {}）",
            stats.spans_skipped(),
            stats.spans_without_letter,
            stats.spans_without_content
        );
    }
    info!("排序完成，共 {} 条答案", stats.answers_total);
}
