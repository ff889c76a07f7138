use serde::Serialize;

use crate::error::AppResult;
use crate::models::{Extraction, ExtractionStats};

/// 有输入但没有提取到任何答案时显示的提示
pub const NOTHING_EXTRACTED: &str = "未提取到答案内容，请检查数据源是否正确。";

/// 从1开始编号，每行一个答案
pub fn render_numbered(extraction: &Extraction) -> String {
    if extraction.is_empty() {
        return NOTHING_EXTRACTED.to_string();
    }

    extraction
        .answers
        .iter()
        .enumerate()
        .map(|(i, answer)| format!("{} {}", i + 1, answer))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Serialize)]
struct JsonReport<'a> {
    answers: &'a [String],
    stats: &'a ExtractionStats,
}

pub fn render_json(extraction: &Extraction) -> AppResult<String> {
    let report = JsonReport {
        answers: &extraction.answers,
        stats: &extraction.stats,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extraction(answers: &[&str]) -> Extraction {
        Extraction {
            answers: answers.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn numbers_from_one() {
        assert_eq!(render_numbered(&extraction(&["sun", "dog"])), "1 sun\n2 dog");
    }

    #[test]
    fn empty_shows_message() {
        assert_eq!(render_numbered(&extraction(&[])), NOTHING_EXTRACTED);
    }

    #[test]
    fn json_contains_answers_and_stats() {
        let json = render_json(&extraction(&["sun"])).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["answers"][0], "sun");
        assert_eq!(value["stats"]["answers_total"], 0);
    }
}
