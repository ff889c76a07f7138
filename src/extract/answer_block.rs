//! 查找 `"answer_text"` 与 `"knowledge"` 之间的小题片段

use crate::models::Unit;
use regex::Regex;
use std::sync::LazyLock;

// 非贪婪，跨行
static RE_ANSWER_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)"answer_text"(.*?)"knowledge""#).expect("valid answer block regex")
});

/// 按出现顺序返回单元内所有小题片段（不含标记本身）
///
/// 片段顺序即小题顺序，例如同一段听力材料下的 11-13 题。
pub fn find_spans<'a>(unit: &Unit<'a>) -> Vec<&'a str> {
    RE_ANSWER_BLOCK
        .captures_iter(unit.text)
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str())
        .collect()
}
