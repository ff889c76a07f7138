//! 按 `var pageConfig` 切分原始文本

use crate::models::Unit;

/// 单元分隔符
pub const UNIT_DELIMITER: &str = "var pageConfig";

/// 将整段文本切分为若干单元，丢弃空白段
///
/// 单元的 `position` 保留切分后的原始下标。
pub fn segment(corpus: &str) -> Vec<Unit<'_>> {
    corpus
        .split(UNIT_DELIMITER)
        .enumerate()
        .filter(|(_, text)| !text.trim().is_empty())
        .map(|(position, text)| Unit::new(position, text))
        .collect()
}
