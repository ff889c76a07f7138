//! 切分单元与排序键

use serde::{Deserialize, Serialize};
use std::fmt;

/// 由 `var pageConfig` 切分得到的一段配置文本
///
/// `position` 是切分序列中的原始下标（从0开始，含被丢弃的空白段），
/// 用于排序时的稳定次序。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unit<'a> {
    pub position: usize,
    pub text: &'a str,
}

impl<'a> Unit<'a> {
    pub fn new(position: usize, text: &'a str) -> Self {
        Self { position, text }
    }
}

/// 听力材料序号（来自 `media/T<n>-ZC` 音频文件名）
///
/// `Unordered` 大于所有 `Ordered`，排序时自然落到最后。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "Option<u64>", into = "Option<u64>")]
pub enum SequenceKey {
    Ordered(u64),
    Unordered,
}

impl SequenceKey {
    pub fn is_ordered(self) -> bool {
        matches!(self, SequenceKey::Ordered(_))
    }

    pub fn value(self) -> Option<u64> {
        match self {
            SequenceKey::Ordered(n) => Some(n),
            SequenceKey::Unordered => None,
        }
    }
}

impl From<Option<u64>> for SequenceKey {
    fn from(value: Option<u64>) -> Self {
        value.map_or(SequenceKey::Unordered, SequenceKey::Ordered)
    }
}

impl From<SequenceKey> for Option<u64> {
    fn from(key: SequenceKey) -> Self {
        key.value()
    }
}

impl fmt::Display for SequenceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceKey::Ordered(n) => write!(f, "T{}", n),
            SequenceKey::Unordered => write!(f, "无序号"),
        }
    }
}

/// 序号解析结果
///
/// 同一单元内出现多个音频文件名且数字不一致时 `ambiguous` 为 true，
/// 此时仍取第一个匹配。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyResolution {
    pub key: SequenceKey,
    pub ambiguous: bool,
}

/// 单个单元的提取结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultEntry {
    pub key: SequenceKey,
    pub position: usize,
    pub answers: Vec<String>,
}
