//! 从音频文件名中恢复听力材料序号

use crate::models::{KeyResolution, SequenceKey, Unit};
use regex::Regex;
use std::sync::LazyLock;

/// 单元内嵌的音频引用，如 `media/T3-ZC.mp3`、`media/T12_ZC.mp3`
static RE_MEDIA_TRACK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"media/T([0-9]+)[-_]ZC").expect("valid media track regex"));

/// media 目录下的文件名，如 `T4-ZC.mp3`
static RE_TRACK_FILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"T([0-9]+)[-_]ZC").expect("valid track file regex"));

/// 解析单元序号，取第一个匹配
pub fn resolve_key(unit: &Unit<'_>) -> SequenceKey {
    resolve(unit.text).key
}

/// 解析序号并检查后续匹配是否与第一个一致
pub fn resolve(text: &str) -> KeyResolution {
    let mut digits = RE_MEDIA_TRACK
        .captures_iter(text)
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str());

    let Some(first) = digits.next() else {
        return KeyResolution {
            key: SequenceKey::Unordered,
            ambiguous: false,
        };
    };

    let key = parse_track(first);
    let ambiguous = digits.any(|d| parse_track(d) != key);

    KeyResolution { key, ambiguous }
}

/// 从 media 目录中的文件名提取序号
pub fn track_key_in_file_name(file_name: &str) -> SequenceKey {
    RE_TRACK_FILE
        .captures(file_name)
        .and_then(|cap| cap.get(1))
        .map_or(SequenceKey::Unordered, |m| parse_track(m.as_str()))
}

// 超出 u64 的数字串视为无序号
fn parse_track(digits: &str) -> SequenceKey {
    digits
        .parse::<u64>()
        .map_or(SequenceKey::Unordered, SequenceKey::Ordered)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_of(text: &str) -> SequenceKey {
        resolve_key(&Unit::new(0, text))
    }

    #[test]
    fn both_separators_resolve() {
        assert_eq!(key_of(r#"{"src":"media/T7-ZC.mp3"}"#), SequenceKey::Ordered(7));
        assert_eq!(key_of(r#"{"src":"media/T7_ZC.mp3"}"#), SequenceKey::Ordered(7));
        assert_eq!(key_of("media/T012-ZC"), SequenceKey::Ordered(12));
    }

    #[test]
    fn missing_or_malformed_pattern_is_unordered() {
        assert_eq!(key_of("no audio here"), SequenceKey::Unordered);
        assert_eq!(key_of("media/T7ZC.mp3"), SequenceKey::Unordered);
        assert_eq!(key_of("media/T7.ZC.mp3"), SequenceKey::Unordered);
        assert_eq!(key_of("media/t7-ZC.mp3"), SequenceKey::Unordered);
        assert_eq!(key_of("media/T-ZC.mp3"), SequenceKey::Unordered);
        assert_eq!(key_of("audio/T7-ZC.mp3"), SequenceKey::Unordered);
    }

    #[test]
    fn overflowing_digits_are_unordered() {
        assert_eq!(
            key_of("media/T99999999999999999999999-ZC.mp3"),
            SequenceKey::Unordered
        );
    }

    #[test]
    fn first_match_wins_and_divergence_is_flagged() {
        let same = resolve("media/T3-ZC.mp3 ... media/T03_ZC.mp3");
        assert_eq!(same.key, SequenceKey::Ordered(3));
        assert!(!same.ambiguous);

        let divergent = resolve("media/T5-ZC.mp3 ... media/T2-ZC.mp3");
        assert_eq!(divergent.key, SequenceKey::Ordered(5));
        assert!(divergent.ambiguous);
    }

    #[test]
    fn media_file_names() {
        assert_eq!(track_key_in_file_name("T4-ZC.mp3"), SequenceKey::Ordered(4));
        assert_eq!(track_key_in_file_name("T10_ZC.mp3"), SequenceKey::Ordered(10));
        assert_eq!(track_key_in_file_name("cover.png"), SequenceKey::Unordered);
    }
}
