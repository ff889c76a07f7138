//! 全局排序与展平

use crate::models::ResultEntry;

/// 按序号排序（无序号排最后，同序号保持原始次序），再依次展平
///
/// 不去重，同一文本在不同单元中出现多次会全部保留。
pub fn aggregate(entries: &mut [ResultEntry]) -> Vec<String> {
    sort_entries(entries);
    flatten(entries)
}

/// 稳定排序；`position` 作为次键，保证不依赖传入顺序
pub fn sort_entries(entries: &mut [ResultEntry]) {
    entries.sort_by_key(|entry| (entry.key, entry.position));
}

pub fn flatten(entries: &[ResultEntry]) -> Vec<String> {
    entries
        .iter()
        .flat_map(|entry| entry.answers.iter().cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SequenceKey;

    fn entry(key: Option<u64>, position: usize, answers: &[&str]) -> ResultEntry {
        ResultEntry {
            key: SequenceKey::from(key),
            position,
            answers: answers.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn sorts_by_key_ascending() {
        let mut entries = vec![
            entry(Some(3), 0, &["c1", "c2"]),
            entry(Some(1), 1, &["a"]),
            entry(Some(2), 2, &["b"]),
        ];
        assert_eq!(aggregate(&mut entries), vec!["a", "b", "c1", "c2"]);
    }

    #[test]
    fn equal_keys_keep_encounter_order() {
        let mut entries = vec![
            entry(Some(3), 4, &["second-1", "second-2"]),
            entry(Some(3), 1, &["first-1", "first-2"]),
            entry(Some(1), 7, &["lead"]),
        ];
        assert_eq!(
            aggregate(&mut entries),
            vec!["lead", "first-1", "first-2", "second-1", "second-2"]
        );
    }

    #[test]
    fn unordered_entries_go_last_in_encounter_order() {
        let mut entries = vec![
            entry(None, 0, &["u0"]),
            entry(Some(9), 1, &["k9"]),
            entry(None, 2, &["u2"]),
            entry(Some(0), 3, &["k0"]),
        ];
        assert_eq!(aggregate(&mut entries), vec!["k0", "k9", "u0", "u2"]);
    }

    #[test]
    fn duplicates_are_preserved() {
        let mut entries = vec![entry(Some(2), 0, &["same"]), entry(Some(1), 1, &["same"])];
        assert_eq!(aggregate(&mut entries), vec!["same", "same"]);
    }

    #[test]
    fn empty_input() {
        assert!(aggregate(&mut []).is_empty());
    }
}
