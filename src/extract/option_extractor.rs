//! 确定小题片段中被标记的选项字母，并取出该选项的文本

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// 选项字母
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionLetter {
    A,
    B,
    C,
    D,
}

impl OptionLetter {
    pub const ALL: [OptionLetter; 4] = [
        OptionLetter::A,
        OptionLetter::B,
        OptionLetter::C,
        OptionLetter::D,
    ];

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'A' => Some(OptionLetter::A),
            'B' => Some(OptionLetter::B),
            'C' => Some(OptionLetter::C),
            'D' => Some(OptionLetter::D),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            OptionLetter::A => 'A',
            OptionLetter::B => 'B',
            OptionLetter::C => 'C',
            OptionLetter::D => 'D',
        }
    }

    fn index(self) -> usize {
        self as usize
    }

    /// `"id":"<字母>"` 之后最近的 `"content":"<文本>"`
    fn content_pattern(self) -> &'static Regex {
        &RE_OPTION_CONTENT[self.index()]
    }
}

impl fmt::Display for OptionLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

static RE_OPTION_CONTENT: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    OptionLetter::ALL.map(|letter| {
        let pattern = format!(r#"(?s)"id":"{}".*?"content":"(.*?)""#, letter.as_char());
        Regex::new(&pattern).expect("valid option content regex")
    })
});

/// 单个片段的提取结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanOutcome<'a> {
    /// 成功取到被标记选项的文本
    Answer { letter: OptionLetter, text: &'a str },
    /// 片段内没有 A-D
    NoLetter,
    /// 找到了字母，但没有对应的 id/content
    NoContent(OptionLetter),
}

impl<'a> SpanOutcome<'a> {
    pub fn answer(self) -> Option<&'a str> {
        match self {
            SpanOutcome::Answer { text, .. } => Some(text),
            _ => None,
        }
    }
}

/// 线性扫描，第一个 A-D 字符即为被标记的选项
pub fn marked_letter(span: &str) -> Option<OptionLetter> {
    span.chars().find_map(OptionLetter::from_char)
}

/// 在片段内查找指定选项的文本
pub fn option_content(span: &str, letter: OptionLetter) -> Option<&str> {
    letter
        .content_pattern()
        .captures(span)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str())
}

/// 分两步提取：先定字母，再找该字母的 content
pub fn inspect(span: &str) -> SpanOutcome<'_> {
    let Some(letter) = marked_letter(span) else {
        return SpanOutcome::NoLetter;
    };

    match option_content(span, letter) {
        Some(text) => SpanOutcome::Answer { letter, text },
        None => SpanOutcome::NoContent(letter),
    }
}

/// 提取片段答案，失败时返回 None
pub fn extract(span: &str) -> Option<&str> {
    inspect(span).answer()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_content_of_marked_letter() {
        let span = r#":"B","options":[{"id":"A","content":"Paris"},{"id":"B","content":"London"}],"#;
        assert_eq!(extract(span), Some("London"));
        assert_eq!(
            inspect(span),
            SpanOutcome::Answer {
                letter: OptionLetter::B,
                text: "London"
            }
        );
    }

    #[test]
    fn first_uppercase_a_to_d_is_the_mark() {
        assert_eq!(marked_letter(r#":"xyz D a b c""#), Some(OptionLetter::D));
        assert_eq!(marked_letter("lowercase abcd only"), None);
        assert_eq!(marked_letter("EFG C A"), Some(OptionLetter::C));
    }

    #[test]
    fn no_letter_means_no_answer() {
        let span = r#":"","options":[{"id":"x","content":"nope"}],"#;
        assert_eq!(inspect(span), SpanOutcome::NoLetter);
        assert_eq!(extract(span), None);
    }

    #[test]
    fn letter_without_matching_option_is_no_content() {
        let span = r#":"C","options":[{"id":"A","content":"one"},{"id":"B","content":"two"}],"#;
        assert_eq!(inspect(span), SpanOutcome::NoContent(OptionLetter::C));
        assert_eq!(extract(span), None);
    }

    #[test]
    fn unterminated_content_is_no_content() {
        let span = r#":"A","options":[{"id":"A","content":"broken"#;
        assert_eq!(inspect(span), SpanOutcome::NoContent(OptionLetter::A));
    }

    #[test]
    fn content_may_follow_on_later_lines() {
        let span = ":\"A\",\n{\"id\":\"A\",\n\"score\":1,\n\"content\":\"across lines\"}";
        assert_eq!(extract(span), Some("across lines"));
    }

    #[test]
    fn capture_stops_at_first_quote() {
        let span = r#":"A",{"id":"A","content":"I'm here","extra":"x"}"#;
        assert_eq!(extract(span), Some("I'm here"));
        let empty = r#":"A",{"id":"A","content":""}"#;
        assert_eq!(extract(empty), Some(""));
    }
}
