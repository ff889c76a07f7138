use super::unit::SequenceKey;
use std::path::PathBuf;

/// 一个已读取的脚本文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    pub path: PathBuf,
    pub content: String,
    /// 所在题目文件夹 media 目录给出的序号，仅用于拼接顺序
    pub media_key: SequenceKey,
}

impl SourceDocument {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            media_key: SequenceKey::Unordered,
        }
    }

    pub fn with_media_key(mut self, key: SequenceKey) -> Self {
        self.media_key = key;
        self
    }
}

/// 按给定顺序拼接所有文件内容，每个文件后追加换行
pub fn concat_corpus(documents: &[SourceDocument]) -> String {
    let capacity = documents.iter().map(|d| d.content.len() + 1).sum();
    let mut corpus = String::with_capacity(capacity);
    for doc in documents {
        corpus.push_str(&doc.content);
        corpus.push('\n');
    }
    corpus
}
