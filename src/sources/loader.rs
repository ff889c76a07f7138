use std::io::ErrorKind;
use std::path::Path;

use tokio::fs;
use tracing::info;

use crate::config::Config;
use crate::error::{AppError, AppResult, FileError};
use crate::models::SourceDocument;

/// 读取单个脚本文件
pub async fn load_file(path: &Path) -> AppResult<SourceDocument> {
    match fs::read_to_string(path).await {
        Ok(content) => {
            info!("成功读取{}文件", path.display());
            Ok(SourceDocument::new(path, content))
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Err(FileError::NotFound {
            path: path.display().to_string(),
        }
        .into()),
        Err(e) => Err(AppError::file_read_failed(path.display().to_string(), e)),
    }
}

/// 在目录中依次尝试配置的文件名（默认 combined.js，然后 page1.js）
///
/// 全部不存在时返回 `FileError::NotFound`，路径中列出所有尝试过的文件。
pub async fn load_fallback(dir: &Path, config: &Config) -> AppResult<SourceDocument> {
    let mut tried = Vec::with_capacity(config.fallback_files.len());

    for name in &config.fallback_files {
        let path = dir.join(name);
        match load_file(&path).await {
            Ok(doc) => return Ok(doc),
            Err(AppError::File(FileError::NotFound { .. })) => {
                info!("{}文件不存在，尝试下一个...", name);
                tried.push(path.display().to_string());
            }
            Err(e) => return Err(e),
        }
    }

    Err(FileError::NotFound {
        path: tried.join(", "),
    }
    .into())
}
