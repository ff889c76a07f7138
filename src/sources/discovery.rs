//! 抓包目录扫描
//!
//! 目录约定：
//!
//! ```text
//! <根目录>/questions/<题目文件夹>/
//!     media/T3-ZC.mp3      音频，给出文件夹序号
//!     net/page.js          优先读取
//!     page.js              net 下没有时读取
//! ```

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{AppError, AppResult, FileError};
use crate::extract::sequence_key::track_key_in_file_name;
use crate::models::{SequenceKey, SourceDocument};

/// 扫描 `<root>/<questions_dir>` 下的所有题目文件夹并读取脚本
///
/// 找不到脚本或读取失败的文件夹只记录警告并跳过。
/// 返回结果按 media 序号稳定排序（无序号排最后）。
pub async fn discover_sources(root: &Path, config: &Config) -> AppResult<Vec<SourceDocument>> {
    let questions = root.join(&config.questions_dir);
    if !is_dir(&questions).await {
        return Err(FileError::DirectoryNotFound {
            path: questions.display().to_string(),
        }
        .into());
    }

    info!("\n📁 正在扫描 {} ...", questions.display());

    let items = list_dir_sorted(&questions)
        .await
        .map_err(|e| AppError::file_read_failed(questions.display().to_string(), e))?;

    let mut candidates = Vec::new();
    for (item, item_is_dir) in items {
        if !item_is_dir {
            continue;
        }

        let media_key = media_hint(&item.join(&config.media_dir)).await;
        match find_script(&item, config).await {
            Some(script) => {
                debug!("{} → {} ({})", item.display(), script.display(), media_key);
                candidates.push((script, media_key));
            }
            None => warn!("⚠️ 文件夹中没有 .{} 文件: {}", config.script_extension, item.display()),
        }
    }

    let contents =
        futures::future::join_all(candidates.iter().map(|(path, _)| fs::read_to_string(path)))
            .await;

    let mut documents = Vec::with_capacity(candidates.len());
    for ((path, media_key), content) in candidates.into_iter().zip(contents) {
        match content {
            Ok(content) => {
                documents.push(SourceDocument::new(path, content).with_media_key(media_key))
            }
            Err(e) => warn!("读取出错: {} - {}", path.display(), e),
        }
    }

    documents.sort_by_key(|doc| doc.media_key);
    Ok(documents)
}

/// media 目录中第一个带序号的文件名
async fn media_hint(media_dir: &Path) -> SequenceKey {
    let Ok(entries) = list_dir_sorted(media_dir).await else {
        return SequenceKey::Unordered;
    };

    entries
        .iter()
        .filter_map(|(path, _)| path.file_name().and_then(|n| n.to_str()))
        .map(track_key_in_file_name)
        .find(|key| key.is_ordered())
        .unwrap_or(SequenceKey::Unordered)
}

/// 优先 `net/*.js`，其次文件夹根目录下的 `*.js`
async fn find_script(item: &Path, config: &Config) -> Option<PathBuf> {
    let net = item.join(&config.net_dir);
    if let Some(found) = first_with_extension(&net, &config.script_extension).await {
        return Some(found);
    }
    first_with_extension(item, &config.script_extension).await
}

async fn first_with_extension(dir: &Path, extension: &str) -> Option<PathBuf> {
    let entries = list_dir_sorted(dir).await.ok()?;
    entries
        .into_iter()
        .filter(|(_, entry_is_dir)| !entry_is_dir)
        .map(|(path, _)| path)
        .find(|path| path.extension().and_then(|e| e.to_str()) == Some(extension))
}

/// 按文件名排序的目录项，附带是否为目录
async fn list_dir_sorted(dir: &Path) -> std::io::Result<Vec<(PathBuf, bool)>> {
    let mut entries = fs::read_dir(dir).await?;
    let mut paths = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let entry_is_dir = entry.file_type().await?.is_dir();
        paths.push((entry.path(), entry_is_dir));
    }
    paths.sort();
    Ok(paths)
}

pub(crate) async fn is_dir(path: &Path) -> bool {
    fs::metadata(path)
        .await
        .map(|meta| meta.is_dir())
        .unwrap_or(false)
}
