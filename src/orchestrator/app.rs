use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::config::Config;
use crate::error::{AppError, AppResult, FileError};
use crate::models::{Extraction, SourceDocument};
use crate::orchestrator::pipeline;
use crate::output::write_report;
use crate::sources::discovery::is_dir;
use crate::sources::{discover_sources, load_fallback, load_file};
use crate::utils::logging::{log_sources_loaded, log_startup, print_final_stats};

/// 数据来源模式
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceMode {
    /// 扫描 `<root>/questions/*`
    Discover(PathBuf),
    /// 读取指定文件
    File(PathBuf),
    /// 在目录中依次尝试 combined.js / page1.js
    Fallback(PathBuf),
}

impl SourceMode {
    /// 根据命令行路径决定模式
    ///
    /// 目录下存在 questions 文件夹时扫描，否则在该目录中查找备用文件；
    /// 没有给出路径时使用当前目录的备用文件。
    pub async fn from_path(path: Option<PathBuf>, config: &Config) -> Self {
        let Some(path) = path else {
            return SourceMode::Fallback(PathBuf::from("."));
        };

        match tokio::fs::metadata(&path).await {
            Ok(meta) if meta.is_dir() => {
                if is_dir(&path.join(&config.questions_dir)).await {
                    SourceMode::Discover(path)
                } else {
                    SourceMode::Fallback(path)
                }
            }
            _ => SourceMode::File(path),
        }
    }
}

impl fmt::Display for SourceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceMode::Discover(root) => write!(f, "扫描目录 {}", root.display()),
            SourceMode::File(path) => write!(f, "单个文件 {}", path.display()),
            SourceMode::Fallback(dir) => write!(f, "备用文件 ({})", dir.display()),
        }
    }
}

/// 应用主结构
pub struct App {
    config: Config,
    mode: SourceMode,
}

impl App {
    pub fn new(config: Config, mode: SourceMode) -> Self {
        Self { config, mode }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// 读取数据 → 提取 → （可选）写报告
    pub async fn run(&self) -> AppResult<Extraction> {
        log_startup(&self.mode.to_string());

        let sources = self.load_sources().await?;
        log_sources_loaded(&sources);

        let extraction = pipeline::run(&sources)?;
        print_final_stats(&extraction);

        if self.config.write_report {
            write_report(Path::new(&self.config.output_log_file), &extraction, &sources).await?;
        }

        Ok(extraction)
    }

    /// 按模式读取数据文件
    ///
    /// 备用文件一个都不存在时返回空列表，由流水线报告“没有输入”。
    pub async fn load_sources(&self) -> AppResult<Vec<SourceDocument>> {
        let sources = match &self.mode {
            SourceMode::Discover(root) => discover_sources(root, &self.config).await,
            SourceMode::File(path) => Ok(vec![load_file(path).await?]),
            SourceMode::Fallback(dir) => match load_fallback(dir, &self.config).await {
                Ok(doc) => Ok(vec![doc]),
                Err(AppError::File(FileError::NotFound { path })) => {
                    warn!("⚠️ 未找到任何备用数据文件: {}", path);
                    Ok(Vec::new())
                }
                Err(e) => Err(e),
            },
        }?;

        info!("共 {} 个数据文件", sources.len());
        Ok(sources)
    }
}
