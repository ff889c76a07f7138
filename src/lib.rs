//! # Listening Answer Extract
//!
//! 从抓包得到的听力题脚本中提取正确选项文本，并按听力材料顺序输出
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Sources）
//! - `sources/` - 找到并读取脚本文件，不解析内容
//! - `discover_sources` - 扫描 questions 目录
//! - `load_fallback` - 单文件模式（combined.js / page1.js）
//!
//! ### ② 能力层（Extract）
//! - `extract/` - 相互独立的匹配步骤，每步单独失败
//! - `segment` / `resolve_key` / `find_spans` / `extract` / `aggregate`
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一个数据块"的处理流程，纯函数
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/pipeline` - 切分、逐块处理、全局排序
//! - `orchestrator/app` - 读取 → 提取 → 报告
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod extract;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod output;
pub mod sources;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{Extraction, ExtractionStats, ResultEntry, SequenceKey, SourceDocument};
pub use orchestrator::{extract_from_corpus, App, SourceMode};
pub use workflow::{process_unit, UnitOutcome};
