//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `app` - 应用入口
//! - 决定数据来源（扫描目录 / 单文件 / 备用文件）
//! - 读取文件、调用流水线、写报告、输出统计
//!
//! ### `pipeline` - 提取流水线
//! - 切分单元，逐个交给 `workflow::process_unit`
//! - 汇总计数，全局排序展平
//!
//! ## 层次关系
//!
//! ```text
//! app (文件 → 文本)
//!     ↓
//! pipeline (文本 → 单元 → 最终序列)
//!     ↓
//! workflow::process_unit (单个单元)
//!     ↓
//! extract (能力层：segment / key / span / option / aggregate)
//! ```

pub mod app;
pub mod pipeline;

pub use app::{App, SourceMode};
pub use pipeline::{extract_from_corpus, run};
