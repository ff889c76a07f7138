//! 数据来源（基础设施层）
//!
//! 只负责找到并读取文件，不做任何内容解析。

pub mod discovery;
pub mod loader;

pub use discovery::discover_sources;
pub use loader::{load_fallback, load_file};
