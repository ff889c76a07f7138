//! 结果展示

pub mod render;
pub mod report;

pub use render::{render_json, render_numbered, NOTHING_EXTRACTED};
pub use report::write_report;
