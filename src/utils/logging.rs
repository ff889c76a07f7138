//! 日志工具模块
//!
//! 提供日志格式化和输出的辅助函数

use crate::models::{Extraction, SourceDocument};
use tracing::info;

/// 报告文件的抬头
pub fn report_header(title: &str) -> String {
    format!(
        "{}\n{} - {}\n{}\n\n",
        "=".repeat(60),
        title,
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(60)
    )
}

/// 记录程序启动信息
///
/// # 参数
/// - `mode`: 数据来源模式的描述
pub fn log_startup(mode: &str) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 听力答案提取");
    info!("📂 数据来源: {}", mode);
    info!("{}", "=".repeat(60));
}

/// 记录数据文件加载信息
///
/// # 参数
/// - `sources`: 已读取的文件列表
pub fn log_sources_loaded(sources: &[SourceDocument]) {
    info!("✓ 成功读取 {} 个数据文件", sources.len());
    for (i, doc) in sources.iter().enumerate() {
        info!(
            "  {}. {} ({}, {} 字节)",
            i + 1,
            doc.path.display(),
            doc.media_key,
            doc.content.len()
        );
    }
}

/// 打印最终统计信息
///
/// # 参数
/// - `extraction`: 提取结果
pub fn print_final_stats(extraction: &Extraction) {
    let stats = &extraction.stats;
    info!("\n{}", "=".repeat(60));
    info!("📊 提取完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("📦 数据块: {} (无序号 {})", stats.units_total, stats.units_unordered);
    info!(
        "🧩 小题片段: {} (跳过 {})",
        stats.spans_total,
        stats.spans_skipped()
    );
    info!("✅ 答案: {}", stats.answers_total);
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_by_chars() {
        assert_eq!(truncate_text("听力答案提取", 2), "听力...");
        assert_eq!(truncate_text("short", 10), "short");
    }
}
