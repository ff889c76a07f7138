use std::path::Path;

use tracing::info;

use crate::error::{AppError, AppResult};
use crate::models::{Extraction, SourceDocument};
use crate::output::render_numbered;
use crate::utils::logging::report_header;

/// 写出结果报告：抬头、数据文件列表、编号答案
pub async fn write_report(
    path: &Path,
    extraction: &Extraction,
    sources: &[SourceDocument],
) -> AppResult<()> {
    let mut report = report_header("听力答案提取结果");

    report.push_str(&format!("数据文件 ({}):\n", sources.len()));
    for doc in sources {
        report.push_str(&format!("  {} [{}]\n", doc.path.display(), doc.media_key));
    }
    report.push('\n');
    report.push_str(&render_numbered(extraction));
    report.push('\n');

    tokio::fs::write(path, report)
        .await
        .map_err(|e| AppError::file_write_failed(path.display().to_string(), e))?;

    info!("\n结果已保存至: {}", path.display());
    Ok(())
}
