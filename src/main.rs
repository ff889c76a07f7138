use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use listening_answer_extract::output::{render_json, render_numbered};
use listening_answer_extract::{logger, App, Config, SourceMode};

#[derive(Parser)]
#[command(name = "listening-answers")]
#[command(about = "从听力题脚本中提取答案并按材料顺序输出")]
#[command(version)]
struct Cli {
    /// 抓包根目录（含 questions 文件夹）、单个脚本文件，或含 combined.js 的目录
    path: Option<PathBuf>,

    /// TOML 配置文件
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 以 JSON 输出答案和统计
    #[arg(long)]
    json: bool,

    /// 同时写出结果报告文件
    #[arg(long)]
    report: bool,

    /// 显示详细日志
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 加载配置：文件 → 环境变量 → 命令行
    let base = match &cli.config {
        Some(path) => Config::from_toml_file(path)
            .await
            .with_context(|| format!("无法加载配置文件: {}", path.display()))?,
        None => Config::default(),
    };
    let mut config = base.with_env_overrides()?;
    config.verbose_logging |= cli.verbose;
    config.write_report |= cli.report;

    // 初始化日志
    logger::init(config.verbose_logging);

    let mode = SourceMode::from_path(cli.path, &config).await;
    let extraction = App::new(config, mode).run().await.context("提取失败")?;

    let rendered = if cli.json {
        render_json(&extraction)?
    } else {
        render_numbered(&extraction)
    };
    println!("{}", rendered);

    Ok(())
}
