//! GraphKit 演示程序
//!
//! 在示例图上运行各项操作并打印结果

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use graphkit::cli::{DemoConfig, OutputFormat, Scenario};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "graphkit-demo")]
#[command(about = "GraphKit 图算法演示")]
#[command(version = graphkit::VERSION)]
struct Args {
    /// 要运行的场景
    #[arg(short, long, value_enum, default_value = "all")]
    scenario: Scenario,

    /// 输出格式
    #[arg(short, long, value_enum, default_value = "table")]
    format: OutputFormat,

    /// 日志级别，未设置时读取 RUST_LOG
    #[arg(short, long)]
    log_level: Option<String>,

    /// 关闭彩色输出
    #[arg(long)]
    no_color: bool,
}

impl Args {
    fn into_config(self) -> DemoConfig {
        let defaults = DemoConfig::default();
        let log_level = self
            .log_level
            .or_else(|| std::env::var(EnvFilter::DEFAULT_ENV).ok())
            .unwrap_or(defaults.log_level);

        DemoConfig {
            scenario: self.scenario,
            format: self.format,
            log_level,
            color: !self.no_color,
        }
    }
}

fn main() -> Result<()> {
    let config = Args::parse().into_config();

    let filter = EnvFilter::try_new(&config.log_level)
        .with_context(|| format!("无效的日志级别: {}", config.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if !config.color {
        colored::control::set_override(false);
    }

    info!(scenario = ?config.scenario, format = ?config.format, "running demo");

    if config.format == OutputFormat::Table {
        println!("{}", format!("GraphKit v{}", graphkit::VERSION).bold());
        println!("=====================");
    }

    let output = config.run().context("场景执行失败")?;
    println!("{}", output);
    Ok(())
}
