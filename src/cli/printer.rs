//! 报告打印器
//!
//! 提供表格和 JSON 两种输出格式

use super::scenarios::ScenarioReport;
use crate::error::{Error, Result};
use clap::ValueEnum;
use colored::Colorize;
use prettytable::{format, Cell, Row, Table};

/// 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// 表格
    Table,
    /// JSON
    Json,
}

/// 报告打印器
pub struct Printer {
    format: OutputFormat,
    color: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(OutputFormat::Table)
    }
}

impl Printer {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: true,
        }
    }

    /// 关闭标题着色
    pub fn without_color(mut self) -> Self {
        self.color = false;
        self
    }

    /// 渲染一份报告
    pub fn render(&self, report: &ScenarioReport) -> Result<String> {
        match self.format {
            OutputFormat::Table => Ok(self.format_table(report)),
            OutputFormat::Json => serde_json::to_string_pretty(report)
                .map_err(|e| Error::SerializationError(e.to_string())),
        }
    }

    /// 渲染多份报告；JSON 模式下输出为一个数组
    pub fn render_all(&self, reports: &[ScenarioReport]) -> Result<String> {
        match self.format {
            OutputFormat::Table => Ok(reports
                .iter()
                .map(|r| self.format_table(r))
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Json => serde_json::to_string_pretty(reports)
                .map_err(|e| Error::SerializationError(e.to_string())),
        }
    }

    fn format_table(&self, report: &ScenarioReport) -> String {
        let mut output = String::new();

        let title = format!("== {} ==", report.title);
        if self.color {
            output.push_str(&title.bold().cyan().to_string());
        } else {
            output.push_str(&title);
        }
        output.push('\n');

        if let Some(rendering) = &report.rendering {
            output.push_str(rendering);
            if !rendering.ends_with('\n') {
                output.push('\n');
            }
        }

        if report.rows.is_empty() {
            output.push_str("Empty set\n");
            return output;
        }

        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(Row::new(
            report.columns.iter().map(|c| Cell::new(c)).collect(),
        ));
        for row_data in &report.rows {
            table.add_row(Row::new(row_data.iter().map(|v| Cell::new(v)).collect()));
        }

        output.push_str(&table.to_string());
        output.push_str(&format!("{} row(s)\n", report.rows.len()));
        output
    }
}
