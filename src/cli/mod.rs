//! 演示程序支持模块

mod printer;
mod scenarios;

pub use printer::{OutputFormat, Printer};
pub use scenarios::{
    Scenario, ScenarioReport, DIRECTED_EDGES, EDIT_SCRIPT, TRAVERSAL_EDGES, UNDIRECTED_EDGES,
};

/// 演示程序配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// 要运行的场景
    pub scenario: Scenario,
    /// 输出格式
    pub format: OutputFormat,
    /// 日志级别（tracing EnvFilter 语法）
    pub log_level: String,
    /// 标题是否着色
    pub color: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            scenario: Scenario::All,
            format: OutputFormat::Table,
            log_level: "warn".to_string(),
            color: true,
        }
    }
}

impl DemoConfig {
    /// 按配置运行所有场景并渲染输出
    pub fn run(&self) -> crate::Result<String> {
        let reports = self.scenario.run()?;

        let mut printer = Printer::new(self.format);
        if !self.color {
            printer = printer.without_color();
        }
        printer.render_all(&reports)
    }
}
