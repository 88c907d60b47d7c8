//! 示例场景
//!
//! 每个场景构建一张示例图、执行一组操作，并把结果整理成表格形式的报告

use crate::algorithm::shortest_path;
use crate::error::Result;
use crate::graph::{DirectedGraph, UndirectedGraph, WeightedDigraph};
use crate::types::{format_distance, VertexIndex, Weight};
use clap::ValueEnum;
use serde::Serialize;

/// 有向图示例边
pub const DIRECTED_EDGES: [(VertexIndex, VertexIndex, Weight); 7] = [
    (0, 1, 10),
    (4, 0, 12),
    (1, 4, 15),
    (4, 3, 3),
    (3, 1, 5),
    (2, 1, 23),
    (3, 2, 7),
];

/// 无向图示例边
pub const UNDIRECTED_EDGES: [&str; 7] = ["AB", "AC", "BC", "BD", "CD", "CE", "DE"];

/// 无向图遍历示例边
pub const TRAVERSAL_EDGES: [&str; 11] = [
    "AE", "AC", "BE", "CE", "CD", "CB", "BD", "ED", "BH", "QG", "FG",
];

/// 无向图编辑脚本
pub const EDIT_SCRIPT: [&str; 22] = [
    "add QH", "remove FG", "remove GQ", "remove HQ", "remove AE", "remove CA", "remove EB",
    "remove CE", "remove DE", "remove BC", "add EA", "add EF", "add GQ", "add AC", "add DQ",
    "add EG", "add QH", "remove CD", "remove BD", "remove QG", "add FG", "remove GE",
];

/// 可运行的场景
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Scenario {
    /// 所有场景
    All,
    /// 所有有向图场景
    Directed,
    /// 所有无向图场景
    Undirected,
    DirectedBuild,
    DirectedEdges,
    DirectedPath,
    DirectedTraversal,
    DirectedCycle,
    DirectedDijkstra,
    UndirectedBuild,
    UndirectedRemove,
    UndirectedEdges,
    UndirectedPath,
    UndirectedTraversal,
    UndirectedComponents,
    UndirectedCycle,
}

/// 单个具体场景
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Run {
    DirectedBuild,
    DirectedEdges,
    DirectedPath,
    DirectedTraversal,
    DirectedCycle,
    DirectedDijkstra,
    UndirectedBuild,
    UndirectedRemove,
    UndirectedEdges,
    UndirectedPath,
    UndirectedTraversal,
    UndirectedComponents,
    UndirectedCycle,
}

impl Run {
    const DIRECTED: [Run; 6] = [
        Run::DirectedBuild,
        Run::DirectedEdges,
        Run::DirectedPath,
        Run::DirectedTraversal,
        Run::DirectedCycle,
        Run::DirectedDijkstra,
    ];

    const UNDIRECTED: [Run; 7] = [
        Run::UndirectedBuild,
        Run::UndirectedRemove,
        Run::UndirectedEdges,
        Run::UndirectedPath,
        Run::UndirectedTraversal,
        Run::UndirectedComponents,
        Run::UndirectedCycle,
    ];

    fn report(self) -> Result<ScenarioReport> {
        match self {
            Run::DirectedBuild => directed_build(),
            Run::DirectedEdges => directed_edges(),
            Run::DirectedPath => directed_path(),
            Run::DirectedTraversal => directed_traversal(),
            Run::DirectedCycle => directed_cycle(),
            Run::DirectedDijkstra => directed_dijkstra(),
            Run::UndirectedBuild => Ok(undirected_build()),
            Run::UndirectedRemove => Ok(undirected_remove()),
            Run::UndirectedEdges => Ok(undirected_edges()),
            Run::UndirectedPath => Ok(undirected_path()),
            Run::UndirectedTraversal => Ok(undirected_traversal()),
            Run::UndirectedComponents => Ok(undirected_script(false)),
            Run::UndirectedCycle => Ok(undirected_script(true)),
        }
    }
}

impl Scenario {
    /// 场景包含的具体运行，分组按固定顺序展开
    fn runs(self) -> Vec<Run> {
        match self {
            Scenario::All => Run::DIRECTED.iter().chain(&Run::UNDIRECTED).copied().collect(),
            Scenario::Directed => Run::DIRECTED.to_vec(),
            Scenario::Undirected => Run::UNDIRECTED.to_vec(),
            Scenario::DirectedBuild => vec![Run::DirectedBuild],
            Scenario::DirectedEdges => vec![Run::DirectedEdges],
            Scenario::DirectedPath => vec![Run::DirectedPath],
            Scenario::DirectedTraversal => vec![Run::DirectedTraversal],
            Scenario::DirectedCycle => vec![Run::DirectedCycle],
            Scenario::DirectedDijkstra => vec![Run::DirectedDijkstra],
            Scenario::UndirectedBuild => vec![Run::UndirectedBuild],
            Scenario::UndirectedRemove => vec![Run::UndirectedRemove],
            Scenario::UndirectedEdges => vec![Run::UndirectedEdges],
            Scenario::UndirectedPath => vec![Run::UndirectedPath],
            Scenario::UndirectedTraversal => vec![Run::UndirectedTraversal],
            Scenario::UndirectedComponents => vec![Run::UndirectedComponents],
            Scenario::UndirectedCycle => vec![Run::UndirectedCycle],
        }
    }

    /// 执行场景，每个具体运行产生一份报告
    pub fn run(self) -> Result<Vec<ScenarioReport>> {
        self.runs().into_iter().map(Run::report).collect()
    }
}

/// 场景报告
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    pub title: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// 图的文本形式（可选）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rendering: Option<String>,
}

impl ScenarioReport {
    fn new(title: &str, columns: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: Vec::new(),
            rendering: None,
        }
    }

    fn row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    fn with_rendering(mut self, rendering: String) -> Self {
        self.rendering = Some(rendering);
        self
    }
}

fn list<T: ToString>(items: &[T]) -> String {
    let parts: Vec<String> = items.iter().map(ToString::to_string).collect();
    format!("[{}]", parts.join(", "))
}

/// "AB" 形式的边转为标签对
fn split_pair(edge: &str) -> (&str, &str) {
    edge.split_at(1)
}

fn labeled_graph(edges: &[&str]) -> UndirectedGraph {
    UndirectedGraph::from_edges(edges.iter().map(|e| split_pair(e)))
}

fn directed_build() -> Result<ScenarioReport> {
    let mut graph = DirectedGraph::new();
    let mut report = ScenarioReport::new("有向图: add_vertex / add_edge", &["操作", "结果"]);

    for _ in 0..5 {
        let count = graph.add_vertex();
        report.row(vec!["add_vertex".into(), count.to_string()]);
    }
    for (src, dst, weight) in DIRECTED_EDGES {
        graph.add_edge(src, dst, weight)?;
        report.row(vec![
            format!("add_edge({}, {}, {})", src, dst, weight),
            "ok".into(),
        ]);
    }
    Ok(report.with_rendering(graph.to_string()))
}

fn directed_edges() -> Result<ScenarioReport> {
    let mut report = ScenarioReport::new("有向图: get_edges / get_vertices", &["图", "边", "顶点"]);

    let empty = DirectedGraph::new();
    report.row(vec![
        "空图".into(),
        list(&empty.edges()),
        list(&empty.vertices()),
    ]);

    let graph = DirectedGraph::from_edges(DIRECTED_EDGES)?;
    report.row(vec![
        "示例图".into(),
        list(&graph.edges()),
        list(&graph.vertices()),
    ]);
    Ok(report)
}

fn directed_path() -> Result<ScenarioReport> {
    let graph = DirectedGraph::from_edges(DIRECTED_EDGES)?;
    let mut report = ScenarioReport::new("有向图: is_valid_path", &["路径", "合法"]);

    let cases: [&[VertexIndex]; 6] = [&[0, 1, 4, 3], &[1, 3, 2, 1], &[0, 4], &[4, 0], &[], &[2]];
    for path in cases {
        report.row(vec![list(path), graph.is_valid_path(path).to_string()]);
    }
    Ok(report)
}

fn directed_traversal() -> Result<ScenarioReport> {
    let graph = DirectedGraph::from_edges(DIRECTED_EDGES)?;
    let mut report = ScenarioReport::new("有向图: dfs / bfs", &["起点", "DFS", "BFS"]);

    for start in graph.vertices() {
        report.row(vec![
            start.to_string(),
            list(&graph.dfs(start, None)),
            list(&graph.bfs(start, None)),
        ]);
    }
    Ok(report)
}

fn directed_cycle() -> Result<ScenarioReport> {
    let mut graph = DirectedGraph::from_edges(DIRECTED_EDGES)?;
    let mut report = ScenarioReport::new("有向图: has_cycle", &["操作", "边", "有环"]);

    for (src, dst) in [(3, 1), (4, 0), (3, 2)] {
        graph.remove_edge(src, dst);
        report.row(vec![
            format!("remove {} -> {}", src, dst),
            list(&graph.edges()),
            graph.has_cycle().to_string(),
        ]);
    }
    for (src, dst) in [(4, 3), (2, 3), (1, 3), (4, 0)] {
        graph.add_edge(src, dst, 1)?;
        report.row(vec![
            format!("add {} -> {}", src, dst),
            list(&graph.edges()),
            graph.has_cycle().to_string(),
        ]);
    }
    Ok(report.with_rendering(graph.to_string()))
}

fn directed_dijkstra() -> Result<ScenarioReport> {
    let mut graph = DirectedGraph::from_edges(DIRECTED_EDGES)?;
    let mut report = ScenarioReport::new("有向图: dijkstra", &["图", "起点", "距离", "到 2 的路径"]);

    for label in ["示例图", "删除 4 -> 3 后"] {
        for src in graph.vertices() {
            let distances: Vec<String> = graph
                .dijkstra(src)
                .into_iter()
                .map(format_distance)
                .collect();
            let path = shortest_path(&graph, src, 2)
                .map(|p| format!("{} (权重 {})", list(&p.vertices), p.total_weight))
                .unwrap_or_else(|| "不可达".to_string());
            report.row(vec![label.into(), src.to_string(), list(&distances), path]);
        }
        graph.remove_edge(4, 3);
    }
    Ok(report)
}

fn undirected_build() -> ScenarioReport {
    let mut graph = UndirectedGraph::new();
    let mut report = ScenarioReport::new("无向图: add_vertex / add_edge", &["操作", "顶点数", "边数"]);

    for v in ["A", "B", "C", "D", "E", "A"] {
        graph.add_vertex(v);
        report.row(vec![
            format!("add_vertex {}", v),
            graph.vertex_count().to_string(),
            graph.edge_count().to_string(),
        ]);
    }
    for edge in UNDIRECTED_EDGES.iter().chain(&["BC"]) {
        let (u, v) = split_pair(edge);
        graph.add_edge(u, v);
        report.row(vec![
            format!("add_edge {}-{}", u, v),
            graph.vertex_count().to_string(),
            graph.edge_count().to_string(),
        ]);
    }
    report.with_rendering(graph.to_string())
}

fn undirected_remove() -> ScenarioReport {
    let mut graph = labeled_graph(&UNDIRECTED_EDGES);
    let mut report = ScenarioReport::new("无向图: remove_edge / remove_vertex", &["操作", "图"]);

    graph.remove_vertex("DOES NOT EXIST");
    report.row(vec!["remove_vertex DOES NOT EXIST".into(), graph.to_string()]);
    graph.remove_edge("A", "B");
    report.row(vec!["remove_edge A-B".into(), graph.to_string()]);
    graph.remove_edge("X", "B");
    report.row(vec!["remove_edge X-B".into(), graph.to_string()]);
    graph.remove_vertex("D");
    report.row(vec!["remove_vertex D".into(), graph.to_string()]);
    report
}

fn undirected_edges() -> ScenarioReport {
    let mut report = ScenarioReport::new("无向图: get_edges / get_vertices", &["图", "边", "顶点"]);

    for (label, graph) in [
        ("空图", UndirectedGraph::new()),
        ("示例图", labeled_graph(&UNDIRECTED_EDGES[..6])),
    ] {
        report.row(vec![
            label.into(),
            list(&graph.edges()),
            list(&graph.vertices()),
        ]);
    }
    report
}

fn undirected_path() -> ScenarioReport {
    let graph = labeled_graph(&UNDIRECTED_EDGES);
    let mut report = ScenarioReport::new("无向图: is_valid_path", &["路径", "合法"]);

    for path in ["ABC", "ADE", "ECABDCBE", "ACDECB", "", "D", "Z"] {
        let labels: Vec<String> = path.chars().map(String::from).collect();
        report.row(vec![list(&labels), graph.is_valid_path(&labels).to_string()]);
    }
    report
}

fn undirected_traversal() -> ScenarioReport {
    let graph = labeled_graph(&TRAVERSAL_EDGES);
    let mut report = ScenarioReport::new("无向图: dfs / bfs", &["起点", "终点", "DFS", "BFS"]);

    let starts = ["A", "B", "C", "D", "E", "G", "H"];
    for start in starts {
        report.row(vec![
            start.into(),
            "-".into(),
            list(&graph.dfs(start, None)),
            list(&graph.bfs(start, None)),
        ]);
    }
    for i in 1..starts.len() {
        let (start, end) = (starts[i], starts[starts.len() - 1 - i]);
        report.row(vec![
            start.into(),
            end.into(),
            list(&graph.dfs(start, Some(end))),
            list(&graph.bfs(start, Some(end))),
        ]);
    }
    report
}

/// 执行编辑脚本，每步后记录连通分量数量或是否有环
fn undirected_script(cycle: bool) -> ScenarioReport {
    let mut graph = labeled_graph(&TRAVERSAL_EDGES);
    let (title, column) = if cycle {
        ("无向图: has_cycle", "有环")
    } else {
        ("无向图: count_connected_components", "分量数")
    };
    let mut report = ScenarioReport::new(title, &["操作", column]);

    // 连通分量场景不包含最后两步
    let steps = if cycle { EDIT_SCRIPT.len() } else { EDIT_SCRIPT.len() - 2 };
    for case in &EDIT_SCRIPT[..steps] {
        let Some((command, edge)) = case.split_once(' ') else {
            continue;
        };
        let (u, v) = split_pair(edge);
        if command == "add" {
            graph.add_edge(u, v);
        } else {
            graph.remove_edge(u, v);
        }
        let value = if cycle {
            graph.has_cycle().to_string()
        } else {
            graph.count_connected_components().to_string()
        };
        report.row(vec![case.to_string(), value]);
    }
    report
}
