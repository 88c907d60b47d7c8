//! 无向无权图
//!
//! 邻接表存储：顶点标签映射到按插入顺序排列的邻居序列。
//! 始终保持对称性：`v ∈ adjacency[u]` 当且仅当 `u ∈ adjacency[v]`，且没有自环。

use super::traits::Adjacency;
use crate::algorithm::{components, cycle, traversal};
use crate::types::UndirectedEdge;
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use tracing::debug;

/// 单行输出的最大长度，超过后每个顶点单独一行
const INLINE_WIDTH: usize = 70;

/// 无向图（邻接表存储），序列化为按插入顺序排列的邻接映射
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct UndirectedGraph {
    adjacency: IndexMap<String, Vec<String>>,
}

impl UndirectedGraph {
    /// 创建空图
    pub fn new() -> Self {
        Self::default()
    }

    /// 从边列表构建图，每条边都走 [`add_edge`](Self::add_edge)
    pub fn from_edges<I, S>(edges: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let mut graph = Self::new();
        for (u, v) in edges {
            graph.add_edge(u.as_ref(), v.as_ref());
        }
        graph
    }

    /// 添加顶点，已存在时不做任何事
    pub fn add_vertex(&mut self, vertex: &str) {
        if !self.adjacency.contains_key(vertex) {
            self.adjacency.insert(vertex.to_string(), Vec::new());
        }
    }

    /// 添加边 `u - v`，端点不存在时自动创建；自环被忽略，重复边不会重复插入
    pub fn add_edge(&mut self, u: &str, v: &str) {
        if u == v {
            debug!(vertex = u, "ignored self loop");
            return;
        }
        self.add_vertex(u);
        self.add_vertex(v);
        link(&mut self.adjacency, u, v);
        link(&mut self.adjacency, v, u);
    }

    /// 删除边，任一端点不存在或边不存在时不做任何事
    pub fn remove_edge(&mut self, u: &str, v: &str) {
        if !self.adjacency.contains_key(u) || !self.adjacency.contains_key(v) {
            debug!(u, v, "remove_edge on absent vertex");
            return;
        }
        unlink(&mut self.adjacency, u, v);
        unlink(&mut self.adjacency, v, u);
    }

    /// 删除顶点及其全部关联边
    pub fn remove_vertex(&mut self, vertex: &str) {
        let Some(neighbors) = self.adjacency.shift_remove(vertex) else {
            debug!(vertex, "remove_vertex on absent vertex");
            return;
        };
        for neighbor in &neighbors {
            unlink(&mut self.adjacency, neighbor, vertex);
        }
    }

    /// 所有顶点（插入顺序）
    pub fn vertices(&self) -> Vec<String> {
        self.adjacency.keys().cloned().collect()
    }

    /// 所有边，每条无向边只出现一次
    pub fn edges(&self) -> Vec<UndirectedEdge> {
        let mut emitted: HashSet<(&str, &str)> = HashSet::new();
        let mut edges = Vec::new();
        for (u, neighbors) in &self.adjacency {
            for v in neighbors {
                if emitted.contains(&(v.as_str(), u.as_str())) {
                    continue;
                }
                emitted.insert((u.as_str(), v.as_str()));
                edges.push(UndirectedEdge::new(u.as_str(), v.as_str()));
            }
        }
        edges
    }

    /// 顶点的邻居副本（插入顺序），顶点不存在时为空
    pub fn neighbors(&self, vertex: &str) -> Vec<String> {
        self.adjacency.get(vertex).cloned().unwrap_or_default()
    }

    pub fn contains_vertex(&self, vertex: &str) -> bool {
        self.adjacency.contains_key(vertex)
    }

    pub fn has_edge(&self, u: &str, v: &str) -> bool {
        self.adjacency
            .get(u)
            .is_some_and(|neighbors| neighbors.iter().any(|n| n == v))
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    /// 路径合法性：空路径合法；否则首顶点必须存在，且相邻顶点之间都有边
    pub fn is_valid_path<S: AsRef<str>>(&self, path: &[S]) -> bool {
        let Some(first) = path.first() else {
            return true;
        };
        self.contains_vertex(first.as_ref())
            && path
                .windows(2)
                .all(|pair| self.has_edge(pair[0].as_ref(), pair[1].as_ref()))
    }

    /// 深度优先遍历，邻居按字母序访问；起点不存在时返回空
    pub fn dfs(&self, start: &str, end: Option<&str>) -> Vec<String> {
        let end = end.map(str::to_string);
        traversal::dfs(self, &start.to_string(), end.as_ref())
    }

    /// 广度优先遍历，邻居按字母序入队；起点不存在时返回空
    pub fn bfs(&self, start: &str, end: Option<&str>) -> Vec<String> {
        let end = end.map(str::to_string);
        traversal::bfs(self, &start.to_string(), end.as_ref())
    }

    /// 连通分量数量，孤立顶点各自算一个分量
    pub fn count_connected_components(&self) -> usize {
        components::count_connected_components(self)
    }

    /// 各连通分量的顶点（按遍历顺序）
    pub fn connected_components(&self) -> Vec<Vec<String>> {
        components::connected_components(self)
    }

    /// 是否存在环（忽略沿刚走过的边立即返回的情况）
    pub fn has_cycle(&self) -> bool {
        cycle::has_undirected_cycle(self)
    }
}

fn link(adjacency: &mut IndexMap<String, Vec<String>>, from: &str, to: &str) {
    if let Some(neighbors) = adjacency.get_mut(from) {
        if !neighbors.iter().any(|n| n == to) {
            neighbors.push(to.to_string());
        }
    }
}

fn unlink(adjacency: &mut IndexMap<String, Vec<String>>, from: &str, to: &str) {
    if let Some(neighbors) = adjacency.get_mut(from) {
        neighbors.retain(|n| n != to);
    }
}

impl Adjacency for UndirectedGraph {
    type Vertex = String;

    fn has_vertex(&self, vertex: &String) -> bool {
        self.adjacency.contains_key(vertex.as_str())
    }

    fn vertex_list(&self) -> Vec<String> {
        self.vertices()
    }

    fn sorted_neighbors(&self, vertex: &String) -> Vec<String> {
        let mut neighbors = self.neighbors(vertex);
        neighbors.sort();
        neighbors
    }
}

impl fmt::Display for UndirectedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries: Vec<String> = self
            .adjacency
            .iter()
            .map(|(vertex, neighbors)| format!("{}: [{}]", vertex, neighbors.join(", ")))
            .collect();

        let inline = entries.join(", ");
        if inline.len() < INLINE_WIDTH {
            write!(f, "GRAPH: {{{}}}", inline)
        } else {
            write!(f, "GRAPH: {{\n  {}}}", entries.join("\n  "))
        }
    }
}
