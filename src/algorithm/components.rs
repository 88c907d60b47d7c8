//! 连通分量
//!
//! 对每个尚未访问的顶点发起一次 DFS，每次发起即一个分量。
//! 要求邻接关系对称（无向图）。

use super::traversal;
use crate::graph::Adjacency;
use std::collections::HashSet;
use tracing::trace;

/// 所有连通分量，分量按首顶点的出现顺序排列，分量内为 DFS 访问顺序
pub fn connected_components<G>(graph: &G) -> Vec<Vec<G::Vertex>>
where
    G: Adjacency + ?Sized,
{
    let mut seen: HashSet<G::Vertex> = HashSet::new();
    let mut components = Vec::new();

    for vertex in graph.vertex_list() {
        if seen.contains(&vertex) {
            continue;
        }
        let component = traversal::dfs(graph, &vertex, None);
        seen.extend(component.iter().cloned());
        components.push(component);
    }

    trace!(count = components.len(), "connected components computed");
    components
}

/// 连通分量数量，孤立顶点各自算一个
pub fn count_connected_components<G>(graph: &G) -> usize
where
    G: Adjacency + ?Sized,
{
    connected_components(graph).len()
}
