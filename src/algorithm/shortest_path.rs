//! Dijkstra 单源最短路径
//!
//! 权重恒为正，顶点第一次以最小键出队时距离即确定，之后不再松弛。

use crate::graph::WeightedDigraph;
use crate::types::{Distance, VertexIndex, Weight};
use priority_queue::PriorityQueue;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use tracing::trace;

/// 路径结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathResult {
    /// 路径上的顶点序列（含起点和终点）
    pub vertices: Vec<VertexIndex>,
    /// 路径上的边数
    pub length: usize,
    /// 路径总权重
    pub total_weight: Weight,
}

/// 一次完整松弛的结果
struct ShortestPathTree {
    /// 已确定的最短距离，不可达为 `None`
    dist: Vec<Option<Weight>>,
    /// 最短路径树中的前驱
    prev: Vec<Option<VertexIndex>>,
}

fn relax_from<G>(graph: &G, src: VertexIndex) -> ShortestPathTree
where
    G: WeightedDigraph + ?Sized,
{
    let n = graph.vertex_count();
    let mut tree = ShortestPathTree {
        dist: vec![None; n],
        prev: vec![None; n],
    };
    if src >= n {
        return tree;
    }

    let mut settled = vec![false; n];
    let mut queue: PriorityQueue<VertexIndex, Reverse<Weight>> = PriorityQueue::new();
    let mut relaxations = 0usize;

    tree.dist[src] = Some(0);
    queue.push(src, Reverse(0));

    while let Some((vertex, Reverse(distance))) = queue.pop() {
        settled[vertex] = true;

        for (next, weight) in graph.weighted_successors(vertex) {
            if settled[next] {
                continue;
            }
            let candidate = distance.saturating_add(weight);
            if tree.dist[next].map_or(true, |current| candidate < current) {
                tree.dist[next] = Some(candidate);
                tree.prev[next] = Some(vertex);
                queue.push_increase(next, Reverse(candidate));
                relaxations += 1;
            }
        }
    }

    trace!(src, relaxations, "dijkstra finished");
    tree
}

/// 从 `src` 出发到每个顶点的最短距离，按顶点编号索引。
///
/// 不可达顶点为 `f64::INFINITY`；`src` 越界时所有距离均为无穷大。
pub fn dijkstra<G>(graph: &G, src: VertexIndex) -> Vec<Distance>
where
    G: WeightedDigraph + ?Sized,
{
    relax_from(graph, src)
        .dist
        .into_iter()
        .map(|d| d.map_or(f64::INFINITY, |d| d as Distance))
        .collect()
}

/// `src` 到 `dst` 的一条最短路径，不可达返回 `None`
pub fn shortest_path<G>(graph: &G, src: VertexIndex, dst: VertexIndex) -> Option<PathResult>
where
    G: WeightedDigraph + ?Sized,
{
    let tree = relax_from(graph, src);
    let total_weight = (*tree.dist.get(dst)?)?;

    let mut vertices = vec![dst];
    let mut current = dst;
    while current != src {
        current = tree.prev[current]?;
        vertices.push(current);
    }
    vertices.reverse();

    Some(PathResult {
        length: vertices.len() - 1,
        vertices,
        total_weight,
    })
}
