//! 环检测
//!
//! 两种检测都用显式栈实现，不受递归深度限制。
//!
//! - 有向图：三色标记（未访问 / 进行中 / 已完成），遇到指向“进行中”顶点的回边即有环
//! - 无向图：记录遍历树中的父顶点，遇到已访问且不是父顶点的邻居即有环

use crate::graph::Adjacency;
use std::collections::{HashMap, HashSet};
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    /// 在当前 DFS 路径上
    InProgress,
    /// 所有后代都已处理完
    Done,
}

/// DFS 栈帧：顶点、它的邻居以及下一个待处理邻居的游标
struct Frame<V> {
    vertex: V,
    neighbors: Vec<V>,
    cursor: usize,
}

impl<V> Frame<V> {
    fn new(vertex: V, neighbors: Vec<V>) -> Self {
        Self {
            vertex,
            neighbors,
            cursor: 0,
        }
    }
}

/// 有向图是否存在环。
///
/// 从每个尚未完成的顶点出发做 DFS，因此不连通的部分也会被检查。
pub fn has_directed_cycle<G>(graph: &G) -> bool
where
    G: Adjacency + ?Sized,
{
    let mut color: HashMap<G::Vertex, Color> = HashMap::new();

    for root in graph.vertex_list() {
        if color.contains_key(&root) {
            continue;
        }

        color.insert(root.clone(), Color::InProgress);
        let mut stack = vec![Frame::new(root.clone(), graph.sorted_neighbors(&root))];

        while let Some(frame) = stack.last_mut() {
            let Some(next) = frame.neighbors.get(frame.cursor).cloned() else {
                color.insert(frame.vertex.clone(), Color::Done);
                stack.pop();
                continue;
            };
            frame.cursor += 1;

            match color.get(&next).copied() {
                Some(Color::InProgress) => {
                    trace!(back_edge_to = ?next, "directed cycle found");
                    return true;
                }
                Some(Color::Done) => {}
                None => {
                    color.insert(next.clone(), Color::InProgress);
                    let neighbors = graph.sorted_neighbors(&next);
                    stack.push(Frame::new(next, neighbors));
                }
            }
        }
    }

    false
}

/// 无向图是否存在环。
///
/// 邻接关系必须对称。沿刚走过的边回到父顶点不算环。
pub fn has_undirected_cycle<G>(graph: &G) -> bool
where
    G: Adjacency + ?Sized,
{
    let mut seen: HashSet<G::Vertex> = HashSet::new();

    for root in graph.vertex_list() {
        if !seen.insert(root.clone()) {
            continue;
        }

        let mut stack: Vec<(G::Vertex, Option<G::Vertex>)> = vec![(root, None)];
        while let Some((vertex, parent)) = stack.pop() {
            for next in graph.sorted_neighbors(&vertex) {
                if parent.as_ref() == Some(&next) {
                    continue;
                }
                if !seen.insert(next.clone()) {
                    trace!(vertex = ?vertex, revisited = ?next, "undirected cycle found");
                    return true;
                }
                stack.push((next, Some(vertex.clone())));
            }
        }
    }

    false
}
