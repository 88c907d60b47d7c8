//! 深度优先 / 广度优先遍历
//!
//! 两种遍历都在出栈（出队）时判重并记录访问顺序，同一顶点可能被多次入栈，
//! 但只会被访问一次。邻居按 [`Adjacency::sorted_neighbors`] 的升序处理：
//! DFS 逆序压栈，使弹出顺序为升序；BFS 直接按升序入队。

use crate::graph::Adjacency;
use std::collections::{HashSet, VecDeque};
use tracing::trace;

/// 迭代式深度优先遍历。
///
/// 起点不存在时返回空序列；访问到 `end` 时立即返回已访问的序列。
pub fn dfs<G>(graph: &G, start: &G::Vertex, end: Option<&G::Vertex>) -> Vec<G::Vertex>
where
    G: Adjacency + ?Sized,
{
    if !graph.has_vertex(start) {
        return Vec::new();
    }

    let mut visited = Vec::new();
    let mut seen = HashSet::new();
    let mut stack = vec![start.clone()];

    while let Some(vertex) = stack.pop() {
        if !seen.insert(vertex.clone()) {
            continue;
        }
        visited.push(vertex.clone());
        if end == Some(&vertex) {
            break;
        }

        for next in graph.sorted_neighbors(&vertex).into_iter().rev() {
            if !seen.contains(&next) {
                stack.push(next);
            }
        }
    }

    trace!(start = ?start, visited = visited.len(), "dfs finished");
    visited
}

/// 广度优先遍历，语义同 [`dfs`]，使用 FIFO 队列
pub fn bfs<G>(graph: &G, start: &G::Vertex, end: Option<&G::Vertex>) -> Vec<G::Vertex>
where
    G: Adjacency + ?Sized,
{
    if !graph.has_vertex(start) {
        return Vec::new();
    }

    let mut visited = Vec::new();
    let mut seen = HashSet::new();
    let mut queue = VecDeque::from([start.clone()]);

    while let Some(vertex) = queue.pop_front() {
        if !seen.insert(vertex.clone()) {
            continue;
        }
        visited.push(vertex.clone());
        if end == Some(&vertex) {
            break;
        }

        for next in graph.sorted_neighbors(&vertex) {
            if !seen.contains(&next) {
                queue.push_back(next);
            }
        }
    }

    trace!(start = ?start, visited = visited.len(), "bfs finished");
    visited
}
