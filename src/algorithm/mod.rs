//! 图算法模块
//!
//! 包含遍历、环检测、连通分量和最短路径算法，全部基于
//! [`Adjacency`](crate::graph::Adjacency) / [`WeightedDigraph`](crate::graph::WeightedDigraph) 实现

pub mod components;
pub mod cycle;
pub mod shortest_path;
pub mod traversal;

pub use components::{connected_components, count_connected_components};
pub use cycle::{has_directed_cycle, has_undirected_cycle};
pub use shortest_path::{dijkstra, shortest_path, PathResult};
pub use traversal::{bfs, dfs};
