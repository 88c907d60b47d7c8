//! GraphKit - 图模型与图算法库
//!
//! 提供两种互相独立的图模型：
//! - 有向带权图（邻接矩阵 / 邻接映射），支持 DFS、BFS、环检测和 Dijkstra 最短路径
//! - 无向无权图（邻接表），支持 DFS、BFS、连通分量和环检测

pub mod algorithm;
pub mod cli;
pub mod error;
pub mod graph;
pub mod types;

// 重导出常用类型
pub use error::{Error, Result};
pub use graph::{Adjacency, DirectedGraph, SparseDirectedGraph, UndirectedGraph, WeightedDigraph};
pub use types::{Distance, UndirectedEdge, VertexIndex, Weight, WeightedEdge};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
