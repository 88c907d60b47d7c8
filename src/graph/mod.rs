//! 图核心模块
//!
//! 两种图模型：
//! - 有向带权图，顶点为连续编号，提供稠密矩阵和稀疏映射两种存储
//! - 无向无权图，顶点为字符串标签，邻接表存储

mod matrix;
mod sparse;
mod traits;
mod undirected;

pub use matrix::DirectedGraph;
pub use sparse::SparseDirectedGraph;
pub use traits::{Adjacency, WeightedDigraph};
pub use undirected::UndirectedGraph;
