//! 图能力抽象
//!
//! 算法只依赖这里定义的 trait，因此同一份 DFS/BFS/环检测/最短路径实现
//! 可以同时服务稠密矩阵图、稀疏映射图和无向邻接表图。

use crate::algorithm::{cycle, shortest_path, traversal};
use crate::error::{Error, Result};
use crate::types::{Distance, VertexIndex, Weight, WeightedEdge};
use std::fmt::Debug;
use std::hash::Hash;
use tracing::debug;

/// 只读邻接视图
pub trait Adjacency {
    /// 顶点标识类型
    type Vertex: Clone + Eq + Hash + Ord + Debug;

    /// 顶点是否存在
    fn has_vertex(&self, vertex: &Self::Vertex) -> bool;

    /// 所有顶点，顺序稳定（有向图按编号，无向图按插入顺序）
    fn vertex_list(&self) -> Vec<Self::Vertex>;

    /// 邻居按升序返回（编号按数值，标签按字典序）。
    /// 顶点不存在时返回空。
    fn sorted_neighbors(&self, vertex: &Self::Vertex) -> Vec<Self::Vertex>;
}

/// 有向带权图能力集
///
/// 顶点是连续编号 `[0, vertex_count)`，只能增长。
/// 稠密矩阵 [`DirectedGraph`](crate::graph::DirectedGraph) 与稀疏映射
/// [`SparseDirectedGraph`](crate::graph::SparseDirectedGraph) 都实现该 trait，
/// 相同边集下所有查询结果一致。
pub trait WeightedDigraph: Adjacency<Vertex = VertexIndex> {
    /// 顶点数量
    fn vertex_count(&self) -> usize;

    /// 追加一个顶点，返回新的顶点数量
    fn add_vertex(&mut self) -> usize;

    /// 添加或覆盖边 `src -> dst`。
    ///
    /// 越界、自环、非正权重返回错误，图保持不变。
    fn add_edge(&mut self, src: VertexIndex, dst: VertexIndex, weight: Weight) -> Result<()>;

    /// 删除边；越界或边不存在时什么也不做
    fn remove_edge(&mut self, src: VertexIndex, dst: VertexIndex);

    /// 边权重，无边或越界返回 `None`
    fn weight(&self, src: VertexIndex, dst: VertexIndex) -> Option<Weight>;

    /// 所有边，按 `(src, dst)` 升序
    fn edges(&self) -> Vec<WeightedEdge>;

    /// 出边 `(dst, weight)`，按 `dst` 升序
    fn weighted_successors(&self, vertex: VertexIndex) -> Vec<(VertexIndex, Weight)>;

    /// 边数量
    fn edge_count(&self) -> usize {
        self.edges().len()
    }

    /// 顶点列表 `0..vertex_count`
    fn vertices(&self) -> Vec<VertexIndex> {
        (0..self.vertex_count()).collect()
    }

    fn has_edge(&self, src: VertexIndex, dst: VertexIndex) -> bool {
        self.weight(src, dst).is_some()
    }

    /// 路径合法性：空路径和单顶点路径（无论顶点是否存在）恒为真，
    /// 否则每对相邻顶点之间必须有同向边。
    fn is_valid_path(&self, path: &[VertexIndex]) -> bool {
        path.windows(2).all(|pair| self.has_edge(pair[0], pair[1]))
    }

    /// 深度优先遍历，后继按升序访问；遇到 `end` 立即停止
    fn dfs(&self, start: VertexIndex, end: Option<VertexIndex>) -> Vec<VertexIndex> {
        traversal::dfs(self, &start, end.as_ref())
    }

    /// 广度优先遍历，后继按升序入队；遇到 `end` 立即停止
    fn bfs(&self, start: VertexIndex, end: Option<VertexIndex>) -> Vec<VertexIndex> {
        traversal::bfs(self, &start, end.as_ref())
    }

    /// 是否存在有向环
    fn has_cycle(&self) -> bool {
        cycle::has_directed_cycle(self)
    }

    /// 单源最短距离，按顶点编号索引，不可达为无穷大
    fn dijkstra(&self, src: VertexIndex) -> Vec<Distance> {
        shortest_path::dijkstra(self, src)
    }
}

/// 校验一条待插入的有向边
pub(crate) fn validate_edge(
    src: VertexIndex,
    dst: VertexIndex,
    weight: Weight,
    vertex_count: usize,
) -> Result<()> {
    Error::check_range(src, vertex_count)?;
    Error::check_range(dst, vertex_count)?;
    if src == dst {
        debug!(vertex = src, "rejected self loop");
        return Err(Error::SelfLoop(src.to_string()));
    }
    if weight <= 0 {
        debug!(src, dst, weight, "rejected non-positive weight");
        return Err(Error::InvalidWeight { src, dst, weight });
    }
    Ok(())
}

/// 边列表所需的顶点数，即所有端点的最大值加一。
///
/// 端点为 `usize::MAX` 时顶点数无法表示，按越界处理。
pub(crate) fn required_vertex_count(edges: &[WeightedEdge]) -> Result<usize> {
    edges.iter().try_fold(0, |count: usize, edge| {
        let highest = edge.src.max(edge.dst);
        let needed = highest
            .checked_add(1)
            .ok_or(Error::VertexOutOfRange {
                vertex: highest,
                vertex_count: usize::MAX,
            })?;
        Ok(count.max(needed))
    })
}
