//! 稀疏有向带权图
//!
//! 每个顶点保存一张按目标顶点排序的出边表，适合顶点多、边稀疏的场景。

use super::traits::{
    required_vertex_count, validate_edge, Adjacency, WeightedDigraph,
};
use crate::error::Result;
use crate::types::{VertexIndex, Weight, WeightedEdge};
use std::collections::BTreeMap;
use std::fmt;

/// 有向带权图（邻接映射存储）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SparseDirectedGraph {
    /// `outgoing[src]` 为 `dst -> weight`
    outgoing: Vec<BTreeMap<VertexIndex, Weight>>,
}

impl SparseDirectedGraph {
    /// 创建空图
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建包含 `vertex_count` 个孤立顶点的图
    pub fn with_vertices(vertex_count: usize) -> Self {
        Self {
            outgoing: vec![BTreeMap::new(); vertex_count],
        }
    }

    /// 从边列表构建图，规则同 [`DirectedGraph::from_edges`](crate::graph::DirectedGraph::from_edges)
    pub fn from_edges<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (VertexIndex, VertexIndex, Weight)>,
    {
        let edges: Vec<WeightedEdge> = edges.into_iter().map(WeightedEdge::from).collect();
        let vertex_count = required_vertex_count(&edges)?;

        let mut graph = Self::with_vertices(vertex_count);
        for edge in edges {
            graph.add_edge(edge.src, edge.dst, edge.weight)?;
        }
        Ok(graph)
    }
}

impl Adjacency for SparseDirectedGraph {
    type Vertex = VertexIndex;

    fn has_vertex(&self, vertex: &VertexIndex) -> bool {
        *vertex < self.outgoing.len()
    }

    fn vertex_list(&self) -> Vec<VertexIndex> {
        self.vertices()
    }

    fn sorted_neighbors(&self, vertex: &VertexIndex) -> Vec<VertexIndex> {
        self.outgoing
            .get(*vertex)
            .map(|targets| targets.keys().copied().collect())
            .unwrap_or_default()
    }
}

impl WeightedDigraph for SparseDirectedGraph {
    fn vertex_count(&self) -> usize {
        self.outgoing.len()
    }

    fn add_vertex(&mut self) -> usize {
        self.outgoing.push(BTreeMap::new());
        self.outgoing.len()
    }

    fn add_edge(&mut self, src: VertexIndex, dst: VertexIndex, weight: Weight) -> Result<()> {
        validate_edge(src, dst, weight, self.outgoing.len())?;
        self.outgoing[src].insert(dst, weight);
        Ok(())
    }

    fn remove_edge(&mut self, src: VertexIndex, dst: VertexIndex) {
        if let Some(targets) = self.outgoing.get_mut(src) {
            targets.remove(&dst);
        }
    }

    fn weight(&self, src: VertexIndex, dst: VertexIndex) -> Option<Weight> {
        self.outgoing.get(src)?.get(&dst).copied()
    }

    fn edges(&self) -> Vec<WeightedEdge> {
        self.outgoing
            .iter()
            .enumerate()
            .flat_map(|(src, targets)| {
                targets
                    .iter()
                    .map(move |(&dst, &weight)| WeightedEdge::new(src, dst, weight))
            })
            .collect()
    }

    fn weighted_successors(&self, vertex: VertexIndex) -> Vec<(VertexIndex, Weight)> {
        self.outgoing
            .get(vertex)
            .map(|targets| targets.iter().map(|(&dst, &w)| (dst, w)).collect())
            .unwrap_or_default()
    }

    fn edge_count(&self) -> usize {
        self.outgoing.iter().map(BTreeMap::len).sum()
    }
}

impl fmt::Display for SparseDirectedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.outgoing.is_empty() {
            return writeln!(f, "EMPTY GRAPH");
        }

        writeln!(f, "GRAPH ({} vertices):", self.outgoing.len())?;
        for (src, targets) in self.outgoing.iter().enumerate() {
            let out: Vec<String> = targets
                .iter()
                .map(|(dst, weight)| format!("{}({})", dst, weight))
                .collect();
            writeln!(f, "{:2} -> [{}]", src, out.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::graph::DirectedGraph;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_sparse_basic() {
        let mut graph = SparseDirectedGraph::new();
        assert_eq!(graph.add_vertex(), 1);
        assert_eq!(graph.add_vertex(), 2);

        graph.add_edge(0, 1, 7).unwrap();
        graph.add_edge(0, 1, 2).unwrap();
        assert_eq!(graph.edges(), vec![WeightedEdge::new(0, 1, 2)]);
        assert!(graph.add_edge(1, 1, 3).is_err());
        assert!(graph.add_edge(1, 2, 3).is_err());

        graph.remove_edge(0, 1);
        graph.remove_edge(5, 1);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_sparse_display() {
        let graph = SparseDirectedGraph::from_edges([(0, 1, 10), (0, 2, 4)]).unwrap();
        let expected = "GRAPH (3 vertices):\n 0 -> [1(10), 2(4)]\n 1 -> []\n 2 -> []\n";
        assert_eq!(graph.to_string(), expected);
    }

    fn random_pair(seed: u64, vertex_count: usize) -> (DirectedGraph, SparseDirectedGraph) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut dense = DirectedGraph::with_vertices(vertex_count);
        let mut sparse = SparseDirectedGraph::with_vertices(vertex_count);

        for _ in 0..vertex_count * 2 {
            let src = rng.gen_range(0..vertex_count);
            let dst = rng.gen_range(0..vertex_count);
            let weight = rng.gen_range(-2..20);
            assert_eq!(
                dense.add_edge(src, dst, weight),
                sparse.add_edge(src, dst, weight)
            );
            if rng.gen_bool(0.1) {
                dense.remove_edge(src, dst);
                sparse.remove_edge(src, dst);
            }
        }
        (dense, sparse)
    }

    #[test]
    fn test_dense_and_sparse_agree() {
        for seed in 0..20 {
            let (dense, sparse) = random_pair(seed, 12);

            assert_eq!(dense.edges(), sparse.edges());
            assert_eq!(dense.edge_count(), sparse.edge_count());
            assert_eq!(dense.has_cycle(), sparse.has_cycle());
            for v in 0..12 {
                assert_eq!(dense.dfs(v, None), sparse.dfs(v, None));
                assert_eq!(dense.bfs(v, Some(0)), sparse.bfs(v, Some(0)));
                assert_eq!(dense.dijkstra(v), sparse.dijkstra(v));
            }
        }
    }

    #[test]
    fn test_from_edges_index_overflow() {
        let overflow = Err(Error::VertexOutOfRange {
            vertex: usize::MAX,
            vertex_count: usize::MAX,
        });
        assert_eq!(SparseDirectedGraph::from_edges([(usize::MAX, 0, 1)]), overflow);
        assert_eq!(SparseDirectedGraph::from_edges([(0, 1, 2), (1, usize::MAX, 1)]), overflow);
    }
}
