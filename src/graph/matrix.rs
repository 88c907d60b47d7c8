//! 稠密邻接矩阵有向带权图
//!
//! 适合中小规模的稠密图。`adjacency[i][j]` 为正数表示边 `i -> j` 的权重，
//! `0` 表示无边。矩阵始终为 `vertex_count × vertex_count` 的方阵。

use super::traits::{
    required_vertex_count, validate_edge, Adjacency, WeightedDigraph,
};
use crate::error::Result;
use crate::types::{VertexIndex, Weight, WeightedEdge};
use std::fmt;
use tracing::trace;

/// 邻接矩阵中表示“无边”的值
const NO_EDGE: Weight = 0;

/// 有向带权图（邻接矩阵存储）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectedGraph {
    /// 顶点数量
    vertex_count: usize,
    /// 邻接矩阵
    adjacency: Vec<Vec<Weight>>,
}

impl DirectedGraph {
    /// 创建空图
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建包含 `vertex_count` 个孤立顶点的图
    pub fn with_vertices(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            adjacency: vec![vec![NO_EDGE; vertex_count]; vertex_count],
        }
    }

    /// 从边列表构建图。
    ///
    /// 顶点数为所有端点的最大值加一，先创建全部顶点再逐条插入边；
    /// 任意一条边非法时返回该错误；端点为 `usize::MAX` 时返回
    /// [`Error::VertexOutOfRange`](crate::Error::VertexOutOfRange)。
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

    /// 邻接矩阵的独立副本
    pub fn adjacency_matrix(&self) -> Vec<Vec<Weight>> {
        self.adjacency.clone()
    }

    fn row(&self, vertex: VertexIndex) -> Option<&[Weight]> {
        self.adjacency.get(vertex).map(Vec::as_slice)
    }
}

impl Adjacency for DirectedGraph {
    type Vertex = VertexIndex;

    fn has_vertex(&self, vertex: &VertexIndex) -> bool {
        *vertex < self.vertex_count
    }

    fn vertex_list(&self) -> Vec<VertexIndex> {
        self.vertices()
    }

    fn sorted_neighbors(&self, vertex: &VertexIndex) -> Vec<VertexIndex> {
        self.weighted_successors(*vertex)
            .into_iter()
            .map(|(dst, _)| dst)
            .collect()
    }
}

impl WeightedDigraph for DirectedGraph {
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn add_vertex(&mut self) -> usize {
        for row in &mut self.adjacency {
            row.push(NO_EDGE);
        }
        self.vertex_count += 1;
        self.adjacency.push(vec![NO_EDGE; self.vertex_count]);
        trace!(vertex_count = self.vertex_count, "vertex added");
        self.vertex_count
    }

    fn add_edge(&mut self, src: VertexIndex, dst: VertexIndex, weight: Weight) -> Result<()> {
        validate_edge(src, dst, weight, self.vertex_count)?;
        self.adjacency[src][dst] = weight;
        Ok(())
    }

    fn remove_edge(&mut self, src: VertexIndex, dst: VertexIndex) {
        if let Some(cell) = self
            .adjacency
            .get_mut(src)
            .and_then(|row| row.get_mut(dst))
        {
            *cell = NO_EDGE;
        }
    }

    fn weight(&self, src: VertexIndex, dst: VertexIndex) -> Option<Weight> {
        self.row(src)
            .and_then(|row| row.get(dst))
            .copied()
            .filter(|&w| w != NO_EDGE)
    }

    fn edges(&self) -> Vec<WeightedEdge> {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(src, row)| {
                row.iter()
                    .enumerate()
                    .filter(|&(_, &w)| w != NO_EDGE)
                    .map(move |(dst, &w)| WeightedEdge::new(src, dst, w))
            })
            .collect()
    }

    fn weighted_successors(&self, vertex: VertexIndex) -> Vec<(VertexIndex, Weight)> {
        self.row(vertex)
            .map(|row| {
                row.iter()
                    .enumerate()
                    .filter(|&(_, &w)| w != NO_EDGE)
                    .map(|(dst, &w)| (dst, w))
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl fmt::Display for DirectedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.vertex_count == 0 {
            return writeln!(f, "EMPTY GRAPH");
        }

        writeln!(f, "GRAPH ({} vertices):", self.vertex_count)?;
        let header: Vec<String> = (0..self.vertex_count).map(|i| format!("{:2}", i)).collect();
        writeln!(f, "   |{}", header.join(" "))?;
        writeln!(f, "{}", "-".repeat(self.vertex_count * 3 + 3))?;
        for (i, row) in self.adjacency.iter().enumerate() {
            let cells: Vec<String> = row.iter().map(|w| format!("{:2}", w)).collect();
            writeln!(f, "{:2} |{}", i, cells.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const SAMPLE_EDGES: [(usize, usize, i64); 7] = [
        (0, 1, 10),
        (4, 0, 12),
        (1, 4, 15),
        (4, 3, 3),
        (3, 1, 5),
        (2, 1, 23),
        (3, 2, 7),
    ];

    fn create_sample_graph() -> DirectedGraph {
        DirectedGraph::from_edges(SAMPLE_EDGES).unwrap()
    }

    #[test]
    fn test_add_vertex_grows_square_matrix() {
        let mut graph = DirectedGraph::new();
        assert_eq!(graph.vertex_count(), 0);

        for expected in 1..=5 {
            assert_eq!(graph.add_vertex(), expected);
        }

        let matrix = graph.adjacency_matrix();
        assert_eq!(matrix.len(), 5);
        assert!(matrix.iter().all(|row| row.len() == 5));
        assert!(matrix.iter().flatten().all(|&w| w == 0));
    }

    #[test]
    fn test_add_vertex_keeps_existing_edges() {
        let mut graph = DirectedGraph::with_vertices(2);
        graph.add_edge(0, 1, 9).unwrap();
        graph.add_vertex();

        assert_eq!(graph.weight(0, 1), Some(9));
        assert_eq!(graph.weight(0, 2), None);
        assert_eq!(graph.adjacency_matrix()[2], vec![0, 0, 0]);
    }

    #[test]
    fn test_from_edges() {
        let graph = create_sample_graph();

        assert_eq!(graph.vertex_count(), 5);
        assert_eq!(graph.vertices(), vec![0, 1, 2, 3, 4]);
        assert_eq!(
            graph.edges(),
            vec![
                WeightedEdge::new(0, 1, 10),
                WeightedEdge::new(1, 4, 15),
                WeightedEdge::new(2, 1, 23),
                WeightedEdge::new(3, 1, 5),
                WeightedEdge::new(3, 2, 7),
                WeightedEdge::new(4, 0, 12),
                WeightedEdge::new(4, 3, 3),
            ]
        );
    }

    #[test]
    fn test_from_edges_empty() {
        let graph = DirectedGraph::from_edges(Vec::new()).unwrap();
        assert_eq!(graph.vertex_count(), 0);
        assert!(graph.edges().is_empty());
    }

    #[test]
    fn test_from_edges_rejects_invalid() {
        let result = DirectedGraph::from_edges([(0, 1, 3), (1, 1, 2)]);
        assert_eq!(result, Err(Error::SelfLoop("1".into())));
    }

    #[test]
    fn test_add_edge_overwrites() {
        let mut graph = DirectedGraph::with_vertices(3);
        graph.add_edge(0, 2, 5).unwrap();
        graph.add_edge(0, 2, 8).unwrap();

        assert_eq!(graph.edges(), vec![WeightedEdge::new(0, 2, 8)]);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_add_edge_rejections_leave_graph_unchanged() {
        let mut graph = DirectedGraph::with_vertices(3);
        graph.add_edge(0, 1, 4).unwrap();
        let before = graph.clone();

        assert!(matches!(
            graph.add_edge(0, 3, 1),
            Err(Error::VertexOutOfRange { vertex: 3, .. })
        ));
        assert!(matches!(
            graph.add_edge(7, 0, 1),
            Err(Error::VertexOutOfRange { vertex: 7, .. })
        ));
        assert!(matches!(graph.add_edge(2, 2, 1), Err(Error::SelfLoop(_))));
        assert!(matches!(
            graph.add_edge(1, 2, 0),
            Err(Error::InvalidWeight { .. })
        ));
        assert!(matches!(
            graph.add_edge(0, 1, -6),
            Err(Error::InvalidWeight { .. })
        ));

        assert_eq!(graph, before);
    }

    #[test]
    fn test_remove_edge() {
        let mut graph = create_sample_graph();
        graph.remove_edge(4, 3);
        assert!(!graph.has_edge(4, 3));
        assert_eq!(graph.edge_count(), 6);

        // 不存在的边和越界都是空操作
        graph.remove_edge(4, 3);
        graph.remove_edge(0, 99);
        graph.remove_edge(99, 0);
        assert_eq!(graph.edge_count(), 6);
    }

    #[test]
    fn test_is_valid_path() {
        let graph = create_sample_graph();

        assert!(graph.is_valid_path(&[0, 1, 4, 3]));
        assert!(!graph.is_valid_path(&[1, 3, 2, 1]));
        assert!(!graph.is_valid_path(&[0, 4]));
        assert!(graph.is_valid_path(&[4, 0]));
        assert!(graph.is_valid_path(&[]));
        assert!(graph.is_valid_path(&[2]));
        // 单顶点路径不检查顶点是否存在
        assert!(graph.is_valid_path(&[42]));
        assert!(!graph.is_valid_path(&[4, 42]));
    }

    #[test]
    fn test_dfs_and_bfs() {
        let graph = create_sample_graph();

        let expected = [
            (vec![0, 1, 4, 3, 2], vec![0, 1, 4, 3, 2]),
            (vec![1, 4, 0, 3, 2], vec![1, 4, 0, 3, 2]),
            (vec![2, 1, 4, 0, 3], vec![2, 1, 4, 0, 3]),
            (vec![3, 1, 4, 0, 2], vec![3, 1, 2, 4, 0]),
            (vec![4, 0, 1, 3, 2], vec![4, 0, 3, 1, 2]),
        ];
        for (start, (dfs, bfs)) in expected.iter().enumerate() {
            assert_eq!(&graph.dfs(start, None), dfs, "dfs from {}", start);
            assert_eq!(&graph.bfs(start, None), bfs, "bfs from {}", start);
        }
    }

    #[test]
    fn test_traversal_with_end() {
        let graph = create_sample_graph();

        assert_eq!(graph.dfs(0, Some(3)), vec![0, 1, 4, 3]);
        assert_eq!(graph.bfs(0, Some(3)), vec![0, 1, 4, 3]);
        assert_eq!(graph.dfs(2, Some(4)), vec![2, 1, 4]);
        assert_eq!(graph.bfs(2, Some(0)), vec![2, 1, 4, 0]);
    }

    #[test]
    fn test_traversal_invalid_start() {
        let graph = create_sample_graph();
        assert!(graph.dfs(5, None).is_empty());
        assert!(graph.bfs(100, Some(0)).is_empty());
    }

    #[test]
    fn test_has_cycle_sequence() {
        let mut graph = create_sample_graph();
        assert!(graph.has_cycle());

        let mut observed = Vec::new();
        for (src, dst) in [(3, 1), (4, 0), (3, 2)] {
            graph.remove_edge(src, dst);
            observed.push(graph.has_cycle());
        }
        for (src, dst) in [(4, 3), (2, 3), (1, 3), (4, 0)] {
            graph.add_edge(src, dst, 1).unwrap();
            observed.push(graph.has_cycle());
        }

        assert_eq!(observed, vec![true, true, false, false, false, false, true]);
    }

    #[test]
    fn test_dijkstra() {
        let mut graph = create_sample_graph();

        assert_eq!(graph.dijkstra(0), vec![0.0, 10.0, 35.0, 28.0, 25.0]);
        assert_eq!(graph.dijkstra(1), vec![27.0, 0.0, 25.0, 18.0, 15.0]);
        assert_eq!(graph.dijkstra(2), vec![50.0, 23.0, 0.0, 41.0, 38.0]);
        assert_eq!(graph.dijkstra(3), vec![32.0, 5.0, 7.0, 0.0, 20.0]);
        assert_eq!(graph.dijkstra(4), vec![12.0, 8.0, 10.0, 3.0, 0.0]);

        graph.remove_edge(4, 3);
        let inf = f64::INFINITY;
        assert_eq!(graph.dijkstra(0), vec![0.0, 10.0, inf, inf, 25.0]);
        assert_eq!(graph.dijkstra(4), vec![12.0, 22.0, inf, inf, 0.0]);
    }

    #[test]
    fn test_display() {
        assert_eq!(DirectedGraph::new().to_string(), "EMPTY GRAPH\n");

        let graph = DirectedGraph::from_edges([(0, 1, 10), (1, 0, 3)]).unwrap();
        let expected = "GRAPH (2 vertices):\n   | 0  1\n---------\n 0 | 0 10\n 1 | 3  0\n";
        assert_eq!(graph.to_string(), expected);
    }

    #[test]
    fn test_from_edges_index_overflow() {
        let overflow = Err(Error::VertexOutOfRange {
            vertex: usize::MAX,
            vertex_count: usize::MAX,
        });
        assert_eq!(DirectedGraph::from_edges([(usize::MAX, 0, 1)]), overflow);
        assert_eq!(DirectedGraph::from_edges([(0, 1, 2), (1, usize::MAX, 1)]), overflow);
    }
}
