//! 通用类型定义

use serde::{Deserialize, Serialize};
use std::fmt;

/// 有向图顶点编号，取值范围 `[0, vertex_count)`
pub type VertexIndex = usize;

/// 边权重；`0` 在邻接矩阵中表示“无边”，有效权重必须为正
pub type Weight = i64;

/// 最短路径距离，不可达为 `f64::INFINITY`
pub type Distance = f64;

/// 有向带权边 `(src, dst, weight)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WeightedEdge {
    pub src: VertexIndex,
    pub dst: VertexIndex,
    pub weight: Weight,
}

impl WeightedEdge {
    pub fn new(src: VertexIndex, dst: VertexIndex, weight: Weight) -> Self {
        Self { src, dst, weight }
    }
}

impl From<(VertexIndex, VertexIndex, Weight)> for WeightedEdge {
    fn from((src, dst, weight): (VertexIndex, VertexIndex, Weight)) -> Self {
        Self::new(src, dst, weight)
    }
}

impl fmt::Display for WeightedEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.src, self.dst, self.weight)
    }
}

/// 无向边，每条边只报告一次
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UndirectedEdge {
    pub u: String,
    pub v: String,
}

impl UndirectedEdge {
    pub fn new(u: impl Into<String>, v: impl Into<String>) -> Self {
        Self {
            u: u.into(),
            v: v.into(),
        }
    }
}

impl fmt::Display for UndirectedEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.u, self.v)
    }
}

/// 格式化距离，不可达显示为 `inf`
pub fn format_distance(distance: Distance) -> String {
    if distance.is_infinite() {
        "inf".to_string()
    } else {
        format!("{}", distance)
    }
}
