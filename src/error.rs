//! 错误类型定义

use crate::types::{VertexIndex, Weight};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("顶点越界: {vertex} (顶点数 {vertex_count})")]
    VertexOutOfRange {
        vertex: VertexIndex,
        vertex_count: usize,
    },

    #[error("不允许自环: {0}")]
    SelfLoop(String),

    #[error("无效的边权重: {src} -> {dst} 权重 {weight}，权重必须为正")]
    InvalidWeight {
        src: VertexIndex,
        dst: VertexIndex,
        weight: Weight,
    },

    #[error("序列化错误: {0}")]
    SerializationError(String),
}

impl Error {
    /// 检查顶点是否在 `[0, vertex_count)` 范围内
    pub(crate) fn check_range(vertex: VertexIndex, vertex_count: usize) -> Result<()> {
        if vertex < vertex_count {
            Ok(())
        } else {
            Err(Error::VertexOutOfRange {
                vertex,
                vertex_count,
            })
        }
    }
}
