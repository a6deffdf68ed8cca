//! 错误类型定义

use crate::graph::VertexId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("无效参数: {0}")]
    InvalidArgument(String),

    #[error("顶点不存在: {0}")]
    VertexNotFound(VertexId),

    #[error("解析错误: {0}")]
    ParseError(String),
}
