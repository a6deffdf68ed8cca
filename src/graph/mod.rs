//! 图核心模块
//!
//! 定义顶点和图的核心数据结构

mod graph;
mod vertex;

pub use graph::Graph;
pub use vertex::{Vertex, VertexId};
