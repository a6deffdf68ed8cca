//! adjgraph - 内存无向图
//!
//! 无向、无权、单线程的内存图，支持：
//! - 顶点与边的增删
//! - 深度优先 / 广度优先遍历
//! - 最短路径距离与路径重构

pub mod algorithm;
pub mod cli;
pub mod error;
pub mod graph;

// 重导出常用类型
pub use algorithm::{PathFinder, PathResult};
pub use error::{Error, Result};
pub use graph::{Graph, Vertex, VertexId};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
