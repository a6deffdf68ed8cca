//! 图算法模块
//!
//! 包含遍历（深度优先、广度优先、最短距离）和路径追踪

mod path_tracing;
mod traversal;

pub use path_tracing::{PathFinder, PathResult};
