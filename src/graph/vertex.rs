//! 顶点定义
//!
//! 顶点只负责保存值和邻接集合，邻接关系的修改统一经由 [`Graph`](super::Graph)

use indexmap::IndexSet;
use std::fmt;

/// 顶点 ID（在所属图内唯一）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub u64);

impl VertexId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for VertexId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// 顶点
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex<T> {
    /// 顶点的值
    value: T,
    /// 邻接顶点集合（无重复）
    pub(crate) adjacent: IndexSet<VertexId>,
}

impl<T> Vertex<T> {
    /// 创建没有邻接顶点的新顶点
    pub fn new(value: T) -> Self {
        Self {
            value,
            adjacent: IndexSet::new(),
        }
    }

    /// 创建带有初始邻接集合的顶点
    ///
    /// 不做任何校验：初始邻接可以指向尚未加入图的顶点，
    /// 对称性由调用方自行维护。
    pub fn with_adjacent<I>(value: T, adjacent: I) -> Self
    where
        I: IntoIterator<Item = VertexId>,
    {
        Self {
            value,
            adjacent: adjacent.into_iter().collect(),
        }
    }

    /// 获取值
    pub fn value(&self) -> &T {
        &self.value
    }

    /// 获取可变值
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// 取出值
    pub fn into_value(self) -> T {
        self.value
    }

    /// 获取邻接集合
    pub fn adjacent(&self) -> &IndexSet<VertexId> {
        &self.adjacent
    }

    /// 是否与给定顶点相邻
    pub fn is_adjacent(&self, other: VertexId) -> bool {
        self.adjacent.contains(&other)
    }

    /// 度数
    pub fn degree(&self) -> usize {
        self.adjacent.len()
    }
}
