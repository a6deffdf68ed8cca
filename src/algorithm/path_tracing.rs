//! 路径追踪算法
//!
//! 在遍历之上提供带路径重构的最短路径、连通性判断和 n 跳邻居

use crate::error::Result;
use crate::graph::{Graph, VertexId};
use indexmap::IndexSet;
use std::collections::{HashMap, VecDeque};

/// 路径结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResult {
    /// 路径上的顶点序列（含起点和终点）
    pub vertices: Vec<VertexId>,
    /// 路径长度（边数）
    pub length: usize,
}

impl PathResult {
    fn with_start(start: VertexId) -> Self {
        Self {
            vertices: vec![start],
            length: 0,
        }
    }
}

/// 路径查找器
pub struct PathFinder<'g, T> {
    graph: &'g Graph<T>,
}

impl<'g, T> PathFinder<'g, T> {
    /// 创建路径查找器
    pub fn new(graph: &'g Graph<T>) -> Self {
        Self { graph }
    }

    /// BFS 最短路径查找
    pub fn shortest_path(&self, start: VertexId, end: VertexId) -> Result<Option<PathResult>> {
        self.graph.resolve(start, "起点")?;

        if start == end {
            return Ok(Some(PathResult::with_start(start)));
        }

        let mut visited = IndexSet::new();
        let mut queue = VecDeque::new();
        let mut parent: HashMap<VertexId, VertexId> = HashMap::new();

        visited.insert(start);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            for neighbor in self.graph.neighbors(current) {
                if self.graph.vertex(neighbor).is_some() && visited.insert(neighbor) {
                    parent.insert(neighbor, current);
                    queue.push_back(neighbor);

                    if neighbor == end {
                        return Ok(Some(Self::reconstruct_path(start, end, &parent)));
                    }
                }
            }
        }

        Ok(None)
    }

    /// 重构路径
    fn reconstruct_path(
        start: VertexId,
        end: VertexId,
        parent: &HashMap<VertexId, VertexId>,
    ) -> PathResult {
        let mut vertices = vec![end];
        let mut current = end;

        while current != start {
            match parent.get(&current) {
                Some(&prev) => {
                    vertices.push(prev);
                    current = prev;
                }
                None => break,
            }
        }

        vertices.reverse();
        let length = vertices.len() - 1;

        PathResult { vertices, length }
    }

    /// 判断两点是否连通
    pub fn is_reachable(&self, start: VertexId, end: VertexId) -> Result<bool> {
        Ok(self.graph.distance_of_shortest_path(start, end)?.is_some())
    }

    /// 获取恰好 n 跳可达的顶点
    pub fn n_hop_neighbors(&self, start: VertexId, n: usize) -> Result<IndexSet<VertexId>> {
        self.graph.resolve(start, "起点")?;

        let mut current_level = IndexSet::new();
        current_level.insert(start);

        let mut visited = IndexSet::new();
        visited.insert(start);

        for _ in 0..n {
            let mut next_level = IndexSet::new();
            for &vertex in &current_level {
                for neighbor in self.graph.neighbors(vertex) {
                    if self.graph.vertex(neighbor).is_some() && visited.insert(neighbor) {
                        next_level.insert(neighbor);
                    }
                }
            }
            current_level = next_level;
        }

        Ok(current_level)
    }

    /// 起点所在连通分量的全部顶点（按层序）
    pub fn connected_component(&self, start: VertexId) -> Result<IndexSet<VertexId>> {
        self.graph.resolve(start, "起点")?;

        let mut visited = IndexSet::new();
        let mut queue = VecDeque::new();
        visited.insert(start);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            for neighbor in self.graph.neighbors(current) {
                if self.graph.vertex(neighbor).is_some() && visited.insert(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }

        Ok(visited)
    }
}
