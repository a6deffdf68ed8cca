//! 图遍历算法
//!
//! 深度优先、广度优先以及最短路径距离。三者都只依赖邻接关系，
//! 不检查顶点是否为图的成员。

use crate::error::Result;
use crate::graph::{Graph, VertexId};
use indexmap::IndexSet;
use std::collections::VecDeque;
use tracing::debug;

impl<T> Graph<T> {
    /// 深度优先遍历
    ///
    /// 先序遍历：每遇到一个未访问的邻居就立即深入，回溯后再看下一个邻居。
    /// 用显式栈保存每一层的邻接游标，避免深链上的递归溢出。
    /// 返回的值按顶点首次被标记访问的顺序排列。
    pub fn depth_first_search(&self, start: VertexId) -> Result<Vec<&T>> {
        let root = self.resolve(start, "起点")?;

        let mut seen = IndexSet::new();
        seen.insert(start);
        let mut stack = vec![root.adjacent().iter()];

        while let Some(cursor) = stack.last_mut() {
            match cursor.next() {
                Some(&next) => {
                    if seen.contains(&next) {
                        continue;
                    }
                    // 邻接中可能有不在仓库里的 ID（Vertex::with_adjacent 不做校验）
                    if let Some(vertex) = self.vertex(next) {
                        seen.insert(next);
                        stack.push(vertex.adjacent().iter());
                    }
                }
                None => {
                    stack.pop();
                }
            }
        }

        debug!(%start, visited = seen.len(), "深度优先遍历完成");
        Ok(self.collect_values(&seen))
    }

    /// 广度优先遍历
    ///
    /// 入队时即标记访问，每个顶点最多入队一次。返回值按层序排列。
    pub fn breadth_first_search(&self, start: VertexId) -> Result<Vec<&T>> {
        self.resolve(start, "起点")?;

        let mut seen = IndexSet::new();
        let mut queue = VecDeque::new();
        seen.insert(start);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            let Some(vertex) = self.vertex(current) else {
                continue;
            };
            for &neighbor in vertex.adjacent() {
                if self.vertex(neighbor).is_some() && seen.insert(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }

        debug!(%start, visited = seen.len(), "广度优先遍历完成");
        Ok(self.collect_values(&seen))
    }

    /// 最短路径的边数
    ///
    /// `start == end` 时为 `Some(0)`；不可达时为 `None`。
    /// 终点无需存在于仓库中；邻接里悬空的 ID 不算可达顶点，此时同样返回 `None`。
    pub fn distance_of_shortest_path(&self, start: VertexId, end: VertexId) -> Result<Option<usize>> {
        self.resolve(start, "起点")?;

        let mut seen = IndexSet::new();
        let mut queue = VecDeque::new();
        seen.insert(start);
        queue.push_back((start, 0usize));

        while let Some((current, depth)) = queue.pop_front() {
            if current == end {
                debug!(%start, %end, depth, "最短路径已找到");
                return Ok(Some(depth));
            }
            let Some(vertex) = self.vertex(current) else {
                continue;
            };
            for &neighbor in vertex.adjacent() {
                if self.vertex(neighbor).is_some() && seen.insert(neighbor) {
                    queue.push_back((neighbor, depth + 1));
                }
            }
        }

        debug!(%start, %end, "终点不可达");
        Ok(None)
    }

    fn collect_values(&self, seen: &IndexSet<VertexId>) -> Vec<&T> {
        seen.iter().filter_map(|&id| self.value(id)).collect()
    }
}
