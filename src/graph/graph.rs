//! 图数据结构
//!
//! 无向、无权的内存图。顶点存放在图自己的顶点仓库中，
//! 图的成员集合与仓库分开维护：边操作只修改两端顶点的邻接集合，
//! 不检查成员关系。

use super::vertex::{Vertex, VertexId};
use crate::error::{Error, Result};
use indexmap::{IndexMap, IndexSet};
use tracing::{debug, warn};

/// 内存图
#[derive(Debug, Clone)]
pub struct Graph<T> {
    /// 顶点仓库（所有经由本图创建的顶点，不论是否为成员）
    store: IndexMap<VertexId, Vertex<T>>,
    /// 成员集合
    members: IndexSet<VertexId>,
    /// 下一个顶点 ID
    next_vertex_id: u64,
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Graph<T> {
    /// 创建空图
    pub fn new() -> Self {
        Self {
            store: IndexMap::new(),
            members: IndexSet::new(),
            next_vertex_id: 1,
        }
    }

    // ==================== 顶点创建 ====================

    /// 将顶点放入仓库并分配 ID，此时顶点尚不是图的成员
    pub fn create_vertex(&mut self, vertex: Vertex<T>) -> VertexId {
        let id = VertexId::new(self.next_vertex_id);
        self.next_vertex_id += 1;
        self.store.insert(id, vertex);
        id
    }

    /// 批量创建顶点
    pub fn create_vertices<I>(&mut self, values: I) -> Vec<VertexId>
    where
        I: IntoIterator<Item = T>,
    {
        values
            .into_iter()
            .map(|value| self.create_vertex(Vertex::new(value)))
            .collect()
    }

    /// 创建顶点并加入图
    pub fn insert_vertex(&mut self, value: T) -> VertexId {
        let id = self.create_vertex(Vertex::new(value));
        self.add_vertex(id);
        id
    }

    // ==================== 顶点操作 ====================

    /// 加入顶点，重复加入无影响
    pub fn add_vertex(&mut self, id: VertexId) {
        if !self.store.contains_key(&id) {
            warn!(vertex = %id, "add_vertex: 未知顶点，忽略");
            return;
        }
        if self.members.insert(id) {
            debug!(vertex = %id, "顶点已加入");
        }
    }

    /// 批量加入顶点
    pub fn add_vertices<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = VertexId>,
    {
        for id in ids {
            self.add_vertex(id);
        }
    }

    /// 删除顶点
    ///
    /// 先从所有邻居的邻接集合中移除该顶点，再清空它自己的邻接并移出成员集合。
    /// 顶点本身仍留在仓库中，持有 ID 的调用方可以重新加入。
    /// 被删除顶点的邻接也会清空，此后从它出发的遍历只返回它自己。
    pub fn remove_vertex(&mut self, id: VertexId) {
        let adjacent = match self.store.get_mut(&id) {
            Some(vertex) => std::mem::take(&mut vertex.adjacent),
            None => {
                warn!(vertex = %id, "remove_vertex: 未知顶点，忽略");
                return;
            }
        };

        for neighbor in adjacent.iter().filter(|&&n| n != id) {
            if let Some(v) = self.store.get_mut(neighbor) {
                v.adjacent.shift_remove(&id);
            }
        }

        self.members.shift_remove(&id);
        debug!(vertex = %id, detached = adjacent.len(), "顶点已删除");
    }

    /// 是否为图的成员
    pub fn contains(&self, id: VertexId) -> bool {
        self.members.contains(&id)
    }

    /// 获取顶点（成员与非成员均可）
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex<T>> {
        self.store.get(&id)
    }

    /// 获取可变顶点
    pub fn vertex_mut(&mut self, id: VertexId) -> Option<&mut Vertex<T>> {
        self.store.get_mut(&id)
    }

    /// 获取顶点，不存在时返回错误
    pub fn try_vertex(&self, id: VertexId) -> Result<&Vertex<T>> {
        self.store.get(&id).ok_or(Error::VertexNotFound(id))
    }

    /// 获取顶点的值
    pub fn value(&self, id: VertexId) -> Option<&T> {
        self.store.get(&id).map(Vertex::value)
    }

    /// 成员 ID（按加入顺序）
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.members.iter().copied()
    }

    /// 获取成员数量
    pub fn vertex_count(&self) -> usize {
        self.members.len()
    }

    // ==================== 边操作 ====================

    /// 添加无向边
    ///
    /// 不要求两端是图的成员；重复添加无影响。两端必须都在仓库中，
    /// 否则不做任何修改。
    pub fn add_edge(&mut self, u: VertexId, v: VertexId) {
        if !self.store.contains_key(&u) || !self.store.contains_key(&v) {
            warn!(%u, %v, "add_edge: 未知顶点，忽略");
            return;
        }

        let mut added = false;
        if let Some(vertex) = self.store.get_mut(&u) {
            added |= vertex.adjacent.insert(v);
        }
        if let Some(vertex) = self.store.get_mut(&v) {
            added |= vertex.adjacent.insert(u);
        }
        if added {
            debug!(%u, %v, "边已添加");
        }
    }

    /// 删除无向边，不存在时无影响
    pub fn remove_edge(&mut self, u: VertexId, v: VertexId) {
        let mut removed = false;
        if let Some(vertex) = self.store.get_mut(&u) {
            removed |= vertex.adjacent.shift_remove(&v);
        }
        if let Some(vertex) = self.store.get_mut(&v) {
            removed |= vertex.adjacent.shift_remove(&u);
        }
        if removed {
            debug!(%u, %v, "边已删除");
        }
    }

    /// 两点之间是否有边
    pub fn has_edge(&self, u: VertexId, v: VertexId) -> bool {
        self.store
            .get(&u)
            .map(|vertex| vertex.is_adjacent(v))
            .unwrap_or(false)
    }

    /// 获取边数量（自环计一次）
    pub fn edge_count(&self) -> usize {
        let ends: usize = self
            .store
            .iter()
            .map(|(id, vertex)| {
                vertex
                    .adjacent
                    .iter()
                    .map(|n| if n == id { 2 } else { 1 })
                    .sum::<usize>()
            })
            .sum();
        ends / 2
    }

    // ==================== 邻居查询 ====================

    /// 获取顶点的邻居
    pub fn neighbors(&self, id: VertexId) -> Vec<VertexId> {
        self.store
            .get(&id)
            .map(|vertex| vertex.adjacent.iter().copied().collect())
            .unwrap_or_default()
    }

    /// 获取顶点的度数
    pub fn degree(&self, id: VertexId) -> usize {
        self.store.get(&id).map(Vertex::degree).unwrap_or(0)
    }

    /// 遍历的起点必须能在仓库中找到
    pub(crate) fn resolve(&self, id: VertexId, role: &str) -> Result<&Vertex<T>> {
        self.store
            .get(&id)
            .ok_or_else(|| Error::InvalidArgument(format!("{} 顶点 {} 不存在", role, id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn assert_symmetric<T>(graph: &Graph<T>) {
        for (id, vertex) in &graph.store {
            for n in vertex.adjacent() {
                assert!(
                    graph.has_edge(*n, *id),
                    "{} 邻接 {}，反向缺失",
                    id,
                    n
                );
            }
        }
    }

    #[test]
    fn test_graph_basic() {
        let mut graph = Graph::new();

        let ids = graph.create_vertices(["A", "B", "C"]);
        assert_eq!(graph.vertex_count(), 0);

        graph.add_vertices(ids.clone());
        assert_eq!(graph.vertex_count(), 3);
        assert!(ids.iter().all(|&id| graph.contains(id)));

        graph.add_edge(ids[0], ids[1]);
        graph.add_edge(ids[1], ids[2]);

        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.neighbors(ids[1]), vec![ids[0], ids[2]]);
        assert_eq!(graph.degree(ids[0]), 1);
        assert_eq!(graph.value(ids[2]), Some(&"C"));
        assert_symmetric(&graph);
    }

    #[test]
    fn test_add_vertex_idempotent() {
        let mut graph = Graph::new();
        let a = graph.insert_vertex(1);

        graph.add_vertex(a);
        graph.add_vertices([a, a]);

        assert_eq!(graph.vertex_count(), 1);
        assert_eq!(graph.vertex_ids().collect::<Vec<_>>(), vec![a]);
    }

    #[test]
    fn test_add_edge_idempotent() {
        let mut graph = Graph::new();
        let a = graph.insert_vertex('a');
        let b = graph.insert_vertex('b');

        graph.add_edge(a, b);
        let once = graph.clone();
        graph.add_edge(a, b);
        graph.add_edge(b, a);

        assert_eq!(graph.vertex(a), once.vertex(a));
        assert_eq!(graph.vertex(b), once.vertex(b));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_equal_values_are_distinct_vertices() {
        let mut graph = Graph::new();
        let a1 = graph.insert_vertex("A");
        let a2 = graph.insert_vertex("A");

        assert_ne!(a1, a2);
        assert_eq!(graph.vertex_count(), 2);

        graph.add_edge(a1, a2);
        assert!(graph.has_edge(a1, a2));
    }

    #[test]
    fn test_self_loop() {
        let mut graph = Graph::new();
        let a = graph.insert_vertex(0);

        graph.add_edge(a, a);
        assert_eq!(graph.degree(a), 1);
        assert_eq!(graph.edge_count(), 1);

        graph.remove_vertex(a);
        assert_eq!(graph.degree(a), 0);
        assert!(!graph.contains(a));
    }

    #[test]
    fn test_edge_between_non_members() {
        let mut graph = Graph::new();
        let ids = graph.create_vertices([1, 2]);

        graph.add_edge(ids[0], ids[1]);

        assert_eq!(graph.vertex_count(), 0);
        assert!(graph.has_edge(ids[0], ids[1]));
        assert!(graph.has_edge(ids[1], ids[0]));
    }

    #[test]
    fn test_unknown_vertex_is_ignored() {
        let mut graph = Graph::new();
        let a = graph.insert_vertex("A");
        let ghost = VertexId::new(999);

        graph.add_vertex(ghost);
        graph.add_edge(a, ghost);
        graph.remove_edge(a, ghost);
        graph.remove_vertex(ghost);

        assert_eq!(graph.vertex_count(), 1);
        assert_eq!(graph.degree(a), 0);
        assert!(matches!(graph.try_vertex(ghost), Err(Error::VertexNotFound(id)) if id == ghost));
    }

    #[test]
    fn test_remove_edge() {
        let mut graph = Graph::new();
        let a = graph.insert_vertex("A");
        let b = graph.insert_vertex("B");
        let c = graph.insert_vertex("C");

        graph.add_edge(a, b);
        graph.remove_edge(b, a);
        // 不存在的边
        graph.remove_edge(a, c);

        assert!(!graph.has_edge(a, b));
        assert!(!graph.has_edge(b, a));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_remove_vertex_cleans_adjacency() {
        let mut graph = Graph::new();
        let ids = graph.create_vertices(["A", "B", "C", "D"]);
        graph.add_vertices(ids.clone());

        graph.add_edge(ids[0], ids[1]);
        graph.add_edge(ids[0], ids[2]);
        graph.add_edge(ids[0], ids[3]);
        graph.add_edge(ids[2], ids[3]);

        graph.remove_vertex(ids[0]);

        assert!(!graph.contains(ids[0]));
        assert_eq!(graph.vertex_count(), 3);
        for w in graph.vertex_ids() {
            assert!(!graph.has_edge(w, ids[0]));
        }
        assert!(graph.has_edge(ids[2], ids[3]));
        assert_eq!(graph.edge_count(), 1);
        assert_symmetric(&graph);

        // 顶点仍可重新加入
        graph.add_vertex(ids[0]);
        assert!(graph.contains(ids[0]));
        assert_eq!(graph.degree(ids[0]), 0);
    }

    #[test]
    fn test_random_mutations_keep_symmetry() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut graph = Graph::new();
        let ids = graph.create_vertices(0..20);
        graph.add_vertices(ids.clone());

        for _ in 0..500 {
            let u = ids[rng.gen_range(0..ids.len())];
            let v = ids[rng.gen_range(0..ids.len())];
            match rng.gen_range(0..10) {
                0..=5 => graph.add_edge(u, v),
                6..=8 => graph.remove_edge(u, v),
                _ => {
                    graph.remove_vertex(u);
                    assert!(!graph.contains(u));
                    assert!(graph.vertex_ids().all(|w| !graph.has_edge(w, u)));
                    graph.add_vertex(u);
                }
            }
            assert_symmetric(&graph);
        }
    }
}
