//! 邻接表
//!
//! 节点按插入顺序保存，边保存在以标签为键的映射中。
//! 按标签查找节点是线性扫描；查找某个节点的关联边需要遍历整个边映射。

use super::edge::{BaseEdge, Directed, Direction, EdgeEntry, EdgeRef, Undirected};
use super::node::{Node, NodeId};
use super::store::{resolve_endpoints, GraphStore};
use crate::error::{Error, Result};
use indexmap::IndexMap;
use std::fmt;
use std::marker::PhantomData;
use tracing::{debug, warn};

/// 基于邻接表的图
#[derive(Debug, Clone)]
pub struct ListGraph<D: Direction> {
    /// 节点（插入顺序）
    nodes: Vec<Node>,
    /// 边标签到边的映射
    edges: IndexMap<String, EdgeEntry>,
    _dir: PhantomData<D>,
}

/// 无向邻接表
pub type AdjacencyList = ListGraph<Undirected>;

/// 有向邻接表
pub type DirectedAdjacencyList = ListGraph<Directed>;

impl<D: Direction> ListGraph<D> {
    /// 创建空图
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: IndexMap::new(),
            _dir: PhantomData,
        }
    }

    /// 预留容量
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
            edges: IndexMap::with_capacity(edges),
            _dir: PhantomData,
        }
    }

    /// 获取边映射（标签 -> 边）
    pub fn get_all_edges(&self) -> &IndexMap<String, EdgeEntry> {
        &self.edges
    }

    fn edge_ref<'g>(&'g self, entry: &'g EdgeEntry) -> EdgeRef<'g, D> {
        EdgeRef::new(entry, &self.nodes)
    }

    fn insert_edge(&mut self, label: &str, n1: &str, n2: &str, weight: i64) -> Result<()> {
        if self.edges.contains_key(label) {
            warn!(label, "edge label already exists");
            return Err(Error::duplicate_edge(label));
        }
        let (id1, id2) = resolve_endpoints(&self.nodes, n1, n2).map_err(|e| {
            warn!(label, n1, n2, "edge endpoints not found");
            e
        })?;

        self.edges.insert(
            label.to_string(),
            EdgeEntry::new(label.to_string(), id1, id2, weight),
        );
        debug!(label, n1, n2, weight, "edge added to adjacency list");
        Ok(())
    }
}

impl<D: Direction> Default for ListGraph<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Direction> GraphStore for ListGraph<D> {
    type Dir = D;

    fn add_node<N: Into<Node>>(&mut self, node: N) -> Result<NodeId> {
        let node = node.into();
        if self.contains_node(node.label()) {
            warn!(label = node.label(), "node label already exists");
            return Err(Error::duplicate_node(node.label()));
        }

        let id = NodeId::new(self.nodes.len());
        debug!(label = node.label(), index = id.index(), "node added to adjacency list");
        self.nodes.push(node);
        Ok(id)
    }

    fn add_edge(&mut self, edge: BaseEdge<D>) -> Result<()> {
        self.insert_edge(
            edge.label(),
            edge.n1().label(),
            edge.n2().label(),
            edge.weight(),
        )
    }

    fn add_edge_between(&mut self, label: &str, n1: &str, n2: &str, weight: i64) -> Result<()> {
        self.insert_edge(label, n1, n2, weight)
    }

    fn get_all_nodes(&self) -> &[Node] {
        &self.nodes
    }

    fn get_edge(&self, label: &str) -> Option<EdgeRef<'_, D>> {
        self.edges.get(label).map(|entry| self.edge_ref(entry))
    }

    fn edges(&self) -> Vec<EdgeRef<'_, D>> {
        self.edges.values().map(|entry| self.edge_ref(entry)).collect()
    }

    fn edges_between(&self, n1: &str, n2: &str) -> Vec<EdgeRef<'_, D>> {
        self.edges()
            .into_iter()
            .filter(|e| D::same_endpoints((e.n1().label(), e.n2().label()), (n1, n2)))
            .collect()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl<D: Direction> PartialEq for ListGraph<D> {
    fn eq(&self, other: &Self) -> bool {
        self.structurally_eq(other)
    }
}

impl<D: Direction> Eq for ListGraph<D> {}

impl<D: Direction> fmt::Display for ListGraph<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<&str> = self.nodes.iter().map(|n| n.label()).collect();
        writeln!(f, "nodes: [{}]", labels.join(", "))?;
        write!(f, "edges: [")?;
        for (i, edge) in self.edges().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", edge)?;
        }
        write!(f, "]")
    }
}
