//! 结构查询
//!
//! 对任意 `GraphStore` 可用的只读查询：度、自环、平行边、完全图判定。

use super::edge::{Direction, EdgeRef};
use super::node::NodeId;
use super::store::GraphStore;
use crate::error::{Error, Result};
use std::collections::HashSet;

/// 结构查询扩展
pub trait Inspect: GraphStore {
    /// 节点的度，自环计两次；有向图为入度与出度之和
    fn degree(&self, label: &str) -> Result<usize> {
        let id = require_node(self, label)?;
        Ok(self
            .edges()
            .iter()
            .map(|e| (e.n1_id() == id) as usize + (e.n2_id() == id) as usize)
            .sum())
    }

    /// 与节点关联的所有边
    fn edges_over_node(&self, label: &str) -> Result<Vec<EdgeRef<'_, Self::Dir>>> {
        let id = require_node(self, label)?;
        Ok(self
            .edges()
            .into_iter()
            .filter(|e| e.n1_id() == id || e.n2_id() == id)
            .collect())
    }

    /// 是否存在自环
    fn has_loops(&self) -> bool {
        self.edges().iter().any(|e| e.is_loop())
    }

    /// 是否存在平行边（按方向语义比较端点）
    fn has_parallels(&self) -> bool {
        let mut seen = HashSet::new();
        self.edges().iter().any(|e| {
            let key = <Self::Dir as Direction>::endpoint_key(e.n1().label(), e.n2().label());
            !seen.insert(key)
        })
    }

    /// 互不相邻的节点对（任一方向都没有边）
    fn non_adjacent_pairs(&self) -> Vec<(String, String)> {
        let n = self.node_count();
        let mut adjacent = vec![false; n * n];
        for e in self.edges() {
            let (a, b) = (e.n1_id().index(), e.n2_id().index());
            adjacent[a * n + b] = true;
            adjacent[b * n + a] = true;
        }

        let nodes = self.get_all_nodes();
        let mut pairs = Vec::new();
        for i in 0..n {
            for j in (i + 1)..n {
                if !adjacent[i * n + j] {
                    pairs.push((nodes[i].label().to_string(), nodes[j].label().to_string()));
                }
            }
        }
        pairs
    }

    /// 完全图：无自环、无平行边且任意两节点相邻
    fn is_complete(&self) -> bool {
        !self.has_loops() && !self.has_parallels() && self.non_adjacent_pairs().is_empty()
    }
}

impl<G: GraphStore> Inspect for G {}

fn require_node<G: GraphStore + ?Sized>(graph: &G, label: &str) -> Result<NodeId> {
    graph
        .node_index(label)
        .ok_or_else(|| Error::NodeNotFound(label.to_string()))
}
