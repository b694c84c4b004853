//! 图存储接口
//!
//! 邻接表和邻接矩阵都实现 `GraphStore`，算法只依赖这里的读写契约

use crate::error::{Error, Result};
use crate::graph::edge::{BaseEdge, Direction, EdgeRef, DEFAULT_WEIGHT};
use crate::graph::node::{Node, NodeId};
use std::collections::BTreeSet;

/// 图存储策略的公共能力
///
/// 所有写操作失败时都保持图在调用前的状态。
pub trait GraphStore {
    /// 边的方向语义
    type Dir: Direction;

    /// 添加节点（传入标签或节点），标签重复时返回 `DuplicateLabel`
    fn add_node<N: Into<Node>>(&mut self, node: N) -> Result<NodeId>;

    /// 插入一条独立构造的边，端点按标签解析到图内节点
    fn add_edge(&mut self, edge: BaseEdge<Self::Dir>) -> Result<()>;

    /// 按端点标签创建并插入边
    fn add_edge_between(&mut self, label: &str, n1: &str, n2: &str, weight: i64) -> Result<()>;

    /// 按端点标签创建权重为 1 的边
    fn add_unit_edge(&mut self, label: &str, n1: &str, n2: &str) -> Result<()> {
        self.add_edge_between(label, n1, n2, DEFAULT_WEIGHT)
    }

    /// 所有节点（插入顺序）
    fn get_all_nodes(&self) -> &[Node];

    /// 按标签查找节点（线性扫描）
    fn get_node(&self, label: &str) -> Option<&Node> {
        self.get_all_nodes().iter().find(|n| n.label() == label)
    }

    /// 按标签查找节点下标（线性扫描）
    fn node_index(&self, label: &str) -> Option<NodeId> {
        self.get_all_nodes()
            .iter()
            .position(|n| n.label() == label)
            .map(NodeId::new)
    }

    /// 按 ID 获取节点
    fn node(&self, id: NodeId) -> Option<&Node> {
        self.get_all_nodes().get(id.index())
    }

    /// 按标签查找边，不存在时返回 `None`
    fn get_edge(&self, label: &str) -> Option<EdgeRef<'_, Self::Dir>>;

    /// 所有边，每条边恰好出现一次
    fn edges(&self) -> Vec<EdgeRef<'_, Self::Dir>>;

    /// 两个节点之间的所有边（有向图只看 n1 -> n2）
    fn edges_between(&self, n1: &str, n2: &str) -> Vec<EdgeRef<'_, Self::Dir>>;

    fn node_count(&self) -> usize {
        self.get_all_nodes().len()
    }

    fn edge_count(&self) -> usize;

    fn is_directed(&self) -> bool {
        <Self::Dir as Direction>::DIRECTED
    }

    fn contains_node(&self, label: &str) -> bool {
        self.get_node(label).is_some()
    }

    fn contains_edge(&self, label: &str) -> bool {
        self.get_edge(label).is_some()
    }

    /// 结构相等：节点标签集合相同，且 (边标签, 端点) 集合相同
    fn structurally_eq<G>(&self, other: &G) -> bool
    where
        G: GraphStore<Dir = Self::Dir>,
        Self: Sized,
    {
        self.node_count() == other.node_count()
            && self.edge_count() == other.edge_count()
            && node_labels(self) == node_labels(other)
            && edge_signature(self) == edge_signature(other)
    }
}

/// 节点标签集合
pub(crate) fn node_labels<G: GraphStore>(graph: &G) -> BTreeSet<&str> {
    graph.get_all_nodes().iter().map(|n| n.label()).collect()
}

/// 边签名集合：(标签, 规范化端点)
pub(crate) fn edge_signature<G: GraphStore>(graph: &G) -> BTreeSet<(String, (String, String))> {
    graph
        .edges()
        .iter()
        .map(|e| {
            (
                e.label().to_string(),
                <G::Dir as Direction>::endpoint_key(e.n1().label(), e.n2().label()),
            )
        })
        .collect()
}

/// 在节点序列中解析两个端点，任一不存在时返回 `UnknownNode`
pub(crate) fn resolve_endpoints(nodes: &[Node], n1: &str, n2: &str) -> Result<(NodeId, NodeId)> {
    let find = |label: &str| nodes.iter().position(|n| n.label() == label);
    match (find(n1), find(n2)) {
        (Some(a), Some(b)) => Ok((NodeId::new(a), NodeId::new(b))),
        _ => Err(Error::unknown_node(n1, n2)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_endpoints() {
        let nodes = vec![Node::new("A"), Node::new("B")];
        assert_eq!(
            resolve_endpoints(&nodes, "B", "A").unwrap(),
            (NodeId(1), NodeId(0))
        );

        match resolve_endpoints(&nodes, "A", "Z") {
            Err(Error::UnknownNode { n1, n2 }) => {
                assert_eq!(n1, "A");
                assert_eq!(n2, "Z");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
