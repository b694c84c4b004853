//! 边定义
//!
//! 无向边与有向边共享同一个结构，方向语义由类型参数 `D` 决定：
//! - `Edge` = `BaseEdge<Undirected>`：端点顺序无关
//! - `DirectedEdge` = `BaseEdge<Directed>`：表示 n1 -> n2
//!
//! 图内部只保存 `EdgeEntry`（端点为 `NodeId`），读取时借出 `EdgeRef`。

use crate::graph::node::{Node, NodeId};
use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

/// 默认权重
pub const DEFAULT_WEIGHT: i64 = 1;

mod sealed {
    pub trait Sealed {}
}

/// 边的方向语义
pub trait Direction:
    sealed::Sealed + fmt::Debug + Clone + Copy + Default + Send + Sync + 'static
{
    /// 是否有向
    const DIRECTED: bool;
    /// 显示时两个端点之间的连接符
    const CONNECTOR: &'static str;

    /// 两组端点是否相同
    fn same_endpoints(a: (&str, &str), b: (&str, &str)) -> bool;

    /// 规范化的端点键，无向边按标签排序
    fn endpoint_key(n1: &str, n2: &str) -> (String, String);
}

/// 无向
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Undirected;

/// 有向
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Directed;

impl sealed::Sealed for Undirected {}
impl sealed::Sealed for Directed {}

impl Direction for Undirected {
    const DIRECTED: bool = false;
    const CONNECTOR: &'static str = "-";

    fn same_endpoints(a: (&str, &str), b: (&str, &str)) -> bool {
        a == b || (a.0 == b.1 && a.1 == b.0)
    }

    fn endpoint_key(n1: &str, n2: &str) -> (String, String) {
        if n1 <= n2 {
            (n1.to_string(), n2.to_string())
        } else {
            (n2.to_string(), n1.to_string())
        }
    }
}

impl Direction for Directed {
    const DIRECTED: bool = true;
    const CONNECTOR: &'static str = "->";

    fn same_endpoints(a: (&str, &str), b: (&str, &str)) -> bool {
        a == b
    }

    fn endpoint_key(n1: &str, n2: &str) -> (String, String) {
        (n1.to_string(), n2.to_string())
    }
}

/// 独立的边（尚未插入图，或从图中复制出来）
#[derive(Debug, Clone)]
pub struct BaseEdge<D: Direction> {
    label: String,
    n1: Node,
    n2: Node,
    weight: i64,
    _dir: PhantomData<D>,
}

/// 无向边
pub type Edge = BaseEdge<Undirected>;

/// 有向边
pub type DirectedEdge = BaseEdge<Directed>;

impl<D: Direction> BaseEdge<D> {
    /// 创建权重为 1 的边
    pub fn new(label: impl Into<String>, n1: impl Into<Node>, n2: impl Into<Node>) -> Self {
        Self::with_weight(label, n1, n2, DEFAULT_WEIGHT)
    }

    /// 创建带权重的边
    pub fn with_weight(
        label: impl Into<String>,
        n1: impl Into<Node>,
        n2: impl Into<Node>,
        weight: i64,
    ) -> Self {
        Self {
            label: label.into(),
            n1: n1.into(),
            n2: n2.into(),
            weight,
            _dir: PhantomData,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn n1(&self) -> &Node {
        &self.n1
    }

    pub fn n2(&self) -> &Node {
        &self.n2
    }

    pub fn weight(&self) -> i64 {
        self.weight
    }

    pub fn is_directed(&self) -> bool {
        D::DIRECTED
    }

    /// 按权重比较
    pub fn weight_cmp(&self, other: &Self) -> Ordering {
        self.weight.cmp(&other.weight)
    }

    pub fn lighter_than(&self, other: &Self) -> bool {
        self.weight < other.weight
    }

    pub fn heavier_than(&self, other: &Self) -> bool {
        self.weight > other.weight
    }

    fn endpoint_labels(&self) -> (&str, &str) {
        (self.n1.label(), self.n2.label())
    }
}

impl<D: Direction> PartialEq for BaseEdge<D> {
    fn eq(&self, other: &Self) -> bool {
        D::same_endpoints(self.endpoint_labels(), other.endpoint_labels())
    }
}

impl<D: Direction> Eq for BaseEdge<D> {}

impl<D: Direction> fmt::Display for BaseEdge<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}{}{}({})",
            self.label,
            self.n1,
            D::CONNECTOR,
            self.n2,
            self.weight
        )
    }
}

/// 图内部存储的边
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeEntry {
    label: String,
    n1: NodeId,
    n2: NodeId,
    weight: i64,
}

impl EdgeEntry {
    pub(crate) fn new(label: String, n1: NodeId, n2: NodeId, weight: i64) -> Self {
        Self {
            label,
            n1,
            n2,
            weight,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn n1(&self) -> NodeId {
        self.n1
    }

    pub fn n2(&self) -> NodeId {
        self.n2
    }

    pub fn weight(&self) -> i64 {
        self.weight
    }

    pub fn is_loop(&self) -> bool {
        self.n1 == self.n2
    }
}

/// 从图中借出的边视图，端点解析为图内的节点
pub struct EdgeRef<'g, D: Direction> {
    entry: &'g EdgeEntry,
    nodes: &'g [Node],
    _dir: PhantomData<D>,
}

impl<'g, D: Direction> EdgeRef<'g, D> {
    /// `entry` 的端点必须是 `nodes` 中的有效下标
    pub(crate) fn new(entry: &'g EdgeEntry, nodes: &'g [Node]) -> Self {
        Self {
            entry,
            nodes,
            _dir: PhantomData,
        }
    }

    pub fn label(&self) -> &'g str {
        self.entry.label()
    }

    pub fn n1(&self) -> &'g Node {
        &self.nodes[self.entry.n1.index()]
    }

    pub fn n2(&self) -> &'g Node {
        &self.nodes[self.entry.n2.index()]
    }

    pub fn n1_id(&self) -> NodeId {
        self.entry.n1
    }

    pub fn n2_id(&self) -> NodeId {
        self.entry.n2
    }

    pub fn weight(&self) -> i64 {
        self.entry.weight
    }

    pub fn is_directed(&self) -> bool {
        D::DIRECTED
    }

    pub fn is_loop(&self) -> bool {
        self.entry.is_loop()
    }

    pub fn entry(&self) -> &'g EdgeEntry {
        self.entry
    }

    /// 按权重比较
    pub fn weight_cmp(&self, other: &EdgeRef<'_, D>) -> Ordering {
        self.weight().cmp(&other.weight())
    }

    /// 是否与另一条边的端点相同（按方向语义）
    pub fn same_endpoints_as(&self, other: &EdgeRef<'_, D>) -> bool {
        D::same_endpoints(self.endpoint_labels(), other.endpoint_labels())
    }

    /// 复制为独立的边
    pub fn to_edge(&self) -> BaseEdge<D> {
        BaseEdge::with_weight(
            self.label(),
            self.n1().clone(),
            self.n2().clone(),
            self.weight(),
        )
    }

    fn endpoint_labels(&self) -> (&'g str, &'g str) {
        (self.n1().label(), self.n2().label())
    }
}

impl<D: Direction> Clone for EdgeRef<'_, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: Direction> Copy for EdgeRef<'_, D> {}

impl<'a, 'b, D: Direction> PartialEq<EdgeRef<'b, D>> for EdgeRef<'a, D> {
    fn eq(&self, other: &EdgeRef<'b, D>) -> bool {
        self.same_endpoints_as(other)
    }
}

impl<D: Direction> PartialEq<BaseEdge<D>> for EdgeRef<'_, D> {
    fn eq(&self, other: &BaseEdge<D>) -> bool {
        D::same_endpoints(self.endpoint_labels(), other.endpoint_labels())
    }
}

impl<D: Direction> PartialEq<EdgeRef<'_, D>> for BaseEdge<D> {
    fn eq(&self, other: &EdgeRef<'_, D>) -> bool {
        other == self
    }
}

impl<D: Direction> fmt::Debug for EdgeRef<'_, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EdgeRef")
            .field("label", &self.label())
            .field("n1", &self.n1().label())
            .field("n2", &self.n2().label())
            .field("weight", &self.weight())
            .field("directed", &D::DIRECTED)
            .finish()
    }
}

impl<D: Direction> fmt::Display for EdgeRef<'_, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}{}{}({})",
            self.label(),
            self.n1(),
            D::CONNECTOR,
            self.n2(),
            self.weight()
        )
    }
}
