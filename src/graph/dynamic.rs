//! 运行时选择的图
//!
//! 命令行工具在启动时才知道存储策略和方向，`DynGraph` 把四种存储封装成一个枚举，
//! 读取结果转换为不带生命周期的 `EdgeSummary`。

use super::edge::{Direction, EdgeRef};
use super::inspect::Inspect;
use super::list::{AdjacencyList, DirectedAdjacencyList};
use super::matrix::{AdjacencyMatrix, DirectedAdjacencyMatrix, MatrixGraph, MatrixLayout};
use super::node::{Node, NodeId};
use super::store::GraphStore;
use crate::config::Layout;
use crate::error::Result;
use crate::import::{load_into, GraphDescription, ImportStats};
use std::fmt;

/// 边的摘要
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeSummary {
    pub label: String,
    pub n1: String,
    pub n2: String,
    pub weight: i64,
    pub directed: bool,
}

impl<D: Direction> From<EdgeRef<'_, D>> for EdgeSummary {
    fn from(edge: EdgeRef<'_, D>) -> Self {
        Self {
            label: edge.label().to_string(),
            n1: edge.n1().label().to_string(),
            n2: edge.n2().label().to_string(),
            weight: edge.weight(),
            directed: edge.is_directed(),
        }
    }
}

impl fmt::Display for EdgeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let connector = if self.directed { "->" } else { "-" };
        write!(
            f,
            "{}: {}{}{}({})",
            self.label, self.n1, connector, self.n2, self.weight
        )
    }
}

/// 结构检查结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectReport {
    pub has_loops: bool,
    pub has_parallels: bool,
    pub non_adjacent_pairs: Vec<(String, String)>,
    pub is_complete: bool,
}

/// 四种存储之一
#[derive(Debug, Clone)]
pub enum DynGraph {
    List(AdjacencyList),
    DirectedList(DirectedAdjacencyList),
    Matrix(AdjacencyMatrix),
    DirectedMatrix(DirectedAdjacencyMatrix),
}

macro_rules! dispatch {
    ($self:expr, $g:ident => $body:expr) => {
        match $self {
            DynGraph::List($g) => $body,
            DynGraph::DirectedList($g) => $body,
            DynGraph::Matrix($g) => $body,
            DynGraph::DirectedMatrix($g) => $body,
        }
    };
}

fn summarize<'g, D: Direction>(edges: Vec<EdgeRef<'g, D>>) -> Vec<EdgeSummary> {
    edges.into_iter().map(EdgeSummary::from).collect()
}

fn cell_labels<D: MatrixLayout>(graph: &MatrixGraph<D>) -> Vec<Vec<Vec<String>>> {
    graph
        .get_all_edges()
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| cell.keys().cloned().collect())
                .collect()
        })
        .collect()
}

impl DynGraph {
    /// 创建空图
    pub fn new(layout: Layout, directed: bool) -> Self {
        match (layout, directed) {
            (Layout::List, false) => DynGraph::List(AdjacencyList::new()),
            (Layout::List, true) => DynGraph::DirectedList(DirectedAdjacencyList::new()),
            (Layout::Matrix, false) => DynGraph::Matrix(AdjacencyMatrix::new()),
            (Layout::Matrix, true) => DynGraph::DirectedMatrix(DirectedAdjacencyMatrix::new()),
        }
    }

    /// 存储类型名称
    pub fn kind_name(&self) -> &'static str {
        match self {
            DynGraph::List(_) => "AdjacencyList",
            DynGraph::DirectedList(_) => "DirectedAdjacencyList",
            DynGraph::Matrix(_) => "AdjacencyMatrix",
            DynGraph::DirectedMatrix(_) => "DirectedAdjacencyMatrix",
        }
    }

    pub fn layout(&self) -> Layout {
        match self {
            DynGraph::List(_) | DynGraph::DirectedList(_) => Layout::List,
            DynGraph::Matrix(_) | DynGraph::DirectedMatrix(_) => Layout::Matrix,
        }
    }

    pub fn is_directed(&self) -> bool {
        dispatch!(self, g => g.is_directed())
    }

    pub fn add_node(&mut self, label: &str) -> Result<NodeId> {
        dispatch!(self, g => g.add_node(label))
    }

    pub fn add_edge_between(&mut self, label: &str, n1: &str, n2: &str, weight: i64) -> Result<()> {
        dispatch!(self, g => g.add_edge_between(label, n1, n2, weight))
    }

    pub fn get_node(&self, label: &str) -> Option<&Node> {
        dispatch!(self, g => g.get_node(label))
    }

    pub fn get_all_nodes(&self) -> &[Node] {
        dispatch!(self, g => g.get_all_nodes())
    }

    pub fn get_edge(&self, label: &str) -> Option<EdgeSummary> {
        dispatch!(self, g => g.get_edge(label).map(EdgeSummary::from))
    }

    pub fn edges(&self) -> Vec<EdgeSummary> {
        dispatch!(self, g => summarize(g.edges()))
    }

    pub fn edges_between(&self, n1: &str, n2: &str) -> Vec<EdgeSummary> {
        dispatch!(self, g => summarize(g.edges_between(n1, n2)))
    }

    pub fn node_count(&self) -> usize {
        dispatch!(self, g => g.node_count())
    }

    pub fn edge_count(&self) -> usize {
        dispatch!(self, g => g.edge_count())
    }

    pub fn degree(&self, label: &str) -> Result<usize> {
        dispatch!(self, g => g.degree(label))
    }

    pub fn edges_over_node(&self, label: &str) -> Result<Vec<EdgeSummary>> {
        dispatch!(self, g => g.edges_over_node(label).map(summarize))
    }

    /// 结构检查
    pub fn inspect(&self) -> InspectReport {
        dispatch!(self, g => InspectReport {
            has_loops: g.has_loops(),
            has_parallels: g.has_parallels(),
            non_adjacent_pairs: g.non_adjacent_pairs(),
            is_complete: g.is_complete(),
        })
    }

    /// 矩阵单元格中的边标签，邻接表返回 `None`
    pub fn matrix_cells(&self) -> Option<Vec<Vec<Vec<String>>>> {
        match self {
            DynGraph::Matrix(g) => Some(cell_labels(g)),
            DynGraph::DirectedMatrix(g) => Some(cell_labels(g)),
            DynGraph::List(_) | DynGraph::DirectedList(_) => None,
        }
    }

    /// 载入描述，失败时图保持载入前的状态
    pub fn load(&mut self, desc: &GraphDescription) -> Result<ImportStats> {
        let mut staged = self.clone();
        let stats = dispatch!(&mut staged, g => load_into(g, desc))?;
        *self = staged;
        Ok(stats)
    }
}

impl PartialEq for DynGraph {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (DynGraph::List(a), DynGraph::List(b)) => a == b,
            (DynGraph::DirectedList(a), DynGraph::DirectedList(b)) => a == b,
            (DynGraph::Matrix(a), DynGraph::Matrix(b)) => a == b,
            (DynGraph::DirectedMatrix(a), DynGraph::DirectedMatrix(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for DynGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        dispatch!(self, g => write!(f, "{}", g))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_dyn_graph_kinds() {
        assert_eq!(DynGraph::new(Layout::List, false).kind_name(), "AdjacencyList");
        assert_eq!(
            DynGraph::new(Layout::List, true).kind_name(),
            "DirectedAdjacencyList"
        );
        assert_eq!(DynGraph::new(Layout::Matrix, false).layout(), Layout::Matrix);
        assert!(DynGraph::new(Layout::Matrix, true).is_directed());
    }

    #[test]
    fn test_dyn_graph_operations() {
        for (layout, directed) in [
            (Layout::List, false),
            (Layout::List, true),
            (Layout::Matrix, false),
            (Layout::Matrix, true),
        ] {
            let mut g = DynGraph::new(layout, directed);
            g.add_node("A").unwrap();
            g.add_node("B").unwrap();
            g.add_edge_between("e1", "A", "B", 5).unwrap();

            let e = g.get_edge("e1").unwrap();
            assert_eq!(e.n1, "A");
            assert_eq!(e.weight, 5);
            assert_eq!(e.directed, directed);
            assert_eq!(g.edges().len(), 1);
            assert_eq!(g.degree("B").unwrap(), 1);
            assert_eq!(g.edges_between("B", "A").len(), usize::from(!directed));
            assert_eq!(g.matrix_cells().is_some(), layout == Layout::Matrix);
        }
    }

    #[test]
    fn test_failed_load_keeps_graph() {
        let mut g = DynGraph::new(Layout::Matrix, false);
        g.add_node("A").unwrap();
        let before = g.clone();

        let desc: GraphDescription =
            r#"{"nodes": ["B"], "edges": [{"label": "e1", "n1": "A", "n2": "Z"}]}"#
                .parse()
                .unwrap();
        assert!(matches!(g.load(&desc), Err(Error::UnknownNode { .. })));
        assert_eq!(g, before);
        assert_eq!(g.node_count(), 1);
    }

    #[test]
    fn test_edge_summary_display() {
        let mut g = DynGraph::new(Layout::List, true);
        g.add_node("X").unwrap();
        g.add_node("Y").unwrap();
        g.add_edge_between("d1", "X", "Y", 2).unwrap();
        assert_eq!(g.get_edge("d1").unwrap().to_string(), "d1: X->Y(2)");
    }

    #[test]
    fn test_inspect_report() {
        let mut g = DynGraph::new(Layout::List, false);
        g.add_node("A").unwrap();
        g.add_node("B").unwrap();
        let report = g.inspect();
        assert!(!report.is_complete);
        assert_eq!(
            report.non_adjacent_pairs,
            vec![("A".to_string(), "B".to_string())]
        );
    }
}
