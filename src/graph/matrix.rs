//! 邻接矩阵
//!
//! 节点按插入顺序保存，节点下标同时是矩阵的行列号。每个单元格是以边标签为键的映射，
//! 因此同一对节点之间可以有多条平行边。
//!
//! - 无向矩阵为下三角：第 i 行恰好有 i + 1 个单元格，边 {i, j} 只存放在
//!   `[max(i, j)][min(i, j)]`，自环存放在对角线 `[i][i]`
//! - 有向矩阵为方阵：n 个节点时每行 n 个单元格，边 i -> j 只存放在 `[i][j]`

use super::edge::{BaseEdge, Directed, Direction, EdgeEntry, EdgeRef, Undirected};
use super::node::{Node, NodeId};
use super::store::{resolve_endpoints, GraphStore};
use crate::error::{Error, Result};
use indexmap::IndexMap;
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;
use tracing::{debug, warn};

/// 矩阵单元格：边标签 -> 边
pub type EdgeCell = IndexMap<String, EdgeEntry>;

/// 矩阵布局（由方向决定）
pub trait MatrixLayout: Direction {
    /// 边 (n1, n2) 所在的单元格 (行, 列)
    fn slot(n1: usize, n2: usize) -> (usize, usize);

    /// 共有 n 个节点时第 row 行的单元格数
    fn row_len(row: usize, n: usize) -> usize;

    /// 新增一个节点后扩展矩阵
    fn grow(rows: &mut Vec<Vec<EdgeCell>>);
}

fn empty_row(len: usize) -> Vec<EdgeCell> {
    (0..len).map(|_| EdgeCell::new()).collect()
}

impl MatrixLayout for Undirected {
    fn slot(n1: usize, n2: usize) -> (usize, usize) {
        (n1.max(n2), n1.min(n2))
    }

    fn row_len(row: usize, _n: usize) -> usize {
        row + 1
    }

    fn grow(rows: &mut Vec<Vec<EdgeCell>>) {
        // 已有行不变，新行包含到对角线为止的 k 个单元格
        let k = rows.len() + 1;
        rows.push(empty_row(k));
    }
}

impl MatrixLayout for Directed {
    fn slot(n1: usize, n2: usize) -> (usize, usize) {
        (n1, n2)
    }

    fn row_len(_row: usize, n: usize) -> usize {
        n
    }

    fn grow(rows: &mut Vec<Vec<EdgeCell>>) {
        for row in rows.iter_mut() {
            row.push(EdgeCell::new());
        }
        let n = rows.len() + 1;
        rows.push(empty_row(n));
    }
}

/// 基于邻接矩阵的图
#[derive(Debug, Clone)]
pub struct MatrixGraph<D: MatrixLayout> {
    /// 节点（插入顺序）
    nodes: Vec<Node>,
    /// 邻接矩阵
    cells: Vec<Vec<EdgeCell>>,
    /// 边标签 -> 所在单元格
    locator: HashMap<String, (usize, usize)>,
    _dir: PhantomData<D>,
}

/// 无向邻接矩阵
pub type AdjacencyMatrix = MatrixGraph<Undirected>;

/// 有向邻接矩阵
pub type DirectedAdjacencyMatrix = MatrixGraph<Directed>;

impl<D: MatrixLayout> MatrixGraph<D> {
    /// 创建空图
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            cells: Vec::new(),
            locator: HashMap::new(),
            _dir: PhantomData,
        }
    }

    /// 获取原始矩阵，读取方需要知道存储约定（下三角或方阵）
    pub fn get_all_edges(&self) -> &[Vec<EdgeCell>] {
        &self.cells
    }

    /// 获取原始单元格
    pub fn cell(&self, row: usize, col: usize) -> Option<&EdgeCell> {
        self.cells.get(row)?.get(col)
    }

    /// 获取两个节点之间的边（无向矩阵自动定位到下三角）
    pub fn cell_edges(&self, n1: NodeId, n2: NodeId) -> Vec<EdgeRef<'_, D>> {
        let (row, col) = D::slot(n1.index(), n2.index());
        self.cell(row, col)
            .map(|cell| cell.values().map(|e| self.edge_ref(e)).collect())
            .unwrap_or_default()
    }

    /// 矩阵维度（等于节点数）
    pub fn dimension(&self) -> usize {
        self.cells.len()
    }

    /// 每一行的单元格数
    pub fn row_lengths(&self) -> Vec<usize> {
        self.cells.iter().map(|row| row.len()).collect()
    }

    fn edge_ref<'g>(&'g self, entry: &'g EdgeEntry) -> EdgeRef<'g, D> {
        EdgeRef::new(entry, &self.nodes)
    }

    fn insert_edge(&mut self, label: &str, n1: &str, n2: &str, weight: i64) -> Result<()> {
        if self.locator.contains_key(label) {
            warn!(label, "edge label already exists");
            return Err(Error::duplicate_edge(label));
        }
        let (id1, id2) = resolve_endpoints(&self.nodes, n1, n2).map_err(|e| {
            warn!(label, n1, n2, "edge endpoints not found");
            e
        })?;

        let (row, col) = D::slot(id1.index(), id2.index());
        self.cells[row][col].insert(
            label.to_string(),
            EdgeEntry::new(label.to_string(), id1, id2, weight),
        );
        self.locator.insert(label.to_string(), (row, col));
        debug!(label, n1, n2, weight, row, col, "edge added to adjacency matrix");
        Ok(())
    }
}

impl<D: MatrixLayout> Default for MatrixGraph<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: MatrixLayout> GraphStore for MatrixGraph<D> {
    type Dir = D;

    fn add_node<N: Into<Node>>(&mut self, node: N) -> Result<NodeId> {
        let node = node.into();
        if self.contains_node(node.label()) {
            warn!(label = node.label(), "node label already exists");
            return Err(Error::duplicate_node(node.label()));
        }

        let id = NodeId::new(self.nodes.len());
        debug!(label = node.label(), index = id.index(), "node added to adjacency matrix");
        self.nodes.push(node);
        D::grow(&mut self.cells);
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
        let &(row, col) = self.locator.get(label)?;
        self.cell(row, col)?
            .get(label)
            .map(|entry| self.edge_ref(entry))
    }

    fn edges(&self) -> Vec<EdgeRef<'_, D>> {
        self.cells
            .iter()
            .flatten()
            .flat_map(|cell| cell.values())
            .map(|entry| self.edge_ref(entry))
            .collect()
    }

    fn edges_between(&self, n1: &str, n2: &str) -> Vec<EdgeRef<'_, D>> {
        match (self.node_index(n1), self.node_index(n2)) {
            (Some(a), Some(b)) => self.cell_edges(a, b),
            _ => Vec::new(),
        }
    }

    fn edge_count(&self) -> usize {
        self.locator.len()
    }
}

impl<D: MatrixLayout> PartialEq for MatrixGraph<D> {
    fn eq(&self, other: &Self) -> bool {
        self.structurally_eq(other)
    }
}

impl<D: MatrixLayout> Eq for MatrixGraph<D> {}

impl<D: MatrixLayout> fmt::Display for MatrixGraph<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            write!(f, "{}:", self.nodes[i])?;
            for cell in row {
                let labels: Vec<&str> = cell.keys().map(String::as_str).collect();
                write!(f, " [{}]", labels.join(","))?;
            }
            if i + 1 < self.cells.len() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
