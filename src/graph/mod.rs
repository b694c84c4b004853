//! 图核心模块
//!
//! 定义节点、边、图存储接口以及邻接表和邻接矩阵两种存储策略

mod dynamic;
mod edge;
mod inspect;
mod list;
mod matrix;
mod node;
mod store;

pub use dynamic::{DynGraph, EdgeSummary, InspectReport};
pub use edge::{
    BaseEdge, Directed, DirectedEdge, Direction, Edge, EdgeEntry, EdgeRef, Undirected,
    DEFAULT_WEIGHT,
};
pub use inspect::Inspect;
pub use list::{AdjacencyList, DirectedAdjacencyList, ListGraph};
pub use matrix::{AdjacencyMatrix, DirectedAdjacencyMatrix, EdgeCell, MatrixGraph, MatrixLayout};
pub use node::{Node, NodeId};
pub use store::GraphStore;
