//! Stella - 教学用图论工具包
//!
//! 提供两种可互换的图存储，均支持无向与有向：
//! - 邻接表：节点按插入顺序保存，边按标签索引
//! - 邻接矩阵：无向为下三角矩阵，有向为方阵，单元格支持平行边
//!
//! 另附 JSON 描述导入、结构查询和交互式控制台。

pub mod cli;
pub mod config;
pub mod error;
pub mod graph;
pub mod import;

// 重导出常用类型
pub use config::{GraphConfig, Layout};
pub use error::{Error, LabelKind, Result};
pub use graph::{
    AdjacencyList, AdjacencyMatrix, BaseEdge, DirectedAdjacencyList, DirectedAdjacencyMatrix,
    DirectedEdge, DynGraph, Edge, EdgeRef, GraphStore, Inspect, Node, NodeId,
};
pub use import::{GraphDescription, ImportStats, Importer};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
