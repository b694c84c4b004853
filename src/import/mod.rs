//! 图描述导入
//!
//! 从 JSON 描述文件构建图：
//!
//! ```json
//! {
//!   "nodes": ["A", "B", "C"],
//!   "edges": [{ "label": "e1", "n1": "A", "n2": "B", "weight": 5 }]
//! }
//! ```
//!
//! 先添加全部节点，再添加全部边。缺少 `nodes`/`edges` 集合或边缺少字段时返回结构解析错误；
//! 权重缺省或为 0 时按 1 处理。

use crate::config::GraphConfig;
use crate::error::{Error, Result};
use crate::graph::{DynGraph, GraphStore, DEFAULT_WEIGHT};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use std::time::Instant;
use tracing::info;

/// 导入统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImportStats {
    pub nodes_imported: usize,
    pub edges_imported: usize,
    pub duration_ms: u64,
}

/// 边描述
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRecord {
    pub label: String,
    pub n1: String,
    pub n2: String,
    pub weight: Option<i64>,
}

impl EdgeRecord {
    /// 实际写入的权重，缺省或 0 视为 1
    pub fn effective_weight(&self) -> i64 {
        match self.weight {
            None | Some(0) => DEFAULT_WEIGHT,
            Some(w) => w,
        }
    }
}

/// 图描述
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphDescription {
    pub nodes: Vec<String>,
    pub edges: Vec<EdgeRecord>,
}

/// 原始描述，字段缺失在校验阶段报告
#[derive(Debug, Deserialize)]
struct RawDescription {
    nodes: Option<Vec<String>>,
    edges: Option<Vec<RawEdge>>,
}

#[derive(Debug, Deserialize)]
struct RawEdge {
    label: Option<String>,
    n1: Option<String>,
    n2: Option<String>,
    weight: Option<i64>,
}

impl RawEdge {
    fn validate(self, index: usize) -> Result<EdgeRecord> {
        let missing = |field: &str| Error::structural(format!("edges[{}] 缺少字段 {}", index, field));
        Ok(EdgeRecord {
            label: self.label.ok_or_else(|| missing("label"))?,
            n1: self.n1.ok_or_else(|| missing("n1"))?,
            n2: self.n2.ok_or_else(|| missing("n2"))?,
            weight: self.weight,
        })
    }
}

impl FromStr for GraphDescription {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        let raw: RawDescription = serde_json::from_str(text)
            .map_err(|e| Error::structural(format!("JSON 解析错误: {}", e)))?;

        let nodes = raw
            .nodes
            .ok_or_else(|| Error::structural("缺少 nodes 集合"))?;
        let edges = raw
            .edges
            .ok_or_else(|| Error::structural("缺少 edges 集合"))?
            .into_iter()
            .enumerate()
            .map(|(i, edge)| edge.validate(i))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { nodes, edges })
    }
}

impl GraphDescription {
    /// 从文件读取描述
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        text.parse()
    }
}

/// 将描述写入已有的图
///
/// 节点和边逐条插入，遇到第一个错误立即返回，此前已插入的内容保留在图中。
pub fn load_into<G: GraphStore>(graph: &mut G, desc: &GraphDescription) -> Result<ImportStats> {
    let start = Instant::now();
    let mut stats = ImportStats::default();

    for label in &desc.nodes {
        graph.add_node(label.as_str())?;
        stats.nodes_imported += 1;
    }
    for edge in &desc.edges {
        graph.add_edge_between(&edge.label, &edge.n1, &edge.n2, edge.effective_weight())?;
        stats.edges_imported += 1;
    }

    stats.duration_ms = start.elapsed().as_millis() as u64;
    info!(
        nodes = stats.nodes_imported,
        edges = stats.edges_imported,
        duration_ms = stats.duration_ms,
        "graph description loaded"
    );
    Ok(stats)
}

/// 按描述构建一个新图
pub fn build<G: GraphStore + Default>(desc: &GraphDescription) -> Result<G> {
    let mut graph = G::default();
    load_into(&mut graph, desc)?;
    Ok(graph)
}

/// 按配置选择存储策略的导入器
pub struct Importer {
    config: GraphConfig,
}

impl Importer {
    pub fn new(config: GraphConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// 从描述文本导入
    pub fn import_str(&self, text: &str) -> Result<(DynGraph, ImportStats)> {
        let desc: GraphDescription = text.parse()?;
        self.import(&desc)
    }

    /// 从描述文件导入
    pub fn import_path<P: AsRef<Path>>(&self, path: P) -> Result<(DynGraph, ImportStats)> {
        let desc = GraphDescription::from_path(path)?;
        self.import(&desc)
    }

    pub fn import(&self, desc: &GraphDescription) -> Result<(DynGraph, ImportStats)> {
        let mut graph = self.config.build();
        let stats = graph.load(desc)?;
        Ok((graph, stats))
    }
}
