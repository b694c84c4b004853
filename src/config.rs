//! 图配置
//!
//! 选择存储策略（邻接表 / 邻接矩阵）和方向，可从 JSON 文件读取，也可由命令行参数构造。

use crate::error::{Error, Result};
use crate::graph::DynGraph;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// 存储策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// 邻接表
    #[default]
    List,
    /// 邻接矩阵
    Matrix,
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layout::List => write!(f, "list"),
            Layout::Matrix => write!(f, "matrix"),
        }
    }
}

/// 图配置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    pub layout: Layout,
    pub directed: bool,
}

impl GraphConfig {
    pub fn new(layout: Layout, directed: bool) -> Self {
        Self { layout, directed }
    }

    /// 从 JSON 文件读取配置
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::InvalidConfig(e.to_string()))
    }

    /// 按配置创建空图
    pub fn build(&self) -> DynGraph {
        DynGraph::new(self.layout, self.directed)
    }
}
