//! 节点定义
//!
//! 节点只有一个不可变的标签，标签就是节点在图内的唯一身份

use serde::{Deserialize, Serialize};
use std::fmt;

/// 节点 ID（在所属图内按插入顺序分配，同时也是矩阵下标）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub usize);

impl NodeId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl From<usize> for NodeId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 节点
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Node {
    label: String,
}

impl Node {
    /// 创建新节点
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    /// 获取节点标签
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl From<&str> for Node {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for Node {
    fn from(label: String) -> Self {
        Self::new(label)
    }
}

impl From<&Node> for Node {
    fn from(node: &Node) -> Self {
        node.clone()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}
