//! 错误类型定义

use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// 发生标签冲突的对象类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKind {
    Node,
    Edge,
}

impl fmt::Display for LabelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelKind::Node => write!(f, "节点"),
            LabelKind::Edge => write!(f, "边"),
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("{kind}已存在: {label}")]
    DuplicateLabel { kind: LabelKind, label: String },

    #[error("节点标签不存在: {n1} {n2}")]
    UnknownNode { n1: String, n2: String },

    #[error("节点不存在: {0}")]
    NodeNotFound(String),

    #[error("结构解析错误: {0}")]
    StructuralParse(String),

    #[error("配置错误: {0}")]
    InvalidConfig(String),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn duplicate_node<T: Into<String>>(label: T) -> Self {
        Error::DuplicateLabel {
            kind: LabelKind::Node,
            label: label.into(),
        }
    }

    pub fn duplicate_edge<T: Into<String>>(label: T) -> Self {
        Error::DuplicateLabel {
            kind: LabelKind::Edge,
            label: label.into(),
        }
    }

    pub fn unknown_node<A: Into<String>, B: Into<String>>(n1: A, n2: B) -> Self {
        Error::UnknownNode {
            n1: n1.into(),
            n2: n2.into(),
        }
    }

    pub fn structural<T: Into<String>>(msg: T) -> Self {
        Error::StructuralParse(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(Error::duplicate_node("A").to_string(), "节点已存在: A");
        assert_eq!(Error::duplicate_edge("e1").to_string(), "边已存在: e1");
        assert_eq!(
            Error::unknown_node("A", "Z").to_string(),
            "节点标签不存在: A Z"
        );
    }
}
