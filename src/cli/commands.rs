//! 控制台命令处理

use crate::cli::printer::{check_vertical_display, PrintMode, Printer};
use crate::graph::{DynGraph, DEFAULT_WEIGHT};
use crate::import::GraphDescription;

/// 控制台命令执行结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// 继续运行
    Continue,
    /// 退出程序
    Exit,
    /// 显示消息
    Message(String),
    /// 错误
    Error(String),
}

impl CommandResult {
    fn usage(text: &str) -> Self {
        CommandResult::Error(format!("用法: {}", text))
    }
}

/// 解析并执行控制台命令
pub fn execute_command(input: &str, graph: &mut DynGraph) -> CommandResult {
    let (line, vertical) = check_vertical_display(input);
    let printer = Printer::new(if vertical {
        PrintMode::Vertical
    } else {
        PrintMode::Table
    });

    let mut parts = line.split_whitespace();
    let cmd = match parts.next() {
        Some(cmd) => cmd.to_lowercase(),
        None => return CommandResult::Continue,
    };
    let args: Vec<&str> = parts.collect();

    match cmd.as_str() {
        "help" | "h" | "?" => CommandResult::Message(Printer::print_help()),

        "quit" | "q" | "exit" => CommandResult::Exit,

        "clear" => {
            print!("\x1B[2J\x1B[1;1H");
            CommandResult::Continue
        }

        "stats" | "info" => CommandResult::Message(printer.print_stats(graph)),

        "add-node" => match args.as_slice() {
            [label] => match graph.add_node(label) {
                Ok(id) => CommandResult::Message(format!("节点已添加: {} ({})", label, id)),
                Err(e) => CommandResult::Error(e.to_string()),
            },
            _ => CommandResult::usage("add-node <标签>"),
        },

        "add-edge" => {
            let (label, n1, n2, weight) = match args.as_slice() {
                [label, n1, n2] => (*label, *n1, *n2, DEFAULT_WEIGHT),
                [label, n1, n2, w] => match w.parse::<i64>() {
                    Ok(w) => (*label, *n1, *n2, w),
                    Err(_) => return CommandResult::Error(format!("无效的权重: {}", w)),
                },
                _ => return CommandResult::usage("add-edge <标签> <n1> <n2> [权重]"),
            };
            match graph.add_edge_between(label, n1, n2, weight) {
                Ok(()) => CommandResult::Message(format!("边已添加: {}", label)),
                Err(e) => CommandResult::Error(e.to_string()),
            }
        }

        "node" => match args.as_slice() {
            [label] => show_node(graph, &printer, label),
            _ => CommandResult::usage("node <标签>"),
        },

        "edge" => match args.as_slice() {
            [label] => match graph.get_edge(label) {
                Some(edge) => CommandResult::Message(printer.print_edges(&[edge])),
                None => CommandResult::Error(format!("边不存在: {}", label)),
            },
            _ => CommandResult::usage("edge <标签>"),
        },

        "nodes" => CommandResult::Message(printer.print_nodes(graph.get_all_nodes())),

        "edges" => CommandResult::Message(printer.print_edges(&graph.edges())),

        "between" => match args.as_slice() {
            [n1, n2] => CommandResult::Message(printer.print_edges(&graph.edges_between(n1, n2))),
            _ => CommandResult::usage("between <n1> <n2>"),
        },

        "degree" => match args.as_slice() {
            [label] => match graph.degree(label) {
                Ok(degree) => CommandResult::Message(format!("{} 的度: {}", label, degree)),
                Err(e) => CommandResult::Error(e.to_string()),
            },
            _ => CommandResult::usage("degree <标签>"),
        },

        "inspect" => CommandResult::Message(printer.print_report(&graph.inspect())),

        "matrix" => match graph.matrix_cells() {
            Some(cells) => {
                CommandResult::Message(printer.print_matrix(graph.get_all_nodes(), &cells))
            }
            None => CommandResult::Error(format!("当前存储不是邻接矩阵: {}", graph.kind_name())),
        },

        "load" => match args.as_slice() {
            [path] => {
                let loaded = GraphDescription::from_path(path).and_then(|desc| graph.load(&desc));
                match loaded {
                    Ok(stats) => CommandResult::Message(format!(
                        "载入完成: {} 个节点, {} 条边 ({} ms)",
                        stats.nodes_imported, stats.edges_imported, stats.duration_ms
                    )),
                    Err(e) => CommandResult::Error(e.to_string()),
                }
            }
            _ => CommandResult::usage("load <文件>"),
        },

        _ => CommandResult::Error(format!("未知命令: {}。输入 'help' 查看帮助。", cmd)),
    }
}

fn show_node(graph: &DynGraph, printer: &Printer, label: &str) -> CommandResult {
    let index = match graph.get_all_nodes().iter().position(|n| n.label() == label) {
        Some(index) => index,
        None => return CommandResult::Error(format!("节点不存在: {}", label)),
    };

    match (graph.degree(label), graph.edges_over_node(label)) {
        (Ok(degree), Ok(edges)) => CommandResult::Message(format!(
            "节点 {} (#{}), 度: {}\n{}",
            label,
            index,
            degree,
            printer.print_edges(&edges)
        )),
        (Err(e), _) | (_, Err(e)) => CommandResult::Error(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Layout;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn run(graph: &mut DynGraph, input: &str) -> CommandResult {
        execute_command(input, graph)
    }

    #[test]
    fn test_basic_commands() {
        let mut g = DynGraph::new(Layout::List, false);
        assert_eq!(run(&mut g, "quit"), CommandResult::Exit);
        assert_eq!(run(&mut g, "   "), CommandResult::Continue);
        assert!(matches!(run(&mut g, "help"), CommandResult::Message(_)));
        assert!(matches!(run(&mut g, "frobnicate"), CommandResult::Error(_)));
    }

    #[test]
    fn test_add_and_query() {
        let mut g = DynGraph::new(Layout::Matrix, false);
        assert!(matches!(run(&mut g, "add-node A"), CommandResult::Message(_)));
        assert!(matches!(run(&mut g, "add-node B"), CommandResult::Message(_)));
        assert!(matches!(run(&mut g, "add-node A"), CommandResult::Error(_)));

        assert!(matches!(run(&mut g, "add-edge e1 A B 5"), CommandResult::Message(_)));
        assert!(matches!(run(&mut g, "add-edge e2 A Z"), CommandResult::Error(_)));
        assert!(matches!(run(&mut g, "add-edge e3 A B x"), CommandResult::Error(_)));
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.get_edge("e1").unwrap().weight, 5);

        match run(&mut g, "degree A") {
            CommandResult::Message(msg) => assert!(msg.contains('1')),
            other => panic!("unexpected result: {:?}", other),
        }
        match run(&mut g, "between B A") {
            CommandResult::Message(msg) => assert!(msg.contains("e1")),
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(matches!(run(&mut g, "node Q"), CommandResult::Error(_)));
        assert!(matches!(run(&mut g, "edge e9"), CommandResult::Error(_)));
        assert!(matches!(run(&mut g, "matrix"), CommandResult::Message(_)));
    }

    #[test]
    fn test_matrix_command_on_list() {
        let mut g = DynGraph::new(Layout::List, true);
        assert!(matches!(run(&mut g, "matrix"), CommandResult::Error(_)));
    }

    #[test]
    fn test_load_command() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"nodes": ["A", "B"], "edges": [{{"label": "e1", "n1": "A", "n2": "B"}}]}}"#
        )
        .unwrap();

        let mut g = DynGraph::new(Layout::List, false);
        let input = format!("load {}", file.path().display());
        assert!(matches!(run(&mut g, &input), CommandResult::Message(_)));
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.edge_count(), 1);

        // 再次载入会与已有标签冲突，图保持不变
        assert!(matches!(run(&mut g, &input), CommandResult::Error(_)));
        assert_eq!(g.node_count(), 2);
    }
}
