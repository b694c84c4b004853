//! 结果打印器
//!
//! 提供表格和垂直格式的结果输出

use crate::graph::{DynGraph, EdgeSummary, InspectReport, Node};
use prettytable::{format, row, Cell, Row, Table};

/// 打印模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintMode {
    /// 表格模式
    Table,
    /// 垂直模式 (\G)
    Vertical,
}

/// 结果打印器
pub struct Printer {
    mode: PrintMode,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(PrintMode::Table)
    }
}

impl Printer {
    pub fn new(mode: PrintMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> PrintMode {
        self.mode
    }

    /// 设置打印模式
    pub fn set_mode(&mut self, mode: PrintMode) {
        self.mode = mode;
    }

    /// 打印行列结果
    pub fn print_result(&self, columns: &[&str], rows: &[Vec<String>]) -> String {
        if columns.is_empty() || rows.is_empty() {
            return "Empty set\n".to_string();
        }

        let output = match self.mode {
            PrintMode::Table => self.format_table(columns, rows),
            PrintMode::Vertical => self.format_vertical(columns, rows),
        };

        format!("{}{} row(s) in set\n", output, rows.len())
    }

    /// 节点列表
    pub fn print_nodes(&self, nodes: &[Node]) -> String {
        let rows: Vec<Vec<String>> = nodes
            .iter()
            .enumerate()
            .map(|(i, n)| vec![i.to_string(), n.label().to_string()])
            .collect();
        self.print_result(&["index", "label"], &rows)
    }

    /// 边列表
    pub fn print_edges(&self, edges: &[EdgeSummary]) -> String {
        let rows: Vec<Vec<String>> = edges
            .iter()
            .map(|e| {
                vec![
                    e.label.clone(),
                    e.n1.clone(),
                    e.n2.clone(),
                    e.weight.to_string(),
                ]
            })
            .collect();
        self.print_result(&["label", "n1", "n2", "weight"], &rows)
    }

    /// 表格格式
    fn format_table(&self, columns: &[&str], rows: &[Vec<String>]) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        let header: Vec<Cell> = columns.iter().map(|c| Cell::new(c)).collect();
        table.set_titles(Row::new(header));

        for row_data in rows {
            let cells: Vec<Cell> = row_data.iter().map(|v| Cell::new(v)).collect();
            table.add_row(Row::new(cells));
        }

        table.to_string()
    }

    /// 垂直格式
    fn format_vertical(&self, columns: &[&str], rows: &[Vec<String>]) -> String {
        let max_col_width = columns.iter().map(|c| c.len()).max().unwrap_or(0);
        let mut output = String::new();

        for (i, row_data) in rows.iter().enumerate() {
            output.push_str(&format!(
                "*************************** {}. row ***************************\n",
                i + 1
            ));

            for (j, col) in columns.iter().enumerate() {
                let value = row_data.get(j).map(|s| s.as_str()).unwrap_or("");
                output.push_str(&format!("{:>width$}: {}\n", col, value, width = max_col_width));
            }
        }

        output
    }

    /// 打印统计信息
    pub fn print_stats(&self, graph: &DynGraph) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["Property", "Value"]);
        table.add_row(row!["Kind", graph.kind_name()]);
        table.add_row(row!["Directed", graph.is_directed().to_string()]);
        table.add_row(row!["Node Count", graph.node_count().to_string()]);
        table.add_row(row!["Edge Count", graph.edge_count().to_string()]);
        table.to_string()
    }

    /// 打印结构检查结果
    pub fn print_report(&self, report: &InspectReport) -> String {
        let pairs: Vec<String> = report
            .non_adjacent_pairs
            .iter()
            .map(|(a, b)| format!("{}/{}", a, b))
            .collect();

        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["Check", "Result"]);
        table.add_row(row!["Loops", report.has_loops.to_string()]);
        table.add_row(row!["Parallel Edges", report.has_parallels.to_string()]);
        table.add_row(row!["Non-adjacent Pairs", pairs.join(", ")]);
        table.add_row(row!["Complete", report.is_complete.to_string()]);
        table.to_string()
    }

    /// 打印邻接矩阵，三角矩阵中不存在的单元格留空
    pub fn print_matrix(&self, nodes: &[Node], cells: &[Vec<Vec<String>>]) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        let mut header = vec![Cell::new("")];
        header.extend(nodes.iter().map(|n| Cell::new(n.label())));
        table.set_titles(Row::new(header));

        for (node, row_cells) in nodes.iter().zip(cells) {
            let mut row = vec![Cell::new(node.label())];
            for col in 0..nodes.len() {
                let text = match row_cells.get(col) {
                    Some(labels) if labels.is_empty() => ".".to_string(),
                    Some(labels) => labels.join(","),
                    None => String::new(),
                };
                row.push(Cell::new(&text));
            }
            table.add_row(Row::new(row));
        }

        table.to_string()
    }

    /// 打印帮助信息
    pub fn print_help() -> String {
        r#"
═══════════════════════════════════════════════════════════════
                     Stella CLI 命令帮助
═══════════════════════════════════════════════════════════════

基础命令:
  help, h, ?                     显示帮助
  quit, exit, q                  退出程序
  stats, info                    显示图统计信息
  clear                          清屏

节点与边:
  add-node <标签>                添加节点
  add-edge <标签> <n1> <n2> [权重]
                                 添加边（默认权重 1）
                                 示例: add-edge e1 A B 5
  node <标签>                    查看节点详情
  edge <标签>                    查看边详情
  nodes                          列出所有节点
  edges                          列出所有边
  between <n1> <n2>              列出两个节点之间的边

结构查询:
  degree <标签>                  节点的度（自环计两次）
  inspect                        自环、平行边、完全图检查
  matrix                         显示邻接矩阵（仅矩阵存储）

导入:
  load <文件>                    从 JSON 描述文件载入节点和边

提示: 在命令末尾加 \G 可垂直显示结果
═══════════════════════════════════════════════════════════════
"#
        .to_string()
    }
}

/// 检查命令是否以 \G 结尾（垂直显示）
pub fn check_vertical_display(input: &str) -> (String, bool) {
    let trimmed = input.trim();
    if trimmed.ends_with("\\G") || trimmed.ends_with("\\g") {
        let clean = trimmed[..trimmed.len() - 2].trim().to_string();
        (clean, true)
    } else {
        (trimmed.to_string(), false)
    }
}
