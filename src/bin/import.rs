//! Stella 描述导入工具
//!
//! 从 JSON 描述文件构建图并打印摘要

use anyhow::Context;
use clap::Parser;
use stella::cli::Printer;
use stella::config::{GraphConfig, Layout};
use stella::import::Importer;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "stella-import")]
#[command(about = "Stella 描述导入工具")]
struct Args {
    /// 输入文件路径
    #[arg(short, long)]
    input: PathBuf,

    /// 存储策略
    #[arg(short, long, value_enum)]
    layout: Option<Layout>,

    /// 使用有向图
    #[arg(short, long)]
    directed: bool,

    /// 配置文件（JSON）
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 导入后打印节点和边
    #[arg(short, long)]
    show: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => GraphConfig::from_path(path)
            .with_context(|| format!("无法读取配置文件 {}", path.display()))?,
        None => GraphConfig::default(),
    };
    if let Some(layout) = args.layout {
        config.layout = layout;
    }
    if args.directed {
        config.directed = true;
    }

    println!("Stella 描述导入工具");
    println!("========================");
    println!("输入文件: {:?}", args.input);
    println!("存储策略: {}", config.layout);
    println!("有向: {}", config.directed);

    let importer = Importer::new(config);
    let (graph, stats) = importer
        .import_path(&args.input)
        .with_context(|| format!("导入失败: {}", args.input.display()))?;

    println!("\n导入完成!");
    println!("  存储: {}", graph.kind_name());
    println!("  节点导入: {}", stats.nodes_imported);
    println!("  边导入: {}", stats.edges_imported);
    println!("  耗时: {} ms", stats.duration_ms);

    if args.show {
        let printer = Printer::default();
        println!("\n{}", printer.print_nodes(graph.get_all_nodes()));
        println!("{}", printer.print_edges(&graph.edges()));
        if let Some(cells) = graph.matrix_cells() {
            println!("{}", printer.print_matrix(graph.get_all_nodes(), &cells));
        }
    }

    Ok(())
}
