//! Stella CLI 工具
//!
//! 交互式命令行界面

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use stella::cli::{execute_command, CommandCompleter, CommandResult};
use stella::config::{GraphConfig, Layout};
use stella::import::GraphDescription;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const HISTORY_FILE: &str = ".stella_history";

#[derive(Parser, Debug)]
#[command(name = "stella-cli")]
#[command(about = "Stella 图论工具命令行")]
struct Args {
    /// 存储策略
    #[arg(short, long, value_enum)]
    layout: Option<Layout>,

    /// 使用有向图
    #[arg(short, long)]
    directed: bool,

    /// 配置文件（JSON）
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 启动时载入的描述文件
    #[arg(long)]
    load: Option<PathBuf>,
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

    let mut graph = config.build();

    println!("Stella CLI v{} - 教学用图论工具", stella::VERSION);
    println!("=============================================");
    println!("存储: {}", graph.kind_name());

    if let Some(path) = &args.load {
        let desc = GraphDescription::from_path(path)
            .with_context(|| format!("无法读取描述文件 {}", path.display()))?;
        let stats = graph.load(&desc)?;
        println!(
            "已载入: {} 个节点, {} 条边",
            stats.nodes_imported, stats.edges_imported
        );
    }

    println!("\n输入 'help' 查看命令列表，'quit' 退出\n");

    let mut rl: Editor<CommandCompleter, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(CommandCompleter::new()));

    let history = dirs::home_dir().map(|home| home.join(HISTORY_FILE));
    if let Some(path) = &history {
        let _ = rl.load_history(path);
    }

    loop {
        match rl.readline("stella> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line);

                match execute_command(line, &mut graph) {
                    CommandResult::Exit => break,
                    CommandResult::Continue => {}
                    CommandResult::Message(msg) => println!("{}", msg),
                    CommandResult::Error(err) => println!("{} {}", "错误:".red(), err),
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => {
                println!("{} {}", "错误:".red(), e);
                break;
            }
        }
    }

    if let Some(path) = &history {
        let _ = rl.save_history(path);
    }

    println!("{}", "再见！".green());
    Ok(())
}
