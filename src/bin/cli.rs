//! adjgraph CLI 工具
//!
//! 交互式命令行界面

use adjgraph::cli::{execute_command, CommandResult, Session};
use clap::Parser;
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "adjgraph-cli")]
#[command(about = "adjgraph 命令行工具")]
struct Args {
    /// 日志级别（EnvFilter 语法）
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    /// 执行若干条以分号分隔的命令后退出
    #[arg(short = 'e', long)]
    execute: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = EnvFilter::try_new(&args.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .compact()
        .init();

    let mut session = Session::new();

    // 单次执行模式
    if let Some(script) = args.execute {
        for line in script.split(';') {
            if !report(execute_command(line, &mut session)) {
                break;
            }
        }
        return Ok(());
    }

    // 交互模式
    println!("adjgraph CLI - 内存无向图");
    println!("输入 'help' 查看命令列表，'quit' 退出\n");

    let stdin = io::stdin();
    loop {
        print!("adjgraph> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        if !report(execute_command(&line, &mut session)) {
            break;
        }
    }

    println!("再见！");
    Ok(())
}

/// 输出结果，返回是否继续
fn report(result: CommandResult) -> bool {
    match result {
        CommandResult::Continue => true,
        CommandResult::Exit => false,
        CommandResult::Message(msg) => {
            println!("{}", msg);
            true
        }
        CommandResult::Error(err) => {
            println!("错误: {}", err);
            true
        }
    }
}
