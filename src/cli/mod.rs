//! 命令行交互模块

mod commands;

pub use commands::{execute_command, CommandResult, Session};
