//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::Parser;

use crate::adapter::config::DEFAULT_CONFIG_PATH;

/// 連絡先と誕生日を管理する対話型アシスタント
#[derive(Parser, Debug, Clone)]
#[command(name = "assistant-bot")]
#[command(about = "Interactive contact book with birthday reminders", long_about = None)]
pub struct Args {
    /// Config file path
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,

    /// Address book file path (overrides `book_path` in the config file)
    #[arg(long)]
    pub book: Option<String>,
}
