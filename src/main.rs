//! Assistant Bot - Contact Book CLI
//!
//! 対話型の連絡先管理ツール

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;
use std::io;

use assistant_bot::adapter::config::Config;
use assistant_bot::adapter::view::console_view::ConsoleView;
use assistant_bot::driver::{Args, AssistantSession};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Load configuration
    let config = Config::load(&args.config)?.with_book_path(args.book);

    // Create session with injected dependencies
    let session = AssistantSession::new(config);

    session
        .run(io::stdin().lock(), io::stdout(), &ConsoleView::new())
        .await
}
