//! CLIインターフェース

pub mod serve;

use clap::{Parser, Subcommand};

/// testforge コマンドライン
#[derive(Parser, Debug)]
#[command(name = "testforge", version, about = "QA test-artifact generation service")]
pub struct Cli {
    /// サブコマンド（省略時は serve）
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// サブコマンド定義
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// サーバーを起動する
    Serve(serve::ServeArgs),
}
