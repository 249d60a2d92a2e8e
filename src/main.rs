//! testforge Server Entry Point

use clap::Parser;
use std::sync::Arc;
use testforge::cli::{Cli, Commands};
use testforge::config::{get_env_with_fallback_or, get_env_with_fallback_parse};
use testforge::generation::client::CompletionSettings;
use testforge::{db, logging, server, AppState};

#[derive(Clone)]
struct ServerConfig {
    host: String,
    port: u16,
}

impl ServerConfig {
    fn from_env() -> Self {
        let host = get_env_with_fallback_or("TESTFORGE_HOST", "HOST", "0.0.0.0");
        let port = get_env_with_fallback_parse("TESTFORGE_PORT", "PORT", 8000);
        Self { host, port }
    }

    fn from_args(host: String, port: u16) -> Self {
        Self { host, port }
    }

    fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve(args)) => {
            logging::init().expect("failed to initialize logging");
            let cfg = ServerConfig::from_args(args.host, args.port);
            run_server(cfg).await;
        }
        None => {
            // No subcommand - default to serve
            logging::init().expect("failed to initialize logging");
            let cfg = ServerConfig::from_env();
            run_server(cfg).await;
        }
    }
}

async fn run_server(config: ServerConfig) {
    let database_url = get_env_with_fallback_or(
        "TESTFORGE_DATABASE_URL",
        "DATABASE_URL",
        "sqlite:data/testforge.db",
    );

    let db_pool = db::migrations::initialize_database(&database_url)
        .await
        .expect("Failed to initialize database");

    let test_cases = Arc::new(db::test_cases::TestCaseStorage::new(db_pool.clone()));
    let http_client = reqwest::Client::new();
    let completion = CompletionSettings::from_env();

    tracing::info!(
        base_url = %completion.base_url,
        model = %completion.model,
        "completion backend configured"
    );

    let state = AppState {
        db_pool,
        test_cases,
        http_client,
        completion,
    };

    server::run(state, &config.bind_addr()).await;
}
