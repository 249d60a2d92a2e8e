//! ロギング初期化
//!
//! `RUST_LOG` でフィルタを上書きできる（未設定時は info）。

use tracing_subscriber::EnvFilter;

/// tracingサブスクライバを初期化する
///
/// CLIの各エントリポイントから一度だけ呼び出すこと。
pub fn init() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to set tracing subscriber: {e}"))?;

    Ok(())
}
