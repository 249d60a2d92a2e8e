//! Configuration management via environment variables
//!
//! Provides helper functions for reading environment variables with fallback
//! to deprecated variable names with warning logs.

/// Get an environment variable with fallback to a deprecated name
///
/// If the new variable name is set, returns its value.
/// If only the old (deprecated) variable name is set, returns its value
/// and logs a deprecation warning.
///
/// # Arguments
/// * `new_name` - The new environment variable name (preferred)
/// * `old_name` - The deprecated environment variable name (fallback)
///
/// # Returns
/// * `Some(value)` - The environment variable value
/// * `None` - Neither variable is set
///
/// # Example
/// ```
/// use testforge::config::get_env_with_fallback;
///
/// let port = get_env_with_fallback("TESTFORGE_PORT", "PORT");
/// ```
pub fn get_env_with_fallback(new_name: &str, old_name: &str) -> Option<String> {
    if let Ok(val) = std::env::var(new_name) {
        return Some(val);
    }
    if let Ok(val) = std::env::var(old_name) {
        tracing::warn!(
            "Environment variable '{}' is deprecated, use '{}' instead",
            old_name,
            new_name
        );
        return Some(val);
    }
    None
}

/// Get an environment variable with fallback and default value
///
/// Similar to `get_env_with_fallback`, but returns a default value
/// if neither variable is set.
pub fn get_env_with_fallback_or(new_name: &str, old_name: &str, default: &str) -> String {
    get_env_with_fallback(new_name, old_name).unwrap_or_else(|| default.to_string())
}

/// Get an environment variable with fallback, parsing to a specific type
///
/// # Arguments
/// * `new_name` - The new environment variable name (preferred)
/// * `old_name` - The deprecated environment variable name (fallback)
/// * `default` - The default value to return if neither is set or parsing fails
///
/// # Returns
/// The parsed environment variable value or the default
pub fn get_env_with_fallback_parse<T: std::str::FromStr>(
    new_name: &str,
    old_name: &str,
    default: T,
) -> T {
    get_env_with_fallback(new_name, old_name)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// モックモードの有効/無効を取得
///
/// 環境変数 `TESTFORGE_MOCK_TEST_DATA`（旧: `MOCK_TEST_DATA`）が
/// `true/1/yes/on` のときに有効化する。有効時は補完APIを呼ばず
/// 固定ペイロードを返す。
pub fn is_mock_enabled() -> bool {
    get_env_with_fallback("TESTFORGE_MOCK_TEST_DATA", "MOCK_TEST_DATA")
        .map(|value| {
            matches!(
                value.to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            )
        })
        .unwrap_or(false)
}

/// 補完APIのAPIキーを取得
///
/// 環境変数 `TESTFORGE_OPENAI_API_KEY`（旧: `OPENAI_API_KEY`）から取得する。
/// リクエストごとに読み直すため、稼働中のキー差し替えが可能。
pub fn get_openai_api_key() -> Option<String> {
    get_env_with_fallback("TESTFORGE_OPENAI_API_KEY", "OPENAI_API_KEY")
}
