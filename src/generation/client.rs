//! 補完APIクライアント
//!
//! OpenAI互換の `/v1/completions` へリクエストを転送し、
//! 生成テキスト（`choices[0].text`）を取り出す。

use crate::common::error::{CommonError, TfError, TfResult};
use crate::common::protocol::CompletionRequest;
use crate::config::{self, get_env_with_fallback_or, get_env_with_fallback_parse};
use crate::generation::parser::extract_completion_text;
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::{info, warn};
use uuid::Uuid;

/// 補完リクエストの最大トークン数
const DEFAULT_MAX_TOKENS: u32 = 1500;

/// 補完リクエストの温度
const DEFAULT_TEMPERATURE: f64 = 0.4;

/// 補完APIの接続設定
///
/// ベースURL・モデル・タイムアウトは起動時に解決する。
/// APIキーはリクエストごとに環境変数から読み直す（[`config::get_openai_api_key`]）。
#[derive(Debug, Clone)]
pub struct CompletionSettings {
    /// APIベースURL（末尾スラッシュなし）
    pub base_url: String,
    /// モデル名
    pub model: String,
    /// 最大トークン数
    pub max_tokens: u32,
    /// 温度
    pub temperature: f64,
    /// リクエストタイムアウト
    pub timeout: Duration,
}

impl CompletionSettings {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Self {
        let base_url = get_env_with_fallback_or(
            "TESTFORGE_OPENAI_BASE_URL",
            "OPENAI_BASE_URL",
            "https://api.openai.com",
        );
        let model = get_env_with_fallback_or(
            "TESTFORGE_COMPLETION_MODEL",
            "COMPLETION_MODEL",
            "text-davinci-003",
        );
        let timeout_secs = get_env_with_fallback_parse(
            "TESTFORGE_UPSTREAM_TIMEOUT_SECS",
            "UPSTREAM_TIMEOUT_SECS",
            120u64,
        );

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// 補完エンドポイントのURL
    pub fn completions_url(&self) -> String {
        format!("{}/v1/completions", self.base_url)
    }
}

/// プロンプトを補完APIへ送り、生成テキストを返す
pub async fn generate(
    http_client: &reqwest::Client,
    settings: &CompletionSettings,
    prompt: &str,
) -> TfResult<String> {
    let api_key = config::get_openai_api_key().ok_or_else(|| {
        TfError::Common(CommonError::Config(
            "TESTFORGE_OPENAI_API_KEY is not set".to_string(),
        ))
    })?;

    let req_id = Uuid::new_v4();
    let started = Instant::now();

    let body = CompletionRequest {
        model: settings.model.clone(),
        prompt: prompt.to_string(),
        max_tokens: settings.max_tokens,
        temperature: settings.temperature,
    };

    let res = http_client
        .post(settings.completions_url())
        .bearer_auth(api_key)
        .timeout(settings.timeout)
        .json(&body)
        .send()
        .await
        .map_err(map_reqwest_error)?;

    let status = res.status();
    let bytes = res.bytes().await.map_err(map_reqwest_error)?;

    if !status.is_success() {
        warn!(
            request_id = %req_id,
            model = %settings.model,
            status = %status,
            latency_ms = started.elapsed().as_millis(),
            "completion request failed"
        );
        return Err(TfError::UpstreamStatus(format!(
            "completion API returned {}: {}",
            status,
            String::from_utf8_lossy(&bytes).trim()
        )));
    }

    let data: Value = serde_json::from_slice(&bytes).map_err(|e| {
        TfError::UpstreamFormat(format!("completion response is not valid JSON: {}", e))
    })?;

    let text = extract_completion_text(&data)?;

    info!(
        request_id = %req_id,
        model = %settings.model,
        status = %status,
        latency_ms = started.elapsed().as_millis(),
        prompt_len = prompt.len(),
        completion_len = text.len(),
        "completion request complete"
    );

    Ok(text)
}

fn map_reqwest_error(err: reqwest::Error) -> TfError {
    if err.is_timeout() {
        TfError::Timeout(err.to_string())
    } else {
        TfError::Http(err.to_string())
    }
}
