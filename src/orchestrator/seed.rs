//! 种子数据提交
//!
//! 把一个现成的 JSON 请求体原样 POST 到指定资源，报告状态码和响应体。

use crate::clients::{RawResponse, TokenClient};
use crate::config::Config;
use anyhow::{Context, Result};
use serde_json::Value;
use std::path::Path;
use tracing::{error, info};

/// 提交种子数据
///
/// 非 2xx 不算错误，由调用方根据 `RawResponse::is_success` 决定退出码
pub async fn seed(config: &Config, resource: &str, payload_path: &Path) -> Result<RawResponse> {
    let content = tokio::fs::read_to_string(payload_path)
        .await
        .with_context(|| format!("无法读取请求体文件: {}", payload_path.display()))?;
    let payload: Value = serde_json::from_str(&content)
        .with_context(|| format!("请求体不是合法 JSON: {}", payload_path.display()))?;

    let client = TokenClient::new(config)?;

    info!("📤 POST {}/{}", config.api_base_url.trim_end_matches('/'), resource);
    let response = client.send(resource, &payload).await?;

    if response.is_success() {
        info!("✓ 状态码: {}", response.status);
        info!("响应: {}", response.body);
    } else {
        error!("❌ 状态码: {}", response.status);
        error!("响应: {}", response.body);
    }

    Ok(response)
}
