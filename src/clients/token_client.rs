//! Bearer 令牌直连客户端
//!
//! 每次请求单独带上 `Authorization: Bearer <token>`，
//! `send` 返回原始状态码和响应体，`create` 在其上把非 2xx 转成错误
use crate::clients::{endpoint_url, ContentApi};
use crate::config::Config;
use crate::error::{AppResult, HttpError};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

/// 原始 HTTP 响应
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Bearer 令牌客户端
pub struct TokenClient {
    client: Client,
    base_url: String,
    token: String,
}

impl TokenClient {
    /// 创建新的令牌客户端
    pub fn new(config: &Config) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| HttpError::transport(&config.api_base_url, e))?;

        Ok(Self {
            client,
            base_url: config.api_base_url.clone(),
            token: config.api_token.clone(),
        })
    }

    /// 发送 JSON 请求体，不检查状态码
    pub async fn send(&self, resource: &str, payload: &Value) -> Result<RawResponse, HttpError> {
        let url = endpoint_url(&self.base_url, resource);
        debug!("POST {} (bearer)", url);

        let mut request = self.client.post(&url).json(payload);
        if !self.token.is_empty() {
            request = request.bearer_auth(&self.token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| HttpError::transport(&url, e))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| HttpError::transport(&url, e))?;

        Ok(RawResponse { status, body })
    }
}

#[async_trait]
impl ContentApi for TokenClient {
    async fn create(&self, resource: &str, payload: &Value) -> Result<Value, HttpError> {
        let response = self.send(resource, payload).await?;
        let url = endpoint_url(&self.base_url, resource);

        if !response.is_success() {
            return Err(HttpError::status_error(url, response.status, response.body));
        }

        if response.body.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&response.body).map_err(|source| HttpError::Decode {
            endpoint: url,
            source,
        })
    }
}
