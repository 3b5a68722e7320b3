//! 已认证的 API 会话
//!
//! 认证头在创建时一次性写入，之后的请求只关心路径和请求体
use crate::clients::{endpoint_url, ContentApi};
use crate::config::Config;
use crate::error::{AppResult, ConfigError, HttpError};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

/// 已认证的会话
pub struct ApiSession {
    client: Client,
    base_url: String,
}

impl ApiSession {
    /// 创建新的会话
    pub fn new(config: &Config) -> AppResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/json, text/plain, */*"),
        );

        if config.api_token.is_empty() {
            warn!("⚠️ 未设置 CONTENT_API_TOKEN，请求将不带认证头");
        } else {
            let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.api_token))
                .map_err(|_| ConfigError::EnvVarParseFailed {
                    var_name: "CONTENT_API_TOKEN".to_string(),
                    value: "<hidden>".to_string(),
                    expected_type: "HTTP header value".to_string(),
                })?;
            auth.set_sensitive(true);
            headers.insert(AUTHORIZATION, auth);
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| HttpError::transport(&config.api_base_url, e))?;

        Ok(Self {
            client,
            base_url: config.api_base_url.clone(),
        })
    }

    /// 发送 POST 请求并把响应解析为 `T`
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, HttpError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = endpoint_url(&self.base_url, path);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| HttpError::transport(&url, e))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| HttpError::transport(&url, e))?;

        if !status.is_success() {
            return Err(HttpError::status_error(&url, status.as_u16(), text));
        }

        let body = if text.trim().is_empty() { "null" } else { text.as_str() };
        serde_json::from_str(body).map_err(|source| HttpError::Decode {
            endpoint: url,
            source,
        })
    }
}

#[async_trait]
impl ContentApi for ApiSession {
    async fn create(&self, resource: &str, payload: &Value) -> Result<Value, HttpError> {
        self.post(resource, payload).await
    }
}
