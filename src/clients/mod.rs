//! 内容 API 客户端
//!
//! `ContentApi` 是导入流程唯一依赖的能力：`create(资源, 请求体) → 创建出的记录`。
//! 两种实现可以互换：
//! - `ApiSession` - 预先带好认证信息的会话对象
//! - `TokenClient` - 每次请求直接携带 Bearer 令牌
//!
//! 两者遇到非 2xx 状态码都返回 `HttpError`，导入流程看不出区别。

pub mod mock;
pub mod session;
pub mod token_client;

use crate::config::{ApiBinding, Config};
use crate::error::{AppResult, HttpError};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

pub use mock::MockContentApi;
pub use session::ApiSession;
pub use token_client::{RawResponse, TokenClient};

/// 创建记录的能力
#[async_trait]
pub trait ContentApi: Send + Sync {
    /// 在 `resource` 下创建一条记录，返回 API 响应的 JSON
    async fn create(&self, resource: &str, payload: &Value) -> Result<Value, HttpError>;
}

#[async_trait]
impl<T: ContentApi + ?Sized> ContentApi for Arc<T> {
    async fn create(&self, resource: &str, payload: &Value) -> Result<Value, HttpError> {
        (**self).create(resource, payload).await
    }
}

/// 按配置选择调用方式
pub fn build_content_api(config: &Config) -> AppResult<Box<dyn ContentApi>> {
    let api: Box<dyn ContentApi> = match config.api_binding {
        ApiBinding::Session => Box::new(ApiSession::new(config)?),
        ApiBinding::Token => Box::new(TokenClient::new(config)?),
    };
    Ok(api)
}

/// 拼接资源地址
pub fn endpoint_url(base_url: &str, resource: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        resource.trim_start_matches('/')
    )
}

/// 从创建结果中提取记录 ID
///
/// 依次查找 `id`、`_id`，以及 `data` 包裹下的同名字段；数字 ID 转成字符串。
pub fn extract_record_id(record: &Value) -> Option<String> {
    fn id_of(value: &Value) -> Option<String> {
        ["id", "_id"].iter().find_map(|key| match value.get(*key)? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
    }

    id_of(record).or_else(|| record.get("data").and_then(id_of))
}
