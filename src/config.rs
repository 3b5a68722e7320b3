use crate::error::ConfigError;
use std::str::FromStr;
use std::time::Duration;

/// 创建接口的调用方式
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApiBinding {
    /// 预先认证好的会话对象
    Session,
    /// 每次请求直接携带 Bearer 令牌
    Token,
}

impl FromStr for ApiBinding {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "session" => Ok(ApiBinding::Session),
            "token" => Ok(ApiBinding::Token),
            _ => Err(ConfigError::EnvVarParseFailed {
                var_name: "API_BINDING".to_string(),
                value: s.to_string(),
                expected_type: "session | token".to_string(),
            }),
        }
    }
}

/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 内容 API 地址
    pub api_base_url: String,
    /// Bearer 令牌（为空则不发送 Authorization 头）
    pub api_token: String,
    /// 调用方式
    pub api_binding: ApiBinding,
    /// 两次创建请求之间的间隔（毫秒）
    pub request_delay_ms: u64,
    /// 单次请求超时（秒）
    pub request_timeout_secs: u64,
    /// 阅读文档存放目录
    pub passage_folder: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出日志文件
    pub output_log_file: String,
    /// 失败题目记录文件
    pub warn_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:5000/api".to_string(),
            api_token: String::new(),
            api_binding: ApiBinding::Session,
            request_delay_ms: 100,
            request_timeout_secs: 30,
            passage_folder: "passages".to_string(),
            verbose_logging: false,
            output_log_file: "import_log.txt".to_string(),
            warn_file: "warn.txt".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            api_base_url: std::env::var("CONTENT_API_BASE_URL").unwrap_or(default.api_base_url),
            api_token: std::env::var("CONTENT_API_TOKEN").unwrap_or(default.api_token),
            api_binding: std::env::var("API_BINDING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.api_binding),
            request_delay_ms: std::env::var("REQUEST_DELAY_MS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.request_delay_ms),
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.request_timeout_secs),
            passage_folder: std::env::var("PASSAGE_FOLDER").unwrap_or(default.passage_folder),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
            warn_file: std::env::var("WARN_FILE").unwrap_or(default.warn_file),
        }
    }

    /// 检查配置是否可用
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_base_url.trim().is_empty() {
            return Err(ConfigError::Empty {
                name: "CONTENT_API_BASE_URL".to_string(),
            });
        }
        Ok(())
    }

    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
