use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// HTTP 调用错误
    #[error("API错误: {0}")]
    Http(#[from] HttpError),
    /// 题目转换错误
    #[error("转换错误: {0}")]
    Transform(#[from] TransformError),
    /// 文档加载错误
    #[error("文件错误: {0}")]
    Document(#[from] DocumentError),
    /// 导入流程中断
    #[error("导入错误: {0}")]
    Import(#[from] ImportError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

/// HTTP 调用错误
///
/// 两种调用方式（会话 / Bearer 令牌）都把失败统一成这个类型，
/// 逐题处理只看 `Display` 输出。
#[derive(Debug, Error)]
pub enum HttpError {
    /// 网络请求失败（连接、超时等）
    #[error("请求 {endpoint} 失败: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    /// 非 2xx 状态码
    #[error("{endpoint} 返回状态码 {status}: {body}")]
    Status {
        endpoint: String,
        status: u16,
        body: String,
    },
    /// 响应体不是合法 JSON
    #[error("{endpoint} 响应解析失败: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
    /// 成功响应中找不到记录 ID
    #[error("{endpoint} 响应中缺少记录 ID")]
    MissingId { endpoint: String },
}

/// 题目转换错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// 正确答案不在选项中
    #[error("正确答案 {answer:?} 不在选项中")]
    AnswerNotInOptions { answer: String },
    /// 答案位置超出 A-Z
    #[error("正确答案位于第 {index} 个选项，超出 A-Z 范围")]
    TooManyOptions { index: usize },
}

/// 文档加载错误
#[derive(Debug, Error)]
pub enum DocumentError {
    /// 文件不存在
    #[error("文件不存在: {path}")]
    NotFound { path: String },
    /// 目录不存在
    #[error("目录不存在: {path}")]
    DirectoryNotFound { path: String },
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    /// JSON 解析失败
    #[error("JSON解析失败 ({path}): {source}")]
    JsonParseFailed {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    /// 不支持的文件类型
    #[error("不支持的文件类型: {path}（仅支持 .toml / .json）")]
    UnsupportedFormat { path: String },
}

/// 导入流程中断（整批失败，不返回 ImportResult）
#[derive(Debug, Error)]
pub enum ImportError {
    /// 题目总数溢出
    #[error("题目总数计算溢出")]
    TotalOverflow,
    /// 创建试卷失败；已创建的题目 ID 随错误一起返回
    #[error("创建试卷失败（已创建 {} 道题目）: {source}", .question_ids.len())]
    TestCreation {
        question_ids: Vec<String>,
        #[source]
        source: HttpError,
    },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
    /// 配置项为空
    #[error("配置项 {name} 不能为空")]
    Empty { name: String },
}

// ========== 便捷构造函数 ==========

impl HttpError {
    /// 创建网络请求失败错误
    pub fn transport(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        HttpError::Transport {
            endpoint: endpoint.into(),
            source,
        }
    }

    /// 创建状态码错误
    pub fn status_error(endpoint: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        HttpError::Status {
            endpoint: endpoint.into(),
            status,
            body: body.into(),
        }
    }
}

impl DocumentError {
    /// 创建文件读取错误
    pub fn read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        DocumentError::ReadFailed {
            path: path.into(),
            source,
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
