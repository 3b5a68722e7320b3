//! 警告写入服务 - 业务能力层
//!
//! 只负责"写 warn.txt"能力，不关心流程

use anyhow::Result;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::debug;

/// 警告写入服务
///
/// 每条导入失败记录一行：`文档 | Q<题号>: <错误信息>`
pub struct WarnWriter {
    warn_file_path: String,
}

impl WarnWriter {
    /// 使用自定义文件路径创建
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            warn_file_path: path.into(),
        }
    }

    pub fn path(&self) -> &str {
        &self.warn_file_path
    }

    /// 追加一个文档的全部失败记录；`errors` 为空时不写文件
    pub async fn write_errors(&self, document: &str, errors: &[String]) -> Result<()> {
        if errors.is_empty() {
            return Ok(());
        }

        debug!("写入警告: 文档 {} | {} 条", document, errors.len());

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.warn_file_path)
            .await?;

        let mut buf = String::new();
        for error in errors {
            buf.push_str(&format!("{} | {}\n", document, error));
        }

        file.write_all(buf.as_bytes()).await?;
        file.flush().await?;

        Ok(())
    }
}
