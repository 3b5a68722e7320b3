use crate::error::DocumentError;
use crate::models::passage::PassageDocument;
use std::path::{Path, PathBuf};
use tokio::fs;

/// 已加载的文档及其来源文件
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    pub path: PathBuf,
    pub document: PassageDocument,
}

impl LoadedDocument {
    /// 用于日志显示的文件名
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string()
    }
}

/// 从 TOML 或 JSON 文件加载阅读文档（按扩展名判断格式）
pub async fn load_document(path: &Path) -> Result<PassageDocument, DocumentError> {
    let display = path.display().to_string();

    if !path.exists() {
        return Err(DocumentError::NotFound { path: display });
    }

    let content = fs::read_to_string(path)
        .await
        .map_err(|e| DocumentError::read_failed(&display, e))?;

    match extension(path).as_deref() {
        Some("toml") => toml::from_str(&content).map_err(|source| DocumentError::TomlParseFailed {
            path: display,
            source,
        }),
        Some("json") => {
            serde_json::from_str(&content).map_err(|source| DocumentError::JsonParseFailed {
                path: display,
                source,
            })
        }
        _ => Err(DocumentError::UnsupportedFormat { path: display }),
    }
}

/// 从文件夹中加载所有文档，按文件名排序
///
/// 单个文件加载失败只记录警告，不影响其它文件。
pub async fn load_all_documents(folder_path: &str) -> Result<Vec<LoadedDocument>, DocumentError> {
    let folder = PathBuf::from(folder_path);

    if !folder.is_dir() {
        return Err(DocumentError::DirectoryNotFound {
            path: folder_path.to_string(),
        });
    }

    let mut paths = Vec::new();
    let mut entries = fs::read_dir(&folder)
        .await
        .map_err(|e| DocumentError::read_failed(folder_path, e))?;

    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| DocumentError::read_failed(folder_path, e))?
    {
        let path = entry.path();
        if matches!(extension(&path).as_deref(), Some("toml") | Some("json")) {
            paths.push(path);
        }
    }
    paths.sort();

    let mut documents = Vec::new();
    for path in paths {
        tracing::info!(
            "正在加载: {}",
            path.file_name().unwrap_or_default().to_string_lossy()
        );

        match load_document(&path).await {
            Ok(document) => {
                tracing::info!(
                    "成功加载 {} 个部分, {} 道题目",
                    document.sections.len(),
                    document.question_count().unwrap_or(usize::MAX)
                );
                documents.push(LoadedDocument { path, document });
            }
            Err(e) => {
                tracing::warn!("加载文件失败 {}: {}", path.display(), e);
            }
        }
    }

    Ok(documents)
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_ascii_lowercase())
}
