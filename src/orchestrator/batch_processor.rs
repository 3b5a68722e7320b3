//! 批量文档导入器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责多份文档的导入和资源管理。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：初始化日志文件、按配置构建 API 客户端和节流器
//! 2. **批量加载**：加载指定文件，或扫描文档目录（`Vec<LoadedDocument>`）
//! 3. **逐份导入**：依次委托 `PassageImporter`，一份文档中断不影响下一份
//! 4. **失败记录**：单题失败写入 warn 文件，每份文档在日志文件中留一行摘要
//! 5. **全局统计**：汇总所有文档的结果，可选输出 JSON 报告

use crate::clients::{build_content_api, ContentApi};
use crate::config::Config;
use crate::models::{load_all_documents, load_document, ImportResult, LoadedDocument};
use crate::orchestrator::passage_importer::{check_passage, PassageImporter};
use crate::services::{FixedDelay, NoDelay, Pacer, WarnWriter};
use crate::utils::logging::{
    append_log_line, init_log_file, log_document_complete, log_documents_loaded, log_startup,
    print_final_stats, summary_line,
};
use anyhow::{bail, Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// 单次运行的选项
#[derive(Debug, Clone, Default)]
pub struct ImportOptions {
    /// 只检查文档，不发送请求
    pub dry_run: bool,
    /// JSON 报告输出路径
    pub report_path: Option<PathBuf>,
}

/// 单份文档的处理结果
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentReport {
    pub file: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ImportResult>,
    /// 导入中断时的错误，或 dry-run 发现的问题
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub problems: Vec<String>,
}

/// 处理统计
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingStats {
    pub total: usize,
    pub success: usize,
    pub failed: usize,
    pub documents: Vec<DocumentReport>,
}

/// 应用主结构
pub struct App {
    config: Config,
    /// 只检查文档时为空
    api: Option<Box<dyn ContentApi>>,
    pacer: Box<dyn Pacer>,
    warn_writer: WarnWriter,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        config.validate()?;

        init_log_file(&config.output_log_file)
            .with_context(|| format!("无法初始化日志文件: {}", config.output_log_file))?;

        log_startup(&config.api_base_url, config.request_delay_ms);

        let api = build_content_api(&config)?;
        let pacer = Box::new(FixedDelay::new(config.request_delay()));

        Ok(Self::with_parts(config, api, pacer))
    }

    /// 只检查文档的应用：不改动日志文件，不创建 HTTP 客户端
    pub fn for_check(config: Config) -> Self {
        Self::assemble(config, None, Box::new(NoDelay))
    }

    /// 用现成的 API 能力和节流器组装应用
    pub fn with_parts(config: Config, api: Box<dyn ContentApi>, pacer: Box<dyn Pacer>) -> Self {
        Self::assemble(config, Some(api), pacer)
    }

    fn assemble(config: Config, api: Option<Box<dyn ContentApi>>, pacer: Box<dyn Pacer>) -> Self {
        let warn_writer = WarnWriter::with_path(config.warn_file.clone());
        Self {
            config,
            api,
            pacer,
            warn_writer,
        }
    }

    /// 运行应用主逻辑
    ///
    /// `paths` 为空时导入文档目录下的所有文件
    pub async fn run(&self, paths: &[PathBuf], options: &ImportOptions) -> Result<ProcessingStats> {
        let api = match (&self.api, options.dry_run) {
            (_, true) => None,
            (Some(api), false) => Some(api.as_ref()),
            (None, false) => bail!("当前应用只能检查文档，不能导入"),
        };

        let documents = self.load_documents(paths).await?;

        if documents.is_empty() {
            warn!("⚠️ 没有找到待导入的文档，程序结束");
            return Ok(ProcessingStats::default());
        }

        log_documents_loaded(documents.len(), options.dry_run);

        let mut stats = ProcessingStats {
            total: documents.len(),
            ..Default::default()
        };

        for (idx, loaded) in documents.iter().enumerate() {
            let document_index = idx + 1;
            let report = match api {
                Some(api) => self.import_document(api, document_index, loaded).await?,
                None => self.check_document(document_index, loaded),
            };

            if report.result.is_some() || (options.dry_run && report.problems.is_empty()) {
                stats.success += 1;
            } else {
                stats.failed += 1;
            }
            stats.documents.push(report);
        }

        print_final_stats(
            stats.success,
            stats.failed,
            stats.total,
            &self.config.output_log_file,
        );

        if let Some(path) = &options.report_path {
            write_report(path, &stats)?;
            info!("📝 报告已写入: {}", path.display());
        }

        Ok(stats)
    }

    /// 加载文档
    async fn load_documents(&self, paths: &[PathBuf]) -> Result<Vec<LoadedDocument>> {
        if paths.is_empty() {
            info!("\n📁 正在扫描文档目录: {}", self.config.passage_folder);
            return Ok(load_all_documents(&self.config.passage_folder).await?);
        }

        let mut documents = Vec::with_capacity(paths.len());
        for path in paths {
            let document = load_document(path)
                .await
                .with_context(|| format!("无法加载文档: {}", path.display()))?;
            documents.push(LoadedDocument {
                path: path.clone(),
                document,
            });
        }
        Ok(documents)
    }

    /// 导入单份文档；导入中断只影响这一份
    async fn import_document(
        &self,
        api: &dyn ContentApi,
        document_index: usize,
        loaded: &LoadedDocument,
    ) -> Result<DocumentReport> {
        let file = loaded.file_name();
        info!("\n[文档 {}] 文件: {}", document_index, file);

        let importer = PassageImporter::new(api, self.pacer.as_ref())
            .document_index(document_index)
            .verbose(self.config.verbose_logging);

        let mut report = DocumentReport {
            file: file.clone(),
            title: loaded.document.title.clone(),
            result: None,
            problems: Vec::new(),
        };

        match importer.import(&loaded.document).await {
            Ok(result) => {
                log_document_complete(document_index, &result);
                self.warn_writer
                    .write_errors(&file, &result.errors)
                    .await
                    .with_context(|| format!("无法写入 {}", self.warn_writer.path()))?;
                append_log_line(&self.config.output_log_file, &summary_line(&file, &result))?;
                report.result = Some(result);
            }
            Err(e) => {
                error!("[文档 {}] ❌ 导入中断: {}", document_index, e);
                let message = format!("导入中断: {}", e);
                self.warn_writer
                    .write_errors(&file, std::slice::from_ref(&message))
                    .await?;
                append_log_line(&self.config.output_log_file, &format!("{} | {}", file, message))?;
                report.problems.push(message);
            }
        }

        Ok(report)
    }

    /// 只检查文档，不发请求
    fn check_document(&self, document_index: usize, loaded: &LoadedDocument) -> DocumentReport {
        let problems = check_passage(&loaded.document);

        if problems.is_empty() {
            info!(
                "[文档 {}] ✓ {} 检查通过（{} 道题目）",
                document_index,
                loaded.file_name(),
                loaded.document.question_count().unwrap_or(usize::MAX)
            );
        } else {
            for problem in &problems {
                warn!("[文档 {}] ⚠️ {}", document_index, problem);
            }
        }

        DocumentReport {
            file: loaded.file_name(),
            title: loaded.document.title.clone(),
            result: None,
            problems,
        }
    }
}

fn write_report(path: &Path, stats: &ProcessingStats) -> Result<()> {
    let json = serde_json::to_string_pretty(stats)?;
    std::fs::write(path, json).with_context(|| format!("无法写入报告: {}", path.display()))?;
    Ok(())
}
