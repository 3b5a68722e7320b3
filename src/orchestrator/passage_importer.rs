//! 单份文档导入器 - 编排层
//!
//! ## 职责
//!
//! 把一份阅读文档的所有题目依次创建出来，再创建一份引用这些题目的试卷。
//!
//! ## 流程
//!
//! 1. **统计总数**：先算出所有部分的题目总数（与成败无关）
//! 2. **逐题创建**：按部分、题目顺序委托 `QuestionFlow`，单题失败只记录不中断
//! 3. **创建试卷**：至少有一道题成功时，创建一份试卷；否则跳过
//!
//! 请求严格串行：一个请求完成并等待节流间隔后才发下一个。
//! 不重试、不取消。

use crate::clients::{extract_record_id, ContentApi};
use crate::error::{HttpError, ImportError};
use crate::models::passage::PassageDocument;
use crate::models::payload::{TestPayload, TESTS_RESOURCE};
use crate::models::ImportResult;
use crate::services::{transform_question, Pacer};
use crate::workflow::{QuestionCtx, QuestionFlow};
use tracing::{error, info};

/// 导入一份文档
pub async fn import_passage(
    document: &PassageDocument,
    api: &dyn ContentApi,
    pacer: &dyn Pacer,
) -> Result<ImportResult, ImportError> {
    PassageImporter::new(api, pacer).import(document).await
}

/// 单份文档导入器
pub struct PassageImporter<'a> {
    api: &'a dyn ContentApi,
    pacer: &'a dyn Pacer,
    document_index: usize,
    verbose_logging: bool,
}

impl<'a> PassageImporter<'a> {
    pub fn new(api: &'a dyn ContentApi, pacer: &'a dyn Pacer) -> Self {
        Self {
            api,
            pacer,
            document_index: 1,
            verbose_logging: false,
        }
    }

    /// 文档索引（仅用于日志）
    pub fn document_index(mut self, index: usize) -> Self {
        self.document_index = index;
        self
    }

    pub fn verbose(mut self, verbose_logging: bool) -> Self {
        self.verbose_logging = verbose_logging;
        self
    }

    /// 导入文档
    ///
    /// 单题失败记入 `errors`；只有总数溢出或创建试卷失败时返回 `Err`。
    pub async fn import(&self, document: &PassageDocument) -> Result<ImportResult, ImportError> {
        let total = document.question_count().ok_or(ImportError::TotalOverflow)?;
        let mut result = ImportResult::new(total);

        info!(
            "[文档 {}] 开始导入《{}》，共 {} 个部分 {} 道题目",
            self.document_index,
            document.title,
            document.sections.len(),
            total
        );

        let flow = QuestionFlow::new(self.api, self.pacer).verbose(self.verbose_logging);

        for (position, (section, question)) in document.iter_questions().enumerate() {
            let ctx = QuestionCtx {
                document_index: self.document_index,
                section_number: section.section_number,
                section_title: section.title.clone(),
                question_number: question.question_number,
                position: position + 1,
                total,
            };

            match flow.run(question, &ctx).await {
                Ok(id) => result.record_created(id),
                Err(e) => result.record_failed(question.question_number, e),
            }
        }

        if result.question_ids.is_empty() {
            info!(
                "[文档 {}] ⚠️ 没有成功创建的题目，跳过试卷创建",
                self.document_index
            );
            return Ok(result);
        }

        let test_id = self.create_test(document, &result.question_ids).await.map_err(|source| {
            error!(
                "[文档 {}] ❌ 试卷创建失败: {}",
                self.document_index, source
            );
            ImportError::TestCreation {
                question_ids: result.question_ids.clone(),
                source,
            }
        })?;

        info!("[文档 {}] ✓ 试卷创建成功: {}", self.document_index, test_id);
        result.test_id = Some(test_id);

        Ok(result)
    }

    async fn create_test(
        &self,
        document: &PassageDocument,
        question_ids: &[String],
    ) -> Result<String, HttpError> {
        let payload = TestPayload::new(document, question_ids.to_vec());
        let body = serde_json::to_value(&payload).map_err(|source| HttpError::Decode {
            endpoint: TESTS_RESOURCE.to_string(),
            source,
        })?;

        info!(
            "[文档 {}] 📤 正在创建试卷（{} 道题目）...",
            self.document_index,
            question_ids.len()
        );

        let record = self.api.create(TESTS_RESOURCE, &body).await?;
        extract_record_id(&record).ok_or_else(|| HttpError::MissingId {
            endpoint: TESTS_RESOURCE.to_string(),
        })
    }
}

/// 离线检查文档：只做转换，不发请求
///
/// 返回与导入时相同格式的错误列表（`Q<题号>: <错误信息>`）。
pub fn check_passage(document: &PassageDocument) -> Vec<String> {
    document
        .iter_questions()
        .filter_map(|(section, question)| {
            transform_question(question, &section.title)
                .err()
                .map(|e| format!("Q{}: {}", question.question_number, e))
        })
        .collect()
}
