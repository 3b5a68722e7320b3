//! 题目处理流程 - 流程层
//!
//! 核心职责：定义"一道题"的完整处理流程
//!
//! 流程顺序：
//! 1. 转换为 API 请求体
//! 2. `POST questions`
//! 3. 等待节流间隔（无论成功失败）
//!
//! 转换失败时不发请求，也不等待。

use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

use crate::clients::{extract_record_id, ContentApi};
use crate::error::{HttpError, TransformError};
use crate::models::passage::Question;
use crate::models::payload::QUESTIONS_RESOURCE;
use crate::services::{transform_question, Pacer};
use crate::utils::logging::truncate_text;
use crate::workflow::question_ctx::QuestionCtx;

/// 单道题目的失败原因
///
/// 只影响这一道题，整批继续。
#[derive(Debug, Error)]
pub enum QuestionFailure {
    #[error(transparent)]
    Transform(#[from] TransformError),
    #[error(transparent)]
    Http(#[from] HttpError),
    #[error("请求体序列化失败: {0}")]
    Encode(#[from] serde_json::Error),
}

/// 题目处理流程
///
/// - 不持有任何资源，只借用 API 能力和节流策略
/// - 一次只处理一道题
pub struct QuestionFlow<'a> {
    api: &'a dyn ContentApi,
    pacer: &'a dyn Pacer,
    verbose_logging: bool,
}

impl<'a> QuestionFlow<'a> {
    pub fn new(api: &'a dyn ContentApi, pacer: &'a dyn Pacer) -> Self {
        Self {
            api,
            pacer,
            verbose_logging: false,
        }
    }

    pub fn verbose(mut self, verbose_logging: bool) -> Self {
        self.verbose_logging = verbose_logging;
        self
    }

    /// 创建一道题目，成功时返回记录 ID
    pub async fn run(&self, question: &Question, ctx: &QuestionCtx) -> Result<String, QuestionFailure> {
        if self.verbose_logging {
            info!("{} 题干: {}", ctx, truncate_text(&question.question, 80));
        }

        let payload = transform_question(question, &ctx.section_title).map_err(|e| {
            warn!("{} ⚠️ 题目数据有误，跳过: {}", ctx, e);
            e
        })?;
        let body = serde_json::to_value(&payload)?;

        let outcome = self.submit(&body).await;

        // 成功失败都要等待
        self.pacer.pause().await;

        match &outcome {
            Ok(id) => info!("{} ✓ 题目创建成功: {}", ctx, id),
            Err(e) => warn!("{} ❌ 题目创建失败: {}", ctx, e),
        }

        outcome
    }

    async fn submit(&self, body: &Value) -> Result<String, QuestionFailure> {
        let record = self.api.create(QUESTIONS_RESOURCE, body).await?;
        extract_record_id(&record).ok_or_else(|| {
            QuestionFailure::Http(HttpError::MissingId {
                endpoint: QUESTIONS_RESOURCE.to_string(),
            })
        })
    }
}
