//! 内容 API 的请求体

use crate::models::PassageDocument;
use serde::{Deserialize, Serialize};

/// 题目资源路径
pub const QUESTIONS_RESOURCE: &str = "questions";
/// 试卷资源路径
pub const TESTS_RESOURCE: &str = "tests";

/// 题目类型（固定为阅读）
pub const READING_TYPE: &str = "reading";
/// 未指定子类型时的默认值
pub const DEFAULT_SUB_TYPE: &str = "multiple-choice";

/// `POST /questions` 请求体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionPayload {
    #[serde(rename = "type")]
    pub kind: String,
    pub sub_type: String,
    pub question: String,
    pub passage: String,
    pub options: Vec<String>,
    /// 单个字母 A、B、C…
    pub correct_answer: String,
    pub points: f64,
    pub difficulty: String,
    pub tags: Vec<String>,
    pub instruction_text: String,
}

/// `POST /tests` 请求体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestPayload {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub duration: u32,
    pub questions: Vec<String>,
    pub passages: Vec<String>,
    pub is_active: bool,
}

impl TestPayload {
    pub fn new(doc: &PassageDocument, question_ids: Vec<String>) -> Self {
        Self {
            title: doc.title.clone(),
            description: doc.description.clone(),
            kind: doc.kind.clone(),
            duration: doc.duration,
            questions: question_ids,
            passages: Vec::new(),
            is_active: true,
        }
    }
}
