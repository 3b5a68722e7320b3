//! 题目转换 - 业务能力层
//!
//! 把文档中的一道题和它所在部分的标题转换成 `POST /questions` 的请求体。
//! 纯函数，无副作用。

use crate::error::TransformError;
use crate::models::passage::Question;
use crate::models::payload::{QuestionPayload, DEFAULT_SUB_TYPE, READING_TYPE};

/// 选项位置 → 字母（0 → 'A'）；超过 'Z' 时返回 `None`
pub fn index_to_letter(index: usize) -> Option<char> {
    u8::try_from(index)
        .ok()
        .filter(|i| *i < 26)
        .map(|i| char::from(b'A' + i))
}

/// 求正确答案对应的字母
///
/// 取第一个与 `correct_answer` 完全相同的选项的位置。
pub fn answer_letter(options: &[String], correct_answer: &str) -> Result<char, TransformError> {
    let index = options
        .iter()
        .position(|o| o == correct_answer)
        .ok_or_else(|| TransformError::AnswerNotInOptions {
            answer: correct_answer.to_string(),
        })?;

    index_to_letter(index).ok_or(TransformError::TooManyOptions { index })
}

/// 转换单道题目
pub fn transform_question(
    question: &Question,
    section_title: &str,
) -> Result<QuestionPayload, TransformError> {
    let letter = answer_letter(&question.options, &question.correct_answer)?;

    Ok(QuestionPayload {
        kind: READING_TYPE.to_string(),
        sub_type: question
            .sub_type
            .clone()
            .unwrap_or_else(|| DEFAULT_SUB_TYPE.to_string()),
        question: question.question.clone(),
        passage: question.passage.clone().unwrap_or_default(),
        options: question.options.clone(),
        correct_answer: letter.to_string(),
        points: question.points,
        difficulty: question.difficulty.clone(),
        tags: question.tags.clone().unwrap_or_default(),
        instruction_text: section_title.to_string(),
    })
}
