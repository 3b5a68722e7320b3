//! 题目处理上下文
//!
//! 封装"我正在处理哪份文档、哪个部分的第几题"这一信息

use std::fmt::Display;

/// 题目处理上下文
#[derive(Debug, Clone)]
pub struct QuestionCtx {
    /// 文档索引（仅用于日志显示）
    pub document_index: usize,

    /// 所在部分的编号（仅用于日志显示）
    pub section_number: u32,

    /// 所在部分的标题，作为题目的 instructionText
    pub section_title: String,

    /// 题号
    pub question_number: u32,

    /// 在整份文档中的位置（从1开始）
    pub position: usize,

    /// 文档题目总数
    pub total: usize,
}

impl Display for QuestionCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[文档 {} 部分#{} 题目#{} ({}/{})]",
            self.document_index, self.section_number, self.question_number, self.position, self.total
        )
    }
}
