use serde::Serialize;

/// 一次导入的结果统计
///
/// 每次导入新建一个，只由这一次导入持有并修改，结束后返回给调用方。
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportResult {
    pub total_questions: usize,
    pub created_questions: usize,
    pub failed_questions: usize,
    /// 按创建顺序排列
    pub question_ids: Vec<String>,
    pub test_id: Option<String>,
    /// 形如 `Q<题号>: <错误信息>`
    pub errors: Vec<String>,
}

impl ImportResult {
    pub fn new(total_questions: usize) -> Self {
        Self {
            total_questions,
            ..Default::default()
        }
    }

    pub fn record_created(&mut self, id: String) {
        self.question_ids.push(id);
        self.created_questions += 1;
    }

    pub fn record_failed(&mut self, question_number: u32, message: impl std::fmt::Display) {
        self.failed_questions += 1;
        self.errors.push(format!("Q{}: {}", question_number, message));
    }

    /// 是否每道题都已处理（成功或失败）
    pub fn is_complete(&self) -> bool {
        self.created_questions + self.failed_questions == self.total_questions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_failed_formats_question_number() {
        let mut result = ImportResult::new(2);
        result.record_created("abc".into());
        result.record_failed(7, "connection refused");

        assert_eq!(result.errors, vec!["Q7: connection refused".to_string()]);
        assert_eq!(result.question_ids, vec!["abc".to_string()]);
        assert!(result.is_complete());
    }
}
