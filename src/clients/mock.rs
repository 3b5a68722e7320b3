/*!
 * 脚本化的内容 API（测试用）
 *
 * - `MockContentApi::working()` - 每次创建都成功，题目 ID 为 `q-1`、`q-2`…，试卷 ID 为 `t-1`…
 * - `.fail_question_call(n)` - 第 n 次（从 1 开始）创建题目时失败
 * - `.fail_all_questions()` - 所有题目创建都失败
 * - `.fail_tests()` - 创建试卷失败
 *
 * 所有调用按顺序记录在 `calls()` 中。
 */

use crate::clients::ContentApi;
use crate::error::HttpError;
use crate::models::payload::{QUESTIONS_RESOURCE, TESTS_RESOURCE};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::HashSet;
use std::sync::Mutex;

/// 一次被记录的调用
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub resource: String,
    pub payload: Value,
}

/// 模拟失败时返回的错误信息
pub const SIMULATED_FAILURE: &str = "simulated transport error";

#[derive(Debug, Default)]
struct MockState {
    calls: Vec<RecordedCall>,
    question_calls: usize,
    test_calls: usize,
}

/// 脚本化的内容 API
#[derive(Debug, Default)]
pub struct MockContentApi {
    failing_question_calls: HashSet<usize>,
    fail_all_questions: bool,
    fail_tests: bool,
    state: Mutex<MockState>,
}

impl MockContentApi {
    /// 每次创建都成功
    pub fn working() -> Self {
        Self::default()
    }

    /// 第 `n` 次创建题目失败（从 1 开始计数）
    pub fn fail_question_call(mut self, n: usize) -> Self {
        self.failing_question_calls.insert(n);
        self
    }

    pub fn fail_all_questions(mut self) -> Self {
        self.fail_all_questions = true;
        self
    }

    pub fn fail_tests(mut self) -> Self {
        self.fail_tests = true;
        self
    }

    /// 所有调用（按发生顺序）
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.lock().calls.clone()
    }

    /// 指定资源上的调用
    pub fn calls_to(&self, resource: &str) -> Vec<RecordedCall> {
        self.lock()
            .calls
            .iter()
            .filter(|c| c.resource == resource)
            .cloned()
            .collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn simulated_failure(resource: &str) -> HttpError {
        HttpError::status_error(format!("mock://{}", resource), 503, SIMULATED_FAILURE)
    }
}

#[async_trait]
impl ContentApi for MockContentApi {
    async fn create(&self, resource: &str, payload: &Value) -> Result<Value, HttpError> {
        let mut state = self.lock();
        state.calls.push(RecordedCall {
            resource: resource.to_string(),
            payload: payload.clone(),
        });

        match resource {
            QUESTIONS_RESOURCE => {
                state.question_calls += 1;
                let n = state.question_calls;
                if self.fail_all_questions || self.failing_question_calls.contains(&n) {
                    return Err(Self::simulated_failure(resource));
                }
                Ok(json!({ "_id": format!("q-{}", n) }))
            }
            TESTS_RESOURCE => {
                state.test_calls += 1;
                if self.fail_tests {
                    return Err(Self::simulated_failure(resource));
                }
                Ok(json!({ "data": { "id": format!("t-{}", state.test_calls) } }))
            }
            other => Ok(json!({ "id": format!("{}-{}", other, state.calls.len()) })),
        }
    }
}
