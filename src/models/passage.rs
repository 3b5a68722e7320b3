use serde::{Deserialize, Serialize};

/// 阅读理解文档（一次导入的完整输入）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassageDocument {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// 时长（分钟）
    pub duration: u32,
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl PassageDocument {
    /// 所有部分的题目总数；溢出时返回 `None`
    pub fn question_count(&self) -> Option<usize> {
        self.sections
            .iter()
            .try_fold(0usize, |acc, s| acc.checked_add(s.questions.len()))
    }

    /// 按文档顺序遍历 (部分, 题目)
    pub fn iter_questions(&self) -> impl Iterator<Item = (&Section, &Question)> {
        self.sections
            .iter()
            .flat_map(|s| s.questions.iter().map(move |q| (s, q)))
    }
}

/// 文档中的一个部分
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// 仅用于展示，不要求唯一或连续
    pub section_number: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub points: f64,
    #[serde(default)]
    pub questions: Vec<Question>,
}

/// 单道题目
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub question_number: u32,
    pub question: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passage: Option<String>,
    /// 选项顺序决定字母 A、B、C…
    pub options: Vec<String>,
    /// 必须与某个选项完全相同
    pub correct_answer: String,
    pub points: f64,
    pub difficulty: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case_json() {
        let raw = r#"{
            "title": "The Honey Bee",
            "description": "Reading practice",
            "type": "reading",
            "duration": 20,
            "sections": [{
                "sectionNumber": 1,
                "title": "Choose the correct letter",
                "description": "",
                "points": 3,
                "questions": [{
                    "questionNumber": 1,
                    "question": "What do bees collect?",
                    "options": ["Nectar", "Sand"],
                    "correctAnswer": "Nectar",
                    "points": 1,
                    "difficulty": "easy"
                }]
            }]
        }"#;

        let doc: PassageDocument = serde_json::from_str(raw).unwrap();
        assert_eq!(doc.kind, "reading");
        assert_eq!(doc.question_count(), Some(1));

        let q = &doc.sections[0].questions[0];
        assert_eq!(q.correct_answer, "Nectar");
        assert!(q.passage.is_none());
        assert!(q.tags.is_none());
        assert!(q.sub_type.is_none());
    }

    #[test]
    fn test_iter_questions_keeps_document_order() {
        let raw = r#"
            title = "t"
            type = "reading"
            duration = 10

            [[sections]]
            sectionNumber = 2
            title = "second"
            [[sections.questions]]
            questionNumber = 5
            question = "a"
            options = ["x"]
            correctAnswer = "x"
            points = 1.0
            difficulty = "easy"
            [[sections.questions]]
            questionNumber = 6
            question = "b"
            options = ["x"]
            correctAnswer = "x"
            points = 1.0
            difficulty = "easy"

            [[sections]]
            sectionNumber = 1
            title = "first"
            [[sections.questions]]
            questionNumber = 1
            question = "c"
            options = ["x"]
            correctAnswer = "x"
            points = 1.0
            difficulty = "hard"
        "#;

        let doc: PassageDocument = toml::from_str(raw).unwrap();
        let order: Vec<(String, u32)> = doc
            .iter_questions()
            .map(|(s, q)| (s.title.clone(), q.question_number))
            .collect();

        assert_eq!(
            order,
            vec![
                ("second".to_string(), 5),
                ("second".to_string(), 6),
                ("first".to_string(), 1),
            ]
        );
    }
}
