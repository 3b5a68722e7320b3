use reading_passage_import::clients::mock::MockContentApi;
use reading_passage_import::config::Config;
use reading_passage_import::models::{load_document, TESTS_RESOURCE};
use reading_passage_import::orchestrator::{import_passage, App, ImportOptions};
use reading_passage_import::services::NoDelay;
use reading_passage_import::{logger, ApiSession};
use std::path::Path;
use std::sync::Arc;

const BEES_TOML: &str = r#"
title = "The Honey Bee"
description = "Academic reading practice"
type = "reading"
duration = 20

[[sections]]
sectionNumber = 1
title = "Questions 1-3: Choose the correct letter"
description = "Multiple choice"
points = 3.0

[[sections.questions]]
questionNumber = 1
question = "What do bees mainly collect?"
passage = "Bees visit flowers..."
options = ["Nectar", "Sand", "Leaves"]
correctAnswer = "Nectar"
points = 1.0
difficulty = "easy"
tags = ["insects"]

[[sections.questions]]
questionNumber = 2
question = "Where do bees live?"
options = ["Caves", "Hives", "Rivers"]
correctAnswer = "Hives"
points = 1.0
difficulty = "easy"

[[sections.questions]]
questionNumber = 3
question = "Is honey a liquid?"
options = ["TRUE", "FALSE", "NOT GIVEN"]
correctAnswer = "TRUE"
points = 1.0
difficulty = "medium"
subType = "true-false-not-given"
"#;

const BROKEN_ANSWER_JSON: &str = r#"{
  "title": "Ants",
  "description": "",
  "type": "reading",
  "duration": 10,
  "sections": [{
    "sectionNumber": 1,
    "title": "Questions 1-1",
    "description": "",
    "points": 1,
    "questions": [{
      "questionNumber": 1,
      "question": "How many legs?",
      "options": ["Four", "Six"],
      "correctAnswer": "Eight",
      "points": 1,
      "difficulty": "easy"
    }]
  }]
}"#;

fn test_config(dir: &Path) -> Config {
    Config {
        passage_folder: dir.join("passages").to_string_lossy().to_string(),
        output_log_file: dir.join("import_log.txt").to_string_lossy().to_string(),
        warn_file: dir.join("warn.txt").to_string_lossy().to_string(),
        request_delay_ms: 0,
        ..Config::default()
    }
}

fn write_passages(dir: &Path) {
    let folder = dir.join("passages");
    std::fs::create_dir_all(&folder).unwrap();
    std::fs::write(folder.join("1-bees.toml"), BEES_TOML).unwrap();
    std::fs::write(folder.join("2-ants.json"), BROKEN_ANSWER_JSON).unwrap();
}

#[tokio::test]
async fn test_import_single_document_with_one_failure() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bees.toml");
    std::fs::write(&path, BEES_TOML).unwrap();

    let document = load_document(&path).await.unwrap();
    let api = MockContentApi::working().fail_question_call(2);

    let result = import_passage(&document, &api, &NoDelay).await.unwrap();

    assert_eq!(result.total_questions, 3);
    assert_eq!(result.created_questions, 2);
    assert_eq!(result.failed_questions, 1);
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].starts_with("Q2: "));
    assert_eq!(result.test_id.as_deref(), Some("t-1"));

    let calls = api.calls();
    assert_eq!(calls.len(), 4);
    assert_eq!(calls[0].payload["passage"], "Bees visit flowers...");
    assert_eq!(calls[0].payload["tags"], serde_json::json!(["insects"]));
    assert_eq!(calls[1].payload["subType"], "multiple-choice");
    assert_eq!(calls[1].payload["correctAnswer"], "B");
    assert_eq!(calls[2].payload["subType"], "true-false-not-given");
    assert_eq!(calls[3].resource, TESTS_RESOURCE);
    assert_eq!(calls[3].payload["questions"], serde_json::json!(["q-1", "q-3"]));
}

#[tokio::test]
async fn test_app_imports_folder_and_writes_side_files() {
    logger::init(false);

    let dir = tempfile::tempdir().unwrap();
    write_passages(dir.path());
    let config = test_config(dir.path());
    let report_path = dir.path().join("report.json");

    let api = Arc::new(MockContentApi::working());
    let app = App::with_parts(config.clone(), Box::new(api.clone()), Box::new(NoDelay));

    let options = ImportOptions {
        dry_run: false,
        report_path: Some(report_path.clone()),
    };
    let stats = app.run(&[], &options).await.unwrap();

    assert_eq!(stats.total, 2);
    assert_eq!(stats.success, 2);
    assert_eq!(stats.failed, 0);

    let bees = stats.documents[0].result.as_ref().unwrap();
    assert_eq!(bees.created_questions, 3);
    assert_eq!(bees.test_id.as_deref(), Some("t-1"));

    // 答案不在选项中：记为失败，没有成功题目，不创建试卷
    let ants = stats.documents[1].result.as_ref().unwrap();
    assert_eq!(ants.failed_questions, 1);
    assert_eq!(ants.test_id, None);
    assert_eq!(api.calls_to(TESTS_RESOURCE).len(), 1);

    let warn = std::fs::read_to_string(&config.warn_file).unwrap();
    assert!(warn.starts_with("2-ants.json | Q1: "));

    let log = std::fs::read_to_string(&config.output_log_file).unwrap();
    assert!(log.contains("1-bees.toml | 总数 3 | 成功 3 | 失败 0 | 试卷 t-1"));

    let report: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(report["documents"][0]["result"]["questionIds"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_app_dry_run_makes_no_calls() {
    let dir = tempfile::tempdir().unwrap();
    write_passages(dir.path());
    let config = test_config(dir.path());

    let api = Arc::new(MockContentApi::working());
    let app = App::with_parts(config, Box::new(api.clone()), Box::new(NoDelay));

    let options = ImportOptions {
        dry_run: true,
        report_path: None,
    };
    let stats = app.run(&[], &options).await.unwrap();

    assert!(api.calls().is_empty());
    assert_eq!(stats.success, 1);
    assert_eq!(stats.failed, 1);
    assert!(stats.documents[1].problems[0].starts_with("Q1: "));
}

#[tokio::test]
async fn test_app_check_leaves_log_file_untouched() {
    let dir = tempfile::tempdir().unwrap();
    write_passages(dir.path());
    let config = test_config(dir.path());
    std::fs::write(&config.output_log_file, "earlier run\n").unwrap();

    let app = App::for_check(config.clone());
    let options = ImportOptions {
        dry_run: true,
        report_path: None,
    };
    let stats = app.run(&[], &options).await.unwrap();

    assert_eq!(stats.total, 2);
    assert_eq!(stats.failed, 1);
    assert_eq!(
        std::fs::read_to_string(&config.output_log_file).unwrap(),
        "earlier run\n"
    );

    let result = app.run(&[], &ImportOptions::default()).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_app_test_creation_failure_only_fails_that_document() {
    let dir = tempfile::tempdir().unwrap();
    write_passages(dir.path());
    let config = test_config(dir.path());

    let api = Arc::new(MockContentApi::working().fail_tests());
    let app = App::with_parts(config.clone(), Box::new(api.clone()), Box::new(NoDelay));

    let stats = app.run(&[], &ImportOptions::default()).await.unwrap();

    assert_eq!(stats.failed, 1);
    assert_eq!(stats.success, 1);
    assert!(stats.documents[0].result.is_none());
    assert!(stats.documents[0].problems[0].contains("创建试卷失败"));

    let warn = std::fs::read_to_string(&config.warn_file).unwrap();
    assert!(warn.contains("1-bees.toml | 导入中断"));
}

#[tokio::test]
async fn test_app_explicit_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    let app = App::with_parts(config, Box::new(MockContentApi::working()), Box::new(NoDelay));

    let result = app
        .run(&[dir.path().join("nope.toml")], &ImportOptions::default())
        .await;

    assert!(result.is_err());
}

#[tokio::test]
#[ignore] // 默认忽略，需要本地内容 API：cargo test -- --ignored
async fn test_import_against_local_api() {
    logger::init(true);

    let config = Config::from_env();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bees.toml");
    std::fs::write(&path, BEES_TOML).unwrap();

    let document = load_document(&path).await.unwrap();
    let session = ApiSession::new(&config).expect("创建会话失败");

    let result = import_passage(&document, &session, &NoDelay)
        .await
        .expect("导入失败");

    assert_eq!(result.created_questions + result.failed_questions, 3);
    println!("{:#?}", result);
}
