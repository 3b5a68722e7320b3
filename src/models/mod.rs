pub mod import_result;
pub mod loaders;
pub mod passage;
pub mod payload;

pub use import_result::ImportResult;
pub use loaders::{load_all_documents, load_document, LoadedDocument};
pub use passage::{PassageDocument, Question, Section};
pub use payload::{QuestionPayload, TestPayload, QUESTIONS_RESOURCE, TESTS_RESOURCE};
