//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责批量导入和流程调度，是整个系统的"指挥中心"。
//!
//! ## 模块划分
//!
//! ### `batch_processor` - 批量文档导入器
//! - 管理应用生命周期（初始化、运行）
//! - 批量加载文档（Vec<LoadedDocument>）
//! - 持有 API 客户端和节流器
//! - 写 warn 文件、日志文件和 JSON 报告
//! - 输出全局统计信息
//!
//! ### `passage_importer` - 单份文档导入器
//! - 遍历单份文档的所有题目（按部分、按题目顺序）
//! - 复用同一个 QuestionFlow
//! - 汇总 ImportResult
//! - 创建试卷
//!
//! ### `seed` - 原样提交 JSON 请求体
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 Vec<Document>)
//!     ↓
//! passage_importer (处理 Vec<Question>)
//!     ↓
//! workflow::QuestionFlow (处理单个 Question)
//!     ↓
//! services (能力层：transform / pacer / warn)
//!     ↓
//! clients (ContentApi：session / token)
//! ```

pub mod batch_processor;
pub mod passage_importer;
pub mod seed;

// 重新导出主要类型
pub use batch_processor::{App, DocumentReport, ImportOptions, ProcessingStats};
pub use passage_importer::{check_passage, import_passage, PassageImporter};
pub use seed::seed;
