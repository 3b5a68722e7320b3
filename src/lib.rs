//! # Reading Passage Import
//!
//! 把阅读理解文档批量导入内容 API 的 Rust 应用程序
//!
//! ## 架构设计
//!
//! 本系统采用四层架构：
//!
//! ### ① 客户端层（Clients）
//! - `clients/` - 只暴露"创建一条记录"的能力（`ContentApi`）
//! - `ApiSession` - 预先认证好的会话
//! - `TokenClient` - 每次请求携带 Bearer 令牌
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单个 Question
//! - `transformer` - 题目 → API 请求体（纯函数）
//! - `Pacer` - 请求之间的节流
//! - `WarnWriter` - 写 warn.txt 能力
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一道题"的完整处理流程
//! - `QuestionCtx` - 上下文封装（文档 + 部分 + 题号）
//! - `QuestionFlow` - 流程编排（transform → create → pause）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 批量文档导入，管理资源和统计
//! - `orchestrator/passage_importer` - 单份文档导入，汇总 ImportResult 并创建试卷
//!
//! ## 模块结构

pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use clients::{ApiSession, ContentApi, MockContentApi, TokenClient};
pub use config::{ApiBinding, Config};
pub use error::{AppError, AppResult, HttpError, ImportError, TransformError};
pub use models::{ImportResult, PassageDocument, Question, Section};
pub use orchestrator::{check_passage, import_passage, App, ImportOptions, PassageImporter};
pub use services::{transform_question, FixedDelay, NoDelay, Pacer};
pub use utils::logging as logger;
pub use workflow::{QuestionCtx, QuestionFlow};
