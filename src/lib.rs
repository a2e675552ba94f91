//! # Question Extract
//!
//! 从试卷 PDF 提取出的纯文本中切分题目，并为每道题标注科目
//!
//! ## 架构设计
//!
//! ### ① 数据层（Models）
//! - `models/` - `Question`、`Subject`、`ExtractedPaper`、页面文本加载
//!
//! ### ② 切分层（Segment）
//! - `segment/` - 纯函数和状态机，不做任何 IO
//! - `is_question_start` / `match_option` - 行级判断
//! - `QuestionAssembler` - 段落 → 题目
//! - `backfill_options` - 补齐占位选项
//!
//! ### ③ 业务能力层（Services）
//! - `services/` - 描述"我能做什么"
//! - `SubjectClassifier` - 科目分类接口，`KeywordSubjectClassifier` / `LlmSubjectClassifier` 两种实现
//! - `PaperWriter` - 写出 TOML / JSON
//!
//! ### ④ 流程层（Workflow）
//! - `ExtractionFlow` - 切分 → 分类 → 补齐
//!
//! ### ⑤ 编排层（Orchestration）
//! - `App` - 读取配置、加载页面、写出结果
//! - `cli` - 命令行参数（clap），覆盖配置文件 / 环境变量
//!
//! ## 模块结构

pub mod cli;
pub mod config;
pub mod error;

pub mod models;
pub mod orchestrator;
pub mod segment;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{ExtractedPaper, Question, Subject};
pub use orchestrator::App;
pub use segment::{extract_questions, is_question_start, match_option};
pub use services::{classify_questions, ClassifyOptions, SubjectClassifier};
pub use workflow::{ExtractionFlow, ExtractionOutcome};
