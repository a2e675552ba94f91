//! 编排层（Orchestration Layer）
//!
//! ## 层次关系
//!
//! ```text
//! orchestrator::App (加载页面 / 写出结果)
//!     ↓
//! workflow::ExtractionFlow (一份试卷的完整流程)
//!     ↓
//! segment (切分：段落 → 题目)   services (能力层：分类 / 写文件)
//!     ↓
//! models (数据：Question / Subject / ExtractedPaper)
//! ```
//!
//! ## 设计原则
//!
//! 1. **向下依赖**：编排层 → workflow → segment / services → models
//! 2. **资源隔离**：只有编排层持有分类器实例和文件路径
//! 3. **无业务逻辑**：只做调度和统计，不做具体判断

pub mod app;

pub use app::App;
