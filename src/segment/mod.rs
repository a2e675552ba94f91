//! 题目切分层
//!
//! 纯同步、无共享状态：段落展开、起始行判断、选项识别、状态机组装、选项补齐。

pub mod assembler;
pub mod backfill;
pub mod line_classifier;
pub mod option_matcher;
pub mod paragraphs;

pub use assembler::{assemble_questions, QuestionAssembler};
pub use backfill::{backfill_options, placeholder_options};
pub use line_classifier::{is_question_start, QUESTION_INDICATORS, SOLUTION_INDICATORS};
pub use option_matcher::{match_option, OptionLine};
pub use paragraphs::{flatten_pages, paragraphs};

use crate::models::question::Question;

/// 页面文本 → 题目序列（尚未分类、尚未补齐选项）
pub fn extract_questions<S: AsRef<str>>(pages: &[S]) -> Vec<Question> {
    assemble_questions(paragraphs(pages))
}
