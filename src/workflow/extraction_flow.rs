//! 提取流程 - 流程层
//!
//! 核心职责：定义"一份试卷文本"的完整处理流程
//!
//! 流程顺序：
//! 1. 页面文本 → 段落
//! 2. 段落 → 题目（状态机组装）
//! 3. 题目 → 科目（注入的分类器，可缺省）
//! 4. 无选项的题目补齐占位选项

use tracing::{debug, info};

use crate::error::{AppResult, InputError};
use crate::models::question::Question;
use crate::segment::{backfill_options, paragraphs, QuestionAssembler};
use crate::services::subject_classifier::{
    classify_questions, ClassifyOptions, ClassifyStats, SubjectClassifier,
};

/// 一次提取的结果和统计
#[derive(Debug, Default, Clone)]
pub struct ExtractionOutcome {
    pub questions: Vec<Question>,
    /// 段落总数
    pub paragraphs: usize,
    /// 未进入任何题目的段落数
    pub discarded: usize,
    /// 补齐了占位选项的题目数
    pub backfilled: usize,
    pub classify: ClassifyStats,
}

/// 提取流程
///
/// - 不持有页面数据，每次 `run` 相互独立
/// - 分类器由调用方构造后传入，`None` 表示不分类
pub struct ExtractionFlow<'a, C: SubjectClassifier> {
    classifier: Option<&'a C>,
    options: ClassifyOptions,
}

impl<'a, C: SubjectClassifier> ExtractionFlow<'a, C> {
    pub fn new(classifier: Option<&'a C>, options: ClassifyOptions) -> Self {
        Self {
            classifier,
            options,
        }
    }

    /// 页面序列可能缺失的入口，缺失时立即报错
    pub async fn run_checked<S: AsRef<str>>(&self, pages: Option<&[S]>) -> AppResult<ExtractionOutcome> {
        let pages = pages.ok_or(InputError::PagesAbsent)?;
        Ok(self.run(pages).await)
    }

    /// 执行完整流程
    pub async fn run<S: AsRef<str>>(&self, pages: &[S]) -> ExtractionOutcome {
        info!("📄 开始切分: {} 页", pages.len());

        let mut assembler = QuestionAssembler::new();
        let mut paragraph_count = 0;
        for paragraph in paragraphs(pages) {
            paragraph_count += 1;
            assembler.push(paragraph);
        }
        let discarded = assembler.discarded();
        let mut questions = assembler.finish();

        info!(
            "✓ 切分完成: {} 个段落 → {} 道题 (丢弃 {} 个段落)",
            paragraph_count,
            questions.len(),
            discarded
        );

        let classify = classify_questions(&mut questions, self.classifier, self.options).await;

        let backfilled = backfill_options(&mut questions);
        if backfilled > 0 {
            debug!("{} 道题没有解析到选项，已补齐占位选项", backfilled);
        }

        ExtractionOutcome {
            questions,
            paragraphs: paragraph_count,
            discarded,
            backfilled,
            classify,
        }
    }
}
