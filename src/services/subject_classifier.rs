//! 科目分类 - 业务能力层
//!
//! 核心只依赖 [`SubjectClassifier`] 接口；具体实现由调用方构造后注入。
//! 分类失败、超时或未配置分类器时，科目保持为空，题目照常输出。

use std::future::Future;
use std::time::Duration;

use futures::stream::{self, StreamExt};
use tracing::{debug, info, warn};

use crate::models::question::Question;
use crate::models::subject::{Subject, CANDIDATE_LABELS};
use crate::utils::logging::truncate_text;

/// 科目分类能力
pub trait SubjectClassifier: Send + Sync {
    /// 分类器名称（写入输出和日志）
    fn name(&self) -> &str;

    /// 从候选标签中选出最匹配的一个，无法判断时返回 `None`
    fn classify(
        &self,
        text: &str,
        candidate_labels: &[&str],
    ) -> impl Future<Output = anyhow::Result<Option<String>>> + Send;
}

/// 分类参数
#[derive(Debug, Clone, Copy)]
pub struct ClassifyOptions {
    /// 单题超时，超时视为分类器不可用
    pub timeout: Duration,
    /// 同时进行的分类请求数量
    pub max_concurrent: usize,
}

impl Default for ClassifyOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            max_concurrent: 4,
        }
    }
}

/// 分类统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ClassifyStats {
    pub classified: usize,
    pub unlabeled: usize,
    pub failed: usize,
    pub timed_out: usize,
}

#[derive(Debug)]
enum Outcome {
    Classified(Subject),
    Unlabeled,
    Failed,
    TimedOut,
}

/// 为每道题分配科目
///
/// 各题之间可以并发，结果按原顺序写回；这里是唯一写 `subject` 的地方。
pub async fn classify_questions<C: SubjectClassifier>(
    questions: &mut [Question],
    classifier: Option<&C>,
    options: ClassifyOptions,
) -> ClassifyStats {
    let mut stats = ClassifyStats::default();

    let Some(classifier) = classifier else {
        info!("未配置分类器，{} 道题的科目保持为空", questions.len());
        stats.unlabeled = questions.len();
        return stats;
    };

    info!(
        "🏷️ 使用 {} 分类 {} 道题 (并发: {}, 超时: {:?})",
        classifier.name(),
        questions.len(),
        options.max_concurrent.max(1),
        options.timeout
    );

    let outcomes: Vec<Outcome> = stream::iter(questions.iter())
        .map(|q| classify_one(classifier, q, options.timeout))
        .buffered(options.max_concurrent.max(1))
        .collect()
        .await;

    for (question, outcome) in questions.iter_mut().zip(outcomes) {
        match outcome {
            Outcome::Classified(subject) => {
                question.subject = Some(subject);
                stats.classified += 1;
            }
            Outcome::Unlabeled => stats.unlabeled += 1,
            Outcome::Failed => stats.failed += 1,
            Outcome::TimedOut => stats.timed_out += 1,
        }
    }

    stats
}

async fn classify_one<C: SubjectClassifier>(
    classifier: &C,
    question: &Question,
    timeout: Duration,
) -> Outcome {
    let call = classifier.classify(&question.text, &CANDIDATE_LABELS);

    match tokio::time::timeout(timeout, call).await {
        Ok(Ok(Some(label))) => match Subject::from_label(&label) {
            Some(subject) => {
                debug!("题目 {} → {}", question.number, subject);
                Outcome::Classified(subject)
            }
            None => {
                warn!(
                    "题目 {} 分类结果 '{}' 不在候选标签中",
                    question.number,
                    truncate_text(&label, 40)
                );
                Outcome::Unlabeled
            }
        },
        Ok(Ok(None)) => {
            debug!("题目 {} 无法判断科目", question.number);
            Outcome::Unlabeled
        }
        Ok(Err(e)) => {
            warn!("题目 {} 分类失败: {}", question.number, e);
            Outcome::Failed
        }
        Err(_) => {
            warn!("题目 {} 分类超时 ({:?})", question.number, timeout);
            Outcome::TimedOut
        }
    }
}
