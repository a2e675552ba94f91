use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::models::question::Question;
use crate::models::subject::Subject;

/// 一次提取的结果（写入 TOML / JSON）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedPaper {
    /// 来源文件名
    pub source: String,
    pub extracted_at: DateTime<Local>,
    /// 使用的分类器名称，未配置时为空
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classifier: Option<String>,
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl ExtractedPaper {
    pub fn new(source: impl Into<String>, classifier: Option<String>, questions: Vec<Question>) -> Self {
        Self {
            source: source.into(),
            extracted_at: Local::now(),
            classifier,
            questions,
        }
    }

    pub fn summary(&self) -> SubjectSummary {
        SubjectSummary::from_questions(&self.questions)
    }
}

/// 各科目题目数量统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SubjectSummary {
    pub mathematics: usize,
    pub physics: usize,
    pub chemistry: usize,
    pub unclassified: usize,
}

impl SubjectSummary {
    pub fn from_questions(questions: &[Question]) -> Self {
        let mut summary = Self::default();
        for q in questions {
            match q.subject {
                Some(Subject::Mathematics) => summary.mathematics += 1,
                Some(Subject::Physics) => summary.physics += 1,
                Some(Subject::Chemistry) => summary.chemistry += 1,
                None => summary.unclassified += 1,
            }
        }
        summary
    }

    pub fn total(&self) -> usize {
        self.mathematics + self.physics + self.chemistry + self.unclassified
    }
}
