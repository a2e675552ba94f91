use serde::{Deserialize, Serialize};

/// 科目枚举（固定分类集合）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Subject {
    /// 数学
    Mathematics,
    /// 物理
    Physics,
    /// 化学
    Chemistry,
}

/// 候选标签，顺序即分类器看到的顺序
pub const CANDIDATE_LABELS: [&str; 3] = ["Mathematics", "Physics", "Chemistry"];

/// 别名表（小写）
static SUBJECT_ALIASES: phf::Map<&'static str, Subject> = phf::phf_map! {
    "mathematics" => Subject::Mathematics,
    "maths" => Subject::Mathematics,
    "math" => Subject::Mathematics,
    "数学" => Subject::Mathematics,
    "physics" => Subject::Physics,
    "phys" => Subject::Physics,
    "物理" => Subject::Physics,
    "chemistry" => Subject::Chemistry,
    "chem" => Subject::Chemistry,
    "化学" => Subject::Chemistry,
};

impl Subject {
    /// 全部科目，与 `CANDIDATE_LABELS` 同序
    pub const ALL: [Subject; 3] = [Subject::Mathematics, Subject::Physics, Subject::Chemistry];

    /// 获取标准标签
    pub fn label(self) -> &'static str {
        match self {
            Subject::Mathematics => "Mathematics",
            Subject::Physics => "Physics",
            Subject::Chemistry => "Chemistry",
        }
    }

    /// 从标签解析科目
    ///
    /// 忽略大小写和首尾标点，支持常见缩写（`math`、`chem` 等）
    pub fn from_label(s: &str) -> Option<Self> {
        let cleaned = s
            .trim()
            .trim_matches(|c: char| !c.is_alphanumeric())
            .to_lowercase();
        SUBJECT_ALIASES.get(cleaned.as_str()).copied()
    }
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
