use serde::{Deserialize, Serialize};

use crate::models::subject::Subject;

/// 组装完成的题目
///
/// `number`/`text`/`options` 只由组装器写入；`subject` 只由分类适配器写入；
/// `answer`/`marked` 归界面层所有，这里只做初始化。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub number: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<Subject>,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<usize>,
    #[serde(default)]
    pub marked: bool,
}

impl Question {
    /// 以触发行开始一道新题
    pub(crate) fn start(ordinal: usize, paragraph: &str) -> Self {
        Self {
            number: ordinal.to_string(),
            text: paragraph.to_string(),
            subject: None,
            options: Vec::new(),
            answer: None,
            marked: false,
        }
    }

    /// 追加续行
    pub(crate) fn push_continuation(&mut self, paragraph: &str) {
        self.text.push('\n');
        self.text.push_str(paragraph);
    }

    /// 追加选项正文
    pub(crate) fn push_option(&mut self, body: impl Into<String>) {
        self.options.push(body.into());
    }

    /// 按位置推导的选项字母（A、B、C...）
    pub fn option_letter(index: usize) -> char {
        (b'A' + (index % 26) as u8) as char
    }
}

/// 按科目过滤题目，`None` 表示全部题目
pub fn questions_by_subject(questions: &[Question], subject: Option<Subject>) -> Vec<&Question> {
    match subject {
        None => questions.iter().collect(),
        Some(s) => questions.iter().filter(|q| q.subject == Some(s)).collect(),
    }
}
