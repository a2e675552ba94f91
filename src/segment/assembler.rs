//! 题目组装器
//!
//! 单遍状态机，按文档顺序消费段落：
//!
//! ```text
//! NoCurrentQuestion ──题目起始行──▶ BuildingQuestion(q)
//! BuildingQuestion(q) ──题目起始行──▶ 输出 q，BuildingQuestion(q')
//! BuildingQuestion(q) ──选项行──▶ q.options 追加
//! BuildingQuestion(q) ──答案标记行──▶ 丢弃
//! BuildingQuestion(q) ──其他行──▶ q.text 追加 "\n" + 行
//! NoCurrentQuestion ──其他行──▶ 丢弃
//! ```
//!
//! 已输出的题目不会再被修改。

use tracing::debug;

use crate::models::question::Question;
use crate::segment::line_classifier::{is_question_start, starts_with_answer_marker};
use crate::segment::option_matcher::match_option;

/// 组装状态
#[derive(Debug, Default)]
enum AssemblerState {
    #[default]
    NoCurrentQuestion,
    BuildingQuestion(Question),
}

/// 题目组装器
///
/// 可以在任意两个段落之间停下：`flushed()` 中的题目都是完整的，
/// `finish()` 会把正在组装的题目一并输出。
#[derive(Debug, Default)]
pub struct QuestionAssembler {
    state: AssemblerState,
    started: usize,
    output: Vec<Question>,
    discarded: usize,
}

impl QuestionAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// 消费一个段落
    pub fn push(&mut self, paragraph: &str) {
        if is_question_start(paragraph) {
            self.flush_current();
            self.started += 1;
            debug!("题目 {} 开始: {}", self.started, paragraph);
            self.state = AssemblerState::BuildingQuestion(Question::start(self.started, paragraph));
            return;
        }

        match &mut self.state {
            AssemblerState::BuildingQuestion(current) => {
                if let Some(option) = match_option(paragraph) {
                    current.push_option(option.body);
                } else if starts_with_answer_marker(paragraph) {
                    // "Solution:"、"Ans." 开头的解析行不计入题干
                    debug!("题目 {} 跳过答案行: {}", current.number, paragraph);
                    self.discarded += 1;
                } else {
                    current.push_continuation(paragraph);
                }
            }
            AssemblerState::NoCurrentQuestion => {
                debug!("首题之前的内容已丢弃: {}", paragraph);
                self.discarded += 1;
            }
        }
    }

    /// 已输出的完整题目
    pub fn flushed(&self) -> &[Question] {
        &self.output
    }

    /// 已开始的题目数量（含正在组装的）
    pub fn started(&self) -> usize {
        self.started
    }

    /// 被丢弃的段落数量
    pub fn discarded(&self) -> usize {
        self.discarded
    }

    /// 结束组装，输出最后一道题
    pub fn finish(mut self) -> Vec<Question> {
        self.flush_current();
        self.output
    }

    fn flush_current(&mut self) {
        if let AssemblerState::BuildingQuestion(done) = std::mem::take(&mut self.state) {
            self.output.push(done);
        }
    }
}

/// 组装整段段落序列
pub fn assemble_questions<'a, I>(paragraphs: I) -> Vec<Question>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut assembler = QuestionAssembler::new();
    for paragraph in paragraphs {
        assembler.push(paragraph);
    }
    assembler.finish()
}
