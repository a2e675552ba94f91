//! 题目起始行判断
//!
//! 判断顺序：长度 → 答案/解析标记 → 答案键行 → 题目关键词 → 题号。
//! 拒绝条件优先于接受条件，答案区的段落可能恰好包含 "what" 之类的词。

use regex::Regex;
use std::sync::LazyLock;

/// 题干最短长度（字符数）
pub const MIN_QUESTION_LEN: usize = 20;

/// 题号只在前 N 个字符内查找
const NUMBERING_WINDOW: usize = 20;

/// 答案/解析区标记（小写）
pub const SOLUTION_INDICATORS: &[&str] = &[
    "solution:",
    "answer key",
    "explanation:",
    "answers:",
    "correct option",
    "key answers",
    "sol.",
    "ans.",
];

/// 题目关键词（小写）
pub const QUESTION_INDICATORS: &[&str] = &[
    "what",
    "which",
    "how many",
    "calculate",
    "determine",
    "find",
    "prove",
    "show that",
    "ratio of",
    "value of",
];

/// 答案键行："12. b"、"3 d"、"a"
static ANSWER_KEY_ROW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*\d+\.?\s*[a-d]\s*$").expect("valid answer key regex"));

/// 题号："Q1."、"Question 12)"、"3."
static QUESTION_NUMBERING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(q|question)?\s*\d+[.)]").expect("valid numbering regex")
});

/// 以答案/解析标记开头的行："Solution: ..."、"Ans. (b)"、"Answer Key"
///
/// 标记必须位于行首，并以冒号、句点或词边界结束，
/// "means."、"aerosol." 这类行内子串不算。
static ANSWER_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\s*(?:(?:solution|explanation|answers?|ans|sol|correct\s+option)\s*[:.]|answer\s+key\b|key\s+answers\b)",
    )
    .expect("valid answer marker regex")
});

/// 是否包含答案/解析标记
pub fn has_solution_indicator(paragraph: &str) -> bool {
    let lower = paragraph.to_lowercase();
    SOLUTION_INDICATORS.iter().any(|ind| lower.contains(ind))
}

/// 整行是否只是一条答案键
pub fn is_answer_key_row(paragraph: &str) -> bool {
    ANSWER_KEY_ROW.is_match(paragraph)
}

/// 以答案/解析标记开头，不能作为题干续行
pub fn starts_with_answer_marker(paragraph: &str) -> bool {
    ANSWER_MARKER.is_match(paragraph)
}

/// 判断段落是否开始一道新题
pub fn is_question_start(paragraph: &str) -> bool {
    let text = paragraph.trim().to_lowercase();

    if text.chars().count() < MIN_QUESTION_LEN {
        return false;
    }

    if has_solution_indicator(&text) {
        return false;
    }

    if is_answer_key_row(&text) {
        return false;
    }

    if QUESTION_INDICATORS.iter().any(|ind| text.contains(ind)) {
        return true;
    }

    let head: String = text.chars().take(NUMBERING_WINDOW).collect();
    QUESTION_NUMBERING.is_match(&head)
}
