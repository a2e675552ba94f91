//! 选项行识别："(a) 9.8"、" (C)  1:2"

use regex::Regex;
use std::sync::LazyLock;

/// 只识别 a–d 四个选项字母
static OPTION_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*\(([a-d])\)\s*(.*)$").expect("valid option regex"));

/// 识别出的选项行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionLine<'a> {
    /// 大写字母 A–D
    pub letter: char,
    /// 选项正文（去掉首尾空白）
    pub body: &'a str,
}

/// 匹配选项行，返回字母和正文
pub fn match_option(paragraph: &str) -> Option<OptionLine<'_>> {
    let caps = OPTION_LINE.captures(paragraph)?;
    let letter = caps.get(1)?.as_str().chars().next()?.to_ascii_uppercase();
    let body = caps.get(2).map_or("", |m| m.as_str()).trim();
    Some(OptionLine { letter, body })
}
