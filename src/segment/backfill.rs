use crate::models::question::Question;

/// 占位选项数量
pub const BACKFILL_OPTION_COUNT: usize = 4;

/// 生成占位选项
pub fn placeholder_options(number: &str) -> Vec<String> {
    (0..BACKFILL_OPTION_COUNT)
        .map(|i| format!("Option {} for question {}", Question::option_letter(i), number))
        .collect()
}

/// 为没有解析到任何选项的题目补齐 4 个占位选项
///
/// 已有选项（哪怕少于 4 个）的题目保持不变；重复调用结果相同。
/// 返回补齐的题目数量。
pub fn backfill_options(questions: &mut [Question]) -> usize {
    let mut filled = 0;
    for q in questions.iter_mut().filter(|q| q.options.is_empty()) {
        q.options = placeholder_options(&q.number);
        filled += 1;
    }
    filled
}
