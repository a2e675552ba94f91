/// 日志工具模块
///
/// 提供日志初始化、格式化和输出的辅助函数
use chrono::{DateTime, Local};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::models::paper::SubjectSummary;
use crate::workflow::ExtractionOutcome;

/// 初始化 tracing 日志
///
/// - `RUST_LOG` 控制过滤级别，默认 `info`
/// - `LOG_FORMAT=json` 输出结构化日志
/// - 重复调用不会报错
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);

    let _ = match std::env::var("LOG_FORMAT").as_deref() {
        Ok("json") => builder.json().try_init(),
        _ => builder.try_init(),
    };
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 试卷题目提取");
    info!("📥 输入: {}", config.input_path);
    info!("📤 输出: {}", config.output_path);
    info!("🏷️ 分类器: {:?}", config.classifier);
    info!("{}", "=".repeat(60));
}

/// 打印最终统计信息
pub fn print_final_stats(
    outcome: &ExtractionOutcome,
    summary: &SubjectSummary,
    output_path: &str,
    started_at: DateTime<Local>,
) {
    let finished_at = Local::now();
    info!("\n{}", "=".repeat(60));
    info!("📊 提取完成统计");
    info!("完成时间: {}", finished_at.format("%Y-%m-%d %H:%M:%S"));
    info!("⏱️ 耗时: {}", format_elapsed(finished_at - started_at));
    info!("{}", "=".repeat(60));
    info!("段落: {} (丢弃 {})", outcome.paragraphs, outcome.discarded);
    info!("✅ 题目: {}", summary.total());
    info!(
        "   数学 {} | 物理 {} | 化学 {} | 未分类 {}",
        summary.mathematics, summary.physics, summary.chemistry, summary.unclassified
    );
    if outcome.classify.failed + outcome.classify.timed_out > 0 {
        info!(
            "⚠️ 分类失败 {} | 超时 {}",
            outcome.classify.failed, outcome.classify.timed_out
        );
    }
    info!("补齐选项: {}", outcome.backfilled);
    info!("{}", "=".repeat(60));
    info!("\n结果已保存至: {}", output_path);
}

/// 格式化耗时："850ms"、"12.3s"、"2m05s"
pub fn format_elapsed(elapsed: chrono::TimeDelta) -> String {
    let millis = elapsed.num_milliseconds().max(0);
    if millis < 1000 {
        format!("{}ms", millis)
    } else if millis < 60_000 {
        format!("{:.1}s", millis as f64 / 1000.0)
    } else {
        format!("{}m{:02}s", millis / 60_000, (millis % 60_000) / 1000)
    }
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
