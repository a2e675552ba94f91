//! 结果写入服务 - 业务能力层
//!
//! 只负责"把提取结果写成 TOML / JSON 文件"，不关心流程

use std::path::Path;

use tokio::fs;
use tracing::debug;

use crate::config::OutputFormat;
use crate::error::{AppError, AppResult, FileError};
use crate::models::paper::ExtractedPaper;

/// 结果写入服务
pub struct PaperWriter {
    output_path: String,
    format: OutputFormat,
}

impl PaperWriter {
    /// 创建写入服务，格式按扩展名推断
    pub fn new(output_path: impl Into<String>) -> Self {
        let output_path = output_path.into();
        let format = OutputFormat::from_path(&output_path);
        Self {
            output_path,
            format,
        }
    }

    /// 指定输出格式
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn output_path(&self) -> &str {
        &self.output_path
    }

    /// 写入提取结果，父目录不存在时先创建
    pub async fn write(&self, paper: &ExtractedPaper) -> AppResult<()> {
        let content = render(paper, self.format)?;

        debug!(
            "写入结果: {} | 题目 {} | {} 字节",
            self.output_path,
            paper.questions.len(),
            content.len()
        );

        if let Some(parent) = Path::new(&self.output_path).parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| AppError::file_write_failed(&self.output_path, e))?;
            }
        }

        fs::write(&self.output_path, content)
            .await
            .map_err(|e| AppError::file_write_failed(&self.output_path, e))
    }
}

/// 序列化提取结果
pub fn render(paper: &ExtractedPaper, format: OutputFormat) -> AppResult<String> {
    let rendered = match format {
        OutputFormat::Toml => toml::to_string_pretty(paper).map_err(|e| FileError::SerializeFailed {
            format: "toml".to_string(),
            message: e.to_string(),
        })?,
        OutputFormat::Json => serde_json::to_string_pretty(paper).map_err(|e| FileError::SerializeFailed {
            format: "json".to_string(),
            message: e.to_string(),
        })?,
    };
    Ok(rendered)
}
