use std::path::Path;

use serde::Deserialize;
use tokio::fs;

use crate::error::{AppError, AppResult, InputError};

/// 页面分隔符（pdftotext 的换页符约定）
pub const PAGE_BREAK: char = '\u{000C}';

/// 已提取的页面文本
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTexts {
    /// 来源名称（文件名或文档中声明的 source）
    pub source: String,
    /// 按页顺序排列的原始文本
    pub pages: Vec<String>,
}

/// JSON 页面文档
#[derive(Debug, Deserialize)]
struct PageDocument {
    #[serde(default)]
    source: Option<String>,
    #[serde(default)]
    pages: Option<Vec<String>>,
}

/// 从文件加载页面文本
///
/// `.json` 按页面文档解析，其他扩展名按纯文本处理
pub async fn load_pages(path: &Path) -> AppResult<PageTexts> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;

    let file_name = path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();

    let is_json = path
        .extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let pages = if is_json {
        parse_page_document(&content, &file_name)?
    } else {
        PageTexts {
            source: file_name,
            pages: split_pages(&content),
        }
    };

    tracing::info!("已加载 {}: {} 页", pages.source, pages.pages.len());
    Ok(pages)
}

/// 按换页符切分纯文本；没有换页符时整份文本为一页
pub fn split_pages(content: &str) -> Vec<String> {
    content.split(PAGE_BREAK).map(str::to_string).collect()
}

/// 解析 JSON 页面文档，`pages` 缺失或为 null 时报错
pub fn parse_page_document(content: &str, fallback_source: &str) -> AppResult<PageTexts> {
    let doc: PageDocument = serde_json::from_str(content)
        .map_err(|source| InputError::MalformedDocument { source })?;

    let pages = doc.pages.ok_or(InputError::PagesAbsent)?;

    Ok(PageTexts {
        source: doc.source.unwrap_or_else(|| fallback_source.to_string()),
        pages,
    })
}
