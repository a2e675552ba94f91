//! 页面文本 → 段落序列
//!
//! 按页顺序展开，每页按换行切分，去掉首尾空白并丢弃空行。

/// 将页面文本展开为段落序列（借用原文本）
pub fn paragraphs<S: AsRef<str>>(pages: &[S]) -> impl Iterator<Item = &str> + '_ {
    pages
        .iter()
        .flat_map(|page| page.as_ref().lines())
        .map(str::trim)
        .filter(|line| !line.is_empty())
}

/// 同 [`paragraphs`]，但收集为自有字符串
pub fn flatten_pages<S: AsRef<str>>(pages: &[S]) -> Vec<String> {
    paragraphs(pages).map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_keeps_page_order_and_drops_blanks() {
        let pages = vec![
            "  Header line  \n\n1. What is the value of g?\r\n".to_string(),
            "\n   \n(a) 9.8\n".to_string(),
            String::new(),
        ];
        assert_eq!(
            flatten_pages(&pages),
            vec!["Header line", "1. What is the value of g?", "(a) 9.8"]
        );
    }

    #[test]
    fn test_no_pages_no_paragraphs() {
        let pages: Vec<&str> = Vec::new();
        assert!(flatten_pages(&pages).is_empty());
    }
}
