pub mod page_loader;

pub use page_loader::{load_pages, parse_page_document, split_pages, PageTexts};
