pub mod loaders;
pub mod paper;
pub mod question;
pub mod subject;

pub use loaders::{load_pages, PageTexts};
pub use paper::{ExtractedPaper, SubjectSummary};
pub use question::{questions_by_subject, Question};
pub use subject::{Subject, CANDIDATE_LABELS};
