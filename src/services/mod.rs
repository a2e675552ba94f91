pub mod classifier_factory;
pub mod keyword_classifier;
pub mod llm_service;
pub mod paper_writer;
pub mod subject_classifier;

pub use classifier_factory::{build_classifier, ConfiguredClassifier};
pub use keyword_classifier::KeywordSubjectClassifier;
pub use llm_service::LlmSubjectClassifier;
pub use paper_writer::PaperWriter;
pub use subject_classifier::{classify_questions, ClassifyOptions, ClassifyStats, SubjectClassifier};
