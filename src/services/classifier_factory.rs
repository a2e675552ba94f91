//! 按配置构造分类器
//!
//! 构造失败由调用方决定如何降级，这里不做静默回退。

use crate::config::{ClassifierKind, Config};
use crate::error::ClassifierError;
use crate::services::keyword_classifier::KeywordSubjectClassifier;
use crate::services::llm_service::LlmSubjectClassifier;
use crate::services::subject_classifier::SubjectClassifier;

/// 配置选出的分类器
pub enum ConfiguredClassifier {
    Keyword(KeywordSubjectClassifier),
    Llm(LlmSubjectClassifier),
}

impl SubjectClassifier for ConfiguredClassifier {
    fn name(&self) -> &str {
        match self {
            ConfiguredClassifier::Keyword(c) => c.name(),
            ConfiguredClassifier::Llm(c) => c.name(),
        }
    }

    async fn classify(&self, text: &str, candidate_labels: &[&str]) -> anyhow::Result<Option<String>> {
        match self {
            ConfiguredClassifier::Keyword(c) => c.classify(text, candidate_labels).await,
            ConfiguredClassifier::Llm(c) => c.classify(text, candidate_labels).await,
        }
    }
}

/// 根据配置构造分类器，`none` 返回 `Ok(None)`
pub fn build_classifier(config: &Config) -> Result<Option<ConfiguredClassifier>, ClassifierError> {
    match config.classifier {
        ClassifierKind::None => Ok(None),
        ClassifierKind::Keyword => Ok(Some(ConfiguredClassifier::Keyword(
            KeywordSubjectClassifier::new(),
        ))),
        ClassifierKind::Llm => Ok(Some(ConfiguredClassifier::Llm(LlmSubjectClassifier::new(
            config,
        )?))),
    }
}
