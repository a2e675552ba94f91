//! LLM 科目分类 - 业务能力层
//!
//! 只负责"判断一道题属于哪个科目"，不关心流程
//!
//! ## 技术栈
//! - 使用 `async-openai` crate 进行 API 调用
//! - 支持自定义 API 端点和模型
//! - 兼容 OpenAI API 的服务（如 Azure, Gemini, Doubao 等）

use anyhow::Result;
use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
    Client,
};
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::ClassifierError;
use crate::services::subject_classifier::SubjectClassifier;

/// LLM 科目分类器
///
/// 职责：
/// - 调用 LLM API 从候选标签中选出一个科目
/// - 只处理单道题的文本
/// - 无法解析的回答返回 `None`，由上层决定如何处理
pub struct LlmSubjectClassifier {
    client: Client<OpenAIConfig>,
    model_name: String,
}

impl LlmSubjectClassifier {
    /// 创建新的 LLM 分类器，缺少 API 密钥时报错
    pub fn new(config: &Config) -> Result<Self, ClassifierError> {
        let api_key = config
            .llm_api_key
            .as_deref()
            .ok_or(ClassifierError::MissingApiKey)?;

        // 配置 OpenAI 客户端（兼容 OpenAI API 的服务）
        let openai_config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(&config.llm_api_base_url);

        Ok(Self {
            client: Client::with_config(openai_config),
            model_name: config.llm_model_name.clone(),
        })
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// 通用的 LLM 调用函数
    ///
    /// # 参数
    /// - `user_message`: 用户消息内容
    /// - `system_message`: 系统消息（可选）
    ///
    /// # 返回
    /// 返回 LLM 的响应内容（已去掉首尾空白）
    pub async fn send_to_llm(&self, user_message: &str, system_message: Option<&str>) -> Result<String> {
        debug!("调用 LLM API，模型: {}", self.model_name);
        debug!("用户消息长度: {} 字符", user_message.len());

        let mut messages = Vec::new();

        if let Some(sys_msg) = system_message {
            let system_msg = ChatCompletionRequestSystemMessageArgs::default()
                .content(sys_msg)
                .build()?;
            messages.push(ChatCompletionRequestMessage::System(system_msg));
        }

        let user_msg = ChatCompletionRequestUserMessageArgs::default()
            .content(user_message)
            .build()?;
        messages.push(ChatCompletionRequestMessage::User(user_msg));

        // 只需要一个标签，温度取 0
        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model_name)
            .messages(messages)
            .temperature(0.0)
            .max_tokens(16u32)
            .build()?;

        let response = self.client.chat().create(request).await.map_err(|e| {
            warn!("LLM API 调用失败: {}", e);
            ClassifierError::ApiCallFailed {
                model: self.model_name.clone(),
                message: e.to_string(),
            }
        })?;

        debug!("LLM API 调用成功");

        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or_else(|| ClassifierError::EmptyContent {
                model: self.model_name.clone(),
            })?;

        Ok(content.trim().to_string())
    }

    /// 构建分类消息，返回 (user_message, system_message)
    fn build_classify_messages(text: &str, candidate_labels: &[&str]) -> (String, String) {
        let system_message = "You classify exam questions by subject. \
                              Answer with exactly one label from the list you are given and nothing else."
            .to_string();

        let user_message = format!(
            "Labels: {}\n\nQuestion:\n{}\n\nLabel:",
            candidate_labels.join(", "),
            text
        );

        (user_message, system_message)
    }

    /// 解析 LLM 响应
    ///
    /// 先整体匹配，再在文本中找最早出现的候选标签
    fn parse_label_response(response: &str, candidate_labels: &[&str]) -> Option<String> {
        let cleaned = response
            .trim()
            .trim_matches(|c: char| !c.is_alphanumeric())
            .to_lowercase();

        if let Some(label) = candidate_labels
            .iter()
            .find(|label| label.to_lowercase() == cleaned)
        {
            return Some(label.to_string());
        }

        let found = candidate_labels
            .iter()
            .filter_map(|label| cleaned.find(&label.to_lowercase()).map(|pos| (pos, *label)))
            .min_by_key(|(pos, _)| *pos)
            .map(|(_, label)| label.to_string());

        if found.is_none() {
            warn!("无法解析 LLM 响应: '{}'", response);
        }
        found
    }
}

impl SubjectClassifier for LlmSubjectClassifier {
    fn name(&self) -> &str {
        "llm"
    }

    async fn classify(&self, text: &str, candidate_labels: &[&str]) -> Result<Option<String>> {
        let (user_message, system_message) = Self::build_classify_messages(text, candidate_labels);
        let response = self.send_to_llm(&user_message, Some(&system_message)).await?;
        Ok(Self::parse_label_response(&response, candidate_labels))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::subject::CANDIDATE_LABELS;

    #[test]
    fn test_new_requires_api_key() {
        let config = Config {
            llm_api_key: None,
            ..Default::default()
        };
        assert!(matches!(
            LlmSubjectClassifier::new(&config),
            Err(ClassifierError::MissingApiKey)
        ));
    }

    #[test]
    fn test_new_with_api_key() {
        let config = Config {
            llm_api_key: Some("sk-test".to_string()),
            llm_model_name: "test-model".to_string(),
            ..Default::default()
        };
        let classifier = LlmSubjectClassifier::new(&config).unwrap();
        assert_eq!(classifier.model_name(), "test-model");
        assert_eq!(classifier.name(), "llm");
    }

    #[test]
    fn test_parse_label_response_direct() {
        assert_eq!(
            LlmSubjectClassifier::parse_label_response("Physics", &CANDIDATE_LABELS).as_deref(),
            Some("Physics")
        );
        assert_eq!(
            LlmSubjectClassifier::parse_label_response(" chemistry. ", &CANDIDATE_LABELS).as_deref(),
            Some("Chemistry")
        );
    }

    #[test]
    fn test_parse_label_response_with_text() {
        assert_eq!(
            LlmSubjectClassifier::parse_label_response(
                "The answer is Mathematics, not Physics",
                &CANDIDATE_LABELS
            )
            .as_deref(),
            Some("Mathematics")
        );
    }

    #[test]
    fn test_parse_label_response_unknown() {
        assert_eq!(
            LlmSubjectClassifier::parse_label_response("Biology", &CANDIDATE_LABELS),
            None
        );
    }

    #[test]
    fn test_classify_messages_list_labels_and_text() {
        let (user, system) = LlmSubjectClassifier::build_classify_messages(
            "1. What is the value of g?",
            &CANDIDATE_LABELS,
        );
        assert!(user.contains("Mathematics, Physics, Chemistry"));
        assert!(user.contains("1. What is the value of g?"));
        assert!(system.contains("exactly one label"));
    }

    /// 测试真实 API 分类
    ///
    /// 运行方式：
    /// ```bash
    /// LLM_API_KEY=... cargo test test_llm_classify_live -- --ignored --nocapture
    /// ```
    #[tokio::test]
    #[ignore]
    async fn test_llm_classify_live() {
        let _ = tracing_subscriber::fmt::try_init();

        let config = Config::from_env().expect("配置加载失败");
        let classifier = LlmSubjectClassifier::new(&config).expect("需要 LLM_API_KEY");

        let label = classifier
            .classify("Calculate the pH of a 0.01 M HCl solution.", &CANDIDATE_LABELS)
            .await
            .expect("LLM 调用失败");

        println!("LLM 分类结果: {:?}", label);
        assert_eq!(label.as_deref(), Some("Chemistry"));
    }
}
