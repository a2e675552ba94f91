use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{AppError, AppResult, ConfigError};

/// 分类器类型
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassifierKind {
    /// 不分类，科目保持为空
    None,
    /// 本地关键词打分
    Keyword,
    /// OpenAI 兼容的大模型
    Llm,
}

impl FromStr for ClassifierKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" | "off" => Ok(Self::None),
            "keyword" => Ok(Self::Keyword),
            "llm" => Ok(Self::Llm),
            other => Err(ConfigError::UnknownValue {
                field: "classifier".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

/// 输出格式
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Toml,
    Json,
}

impl OutputFormat {
    /// 根据文件扩展名推断，无法识别时用 TOML
    pub fn from_path(path: &str) -> Self {
        match Path::new(path).extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::UnknownValue {
                field: "output_format".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 页面文本输入文件（.txt 以换页符分页，或 .json 页面文档）
    pub input_path: String,
    /// 输出文件
    pub output_path: String,
    /// 输出格式，未指定时按输出文件扩展名推断
    pub output_format: Option<OutputFormat>,
    /// 使用的分类器
    pub classifier: ClassifierKind,
    // --- LLM 配置 ---
    pub llm_api_key: Option<String>,
    pub llm_api_base_url: String,
    pub llm_model_name: String,
    /// 单次分类超时（秒）
    pub classify_timeout_secs: u64,
    /// 同时进行的分类请求数量
    pub max_concurrent_classifications: usize,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: "pages.txt".to_string(),
            output_path: "questions.toml".to_string(),
            output_format: None,
            classifier: ClassifierKind::Keyword,
            llm_api_key: None,
            llm_api_base_url: "https://api.openai.com/v1".to_string(),
            llm_model_name: "gpt-4o-mini".to_string(),
            classify_timeout_secs: 30,
            max_concurrent_classifications: 4,
            verbose_logging: false,
        }
    }
}

/// 配置文件内容，所有字段可选
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    input_path: Option<String>,
    output_path: Option<String>,
    output_format: Option<OutputFormat>,
    classifier: Option<ClassifierKind>,
    llm_api_key: Option<String>,
    llm_api_base_url: Option<String>,
    llm_model_name: Option<String>,
    classify_timeout_secs: Option<u64>,
    max_concurrent_classifications: Option<usize>,
    verbose_logging: Option<bool>,
}

impl Config {
    /// 从环境变量加载（在默认值之上）
    pub fn from_env() -> AppResult<Self> {
        Self::default().with_env_overrides(|key| std::env::var(key).ok())
    }

    /// 从 TOML 配置文件加载，再由环境变量覆盖
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;
        Self::from_toml_str(&content, &path.display().to_string())?
            .with_env_overrides(|key| std::env::var(key).ok())
    }

    fn from_toml_str(content: &str, path: &str) -> AppResult<Self> {
        let file: ConfigFile = toml::from_str(content).map_err(|source| ConfigError::TomlParseFailed {
            path: path.to_string(),
            source,
        })?;
        let default = Self::default();
        Ok(Self {
            input_path: file.input_path.unwrap_or(default.input_path),
            output_path: file.output_path.unwrap_or(default.output_path),
            output_format: file.output_format.or(default.output_format),
            classifier: file.classifier.unwrap_or(default.classifier),
            llm_api_key: file.llm_api_key.or(default.llm_api_key),
            llm_api_base_url: file.llm_api_base_url.unwrap_or(default.llm_api_base_url),
            llm_model_name: file.llm_model_name.unwrap_or(default.llm_model_name),
            classify_timeout_secs: file
                .classify_timeout_secs
                .unwrap_or(default.classify_timeout_secs),
            max_concurrent_classifications: file
                .max_concurrent_classifications
                .unwrap_or(default.max_concurrent_classifications),
            verbose_logging: file.verbose_logging.unwrap_or(default.verbose_logging),
        })
    }

    /// 用 `lookup` 提供的变量覆盖当前配置
    fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        if let Some(v) = lookup("INPUT_PATH") {
            self.input_path = v;
        }
        if let Some(v) = lookup("OUTPUT_PATH") {
            self.output_path = v;
        }
        if let Some(v) = lookup("OUTPUT_FORMAT") {
            self.output_format = Some(v.parse()?);
        }
        if let Some(v) = lookup("CLASSIFIER") {
            self.classifier = v.parse()?;
        }
        if let Some(v) = lookup("LLM_API_KEY").filter(|v| !v.trim().is_empty()) {
            self.llm_api_key = Some(v);
        }
        if let Some(v) = lookup("LLM_API_BASE_URL") {
            self.llm_api_base_url = v;
        }
        if let Some(v) = lookup("LLM_MODEL_NAME") {
            self.llm_model_name = v;
        }
        if let Some(v) = lookup("CLASSIFY_TIMEOUT_SECS") {
            self.classify_timeout_secs = parse_var("CLASSIFY_TIMEOUT_SECS", &v, "u64")?;
        }
        if let Some(v) = lookup("MAX_CONCURRENT_CLASSIFICATIONS") {
            self.max_concurrent_classifications =
                parse_var("MAX_CONCURRENT_CLASSIFICATIONS", &v, "usize")?;
        }
        if let Some(v) = lookup("VERBOSE_LOGGING") {
            self.verbose_logging = parse_var("VERBOSE_LOGGING", &v, "bool")?;
        }
        Ok(self)
    }

    /// 实际使用的输出格式
    pub fn resolved_output_format(&self) -> OutputFormat {
        self.output_format
            .unwrap_or_else(|| OutputFormat::from_path(&self.output_path))
    }
}

fn parse_var<T: FromStr>(name: &str, value: &str, expected_type: &str) -> AppResult<T> {
    value
        .trim()
        .parse()
        .map_err(|_| AppError::env_parse_failed(name, value, expected_type))
}
