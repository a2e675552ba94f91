//! 命令行参数
//!
//! 命令行只负责覆盖配置：配置文件 / 环境变量先生效，命令行参数最后覆盖。

use std::path::PathBuf;

use clap::Parser;

use crate::config::{ClassifierKind, Config, OutputFormat};
use crate::error::AppResult;

/// 从试卷页面文本中提取题目并标注科目
#[derive(Parser, Debug)]
#[command(name = "question-extract", version, about, long_about = None)]
pub struct Cli {
    /// TOML 配置文件（不指定时只读环境变量）
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// 分类器：none / keyword / llm
    #[arg(long, value_name = "KIND")]
    pub classifier: Option<ClassifierKind>,

    /// 输出格式：toml / json（默认按输出文件扩展名推断）
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// 输出每道题的详细日志
    #[arg(short, long)]
    pub verbose: bool,

    /// 页面文本文件（.txt 按换页符分页，.json 为页面文档）
    pub input: Option<String>,

    /// 结果文件
    pub output: Option<String>,
}

impl Cli {
    /// 加载配置并应用命令行覆盖
    pub fn load_config(&self) -> AppResult<Config> {
        let config = match &self.config {
            Some(path) => Config::from_toml_file(path)?,
            None => Config::from_env()?,
        };
        Ok(self.apply(config))
    }

    fn apply(&self, mut config: Config) -> Config {
        if let Some(input) = &self.input {
            config.input_path = input.clone();
        }
        if let Some(output) = &self.output {
            config.output_path = output.clone();
        }
        if let Some(kind) = self.classifier {
            config.classifier = kind;
        }
        if let Some(format) = self.format {
            config.output_format = Some(format);
        }
        if self.verbose {
            config.verbose_logging = true;
        }
        config
    }
}
