//! 应用入口 - 编排层
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：构造分类器（失败时降级为不分类并告警）
//! 2. **加载页面**：读取页面文本文件
//! 3. **执行流程**：委托 `ExtractionFlow` 完成切分、分类、补齐
//! 4. **写出结果**：TOML / JSON
//! 5. **统计输出**：各科目题目数量

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::config::Config;
use crate::models::loaders::load_pages;
use crate::models::paper::ExtractedPaper;
use crate::services::subject_classifier::{ClassifyOptions, SubjectClassifier};
use crate::services::{build_classifier, ConfiguredClassifier, PaperWriter};
use crate::utils::logging::{log_startup, print_final_stats};
use crate::workflow::ExtractionFlow;

/// 应用主结构
pub struct App {
    config: Config,
    classifier: Option<ConfiguredClassifier>,
}

impl App {
    /// 初始化应用
    ///
    /// 分类器构造失败不影响提取，只是科目保持为空
    pub fn initialize(config: Config) -> Self {
        log_startup(&config);

        let classifier = match build_classifier(&config) {
            Ok(classifier) => classifier,
            Err(e) => {
                warn!("⚠️ 分类器初始化失败，科目将保持为空: {}", e);
                None
            }
        };

        Self { config, classifier }
    }

    /// 当前使用的分类器名称
    pub fn classifier_name(&self) -> Option<&str> {
        self.classifier.as_ref().map(|c| c.name())
    }

    /// 运行应用主逻辑，返回写出的结果
    pub async fn run(&self) -> Result<ExtractedPaper> {
        let started_at = chrono::Local::now();
        let pages = load_pages(Path::new(&self.config.input_path))
            .await
            .with_context(|| format!("无法加载页面文本: {}", self.config.input_path))?;

        let options = ClassifyOptions {
            timeout: Duration::from_secs(self.config.classify_timeout_secs),
            max_concurrent: self.config.max_concurrent_classifications,
        };
        let flow = ExtractionFlow::new(self.classifier.as_ref(), options);
        let outcome = flow.run(&pages.pages).await;

        if outcome.questions.is_empty() {
            warn!("⚠️ 没有识别到任何题目: {}", pages.source);
        }

        if self.config.verbose_logging {
            for q in &outcome.questions {
                info!(
                    "[题目 {}] {} | {} 个选项 | {}",
                    q.number,
                    q.subject.map_or("-", |s| s.label()),
                    q.options.len(),
                    crate::utils::truncate_text(&q.text, 60)
                );
            }
        }

        let paper = ExtractedPaper::new(
            pages.source,
            self.classifier_name().map(str::to_string),
            outcome.questions.clone(),
        );

        let writer = PaperWriter::new(&self.config.output_path)
            .with_format(self.config.resolved_output_format());
        writer
            .write(&paper)
            .await
            .with_context(|| format!("无法写入结果: {}", writer.output_path()))?;

        print_final_stats(&outcome, &paper.summary(), writer.output_path(), started_at);

        Ok(paper)
    }
}
