use crate::config::{
    DEFAULT_FEEDBACK_MODEL, DEFAULT_INPUT_EXTENSIONS, DEFAULT_MAX_CONCURRENT,
    DEFAULT_MAX_INPUT_BYTES, DEFAULT_PARSE_TIMEOUT_MS,
};
use crate::core::ConfigProvider;
use crate::utils::error::{Result, SyllabusError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var regex"));

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub pipeline: PipelineConfig,
    pub source: SourceConfig,
    #[serde(default)]
    pub parse: ParseConfig,
    pub load: LoadConfig,
    pub feedback: Option<FeedbackConfig>,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub name: String,
    pub description: Option<String>,
    pub version: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub inputs: Vec<String>,
    pub allowed_extensions: Option<Vec<String>>,
    pub max_input_bytes: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParseConfig {
    pub timeout_ms: Option<u64>,
    pub max_concurrent: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    pub output_path: String,
    pub output_formats: Vec<String>,
    pub compression: Option<CompressionConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompressionConfig {
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackConfig {
    pub endpoint: String,
    pub model: Option<String>,
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub log_level: Option<String>,
    pub json_logs: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| SyllabusError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${FEEDBACK_API_KEY})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn allowed_extensions(&self) -> Vec<&str> {
        match &self.source.allowed_extensions {
            Some(extensions) => extensions.iter().map(String::as_str).collect(),
            None => DEFAULT_INPUT_EXTENSIONS.to_vec(),
        }
    }

    pub fn feedback_model(&self) -> &str {
        self.feedback
            .as_ref()
            .and_then(|f| f.model.as_deref())
            .unwrap_or(DEFAULT_FEEDBACK_MODEL)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.monitoring.as_ref().and_then(|m| m.log_level.as_deref())
    }

    pub fn json_logs(&self) -> bool {
        self.monitoring
            .as_ref()
            .and_then(|m| m.json_logs)
            .unwrap_or(false)
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("pipeline.name", &self.pipeline.name)?;

        if self.source.inputs.is_empty() {
            return Err(SyllabusError::MissingConfigError {
                field: "source.inputs".to_string(),
            });
        }
        validation::validate_file_extensions(
            "source.inputs",
            &self.source.inputs,
            &self.allowed_extensions(),
        )?;
        validation::validate_positive_number("source.max_input_bytes", self.max_input_bytes(), 1)?;

        validation::validate_positive_number(
            "parse.timeout_ms",
            self.parse_timeout().as_millis() as usize,
            1,
        )?;
        validation::validate_range("parse.max_concurrent", self.max_concurrent_documents(), 1, 64)?;

        validation::validate_path("load.output_path", &self.load.output_path)?;
        validation::validate_output_formats("load.output_formats", &self.load.output_formats)?;

        if let Some(feedback) = &self.feedback {
            validation::validate_url("feedback.endpoint", &feedback.endpoint)?;
            validation::validate_non_empty_string("feedback.model", self.feedback_model())?;
        }

        if let Some(level) = self.log_level() {
            if !["trace", "debug", "info", "warn", "error"].contains(&level) {
                return Err(SyllabusError::InvalidConfigValueError {
                    field: "monitoring.log_level".to_string(),
                    value: level.to_string(),
                    reason: "Valid levels: trace, debug, info, warn, error".to_string(),
                });
            }
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn input_paths(&self) -> &[String] {
        &self.source.inputs
    }

    fn output_path(&self) -> &str {
        &self.load.output_path
    }

    fn output_formats(&self) -> &[String] {
        &self.load.output_formats
    }

    fn compress_output(&self) -> bool {
        self.load.compression.as_ref().is_some_and(|c| c.enabled)
    }

    fn parse_timeout(&self) -> Duration {
        Duration::from_millis(self.parse.timeout_ms.unwrap_or(DEFAULT_PARSE_TIMEOUT_MS))
    }

    fn max_input_bytes(&self) -> usize {
        self.source.max_input_bytes.unwrap_or(DEFAULT_MAX_INPUT_BYTES)
    }

    fn max_concurrent_documents(&self) -> usize {
        self.parse.max_concurrent.unwrap_or(DEFAULT_MAX_CONCURRENT)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
