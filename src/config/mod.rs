pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_PARSE_TIMEOUT_MS: u64 = 5_000;
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
pub const DEFAULT_MAX_CONCURRENT: usize = 4;
pub const DEFAULT_FEEDBACK_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_INPUT_EXTENSIONS: [&str; 2] = ["txt", "text"];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "syllabus-etl"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Extract structured course records from syllabus text files")
)]
pub struct CliConfig {
    #[cfg_attr(feature = "cli", arg(long, value_delimiter = ',', required = true))]
    pub input: Vec<String>,

    #[cfg_attr(feature = "cli", arg(long, default_value = "./output"))]
    pub output_path: String,

    #[cfg_attr(feature = "cli", arg(long, value_delimiter = ',', default_value = "json"))]
    pub format: Vec<String>,

    #[cfg_attr(feature = "cli", arg(long, help = "Bundle all outputs into one ZIP archive"))]
    pub compress: bool,

    #[cfg_attr(feature = "cli", arg(long, default_value_t = DEFAULT_PARSE_TIMEOUT_MS))]
    pub parse_timeout_ms: u64,

    #[cfg_attr(feature = "cli", arg(long, default_value_t = DEFAULT_MAX_INPUT_BYTES))]
    pub max_input_bytes: usize,

    #[cfg_attr(feature = "cli", arg(long, default_value_t = DEFAULT_MAX_CONCURRENT))]
    pub max_concurrent: usize,

    #[cfg_attr(feature = "cli", arg(long, help = "OpenAI-compatible base URL for course feedback"))]
    pub feedback_endpoint: Option<String>,

    #[cfg_attr(feature = "cli", arg(long, default_value = DEFAULT_FEEDBACK_MODEL))]
    pub feedback_model: String,

    #[cfg_attr(feature = "cli", arg(long, help = "Enable verbose output"))]
    pub verbose: bool,
}

impl CliConfig {
    /// Configuration with defaults for everything but the inputs.
    pub fn for_inputs(input: Vec<String>, output_path: impl Into<String>) -> Self {
        Self {
            input,
            output_path: output_path.into(),
            format: vec!["json".to_string()],
            compress: false,
            parse_timeout_ms: DEFAULT_PARSE_TIMEOUT_MS,
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            feedback_endpoint: None,
            feedback_model: DEFAULT_FEEDBACK_MODEL.to_string(),
            verbose: false,
        }
    }
}

impl ConfigProvider for CliConfig {
    fn input_paths(&self) -> &[String] {
        &self.input
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_formats(&self) -> &[String] {
        &self.format
    }

    fn compress_output(&self) -> bool {
        self.compress
    }

    fn parse_timeout(&self) -> Duration {
        Duration::from_millis(self.parse_timeout_ms)
    }

    fn max_input_bytes(&self) -> usize {
        self.max_input_bytes
    }

    fn max_concurrent_documents(&self) -> usize {
        self.max_concurrent
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if self.input.is_empty() {
            return Err(crate::utils::error::SyllabusError::MissingConfigError {
                field: "input".to_string(),
            });
        }
        validation::validate_file_extensions("input", &self.input, &DEFAULT_INPUT_EXTENSIONS)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_output_formats("format", &self.format)?;
        validation::validate_positive_number("parse_timeout_ms", self.parse_timeout_ms as usize, 1)?;
        validation::validate_positive_number("max_input_bytes", self.max_input_bytes, 1)?;
        validation::validate_range("max_concurrent", self.max_concurrent, 1, 64)?;
        if let Some(endpoint) = &self.feedback_endpoint {
            validation::validate_url("feedback_endpoint", endpoint)?;
            validation::validate_non_empty_string("feedback_model", &self.feedback_model)?;
        }
        Ok(())
    }
}
