//! Structured course records from free-form syllabus text.
//!
//! The engine (`parse`, `parse_with_diagnostics`) is synchronous and total;
//! the batch pipeline around it reads text files, parses them in parallel and
//! writes JSON, CSV or a ZIP bundle.

pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, toml_config::TomlConfig, CliConfig};

pub use adapters::{ChatFeedbackClient, FileCourseRepository, PlainTextExtractor};
pub use app::pipelines::SyllabusPipeline;
pub use core::language::detect_language;
pub use core::parser::{parse, parse_with_diagnostics};
pub use core::section::locate_section;
pub use core::etl::EtlEngine;
pub use domain::model::{Course, Diagnostics, Language, ParseOutcome};
pub use utils::error::{Result, SyllabusError};
