pub mod etl;
pub mod fields;
pub mod language;
pub mod parser;
pub mod profile;
pub mod section;
pub mod sections;

pub use crate::domain::model::{Course, ParseOutcome, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
