use crate::domain::model::{Course, PersistedCourse, SourceDocument, TransformResult};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Turns a document reference into its text layer. Documents without a
/// text layer yield an empty string, not an error.
pub trait TextExtractor: Send + Sync {
    fn extract_text(&self, path: &str)
        -> impl std::future::Future<Output = Result<String>> + Send;
}

/// Accepts finished aggregates and assigns identifiers to them.
pub trait CourseRepository: Send + Sync {
    fn save(
        &self,
        source: &str,
        course: Course,
    ) -> impl std::future::Future<Output = Result<PersistedCourse>> + Send;
}

#[async_trait]
pub trait FeedbackService: Send + Sync {
    async fn course_feedback(&self, course: &Course) -> Result<String>;
    async fn compare_texts(&self, first: &str, second: &str) -> Result<String>;
}

pub trait ConfigProvider: Send + Sync {
    fn input_paths(&self) -> &[String];
    fn output_path(&self) -> &str;
    fn output_formats(&self) -> &[String];
    fn compress_output(&self) -> bool;
    fn parse_timeout(&self) -> Duration;
    fn max_input_bytes(&self) -> usize;
    fn max_concurrent_documents(&self) -> usize;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<SourceDocument>>;
    async fn transform(&self, documents: Vec<SourceDocument>) -> Result<TransformResult>;
    async fn load(&self, result: TransformResult) -> Result<String>;
}
