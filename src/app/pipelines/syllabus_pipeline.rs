use super::export::{self, OutputFile};
use crate::core::parser::parse_with_diagnostics;
use crate::core::{ConfigProvider, Pipeline, Storage, TransformResult};
use crate::domain::model::{ParseOutcome, ParsedDocument, PersistedCourse, SourceDocument};
use crate::domain::ports::{CourseRepository, FeedbackService, TextExtractor};
use crate::utils::error::{Result, SyllabusError};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;

pub const ARCHIVE_NAME: &str = "syllabus_output.zip";

pub struct SyllabusPipeline<S, E, R, C>
where
    S: Storage,
    E: TextExtractor,
    R: CourseRepository,
    C: ConfigProvider,
{
    pub(crate) storage: S,
    pub(crate) extractor: E,
    pub(crate) repository: R,
    pub(crate) config: C,
    pub(crate) feedback: Option<Arc<dyn FeedbackService>>,
}

impl<S, E, R, C> SyllabusPipeline<S, E, R, C>
where
    S: Storage,
    E: TextExtractor,
    R: CourseRepository,
    C: ConfigProvider,
{
    pub fn new(storage: S, extractor: E, repository: R, config: C) -> Self {
        Self {
            storage,
            extractor,
            repository,
            config,
            feedback: None,
        }
    }

    pub fn with_feedback(mut self, feedback: Arc<dyn FeedbackService>) -> Self {
        self.feedback = Some(feedback);
        self
    }

    async fn feedback_files(&self, courses: &[PersistedCourse]) -> Vec<OutputFile> {
        let Some(service) = &self.feedback else {
            return Vec::new();
        };

        let mut files = Vec::new();
        for persisted in courses {
            match service.course_feedback(&persisted.course).await {
                Ok(markdown) => files.push(OutputFile::new(
                    format!("feedback/course_{}.md", persisted.id),
                    markdown.into_bytes(),
                )),
                Err(e) => tracing::warn!(
                    "⚠️ Feedback for course {} ({}) skipped: {}",
                    persisted.id,
                    persisted.source,
                    e
                ),
            }
        }
        files
    }
}

/// Parses one document on the blocking pool, bounded by `limit`.
async fn parse_document(
    document: SourceDocument,
    limit: Duration,
    max_bytes: usize,
) -> Result<ParsedDocument> {
    if document.text.len() > max_bytes {
        return Err(SyllabusError::CatastrophicInput {
            source_name: document.name,
            reason: format!(
                "{} bytes exceeds the {} byte limit",
                document.text.len(),
                max_bytes
            ),
        });
    }

    let SourceDocument { name, text } = document;
    let outcome = run_bounded(&name, limit, move || parse_with_diagnostics(&text)).await?;
    Ok(ParsedDocument {
        source: name,
        course: outcome.course,
        diagnostics: outcome.diagnostics,
    })
}

/// Runs `job` on the blocking pool and gives up after `limit`.
///
/// A timed-out job keeps running on its blocking thread until it returns;
/// only its result is discarded.
async fn run_bounded<F>(name: &str, limit: Duration, job: F) -> Result<ParseOutcome>
where
    F: FnOnce() -> ParseOutcome + Send + 'static,
{
    match tokio::time::timeout(limit, tokio::task::spawn_blocking(job)).await {
        Ok(Ok(outcome)) => Ok(outcome),
        Ok(Err(join_error)) => Err(SyllabusError::CatastrophicInput {
            source_name: name.to_string(),
            reason: format!("parser task failed: {}", join_error),
        }),
        Err(_) => Err(SyllabusError::CatastrophicInput {
            source_name: name.to_string(),
            reason: format!("parsing took longer than {} ms", limit.as_millis()),
        }),
    }
}

#[async_trait::async_trait]
impl<S, E, R, C> Pipeline for SyllabusPipeline<S, E, R, C>
where
    S: Storage,
    E: TextExtractor,
    R: CourseRepository,
    C: ConfigProvider,
{
    async fn extract(&self) -> Result<Vec<SourceDocument>> {
        let mut documents = Vec::new();
        for path in self.config.input_paths() {
            tracing::debug!("Reading text layer of: {}", path);
            let text = self.extractor.extract_text(path).await?;
            if text.trim().is_empty() {
                tracing::warn!("⚠️ {} has no text layer, parsing it anyway", path);
            }
            documents.push(SourceDocument {
                name: path.clone(),
                text,
            });
        }
        Ok(documents)
    }

    async fn transform(&self, documents: Vec<SourceDocument>) -> Result<TransformResult> {
        let semaphore = Arc::new(Semaphore::new(self.config.max_concurrent_documents().max(1)));
        let limit = self.config.parse_timeout();
        let max_bytes = self.config.max_input_bytes();

        let handles: Vec<_> = documents
            .into_iter()
            .map(|document| {
                let semaphore = Arc::clone(&semaphore);
                tokio::spawn(async move {
                    let _permit = semaphore.acquire_owned().await.map_err(|e| {
                        SyllabusError::ProcessingError {
                            message: format!("parse slot unavailable: {}", e),
                        }
                    })?;
                    parse_document(document, limit, max_bytes).await
                })
            })
            .collect();

        let mut parsed = Vec::new();
        let mut failures = Vec::new();
        for handle in handles {
            let result = handle.await.unwrap_or_else(|e| {
                Err(SyllabusError::ProcessingError {
                    message: format!("parse task panicked: {}", e),
                })
            });
            match result {
                Ok(document) => {
                    for diagnostic in document.diagnostics.entries() {
                        tracing::debug!(
                            "{}: {:?} in {}: {}",
                            document.source,
                            diagnostic.kind,
                            diagnostic.subject,
                            diagnostic.detail
                        );
                    }
                    parsed.push(document);
                }
                Err(e) => {
                    tracing::error!("❌ {}", e);
                    failures.push(e);
                }
            }
        }

        // 全部文件失敗時才中止
        if parsed.is_empty() {
            if let Some(first) = failures.into_iter().next() {
                return Err(first);
            }
        }

        Ok(TransformResult { documents: parsed })
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        let mut persisted = Vec::with_capacity(result.documents.len());
        for document in result.documents {
            persisted.push(self.repository.save(&document.source, document.course).await?);
        }

        let formats = self.config.output_formats();
        let mut files = Vec::new();
        if formats.iter().any(|f| f == "json") {
            files.push(export::json_document(&persisted)?);
        }
        if formats.iter().any(|f| f == "csv") {
            files.extend(export::csv_tables(&persisted)?);
        }
        files.extend(self.feedback_files(&persisted).await);

        if self.config.compress_output() {
            let zip_data = export::zip_bundle(&files)?;
            tracing::debug!("Writing ZIP file ({} bytes) with {} files", zip_data.len(), files.len());
            self.storage.write_file(ARCHIVE_NAME, &zip_data).await?;
            return Ok(format!("{}/{}", self.config.output_path(), ARCHIVE_NAME));
        }

        for file in &files {
            tracing::debug!("Writing {} ({} bytes)", file.name, file.data.len());
            self.storage.write_file(&file.name, &file.data).await?;
        }
        Ok(self.config.output_path().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{FileCourseRepository, PlainTextExtractor};
    use crate::config::cli::LocalStorage;
    use crate::config::CliConfig;
    use async_trait::async_trait;
    use crate::domain::model::Course;
    use tempfile::TempDir;

    struct CannedFeedback;

    #[async_trait]
    impl FeedbackService for CannedFeedback {
        async fn course_feedback(&self, course: &Course) -> Result<String> {
            if course.title.is_empty() {
                return Err(SyllabusError::FeedbackError {
                    message: "untitled".into(),
                });
            }
            Ok(format!("# {}", course.title))
        }

        async fn compare_texts(&self, _first: &str, _second: &str) -> Result<String> {
            Ok(String::new())
        }
    }

    fn pipeline(
        dir: &TempDir,
        config: CliConfig,
    ) -> SyllabusPipeline<
        LocalStorage,
        PlainTextExtractor<LocalStorage>,
        FileCourseRepository<LocalStorage>,
        CliConfig,
    > {
        let root = dir.path().to_string_lossy().to_string();
        let output = LocalStorage::new(config.output_path.clone());
        SyllabusPipeline::new(
            output.clone(),
            PlainTextExtractor::new(LocalStorage::new(root)),
            FileCourseRepository::new(output),
            config,
        )
    }

    #[tokio::test]
    async fn oversized_documents_are_catastrophic() {
        let err = parse_document(
            SourceDocument {
                name: "huge.txt".into(),
                text: "x".repeat(64),
            },
            Duration::from_secs(1),
            10,
        )
        .await
        .unwrap_err();
        assert!(matches!(err, SyllabusError::CatastrophicInput { .. }));
    }

    #[tokio::test]
    async fn slow_parses_time_out_as_catastrophic() {
        let err = run_bounded("slow.txt", Duration::from_millis(20), || {
            std::thread::sleep(Duration::from_millis(300));
            parse_with_diagnostics("")
        })
        .await
        .unwrap_err();

        match err {
            SyllabusError::CatastrophicInput { source_name, reason } => {
                assert_eq!(source_name, "slow.txt");
                assert!(reason.contains("longer than 20 ms"), "{}", reason);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn bounded_parse_returns_the_outcome_in_time() {
        let outcome = run_bounded("quick.txt", Duration::from_secs(5), || {
            parse_with_diagnostics("LOGIC\nECTS 6")
        })
        .await
        .unwrap();
        assert_eq!(outcome.course.ects, 6);
    }

    #[tokio::test]
    async fn transform_keeps_good_documents_when_one_fails() {
        let dir = TempDir::new().unwrap();
        let mut config = CliConfig::for_inputs(vec![], dir.path().join("out").to_string_lossy());
        config.max_input_bytes = 100;
        let pipeline = pipeline(&dir, config);

        let result = pipeline
            .transform(vec![
                SourceDocument {
                    name: "ok.txt".into(),
                    text: "LOGIC\nECTS 6".into(),
                },
                SourceDocument {
                    name: "big.txt".into(),
                    text: "y".repeat(500),
                },
            ])
            .await
            .unwrap();

        assert_eq!(result.documents.len(), 1);
        assert_eq!(result.documents[0].course.ects, 6);
    }

    #[tokio::test]
    async fn transform_fails_when_every_document_fails() {
        let dir = TempDir::new().unwrap();
        let mut config = CliConfig::for_inputs(vec![], dir.path().join("out").to_string_lossy());
        config.max_input_bytes = 1;
        let pipeline = pipeline(&dir, config);

        let err = pipeline
            .transform(vec![SourceDocument {
                name: "big.txt".into(),
                text: "too long".into(),
            }])
            .await
            .unwrap_err();
        assert!(matches!(err, SyllabusError::CatastrophicInput { .. }));
    }

    #[tokio::test]
    async fn compressed_load_writes_one_archive_with_feedback() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("logic.txt"), "LOGIC\nECTS 6").unwrap();
        std::fs::write(dir.path().join("blank.txt"), "").unwrap();

        let out = dir.path().join("out");
        let mut config = CliConfig::for_inputs(
            vec!["logic.txt".into(), "blank.txt".into()],
            out.to_string_lossy(),
        );
        config.compress = true;
        config.format = vec!["json".into(), "csv".into()];
        let pipeline = pipeline(&dir, config).with_feedback(Arc::new(CannedFeedback));

        let documents = pipeline.extract().await.unwrap();
        let result = pipeline.transform(documents).await.unwrap();
        let path = pipeline.load(result).await.unwrap();

        assert!(path.ends_with(ARCHIVE_NAME));
        let bytes = std::fs::read(out.join(ARCHIVE_NAME)).unwrap();
        let archive = zip::ZipArchive::new(std::io::Cursor::new(bytes)).unwrap();
        let names: Vec<&str> = archive.file_names().collect();
        assert!(names.contains(&"courses.json"));
        assert!(names.contains(&"references.csv"));
        assert!(names.contains(&"feedback/course_1.md"));
        // the blank document has no title, so its feedback is skipped
        assert!(!names.contains(&"feedback/course_2.md"));
        assert!(out.join("store/course_2.json").exists());
    }
}
