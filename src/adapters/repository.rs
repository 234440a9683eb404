use crate::domain::model::{Course, PersistedCourse};
use crate::domain::ports::{CourseRepository, Storage};
use crate::utils::error::Result;
use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Stores each course as `<prefix>/course_<id>.json`.
///
/// Identifiers increase monotonically from `first_id`; the course content is
/// written as received.
pub struct FileCourseRepository<S: Storage> {
    storage: S,
    prefix: String,
    next_id: AtomicU64,
}

impl<S: Storage> FileCourseRepository<S> {
    pub fn new(storage: S) -> Self {
        Self::with_first_id(storage, 1)
    }

    pub fn with_first_id(storage: S, first_id: u64) -> Self {
        Self {
            storage,
            prefix: "store".to_string(),
            next_id: AtomicU64::new(first_id),
        }
    }

    pub fn record_path(&self, id: u64) -> String {
        format!("{}/course_{}.json", self.prefix, id)
    }
}

impl<S: Storage> CourseRepository for FileCourseRepository<S> {
    async fn save(&self, source: &str, course: Course) -> Result<PersistedCourse> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let record = PersistedCourse {
            id,
            source: source.to_string(),
            stored_at: Utc::now(),
            course,
        };

        let data = serde_json::to_vec_pretty(&record)?;
        self.storage.write_file(&self.record_path(id), &data).await?;
        tracing::debug!("Stored course {} from {}", id, source);
        Ok(record)
    }
}
