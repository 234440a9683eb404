// Adapters layer: concrete implementations of the domain ports.

pub mod feedback;
pub mod repository;
pub mod text_source;

pub use feedback::ChatFeedbackClient;
pub use repository::FileCourseRepository;
pub use text_source::PlainTextExtractor;
