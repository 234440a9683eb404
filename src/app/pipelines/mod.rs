pub mod export;
pub mod syllabus_pipeline;

pub use syllabus_pipeline::SyllabusPipeline;
