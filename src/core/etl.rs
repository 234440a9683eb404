use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("🚀 Starting syllabus ETL process");

        // Extract
        tracing::info!("📥 Extracting document text...");
        let documents = self.pipeline.extract().await?;
        tracing::info!("📥 Extracted {} documents", documents.len());

        // Transform
        tracing::info!("🔄 Parsing documents...");
        let result = self.pipeline.transform(documents).await?;
        let diagnostics: usize = result.documents.iter().map(|d| d.diagnostics.len()).sum();
        tracing::info!(
            "🔄 Parsed {} courses ({} diagnostics)",
            result.documents.len(),
            diagnostics
        );

        // Load
        tracing::info!("💾 Loading courses...");
        let output_path = self.pipeline.load(result).await?;
        tracing::info!("💾 Output saved to: {}", output_path);

        Ok(output_path)
    }
}
