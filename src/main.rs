use clap::Parser;
use std::sync::Arc;
use syllabus_etl::utils::{logger, validation::Validate};
use syllabus_etl::{
    ChatFeedbackClient, CliConfig, EtlEngine, FileCourseRepository, LocalStorage,
    PlainTextExtractor, SyllabusPipeline,
};

const API_KEY_VAR: &str = "FEEDBACK_API_KEY";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting syllabus-etl CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    // 輸入相對於目前目錄，輸出寫到 output_path
    let output = LocalStorage::new(config.output_path.clone());
    let extractor = PlainTextExtractor::new(LocalStorage::new(".".to_string()));
    let repository = FileCourseRepository::new(output.clone());

    let feedback = match &config.feedback_endpoint {
        Some(endpoint) => {
            let mut client = ChatFeedbackClient::new(endpoint.as_str(), config.feedback_model.as_str())?;
            if let Ok(key) = std::env::var(API_KEY_VAR) {
                client = client.with_api_key(key);
            }
            tracing::info!("🤖 Course feedback enabled via {}", endpoint);
            Some(client)
        }
        None => None,
    };

    let mut pipeline = SyllabusPipeline::new(output, extractor, repository, config);
    if let Some(client) = feedback {
        pipeline = pipeline.with_feedback(Arc::new(client));
    }

    let engine = EtlEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ ETL process completed successfully!");
            println!("✅ ETL process completed successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ ETL process failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            let exit_code = e.exit_code();
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
