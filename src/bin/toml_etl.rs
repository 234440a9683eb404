use clap::Parser;
use std::path::Path;
use std::sync::Arc;
use syllabus_etl::core::ConfigProvider;
use syllabus_etl::utils::{logger, validation::Validate};
use syllabus_etl::{
    ChatFeedbackClient, EtlEngine, FileCourseRepository, LocalStorage, PlainTextExtractor,
    SyllabusPipeline, TomlConfig,
};

#[derive(Parser)]
#[command(name = "toml-etl")]
#[command(about = "Syllabus ETL driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "syllabus-etl.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Dry run - show what would be processed without executing
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // 載入 TOML 配置
    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 初始化日誌
    if config.json_logs() && !args.verbose {
        logger::init_json_logger(config.log_level());
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("🚀 Starting TOML-based syllabus ETL");
    tracing::info!("📁 Loaded configuration from: {}", args.config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Configuration loaded and validated successfully");

    display_config_summary(&config, &args);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No actual processing will occur");
        perform_dry_run(&config);
        return Ok(());
    }

    let output = LocalStorage::new(config.output_path().to_string());
    let extractor = PlainTextExtractor::new(LocalStorage::new(".".to_string()));
    let repository = FileCourseRepository::new(output.clone());

    let feedback = match &config.feedback {
        Some(settings) => {
            let mut client = ChatFeedbackClient::new(settings.endpoint.as_str(), config.feedback_model())?;
            if let Some(key) = settings.api_key.as_deref().filter(|k| !k.starts_with("${")) {
                client = client.with_api_key(key);
            }
            Some(client)
        }
        None => None,
    };

    let mut pipeline = SyllabusPipeline::new(output, extractor, repository, config);
    if let Some(client) = feedback {
        tracing::info!("🤖 Course feedback enabled");
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

fn display_config_summary(config: &TomlConfig, args: &Args) {
    println!("📋 Configuration Summary:");
    println!(
        "  Pipeline: {} v{}",
        config.pipeline.name,
        config.pipeline.version.as_deref().unwrap_or("-")
    );
    println!("  Inputs: {} documents", config.input_paths().len());
    println!("  Output: {}", config.output_path());
    println!("  Formats: {}", config.output_formats().join(", "));
    println!("  Parse timeout: {} ms", config.parse_timeout().as_millis());
    println!("  Concurrent parses: {}", config.max_concurrent_documents());

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}

fn perform_dry_run(config: &TomlConfig) {
    println!("🔍 Dry Run Analysis:");
    println!();

    // 輸入檔案分析
    println!("📄 Inputs:");
    for input in config.input_paths() {
        let status = match std::fs::metadata(Path::new(input)) {
            Ok(meta) if meta.len() as usize > config.max_input_bytes() => "too large",
            Ok(_) => "ok",
            Err(_) => "missing",
        };
        println!("  {} ({})", input, status);
    }

    // 輸出分析
    println!();
    println!("💾 Output Configuration:");
    println!("  Path: {}", config.output_path());
    println!("  Formats: {}", config.output_formats().join(", "));
    if config.compress_output() {
        println!("  Compression: ZIP");
    }

    if let Some(feedback) = &config.feedback {
        println!();
        println!("🤖 Feedback: {} ({})", feedback.endpoint, config.feedback_model());
    }

    println!();
    println!("✅ Dry run analysis complete. Use --verbose for more details during actual run.");
}
