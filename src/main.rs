use clap::Parser;
use waitlist_relay::utils::{logger, validation::Validate};
use waitlist_relay::{
    AttemptResult, CliConfig, ConsoleSurface, FileConfig, HttpSink, SubmissionOutcome,
    WaitlistEngine, WaitlistWorkflow,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting waitlist-relay CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Some(path) = config.config.clone() {
        let file = FileConfig::load(&path)?;
        if let Err(e) = file.validate() {
            tracing::error!("❌ Config file validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
        config.apply_file(&file);
        tracing::info!("📄 Loaded deployment settings from {}", path);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let surface = ConsoleSurface::new(
        config.first_name.clone(),
        config.email.clone(),
        config.goal.clone(),
    );
    let sink = HttpSink::new(config.clone())?;
    let workflow = WaitlistWorkflow::new(surface, sink, config);
    let engine = WaitlistEngine::new(workflow);

    match engine.handle_submit().await {
        AttemptResult::Completed(SubmissionOutcome::Accepted) => {
            tracing::info!("✅ Sign-up recorded");
        }
        AttemptResult::Completed(SubmissionOutcome::Rejected { message }) => {
            tracing::error!("❌ Submission rejected: {}", message);
            std::process::exit(2);
        }
        AttemptResult::Invalid(validation) => {
            tracing::error!("❌ Invalid input: {:?}", validation.invalid_fields);
            std::process::exit(1);
        }
        AttemptResult::Ignored => {
            // A fresh engine always accepts its first trigger.
            tracing::warn!("Submit trigger ignored");
        }
    }

    Ok(())
}
