use clap::Parser;
use package_sorter::utils::logger;
use package_sorter::{classify_package, CliConfig, OutputFormat};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose, config.log_json);

    tracing::debug!("CLI config: {:?}", config);

    let report = match classify_package(&config.package()) {
        Ok(report) => report,
        Err(e) => {
            tracing::error!("❌ Classification failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    tracing::info!(
        volume = report.volume,
        bulky = report.bulky,
        heavy = report.heavy,
        "📦 Package sorted to {}",
        report.category
    );

    match config.format {
        OutputFormat::Text => println!("{}", report.category),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}
