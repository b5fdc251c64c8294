use clap::Parser;
use package_sorter::core::samples::SAMPLES;
use package_sorter::utils::logger;
use package_sorter::{classify_package, Category};

#[derive(Parser)]
#[command(name = "sort-samples")]
#[command(about = "Classify the reference packages and check each expected stack")]
struct Args {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn describe(expected: Option<Category>) -> String {
    expected
        .map(|c| c.to_string())
        .unwrap_or_else(|| "InvalidMeasurement".to_string())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose, false);

    tracing::info!("🚀 Running {} sample packages", SAMPLES.len());

    let mut failures = 0usize;
    for sample in SAMPLES {
        let p = sample.package;
        let outcome = classify_package(&p);
        let actual = outcome.as_ref().ok().map(|report| report.category);

        let shown = match &outcome {
            Ok(report) => report.category.to_string(),
            Err(e) => e.to_string(),
        };
        println!(
            "{} ({}x{}x{}, {}kg): {}",
            sample.label, p.width, p.height, p.length, p.mass, shown
        );

        if actual != sample.expected {
            failures += 1;
            tracing::error!(
                "❌ {}: expected {}, got {}",
                sample.label,
                describe(sample.expected),
                describe(actual)
            );
        }
    }

    if failures > 0 {
        anyhow::bail!("{} of {} samples disagreed", failures, SAMPLES.len());
    }

    tracing::info!("✅ All samples sorted as expected");
    Ok(())
}
