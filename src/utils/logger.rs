use std::io::{self, Stderr};
use tracing_subscriber::fmt::{
    self,
    format::{DefaultFields, Format},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Both binaries log under their own crate target.
fn default_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("package_sorter=debug,sort_samples=debug,info")
        })
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("package_sorter=info,sort_samples=info"))
    }
}

/// Logs go to stderr so stdout only carries classification output.
fn base_layer<S>() -> fmt::Layer<S, DefaultFields, Format, fn() -> Stderr> {
    fmt::layer()
        .with_writer(io::stderr as fn() -> Stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
}

pub fn init_cli_logger(verbose: bool, json: bool) {
    let (compact, json) = if json {
        (None, Some(base_layer().json()))
    } else {
        (Some(base_layer().compact()), None)
    };

    tracing_subscriber::registry()
        .with(default_filter(verbose))
        .with(compact)
        .with(json)
        .init();
}
