//! Bundlescope - asset bundle debug report browser
//!
//! # Usage
//!
//! ```bash
//! # Open the viewer window, optionally with a report
//! bundlescope
//! bundlescope report.json --search ui_
//!
//! # Print the lists without a window
//! bundlescope report.json --headless --select ui_main
//! ```
//!
//! Logging is controlled with `RUST_LOG` (default: `info`) and goes to stderr.

use anyhow::Result;
use bundlescope_library::app::{self, LaunchOptions};
use bundlescope_library::cli::{self, Cli};
use clap::Parser;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = bundlescope_core::config::load();

    if cli.headless {
        return cli::run_headless(&cli, &config, std::io::stdout());
    }

    tracing::info!("Launching Bundlescope");
    let options = LaunchOptions {
        report_path: cli.report.clone(),
        search_keyword: cli.initial_keyword(&config).to_string(),
    };
    app::run(config, options)?;

    Ok(())
}
