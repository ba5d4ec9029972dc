//! Command line arguments and headless mode

use anyhow::{Context, Result};
use bundlescope_core::BundleListViewer;
use bundlescope_core::config::Config;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

use crate::text::TextSink;

/// Browse asset bundle debug reports
#[derive(Debug, Parser)]
#[command(name = "bundlescope")]
#[command(about = "Browse asset bundle debug reports")]
#[command(version)]
pub struct Cli {
    /// Debug report snapshot to open (JSON)
    pub report: Option<PathBuf>,

    /// Search keyword (case-sensitive substring of the bundle name)
    ///
    /// Overrides `search.initial_keyword` from config.toml.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Select a bundle row by name (repeat to select several in one event)
    #[arg(long = "select", value_name = "BUNDLE", requires = "headless")]
    pub select: Vec<String>,

    /// Print the bundle and usage lists to stdout instead of opening a window
    #[arg(long, requires = "report")]
    pub headless: bool,
}

impl Cli {
    /// Keyword to show the report with, falling back to the config
    pub fn initial_keyword<'a>(&'a self, config: &'a Config) -> &'a str {
        self.search
            .as_deref()
            .unwrap_or(&config.search.initial_keyword)
    }
}

/// Run without a window, writing every list refresh to `out`
///
/// Returns the first error hit while writing to `out`.
pub fn run_headless<W: Write + 'static>(cli: &Cli, config: &Config, out: W) -> Result<()> {
    let path = cli
        .report
        .as_deref()
        .context("Headless mode needs a report file")?;
    let report = bundlescope_shared::fs::read_report(path)?;
    tracing::info!(
        "Loaded {} (frame {}, {} providers)",
        path.display(),
        report.frame_count,
        report.provider_infos.len()
    );

    let sink = TextSink::new(out);
    let write_failure = sink.failure();

    let mut viewer = BundleListViewer::new();
    viewer.fill_view_data(report, cli.initial_keyword(config));
    viewer.attach_sink(Box::new(sink));

    if !cli.select.is_empty() {
        let rows = cli
            .select
            .iter()
            .map(|name| {
                viewer
                    .row_index_of(name)
                    .with_context(|| format!("Bundle '{}' is not in the bundle list", name))
            })
            .collect::<Result<Vec<_>>>()?;
        viewer.on_selection_changed(&rows)?;
    }

    viewer.detach_sink();
    if let Some(e) = write_failure.take() {
        return Err(e).context("Failed to write headless output");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_report_only() {
        let cli = Cli::try_parse_from(["bundlescope", "report.json"]).unwrap();
        assert_eq!(cli.report, Some(PathBuf::from("report.json")));
        assert!(!cli.headless);
        assert!(cli.select.is_empty());
    }

    #[test]
    fn test_parse_no_arguments() {
        let cli = Cli::try_parse_from(["bundlescope"]).unwrap();
        assert!(cli.report.is_none());
        assert!(cli.search.is_none());
    }

    #[test]
    fn test_parse_headless_with_repeated_select() {
        let cli = Cli::try_parse_from([
            "bundlescope",
            "report.json",
            "--headless",
            "-s",
            "ui_",
            "--select",
            "ui_main",
            "--select",
            "ui_shop",
        ])
        .unwrap();
        assert!(cli.headless);
        assert_eq!(cli.search.as_deref(), Some("ui_"));
        assert_eq!(cli.select, vec!["ui_main", "ui_shop"]);
    }

    #[test]
    fn test_select_requires_headless() {
        let args = ["bundlescope", "report.json", "--select", "a"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_headless_requires_report() {
        let args = ["bundlescope", "--headless"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_initial_keyword_prefers_flag() {
        let mut config = Config::default();
        config.search.initial_keyword = "from_config".to_string();

        let cli = Cli::try_parse_from(["bundlescope"]).unwrap();
        assert_eq!(cli.initial_keyword(&config), "from_config");

        let args = ["bundlescope", "--search", "flag"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.initial_keyword(&config), "flag");
    }
}
