//! Viewer application state and main loop
//!
//! The window shows one report at a time:
//! - A toolbar to open or reload the report file
//! - The bundle list panel from `bundlescope-core`
//! - An error bar for load and selection failures

mod init;

pub use init::AppError;

use std::path::{Path, PathBuf};

use eframe::egui;

use bundlescope_core::config::Config;
use bundlescope_core::{BundleListPanel, BundleListViewer, PanelAction};
use bundlescope_shared::fs::read_report;

use crate::ui::{self, UiAction};

/// How the window is opened
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    /// Report file to show on startup
    pub report_path: Option<PathBuf>,
    /// Search keyword applied to the first report shown
    pub search_keyword: String,
}

/// Viewer application state
pub struct App {
    /// Master/detail controller
    viewer: BundleListViewer,
    /// Bundle list panel state
    panel: BundleListPanel,
    /// File the current report was read from
    report_path: Option<PathBuf>,
    /// Last error message (for displaying in UI)
    last_error: Option<String>,
}

impl App {
    /// Create the application, loading the startup report if one was given
    pub fn new(config: &Config, options: LaunchOptions) -> Self {
        let mut viewer = BundleListViewer::new();
        viewer.set_search_keyword(&options.search_keyword);

        let mut app = Self {
            viewer,
            panel: BundleListPanel::new(config),
            report_path: None,
            last_error: None,
        };

        if let Some(path) = options.report_path {
            app.open_report(path);
        }
        app
    }

    /// Read `path` and show it, keeping the current search keyword
    fn load_report(&mut self, path: &Path) -> Result<(), AppError> {
        let report = read_report(path).map_err(AppError::Report)?;
        tracing::info!(
            "Loaded {} (frame {}, {} providers)",
            path.display(),
            report.frame_count,
            report.provider_infos.len()
        );

        let keyword = self.viewer.search_keyword().to_string();
        self.viewer.fill_view_data(report, &keyword);
        Ok(())
    }

    /// Load `path` and make it the current file
    ///
    /// On failure the previous report and path stay in place.
    fn open_report(&mut self, path: PathBuf) {
        match self.load_report(&path) {
            Ok(()) => {
                self.last_error = None;
                self.report_path = Some(path);
            }
            Err(e) => {
                tracing::error!("{}: {}", path.display(), e);
                self.last_error = Some(e.to_string());
            }
        }
    }

    /// Handle UI actions
    fn handle_ui_action(&mut self, action: UiAction) {
        match action {
            UiAction::OpenReport => {
                tracing::info!("Opening file picker for a debug report");

                let file_handle = rfd::FileDialog::new()
                    .add_filter("Debug Report", &["json"])
                    .set_title("Open Debug Report")
                    .pick_file();

                if let Some(path) = file_handle {
                    self.open_report(path);
                }
            }
            UiAction::ReloadReport => {
                if let Some(path) = self.report_path.clone() {
                    tracing::info!("Reloading {}", path.display());
                    self.open_report(path);
                }
            }
            UiAction::DismissError => {
                self.last_error = None;
            }
            UiAction::Panel(PanelAction::SearchChanged(keyword)) => {
                self.viewer.set_search_keyword(&keyword);
            }
            UiAction::Panel(PanelAction::SelectionChanged(rows)) => {
                if let Err(e) = self.viewer.on_selection_changed(&rows) {
                    tracing::error!("Selection rejected: {}", e);
                    self.last_error = Some(e.to_string());
                }
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut ui_action = None;

        // Show error panel if there's an error
        if let Some(ref error) = self.last_error {
            egui::TopBottomPanel::top("error_panel").show(ctx, |ui| {
                if let Some(action) = ui::show_error(ui, error) {
                    ui_action = Some(action);
                }
            });
        }

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            if let Some(action) = ui::show_toolbar(ui, self.report_path.as_deref()) {
                ui_action = Some(action);
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(action) = self.panel.show(ui, &self.viewer) {
                ui_action = Some(UiAction::Panel(action));
            }
        });

        if let Some(action) = ui_action {
            self.handle_ui_action(action);
        }
    }
}

/// Open the viewer window and block until it is closed
pub fn run(config: Config, options: LaunchOptions) -> Result<(), AppError> {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Bundlescope")
            .with_inner_size([960.0, 540.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Bundlescope",
        native_options,
        Box::new(move |_cc| Ok(Box::new(App::new(&config, options)))),
    )
    .map_err(|e| AppError::EventLoop(format!("eframe error: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bundlescope_core::BundleStatus::{Fail, Succeed};
    use bundlescope_core::{DebugBundleInfo, DebugProviderInfo, DebugReport, ProviderStatus};
    use bundlescope_shared::fs::write_report;

    fn sample_report() -> DebugReport {
        let status = ProviderStatus::Success;
        let provider = DebugProviderInfo::new("P1", "Main", "00:00:01", 1, status)
            .with_bundle(DebugBundleInfo::new("ui_main", 1, Succeed))
            .with_bundle(DebugBundleInfo::new("fx_boom", 1, Fail));
        DebugReport::new(7).with_provider(provider)
    }

    fn write_sample(dir: &Path) -> PathBuf {
        let path = dir.join("report.json");
        write_report(&path, &sample_report()).unwrap();
        path
    }

    fn open(path: PathBuf) -> App {
        let options = LaunchOptions {
            report_path: Some(path),
            ..Default::default()
        };
        App::new(&Config::default(), options)
    }

    #[test]
    fn test_startup_report_uses_keyword() {
        let dir = tempfile::tempdir().unwrap();
        let options = LaunchOptions {
            report_path: Some(write_sample(dir.path())),
            search_keyword: "ui_".to_string(),
        };

        let app = App::new(&Config::default(), options);

        assert!(app.last_error.is_none());
        assert_eq!(app.viewer.master_rows().len(), 1);
        assert_eq!(app.viewer.master_rows()[0].bundle_name, "ui_main");
    }

    #[test]
    fn test_missing_report_sets_error() {
        let dir = tempfile::tempdir().unwrap();

        let app = open(dir.path().join("absent.json"));

        assert!(app.last_error.is_some());
        assert!(app.viewer.report().is_none());
        assert!(app.report_path.is_none());
    }

    #[test]
    fn test_failed_open_keeps_current_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_sample(dir.path());
        let mut app = open(path.clone());

        app.open_report(dir.path().join("absent.json"));

        assert!(app.last_error.is_some());
        assert_eq!(app.report_path, Some(path));
        assert_eq!(app.viewer.report(), Some(&sample_report()));

        // Reload goes back to the last good file
        app.handle_ui_action(UiAction::ReloadReport);
        assert!(app.last_error.is_none());
    }

    #[test]
    fn test_panel_actions_reach_viewer() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = open(write_sample(dir.path()));

        let action = PanelAction::SelectionChanged(vec![1]);
        app.handle_ui_action(UiAction::Panel(action));
        assert_eq!(app.viewer.selection().bundle_name(), Some("fx_boom"));
        assert_eq!(app.viewer.detail_rows().len(), 1);

        let action = PanelAction::SearchChanged("fx".to_string());
        app.handle_ui_action(UiAction::Panel(action));
        assert_eq!(app.viewer.search_keyword(), "fx");
        assert_eq!(app.viewer.master_rows().len(), 1);
        assert!(app.viewer.selection().bundle_name().is_none());
    }

    #[test]
    fn test_rejected_selection_sets_error() {
        let mut app = App::new(&Config::default(), LaunchOptions::default());

        let action = PanelAction::SelectionChanged(vec![0]);
        app.handle_ui_action(UiAction::Panel(action));
        assert!(app.last_error.is_some());

        app.handle_ui_action(UiAction::DismissError);
        assert!(app.last_error.is_none());
    }

    #[test]
    fn test_reload_picks_up_changes() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_sample(dir.path());
        let mut app = open(path.clone());
        assert_eq!(app.viewer.report().map(|r| r.frame_count), Some(7));

        write_report(&path, &DebugReport::new(9)).unwrap();
        app.handle_ui_action(UiAction::ReloadReport);

        assert_eq!(app.viewer.report().map(|r| r.frame_count), Some(9));
        assert!(app.viewer.master_rows().is_empty());
    }
}
