//! Window chrome around the bundle list panel
//!
//! The toolbar and error bar only report what the user did; [`crate::app::App`]
//! applies the returned [`UiAction`].

use std::path::Path;

use bundlescope_core::PanelAction;
use eframe::egui;

/// User actions returned by the window UI
#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    /// Pick a report file and show it
    OpenReport,
    /// Re-read the current report file from disk
    ReloadReport,
    /// Dismiss the current error message
    DismissError,
    /// Search or selection change inside the bundle list panel
    Panel(PanelAction),
}

/// Render the toolbar
///
/// `report_path` is the file currently shown, if any.
pub fn show_toolbar(ui: &mut egui::Ui, report_path: Option<&Path>) -> Option<UiAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        if ui.button("Open Report").clicked() {
            action = Some(UiAction::OpenReport);
        }
        if ui
            .add_enabled(report_path.is_some(), egui::Button::new("Reload"))
            .clicked()
        {
            action = Some(UiAction::ReloadReport);
        }

        ui.separator();
        match report_path {
            Some(path) => ui.label(path.display().to_string()),
            None => ui.weak("No report loaded"),
        };
    });

    action
}

/// Render the error bar
pub fn show_error(ui: &mut egui::Ui, error: &str) -> Option<UiAction> {
    let mut action = None;
    ui.horizontal(|ui| {
        ui.colored_label(egui::Color32::RED, format!("Error: {}", error));
        if ui.button("Dismiss").clicked() {
            action = Some(UiAction::DismissError);
        }
    });
    action
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_toolbar(report_path: Option<&Path>) -> Option<UiAction> {
        let ctx = egui::Context::default();
        let mut action = None;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                action = show_toolbar(ui, report_path);
            });
        });
        action
    }

    #[test]
    fn test_idle_toolbar_reports_nothing() {
        assert_eq!(run_toolbar(None), None);
        assert_eq!(run_toolbar(Some(Path::new("report.json"))), None);
    }
}
