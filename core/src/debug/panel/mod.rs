//! Bundle list debugger panel UI
//!
//! Provides an egui panel showing the master bundle list and the usage list of
//! the selected bundle. The panel only renders; every change is returned as a
//! [`PanelAction`] for the caller to apply to the [`BundleListViewer`].

mod widgets;

use crate::config::Config;

use super::index::report_summary;
use super::rows::{BundleRowView, ProviderRowView};
use super::viewer::BundleListViewer;

use widgets::RowRenderer;

/// User interaction reported by the panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelAction {
    /// The search box text changed
    SearchChanged(String),
    /// The set of selected bundle rows changed (indices into the master list)
    SelectionChanged(Vec<usize>),
}

/// Bundle list panel state
pub struct BundleListPanel {
    /// Search box contents, resynced from the viewer on every rebuild
    search_text: String,
    /// Highlighted master rows, in the order they were picked
    selected_rows: Vec<usize>,
    /// Viewer generation the selection belongs to
    seen_generation: Option<u64>,
    /// Row renderer
    rows: RowRenderer,
}

impl Default for BundleListPanel {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl BundleListPanel {
    /// Create a new panel using the configured layout
    pub fn new(config: &Config) -> Self {
        Self {
            search_text: String::new(),
            selected_rows: Vec::new(),
            seen_generation: None,
            rows: RowRenderer::new(config),
        }
    }

    /// Rows currently highlighted in the master list
    pub fn selected_rows(&self) -> &[usize] {
        &self.selected_rows
    }

    /// Render the panel into `ui`
    ///
    /// Returns Some if the user changed the search text or the selection.
    pub fn show(&mut self, ui: &mut egui::Ui, viewer: &BundleListViewer) -> Option<PanelAction> {
        // A rebuilt master list invalidates our row indices
        if self.seen_generation != Some(viewer.generation()) {
            self.seen_generation = Some(viewer.generation());
            self.selected_rows.clear();
            self.search_text = viewer.search_keyword().to_string();
        }

        let mut action = None;

        ui.horizontal(|ui| {
            ui.label("Search:");
            if ui.text_edit_singleline(&mut self.search_text).changed() {
                action = Some(PanelAction::SearchChanged(self.search_text.clone()));
            }

            if let Some(report) = viewer.report() {
                let summary = report_summary(report);
                ui.label(format!(
                    "Frame {} | {} providers | {} bundles ({} failed)",
                    report.frame_count,
                    summary.providers,
                    summary.distinct_bundles,
                    summary.failed_bundles
                ));
            }
        });
        ui.separator();

        // Reserve roughly half the remaining height for each list
        let list_height = ((ui.available_height() - 60.0) / 2.0).max(80.0);

        if let Some(selection) = self.render_bundle_list(ui, viewer, list_height) {
            action = Some(selection);
        }

        ui.separator();
        self.render_usage_list(ui, viewer, list_height);

        action
    }

    /// Render the master list
    fn render_bundle_list(
        &mut self,
        ui: &mut egui::Ui,
        viewer: &BundleListViewer,
        height: f32,
    ) -> Option<PanelAction> {
        self.rows.bundle_header(ui);

        let master = viewer.master_rows();
        if master.is_empty() {
            ui.label("No bundles.");
            return None;
        }

        let multi = ui.input(|i| i.modifiers.command);
        let mut clicked_row = None;

        egui::ScrollArea::vertical()
            .id_salt("bundle_list")
            .max_height(height)
            .auto_shrink([false, false])
            .show_rows(ui, self.rows.row_height(), master.len(), |ui, range| {
                for index in range {
                    let row = BundleRowView::from_bundle(&master[index]);
                    let selected = self.selected_rows.contains(&index);
                    if self.rows.bundle_row(ui, &row, selected) {
                        clicked_row = Some(index);
                    }
                }
            });

        let index = clicked_row?;
        if multi {
            if let Some(pos) = self.selected_rows.iter().position(|&i| i == index) {
                self.selected_rows.remove(pos);
            } else {
                self.selected_rows.push(index);
            }
        } else {
            self.selected_rows = vec![index];
        }

        let rows = self.selected_rows.clone();
        Some(PanelAction::SelectionChanged(rows))
    }

    /// Render the detail list
    fn render_usage_list(&self, ui: &mut egui::Ui, viewer: &BundleListViewer, height: f32) {
        self.rows.provider_header(ui);

        let detail = viewer.detail_rows();
        egui::ScrollArea::vertical()
            .id_salt("using_list")
            .max_height(height)
            .auto_shrink([false, false])
            .show_rows(ui, self.rows.row_height(), detail.len(), |ui, range| {
                for index in range {
                    let row = ProviderRowView::from_provider(&detail[index]);
                    self.rows.provider_row(ui, &row);
                }
            });
    }
}
