//! Row rendering for the bundle and usage lists

use crate::config::{Config, LayoutConfig};

use super::super::rows::{BundleRowView, ProviderRowView};

/// Handles rendering of list rows at configured column widths
pub(super) struct RowRenderer {
    layout: LayoutConfig,
    fail_color: egui::Color32,
}

impl RowRenderer {
    pub fn new(config: &Config) -> Self {
        let [r, g, b] = config.highlight.fail_color;
        Self {
            layout: config.layout.clone(),
            fail_color: egui::Color32::from_rgb(r, g, b),
        }
    }

    pub fn row_height(&self) -> f32 {
        self.layout.row_height
    }

    /// Column titles above the bundle list
    pub fn bundle_header(&self, ui: &mut egui::Ui) {
        let l = &self.layout;
        ui.horizontal(|ui| {
            self.header_cell(ui, l.bundle_name_width, "Bundle Name");
            self.header_cell(ui, l.bundle_ref_count_width, "Ref Count");
            self.header_cell(ui, l.bundle_status_width, "Status");
        });
    }

    /// Column titles above the usage list
    pub fn provider_header(&self, ui: &mut egui::Ui) {
        let l = &self.layout;
        ui.horizontal(|ui| {
            self.header_cell(ui, l.asset_path_width, "Asset Path");
            self.header_cell(ui, l.spawn_scene_width, "Spawn Scene");
            self.header_cell(ui, l.spawn_time_width, "Spawn Time");
            self.header_cell(ui, l.provider_ref_count_width, "Ref Count");
            self.header_cell(ui, l.provider_status_width, "Status");
        });
    }

    /// Render one bundle row
    ///
    /// Returns true if the name cell was clicked.
    pub fn bundle_row(&self, ui: &mut egui::Ui, row: &BundleRowView, selected: bool) -> bool {
        let l = &self.layout;
        let mut clicked = false;

        ui.horizontal(|ui| {
            clicked = self
                .cell(ui, l.bundle_name_width, |ui| {
                    ui.selectable_label(selected, &row.bundle_name)
                })
                .clicked();
            self.text_cell(ui, l.bundle_ref_count_width, &row.ref_count);

            let status_color = if row.highlight {
                self.fail_color
            } else {
                ui.visuals().text_color()
            };
            let status = egui::RichText::new(&row.status).color(status_color);
            self.cell(ui, l.bundle_status_width, |ui| ui.label(status));
        });

        clicked
    }

    /// Render one usage row
    pub fn provider_row(&self, ui: &mut egui::Ui, row: &ProviderRowView) {
        let l = &self.layout;
        ui.horizontal(|ui| {
            self.text_cell(ui, l.asset_path_width, &row.asset_path);
            self.text_cell(ui, l.spawn_scene_width, &row.spawn_scene);
            self.text_cell(ui, l.spawn_time_width, &row.spawn_time);
            self.text_cell(ui, l.provider_ref_count_width, &row.ref_count);
            self.text_cell(ui, l.provider_status_width, &row.status);
        });
    }

    fn header_cell(&self, ui: &mut egui::Ui, width: f32, title: &str) {
        self.cell(ui, width, |ui| ui.strong(title));
    }

    fn text_cell(&self, ui: &mut egui::Ui, width: f32, text: &str) {
        self.cell(ui, width, |ui| ui.label(text));
    }

    /// Fixed-width, left-aligned cell
    fn cell(
        &self,
        ui: &mut egui::Ui,
        width: f32,
        add_contents: impl FnOnce(&mut egui::Ui) -> egui::Response,
    ) -> egui::Response {
        ui.allocate_ui_with_layout(
            egui::vec2(width, self.layout.row_height),
            egui::Layout::left_to_right(egui::Align::Center),
            |ui| {
                ui.set_min_width(width);
                add_contents(ui)
            },
        )
        .inner
    }
}
