//! Bundle list viewer controller
//!
//! Owns the master/detail state for one report: the current snapshot, the
//! search keyword, the filtered bundle rows, the usage rows for the selected
//! bundle, and the selection itself. Lists are always replaced wholesale and
//! pushed to the attached [`RowSink`], never patched in place.


use bundlescope_shared::{DebugBundleInfo, DebugProviderInfo, DebugReport};

use super::index::filter_bundles;
use super::usage::providers_using;

/// Receives list contents whenever the viewer replaces them
pub trait RowSink {
    /// The master (bundle) list was rebuilt
    fn master_rows_replaced(&mut self, rows: &[DebugBundleInfo]);
    /// The detail (provider) list was rebuilt
    fn detail_rows_replaced(&mut self, rows: &[DebugProviderInfo]);
}

/// Master-list selection state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    /// Initial state, and the state after every master-list rebuild
    #[default]
    None,
    /// The named bundle's users are shown in the detail list
    Bundle(String),
}

impl Selection {
    pub fn bundle_name(&self) -> Option<&str> {
        match self {
            Selection::None => None,
            Selection::Bundle(name) => Some(name),
        }
    }
}

/// Contract violations at the viewer boundary
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ViewerError {
    #[error("Selection changed before a report was loaded")]
    NoReport,

    #[error("Selected row {index} is out of range ({len} rows)")]
    RowOutOfRange { index: usize, len: usize },
}

/// Master/detail controller for the bundle list
#[derive(Default)]
pub struct BundleListViewer {
    report: Option<DebugReport>,
    search_keyword: String,
    master_rows: Vec<DebugBundleInfo>,
    detail_rows: Vec<DebugProviderInfo>,
    selection: Selection,
    /// Bumped on every master-list rebuild
    generation: u64,
    sink: Option<Box<dyn RowSink>>,
}

impl BundleListViewer {
    /// Create a viewer with no report and no selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a report snapshot and rebuild the master list.
    ///
    /// Clears the selection. The detail list keeps its contents until the next
    /// selection event.
    pub fn fill_view_data(&mut self, report: DebugReport, search_keyword: &str) {
        tracing::debug!(
            "bundle viewer: new report (frame {}, {} providers)",
            report.frame_count,
            report.provider_infos.len()
        );
        self.report = Some(report);
        self.search_keyword = search_keyword.to_string();
        self.rebuild_master_rows();
    }

    /// Change the search keyword and re-filter the current report.
    ///
    /// Without a report only the keyword is recorded.
    pub fn set_search_keyword(&mut self, keyword: &str) {
        self.search_keyword = keyword.to_string();
        if self.report.is_some() {
            self.rebuild_master_rows();
        }
    }

    /// Handle a master-list selection event.
    ///
    /// `rows` are indices into [`master_rows`](Self::master_rows). Every index is
    /// checked before anything changes. Each selected row then replaces the
    /// detail list in turn, so with several rows the last one stays visible.
    /// An empty event changes nothing.
    pub fn on_selection_changed(&mut self, rows: &[usize]) -> Result<(), ViewerError> {
        let report = self.report.as_ref().ok_or(ViewerError::NoReport)?;

        let len = self.master_rows.len();
        if let Some(&index) = rows.iter().find(|&&index| index >= len) {
            return Err(ViewerError::RowOutOfRange { index, len });
        }

        for &index in rows {
            let bundle_name = self.master_rows[index].bundle_name.clone();
            self.detail_rows = providers_using(report, &bundle_name)
                .into_iter()
                .cloned()
                .collect();
            tracing::debug!(
                "bundle viewer: '{}' used by {} providers",
                bundle_name,
                self.detail_rows.len()
            );
            self.selection = Selection::Bundle(bundle_name);

            if let Some(sink) = self.sink.as_mut() {
                sink.detail_rows_replaced(&self.detail_rows);
            }
        }

        Ok(())
    }

    /// Attach a rendering collaborator and push the current lists to it.
    pub fn attach_sink(&mut self, mut sink: Box<dyn RowSink>) {
        sink.master_rows_replaced(&self.master_rows);
        sink.detail_rows_replaced(&self.detail_rows);
        if self.sink.replace(sink).is_some() {
            tracing::warn!("bundle viewer: replaced an attached row sink");
        }
    }

    /// Detach the rendering collaborator, if any.
    pub fn detach_sink(&mut self) -> Option<Box<dyn RowSink>> {
        self.sink.take()
    }

    pub fn is_attached(&self) -> bool {
        self.sink.is_some()
    }

    pub fn report(&self) -> Option<&DebugReport> {
        self.report.as_ref()
    }

    pub fn search_keyword(&self) -> &str {
        &self.search_keyword
    }

    pub fn master_rows(&self) -> &[DebugBundleInfo] {
        &self.master_rows
    }

    pub fn detail_rows(&self) -> &[DebugProviderInfo] {
        &self.detail_rows
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Master-list rebuild counter, for renderers that keep their own row state
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Index of the master row with the given bundle name
    pub fn row_index_of(&self, bundle_name: &str) -> Option<usize> {
        self.master_rows
            .iter()
            .position(|row| row.bundle_name == bundle_name)
    }

    fn rebuild_master_rows(&mut self) {
        self.master_rows = match &self.report {
            Some(report) => filter_bundles(report, &self.search_keyword)
                .into_iter()
                .cloned()
                .collect(),
            None => Vec::new(),
        };
        self.selection = Selection::None;
        self.generation = self.generation.wrapping_add(1);

        tracing::debug!(
            "bundle viewer: {} rows for keyword '{}'",
            self.master_rows.len(),
            self.search_keyword
        );

        if let Some(sink) = self.sink.as_mut() {
            sink.master_rows_replaced(&self.master_rows);
        }
    }
}
