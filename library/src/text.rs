//! Plain-text rendering of the bundle and usage lists
//!
//! Used by `--headless`. Each list refresh pushed by the viewer is written as
//! a fixed-width table; failed bundles are marked with `!` in the first column.

use bundlescope_core::debug::{BundleRowView, ProviderRowView};
use bundlescope_core::{DebugBundleInfo, DebugProviderInfo, RowSink};
use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

const NAME_WIDTH: usize = 40;
const SCENE_WIDTH: usize = 20;
const TIME_WIDTH: usize = 12;
const REF_COUNT_WIDTH: usize = 10;
const STATUS_WIDTH: usize = 14;

const BUNDLE_COLUMNS: [usize; 3] = [NAME_WIDTH, REF_COUNT_WIDTH, STATUS_WIDTH];
const BUNDLE_HEADER: [&str; 3] = ["Bundle Name", "Ref Count", "Status"];

const PROVIDER_COLUMNS: [usize; 5] = [
    NAME_WIDTH,
    SCENE_WIDTH,
    TIME_WIDTH,
    REF_COUNT_WIDTH,
    STATUS_WIDTH,
];
const PROVIDER_HEADER: [&str; 5] = [
    "Asset Path",
    "Spawn Scene",
    "Spawn Time",
    "Ref Count",
    "Status",
];

/// Write one line: the marker, then each cell left-aligned in its column
fn write_row(
    out: &mut impl Write,
    marker: char,
    cells: &[&str],
    widths: &[usize],
) -> io::Result<()> {
    write!(out, "{}", marker)?;
    for (cell, &width) in cells.iter().zip(widths) {
        write!(out, " {:<width$}", cell)?;
    }
    writeln!(out)
}

/// Write the master list as a table
pub fn write_bundle_table(out: &mut impl Write, rows: &[DebugBundleInfo]) -> io::Result<()> {
    writeln!(out, "== Bundles ({}) ==", rows.len())?;
    write_row(out, ' ', &BUNDLE_HEADER, &BUNDLE_COLUMNS)?;
    for bundle in rows {
        let row = BundleRowView::from_bundle(bundle);
        let marker = if row.highlight { '!' } else { ' ' };
        let cells = [
            row.bundle_name.as_str(),
            row.ref_count.as_str(),
            row.status.as_str(),
        ];
        write_row(out, marker, &cells, &BUNDLE_COLUMNS)?;
    }
    writeln!(out)
}

/// Write the detail list as a table
pub fn write_provider_table(out: &mut impl Write, rows: &[DebugProviderInfo]) -> io::Result<()> {
    writeln!(out, "== Providers ({}) ==", rows.len())?;
    write_row(out, ' ', &PROVIDER_HEADER, &PROVIDER_COLUMNS)?;
    for provider in rows {
        let row = ProviderRowView::from_provider(provider);
        let cells = [
            row.asset_path.as_str(),
            row.spawn_scene.as_str(),
            row.spawn_time.as_str(),
            row.ref_count.as_str(),
            row.status.as_str(),
        ];
        write_row(out, ' ', &cells, &PROVIDER_COLUMNS)?;
    }
    writeln!(out)
}

/// First write error of a [`TextSink`]
///
/// Clones share the slot, so the error stays readable after the sink has been
/// handed to the viewer.
#[derive(Clone, Default)]
pub struct WriteFailure(Rc<RefCell<Option<io::Error>>>);

impl WriteFailure {
    /// Remove and return the recorded error
    pub fn take(&self) -> Option<io::Error> {
        self.0.borrow_mut().take()
    }

    fn is_set(&self) -> bool {
        self.0.borrow().is_some()
    }

    fn record(&self, error: io::Error) {
        self.0.borrow_mut().get_or_insert(error);
    }
}

/// [`RowSink`] that prints every list refresh to a writer
///
/// Once a write fails, later refreshes are dropped and the first error is kept
/// in the sink's [`WriteFailure`].
pub struct TextSink<W: Write> {
    out: W,
    failure: WriteFailure,
}

impl<W: Write> TextSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            failure: WriteFailure::default(),
        }
    }

    /// Handle to the first write error, shared with the sink
    pub fn failure(&self) -> WriteFailure {
        self.failure.clone()
    }

    /// Consume the sink, returning the writer or the first write error
    pub fn finish(self) -> io::Result<W> {
        match self.failure.take() {
            Some(e) => Err(e),
            None => Ok(self.out),
        }
    }

    fn write_table(&mut self, table: &str, write: impl FnOnce(&mut W) -> io::Result<()>) {
        if self.failure.is_set() {
            return;
        }

        let result = write(&mut self.out).and_then(|()| self.out.flush());
        if let Err(e) = result {
            tracing::warn!("Failed to write {} list: {}", table, e);
            self.failure.record(e);
        }
    }
}

impl<W: Write> RowSink for TextSink<W> {
    fn master_rows_replaced(&mut self, rows: &[DebugBundleInfo]) {
        self.write_table("bundle", |out| write_bundle_table(out, rows));
    }

    fn detail_rows_replaced(&mut self, rows: &[DebugProviderInfo]) {
        self.write_table("provider", |out| write_provider_table(out, rows));
    }
}
