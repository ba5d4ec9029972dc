//! Asset bundle debugger
//!
//! Presents a [`DebugReport`](bundlescope_shared::DebugReport) snapshot as a
//! master/detail pair of lists.
//!
//! # Overview
//!
//! - [`filter_bundles`] flattens the report into one row per distinct bundle
//!   name, optionally narrowed by a search keyword (master list)
//! - [`providers_using`] lists the providers that depend on one bundle
//!   (detail list)
//! - [`BundleListViewer`] keeps both lists in step with the report, the keyword
//!   and the master-list selection, and pushes them to a [`RowSink`]
//! - [`BundleListPanel`] renders the viewer state with egui
//!
//! # Data Flow
//!
//! ```text
//! report + keyword ─► filter_bundles ─► master rows
//! selected row ─► bundle name ─► providers_using ─► detail rows
//! ```
//!
//! Nothing flows back into the report; every list is recomputed from scratch.

pub mod index;
pub mod panel;
pub mod rows;
pub mod usage;
pub mod viewer;

// Re-export commonly used types
pub use index::{ReportSummary, filter_bundles, matches_keyword, report_summary};
pub use panel::{BundleListPanel, PanelAction};
pub use rows::{BundleRowView, ProviderRowView};
pub use usage::providers_using;
pub use viewer::{BundleListViewer, RowSink, Selection, ViewerError};
