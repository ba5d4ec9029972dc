//! Bundlescope Core - asset bundle debugger
//!
//! This crate provides the data logic and egui panel for browsing a runtime
//! asset-bundle debug report.
//!
//! # Architecture
//!
//! - [`debug::filter_bundles`] - Deduplicated, filterable bundle list
//! - [`debug::providers_using`] - Providers referencing one bundle
//! - [`debug::BundleListViewer`] - Master/detail controller and selection state
//! - [`debug::BundleListPanel`] - egui rendering of the viewer
//! - [`config`] - Viewer settings stored in `config.toml`

pub mod config;
pub mod debug;
#[cfg(test)]
pub mod test_utils;

// Re-export the report model so hosts need only this crate
pub use bundlescope_shared::{
    BundleStatus, DebugBundleInfo, DebugProviderInfo, DebugReport, ProviderStatus, ReportError,
};

pub use debug::{
    BundleListPanel, BundleListViewer, PanelAction, RowSink, Selection, ViewerError,
    filter_bundles, providers_using,
};
