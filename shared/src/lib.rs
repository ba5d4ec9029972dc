//! Shared types for the Bundlescope asset-bundle debugger.
//!
//! Holds the report snapshot model exchanged between the asset system that
//! samples it and the viewers that present it.

pub mod fs;
pub mod report;

pub use report::{
    BundleStatus, DebugBundleInfo, DebugProviderInfo, DebugReport, ProviderStatus, ReportError,
};
