//! Display fields for master and detail rows

use bundlescope_shared::{DebugBundleInfo, DebugProviderInfo};

/// Text fields bound to one master-list row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleRowView {
    pub bundle_name: String,
    pub ref_count: String,
    pub status: String,
    /// Status is `Fail`; the status cell is drawn in the highlight color
    pub highlight: bool,
}

impl BundleRowView {
    pub fn from_bundle(bundle: &DebugBundleInfo) -> Self {
        Self {
            bundle_name: bundle.bundle_name.clone(),
            ref_count: bundle.ref_count.to_string(),
            status: bundle.status.to_string(),
            highlight: bundle.status.is_fail(),
        }
    }
}

/// Text fields bound to one detail-list row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderRowView {
    pub asset_path: String,
    pub spawn_scene: String,
    pub spawn_time: String,
    pub ref_count: String,
    pub status: String,
}

impl ProviderRowView {
    pub fn from_provider(provider: &DebugProviderInfo) -> Self {
        Self {
            asset_path: provider.asset_path.clone(),
            spawn_scene: provider.spawn_scene.clone(),
            spawn_time: provider.spawn_time.clone(),
            ref_count: provider.ref_count.to_string(),
            status: provider.status.to_string(),
        }
    }
}
