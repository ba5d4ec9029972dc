//! Debug report snapshot types
//!
//! A [`DebugReport`] is sampled by the running asset system and describes every
//! tracked provider (one logical asset load request) together with the bundles
//! that provider depends on. Viewers treat a report as an immutable snapshot.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Load status of a single bundle file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BundleStatus {
    #[default]
    None,
    Download,
    CheckDownload,
    LoadFile,
    CheckFile,
    Succeed,
    Fail,
}

impl BundleStatus {
    /// Variant name as shown in the status column
    pub fn as_str(&self) -> &'static str {
        match self {
            BundleStatus::None => "None",
            BundleStatus::Download => "Download",
            BundleStatus::CheckDownload => "CheckDownload",
            BundleStatus::LoadFile => "LoadFile",
            BundleStatus::CheckFile => "CheckFile",
            BundleStatus::Succeed => "Succeed",
            BundleStatus::Fail => "Fail",
        }
    }

    pub fn is_fail(&self) -> bool {
        matches!(self, BundleStatus::Fail)
    }
}

impl fmt::Display for BundleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Load status of a provider (asset request)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ProviderStatus {
    #[default]
    None,
    CheckBundle,
    Loading,
    Checking,
    Success,
    Fail,
}

impl ProviderStatus {
    /// Variant name as shown in the status column
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderStatus::None => "None",
            ProviderStatus::CheckBundle => "CheckBundle",
            ProviderStatus::Loading => "Loading",
            ProviderStatus::Checking => "Checking",
            ProviderStatus::Success => "Success",
            ProviderStatus::Fail => "Fail",
        }
    }

    pub fn is_fail(&self) -> bool {
        matches!(self, ProviderStatus::Fail)
    }
}

impl fmt::Display for ProviderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One physical bundle as seen from a provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DebugBundleInfo {
    /// Bundle identifier, unique per physical bundle
    pub bundle_name: String,
    pub ref_count: u32,
    #[serde(default)]
    pub status: BundleStatus,
}

impl DebugBundleInfo {
    pub fn new(bundle_name: impl Into<String>, ref_count: u32, status: BundleStatus) -> Self {
        Self {
            bundle_name: bundle_name.into(),
            ref_count,
            status,
        }
    }
}

/// One logical asset load request and the bundles it pulled in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DebugProviderInfo {
    pub asset_path: String,
    /// Scene that was active when the request was made
    #[serde(default)]
    pub spawn_scene: String,
    /// Request time, already formatted by the producer
    #[serde(default)]
    pub spawn_time: String,
    pub ref_count: u32,
    #[serde(default)]
    pub status: ProviderStatus,
    /// Dependent bundles in load order
    #[serde(default)]
    pub bundle_infos: Vec<DebugBundleInfo>,
}

impl DebugProviderInfo {
    pub fn new(
        asset_path: impl Into<String>,
        spawn_scene: impl Into<String>,
        spawn_time: impl Into<String>,
        ref_count: u32,
        status: ProviderStatus,
    ) -> Self {
        Self {
            asset_path: asset_path.into(),
            spawn_scene: spawn_scene.into(),
            spawn_time: spawn_time.into(),
            ref_count,
            status,
            bundle_infos: Vec::new(),
        }
    }

    /// Append a dependent bundle (builder style)
    pub fn with_bundle(mut self, bundle: DebugBundleInfo) -> Self {
        self.bundle_infos.push(bundle);
        self
    }

    /// Whether any dependent bundle carries the given name
    pub fn references(&self, bundle_name: &str) -> bool {
        self.bundle_infos
            .iter()
            .any(|bundle| bundle.bundle_name == bundle_name)
    }
}

/// Snapshot of all tracked providers at one frame
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DebugReport {
    /// Frame on which the snapshot was sampled
    #[serde(default)]
    pub frame_count: u32,
    #[serde(default)]
    pub provider_infos: Vec<DebugProviderInfo>,
}

/// Error type for report parsing and validation.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Failed to parse report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Provider {provider_index} has an empty asset path")]
    EmptyAssetPath { provider_index: usize },

    #[error("Bundle {bundle_index} of '{asset_path}' has an empty bundle name")]
    EmptyBundleName {
        provider_index: usize,
        bundle_index: usize,
        asset_path: String,
    },
}

impl DebugReport {
    pub fn new(frame_count: u32) -> Self {
        Self {
            frame_count,
            provider_infos: Vec::new(),
        }
    }

    /// Append a provider (builder style)
    pub fn with_provider(mut self, provider: DebugProviderInfo) -> Self {
        self.provider_infos.push(provider);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.provider_infos.is_empty()
    }

    /// Iterate every (provider, bundle) pair in report order
    pub fn bundle_refs(&self) -> impl Iterator<Item = (&DebugProviderInfo, &DebugBundleInfo)> {
        self.provider_infos.iter().flat_map(|provider| {
            provider
                .bundle_infos
                .iter()
                .map(move |bundle| (provider, bundle))
        })
    }

    /// Check the snapshot for entries a viewer cannot identify.
    ///
    /// Reports the first provider without an asset path or bundle without a name.
    pub fn validate(&self) -> Result<(), ReportError> {
        for (provider_index, provider) in self.provider_infos.iter().enumerate() {
            if provider.asset_path.is_empty() {
                return Err(ReportError::EmptyAssetPath { provider_index });
            }
            for (bundle_index, bundle) in provider.bundle_infos.iter().enumerate() {
                if bundle.bundle_name.is_empty() {
                    return Err(ReportError::EmptyBundleName {
                        provider_index,
                        bundle_index,
                        asset_path: provider.asset_path.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Parse a report from its JSON form and validate it.
    pub fn from_json(json: &str) -> Result<Self, ReportError> {
        let report: DebugReport = serde_json::from_str(json)?;
        report.validate()?;
        Ok(report)
    }

    /// Serialize to compact JSON.
    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to indented JSON.
    pub fn to_json_pretty(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
