//! Bundle usage lookup for the detail list

use bundlescope_shared::{DebugProviderInfo, DebugReport};

/// Find the providers that depend on `bundle_name`.
///
/// A provider is returned once per bundle entry in it whose name equals
/// `bundle_name` exactly, so a provider listing the bundle twice appears twice.
/// Order follows the report scan. An unknown name yields an empty list.
pub fn providers_using<'a>(
    report: &'a DebugReport,
    bundle_name: &str,
) -> Vec<&'a DebugProviderInfo> {
    report
        .bundle_refs()
        .filter(|(_, bundle)| bundle.bundle_name == bundle_name)
        .map(|(provider, _)| provider)
        .collect()
}
