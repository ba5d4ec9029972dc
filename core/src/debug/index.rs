//! Bundle index for the master list
//!
//! Flattens the provider -> bundle nesting of a report into one row per
//! distinct bundle name.

use bundlescope_shared::{DebugBundleInfo, DebugReport};
use hashbrown::HashSet;

/// Returns true if `bundle_name` passes the search keyword.
///
/// Case-sensitive substring test. An empty keyword matches everything.
pub fn matches_keyword(bundle_name: &str, keyword: &str) -> bool {
    keyword.is_empty() || bundle_name.contains(keyword)
}

/// Build the master-list rows for a report.
///
/// Walks providers in report order and their bundles in load order, keeps the
/// bundles whose name matches `keyword`, and records each bundle name once.
/// The first [`DebugBundleInfo`] seen for a name is the one returned, even if a
/// later provider reports a different status or ref count for it. Rows come
/// back in first-seen order.
pub fn filter_bundles<'a>(report: &'a DebugReport, keyword: &str) -> Vec<&'a DebugBundleInfo> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(report.provider_infos.len());
    let mut rows = Vec::new();

    for (_, bundle) in report.bundle_refs() {
        if !matches_keyword(&bundle.bundle_name, keyword) {
            continue;
        }
        if seen.insert(bundle.bundle_name.as_str()) {
            rows.push(bundle);
        }
    }

    rows
}

/// Counts shown above the master list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSummary {
    /// Number of providers in the report
    pub providers: usize,
    /// Number of (provider, bundle) references
    pub bundle_refs: usize,
    /// Number of distinct bundle names
    pub distinct_bundles: usize,
    /// Distinct bundles whose master-list row is in the `Fail` state
    pub failed_bundles: usize,
}

/// Summarize a report without any keyword filtering.
pub fn report_summary(report: &DebugReport) -> ReportSummary {
    let rows = filter_bundles(report, "");
    ReportSummary {
        providers: report.provider_infos.len(),
        bundle_refs: report.bundle_refs().count(),
        distinct_bundles: rows.len(),
        failed_bundles: rows.iter().filter(|b| b.status.is_fail()).count(),
    }
}
