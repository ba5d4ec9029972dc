//! Shared test utilities for unit tests

use std::cell::RefCell;
use std::rc::Rc;

use bundlescope_shared::BundleStatus::{self, Succeed};
use bundlescope_shared::{DebugBundleInfo, DebugProviderInfo, DebugReport, ProviderStatus};

use crate::debug::RowSink;

/// Bundle entry shorthand
pub fn bundle(name: &str, ref_count: u32, status: BundleStatus) -> DebugBundleInfo {
    DebugBundleInfo::new(name, ref_count, status)
}

/// Provider with no bundles; the asset path doubles as its label in assertions
pub fn provider(asset_path: &str) -> DebugProviderInfo {
    DebugProviderInfo::new(
        asset_path,
        "TestScene",
        "00:00:00",
        1,
        ProviderStatus::Success,
    )
}

/// P1 -> [bundleA, bundleB], P2 -> [bundleA]
pub fn scenario_a() -> DebugReport {
    let p1 = provider("P1")
        .with_bundle(bundle("bundleA", 2, Succeed))
        .with_bundle(bundle("bundleB", 1, Succeed));
    let p2 = provider("P2").with_bundle(bundle("bundleA", 2, Succeed));

    DebugReport::new(1).with_provider(p1).with_provider(p2)
}

/// What a [`RecordingSink`] received, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkEvent {
    /// Bundle names of a master-list push
    Master(Vec<String>),
    /// Asset paths of a detail-list push
    Detail(Vec<String>),
}

/// Row sink that records every push into a shared log
#[derive(Clone, Default)]
pub struct RecordingSink {
    pub events: Rc<RefCell<Vec<SinkEvent>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&self) -> Vec<SinkEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }
}

impl RowSink for RecordingSink {
    fn master_rows_replaced(&mut self, rows: &[DebugBundleInfo]) {
        let names = rows.iter().map(|b| b.bundle_name.clone()).collect();
        self.events.borrow_mut().push(SinkEvent::Master(names));
    }

    fn detail_rows_replaced(&mut self, rows: &[DebugProviderInfo]) {
        let paths = rows.iter().map(|p| p.asset_path.clone()).collect();
        self.events.borrow_mut().push(SinkEvent::Detail(paths));
    }
}
