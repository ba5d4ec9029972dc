//! Filesystem helpers for reading report snapshots.

use std::path::Path;

use anyhow::{Context, Result};

use crate::report::DebugReport;

/// Maximum allowed report size for reading into memory.
pub const MAX_REPORT_BYTES: u64 = 64 * 1024 * 1024; // 64 MiB

/// Read a file into memory with a size cap.
pub fn read_file_with_limit(path: &Path, max_bytes: u64) -> Result<Vec<u8>> {
    let metadata = std::fs::metadata(path)
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;
    let len = metadata.len();
    if len > max_bytes {
        anyhow::bail!(
            "File too large: {} ({} bytes, max {} bytes)",
            path.display(),
            len,
            max_bytes
        );
    }
    std::fs::read(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))
}

/// Read, parse and validate a JSON report snapshot.
pub fn read_report(path: &Path) -> Result<DebugReport> {
    let bytes = read_file_with_limit(path, MAX_REPORT_BYTES)?;
    let text = std::str::from_utf8(&bytes)
        .with_context(|| format!("Report is not valid UTF-8: {}", path.display()))?;
    DebugReport::from_json(text)
        .with_context(|| format!("Invalid report: {}", path.display()))
}

/// Write a report snapshot as indented JSON.
pub fn write_report(path: &Path, report: &DebugReport) -> Result<()> {
    let json = report.to_json_pretty()?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write report: {}", path.display()))
}
