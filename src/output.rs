//! Output formatting for JSON and text modes
//!
//! Provides types for structured output that can be serialized to JSON
//! for machine-readable output, or displayed as text for human consumption.

use crate::yarn::{LockfileDatabase, PackageRecord, Source};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write;
use std::path::Path;

/// Full report of a parsed lockfile
#[derive(Debug, Serialize)]
pub struct LockfileReport<'a> {
    pub lockfile: String,
    pub packages: BTreeMap<&'a str, PackageEntry<'a>>,
}

/// A single package in the report
#[derive(Debug, Serialize)]
pub struct PackageEntry<'a> {
    pub version: &'a str,
    pub resolved: &'a str,
    pub integrity: &'a str,
    pub source: Source,
    pub dependencies: &'a BTreeMap<String, String>,
}

/// Counts only
#[derive(Debug, Serialize)]
pub struct SummaryReport {
    pub lockfile: String,
    pub packages: usize,
    pub dependencies: usize,
}

impl<'a> LockfileReport<'a> {
    pub fn new(path: &Path, database: &'a LockfileDatabase) -> Self {
        let packages = database
            .iter()
            .map(|(key, record)| (key.as_str(), PackageEntry::new(record)))
            .collect();

        Self {
            lockfile: path.display().to_string(),
            packages,
        }
    }
}

impl<'a> PackageEntry<'a> {
    pub fn new(record: &'a PackageRecord) -> Self {
        Self {
            version: &record.version,
            resolved: &record.resolved,
            integrity: &record.integrity,
            source: record.source(),
            dependencies: &record.dependencies,
        }
    }
}

impl SummaryReport {
    pub fn new(path: &Path, database: &LockfileDatabase) -> Self {
        Self {
            lockfile: path.display().to_string(),
            packages: database.len(),
            dependencies: database.dependency_count(),
        }
    }
}

/// Render one block per package:
///
/// ```text
/// Package: lodash@^4.17.21
///   Version: 4.17.21
///   Resolved: https://...
///   Integrity: sha512-...
///   Source: registry
///   Dependencies:
///     - foo: ^1.0.0
/// ```
pub fn render_text(database: &LockfileDatabase) -> String {
    let mut out = String::new();
    for (key, record) in database {
        // Writing into a String cannot fail
        let _ = writeln!(out, "Package: {}", key);
        let _ = writeln!(out, "  Version: {}", record.version);
        let _ = writeln!(out, "  Resolved: {}", record.resolved);
        let _ = writeln!(out, "  Integrity: {}", record.integrity);
        let _ = writeln!(out, "  Source: {}", record.source().kind());
        let _ = writeln!(out, "  Dependencies:");
        for (dep, range) in &record.dependencies {
            let _ = writeln!(out, "    - {}: {}", dep, range);
        }
        out.push('\n');
    }
    out
}

pub fn render_summary_text(summary: &SummaryReport) -> String {
    format!(
        "{}: {} packages, {} dependency constraints\n",
        summary.lockfile, summary.packages, summary.dependencies
    )
}

/// Pretty-print `value` as JSON on stdout. Nothing is printed if it fails to serialize.
pub fn print_json<T: Serialize>(value: &T) -> Result<(), serde_json::Error> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}
