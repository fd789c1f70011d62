use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::ReconcileConfig;

pub const REPORT_FORMAT_VERSION: &str = "1.0.0";

/// How a run ended.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReconcileStatus {
    /// The legacy document could not be read or parsed. Nothing was written.
    LegacyUnavailable,
    /// The legacy document has no array under the configured key. Nothing was written.
    NotAnArray,
    /// The services directory could not be listed. Nothing was written.
    ListingFailed,
    /// Every legacy service already has an individual file.
    UpToDate,
    /// Missing services were found but the run was asked not to write.
    DryRun,
    /// Every missing service was written.
    Restored,
    /// A write failed; files written before the failure remain.
    WriteAborted,
}

impl ReconcileStatus {
    /// True when at least one legacy service lacked an individual file.
    pub fn found_missing(&self) -> bool {
        matches!(self, Self::DryRun | Self::Restored | Self::WriteAborted)
    }
}

#[derive(Serialize, Debug)]
pub struct ReconcileReport {
    pub header: Header,
    pub status: ReconcileStatus,
    pub legacy_count: usize,
    pub individual_count: usize,
    /// Normalized keys of legacy services without an individual file, sorted.
    pub missing: Vec<String>,
    /// Paths of the files written by this run, in write order.
    pub written: Vec<String>,
}

#[derive(Serialize, Debug)]
pub struct Header {
    pub start_timestamp: String,
    pub end_timestamp: String,
    pub duration: f64,
    pub services_dir: String,
    pub legacy_path: String,
    pub dry_run: bool,
    pub errors: Vec<String>,
    pub report_format_version: String,
}

/// Accumulates report fields while a run is in progress.
#[derive(Debug)]
pub struct ReportBuilder {
    start_time: DateTime<Utc>,
    services_dir: String,
    legacy_path: String,
    dry_run: bool,
    pub legacy_count: usize,
    pub individual_count: usize,
    pub missing: Vec<String>,
    pub written: Vec<String>,
    pub errors: Vec<String>,
}

impl ReportBuilder {
    pub fn start(config: &ReconcileConfig) -> Self {
        Self {
            start_time: Utc::now(),
            services_dir: config.services_dir.to_string_lossy().into_owned(),
            legacy_path: config.legacy_path.to_string_lossy().into_owned(),
            dry_run: config.dry_run,
            legacy_count: 0,
            individual_count: 0,
            missing: Vec::new(),
            written: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn finish(self, status: ReconcileStatus) -> ReconcileReport {
        let end_time = Utc::now();
        let duration =
            (end_time - self.start_time).num_nanoseconds().unwrap_or(0) as f64 / 1_000_000_000.0;

        ReconcileReport {
            header: Header {
                start_timestamp: self.start_time.to_rfc3339(),
                end_timestamp: end_time.to_rfc3339(),
                duration,
                services_dir: self.services_dir,
                legacy_path: self.legacy_path,
                dry_run: self.dry_run,
                errors: self.errors,
                report_format_version: REPORT_FORMAT_VERSION.to_string(),
            },
            status,
            legacy_count: self.legacy_count,
            individual_count: self.individual_count,
            missing: self.missing,
            written: self.written,
        }
    }
}
