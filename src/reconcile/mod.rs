//! Restores individual service files that the legacy document still defines.
//!
//! A run loads the legacy document, lists the services directory, compares
//! the two sets of normalized keys and writes a YAML file for every legacy
//! service that has none. Existing files are never touched. All failures are
//! logged and recorded in the returned report; nothing is propagated.

mod diff;
mod writer;


use log::{error, info};

use crate::config::ReconcileConfig;
use crate::legacy::{LegacyDocument, load_legacy_document};
use crate::models::{ReconcileReport, ReconcileStatus, ReportBuilder};
use crate::scanner::list_individual_keys;
use crate::utils::normalize::sorted_keys;

pub use self::diff::find_missing_keys;
pub use self::writer::{RecordWriter, render_record};

/// Runs one reconciliation of `config.services_dir` against `config.legacy_path`.
pub fn check_removed_services(config: &ReconcileConfig) -> ReconcileReport {
    let mut report = ReportBuilder::start(config);

    let records = match load_legacy_document(&config.legacy_path, &config.array_key) {
        Ok(LegacyDocument::Records(records)) => records,
        Ok(LegacyDocument::NotAnArray) => return report.finish(ReconcileStatus::NotAnArray),
        Err(e) => {
            error!("{:#}", e);
            report.errors.push(format!("{:#}", e));
            return report.finish(ReconcileStatus::LegacyUnavailable);
        }
    };
    report.legacy_count = records.len();

    if records.is_empty() {
        return report.finish(ReconcileStatus::UpToDate);
    }

    let individual_keys = match list_individual_keys(&config.services_dir) {
        Ok(keys) => keys,
        Err(e) => {
            error!("{:#}", e);
            report.errors.push(format!("{:#}", e));
            return report.finish(ReconcileStatus::ListingFailed);
        }
    };
    report.individual_count = individual_keys.len();

    let legacy_keys = sorted_keys(records.iter().map(|record| record.id.as_str()));
    let missing = find_missing_keys(&legacy_keys, &individual_keys);
    if missing.is_empty() {
        return report.finish(ReconcileStatus::UpToDate);
    }

    let status = if config.dry_run {
        ReconcileStatus::DryRun
    } else {
        let mut writer = RecordWriter::new(&config.services_dir, &config.extension);
        let result = writer.write_missing(&missing, &records);
        report.written = writer
            .into_written()
            .iter()
            .map(|path| path.to_string_lossy().into_owned())
            .collect();

        match result {
            Ok(()) => ReconcileStatus::Restored,
            Err(e) => {
                error!("Failed to restore missing services: {:#}", e);
                report.errors.push(format!("{:#}", e));
                ReconcileStatus::WriteAborted
            }
        }
    };

    info!(
        "Found {} service(s) without an individual file: {}",
        missing.len(),
        missing.join(", ")
    );
    report.missing = missing;

    report.finish(status)
}
