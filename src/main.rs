use clap::Parser;
use log::debug;
use serde_json::to_string_pretty;
use std::error::Error;
use std::fs::File;
use std::io::Write;

use servicecheck::cli::Cli;
use servicecheck::{ReconcileReport, check_removed_services};

fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(true) => Ok(()),
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    }
}

/// Returns `false` when `--check` was given and services were missing.
fn run() -> Result<bool, Box<dyn Error>> {
    let cli = Cli::parse();
    let config = cli.reconcile_config()?;

    let report = check_removed_services(&config);
    debug!(
        "Checked {} legacy service(s) against {} individual file(s): {:?}",
        report.legacy_count, report.individual_count, report.status
    );

    if let Some(report_file) = &cli.report {
        write_report(report_file, &report)?;
        println!("Report written to {}", report_file);
    }

    Ok(!(cli.check && report.status.found_missing()))
}

fn write_report(report_file: &str, report: &ReconcileReport) -> std::io::Result<()> {
    let json_report = match to_string_pretty(report) {
        Ok(json) => json,
        Err(err) => return Err(std::io::Error::other(err)),
    };
    let mut file = File::create(report_file)?;
    file.write_all(json_report.as_bytes())?;
    Ok(())
}
