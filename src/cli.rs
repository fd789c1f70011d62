use clap::Parser;

use crate::config::{
    DEFAULT_ARRAY_KEY, DEFAULT_EXTENSION, ReconcileConfig, ReconcileConfigBuilder,
    ReconcileConfigBuilderError,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory holding one file per service
    pub services_dir: String,

    /// Consolidated legacy JSON document
    pub legacy_json: String,

    /// Extension of individual service files
    #[arg(short, long, default_value = DEFAULT_EXTENSION)]
    pub extension: String,

    /// Key of the service array inside the legacy document
    #[arg(short, long, default_value = DEFAULT_ARRAY_KEY)]
    pub key: String,

    /// Report missing services without writing any file
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Exit with status 1 when any legacy service had no individual file
    #[arg(long)]
    pub check: bool,

    /// Write the run report as JSON to this file
    #[arg(short, long)]
    pub report: Option<String>,
}

impl Cli {
    pub fn reconcile_config(&self) -> Result<ReconcileConfig, ReconcileConfigBuilderError> {
        ReconcileConfigBuilder::default()
            .services_dir(self.services_dir.as_str())
            .legacy_path(self.legacy_json.as_str())
            .extension(self.extension.as_str())
            .array_key(self.key.as_str())
            .dry_run(self.dry_run)
            .build()
    }
}
