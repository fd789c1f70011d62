use derive_builder::Builder;
use std::path::PathBuf;

pub const DEFAULT_EXTENSION: &str = "yml";
pub const DEFAULT_ARRAY_KEY: &str = "blocked_services";

/// Everything a run needs to know about where to read and write.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct ReconcileConfig {
    /// Directory holding one file per service.
    pub services_dir: PathBuf,
    /// Consolidated legacy JSON document.
    pub legacy_path: PathBuf,
    /// Extension of individual files, with or without the leading dot.
    #[builder(default = "DEFAULT_EXTENSION.to_string()")]
    pub extension: String,
    /// Key of the record array inside the legacy document.
    #[builder(default = "DEFAULT_ARRAY_KEY.to_string()")]
    pub array_key: String,
    /// Detect and report missing services without writing anything.
    #[builder(default)]
    pub dry_run: bool,
}
