use anyhow::{Context, Result, anyhow, bail};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::{ServiceRecord, resolve_record};
use crate::utils::file::{is_plain_file_name, with_extension};

/// Renders a record as YAML.
///
/// serde_yaml never folds long scalars, so long rules stay on one line.
pub fn render_record(record: &ServiceRecord) -> Result<String> {
    serde_yaml::to_string(record)
        .with_context(|| format!("Failed to serialize service {:?}", record.id))
}

/// Writes missing records into the services directory, one at a time.
pub struct RecordWriter<'a> {
    services_dir: &'a Path,
    extension: &'a str,
    written: Vec<PathBuf>,
}

impl<'a> RecordWriter<'a> {
    pub fn new(services_dir: &'a Path, extension: &'a str) -> Self {
        Self {
            services_dir,
            extension,
            written: Vec::new(),
        }
    }

    /// Writes one file per missing key, stopping at the first failure.
    ///
    /// Each key resolves to the first record in `records` whose id normalizes
    /// to it. The file is named after that record's original id.
    pub fn write_missing(&mut self, missing: &[String], records: &[ServiceRecord]) -> Result<()> {
        for key in missing {
            let record = resolve_record(records, key)
                .ok_or_else(|| anyhow!("No legacy record resolves to key {:?}", key))?;
            self.write_record(record)?;
        }
        Ok(())
    }

    fn write_record(&mut self, record: &ServiceRecord) -> Result<()> {
        let file_name = with_extension(&record.id, self.extension);
        if !is_plain_file_name(&file_name) {
            bail!("Service id {:?} cannot be used as a file name", record.id);
        }

        let yaml = render_record(record)?;
        let path = self.services_dir.join(file_name);
        fs::write(&path, yaml).with_context(|| format!("Failed to write {:?}", path))?;

        info!("Restored {}", path.display());
        self.written.push(path);
        Ok(())
    }

    #[cfg(test)]
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    pub fn into_written(self) -> Vec<PathBuf> {
        self.written
    }
}
