use crate::utils::file::base_name;
use crate::utils::normalize::normalize_key;
use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::Path;

/// Lists the comparison keys of every entry directly inside `path`.
///
/// Each entry's extension is stripped before normalizing. The result is
/// sorted and may contain duplicates. Subdirectories are not descended into.
pub fn list_individual_keys<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();

    let mut keys = Vec::new();
    for entry in
        fs::read_dir(path).with_context(|| format!("Failed to list services directory {:?}", path))?
    {
        let entry =
            entry.with_context(|| format!("Failed to read an entry of {:?}", path))?;
        keys.push(normalize_key(&base_name(&entry.path())));
    }
    keys.sort();

    debug!("Listed {} individual file(s) in {:?}", keys.len(), path);
    Ok(keys)
}
