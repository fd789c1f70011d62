use std::collections::HashSet;

/// Returns every legacy key with no matching individual key, in legacy order.
///
/// Repeated legacy keys are repeated in the output.
pub fn find_missing_keys(legacy_keys: &[String], individual_keys: &[String]) -> Vec<String> {
    let present: HashSet<&str> = individual_keys.iter().map(String::as_str).collect();
    legacy_keys
        .iter()
        .filter(|key| !present.contains(key.as_str()))
        .cloned()
        .collect()
}
