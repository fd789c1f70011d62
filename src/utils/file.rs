use std::path::{Component, Path};

/// Get the name of a file or directory without its extension.
///
/// Only the last extension is removed, and a leading dot is not treated as
/// one: `foo.bar.yml` gives `foo.bar`, `.hidden` gives `.hidden`.
pub fn base_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Build `<stem>.<extension>`, accepting the extension with or without its dot.
pub fn with_extension(stem: &str, extension: &str) -> String {
    let extension = extension.trim_start_matches('.');
    if extension.is_empty() {
        stem.to_string()
    } else {
        format!("{stem}.{extension}")
    }
}

/// Check that a name refers to a file directly inside its parent directory.
///
/// The name must be a single normal path component on this platform and
/// must not contain `/`.
pub fn is_plain_file_name(name: &str) -> bool {
    if name.contains('/') {
        return false;
    }

    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}
