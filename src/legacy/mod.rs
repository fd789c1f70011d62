mod loader;
#[cfg(test)]
mod loader_test;

pub use self::loader::{LegacyDocument, load_legacy_document, parse_legacy_document};
