#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::legacy::{LegacyDocument, load_legacy_document, parse_legacy_document};

    fn ids(document: &LegacyDocument) -> Vec<&str> {
        match document {
            LegacyDocument::Records(records) => records.iter().map(|r| r.id.as_str()).collect(),
            LegacyDocument::NotAnArray => panic!("expected records"),
        }
    }

    #[test]
    fn test_load_fixture_document() {
        let path = PathBuf::from("testdata/legacy/services.json");
        let document =
            load_legacy_document(&path, "blocked_services").expect("fixture should load");

        assert_eq!(ids(&document), vec!["Example.com", "other", "youtube"]);
    }

    #[test]
    fn test_preserves_field_order() {
        let document = parse_legacy_document(
            r#"{"blocked_services": [{"name": "Z", "id": "z", "alpha": 1, "rules": []}]}"#,
            "blocked_services",
        )
        .expect("valid document");

        let LegacyDocument::Records(records) = document else {
            panic!("expected records");
        };
        let keys: Vec<&str> = records[0].fields.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["name", "id", "alpha", "rules"]);
    }

    #[test]
    fn test_empty_array() {
        let document = parse_legacy_document(r#"{"blocked_services": []}"#, "blocked_services")
            .expect("valid document");
        assert_eq!(document, LegacyDocument::Records(Vec::new()));
    }

    #[test]
    fn test_non_array_field_is_not_an_error() {
        for content in [
            r#"{"blocked_services": {"id": "x"}}"#,
            r#"{"blocked_services": null}"#,
            r#"{"other_key": []}"#,
            r#"[{"id": "x"}]"#,
            r#""blocked_services""#,
        ] {
            let document =
                parse_legacy_document(content, "blocked_services").expect("valid json");
            assert_eq!(document, LegacyDocument::NotAnArray, "for {content}");
        }
    }

    #[test]
    fn test_custom_array_key() {
        let document = parse_legacy_document(
            r#"{"blocked_services": [], "services": [{"id": "a"}]}"#,
            "services",
        )
        .expect("valid document");
        assert_eq!(ids(&document), vec!["a"]);
    }

    #[test]
    fn test_skips_entries_without_string_id() {
        let document = parse_legacy_document(
            r#"{"blocked_services": [{"id": "keep"}, {"name": "no id"}, {"id": 7}, "bare", {"id": "also"}]}"#,
            "blocked_services",
        )
        .expect("valid document");
        assert_eq!(ids(&document), vec!["keep", "also"]);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let result = parse_legacy_document("{ this is not valid json }", "blocked_services");
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file_is_an_error_naming_the_path() {
        let path = PathBuf::from("testdata/legacy/does-not-exist.json");
        let err = load_legacy_document(&path, "blocked_services").unwrap_err();
        assert!(format!("{err:#}").contains("does-not-exist.json"));
    }
}
