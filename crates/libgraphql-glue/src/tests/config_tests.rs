use crate::config::read_app_config_schema_path;
use crate::config::resolve_schema_path;
use crate::config::DEFAULT_SCHEMA_DIR;
use crate::tests::test_utils::write_file;
use crate::ResolvedSchemaPath;
use crate::SchemaPathSource;
use std::path::Path;

#[test]
fn explicit_path_takes_precedence_over_app_config() {
    let base_dir = tempfile::tempdir().unwrap();
    write_file(
        base_dir.path(),
        "appconfig.json",
        r#"{ "graphql": { "schema": "from_config" } }"#,
    );

    let resolved = resolve_schema_path(
        base_dir.path(),
        Some(Path::new("explicit")),
    );

    assert_eq!(resolved, ResolvedSchemaPath {
        dir: base_dir.path().join("explicit"),
        source: SchemaPathSource::Explicit,
    });
}

#[test]
fn app_config_with_byte_order_mark_is_read() {
    let base_dir = tempfile::tempdir().unwrap();
    write_file(
        base_dir.path(),
        "appconfig.json",
        "\u{feff}{ \"graphql\": { \"schema\": \"gql\" } }",
    );

    assert_eq!(
        read_app_config_schema_path(base_dir.path()),
        Some("gql".to_string()),
    );
}

#[test]
fn app_config_path_used_without_explicit_path() {
    let base_dir = tempfile::tempdir().unwrap();
    write_file(
        base_dir.path(),
        "appconfig.json",
        r#"{ "name": "my-app", "graphql": { "schema": "src/graphql" } }"#,
    );

    let resolved = resolve_schema_path(base_dir.path(), None);

    assert_eq!(resolved, ResolvedSchemaPath {
        dir: base_dir.path().join("src/graphql"),
        source: SchemaPathSource::AppConfig,
    });
}

#[test]
fn default_dir_used_without_app_config() {
    let base_dir = tempfile::tempdir().unwrap();

    let resolved = resolve_schema_path(base_dir.path(), None);

    assert_eq!(resolved, ResolvedSchemaPath {
        dir: base_dir.path().join(DEFAULT_SCHEMA_DIR),
        source: SchemaPathSource::Default,
    });
}

#[test]
fn empty_explicit_path_is_treated_as_absent() {
    let base_dir = tempfile::tempdir().unwrap();
    write_file(
        base_dir.path(),
        "appconfig.json",
        r#"{ "graphql": { "schema": "from_config" } }"#,
    );

    let resolved = resolve_schema_path(base_dir.path(), Some(Path::new("")));

    assert_eq!(resolved.source, SchemaPathSource::AppConfig);
    assert_eq!(resolved.dir, base_dir.path().join("from_config"));
}

#[test]
fn absolute_explicit_path_ignores_base_dir() {
    let base_dir = tempfile::tempdir().unwrap();
    let other_dir = tempfile::tempdir().unwrap();

    let resolved = resolve_schema_path(base_dir.path(), Some(other_dir.path()));

    assert_eq!(resolved.dir, other_dir.path());
    assert_eq!(resolved.source, SchemaPathSource::Explicit);
}

mod app_config_without_override {
    use super::*;

    fn assert_no_override(app_config_content: &str) {
        let base_dir = tempfile::tempdir().unwrap();
        write_file(base_dir.path(), "appconfig.json", app_config_content);

        assert_eq!(read_app_config_schema_path(base_dir.path()), None);
        assert_eq!(
            resolve_schema_path(base_dir.path(), None).source,
            SchemaPathSource::Default,
        );
    }

    #[test]
    fn no_graphql_section() {
        assert_no_override(r#"{ "name": "my-app" }"#);
    }

    #[test]
    fn graphql_section_without_schema() {
        assert_no_override(r#"{ "graphql": { "endpoint": "/graphql" } }"#);
    }

    #[test]
    fn empty_schema_path() {
        assert_no_override(r#"{ "graphql": { "schema": "" } }"#);
    }

    #[test]
    fn non_string_schema_path() {
        assert_no_override(r#"{ "graphql": { "schema": 42 } }"#);
    }

    #[test]
    fn malformed_json() {
        assert_no_override("{ this is not json");
    }

    #[test]
    fn non_object_json() {
        assert_no_override("[1, 2, 3]");
    }

    #[test]
    fn unreadable_app_config() {
        let base_dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(base_dir.path().join("appconfig.json")).unwrap();

        assert_eq!(read_app_config_schema_path(base_dir.path()), None);
        assert_eq!(
            resolve_schema_path(base_dir.path(), None).source,
            SchemaPathSource::Default,
        );
    }
}
