use argbind::args::{Args, ArgsError};
use argbind::config::{ConfigError, FieldDecl, SchemaFile};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_schema(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("schema.toml");
    fs::write(&path, content).expect("failed to write schema");
    path
}

/// Test that a well-formed schema file loads in declaration order.
#[test]
fn test_load_schema_from_file() {
    let dir = TempDir::new().unwrap();
    let path = write_schema(
        &dir,
        r#"
[[fields]]
name = "logging"
flag = "l"
kind = "boolean"

[[fields]]
name = "port"
flag = "p"
kind = "integer"
"#,
    );

    let schema = SchemaFile::load_from(&path).unwrap();
    assert_eq!(
        schema.fields,
        vec![
            FieldDecl {
                name: "logging".to_string(),
                flag: Some("l".to_string()),
                kind: "boolean".to_string(),
            },
            FieldDecl {
                name: "port".to_string(),
                flag: Some("p".to_string()),
                kind: "integer".to_string(),
            },
        ]
    );
}

/// Test that a loaded schema drives the parser.
#[test]
fn test_loaded_schema_parses_arguments() {
    let dir = TempDir::new().unwrap();
    let path = write_schema(
        &dir,
        r#"
[[fields]]
name = "group"
flag = "g"
kind = "string-list"
"#,
    );

    let schema = SchemaFile::load_from(&path).unwrap().to_schema();
    let arguments: Vec<String> = ["-g", "a", "b"].into_iter().map(String::from).collect();
    let options = Args::default().parse(&schema, &arguments).unwrap();
    assert_eq!(options.string_list("group").unwrap(), ["a", "b"]);
}

/// Test that a field without a flag loads but fails at parse time.
#[test]
fn test_missing_flag_surfaces_at_parse_time() {
    let dir = TempDir::new().unwrap();
    let path = write_schema(
        &dir,
        r#"
[[fields]]
name = "port"
kind = "integer"
"#,
    );

    let schema = SchemaFile::load_from(&path).unwrap().to_schema();
    let err = Args::default().parse(&schema, &[]).unwrap_err();
    assert!(matches!(err, ArgsError::MissingSchemaAnnotation { ref field } if field == "port"));
}

/// Test that duplicate field names are rejected.
#[test]
fn test_validation_fails_duplicate_field() {
    let dir = TempDir::new().unwrap();
    let path = write_schema(
        &dir,
        r#"
[[fields]]
name = "port"
flag = "p"
kind = "integer"

[[fields]]
name = "port"
flag = "q"
kind = "integer"
"#,
    );

    match SchemaFile::load_from(&path).unwrap_err() {
        ConfigError::ValidationError { message } => {
            assert!(message.contains("more than once"));
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

/// Test that flags written with a dash are rejected.
#[test]
fn test_validation_fails_dashed_flag() {
    let schema = SchemaFile {
        fields: vec![FieldDecl {
            name: "port".to_string(),
            flag: Some("-p".to_string()),
            kind: "integer".to_string(),
        }],
    };

    let result = schema.validate();
    assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
}

/// Test that flags starting with a digit are rejected.
#[test]
fn test_validation_fails_digit_flag() {
    let dir = TempDir::new().unwrap();
    let path = write_schema(
        &dir,
        r#"
[[fields]]
name = "group"
flag = "g"
kind = "string-list"

[[fields]]
name = "one"
flag = "1"
kind = "boolean"
"#,
    );

    match SchemaFile::load_from(&path).unwrap_err() {
        ConfigError::ValidationError { message } => {
            assert!(message.contains("'one'"));
            assert!(message.contains("digit"));
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

/// Test that invalid TOML reports a parse error with the path.
#[test]
fn test_parse_error_includes_path() {
    let dir = TempDir::new().unwrap();
    let path = write_schema(&dir, "[[fields]\nname = ");

    let err = SchemaFile::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("schema.toml"));
}

/// Test that a missing file reports a read error.
#[test]
fn test_read_error_for_missing_file() {
    let err = SchemaFile::load_from(Path::new("/nonexistent/argbind/schema.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::ReadError { .. }));
}

/// Test that the default path ends with the expected filename.
#[test]
fn test_config_path_ends_with_expected() {
    let path = SchemaFile::config_path();
    assert!(path.ends_with("argbind/schema.toml"));
}
