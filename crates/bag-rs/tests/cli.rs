//! Command handler tests for the `bag` binary.

use bag_rs::SchemaError;
use bag_rs::cli::{ApplyArgs, RenderArgs, RenderFormat, apply, render};
use bag_rs_test_utils::{
    ADDRESS_WITH_REQUIRED_STREET_JSON5, PERSON_WITH_DEFAULTS_JSON5, write_json5,
};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tempfile::TempDir;

/// Text rendering prints one line per field with nested indentation.
#[test]
fn render_prints_text() {
    let temp = TempDir::new().expect("tmp");
    let schema = temp.path().join("bag.json5");
    write_json5(&schema, ADDRESS_WITH_REQUIRED_STREET_JSON5);

    let output = render(&RenderArgs {
        schema,
        format: RenderFormat::Text,
    })
    .expect("render");

    assert_eq!(
        output,
        "address: {\n  number: { required: false, defaultValue: null }\n  street: {\n    type: { required: true, defaultValue: street }\n    name: { required: true, defaultValue: null }\n  }\n}\n"
    );
}

/// JSON rendering prints the compiled declarations.
#[test]
fn render_prints_json() {
    let temp = TempDir::new().expect("tmp");
    let schema = temp.path().join("bag.json5");
    write_json5(&schema, "{ name: { required: true, defaultValue: 'John', extra: 1 } }");

    let output = render(&RenderArgs {
        schema,
        format: RenderFormat::Json,
    })
    .expect("render");

    let value: Value = serde_json::from_str(&output).expect("json");
    assert_eq!(
        value,
        json!({ "name": { "required": true, "defaultValue": "John" } })
    );
}

/// Apply fills defaults and prints the completed config.
#[test]
fn apply_prints_normalized_config() {
    let temp = TempDir::new().expect("tmp");
    let schema = temp.path().join("bag.json5");
    let config = temp.path().join("config.json5");
    write_json5(&schema, PERSON_WITH_DEFAULTS_JSON5);
    write_json5(&config, "{ fullname: { firstname: 'Jane' } }");

    let output = apply(&ApplyArgs {
        schema,
        config,
        compact: true,
    })
    .expect("apply");

    assert!(output.ends_with('\n'));
    assert_eq!(output.lines().count(), 1);
    let value: Value = serde_json::from_str(&output).expect("json");
    assert_eq!(
        value,
        json!({
            "fullname": { "firstname": "Jane", "lastname": "Doe" },
            "address": { "number": 0, "type": "street" }
        })
    );
}

/// Validation failures keep the structured error behind the context.
#[test]
fn apply_reports_violations_with_context() {
    let temp = TempDir::new().expect("tmp");
    let schema = temp.path().join("bag.json5");
    let config = temp.path().join("config.json5");
    write_json5(&schema, ADDRESS_WITH_REQUIRED_STREET_JSON5);
    write_json5(&config, "{}");

    let err = apply(&ApplyArgs {
        schema,
        config,
        compact: false,
    })
    .unwrap_err();

    assert!(err.to_string().contains("does not satisfy schema"));
    let source = err.downcast_ref::<SchemaError>().expect("schema error");
    assert!(matches!(
        source,
        SchemaError::RequiredSubFieldMissing { field, sub_field, .. }
            if field == "address" && sub_field == "name"
    ));
}

/// Missing files are reported with the offending path.
#[test]
fn apply_reports_missing_schema() {
    let temp = TempDir::new().expect("tmp");
    let schema = temp.path().join("missing.json5");

    let err = apply(&ApplyArgs {
        schema,
        config: temp.path().join("config.json5"),
        compact: false,
    })
    .unwrap_err();

    assert!(err.to_string().contains("failed to load schema"));
    assert!(matches!(
        err.downcast_ref::<SchemaError>(),
        Some(SchemaError::ReadFailed(_))
    ));
}
