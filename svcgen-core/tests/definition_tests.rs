//! Definition loading error messages and atomic save behaviour.

use assert_fs::prelude::*;
use predicates::prelude::predicate;
use svcgen_core::{definition, DefinitionError, ServiceName};

const ECHO_YAML: &str = "\
name: echo
package: echo
import_path: github.com/acme/echo-service
methods:
  - name: Louder
    request: LouderRequest
    response: EchoResponse
    http:
      - verb: post
        path: /louder
  - name: Echo
    request: EchoRequest
    response: EchoResponse
";

// ---------------------------------------------------------------------------
// 1. Load error messages
// ---------------------------------------------------------------------------

#[test]
fn load_missing_definition_returns_not_found() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let path = dir.path().join("echo.yaml");
    let err = definition::load_at(&path).unwrap_err();
    assert!(matches!(err, DefinitionError::NotFound { .. }), "got: {err}");
    assert!(err.to_string().contains("echo.yaml"));
}

#[test]
fn load_corrupt_yaml_returns_parse_error_with_path() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("echo.yaml");
    file.write_str(": : corrupt : yaml : !!!\n  - broken: [unclosed")
        .expect("write");

    let err = definition::load_at(file.path()).unwrap_err();
    assert!(matches!(err, DefinitionError::Parse { .. }), "got: {err}");
    assert!(err.to_string().contains("echo.yaml"));
}

#[test]
fn load_missing_required_field_returns_parse_error() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("echo.yaml");
    file.write_str("name: echo\n").expect("write");

    let err = definition::load_at(file.path()).unwrap_err();
    assert!(matches!(err, DefinitionError::Parse { .. }), "got: {err}");
}

#[test]
fn load_valid_definition() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("echo.yaml");
    file.write_str(ECHO_YAML).expect("write");

    let def = definition::load_at(file.path()).expect("load");
    assert_eq!(def.name, ServiceName::from("echo"));
    assert_eq!(def.methods.len(), 2);
    assert_eq!(def.methods[0].http[0].path, "/louder");
    assert!(def.methods[1].http.is_empty());
}

#[test]
fn load_invalid_service_name_is_rejected() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("bad.yaml");
    file.write_str(&ECHO_YAML.replace("name: echo", "name: 9lives"))
        .expect("write");

    let err = definition::load_at(file.path()).unwrap_err();
    assert!(matches!(err, DefinitionError::Invalid { .. }), "got: {err}");
}

// ---------------------------------------------------------------------------
// 2. Save
// ---------------------------------------------------------------------------

#[test]
fn save_writes_yaml_and_leaves_no_tmp() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let path = dir.path().join("svc.yaml");
    definition::save_at(&path, &definition::starter("billing")).expect("save");

    dir.child("svc.yaml")
        .assert(predicate::str::contains("name: billing"));
    dir.child("svc.yaml.tmp").assert(predicate::path::missing());
}

#[test]
fn save_overwrites_existing_definition() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let path = dir.path().join("svc.yaml");
    definition::save_at(&path, &definition::starter("first")).expect("save 1");
    definition::save_at(&path, &definition::starter("second")).expect("save 2");

    let loaded = definition::load_at(&path).expect("load");
    assert_eq!(loaded.name, ServiceName::from("second"));
}
