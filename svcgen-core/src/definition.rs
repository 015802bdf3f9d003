//! Service definition files.
//!
//! A definition is a single YAML document describing one service:
//!
//! ```yaml
//! name: echo
//! package: echo
//! import_path: github.com/acme/echo-service
//! methods:
//!   - name: Louder
//!     request: LouderRequest
//!     response: EchoResponse
//!     http:
//!       - verb: post
//!         path: /louder
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::DefinitionError;
use crate::types::{HttpBinding, HttpVerb, Method, MethodName, ServiceDefinition, ServiceName};

// ---------------------------------------------------------------------------
// 1. Load
// ---------------------------------------------------------------------------

/// Load and validate a service definition from `path`.
///
/// Returns `DefinitionError::NotFound` if absent,
/// `DefinitionError::Parse` (with path + line context) if malformed YAML,
/// `DefinitionError::Invalid` if it fails [`validate`].
pub fn load_at(path: &Path) -> Result<ServiceDefinition, DefinitionError> {
    if !path.exists() {
        return Err(DefinitionError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = std::fs::read_to_string(path)?;
    let definition: ServiceDefinition =
        serde_yaml::from_str(&contents).map_err(|e| DefinitionError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
    validate(&definition)?;
    Ok(definition)
}

/// All `*.yaml` / `*.yml` files directly inside `dir`, sorted by file name.
pub fn discover_at(dir: &Path) -> Result<Vec<PathBuf>, DefinitionError> {
    if !dir.exists() {
        return Err(DefinitionError::NotFound {
            path: dir.to_path_buf(),
        });
    }
    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().map(|t| t.is_file()).unwrap_or(false))
        .map(|e| e.path())
        .filter(|p| {
            matches!(
                p.extension().and_then(|s| s.to_str()),
                Some("yaml") | Some("yml")
            )
        })
        .collect();
    paths.sort();
    Ok(paths)
}

// ---------------------------------------------------------------------------
// 2. Validate
// ---------------------------------------------------------------------------

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

fn invalid(reason: impl Into<String>) -> DefinitionError {
    DefinitionError::Invalid {
        reason: reason.into(),
    }
}

/// Reject definitions the generator cannot turn into a service tree.
pub fn validate(definition: &ServiceDefinition) -> Result<(), DefinitionError> {
    if !is_identifier(&definition.name.0) {
        return Err(invalid(format!(
            "service name '{}' must start with a letter and contain only letters, digits, '_' or '-'",
            definition.name
        )));
    }
    if definition.package.trim().is_empty() {
        return Err(invalid("package must not be empty"));
    }

    let mut seen = HashSet::new();
    for method in &definition.methods {
        if !is_identifier(&method.name.0) || method.name.0.contains('-') {
            return Err(invalid(format!(
                "method name '{}' is not a valid identifier",
                method.name
            )));
        }
        if !seen.insert(method.name.pascal()) {
            return Err(invalid(format!("duplicate method '{}'", method.name)));
        }
        for binding in &method.http {
            if !binding.path.starts_with('/') {
                return Err(invalid(format!(
                    "http path '{}' on method '{}' must start with '/'",
                    binding.path, method.name
                )));
            }
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// 3. Save (atomic)
// ---------------------------------------------------------------------------

/// Atomically save a definition to `path`.
///
/// Write flow: serialize → `<file>.tmp` sibling → `rename`.
pub fn save_at(path: &Path, definition: &ServiceDefinition) -> Result<(), DefinitionError> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "definition.yaml".to_string());
    let tmp_path = path.with_file_name(format!("{file_name}.tmp"));

    let yaml = serde_yaml::to_string(definition)?;
    std::fs::write(&tmp_path, yaml)?;
    if let Err(e) = std::fs::rename(&tmp_path, path) {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(e.into());
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// 4. Starter definition
// ---------------------------------------------------------------------------

/// A minimal single-method definition used by `svcgen init`.
pub fn starter(name: &str) -> ServiceDefinition {
    let service = ServiceName::from(name);
    let package = service.package_name();
    ServiceDefinition {
        import_path: format!("github.com/example/{}-service", service.dir_name()),
        name: service,
        package,
        methods: vec![Method {
            name: MethodName::from("Status"),
            request: "StatusRequest".to_string(),
            response: "StatusResponse".to_string(),
            http: vec![HttpBinding {
                verb: HttpVerb::Get,
                path: "/status".to_string(),
            }],
        }],
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn starter_definition_is_valid() {
        let def = starter("UserStore");
        validate(&def).expect("starter must validate");
        assert_eq!(def.package, "userstore");
        assert_eq!(def.import_path, "github.com/example/user-store-service");
    }

    #[test]
    fn save_then_load_roundtrip() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("defs").join("echo.yaml");
        let def = starter("echo");
        save_at(&path, &def).unwrap();
        assert_eq!(load_at(&path).unwrap(), def);
        assert!(!tmp.path().join("defs").join("echo.yaml.tmp").exists());
    }

    #[test]
    fn duplicate_methods_rejected() {
        let mut def = starter("echo");
        let dup = def.methods[0].clone();
        def.methods.push(dup);
        let err = validate(&def).unwrap_err();
        assert!(err.to_string().contains("duplicate method"), "got: {err}");
    }

    #[test]
    fn snake_and_pascal_spellings_collide() {
        let mut def = starter("echo");
        let mut other = def.methods[0].clone();
        other.name = MethodName::from("status");
        def.methods.push(other);
        assert!(validate(&def).is_err());
    }

    #[test]
    fn relative_http_path_rejected() {
        let mut def = starter("echo");
        def.methods[0].http[0].path = "status".to_string();
        assert!(matches!(
            validate(&def),
            Err(DefinitionError::Invalid { .. })
        ));
    }

    #[test]
    fn discover_finds_yaml_files_sorted() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("b.yml"), "").unwrap();
        std::fs::write(tmp.path().join("a.yaml"), "").unwrap();
        std::fs::write(tmp.path().join("notes.txt"), "").unwrap();
        let found = discover_at(tmp.path()).unwrap();
        let names: Vec<_> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.yaml", "b.yml"]);
    }
}
