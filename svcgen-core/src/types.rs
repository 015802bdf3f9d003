//! Domain types for svcgen service definitions.
//!
//! All types are serializable/deserializable via serde + serde_yaml.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed name for a generated service (e.g. `Echo`, `user_store`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServiceName(pub String);

impl ServiceName {
    /// Directory name substituted for `NAME` in output path patterns.
    pub fn dir_name(&self) -> String {
        to_snake_case(&self.0).replace('_', "-")
    }

    /// Go package-safe form of the name.
    pub fn package_name(&self) -> String {
        to_snake_case(&self.0).replace('_', "")
    }
}

impl fmt::Display for ServiceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for ServiceName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ServiceName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// A strongly-typed name for an RPC method on a service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MethodName(pub String);

impl MethodName {
    /// `GetUser` / `get_user` → `GetUser`.
    pub fn pascal(&self) -> String {
        to_pascal_case(&self.0)
    }

    /// `GetUser` / `get_user` → `get_user`.
    pub fn snake(&self) -> String {
        to_snake_case(&self.0)
    }
}

impl fmt::Display for MethodName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for MethodName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for MethodName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// HTTP verb an RPC method is exposed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HttpVerb {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl fmt::Display for HttpVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpVerb::Get => write!(f, "GET"),
            HttpVerb::Post => write!(f, "POST"),
            HttpVerb::Put => write!(f, "PUT"),
            HttpVerb::Patch => write!(f, "PATCH"),
            HttpVerb::Delete => write!(f, "DELETE"),
        }
    }
}

// ---------------------------------------------------------------------------
// Definition structs
// ---------------------------------------------------------------------------

/// One HTTP route bound to an RPC method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpBinding {
    #[serde(default)]
    pub verb: HttpVerb,
    pub path: String,
}

/// A single RPC method exposed by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Method {
    pub name: MethodName,
    pub request: String,
    pub response: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub http: Vec<HttpBinding>,
}

/// Root of a service definition YAML file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDefinition {
    pub name: ServiceName,
    /// Go package of the generated protobuf types.
    pub package: String,
    /// Go import path the generated service lives under.
    pub import_path: String,
    #[serde(default)]
    pub methods: Vec<Method>,
}

// ---------------------------------------------------------------------------
// Case helpers
// ---------------------------------------------------------------------------

/// Convert `GetUser`, `getUser`, `get-user` or `get_user` to `get_user`.
pub fn to_snake_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    let mut prev_lower = false;
    for c in s.chars() {
        if c == '-' || c == '_' || c == ' ' {
            if !out.is_empty() && !out.ends_with('_') {
                out.push('_');
            }
            prev_lower = false;
        } else if c.is_uppercase() {
            if prev_lower && !out.ends_with('_') {
                out.push('_');
            }
            out.extend(c.to_lowercase());
            prev_lower = false;
        } else {
            out.push(c);
            prev_lower = c.is_lowercase() || c.is_ascii_digit();
        }
    }
    out.trim_end_matches('_').to_string()
}

/// Convert `get_user` or `getUser` to `GetUser`.
pub fn to_pascal_case(s: &str) -> String {
    to_snake_case(s)
        .split('_')
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
