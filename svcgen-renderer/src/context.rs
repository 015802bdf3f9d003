//! Data context — serializable rendering payload built from a [`ServiceDefinition`].

use serde::{Deserialize, Serialize};

use svcgen_core::types::{to_pascal_case, ServiceDefinition};

use crate::error::RenderError;

/// Generation-time data handed to every renderable file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Data {
    /// Service name exactly as declared.
    pub service_name: String,
    /// PascalCase service name, used for Go type names.
    pub service_pascal: String,
    /// Directory substituted for `NAME` in output paths.
    pub dir_name: String,
    /// Go package of the protobuf types.
    pub package_name: String,
    /// Go import path of the generated service.
    pub import_path: String,
    pub methods: Vec<MethodCtx>,
    pub meta: MetaCtx,
}

/// One RPC method.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MethodCtx {
    pub name: String,
    pub snake_name: String,
    pub request_type: String,
    pub response_type: String,
    pub http: Vec<HttpCtx>,
}

/// One HTTP route for a method.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HttpCtx {
    pub verb: String,
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MetaCtx {
    pub generator_version: String,
}

impl Data {
    /// Build a [`Data`] context from a validated [`ServiceDefinition`].
    pub fn from_definition(definition: &ServiceDefinition) -> Self {
        let methods = definition
            .methods
            .iter()
            .map(|m| MethodCtx {
                name: m.name.pascal(),
                snake_name: m.name.snake(),
                request_type: m.request.clone(),
                response_type: m.response.clone(),
                http: m
                    .http
                    .iter()
                    .map(|b| HttpCtx {
                        verb: b.verb.to_string(),
                        path: b.path.clone(),
                    })
                    .collect(),
            })
            .collect();

        Data {
            service_name: definition.name.0.clone(),
            service_pascal: to_pascal_case(&definition.name.0),
            dir_name: definition.name.dir_name(),
            package_name: definition.package.clone(),
            import_path: definition.import_path.clone(),
            methods,
            meta: MetaCtx {
                generator_version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }

    /// Convert to a [`tera::Context`] for rendering.
    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        tera::Context::from_serialize(self).map_err(RenderError::from)
    }
}

impl Default for Data {
    /// An empty context: no service, no methods.
    fn default() -> Self {
        Data {
            service_name: String::new(),
            service_pascal: String::new(),
            dir_name: String::new(),
            package_name: String::new(),
            import_path: String::new(),
            methods: Vec::new(),
            meta: MetaCtx {
                generator_version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }
}
