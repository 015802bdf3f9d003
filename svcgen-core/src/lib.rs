//! svcgen core library — service definition types, loading, errors.
//!
//! - [`types`] — newtypes and definition structs
//! - [`error`] — [`DefinitionError`]
//! - [`definition`] — load / save / validate / discover

pub mod definition;
pub mod error;
pub mod types;

pub use error::DefinitionError;
pub use types::{HttpBinding, HttpVerb, Method, MethodName, ServiceDefinition, ServiceName};
