//! # svcgen-renderer
//!
//! Produces the content of every file in a generated service tree.
//!
//! Files come in two flavours, modelled by [`Renderable`]: template files,
//! regenerated from the data context on every run, and hook files, which are
//! emitted once and then left to the user.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::fs::File;
//! use std::io::Read;
//! use std::path::Path;
//!
//! use svcgen_renderer::{Data, FileKind, TemplateEngine};
//! use svcgen_core::definition;
//!
//! fn hooks_for(root: &Path) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
//!     let def = definition::starter("echo");
//!     let engine = TemplateEngine::new(None)?;
//!     let path = FileKind::Hooks.output_path(root, &def.name);
//!     let prev = File::open(&path).ok();
//!     let mut renderable = FileKind::Hooks.renderable(&engine, prev);
//!     let mut out = Vec::new();
//!     renderable
//!         .render(&path, &Data::from_definition(&def))?
//!         .read_to_end(&mut out)?;
//!     Ok(out)
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;
pub mod hook;
pub mod renderable;
pub mod stream;

pub use context::Data;
pub use engine::TemplateEngine;
pub use error::RenderError;
pub use hook::{HookRenderer, HOOK_PATH, HOOK_TEMPLATE};
pub use renderable::{FileKind, Renderable, TemplateRenderer};
pub use stream::RenderedStream;
