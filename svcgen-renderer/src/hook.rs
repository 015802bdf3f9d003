//! Hook files — generated once, then owned by the user.
//!
//! A [`HookRenderer`] is built per service per generation run. When the file
//! already exists the orchestrator hands its content in as a reader and the
//! renderer forwards that reader untouched; otherwise it emits the compiled-in
//! default. The decision is fixed at construction and never depends on the
//! path or data passed to [`HookRenderer::render`].

use std::io::Read;
use std::path::Path;

use crate::context::Data;
use crate::stream::RenderedStream;

/// Output path pattern of the hook file; `NAME` is the service directory.
pub const HOOK_PATH: &str = "NAME/handlers/server/hooks.go";

/// Output path pattern of the middlewares file; `NAME` is the service directory.
pub const MIDDLEWARES_PATH: &str = "NAME/handlers/server/middlewares.go";

/// Default content of a brand-new hook file.
pub const HOOK_TEMPLATE: &str = include_str!("templates/hooks.go");

/// Default content of a brand-new middlewares file.
pub const MIDDLEWARES_TEMPLATE: &str = include_str!("templates/middlewares.go");

/// Renders a user-owned file: previous content if any, else a static default.
#[derive(Debug)]
pub struct HookRenderer<R> {
    prev: Option<R>,
    default: &'static str,
}

impl<R: Read> HookRenderer<R> {
    /// A hook renderer falling back to [`HOOK_TEMPLATE`].
    pub fn new(prev: Option<R>) -> Self {
        Self::with_default(prev, HOOK_TEMPLATE)
    }

    /// A renderer for any preserved file with its own default text.
    pub fn with_default(prev: Option<R>, default: &'static str) -> Self {
        HookRenderer { prev, default }
    }

    /// `true` when constructed with previous content.
    pub fn has_previous(&self) -> bool {
        self.prev.is_some()
    }

    /// Return the previous content stream, or a fresh stream over the default.
    ///
    /// The path and data arguments are ignored. The previous stream is forwarded by
    /// reference and never buffered, so it can be drained once: a second call
    /// hands back the same reader, already at end of input.
    pub fn render(&mut self, _path: &Path, _data: &Data) -> RenderedStream<'_> {
        match self.prev.as_mut() {
            Some(prev) => RenderedStream::Passthrough(prev),
            None => RenderedStream::from_static(self.default),
        }
    }
}
