//! [`FileKind`] — the closed set of generated files — and [`Renderable`].
//!
//! # Path mapping
//!
//! | Kind          | Output path (relative to the output root) | On regeneration |
//! |---------------|-------------------------------------------|-----------------|
//! | Hooks         | `NAME/handlers/server/hooks.go`           | preserved       |
//! | Middlewares   | `NAME/handlers/server/middlewares.go`     | preserved       |
//! | Endpoints     | `NAME/svc/endpoints.go`                   | overwritten     |
//! | TransportHttp | `NAME/svc/transport_http.go`              | overwritten     |
//! | ServerMain    | `NAME/cmd/NAME/main.go`                   | overwritten     |

use std::io::Read;
use std::path::{Path, PathBuf};

use svcgen_core::types::ServiceName;

use crate::context::Data;
use crate::engine::{
    TemplateEngine, ENDPOINTS_TEMPLATE, SERVER_MAIN_TEMPLATE, TRANSPORT_HTTP_TEMPLATE,
};
use crate::error::RenderError;
use crate::hook::{HookRenderer, HOOK_PATH, MIDDLEWARES_PATH, MIDDLEWARES_TEMPLATE};
use crate::stream::RenderedStream;

/// Placeholder in path patterns replaced by the service directory name.
pub const NAME_PLACEHOLDER: &str = "NAME";

// ---------------------------------------------------------------------------
// FileKind
// ---------------------------------------------------------------------------

/// Every file the generator produces for a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    Hooks,
    Middlewares,
    Endpoints,
    TransportHttp,
    ServerMain,
}

impl FileKind {
    /// All kinds in a stable order.
    pub fn all() -> &'static [FileKind] {
        &[
            FileKind::Hooks,
            FileKind::Middlewares,
            FileKind::Endpoints,
            FileKind::TransportHttp,
            FileKind::ServerMain,
        ]
    }

    /// Output path pattern with the `NAME` placeholder.
    pub fn path_pattern(&self) -> &'static str {
        match self {
            FileKind::Hooks         => HOOK_PATH,
            FileKind::Middlewares   => MIDDLEWARES_PATH,
            FileKind::Endpoints     => "NAME/svc/endpoints.go",
            FileKind::TransportHttp => "NAME/svc/transport_http.go",
            FileKind::ServerMain    => "NAME/cmd/NAME/main.go",
        }
    }

    /// Whether an existing file of this kind is kept across regenerations.
    pub fn preserves_existing(&self) -> bool {
        matches!(self, FileKind::Hooks | FileKind::Middlewares)
    }

    /// Template backing this kind, if it is template-rendered.
    pub fn template_name(&self) -> Option<&'static str> {
        match self {
            FileKind::Hooks | FileKind::Middlewares => None,
            FileKind::Endpoints     => Some(ENDPOINTS_TEMPLATE),
            FileKind::TransportHttp => Some(TRANSPORT_HTTP_TEMPLATE),
            FileKind::ServerMain    => Some(SERVER_MAIN_TEMPLATE),
        }
    }

    /// Path relative to the output root, with `NAME` substituted.
    pub fn relative_path(&self, service: &ServiceName) -> PathBuf {
        let resolved = self
            .path_pattern()
            .replace(NAME_PLACEHOLDER, &service.dir_name());
        resolved.split('/').collect()
    }

    /// Absolute output path under `root`.
    pub fn output_path(&self, root: &Path, service: &ServiceName) -> PathBuf {
        root.join(self.relative_path(service))
    }

    /// Build the renderer for this kind.
    ///
    /// `prev` is the file's current content and only matters for preserving
    /// kinds; template kinds drop it.
    pub fn renderable<'e, R: Read>(
        &self,
        engine: &'e TemplateEngine,
        prev: Option<R>,
    ) -> Renderable<'e, R> {
        match self {
            FileKind::Hooks => Renderable::Hook(HookRenderer::new(prev)),
            FileKind::Middlewares => {
                Renderable::Hook(HookRenderer::with_default(prev, MIDDLEWARES_TEMPLATE))
            }
            FileKind::Endpoints => {
                Renderable::Template(TemplateRenderer::new(engine, ENDPOINTS_TEMPLATE))
            }
            FileKind::TransportHttp => {
                Renderable::Template(TemplateRenderer::new(engine, TRANSPORT_HTTP_TEMPLATE))
            }
            FileKind::ServerMain => {
                Renderable::Template(TemplateRenderer::new(engine, SERVER_MAIN_TEMPLATE))
            }
        }
    }
}

// ---------------------------------------------------------------------------
// TemplateRenderer
// ---------------------------------------------------------------------------

/// Renders one named template against the data context on every call.
#[derive(Clone, Copy)]
pub struct TemplateRenderer<'e> {
    engine: &'e TemplateEngine,
    name: &'static str,
}

impl<'e> TemplateRenderer<'e> {
    pub fn new(engine: &'e TemplateEngine, name: &'static str) -> Self {
        TemplateRenderer { engine, name }
    }

    /// Rendered output is owned, so it may outlive any borrow of the renderer.
    pub fn render<'s>(&self, _path: &Path, data: &Data) -> Result<RenderedStream<'s>, RenderError> {
        let content = self.engine.render_template(self.name, data)?;
        Ok(RenderedStream::from_string(content))
    }
}

// ---------------------------------------------------------------------------
// Renderable
// ---------------------------------------------------------------------------

/// Produces the content of one output file.
pub enum Renderable<'e, R> {
    /// Regenerated from a template every run.
    Template(TemplateRenderer<'e>),
    /// Emitted once, then preserved.
    Hook(HookRenderer<R>),
}

impl<R: Read> Renderable<'_, R> {
    /// `true` for a hook renderer holding an existing file's content.
    pub fn has_previous(&self) -> bool {
        match self {
            Renderable::Template(_) => false,
            Renderable::Hook(h) => h.has_previous(),
        }
    }

    /// Render the file at `path` from `data`.
    ///
    /// Only the template variant can fail.
    pub fn render(&mut self, path: &Path, data: &Data) -> Result<RenderedStream<'_>, RenderError> {
        match self {
            Renderable::Template(t) => t.render(path, data),
            Renderable::Hook(h) => Ok(h.render(path, data)),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use svcgen_core::definition;

    use crate::hook::HOOK_TEMPLATE;

    type Prev = Cursor<Vec<u8>>;

    #[test]
    fn hooks_output_path_is_correct() {
        let root = PathBuf::from("/out");
        let path = FileKind::Hooks.output_path(&root, &ServiceName::from("foo"));
        assert_eq!(path, PathBuf::from("/out/foo/handlers/server/hooks.go"));
    }

    #[test]
    fn server_main_substitutes_every_placeholder() {
        let rel = FileKind::ServerMain.relative_path(&ServiceName::from("UserStore"));
        assert_eq!(rel, PathBuf::from("user-store/cmd/user-store/main.go"));
    }

    #[test]
    fn only_hook_files_are_preserved() {
        for kind in FileKind::all() {
            assert_eq!(
                kind.preserves_existing(),
                kind.template_name().is_none(),
                "preserve/template mismatch for {kind:?}"
            );
        }
    }

    #[test]
    fn template_kinds_ignore_previous_content() {
        let engine = TemplateEngine::new(None).unwrap();
        let data = Data::from_definition(&definition::starter("echo"));
        let mut r = FileKind::Endpoints.renderable(&engine, Some(Cursor::new(b"old".to_vec())));
        let out = r.render(Path::new(""), &data).unwrap().into_bytes().unwrap();
        assert_ne!(out, b"old");
        assert!(String::from_utf8(out).unwrap().contains("package svc"));
    }

    #[test]
    fn hooks_kind_without_previous_renders_default() {
        let engine = TemplateEngine::new(None).unwrap();
        let mut r = FileKind::Hooks.renderable::<Prev>(&engine, None);
        let out = r
            .render(Path::new(""), &Data::default())
            .unwrap()
            .into_bytes()
            .unwrap();
        assert_eq!(out, HOOK_TEMPLATE.as_bytes());
    }

    #[test]
    fn middlewares_kind_preserves_previous() {
        let engine = TemplateEngine::new(None).unwrap();
        let mut r = FileKind::Middlewares.renderable(&engine, Some(Cursor::new(b"kept".to_vec())));
        let out = r
            .render(Path::new(""), &Data::default())
            .unwrap()
            .into_bytes()
            .unwrap();
        assert_eq!(out, b"kept");
    }

    #[test]
    fn template_variant_renders_through_renderable() {
        let engine = TemplateEngine::new(None).unwrap();
        let data = Data::from_definition(&definition::starter("echo"));
        let mut r: Renderable<'_, Prev> =
            Renderable::Template(TemplateRenderer::new(&engine, TRANSPORT_HTTP_TEMPLATE));
        assert!(!r.has_previous());
        let stream = r.render(Path::new("echo/svc/transport_http.go"), &data).unwrap();
        assert!(!stream.is_passthrough());
        let text = String::from_utf8(stream.into_bytes().unwrap()).unwrap();
        assert!(text.contains("/status"));
    }

    #[test]
    fn has_previous_reflects_existing_content() {
        let engine = TemplateEngine::new(None).unwrap();
        assert!(!FileKind::Hooks.renderable::<Prev>(&engine, None).has_previous());
        let r = FileKind::Hooks.renderable(&engine, Some(Cursor::new(b"x".to_vec())));
        assert!(r.has_previous());
    }
}
