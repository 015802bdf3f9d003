//! Hook preservation contract: default on first generation, pass-through
//! afterwards, independent of output path and data context.

use std::io::{Cursor, Read};
use std::path::Path;

use rstest::rstest;
use svcgen_core::definition;
use svcgen_renderer::{Data, FileKind, HookRenderer, Renderable, TemplateEngine, HOOK_TEMPLATE};

const USER_EDIT: &[u8] = b"// user edit\nfunc CustomHook() {}\n";

fn empty_context() -> Data {
    Data::default()
}

fn echo_context() -> Data {
    Data::from_definition(&definition::starter("echo"))
}

fn drain(mut r: impl Read) -> Vec<u8> {
    let mut out = Vec::new();
    r.read_to_end(&mut out).expect("read rendered stream");
    out
}

#[test]
fn fresh_service_gets_default_template() {
    let mut hook = HookRenderer::<Cursor<Vec<u8>>>::new(None);
    let out = drain(hook.render(
        Path::new("services/foo/handlers/server/hooks.go"),
        &empty_context(),
    ));
    assert_eq!(out, HOOK_TEMPLATE.as_bytes());
    assert_eq!(String::from_utf8(out).unwrap(), HOOK_TEMPLATE);
}

#[test]
fn existing_hook_passes_through_byte_for_byte() {
    let mut hook = HookRenderer::new(Some(Cursor::new(USER_EDIT.to_vec())));
    let out = drain(hook.render(Path::new("anywhere.go"), &echo_context()));
    assert_eq!(out, USER_EDIT);
}

#[test]
fn second_render_of_previous_content_is_exhausted() {
    let mut hook = HookRenderer::new(Some(Cursor::new(USER_EDIT.to_vec())));
    let first = drain(hook.render(Path::new("a.go"), &empty_context()));
    let second = drain(hook.render(Path::new("a.go"), &empty_context()));
    assert_eq!(first, USER_EDIT);
    assert!(second.is_empty(), "previous content can only be consumed once");
}

#[test]
fn previous_stream_is_not_read_until_consumed() {
    let mut src = Cursor::new(USER_EDIT.to_vec());
    {
        let mut hook = HookRenderer::new(Some(&mut src));
        let _stream = hook.render(Path::new("a.go"), &empty_context());
    }
    assert_eq!(src.position(), 0, "render must not read the previous stream");
}

#[test]
fn binary_previous_content_is_not_validated() {
    let bytes = vec![0xff, 0xfe, 0x00, b'\r', b'\n', 0x80];
    let mut hook = HookRenderer::new(Some(Cursor::new(bytes.clone())));
    assert_eq!(drain(hook.render(Path::new("x"), &empty_context())), bytes);
}

#[rstest]
#[case("services/foo/handlers/server/hooks.go")]
#[case("")]
#[case("/abs/path/with spaces/hooks.go")]
#[case("relative/../weird/./hooks.go")]
fn default_outcome_ignores_path_and_context(#[case] path: &str) {
    for data in [empty_context(), echo_context()] {
        let mut hook = HookRenderer::<Cursor<Vec<u8>>>::new(None);
        assert_eq!(drain(hook.render(Path::new(path), &data)), HOOK_TEMPLATE.as_bytes());
    }
}

#[rstest]
#[case("services/foo/handlers/server/hooks.go")]
#[case("")]
#[case("/abs/path/with spaces/hooks.go")]
fn passthrough_outcome_ignores_path_and_context(#[case] path: &str) {
    for data in [empty_context(), echo_context()] {
        let mut hook = HookRenderer::new(Some(Cursor::new(USER_EDIT.to_vec())));
        assert_eq!(drain(hook.render(Path::new(path), &data)), USER_EDIT);
    }
}

#[test]
fn renderable_hook_variant_never_errors() {
    let engine = TemplateEngine::new(None).expect("engine");
    let mut renderable: Renderable<'_, Cursor<Vec<u8>>> = FileKind::Hooks.renderable(&engine, None);
    let stream = renderable
        .render(Path::new("svc/handlers/server/hooks.go"), &empty_context())
        .expect("hook rendering cannot fail");
    assert_eq!(drain(stream), HOOK_TEMPLATE.as_bytes());
}

#[test]
fn user_template_override_replaces_embedded_default() {
    let dir = tempfile::TempDir::new().expect("tempdir");
    let svc_dir = dir.path().join("svc");
    std::fs::create_dir_all(&svc_dir).expect("mkdir");
    std::fs::write(
        svc_dir.join("endpoints.go.tera"),
        "// custom endpoints for {{ service_name }}\r\n",
    )
    .expect("write");

    let engine = TemplateEngine::new(Some(dir.path())).expect("engine");
    let mut renderable = FileKind::Endpoints.renderable::<Cursor<Vec<u8>>>(&engine, None);
    let out = drain(
        renderable
            .render(Path::new("echo/svc/endpoints.go"), &echo_context())
            .expect("render"),
    );
    assert_eq!(out, b"// custom endpoints for echo\n");
}
