#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;

use mansnip_core::{EngineConfig, EngineError, ProcessEngine, SnippetEngine, SnippetQuery};
use tempfile::TempDir;

fn stub_engine(dir: &TempDir, body: &str) -> ProcessEngine {
    let path = dir.path().join("mansnip");
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("failed to write stub engine");
    let mut perms = fs::metadata(&path)
        .expect("failed to stat stub engine")
        .permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).expect("failed to mark stub engine executable");
    ProcessEngine::new(path)
}

fn query(section: &str, manpage: &str, term: &str) -> SnippetQuery {
    SnippetQuery::new(section.to_string(), manpage.to_string(), term.to_string())
}

#[test]
fn passes_section_page_and_query_in_order() {
    let dir = TempDir::new().expect("tempdir");
    let engine = stub_engine(&dir, r#"echo "$@""#);

    let text = engine
        .snippet(&query("3", "printf", "format"), &EngineConfig::contextual())
        .expect("stub engine should succeed");

    assert_eq!(text, "3 printf format");
}

#[test]
fn omits_section_argument_when_empty() {
    let dir = TempDir::new().expect("tempdir");
    let engine = stub_engine(&dir, r#"echo "$@""#);

    let text = engine
        .snippet(&query("", "ls", "sort"), &EngineConfig::contextual())
        .expect("stub engine should succeed");

    assert_eq!(text, "ls sort");
}

#[test]
fn exports_contextual_flag_to_the_extractor() {
    let dir = TempDir::new().expect("tempdir");
    let engine = stub_engine(&dir, r#"echo "MANSNIP_LLM=${MANSNIP_LLM:-unset}""#);

    let text = engine
        .snippet(&query("", "ls", "sort"), &EngineConfig::contextual())
        .expect("stub engine should succeed");

    assert_eq!(text, "MANSNIP_LLM=1");
}

#[test]
fn preserves_interior_newlines_and_trims_trailing_ones() {
    let dir = TempDir::new().expect("tempdir");
    let engine = stub_engine(&dir, r"printf 'first line\nsecond line\n'");

    let text = engine
        .snippet(&query("", "ls", "sort"), &EngineConfig::contextual())
        .expect("stub engine should succeed");

    assert_eq!(text, "first line\nsecond line");
}

#[test]
fn surfaces_stderr_verbatim_on_failure() {
    let dir = TempDir::new().expect("tempdir");
    let engine = stub_engine(&dir, r#"echo "ambiguous page" >&2; exit 1"#);

    let err = engine
        .snippet(&query("3", "printf", "format"), &EngineConfig::contextual())
        .expect_err("stub engine should fail");

    assert_eq!(err, EngineError::Extraction("ambiguous page".to_string()));
}

#[test]
fn reports_exit_status_when_stderr_is_silent() {
    let dir = TempDir::new().expect("tempdir");
    let engine = stub_engine(&dir, "exit 2");

    let err = engine
        .snippet(&query("", "ls", "sort"), &EngineConfig::contextual())
        .expect_err("stub engine should fail");

    match err {
        EngineError::Extraction(message) => {
            assert!(message.contains("exited with"), "unexpected message: {message}");
        }
        other => panic!("expected extraction failure, got {other:?}"),
    }
}

#[test]
fn maps_missing_executable_to_spawn_failure() {
    let dir = TempDir::new().expect("tempdir");
    let engine = ProcessEngine::new(dir.path().join("missing-extractor"));

    let err = engine
        .snippet(&query("", "ls", "sort"), &EngineConfig::contextual())
        .expect_err("missing executable should fail to spawn");

    assert!(matches!(err, EngineError::Spawn { .. }), "got {err:?}");
}
