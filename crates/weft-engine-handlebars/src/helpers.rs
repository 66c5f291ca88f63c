/*
 * helpers.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Helper script loading.
 */

//! Helper script loading.
//!
//! Helpers extend template syntax with named functions. They are rhai
//! scripts discovered recursively under the configured helpers
//! directory; each file registers one helper named after its file stem,
//! so `format_price.rhai` provides `{{format_price ...}}`. Registering
//! a name that already exists overwrites the earlier helper, which makes
//! re-initialisation in the same process harmless.

use std::path::{Path, PathBuf};

use handlebars::Handlebars;
use tracing::debug;
use walkdir::WalkDir;

use weft_core::engine::EngineError;

use crate::HELPER_EXTENSION;

/// Register every helper script found under `dir`.
///
/// `None` means no helpers are configured; that is valid and yields an
/// empty list. A configured directory must exist on disk.
///
/// Returns the files activated, in walk order. Enumeration order is
/// filesystem-dependent; callers must not rely on it. The first
/// enumeration or registration failure aborts the walk; helpers
/// registered before the failure stay registered.
pub(crate) fn load_all(
    registry: &mut Handlebars<'static>,
    dir: Option<&Path>,
) -> Result<Vec<PathBuf>, EngineError> {
    let Some(dir) = dir else {
        return Ok(Vec::new());
    };

    if !dir.is_dir() {
        return Err(EngineError::config(format!(
            "helpers path is not a directory: {}",
            dir.display()
        )));
    }

    let mut loaded = Vec::new();

    for entry in WalkDir::new(dir).follow_links(false) {
        let entry = entry.map_err(std::io::Error::from)?;
        let path = entry.path();

        if !entry.file_type().is_file() {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some(HELPER_EXTENSION) {
            continue;
        }

        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();

        registry
            .register_script_helper_file(&name, path)
            .map_err(|e| EngineError::helper(&name, e.to_string()))?;

        debug!(helper = %name, path = %path.display(), "Registered script helper");
        loaded.push(path.to_path_buf());
    }

    Ok(loaded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;

    fn write_helper(dir: &Path, name: &str, script: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, script).unwrap();
        path
    }

    #[test]
    fn test_load_with_no_directory_is_noop() {
        let mut registry = Handlebars::new();
        let loaded = load_all(&mut registry, None).unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_load_missing_directory_is_config_error() {
        let mut registry = Handlebars::new();
        let err = load_all(&mut registry, Some(Path::new("/no/such/dir"))).unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));
    }

    #[test]
    fn test_load_registers_helpers_recursively() {
        let workspace = tempfile::tempdir().unwrap();
        let helpers_dir = workspace.path().join("helpers");
        let nested = helpers_dir.join("text");
        fs::create_dir_all(&nested).unwrap();

        write_helper(&helpers_dir, "shout.rhai", r#""loud: " + params[0]"#);
        write_helper(&nested, "quiet.rhai", r#""quiet: " + params[0]"#);
        // Files with other extensions are ignored
        write_helper(&helpers_dir, "README.md", "not a helper");

        let mut registry = Handlebars::new();
        let loaded = load_all(&mut registry, Some(&helpers_dir)).unwrap();
        assert_eq!(loaded.len(), 2);

        registry
            .register_template_string("page", "{{shout a}} / {{quiet b}}")
            .unwrap();
        let output = registry
            .render("page", &json!({ "a": "hi", "b": "bye" }))
            .unwrap();
        assert_eq!(output, "loud: hi / quiet: bye");
    }

    #[test]
    fn test_load_same_directory_twice_overwrites() {
        let workspace = tempfile::tempdir().unwrap();
        let helpers_dir = workspace.path().join("helpers");
        fs::create_dir_all(&helpers_dir).unwrap();
        write_helper(&helpers_dir, "shout.rhai", r#""loud: " + params[0]"#);

        let mut registry = Handlebars::new();
        load_all(&mut registry, Some(&helpers_dir)).unwrap();
        load_all(&mut registry, Some(&helpers_dir)).unwrap();

        registry
            .register_template_string("page", "{{shout a}}")
            .unwrap();
        assert_eq!(
            registry.render("page", &json!({ "a": "hi" })).unwrap(),
            "loud: hi"
        );
    }

    #[test]
    fn test_load_invalid_script_propagates() {
        let workspace = tempfile::tempdir().unwrap();
        let helpers_dir = workspace.path().join("helpers");
        fs::create_dir_all(&helpers_dir).unwrap();
        write_helper(&helpers_dir, "broken.rhai", "let x = ;");

        let mut registry = Handlebars::new();
        let err = load_all(&mut registry, Some(&helpers_dir)).unwrap_err();
        assert!(matches!(err, EngineError::Helper { .. }));
    }
}
