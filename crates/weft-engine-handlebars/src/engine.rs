/*
 * engine.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Handlebars engine adapter.
 */

//! Handlebars engine adapter.
//!
//! The adapter owns its [`Handlebars`] registry instance outright:
//! helpers, partials, and page templates registered here are invisible
//! to any other engine instance in the process. Page template names are
//! tracked separately so that [`render`](TemplateEngine::render) only
//! resolves names the host registered as pages, never partials.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use handlebars::Handlebars;
use serde_json::Value;
use tracing::debug;

use weft_core::engine::{EngineError, EngineInfo, EngineOptions, TemplateEngine};

use crate::{CONFIG_PATHS_KEY, ENGINE_NAME, EXTENSIONS, helpers, partials};

/// Handlebars template engine.
///
/// Construction is plain data storage with no I/O. The registry fills in
/// three stages, in host order: [`initialise`](TemplateEngine::initialise)
/// loads helper scripts and partials, [`register`](TemplateEngine::register)
/// compiles and caches each page template, and
/// [`render`](TemplateEngine::render) invokes a cached template by name.
/// A compiled template is an immutable artifact; rendering takes `&self`
/// and is safe to run concurrently once registration is done.
pub struct HandlebarsEngine {
    /// The wrapped library instance. Owns compiled templates, partials,
    /// and helpers for this engine alone.
    registry: Handlebars<'static>,

    /// Names registered as page templates, as opposed to partials.
    templates: HashSet<String>,

    options: EngineOptions,
}

impl HandlebarsEngine {
    /// Create an engine from host options. Performs no I/O; cannot fail.
    pub fn new(options: EngineOptions) -> Self {
        debug!("Starting handlebars engine");

        Self {
            registry: Handlebars::new(),
            templates: HashSet::new(),
            options,
        }
    }

    /// The underlying `Handlebars` instance.
    ///
    /// For host integrations that need to bypass the adapter. Pure
    /// accessor, no side effects.
    pub fn core(&self) -> &Handlebars<'static> {
        &self.registry
    }

    /// Mutable access to the underlying `Handlebars` instance, e.g. to
    /// install native Rust helpers before rendering begins.
    pub fn core_mut(&mut self) -> &mut Handlebars<'static> {
        &mut self.registry
    }

    /// Resolve the helper script directory from host configuration.
    ///
    /// An absent key, absent `helpers` field, or empty path means there
    /// is nothing to load. A present value of the wrong shape is a
    /// configuration error.
    fn helpers_dir(&self) -> Result<Option<PathBuf>, EngineError> {
        let Some(paths) = self.options.config.get(CONFIG_PATHS_KEY) else {
            return Ok(None);
        };

        let paths = paths.as_object().ok_or_else(|| {
            EngineError::config(format!("{CONFIG_PATHS_KEY} must be an object"))
        })?;

        let Some(helpers) = paths.get("helpers") else {
            return Ok(None);
        };

        let dir = helpers.as_str().ok_or_else(|| {
            EngineError::config(format!("{CONFIG_PATHS_KEY}.helpers must be a string"))
        })?;

        if dir.is_empty() {
            return Ok(None);
        }

        Ok(Some(PathBuf::from(dir)))
    }

    /// Read and register every additional template as a partial.
    ///
    /// Reads are dispatched concurrently; registration happens in input
    /// order, and the returned names preserve that order. The first read
    /// or compile failure fails the batch, leaving partials registered
    /// before it in place.
    async fn load_partials(&mut self) -> Result<Vec<String>, EngineError> {
        let paths = self.options.additional_templates.clone();

        let mut reads = Vec::with_capacity(paths.len());
        for path in &paths {
            reads.push(tokio::spawn(tokio::fs::read_to_string(path.clone())));
        }

        let mut names = Vec::with_capacity(paths.len());
        for (path, read) in paths.iter().zip(reads) {
            let source = read
                .await
                .map_err(|e| EngineError::other(format!("partial read interrupted: {e}")))??;

            let name = partials::logical_name(path, &self.options.pages_path);
            self.register_partial(&name, &source, Some(path))?;
            names.push(name);
        }

        Ok(names)
    }
}

#[async_trait]
impl TemplateEngine for HandlebarsEngine {
    fn name(&self) -> &str {
        ENGINE_NAME
    }

    fn extensions(&self) -> &[&str] {
        EXTENSIONS
    }

    fn info(&self) -> EngineInfo {
        // The wrapped library's version is not resolved at runtime
        EngineInfo::new(ENGINE_NAME)
    }

    async fn initialise(&mut self) -> Result<(), EngineError> {
        let helpers_dir = self.helpers_dir()?;
        let loaded = helpers::load_all(&mut self.registry, helpers_dir.as_deref())?;
        debug!(count = loaded.len(), "Helpers loaded");

        let partial_names = self.load_partials().await?;
        debug!(count = partial_names.len(), "Partials loaded");

        Ok(())
    }

    fn register(
        &mut self,
        name: &str,
        source: &str,
        source_path: Option<&Path>,
    ) -> Result<(), EngineError> {
        self.registry
            .register_template_string(name, source)
            .map_err(|e| EngineError::compile(name, e.to_string()))?;
        self.templates.insert(name.to_string());

        debug!(template = name, path = ?source_path, "Registered page template");
        Ok(())
    }

    fn register_partial(
        &mut self,
        name: &str,
        source: &str,
        source_path: Option<&Path>,
    ) -> Result<(), EngineError> {
        self.registry
            .register_partial(name, source)
            .map_err(|e| EngineError::compile(name, e.to_string()))?;

        debug!(partial = name, path = ?source_path, "Registered partial");
        Ok(())
    }

    async fn render(
        &self,
        name: &str,
        _source: Option<&str>,
        context: &Value,
        _options: Option<&Value>,
    ) -> Result<String, EngineError> {
        if !self.templates.contains(name) {
            return Err(EngineError::template_not_found(name));
        }

        self.registry
            .render(name, context)
            .map_err(|e| EngineError::render(name, e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use weft_core::Config;

    fn engine() -> HandlebarsEngine {
        HandlebarsEngine::new(EngineOptions::new("/ws/pages"))
    }

    #[test]
    fn test_engine_name_and_extensions() {
        let engine = engine();
        assert_eq!(engine.name(), "handlebars");
        assert_eq!(engine.extensions(), &[".hbs"]);
    }

    #[test]
    fn test_engine_info() {
        let info = engine().info();
        assert_eq!(info.engine, "handlebars");
        assert!(info.version.is_none());
    }

    #[tokio::test]
    async fn test_register_then_render() {
        let mut engine = engine();
        engine.register("products", "{{ name }}", None).unwrap();

        let output = engine
            .render("products", None, &json!({ "name": "Widget" }), None)
            .await
            .unwrap();
        assert_eq!(output, "Widget");
    }

    #[tokio::test]
    async fn test_register_overwrites_same_name() {
        let mut engine = engine();
        engine.register("page", "first: {{ v }}", None).unwrap();
        engine.register("page", "second: {{ v }}", None).unwrap();

        let output = engine
            .render("page", None, &json!({ "v": "x" }), None)
            .await
            .unwrap();
        assert_eq!(output, "second: x");
    }

    #[test]
    fn test_register_malformed_source_propagates() {
        let mut engine = engine();
        let err = engine.register("bad", "{{#if x}}no close", None).unwrap_err();
        assert!(matches!(err, EngineError::Compile { .. }));
        // A failed compile does not make the name renderable
        assert!(!engine.templates.contains("bad"));
    }

    #[tokio::test]
    async fn test_render_unregistered_name_fails_explicitly() {
        let engine = engine();
        let err = engine
            .render("never-registered", None, &json!({}), None)
            .await
            .unwrap_err();

        assert!(matches!(err, EngineError::TemplateNotFound(_)));
        let msg = format!("{}", err);
        assert!(msg.contains("never-registered"));
        // The lookup must not have mutated the registry
        assert!(engine.templates.is_empty());
        assert!(engine.core().get_template("never-registered").is_none());
    }

    #[tokio::test]
    async fn test_partial_is_not_renderable_as_page() {
        let mut engine = engine();
        engine
            .register_partial("partials/footer", "the footer", None)
            .unwrap();

        let err = engine
            .render("partials/footer", None, &json!({}), None)
            .await
            .unwrap_err();
        assert!(matches!(err, EngineError::TemplateNotFound(_)));
    }

    #[tokio::test]
    async fn test_page_template_can_reference_partial() {
        let mut engine = engine();
        engine
            .register_partial("partials/footer", "-- {{ site }} --", None)
            .unwrap();
        engine
            .register("home", "body {{> partials/footer }}", None)
            .unwrap();

        let output = engine
            .render("home", None, &json!({ "site": "weft" }), None)
            .await
            .unwrap();
        assert_eq!(output, "body -- weft --");
    }

    #[test]
    fn test_core_accessor_bypasses_adapter() {
        let mut engine = engine();
        engine
            .core_mut()
            .register_template_string("raw", "direct")
            .unwrap();

        assert!(engine.core().get_template("raw").is_some());
        // Registered behind the adapter's back, so not a page template
        assert!(!engine.templates.contains("raw"));
    }

    #[test]
    fn test_helpers_dir_absent_key() {
        let engine = engine();
        assert!(engine.helpers_dir().unwrap().is_none());
    }

    #[test]
    fn test_helpers_dir_resolved() {
        let options = EngineOptions::new("/ws/pages").with_config(Config::new(json!({
            "engines": { "handlebars": { "paths": { "helpers": "/ws/utils/helpers" } } }
        })));
        let engine = HandlebarsEngine::new(options);

        assert_eq!(
            engine.helpers_dir().unwrap(),
            Some(PathBuf::from("/ws/utils/helpers"))
        );
    }

    #[test]
    fn test_helpers_dir_empty_string_is_none() {
        let options = EngineOptions::new("/ws/pages").with_config(Config::new(json!({
            "engines": { "handlebars": { "paths": { "helpers": "" } } }
        })));
        let engine = HandlebarsEngine::new(options);

        assert!(engine.helpers_dir().unwrap().is_none());
    }

    #[test]
    fn test_helpers_dir_malformed_paths() {
        let options = EngineOptions::new("/ws/pages").with_config(Config::new(json!({
            "engines": { "handlebars": { "paths": "not-an-object" }  }
        })));
        let engine = HandlebarsEngine::new(options);

        let err = engine.helpers_dir().unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));
    }

    #[test]
    fn test_helpers_dir_non_string_helpers() {
        let options = EngineOptions::new("/ws/pages").with_config(Config::new(json!({
            "engines": { "handlebars": { "paths": { "helpers": 42 } } }
        })));
        let engine = HandlebarsEngine::new(options);

        let err = engine.helpers_dir().unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));
    }

    #[test]
    fn test_engine_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HandlebarsEngine>();
    }
}
