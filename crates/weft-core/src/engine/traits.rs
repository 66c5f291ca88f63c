/*
 * engine/traits.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * TemplateEngine trait definition.
 */

//! TemplateEngine trait for pluggable page rendering in Weft.

use std::path::Path;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use super::error::EngineError;

/// Static metadata identifying a template engine.
///
/// Returned by [`TemplateEngine::info`] and surfaced by the host in
/// status output, which is why it serializes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EngineInfo {
    /// The engine handle, e.g. "handlebars".
    pub engine: String,

    /// The engine version, if the engine resolves one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl EngineInfo {
    /// Create metadata for a named engine with no resolved version.
    pub fn new(engine: impl Into<String>) -> Self {
        Self {
            engine: engine.into(),
            version: None,
        }
    }

    /// Set the engine version.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }
}

/// Template engine driven by the Weft host.
///
/// Engines compile raw template source into an invokable form, cache it
/// under a logical name, and render it against a JSON data context. The
/// host calls the lifecycle in a fixed order:
///
/// 1. Construction (engine-specific, takes [`EngineOptions`], no I/O)
/// 2. [`initialise`](TemplateEngine::initialise) - load helpers and any
///    additional templates
/// 3. [`register`](TemplateEngine::register) - once per page template the
///    host discovered
/// 4. [`render`](TemplateEngine::render) - per request
///
/// # Thread Safety
///
/// Engines must be `Send + Sync`. All mutation happens through `&mut self`
/// during the startup phase; `render` takes `&self` and may be invoked
/// concurrently once registration is complete.
///
/// # Example
///
/// ```ignore
/// use weft_core::engine::{EngineInfo, TemplateEngine};
///
/// struct MyEngine { /* ... */ }
///
/// #[async_trait::async_trait]
/// impl TemplateEngine for MyEngine {
///     fn name(&self) -> &str {
///         "my-engine"
///     }
///     // ...
/// }
/// ```
#[async_trait]
pub trait TemplateEngine: Send + Sync {
    /// The engine handle.
    ///
    /// This is used for:
    /// - Registry lookup
    /// - Matching configuration keys (`engines.<name>.*`)
    /// - Log messages and diagnostics
    fn name(&self) -> &str;

    /// Template file extensions this engine claims, with leading dot
    /// (e.g. `[".hbs"]`).
    fn extensions(&self) -> &[&str];

    /// Static metadata about the engine. Pure accessor, no side effects.
    fn info(&self) -> EngineInfo;

    /// Load everything the engine needs before templates can be
    /// registered: helper scripts, partials, whatever the engine defines.
    ///
    /// # Errors
    ///
    /// Returns `EngineError` if any loading step fails. A failed step
    /// aborts the steps sequenced after it; already-loaded state is not
    /// rolled back.
    async fn initialise(&mut self) -> Result<(), EngineError>;

    /// Compile `source` and cache it under `name`, overwriting any prior
    /// entry with the same name.
    ///
    /// `source_path` is where the host read the source from; engines may
    /// use it for diagnostics.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Compile` on malformed source. Compile
    /// failures propagate to the caller rather than being swallowed.
    fn register(
        &mut self,
        name: &str,
        source: &str,
        source_path: Option<&Path>,
    ) -> Result<(), EngineError>;

    /// Compile `source` and register it as a reusable partial under
    /// `name`. Does not make the name renderable via
    /// [`render`](TemplateEngine::render).
    fn register_partial(
        &mut self,
        name: &str,
        source: &str,
        source_path: Option<&Path>,
    ) -> Result<(), EngineError>;

    /// Render the template previously registered under `name` with
    /// `context` as the data binding.
    ///
    /// `source` and `options` exist for interface uniformity across
    /// engines; engines that execute a compiled artifact ignore both.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::TemplateNotFound`] if `name` was never
    /// registered, and `EngineError::Render` if the compiled template
    /// fails during invocation.
    async fn render(
        &self,
        name: &str,
        source: Option<&str>,
        context: &Value,
        options: Option<&Value>,
    ) -> Result<String, EngineError>;
}
