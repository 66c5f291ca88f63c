//! Handlebars template engine for Weft
//!
//! This crate adapts the [`handlebars`] crate to the Weft template engine
//! contract defined in `weft-core`. The adapter's entire responsibility
//! is thin: load helper scripts, load partial templates, compile and
//! cache named templates, and render a named template against a data
//! context. Template parsing, compilation, and expression evaluation all
//! live in the wrapped library.
//!
//! # Example
//!
//! ```ignore
//! use weft_core::{Config, EngineOptions, TemplateEngine};
//! use weft_engine_handlebars::HandlebarsEngine;
//!
//! let options = EngineOptions::new("/workspace/pages")
//!     .with_config(Config::new(settings))
//!     .with_additional_templates(partial_paths);
//!
//! let mut engine = HandlebarsEngine::new(options);
//! engine.initialise().await?;
//! engine.register("products", &source, None)?;
//!
//! let html = engine.render("products", None, &context, None).await?;
//! ```
//!
//! # Helpers
//!
//! Helpers are rhai scripts found recursively under the directory named
//! by the `engines.handlebars.paths.helpers` configuration key. Each
//! `.rhai` file registers one helper named after its file stem. See
//! [`HandlebarsEngine`] for the registry ownership model.

pub mod engine;
mod helpers;
mod partials;

pub use engine::HandlebarsEngine;

/// The engine handle the host knows this engine by.
pub const ENGINE_NAME: &str = "handlebars";

/// Template file extensions this engine claims.
pub const EXTENSIONS: &[&str] = &[".hbs"];

/// Configuration key the engine resolves its paths from.
///
/// The value is an object with a `helpers` field naming the helper
/// script directory, absolute or relative to the process working
/// directory. Defaults belong to the host's configuration schema, not
/// the engine: an absent key means there is nothing to load.
pub const CONFIG_PATHS_KEY: &str = "engines.handlebars.paths";

/// File extension (without dot) of helper scripts.
pub const HELPER_EXTENSION: &str = "rhai";
