//! Template engine plugin contract for Weft
//!
//! This crate defines the interface between the Weft web server and the
//! template engines that render its pages. The host discovers page
//! templates, decides which engine claims each file extension, and drives
//! every engine through the same lifecycle; engines own template
//! compilation and rendering.
//!
//! # Architecture
//!
//! The contract is organized around these key types:
//!
//! - [`TemplateEngine`] - Lifecycle trait implemented by every engine
//! - [`EngineOptions`] - Construction options the host hands an engine
//! - [`EngineRegistry`] - Host-side collection of engines, keyed by handle
//! - [`Config`] - Read-only, key-path-addressable host configuration
//! - [`EngineError`] - Error taxonomy shared across engines
//!
//! # Lifecycle
//!
//! ```ignore
//! use weft_core::{Config, EngineOptions, EngineRegistry, TemplateEngine};
//!
//! // The host constructs an engine with its options...
//! let options = EngineOptions::new("/workspace/pages")
//!     .with_config(Config::new(settings));
//! let mut engine = SomeEngine::new(options);
//!
//! // ...initialises it (loads helpers and partials)...
//! engine.initialise().await?;
//!
//! // ...registers each page template it discovered...
//! engine.register("products", &source, Some(&path))?;
//!
//! // ...then renders per request.
//! let output = engine.render("products", None, &context, None).await?;
//! ```

pub mod config;
pub mod engine;

// Re-export commonly used types
pub use config::Config;
pub use engine::{EngineError, EngineInfo, EngineOptions, EngineRegistry, TemplateEngine};
