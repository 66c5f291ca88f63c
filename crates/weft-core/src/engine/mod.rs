/*
 * engine/mod.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Template engine infrastructure.
 */

//! Template engine infrastructure for Weft.
//!
//! This module provides the abstractions the host uses to drive template
//! engines. An engine compiles template source into invokable form,
//! caches it under a logical name, and renders it against a data context;
//! the host decides which engine handles which file extension and when
//! each lifecycle step runs.
//!
//! # Architecture
//!
//! - [`TemplateEngine`] trait - Interface for all template engines
//! - [`EngineRegistry`] - Collection of engines, keyed by handle
//! - [`EngineOptions`] - Construction options supplied by the host
//! - [`EngineInfo`] - Static engine metadata
//! - [`EngineError`] - Errors surfaced across the contract
//!
//! # Lifecycle ordering
//!
//! The host constructs engines, calls [`TemplateEngine::initialise`] on
//! each, registers the page templates its own scanning discovered, and
//! only then begins rendering. Registration is a startup-phase mutation;
//! rendering takes `&self` and may run concurrently.

mod context;
mod error;
mod registry;
mod traits;

// Re-export public types
pub use context::EngineOptions;
pub use error::EngineError;
pub use registry::EngineRegistry;
pub use traits::{EngineInfo, TemplateEngine};
