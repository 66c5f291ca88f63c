/*
 * engine/context.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Construction options for template engines.
 */

//! Construction options for template engines.

use std::path::PathBuf;

use serde_json::Value;

use crate::config::Config;

/// Options the host supplies when constructing a template engine.
///
/// Construction itself performs no I/O and must not fail; everything here
/// is plain data the engine stores for use during
/// [`initialise`](crate::engine::TemplateEngine::initialise).
#[derive(Debug, Clone, Default)]
pub struct EngineOptions {
    /// Base directory under which page templates live.
    ///
    /// Partial names are derived relative to this path.
    pub pages_path: PathBuf,

    /// Absolute paths of templates found with an extension this engine
    /// supports that are not pages in the host's own registry (i.e.
    /// partials). Read once during initialisation.
    pub additional_templates: Vec<PathBuf>,

    /// The host's settings tree.
    pub config: Config,

    /// Opaque host-supplied helper data, passed through to engines that
    /// consume it. This engine contract assigns it no meaning.
    pub helpers: Option<Value>,
}

impl EngineOptions {
    /// Create options with the required pages path.
    pub fn new(pages_path: impl Into<PathBuf>) -> Self {
        Self {
            pages_path: pages_path.into(),
            ..Default::default()
        }
    }

    /// Set the additional templates list.
    pub fn with_additional_templates(mut self, templates: Vec<PathBuf>) -> Self {
        self.additional_templates = templates;
        self
    }

    /// Set the host configuration.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Set the opaque helpers value.
    pub fn with_helpers(mut self, helpers: Value) -> Self {
        self.helpers = Some(helpers);
        self
    }
}
