/*
 * engine/registry.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Registry of available template engines.
 */

//! Registry of available template engines.
//!
//! The registry manages the collection of engines the host has
//! constructed and provides lookup by handle or by template file
//! extension. Engines are stateful during the startup phase (initialise
//! and registration mutate them), so the registry hands out `&mut`
//! access until rendering begins.

use std::collections::HashMap;

use tracing::debug;

use super::error::EngineError;
use super::traits::TemplateEngine;

/// Registry of available template engines.
///
/// Keys are engine handles ([`TemplateEngine::name`]). Registering an
/// engine under a handle that already exists replaces the earlier one.
#[derive(Debug, Default)]
pub struct EngineRegistry {
    engines: HashMap<String, Box<dyn TemplateEngine>>,
}

impl EngineRegistry {
    /// Create an empty registry.
    ///
    /// Unlike execution-side registries there are no built-in engines;
    /// the host registers whichever engine crates it links.
    pub fn new() -> Self {
        Self {
            engines: HashMap::new(),
        }
    }

    /// Register an engine.
    ///
    /// If an engine with the same handle already exists, it is replaced.
    pub fn register(&mut self, engine: Box<dyn TemplateEngine>) {
        self.engines.insert(engine.name().to_string(), engine);
    }

    /// Get an engine by handle.
    pub fn get(&self, name: &str) -> Option<&dyn TemplateEngine> {
        self.engines.get(name).map(|e| e.as_ref())
    }

    /// Get mutable access to an engine by handle, for the startup phase
    /// (initialise, register).
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Box<dyn TemplateEngine>> {
        self.engines.get_mut(name)
    }

    /// Find the engine that claims a template file extension.
    ///
    /// The comparison ignores leading dots on both sides, so `"hbs"`,
    /// `".hbs"`, and an engine declaring `[".hbs"]` all match.
    pub fn for_extension(&self, extension: &str) -> Option<&dyn TemplateEngine> {
        let extension = extension.trim_start_matches('.');
        self.engines
            .values()
            .find(|engine| {
                engine
                    .extensions()
                    .iter()
                    .any(|candidate| candidate.trim_start_matches('.') == extension)
            })
            .map(|e| e.as_ref())
    }

    /// Initialise every registered engine, sequentially.
    ///
    /// The first failure aborts the remaining engines and propagates.
    pub async fn initialise_all(&mut self) -> Result<(), EngineError> {
        for engine in self.engines.values_mut() {
            debug!(engine = engine.name(), "Initialising template engine");
            engine.initialise().await?;
        }
        Ok(())
    }

    /// List all registered engine handles.
    pub fn engine_names(&self) -> Vec<&str> {
        self.engines.keys().map(|s| s.as_str()).collect()
    }

    /// Check if an engine is registered.
    pub fn has_engine(&self, name: &str) -> bool {
        self.engines.contains_key(name)
    }

    /// Get the number of registered engines.
    pub fn len(&self) -> usize {
        self.engines.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
    }
}

// Implement Debug for Box<dyn TemplateEngine>
impl std::fmt::Debug for dyn TemplateEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateEngine")
            .field("name", &self.name())
            .field("extensions", &self.extensions())
            .finish()
    }
}
