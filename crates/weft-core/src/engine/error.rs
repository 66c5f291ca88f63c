/*
 * engine/error.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Error types for template engines.
 */

//! Error types for template engines.

use thiserror::Error;

/// Errors that can occur across the template engine contract.
///
/// Engines perform no retries, no logging policy, and no partial-failure
/// recovery; every error bubbles to the host unchanged.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A required configuration value is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO failure while enumerating or reading helper or template files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Template source failed to compile.
    #[error("Template compilation failed for '{name}': {message}")]
    Compile {
        /// The logical template name being registered
        name: String,
        /// Error message from the underlying compiler
        message: String,
    },

    /// A helper failed to register.
    #[error("Helper registration failed for '{name}': {message}")]
    Helper {
        /// The helper name
        name: String,
        /// Error message from the underlying library
        message: String,
    },

    /// Render was called with a name that was never registered.
    #[error("Template not registered: {0}")]
    TemplateNotFound(String),

    /// A registered template failed during invocation.
    #[error("Render failed for '{name}': {message}")]
    Render {
        /// The logical template name being rendered
        name: String,
        /// Error message from the underlying renderer
        message: String,
    },

    /// Engine-specific error with custom message.
    #[error("{0}")]
    Other(String),
}

impl EngineError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a compile error for a named template.
    pub fn compile(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Compile {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create a helper registration error.
    pub fn helper(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Helper {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create a "template not registered" error.
    pub fn template_not_found(name: impl Into<String>) -> Self {
        Self::TemplateNotFound(name.into())
    }

    /// Create a render error for a named template.
    pub fn render(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Render {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create an "other" error with a custom message.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }
}
