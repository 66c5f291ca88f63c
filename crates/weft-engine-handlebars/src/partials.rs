/*
 * partials.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Logical partial names.
 */

//! Logical partial names.
//!
//! A partial's logical name is its path relative to the pages directory
//! with the final extension stripped: `/ws/pages/partials/footer.hbs`
//! under `/ws/pages` becomes `partials/footer`. Names use `/` separators
//! on every platform.

use std::path::Path;

/// Derive the logical partial name for `path` under `base`.
///
/// A path outside `base` keeps its full, extension-stripped form; no
/// validation is performed on the result.
pub(crate) fn logical_name(path: &Path, base: &Path) -> String {
    let relative = path.strip_prefix(base).unwrap_or(path);
    relative
        .with_extension("")
        .to_string_lossy()
        .replace('\\', "/")
}
