//! Template source resolution.
//! A template name maps to exactly one directory: the user template root
//! is checked first, then the built-in root.

use crate::config::Config;
use crate::error::{Error, Result};
use log::debug;
use std::path::PathBuf;

/// Resolves a template name to its source directory.
///
/// # Errors
/// * `Error::TemplateNotFound` if neither root contains a matching
///   subdirectory
pub fn resolve_template_dir(config: &Config, name: &str) -> Result<PathBuf> {
    for root in [&config.template_dir, &config.builtin_template_dir] {
        let candidate = root.join(name);
        if candidate.is_dir() {
            debug!("using template from '{}'", candidate.display());
            return Ok(candidate);
        }
    }

    Err(Error::TemplateNotFound {
        name: name.to_string(),
        user_root: config.template_dir.display().to_string(),
        builtin_root: config.builtin_template_dir.display().to_string(),
    })
}
