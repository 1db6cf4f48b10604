//! Built-in example project types and the binary discovery helper.

use crate::config::Config;
use crate::error::Result;
use crate::registry::{ProjectType, Registry};
use crate::resolver::{Producer, ReplacementSpec};
use std::path::PathBuf;
use std::sync::Arc;

/// Finds the first existing `name` binary under the configured search
/// paths.
pub fn find_binary(name: &str, search_paths: &[PathBuf]) -> Option<PathBuf> {
    search_paths.iter().map(|dir| dir.join(name)).find(|candidate| candidate.is_file())
}

/// Registers the project types stencil ships with: a plain C project and
/// a Python project whose interpreter token is discovered from the
/// configured search paths.
pub fn register_builtin_types(registry: &mut Registry, config: &Config) -> Result<()> {
    registry.register(ProjectType {
        name: "c".to_string(),
        template: "c".to_string(),
        replacements: Vec::new(),
        license: Some("MIT".to_string()),
        post_create: None,
        post_command: None,
    })?;

    let search_paths = config.search_paths.clone();
    registry.register(ProjectType {
        name: "python".to_string(),
        template: "python".to_string(),
        replacements: vec![ReplacementSpec::new(
            "__PYTHON__",
            Producer::Pure(Arc::new(move || {
                let interpreter = find_binary("python3", &search_paths)
                    .or_else(|| find_binary("python", &search_paths))
                    .map(|path| path.display().to_string())
                    .unwrap_or_else(|| "/usr/bin/env python3".to_string());
                serde_json::Value::String(interpreter)
            })),
        )],
        license: Some("MIT".to_string()),
        post_create: None,
        post_command: None,
    })?;

    Ok(())
}
