//! Configuration handling for stencil.
//! Loads the user configuration file, provides the defaults every
//! instantiation can rely on, and owns the variable table that
//! late-bound replacement references are resolved against.

use crate::constants::CONFIG_FILES;
use crate::error::{Error, Result};
use crate::resolver::{Producer, ReplacementSpec};
use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A configured default value: either a literal string or a late-bound
/// reference to a named variable.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ValueSource {
    Literal(String),
    Var { var: String },
}

/// Default replacement values applied to every project type.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub author: Option<ValueSource>,
    pub email: Option<ValueSource>,
    pub organization: Option<ValueSource>,
    pub year: Option<ValueSource>,
}

/// User-facing configuration. Consumed by the resolver and the
/// instantiator; never read through ambient globals.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// User template root, checked first when resolving a template name
    pub template_dir: PathBuf,
    /// Built-in template root, the fallback search location
    pub builtin_template_dir: PathBuf,
    /// Parent directory new projects are created under
    pub project_dir: PathBuf,
    /// Directory of license template files
    pub license_dir: PathBuf,
    /// Default replacement values (year, author, email, organization)
    pub defaults: Defaults,
    /// Whether to initialize a git repository in the new project
    pub vcs: bool,
    /// Search paths for the binary discovery helper
    pub search_paths: Vec<PathBuf>,
    /// Named values that `ValueSource::Var` and late-bound replacement
    /// references resolve against
    pub vars: IndexMap<String, serde_json::Value>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            template_dir: home_dir().join(".stencil").join("templates"),
            builtin_template_dir: PathBuf::from("/usr/share/stencil/templates"),
            project_dir: PathBuf::from("."),
            license_dir: PathBuf::from("/usr/share/stencil/licenses"),
            defaults: Defaults::default(),
            vcs: true,
            search_paths: vec![
                PathBuf::from("/usr/local/bin"),
                PathBuf::from("/usr/bin"),
            ],
            vars: IndexMap::new(),
        }
    }
}

impl Config {
    /// Looks up a late-bound variable: the configured `vars` table first,
    /// then the process environment.
    pub fn lookup_var(&self, name: &str) -> Option<serde_json::Value> {
        if let Some(value) = self.vars.get(name) {
            return Some(value.clone());
        }
        std::env::var(name).ok().map(serde_json::Value::String)
    }

    /// The default replacement specs appended after a project type's own
    /// entries, so type-specific tokens win when names collide.
    pub fn default_replacements(&self, project_name: &str) -> Vec<ReplacementSpec> {
        vec![
            ReplacementSpec::new(
                "__NAME__",
                Producer::Literal(project_name.to_string()),
            ),
            ReplacementSpec::new(
                "__YEAR__",
                producer_for(self.defaults.year.as_ref(), || {
                    chrono::Local::now().format("%Y").to_string()
                }),
            ),
            ReplacementSpec::new(
                "__AUTHOR__",
                producer_for(self.defaults.author.as_ref(), || {
                    std::env::var("USER").unwrap_or_else(|_| "unknown".to_string())
                }),
            ),
            ReplacementSpec::new(
                "__EMAIL__",
                producer_for(self.defaults.email.as_ref(), || {
                    std::env::var("EMAIL").unwrap_or_default()
                }),
            ),
            ReplacementSpec::new(
                "__ORGANIZATION__",
                producer_for(self.defaults.organization.as_ref(), String::new),
            ),
        ]
    }
}

fn producer_for<F>(source: Option<&ValueSource>, fallback: F) -> Producer
where
    F: Fn() -> String + Send + Sync + 'static,
{
    match source {
        Some(ValueSource::Literal(value)) => Producer::Literal(value.clone()),
        Some(ValueSource::Var { var }) => Producer::ConfigRef(var.clone()),
        None => Producer::Pure(Arc::new(move || serde_json::Value::String(fallback()))),
    }
}

fn home_dir() -> PathBuf {
    std::env::var("HOME").map(PathBuf::from).unwrap_or_else(|_| PathBuf::from("."))
}

/// Loads the configuration, trying multiple file formats.
/// Supports: stencil.json, stencil.yml, stencil.yaml
///
/// With no explicit path, the working directory is searched first, then
/// `$HOME/.config/stencil`. A missing configuration file is not an error;
/// the built-in defaults apply.
///
/// # Errors
/// * `Error::Config` if an explicit path does not exist or a found file
///   fails to parse
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        if !path.exists() {
            return Err(Error::Config(format!(
                "configuration file does not exist: {}",
                path.display()
            )));
        }
        return read_config(path);
    }

    let config_home = home_dir().join(".config").join("stencil");
    for dir in [PathBuf::from("."), config_home] {
        for file in CONFIG_FILES {
            let candidate = dir.join(file);
            if candidate.exists() {
                return read_config(&candidate);
            }
        }
    }

    debug!("no configuration file found, using defaults");
    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    debug!("loading configuration from {}", path.display());
    let content = std::fs::read_to_string(path).map_err(Error::Io)?;
    parse_config(&content)
}

/// Parses configuration content, trying JSON first and YAML second.
pub fn parse_config(content: &str) -> Result<Config> {
    match serde_json::from_str(content) {
        Ok(config) => Ok(config),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::Config(format!("invalid configuration format: {}", e))),
    }
}
