//! Project type registry.
//! Maps project-type names to their declarative configuration. Types are
//! registered at startup and looked up when a project is created.

use crate::error::{Error, Result};
use crate::resolver::ReplacementSpec;
use indexmap::IndexMap;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// Callback invoked with the absolute path of the newly created project,
/// after the license file is written and before version-control init.
pub type PostCreateFn = Arc<dyn Fn(&Path) -> Result<()> + Send + Sync>;

/// Declarative configuration of one project type.
#[derive(Clone)]
pub struct ProjectType {
    /// Registry key; must be non-empty
    pub name: String,
    /// Template directory name resolved against the template roots
    pub template: String,
    /// Type-specific replacement specs, resolved before the defaults
    pub replacements: Vec<ReplacementSpec>,
    /// Name of the default license template, if any
    pub license: Option<String>,
    /// Post-creation callback, if any
    pub post_create: Option<PostCreateFn>,
    /// Post-creation tooling command, spawned in the project directory
    pub post_command: Option<Vec<String>>,
}

impl fmt::Debug for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProjectType")
            .field("name", &self.name)
            .field("template", &self.template)
            .field("replacements", &self.replacements)
            .field("license", &self.license)
            .field("post_create", &self.post_create.as_ref().map(|_| ".."))
            .field("post_command", &self.post_command)
            .finish()
    }
}

/// Registry of project types, keyed by name. Registration is
/// add-or-replace; entries persist for the process lifetime.
#[derive(Debug, Default)]
pub struct Registry {
    entries: IndexMap<String, ProjectType>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a project type, replacing any previous entry with the
    /// same name.
    ///
    /// # Errors
    /// * `Error::Registration` if the name, the template name, or any
    ///   replacement token is empty
    pub fn register(&mut self, project_type: ProjectType) -> Result<()> {
        if project_type.name.trim().is_empty() {
            return Err(Error::Registration("project type name is empty".to_string()));
        }
        if project_type.template.trim().is_empty() {
            return Err(Error::Registration(format!(
                "project type '{}' has an empty template name",
                project_type.name
            )));
        }
        for spec in &project_type.replacements {
            if spec.token.is_empty() {
                return Err(Error::Registration(format!(
                    "project type '{}' declares an empty replacement token",
                    project_type.name
                )));
            }
        }
        self.entries.insert(project_type.name.clone(), project_type);
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Option<&ProjectType> {
        self.entries.get(name)
    }

    /// Registered type names in registration order; callers sort for
    /// display.
    pub fn names(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }
}
