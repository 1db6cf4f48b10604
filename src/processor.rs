//! Core template instantiation orchestration.
//! Stages a template tree inside a scratch workspace, applies the token
//! substitutions to path names and file contents there, and only then
//! publishes the finished tree to the destination. A failure at any
//! stage leaves neither a partial destination nor a leftover workspace.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::substitute::Substituter;
use crate::template::resolve_template_dir;
use crate::workspace::Workspace;
use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Template instantiator for one resolved replacement list.
pub struct Processor<'a> {
    config: &'a Config,
    substituter: &'a Substituter,
    scratch_root: PathBuf,
}

impl<'a> Processor<'a> {
    pub fn new(config: &'a Config, substituter: &'a Substituter) -> Self {
        Self { config, substituter, scratch_root: std::env::temp_dir() }
    }

    /// Overrides where scratch workspaces are created. Mainly useful for
    /// tests that need to observe the workspace lifecycle.
    pub fn with_scratch_root<P: Into<PathBuf>>(mut self, root: P) -> Self {
        self.scratch_root = root.into();
        self
    }

    /// Instantiates the named template at `destination`.
    ///
    /// The destination is either fully populated or absent afterwards:
    /// all substitution work happens in the scratch workspace, and the
    /// finished tree is moved into place as the last step.
    ///
    /// # Errors
    /// * `Error::DestinationExists` if `destination` already exists
    /// * `Error::TemplateNotFound` if the template name does not resolve
    /// * `Error::Io` for any copy/rename/read/write failure
    pub fn instantiate(&self, template_name: &str, destination: &Path) -> Result<()> {
        if destination.exists() {
            return Err(Error::DestinationExists {
                path: destination.display().to_string(),
            });
        }

        let template_dir = resolve_template_dir(self.config, template_name)?;
        let workspace = Workspace::create(&self.scratch_root)?;
        let staged = workspace.path().join("tree");

        debug!(
            "staging template '{}' in '{}'",
            template_name,
            workspace.path().display()
        );

        copy_tree(&template_dir, &staged)?;
        rename_paths(&staged, self.substituter)?;
        rewrite_files(&staged, self.substituter)?;
        publish(&staged, destination)?;

        workspace.close()
    }
}

/// Recursively copies `src` into `dst`, preserving relative structure.
pub fn copy_tree(src: &Path, dst: &Path) -> Result<()> {
    for entry in WalkDir::new(src) {
        let entry = entry.map_err(|e| Error::Io(e.into()))?;
        let relative = entry
            .path()
            .strip_prefix(src)
            .map_err(|e| Error::Io(io::Error::other(e)))?;
        let target = dst.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(Error::Io)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(Error::Io)?;
            }
            fs::copy(entry.path(), &target).map_err(Error::Io)?;
        }
    }
    Ok(())
}

/// Renames every path component under `root` whose name contains a token.
/// Deepest entries are processed first so a rename never invalidates a
/// not-yet-visited path.
pub fn rename_paths(root: &Path, substituter: &Substituter) -> Result<()> {
    for entry in WalkDir::new(root).contents_first(true) {
        let entry = entry.map_err(|e| Error::Io(e.into()))?;
        if entry.depth() == 0 {
            continue;
        }
        let name = entry.file_name().to_str().ok_or_else(|| {
            Error::Io(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("non-UTF-8 file name: {}", entry.path().display()),
            ))
        })?;
        let renamed = substituter.apply(name);
        if renamed != name {
            let target = entry.path().with_file_name(&renamed);
            debug!("renaming '{}' -> '{}'", entry.path().display(), target.display());
            fs::rename(entry.path(), target).map_err(Error::Io)?;
        }
    }
    Ok(())
}

/// Rewrites the contents of every regular file under `root` in place.
/// Template files must be valid UTF-8 text.
pub fn rewrite_files(root: &Path, substituter: &Substituter) -> Result<()> {
    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|e| Error::Io(e.into()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let content = fs::read_to_string(entry.path()).map_err(|e| {
            Error::Io(io::Error::new(
                e.kind(),
                format!("{}: {}", entry.path().display(), e),
            ))
        })?;
        let rendered = substituter.apply(&content);
        if rendered != content {
            debug!("rewriting '{}'", entry.path().display());
            fs::write(entry.path(), rendered).map_err(Error::Io)?;
        }
    }
    Ok(())
}

/// Moves the staged tree to `destination`. Rename is attempted first;
/// across filesystems the tree is copied instead, and a partial copy is
/// removed before the error propagates.
pub fn publish(staged: &Path, destination: &Path) -> Result<()> {
    if let Some(parent) = destination.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(Error::Io)?;
        }
    }

    match fs::rename(staged, destination) {
        Ok(()) => Ok(()),
        Err(e) => {
            debug!(
                "rename to '{}' failed ({}), falling back to copy",
                destination.display(),
                e
            );
            if let Err(copy_err) = copy_tree(staged, destination) {
                let _ = fs::remove_dir_all(destination);
                return Err(copy_err);
            }
            Ok(())
        }
    }
}
