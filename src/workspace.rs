//! Scratch workspace management.
//! Every instantiation stages its tree inside a fresh, uniquely-named
//! temporary directory that is removed on every exit path, success or
//! failure, through `TempDir`'s drop guarantee.

use crate::error::{Error, Result};
use std::path::Path;
use tempfile::TempDir;

/// An exclusively-owned scratch directory for one instantiation.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    /// Creates a fresh workspace under `scratch_root`, creating the root
    /// itself if needed. The directory name is randomized, which also
    /// keeps concurrent invocations from colliding.
    pub fn create(scratch_root: &Path) -> Result<Self> {
        std::fs::create_dir_all(scratch_root).map_err(Error::Io)?;
        let dir = tempfile::Builder::new()
            .prefix("stencil-")
            .tempdir_in(scratch_root)
            .map_err(Error::Io)?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Removes the workspace, surfacing deletion errors. Dropping the
    /// workspace removes it too, silently; error paths rely on that.
    pub fn close(self) -> Result<()> {
        self.dir.close().map_err(Error::Io)
    }
}
