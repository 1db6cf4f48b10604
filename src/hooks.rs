//! Post-creation hooks and version-control initialization.
//! External commands run through the `CommandRunner` capability so tests
//! can substitute their own runner; version-control init is a synchronous
//! libgit2 call that must finish before project creation reports success.

use crate::error::{Error, Result};
use log::debug;
use std::path::Path;
use std::process::{Child, Command, Stdio};

/// Handle to an asynchronously spawned command. The command keeps running
/// until the handle is waited on; its exit status stays observable.
pub struct CommandHandle {
    command: String,
    child: Child,
}

impl CommandHandle {
    /// Waits for the command and surfaces a non-zero exit as
    /// `Error::CommandFailed`.
    pub fn wait(mut self) -> Result<()> {
        let status = self.child.wait().map_err(Error::Io)?;
        if !status.success() {
            return Err(Error::CommandFailed {
                command: self.command,
                status: status.to_string(),
            });
        }
        Ok(())
    }
}

/// Capability for running external commands in a working directory.
pub trait CommandRunner {
    /// Runs `argv` to completion; non-zero exit is an error.
    fn run(&self, argv: &[String], cwd: &Path) -> Result<()>;

    /// Spawns `argv` without waiting, returning an observable handle.
    fn spawn(&self, argv: &[String], cwd: &Path) -> Result<CommandHandle>;
}

/// Command runner backed by `std::process`.
pub struct ShellRunner;

impl ShellRunner {
    pub fn new() -> Self {
        Self
    }

    fn command(argv: &[String], cwd: &Path) -> Result<Command> {
        let program = argv.first().ok_or_else(|| {
            Error::CommandFailed {
                command: String::new(),
                status: "empty command".to_string(),
            }
        })?;
        let mut command = Command::new(program);
        command
            .args(&argv[1..])
            .current_dir(cwd)
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        Ok(command)
    }
}

impl Default for ShellRunner {
    fn default() -> Self {
        ShellRunner::new()
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, argv: &[String], cwd: &Path) -> Result<()> {
        debug!("running '{}' in '{}'", argv.join(" "), cwd.display());
        let status = Self::command(argv, cwd)?.status().map_err(Error::Io)?;
        if !status.success() {
            return Err(Error::CommandFailed {
                command: argv.join(" "),
                status: status.to_string(),
            });
        }
        Ok(())
    }

    fn spawn(&self, argv: &[String], cwd: &Path) -> Result<CommandHandle> {
        debug!("spawning '{}' in '{}'", argv.join(" "), cwd.display());
        let child = Self::command(argv, cwd)?.spawn().map_err(Error::Io)?;
        Ok(CommandHandle { command: argv.join(" "), child })
    }
}

/// Initializes a git repository in `project_dir`, stages every file and
/// creates the initial commit. Runs synchronously; project creation does
/// not report success until this returns.
pub fn init_repository(project_dir: &Path) -> Result<()> {
    debug!("initializing git repository in '{}'", project_dir.display());
    let repo = git2::Repository::init(project_dir)?;

    let mut index = repo.index()?;
    index.add_all(["*"].iter(), git2::IndexAddOption::DEFAULT, None)?;
    index.write()?;

    let tree_id = index.write_tree()?;
    let tree = repo.find_tree(tree_id)?;

    // Fall back to a fixed identity when the user has no git config.
    let signature = repo
        .signature()
        .or_else(|_| git2::Signature::now("stencil", "stencil@localhost"))?;

    repo.commit(Some("HEAD"), &signature, &signature, "Initial commit", &tree, &[])?;
    Ok(())
}
