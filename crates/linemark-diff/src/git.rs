//! Diff text for a single file, produced by the external `git` binary

use super::adapter::{from_unified, from_untracked};
use linemark_core::DiffConfig;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitError {
    #[error("Failed to execute {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Not in a git repository: {0}")]
    NotARepository(PathBuf),

    #[error("git {command} failed: {stderr}")]
    CommandFailed { command: String, stderr: String },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type GitResult<T> = Result<T, GitError>;

/// Runs `git` against a file's own directory
#[derive(Debug, Clone)]
pub struct GitSource {
    program: String,
    context_lines: u32,
}

impl Default for GitSource {
    fn default() -> Self {
        Self::from_config(&DiffConfig::default())
    }
}

impl GitSource {
    pub fn from_config(config: &DiffConfig) -> Self {
        Self {
            program: config.git_program.clone(),
            context_lines: config.context_lines,
        }
    }

    /// Prefix-convention diff text for `path` against the index.
    ///
    /// Tracked files go through `git diff`; untracked files are read from
    /// disk and reported as entirely added.
    pub fn diff_for_path(&self, path: &Path) -> GitResult<String> {
        let (dir, name) = split_path(path);

        let root = self.repo_root(dir)?;
        tracing::debug!("repo root for {}: {}", path.display(), root);

        if self.is_tracked(dir, name)? {
            let unified = self.run_checked(
                dir,
                &[
                    "diff",
                    "--no-color",
                    "--no-ext-diff",
                    &format!("-U{}", self.context_lines),
                    "--",
                    name,
                ],
            )?;
            tracing::debug!("git diff for {}: {} bytes", path.display(), unified.len());
            Ok(from_unified(&unified))
        } else {
            tracing::debug!("{} is untracked, treating every line as added", path.display());
            let content = fs::read_to_string(path).map_err(|source| GitError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(from_untracked(&content))
        }
    }

    pub fn repo_root(&self, dir: &Path) -> GitResult<String> {
        let output = self.run(dir, &["rev-parse", "--show-toplevel"])?;
        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
        } else {
            Err(GitError::NotARepository(dir.to_path_buf()))
        }
    }

    fn is_tracked(&self, dir: &Path, name: &str) -> GitResult<bool> {
        let output = self.run(dir, &["ls-files", "--error-unmatch", "--", name])?;
        Ok(output.status.success())
    }

    fn run(&self, dir: &Path, args: &[&str]) -> GitResult<Output> {
        tracing::trace!("{} -C {} {}", self.program, dir.display(), args.join(" "));
        Command::new(&self.program)
            .arg("-C")
            .arg(dir)
            .args(args)
            .output()
            .map_err(|source| GitError::Spawn {
                program: self.program.clone(),
                source,
            })
    }

    fn run_checked(&self, dir: &Path, args: &[&str]) -> GitResult<String> {
        let output = self.run(dir, args)?;
        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).to_string())
        } else {
            Err(GitError::CommandFailed {
                command: args.first().copied().unwrap_or_default().to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            })
        }
    }
}

/// Directory to run git in, and the path to hand it relative to that directory
fn split_path(path: &Path) -> (&Path, &str) {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    (dir, name)
}
