use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::error::{CommandError, Result};

/// Runs a command and returns its trimmed stdout.
///
/// Fails if the process cannot be spawned, exits non-zero, or prints
/// invalid UTF-8. stderr is discarded so a missing repository does not
/// clutter build output.
pub fn try_query_command(cmd: &mut Command) -> Result<String> {
    let output = cmd.stderr(Stdio::null()).output()?;
    if !output.status.success() {
        return Err(CommandError::Status(output.status));
    }
    let stdout = String::from_utf8(output.stdout)?;
    Ok(stdout.trim().to_string())
}

/// Like [`try_query_command`], but any failure collapses to an empty string.
///
/// This is the sole recovery point for tool failures: callers only ever see
/// output text, never an error.
pub fn query_command(cmd: &mut Command) -> String {
    try_query_command(cmd).unwrap_or_else(|err| {
        tracing::debug!(
            "{} query failed: {}",
            cmd.get_program().to_string_lossy(),
            err
        );
        String::new()
    })
}

/// Handle for querying a git repository, either the current directory's or
/// an explicit one (workspaces, test fixtures).
#[derive(Clone, Debug, Default)]
pub struct Git {
    repo_dir: Option<PathBuf>,
}

impl Git {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            repo_dir: Some(dir.into()),
        }
    }

    fn query(&self, args: &[&str]) -> Option<String> {
        let mut cmd = Command::new("git");
        cmd.args(args);
        if let Some(dir) = &self.repo_dir {
            cmd.current_dir(dir);
        }
        let out = query_command(&mut cmd);
        if out.is_empty() {
            None
        } else {
            Some(out)
        }
    }

    /// Descriptive version: nearest tag, commit distance, dirty marker,
    /// falling back to a short hash when no tag is reachable.
    pub fn describe(&self) -> Option<String> {
        self.query(&["describe", "--tags", "--dirty", "--always"])
    }

    /// Abbreviated commit hash of HEAD.
    pub fn short_hash(&self) -> Option<String> {
        self.query(&["rev-parse", "--short", "HEAD"])
    }

    /// Current branch name. `None` on a detached head (git reports the
    /// literal `HEAD` in that state), outside a repository, or when the
    /// tool is absent.
    pub fn branch(&self) -> Option<String> {
        self.query(&["rev-parse", "--abbrev-ref", "HEAD"])
            .filter(|name| name != "HEAD")
    }

    /// First non-empty of: descriptive version, short hash, `"dev"`.
    pub fn resolve_version(&self) -> String {
        self.describe()
            .or_else(|| self.short_hash())
            .unwrap_or_else(|| "dev".to_string())
    }

    /// Short hash, or `"unknown"` when unavailable.
    pub fn resolve_commit(&self) -> String {
        self.short_hash().unwrap_or_else(|| "unknown".to_string())
    }

    /// Branch name, or an empty string when unavailable.
    pub fn resolve_branch(&self) -> String {
        self.branch().unwrap_or_default()
    }
}
