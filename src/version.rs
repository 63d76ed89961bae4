use chrono::{SecondsFormat, Utc};

use crate::env::BuildEnv;
use crate::git::Git;

/// Version metadata gathered for one build. Rebuilt from scratch on every
/// invocation, never persisted.
#[derive(Clone, Debug)]
pub struct VersionInfo {
    /// Descriptive version with any leading `v` stripped; `"dev"` when the
    /// repository yields nothing.
    pub version: String,
    /// Short commit hash, or `"unknown"`.
    pub commit: String,
    /// Branch name; empty on a detached head or outside a repository.
    pub branch: String,
    /// UTC timestamp of this collection, second precision.
    pub build_time: String,
}

impl VersionInfo {
    /// Collects version info from the current directory's repository.
    pub fn collect() -> Self {
        Self::from_git(&Git::new())
    }

    /// Collects version info from the repository at `dir`.
    pub fn collect_in(dir: impl Into<std::path::PathBuf>) -> Self {
        Self::from_git(&Git::in_dir(dir))
    }

    pub fn from_git(git: &Git) -> Self {
        Self {
            version: normalize_version(&git.resolve_version()),
            commit: git.resolve_commit(),
            branch: git.resolve_branch(),
            build_time: build_timestamp(),
        }
    }

    /// Appends the four macro definitions to `env`.
    ///
    /// Values are wrapped in double quotes so the downstream preprocessor
    /// sees a string constant. Append semantics: injecting twice leaves
    /// eight entries, duplicates included.
    pub fn inject(&self, env: &mut dyn BuildEnv) {
        env.define("FW_VERSION", &quoted(&self.version));
        env.define("GIT_COMMIT", &quoted(&self.commit));
        env.define("GIT_BRANCH", &quoted(&self.branch));
        env.define("BUILD_TIME", &quoted(&self.build_time));
    }
}

/// Strips exactly one leading `v`, the usual tag prefix. `"vv1.0"` becomes
/// `"v1.0"`.
pub fn normalize_version(version: &str) -> String {
    version.strip_prefix('v').unwrap_or(version).to_string()
}

/// Current UTC instant as `YYYY-MM-DDTHH:MM:SSZ`.
pub fn build_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn quoted(value: &str) -> String {
    format!("\"{value}\"")
}
