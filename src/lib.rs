//! Build-time git version stamping for firmware images.
//!
//! Queries git for a descriptive version, short commit hash, and branch
//! name, derives a UTC build timestamp, and appends the four macro
//! definitions `FW_VERSION`, `GIT_COMMIT`, `GIT_BRANCH`, and `BUILD_TIME`
//! to a build environment. Each value is a double-quoted string literal,
//! ready for a preprocessor.
//!
//! Every git failure degrades to a fixed default (`"dev"` / `"unknown"` /
//! empty branch); a build never fails because of this crate.
//!
//! Use it from a consumer's `build.rs`:
//!
//! ```no_run
//! fn main() {
//!     fw_version::CargoEnv::rerun_if_git_changed();
//!     fw_version::inject(&mut fw_version::CargoEnv);
//! }
//! ```

pub mod env;
pub mod error;
pub mod git;
pub mod version;

pub use env::{BuildEnv, CargoEnv, Definitions};
pub use error::{CommandError, Result};
pub use git::{query_command, try_query_command, Git};
pub use version::{build_timestamp, normalize_version, VersionInfo};

/// Collects version info from the current directory's repository and
/// appends the four macro definitions to `env`.
pub fn inject(env: &mut dyn BuildEnv) {
    VersionInfo::collect().inject(env);
}
