/// Destination for macro definitions.
///
/// The host build tool owns the definition collection; implementations only
/// ever append to it. [`CargoEnv`] is the real sink for build scripts,
/// [`Definitions`] an in-memory one for tests and for consumers that
/// forward defines to a C toolchain themselves.
pub trait BuildEnv {
    /// Appends one definition. A key already present is appended again, not
    /// replaced.
    fn define(&mut self, key: &str, value: &str);
}

/// Publishes definitions to Cargo as `rustc-env` directives.
pub struct CargoEnv;

impl CargoEnv {
    /// Asks Cargo to re-run the build script when the repository state
    /// changes, so stamped values track new commits and checkouts.
    pub fn rerun_if_git_changed() {
        println!("cargo:rerun-if-changed=.git/HEAD");
        println!("cargo:rerun-if-changed=.git/index");
    }
}

impl BuildEnv for CargoEnv {
    fn define(&mut self, key: &str, value: &str) {
        println!("cargo:rustc-env={key}={value}");
    }
}

/// In-memory definition list, kept in append order.
#[derive(Clone, Debug, Default)]
pub struct Definitions {
    entries: Vec<(String, String)>,
}

impl Definitions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of the first entry with `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl BuildEnv for Definitions {
    fn define(&mut self, key: &str, value: &str) {
        self.entries.push((key.to_string(), value.to_string()));
    }
}
