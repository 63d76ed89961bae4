use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// Scratch git repository in a temp directory, deleted on drop.
pub struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    pub fn init() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        git(dir.path(), &["init", "--quiet"]);
        git(dir.path(), &["config", "user.email", "build@example.com"]);
        git(dir.path(), &["config", "user.name", "Build Bot"]);
        git(dir.path(), &["config", "commit.gpgsign", "false"]);
        git(dir.path(), &["config", "tag.gpgsign", "false"]);
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes a file and commits everything.
    pub fn commit(&self, message: &str) {
        fs::write(self.path().join("main.c"), format!("// {message}\n"))
            .expect("Failed to write source file");
        git(self.path(), &["add", "."]);
        git(self.path(), &["commit", "--quiet", "-m", message]);
    }

    pub fn tag(&self, name: &str) {
        git(self.path(), &["tag", name]);
    }

    pub fn checkout_new_branch(&self, name: &str) {
        git(self.path(), &["checkout", "--quiet", "-b", name]);
    }

    pub fn detach_head(&self) {
        git(self.path(), &["checkout", "--quiet", "--detach"]);
    }

    /// Leaves an uncommitted modification in the worktree.
    pub fn make_dirty(&self) {
        fs::write(self.path().join("main.c"), "// uncommitted change\n")
            .expect("Failed to write source file");
    }
}

/// Plain temp directory with no repository in it.
pub fn empty_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

fn git(dir: &Path, args: &[&str]) {
    let status = Command::new("git")
        .args(args)
        .current_dir(dir)
        .status()
        .expect("Failed to run git");
    assert!(status.success(), "git {args:?} failed");
}
