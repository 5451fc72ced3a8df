use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

/// A fresh pair of empty old/new directories.
#[fixture]
pub fn tree_pair() -> (TempDir, TempDir) {
    (
        TempDir::new().expect("Failed to create temp dir"),
        TempDir::new().expect("Failed to create temp dir"),
    )
}

pub fn run_treediff(old: &Path, new: &Path) -> Command {
    let mut cmd = Command::cargo_bin("treediff").expect("Failed to find treediff binary");
    cmd.arg(old).arg(new);
    cmd
}

/// Run the binary against the two directories and return its stdout with
/// styling stripped.
pub fn diff_output(old: &Path, new: &Path) -> String {
    let assert = run_treediff(old, new).assert().success();
    let stdout = assert.get_output().stdout.clone();

    super::strip_ansi(&String::from_utf8(stdout).expect("stdout should be UTF-8"))
}

/// The two header lines every run prints before the tree.
pub fn header_lines(old: &Path, new: &Path) -> String {
    format!("--- {}\n+++ {}\n", old.display(), new.display())
}
