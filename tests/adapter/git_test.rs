//! Tests for the git subprocess adapter

use std::process::Command;

use matsuri::MatsuriError;
use matsuri::adapters::git::GitVersionControl;
use matsuri::core::models::RepoIdentity;
use matsuri::core::ports::VersionControl;
use tempfile::TempDir;

fn git(dir: &std::path::Path, args: &[&str]) {
    Command::new("git").args(args).current_dir(dir).output().expect("failed to run git");
}

#[test]
fn test_failure_keeps_git_output() {
    let temp = TempDir::new().unwrap();
    let vcs = GitVersionControl::new(temp.path().to_path_buf());

    match vcs.checkout("does-not-exist").unwrap_err() {
        MatsuriError::ExternalTool { command, output } => {
            assert_eq!(command, "git checkout does-not-exist");
            assert!(!output.is_empty());
        },
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_remote_origin_identifies_repository() {
    let temp = TempDir::new().unwrap();
    git(temp.path(), &["init"]);
    let vcs = GitVersionControl::new(temp.path().to_path_buf());
    assert_eq!(vcs.remote_origin_url(), None);

    git(temp.path(), &["remote", "add", "origin", "git@github.com:MatsuriJapon/website.git"]);
    let url = vcs.remote_origin_url().unwrap();
    assert_eq!(
        RepoIdentity::from_remote_url(&url, "MatsuriJapon"),
        Some(RepoIdentity::new("MatsuriJapon", "website"))
    );
}

#[test]
fn test_set_local_email_in_clone_directory() {
    let temp = TempDir::new().unwrap();
    git(temp.path(), &["init", "website"]);
    let vcs = GitVersionControl::new(temp.path().to_path_buf());

    vcs.set_local_email(std::path::Path::new("website"), "taro@festivaljapon.com").unwrap();

    let output = Command::new("git")
        .args(["config", "--local", "user.email"])
        .current_dir(temp.path().join("website"))
        .output()
        .unwrap();
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "taro@festivaljapon.com");
}

#[test]
fn test_fresh_repository_status_is_clean() {
    let temp = TempDir::new().unwrap();
    git(temp.path(), &["init"]);
    let vcs = GitVersionControl::new(temp.path().to_path_buf());

    let status = vcs.status().unwrap();
    assert!(matsuri::core::services::branch::is_clean_status(&status));
}
