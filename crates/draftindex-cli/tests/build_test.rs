//! End-to-end tests for the `draftindex` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use draftindex_git::git2::{Commit, IndexAddOption, Repository, Signature, Time};
use predicates::prelude::*;
use tempfile::TempDir;

fn commit_all(repo: &Repository, epoch: i64, message: &str) {
    let sig = Signature::new("Test User", "test@example.com", &Time::new(epoch, 0)).unwrap();
    let mut index = repo.index().unwrap();
    index
        .add_all(["*"].iter(), IndexAddOption::DEFAULT, None)
        .unwrap();
    index.write().unwrap();
    let tree_id = index.write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
    let parents: Vec<&Commit> = parent.iter().collect();
    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
        .unwrap();
}

fn write_source(root: &Path, dir: &str, block: &str) {
    let spec_dir = root.join(dir);
    fs::create_dir(&spec_dir).unwrap();
    fs::write(
        spec_dir.join("Overview.bs"),
        format!("<pre class=metadata>\n{block}</pre>\n"),
    )
    .unwrap();
}

#[test]
fn builds_index_aliases_and_timestamps() {
    let temp = TempDir::new().unwrap();
    let repo = Repository::init(temp.path()).unwrap();

    write_source(
        temp.path(),
        "motion-1",
        "Title: Motion Level 1\nShortname: motion\nLevel: 1\nWork Status: completed\n",
    );
    commit_all(&repo, 1_600_000_000, "add motion-1");

    write_source(
        temp.path(),
        "motion-2",
        "Title: Motion Level 2\nShortname: motion\nLevel: 2\nWork Status: refining\n",
    );
    commit_all(&repo, 1_700_000_000, "add motion-2");

    let paint = temp.path().join("paint-worklet");
    fs::create_dir(&paint).unwrap();
    fs::write(
        paint.join("Overview.html"),
        "<html><head><title>CSS Paint API Level 1</title></head></html>",
    )
    .unwrap();

    Command::cargo_bin("draftindex")
        .unwrap()
        .arg(temp.path())
        .assert()
        .success();

    // Timestamp document: both levels plus the mirrored alias key.
    let timestamps = fs::read_to_string(temp.path().join("timestamps.json")).unwrap();
    assert!(timestamps.contains("\"motion\": 1700000000"));
    assert!(timestamps.contains("\"motion-1\": 1600000000"));
    assert!(timestamps.contains("\"motion-2\": 1700000000"));

    // Alias points at the current-work level.
    let link = fs::read_link(temp.path().join("motion")).unwrap();
    assert_eq!(link, Path::new("motion-2").to_path_buf());

    // Index page lists every spec, with the current-work annotation.
    let html = fs::read_to_string(temp.path().join("index.html")).unwrap();
    assert!(html.contains("Motion Level 1 Level 1</a>"));
    assert!(html.contains(
        "Motion Level 2 Level 2</a> <span class=\"current-work\">(Current Work)</span>"
    ));
    assert!(html.contains("CSS Paint API Level 1</a>"));
    assert!(html.contains("<td>2020-09-13</td>"));
}

#[test]
fn rerunning_succeeds_with_existing_outputs() {
    let temp = TempDir::new().unwrap();
    let repo = Repository::init(temp.path()).unwrap();
    write_source(
        temp.path(),
        "layout-1",
        "Shortname: layout\nLevel: 1\nWork Status: exploring\n",
    );
    commit_all(&repo, 1_650_000_000, "add layout-1");

    for _ in 0..2 {
        Command::cargo_bin("draftindex")
            .unwrap()
            .arg(temp.path())
            .assert()
            .success();
    }

    let link = fs::read_link(temp.path().join("layout")).unwrap();
    assert_eq!(link, Path::new("layout-1").to_path_buf());
}

#[test]
fn fails_outside_a_repository() {
    let temp = TempDir::new().unwrap();
    Command::cargo_bin("draftindex")
        .unwrap()
        .arg(temp.path())
        .assert()
        .failure();
}

#[test]
fn help_describes_the_tool() {
    Command::cargo_bin("draftindex")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("specification registry builder"));
}
