//! CLI integration tests using the real microblog binary

mod common;

use common::TestSite;
use predicates::prelude::*;

const POST_PREFIX: &str = "---\ndate: ";

#[test]
fn test_help_output() {
    TestSite::new()
        .cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("microblog:setup"))
        .stdout(predicate::str::contains("log"));
}

#[test]
fn test_setup_in_empty_site() {
    let site = TestSite::new();

    site.cmd()
        .arg("microblog:setup")
        .write_stdin("notes\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Collection name (default: microposts):"))
        .stdout(predicate::str::contains(
            "Microblog setup complete: Collection 'notes' configured",
        ));

    let config = site.read_file("_config.yml");
    assert!(config.contains("collections:\n  notes:\n    output: true\n"));
    assert!(config.contains("microblog:\n  collection: notes\n"));
    assert!(site.list_dir("_notes").is_empty());
}

#[test]
fn test_setup_with_empty_input_uses_microposts() {
    let site = TestSite::new();

    site.cmd()
        .arg("microblog:setup")
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Collection 'microposts' configured"));

    assert!(site.file_exists("_microposts"));
    assert!(
        site.read_file("_config.yml")
            .contains("microblog:\n  collection: microposts\n")
    );
}

#[test]
fn test_setup_twice_leaves_config_unchanged() {
    let site = TestSite::with_config("title: My Blog\n# comment stays\nfoo: bar\n");

    site.cmd().arg("microblog:setup").write_stdin("notes\n").assert().success();
    let first = site.read_file("_config.yml");
    site.cmd().arg("microblog:setup").write_stdin("notes\n").assert().success();
    let second = site.read_file("_config.yml");

    assert_eq!(first, second);
    assert!(first.starts_with("title: My Blog\n# comment stays\nfoo: bar\n"));
}

#[test]
fn test_setup_keeps_existing_collection_block() {
    let original = "collections:\n  demo:\n    output: true\n    permalink: /:title/\n";
    let site = TestSite::with_config(original);

    site.cmd().arg("microblog:setup").write_stdin("demo\n").assert().success();

    assert_eq!(
        site.read_file("_config.yml"),
        format!("{original}\nmicroblog:\n  collection: demo\n")
    );
}

#[test]
fn test_log_creates_micropost() {
    let site = TestSite::with_config("microblog:\n  collection: notes\n");

    let output = site
        .cmd()
        .args(["log", "Hello", "world"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created micropost: _notes/"))
        .get_output()
        .stdout
        .clone();

    let posts = site.list_dir("_notes");
    assert_eq!(posts.len(), 1);
    let name = &posts[0];
    assert!(name.ends_with(".md"));
    assert!(String::from_utf8_lossy(&output).contains(name.as_str()));

    let content = site.read_file(&format!("_notes/{name}"));
    assert!(content.starts_with(POST_PREFIX));
    assert!(content.ends_with("\n---\n\nHello world\n"));
    assert_eq!(content.lines().count(), 5);
}

#[test]
fn test_log_without_setup_fails() {
    let site = TestSite::new();

    site.cmd()
        .args(["log", "Hi"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Microblog not configured."))
        .stderr(predicate::str::contains("microblog:setup"));

    assert!(site.list_dir(".").iter().all(|name| !name.starts_with('_')));
}

#[test]
fn test_log_with_source_option() {
    let site = TestSite::with_config("microblog:\n  collection: notes\n");
    let elsewhere = TestSite::new();

    elsewhere
        .cmd()
        .arg("--source")
        .arg(&site.path)
        .args(["log", "From afar"])
        .assert()
        .success();

    assert_eq!(site.list_dir("_notes").len(), 1);
    assert!(elsewhere.list_dir(".").is_empty());
}

#[test]
fn test_setup_then_log() {
    let site = TestSite::new();

    site.cmd().arg("microblog:setup").write_stdin("status\n").assert().success();
    site.cmd().args(["log", "first", "post"]).assert().success();

    let posts = site.list_dir("_status");
    assert_eq!(posts.len(), 1);
    assert!(
        site.read_file(&format!("_status/{}", posts[0]))
            .ends_with("\n\nfirst post\n")
    );
}
