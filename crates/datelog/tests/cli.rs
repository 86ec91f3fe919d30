//! CLI integration tests for datelog
//!
//! Each test builds a throwaway git repository with fixed commit times and
//! runs the real binary against it.

use std::fs;
use std::path::Path;

use git2::{Repository, Signature, Time};
use predicates::prelude::*;
use tempfile::TempDir;

/// Get a command instance for the datelog binary, isolated from the caller's environment
fn datelog_cmd(home: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("datelog"));
    cmd.env("HOME", home)
        .env_remove("RUST_LOG")
        .env_remove("INPUT_PATH")
        .env_remove("INPUT_FILENAME")
        .env_remove("INPUT_DEBUG")
        .env_remove("INPUT_DRY_RUN");
    cmd
}

/// Commit an empty tree on top of HEAD
fn commit(repo: &Repository, message: &str, author: &str, seconds: i64) -> String {
    let sig = Signature::new(author, &format!("{author}@example.com"), &Time::new(seconds, 0)).unwrap();
    let tree_id = repo.index().unwrap().write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
    let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();

    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
        .unwrap()
        .to_string()
}

// 2024-01-04, 2024-01-05 and 2024-01-06 at noon UTC
const JAN_4: i64 = 1_704_369_600;
const JAN_5: i64 = 1_704_456_000;
const JAN_6: i64 = 1_704_542_400;

struct Fixture {
    home: TempDir,
    repo_dir: TempDir,
    hashes: Vec<String>,
}

impl Fixture {
    fn new(messages: &[(&str, &str, i64)]) -> Self {
        let home = TempDir::new().unwrap();
        let repo_dir = TempDir::new().unwrap();
        let repo = Repository::init(repo_dir.path()).unwrap();
        let hashes = messages
            .iter()
            .map(|(message, author, seconds)| commit(&repo, message, author, *seconds))
            .collect();

        Self {
            home,
            repo_dir,
            hashes,
        }
    }

    fn cmd(&self) -> assert_cmd::Command {
        datelog_cmd(self.home.path())
    }

    fn short(&self, index: usize) -> &str {
        &self.hashes[index][..8]
    }
}

// =============================================================================
// Generate Tests
// =============================================================================

#[test]
fn test_generate_writes_changelog() {
    let fixture = Fixture::new(&[
        ("Initial commit", "alice", JAN_4),
        ("fix: null check", "bob", JAN_5),
        ("feat: add login", "alice", JAN_5 + 60),
    ]);

    fixture
        .cmd()
        .arg("generate")
        .arg("--path")
        .arg(fixture.repo_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("CHANGELOG.md written"));

    let written = fs::read_to_string(fixture.repo_dir.path().join("CHANGELOG.md")).unwrap();
    let expected = format!(
        "# Changelog\n\
         ## 2024-01-05\n\
         ### Features\n\
         * add login by **@alice** in [{feat}](../../commit/{feat})\n\
         ### Fixes\n\
         * null check by **@bob** in [{fix}](../../commit/{fix})\n",
        feat = fixture.short(2),
        fix = fixture.short(1),
    );
    assert_eq!(written, expected);
}

#[test]
fn test_generate_custom_filename_from_env() {
    let fixture = Fixture::new(&[("perf: faster startup", "carol", JAN_6)]);

    fixture
        .cmd()
        .arg("generate")
        .env("INPUT_PATH", fixture.repo_dir.path())
        .env("INPUT_FILENAME", "HISTORY.md")
        .assert()
        .success();

    let written = fs::read_to_string(fixture.repo_dir.path().join("HISTORY.md")).unwrap();
    assert!(written.starts_with("# Changelog\n## 2024-01-06\n### Performance\n"));
    assert!(!fixture.repo_dir.path().join("CHANGELOG.md").exists());
}

#[test]
fn test_generate_empty_action_inputs_are_unset() {
    let fixture = Fixture::new(&[("fix: null check", "bob", JAN_5)]);

    fixture
        .cmd()
        .arg("generate")
        .env("INPUT_PATH", fixture.repo_dir.path())
        .env("INPUT_FILENAME", "")
        .env("INPUT_DEBUG", "")
        .env("INPUT_DRY_RUN", "")
        .assert()
        .success()
        .stdout(predicate::str::contains("CHANGELOG.md written"))
        .stdout(predicate::str::contains("### Fixes").not());

    assert!(fixture.repo_dir.path().join("CHANGELOG.md").exists());
}

#[test]
fn test_generate_falsey_action_inputs() {
    let fixture = Fixture::new(&[("fix: null check", "bob", JAN_5)]);

    fixture
        .cmd()
        .args(["generate", "-p"])
        .arg(fixture.repo_dir.path())
        .env("INPUT_DRY_RUN", "false")
        .env("INPUT_DEBUG", "true")
        .assert()
        .success()
        .stdout(predicate::str::contains("### Fixes"));

    assert!(fixture.repo_dir.path().join("CHANGELOG.md").exists());
}

#[test]
fn test_generate_rejects_absolute_filename() {
    let fixture = Fixture::new(&[("fix: null check", "bob", JAN_5)]);
    let outside = TempDir::new().unwrap();
    let target = outside.path().join("CHANGELOG.md");

    fixture
        .cmd()
        .args(["generate", "-p"])
        .arg(fixture.repo_dir.path())
        .arg("-f")
        .arg(&target)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("changelog.file"));

    assert!(!target.exists());
}

#[test]
fn test_generate_uses_configured_file() {
    let fixture = Fixture::new(&[("ci: cache deps", "dave", JAN_5)]);
    fs::write(
        fixture.repo_dir.path().join("datelog.toml"),
        "[changelog]\nfile = \"docs.md\"\n",
    )
    .unwrap();

    fixture
        .cmd()
        .args(["generate", "-p"])
        .arg(fixture.repo_dir.path())
        .assert()
        .success();

    assert!(fixture.repo_dir.path().join("docs.md").exists());
}

#[test]
fn test_generate_no_matches_writes_nothing() {
    let fixture = Fixture::new(&[
        ("docs: update readme", "alice", JAN_4),
        ("Merge branch 'main'", "bob", JAN_5),
    ]);

    fixture
        .cmd()
        .args(["generate", "-p"])
        .arg(fixture.repo_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No matching commits found"));

    assert!(!fixture.repo_dir.path().join("CHANGELOG.md").exists());
}

#[test]
fn test_generate_dry_run_with_debug_echo() {
    let fixture = Fixture::new(&[
        ("test: cover parser", "alice", JAN_6),
        ("build: pin toolchain", "bob", JAN_6 + 60),
    ]);

    fixture
        .cmd()
        .args(["generate", "--dry-run", "--debug", "-p"])
        .arg(fixture.repo_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("## 2024-01-06\n### Build\n"))
        .stdout(predicate::str::contains("### Tests\n* cover parser by **@alice**"));

    assert!(!fixture.repo_dir.path().join("CHANGELOG.md").exists());
}

#[test]
fn test_generate_debug_json() {
    let fixture = Fixture::new(&[("refactor: split module", "erin", JAN_4)]);

    let assert = fixture
        .cmd()
        .args(["--quiet", "--format", "json", "generate", "-z", "-d", "-p"])
        .arg(fixture.repo_dir.path())
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["dates"][0]["date"], "2024-01-04");
    assert_eq!(
        json["dates"][0]["categories"]["refactor"][0]["message"],
        "split module"
    );
}

#[test]
fn test_generate_malformed_commit_fails() {
    let fixture = Fixture::new(&[("feat: feat: twice", "alice", JAN_5)]);

    fixture
        .cmd()
        .args(["generate", "-p"])
        .arg(fixture.repo_dir.path())
        .assert()
        .code(4)
        .stderr(predicate::str::contains("more than once"));

    assert!(!fixture.repo_dir.path().join("CHANGELOG.md").exists());
}

#[test]
fn test_generate_reports_malformed_reason_once() {
    let fixture = Fixture::new(&[("fix:missing space", "alice", JAN_5)]);

    let assert = fixture
        .cmd()
        .args(["generate", "-p"])
        .arg(fixture.repo_dir.path())
        .assert()
        .code(4);

    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    assert_eq!(stderr.matches("not found at the start").count(), 1, "{stderr}");
}

#[test]
fn test_generate_keeps_empty_message() {
    let fixture = Fixture::new(&[("feat: \n\nbody only", "alice", JAN_5)]);

    fixture
        .cmd()
        .args(["generate", "-q", "-p"])
        .arg(fixture.repo_dir.path())
        .assert()
        .success();

    let written = fs::read_to_string(fixture.repo_dir.path().join("CHANGELOG.md")).unwrap();
    let expected = format!(
        "# Changelog\n## 2024-01-05\n### Features\n*  by **@alice** in [{short}](../../commit/{short})\n",
        short = fixture.short(0),
    );
    assert_eq!(written, expected);
}

#[test]
fn test_generate_bare_repository_fails() {
    let home = TempDir::new().unwrap();
    let bare = TempDir::new().unwrap();
    Repository::init_bare(bare.path()).unwrap();

    datelog_cmd(home.path())
        .args(["generate", "-p"])
        .arg(bare.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Bare repository"));
}

#[test]
fn test_generate_missing_repository_fails() {
    let home = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();

    datelog_cmd(home.path())
        .args(["generate", "-p"])
        .arg(dir.path().join("missing"))
        .assert()
        .code(3);
}

#[test]
fn test_generate_is_idempotent() {
    let fixture = Fixture::new(&[
        ("style: fmt", "alice", JAN_4),
        ("fix: edge case", "bob", JAN_5),
        ("feat: export", "carol", JAN_6),
    ]);
    let path = fixture.repo_dir.path().join("CHANGELOG.md");

    for _ in 0..2 {
        fixture
            .cmd()
            .args(["generate", "-q", "-p"])
            .arg(fixture.repo_dir.path())
            .assert()
            .success();
    }
    let first = fs::read_to_string(&path).unwrap();

    fixture
        .cmd()
        .args(["generate", "-q", "-p"])
        .arg(fixture.repo_dir.path())
        .assert()
        .success();
    assert_eq!(fs::read_to_string(&path).unwrap(), first);

    let dates: Vec<_> = first.lines().filter(|l| l.starts_with("## ")).collect();
    assert_eq!(dates, vec!["## 2024-01-06", "## 2024-01-05", "## 2024-01-04"]);
}

// =============================================================================
// Init Tests
// =============================================================================

#[test]
fn test_init_writes_config() {
    let home = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();

    datelog_cmd(home.path())
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration"));

    let content = fs::read_to_string(dir.path().join("datelog.yaml")).unwrap();
    assert!(content.contains("file: CHANGELOG.md"));

    // Second run refuses to overwrite
    datelog_cmd(home.path())
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    datelog_cmd(home.path())
        .current_dir(dir.path())
        .args(["init", "--toml"])
        .assert()
        .success();
    assert!(dir.path().join("datelog.toml").exists());
}
