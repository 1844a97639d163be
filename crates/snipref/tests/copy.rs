use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn write_file(root: &Path, relative: &str, contents: &str) -> std::path::PathBuf {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, contents).unwrap();
    path
}

fn snipref() -> Command {
    let mut cmd = Command::cargo_bin("snipref").expect("binary exists");
    // Keep user-level config out of the test environment.
    cmd.env("SNIPREF_OUTPUT", "stdout");
    cmd
}

#[test]
fn code_copies_reference_and_fenced_block() {
    let dir = TempDir::new().unwrap();
    let mut contents = String::new();
    for _ in 0..9 {
        contents.push_str("// padding\n");
    }
    contents.push_str("const x = 1;\nconst y = 2;\nconst z = 3;\n");
    let file = write_file(dir.path(), "src/app.ts", &contents);

    snipref()
        .arg("code")
        .arg(format!("{}:10-12", file.display()))
        .arg("--root")
        .arg(dir.path())
        .arg("--stdout")
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "src/app.ts:10-12\n```typescript\nconst x = 1;\nconst y = 2;\nconst z = 3;\n```\n",
        ))
        .stderr(predicate::str::contains("copied src/app.ts:10-12"));
}

#[test]
fn path_copies_single_line_reference() {
    let dir = TempDir::new().unwrap();
    let file = write_file(dir.path(), "main.rs", "fn main() {}\nprintln!();\n");

    snipref()
        .arg("path")
        .arg(format!("{}:2", file.display()))
        .arg("--root")
        .arg(dir.path())
        .arg("--stdout")
        .assert()
        .success()
        .stdout(predicate::str::diff("main.rs:2\n"));
}

#[test]
fn lines_flag_overrides_locator_range() {
    let dir = TempDir::new().unwrap();
    let file = write_file(dir.path(), "notes.md", "alpha\nbeta\ngamma\n");

    snipref()
        .arg("path")
        .arg(file.display().to_string())
        .args(["--lines", "1-2"])
        .arg("--root")
        .arg(dir.path())
        .arg("--stdout")
        .assert()
        .success()
        .stdout(predicate::str::diff("notes.md:1-2\n"));
}

#[test]
fn missing_target_warns_and_fails() {
    let dir = TempDir::new().unwrap();

    snipref()
        .arg("path")
        .arg(dir.path().join("nope.rs").display().to_string())
        .arg("--root")
        .arg(dir.path())
        .arg("--stdout")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("warning: no active selection"));
}

#[test]
fn empty_selection_warns_and_fails() {
    let dir = TempDir::new().unwrap();
    let file = write_file(dir.path(), "short.txt", "only line\n");

    snipref()
        .arg("code")
        .arg(format!("{}:5-8", file.display()))
        .arg("--root")
        .arg(dir.path())
        .arg("--stdout")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("selection is empty"));
}

#[test]
fn workspace_config_overrides_language_tag() {
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        ".snipref/config.toml",
        "[languages]\nfoo = \"foolang\"\n",
    );
    let file = write_file(dir.path(), "lib.foo", "hello\n");

    snipref()
        .arg("code")
        .arg(format!("{}:1", file.display()))
        .arg("--root")
        .arg(dir.path())
        .arg("--stdout")
        .assert()
        .success()
        .stdout(predicate::str::diff("lib.foo:1\n```foolang\nhello\n```\n"));
}
