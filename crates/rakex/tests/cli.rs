//! CLI integration tests for rakex commands.
//!
//! These tests focus on exit codes and basic behavioral verification,
//! not specific output formatting which may change.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;

/// Text whose keywords are easy to verify by hand.
const SCENARIO: &str = "Compatibility of systems of linear constraints";

/// Helper to create a temp directory for tests.
fn temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().unwrap()
}

/// Helper to get a rakex command.
fn rakex() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("rakex").unwrap()
}

/// Helper to run `rakex` with HOME isolated to the provided directory.
fn rakex_with_home(home: &Path) -> Command {
    let mut cmd = rakex();
    cmd.env("HOME", home);
    cmd
}

/// Creates a root config in `dir` using `stopwords.txt` containing `words`.
fn setup_stopwords(dir: &Path, words: &str) {
    fs::write(dir.join("stopwords.txt"), words).unwrap();
    fs::write(
        dir.join(".rakex.toml"),
        "root = true\n[extract]\nstopwords = \"stopwords.txt\"\n",
    )
    .unwrap();
}

mod init {
    use super::*;

    #[test]
    fn creates_config_and_stopword_list() {
        let home = temp_dir();
        let work = temp_dir();

        rakex_with_home(home.path())
            .current_dir(work.path())
            .arg("init")
            .assert()
            .success();

        let contents = fs::read_to_string(work.path().join(".rakex.toml")).unwrap();
        assert!(contents.contains("stopwords = \"stopwords.txt\""));
        assert!(contents.contains("# mode = \"simple\""));

        let list = fs::read_to_string(work.path().join("stopwords.txt")).unwrap();
        assert!(list.lines().any(|line| line == "the"));
    }

    #[test]
    fn initialized_directory_extracts_with_starter_list() {
        let home = temp_dir();
        let work = temp_dir();

        rakex_with_home(home.path())
            .current_dir(work.path())
            .arg("init")
            .assert()
            .success();
        fs::write(work.path().join("stopwords.txt"), "of\n").unwrap();

        rakex_with_home(home.path())
            .current_dir(work.path())
            .args(["extract", SCENARIO])
            .assert()
            .success()
            .stdout(predicate::str::contains("linear constraints"));
    }

    #[test]
    fn fails_if_config_exists() {
        let home = temp_dir();
        let work = temp_dir();
        fs::write(work.path().join(".rakex.toml"), "existing").unwrap();

        rakex_with_home(home.path())
            .current_dir(work.path())
            .arg("init")
            .assert()
            .failure()
            .stderr(predicate::str::contains("--force"));

        assert!(!work.path().join("stopwords.txt").exists());
    }

    #[test]
    fn force_overwrites_config_but_keeps_stopwords() {
        let home = temp_dir();
        let work = temp_dir();
        fs::write(work.path().join(".rakex.toml"), "old content").unwrap();
        fs::write(work.path().join("stopwords.txt"), "curated\n").unwrap();

        rakex_with_home(home.path())
            .current_dir(work.path())
            .args(["init", "--force"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Kept existing"));

        let contents = fs::read_to_string(work.path().join(".rakex.toml")).unwrap();
        assert!(contents.contains("[extract]"));
        let list = fs::read_to_string(work.path().join("stopwords.txt")).unwrap();
        assert_eq!(list, "curated\n");
    }

    #[test]
    fn prints_config_preview() {
        let home = temp_dir();
        let work = temp_dir();

        rakex_with_home(home.path())
            .current_dir(work.path())
            .arg("init")
            .assert()
            .success()
            .stdout(predicate::str::contains("Configuration written:"))
            .stdout(predicate::str::contains("min_word_len"));
    }

    #[test]
    fn global_writes_to_home() {
        let home = temp_dir();
        let work = temp_dir();

        rakex_with_home(home.path())
            .current_dir(work.path())
            .args(["init", "--global"])
            .assert()
            .success();

        assert!(home.path().join(".rakex.toml").exists());
        assert!(home.path().join(".rakex-stopwords.txt").exists());
        assert!(!work.path().join(".rakex.toml").exists());
    }

    #[test]
    fn home_directory_defaults_to_global() {
        let home = temp_dir();

        rakex_with_home(home.path())
            .current_dir(home.path())
            .arg("init")
            .assert()
            .success();

        assert!(home.path().join(".rakex-stopwords.txt").exists());
        assert!(!home.path().join("stopwords.txt").exists());
    }
}

mod config {
    use super::*;

    #[test]
    fn shows_defaults_without_config() {
        let dir = temp_dir();

        rakex_with_home(dir.path())
            .current_dir(dir.path())
            .arg("config")
            .assert()
            .success()
            .stdout(predicate::str::contains("[extract]"))
            .stdout(predicate::str::contains("mode = \"simple\""))
            .stdout(predicate::str::contains("punctuation sentence splitting"));
    }

    #[test]
    fn shows_merged_settings_and_overrides() {
        let dir = temp_dir();
        fs::write(
            dir.path().join(".rakex.toml"),
            "root = true\n[extract]\nMIN_WORD_LEN = 2\nSTOPTAG = \"JKS,JKO\"\n",
        )
        .unwrap();

        rakex_with_home(dir.path())
            .current_dir(dir.path())
            .args(["config", "--min-token-len", "5"])
            .assert()
            .success()
            .stdout(predicate::str::contains("min_word_len = 2"))
            .stdout(predicate::str::contains("min_token_len = 5"))
            .stdout(predicate::str::contains("JKO"));
    }

    #[test]
    fn fails_on_invalid_toml() {
        let dir = temp_dir();
        fs::write(dir.path().join(".rakex.toml"), "[extract\nbroken").unwrap();

        rakex_with_home(dir.path())
            .current_dir(dir.path())
            .arg("config")
            .assert()
            .failure()
            .stderr(predicate::str::contains("error:"));
    }

    #[test]
    fn fails_on_malformed_number() {
        let dir = temp_dir();
        fs::write(
            dir.path().join(".rakex.toml"),
            "root = true\n[extract]\nmin_word_len = -1\n",
        )
        .unwrap();

        rakex_with_home(dir.path())
            .current_dir(dir.path())
            .arg("config")
            .assert()
            .failure();
    }
}

mod extract {
    use super::*;

    #[test]
    fn ranks_scenario_keywords() {
        let dir = temp_dir();
        setup_stopwords(dir.path(), "of\n");

        let output = rakex_with_home(dir.path())
            .current_dir(dir.path())
            .args(["extract", "--json", SCENARIO])
            .output()
            .unwrap();
        assert!(output.status.success());

        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        let keywords = json["keywords"].as_array().unwrap();
        assert_eq!(json["total"], 3);
        assert_eq!(keywords[0]["phrase"], "linear constraints");
        assert_eq!(keywords[0]["score"], 4.0);
        assert_eq!(keywords[1]["phrase"], "compatibility");
        assert_eq!(keywords[2]["phrase"], "systems");
    }

    #[test]
    fn prints_table() {
        let dir = temp_dir();
        setup_stopwords(dir.path(), "of\n");

        rakex_with_home(dir.path())
            .current_dir(dir.path())
            .args(["extract", SCENARIO])
            .assert()
            .success()
            .stdout(predicate::str::contains("linear constraints"))
            .stdout(predicate::str::contains("4.00"));
    }

    #[test]
    fn reads_stdin() {
        let dir = temp_dir();
        setup_stopwords(dir.path(), "of\n");

        rakex_with_home(dir.path())
            .current_dir(dir.path())
            .args(["extract", "--top-third"])
            .write_stdin(SCENARIO)
            .assert()
            .success()
            .stdout(predicate::str::contains("linear constraints"))
            .stdout(predicate::str::contains("systems").not());
    }

    #[test]
    fn reads_file_and_limits() {
        let dir = temp_dir();
        setup_stopwords(dir.path(), "of\n");
        fs::write(dir.path().join("doc.txt"), SCENARIO).unwrap();

        let output = rakex_with_home(dir.path())
            .current_dir(dir.path())
            .args(["extract", "--file", "doc.txt", "-n", "2", "--json"])
            .output()
            .unwrap();
        assert!(output.status.success());

        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["keywords"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn stopword_override_flag() {
        let dir = temp_dir();
        fs::write(dir.path().join("mine.txt"), "of\nsystems\n").unwrap();

        rakex_with_home(dir.path())
            .current_dir(dir.path())
            .args(["extract", "--stopwords", "mine.txt", SCENARIO])
            .assert()
            .success()
            .stdout(predicate::str::contains("systems").not())
            .stdout(predicate::str::contains("compatibility"));
    }

    #[test]
    fn uses_builtin_stopwords_by_default() {
        let dir = temp_dir();

        let output = rakex_with_home(dir.path())
            .current_dir(dir.path())
            .args(["extract", "--json", "The compatibility of the constraints"])
            .output()
            .unwrap();
        assert!(output.status.success());

        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        let phrases: Vec<&str> = json["keywords"]
            .as_array()
            .unwrap()
            .iter()
            .map(|k| k["phrase"].as_str().unwrap())
            .collect();
        assert!(phrases.contains(&"compatibility"));
        assert!(phrases.contains(&"constraints"));
        assert!(!phrases.iter().any(|p| p.split(' ').any(|w| w == "the" || w == "of")));
    }

    #[test]
    fn linguistic_mode_reads_tagged_text() {
        let dir = temp_dir();
        setup_stopwords(dir.path(), "하다\n");

        let output = rakex_with_home(dir.path())
            .current_dir(dir.path())
            .args([
                "extract",
                "--json",
                "--mode",
                "linguistic",
                "--stoptags",
                "JKS,JKO",
                "선형/NNG 제약/NNG 이/JKS 중요/NNG 하다/VV",
            ])
            .output()
            .unwrap();
        assert!(output.status.success());

        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["keywords"][0]["phrase"], "선형 제약");
        assert_eq!(json["total"], 2);
    }

    #[test]
    fn fails_on_missing_stopword_file() {
        let dir = temp_dir();

        rakex_with_home(dir.path())
            .current_dir(dir.path())
            .args(["extract", "--stopwords", "missing.txt", SCENARIO])
            .assert()
            .failure()
            .stderr(predicate::str::contains("missing.txt"));
    }

    #[test]
    fn empty_input_finds_nothing() {
        let dir = temp_dir();
        setup_stopwords(dir.path(), "of\n");

        rakex_with_home(dir.path())
            .current_dir(dir.path())
            .arg("extract")
            .write_stdin("")
            .assert()
            .success()
            .stdout(predicate::str::contains("No keywords found."));
    }
}

mod batch {
    use super::*;

    #[test]
    fn writes_top_third_per_document() {
        let dir = temp_dir();
        setup_stopwords(dir.path(), "of\n");
        let docs = dir.path().join("docs");
        fs::create_dir(&docs).unwrap();
        fs::write(docs.join("a.txt"), SCENARIO).unwrap();
        fs::write(docs.join("b.txt"), "Systems").unwrap();

        rakex_with_home(dir.path())
            .current_dir(dir.path())
            .args(["batch", "--documents", "docs", "--output", "out"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Wrote 2"));

        let a = fs::read_to_string(dir.path().join("out/a.txt")).unwrap();
        assert_eq!(a, "linear constraints\n");
        let b = fs::read_to_string(dir.path().join("out/b.txt")).unwrap();
        assert_eq!(b, "");
    }

    #[test]
    fn fails_when_documents_is_not_a_directory() {
        let dir = temp_dir();
        fs::write(dir.path().join("file.txt"), SCENARIO).unwrap();

        rakex_with_home(dir.path())
            .current_dir(dir.path())
            .args(["batch", "--documents", "file.txt", "--output", "out"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("not a directory"));
    }
}

mod repl {
    use super::*;

    #[test]
    fn extracts_until_quit() {
        let dir = temp_dir();
        setup_stopwords(dir.path(), "of\n");

        rakex_with_home(dir.path())
            .current_dir(dir.path())
            .arg("repl")
            .write_stdin(format!("{SCENARIO}\nquit\n{SCENARIO}\n"))
            .assert()
            .success()
            .stdout(predicate::str::contains("INPUT: "))
            .stdout(predicate::str::contains("linear constraints : 4"))
            .stdout(predicate::str::contains("compatibility : 1"));
    }

    #[test]
    fn commands_are_case_insensitive() {
        let dir = temp_dir();
        setup_stopwords(dir.path(), "of\n");

        rakex_with_home(dir.path())
            .current_dir(dir.path())
            .arg("repl")
            .write_stdin(format!("RELOAD\nQuit\n{SCENARIO}\n"))
            .assert()
            .success()
            .stdout(predicate::str::contains("reloaded 1 stopwords"))
            .stdout(predicate::str::contains("linear constraints").not())
            .stdout(predicate::str::contains("quit").not());
    }

    #[test]
    fn reload_rereads_stopword_file() {
        let dir = temp_dir();
        setup_stopwords(dir.path(), "of\n");

        rakex_with_home(dir.path())
            .current_dir(dir.path())
            .arg("repl")
            .write_stdin(format!("reload\n{SCENARIO}\n"))
            .assert()
            .success()
            .stdout(predicate::str::contains("reloaded 1 stopwords"))
            .stdout(predicate::str::contains("linear constraints : 4"));
    }
}
