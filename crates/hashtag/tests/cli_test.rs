// CLI behavior: output shapes and exit codes.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn hashtag_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("hashtag"))
}

fn write_dict(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp dict");
    file.write_all(contents.as_bytes()).expect("write temp dict");
    file
}

#[test]
fn suggest_lists_ranked_candidates() {
    let dict = write_dict("this\nis\na\ntest\n");

    hashtag_cmd()
        .arg("suggest")
        .arg("--dict")
        .arg(dict.path())
        .arg("thisisatest")
        .assert()
        .success()
        .stdout(predicate::str::contains("4 - ThisIsATest"));
}

#[test]
fn suggest_json_emits_the_complete_response() {
    let dict = write_dict("this\nis\na\ntest\n");

    let assert = hashtag_cmd()
        .arg("suggest")
        .arg("--dict")
        .arg(dict.path())
        .arg("--json")
        .arg("--debug")
        .arg("thisisatest")
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let responses: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(responses[0]["input"], "thisisatest");
    assert_eq!(responses[0]["hashtags"][0]["string"], "ThisIsATest");
    assert_eq!(responses[0]["hashtags"][0]["words"], 4);
    assert_eq!(responses[0]["matches"][0]["word"], "this");
}

#[test]
fn debug_is_off_by_default() {
    let dict = write_dict("this\nis\na\ntest\n");

    let assert = hashtag_cmd()
        .arg("suggest")
        .arg("--dict")
        .arg(dict.path())
        .arg("--json")
        .arg("thisisatest")
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let responses: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(responses[0].get("matches").is_none());
}

#[test]
fn missing_dictionary_fails_with_context() {
    hashtag_cmd()
        .arg("suggest")
        .arg("--dict")
        .arg("/no/such/dictionary.txt")
        .arg("thisisatest")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load dictionary"));
}

#[test]
fn repl_reads_stdin() {
    let dict = write_dict("this\nis\na\ntest\n");

    hashtag_cmd()
        .arg("repl")
        .arg("--dict")
        .arg(dict.path())
        .write_stdin("thisisatest\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("4 - ThisIsATest"));
}
