//! CLI tests driving the built binary.

use crate::common::{ALICE, DataDir};
use assert_cmd::Command;
use predicates::prelude::*;

fn chara_expand() -> Command {
    Command::cargo_bin("chara-expand").expect("binary builds")
}

#[test]
fn expand_prints_the_expanded_prompt() {
    let data = DataDir::new();
    data.write_namespace("characters", ALICE);

    chara_expand()
        .args(["expand", "@characters:alice masterpiece", "--seed", "7"])
        .args(["--data-dir", data.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout("1girl, blonde hair, short hair, blue eyes masterpiece\n");
}

#[test]
fn expand_count_prints_one_line_per_seed() {
    let data = DataDir::new();
    data.write_namespace("places", "a: ruins\nb: city\nc: forest\n");

    let assert = chara_expand()
        .args(["expand", "@places:random", "--seed", "100", "--count", "3"])
        .args(["--data-dir", data.path().to_str().unwrap()])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(stdout.lines().count(), 3);
}

#[test]
fn expand_json_format_reports_the_seed() {
    let data = DataDir::new();
    data.write_namespace("characters", ALICE);

    chara_expand()
        .args(["expand", "@characters:alice", "--seed", "5", "--format", "json"])
        .args(["--data-dir", data.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"seed\":5"))
        .stdout(predicate::str::contains("\"prompt\":"));
}

#[test]
fn expand_rejects_unknown_formats() {
    let data = DataDir::new();

    chara_expand()
        .args(["expand", "plain", "--format", "xml"])
        .args(["--data-dir", data.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown output format"));
}

#[test]
fn expand_without_tags_is_identity() {
    let data = DataDir::new();

    chara_expand()
        .args(["expand", "masterpiece, best quality"])
        .args(["--data-dir", data.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout("masterpiece, best quality\n");
}

#[test]
fn list_shows_namespaces_and_keys() {
    let data = DataDir::new();
    data.write_namespace("characters", ALICE);
    data.write_namespace("outfits/winter", "coat: warm coat\n");

    chara_expand()
        .args(["list", "--keys"])
        .args(["--data-dir", data.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("characters (1 entries)"))
        .stdout(predicate::str::contains("outfits/winter (1 entries)"))
        .stdout(predicate::str::contains("alice"))
        .stdout(predicate::str::contains("coat"));
}

#[test]
fn validate_passes_on_clean_dictionaries() {
    let data = DataDir::new();
    data.write_namespace("characters", ALICE);

    chara_expand()
        .arg("validate")
        .args(["--data-dir", data.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("OK"));
}

#[test]
fn validate_fails_on_conflicting_filter_entries() {
    let data = DataDir::new();
    data.write_namespace(
        "situations",
        "broken:
  prompt: text
  include:
    - base
  exclude:
    - hair
",
    );

    chara_expand()
        .arg("validate")
        .args(["--data-dir", data.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("declares both 'include' and 'exclude'"));
}

#[test]
fn validate_fails_on_malformed_yaml() {
    let data = DataDir::new();
    data.write_namespace("broken", "key: [unclosed\n");

    chara_expand()
        .arg("validate")
        .args(["--data-dir", data.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("broken"));
}
