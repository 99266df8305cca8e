use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_rpn_separate_tokens() {
    let mut cmd = Command::cargo_bin("tally").unwrap();
    cmd.args(["rpn", "2", "3", "4", "*", "+"]);

    cmd.assert().success().stdout("14.000000\n");
}

#[test]
fn test_rpn_single_string() {
    let mut cmd = Command::cargo_bin("tally").unwrap();
    cmd.args(["rpn", "8 3 - 2 -"]);

    cmd.assert().success().stdout("3.000000\n");
}

#[test]
fn test_rpn_leading_operator_is_accepted_as_token() {
    let mut cmd = Command::cargo_bin("tally").unwrap();
    cmd.args(["rpn", "-"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid expression"));
}

#[test]
fn test_rpn_unknown_operator() {
    let mut cmd = Command::cargo_bin("tally").unwrap();
    cmd.args(["rpn", "2", "3", "^"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid character '^'"));
}
