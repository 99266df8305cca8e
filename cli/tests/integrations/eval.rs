use assert_cmd::Command;
use predicates::prelude::*;

fn tally() -> Command {
    Command::cargo_bin("tally").unwrap()
}

#[test]
fn test_eval_prints_fixed_result() {
    tally()
        .args(["eval", "2+3*4"])
        .assert()
        .success()
        .stdout("14.000000\n");
}

#[test]
fn test_eval_parentheses() {
    tally()
        .args(["eval", "(2+3)*4"])
        .assert()
        .success()
        .stdout("20.000000\n");
}

#[test]
fn test_eval_postfix_flag() {
    tally()
        .args(["eval", "--postfix", "8-3-2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("postfix: 8 3 - 2 -"))
        .stdout(predicate::str::contains("3.000000"));
}

#[test]
fn test_eval_steps_flag() {
    tally()
        .args(["eval", "--steps", "2+3*4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Token"))
        .stdout(predicate::str::contains("3 * 4 = 12"))
        .stdout(predicate::str::contains("14.000000"));
}

#[test]
fn test_eval_json_flag() {
    tally()
        .args(["eval", "--json", "1/4"])
        .assert()
        .success()
        .stdout("{\"result\":\"0.250000\"}\n");
}

#[test]
fn test_eval_json_flag_on_error() {
    tally()
        .args(["eval", "--json", "1/0"])
        .assert()
        .failure()
        .code(1)
        .stdout("{\"error\":\"Internal server error\"}\n")
        .stderr("");
}

#[test]
fn test_eval_invalid_character() {
    tally()
        .args(["eval", "2+a"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid character 'a'"));
}

#[test]
fn test_eval_unbalanced() {
    tally()
        .args(["eval", "(1+2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unbalanced parentheses"));
}

#[test]
fn test_eval_division_by_zero() {
    tally()
        .args(["eval", "5/0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Division by zero"));
}

#[test]
fn test_eval_invalid_expression() {
    tally()
        .args(["eval", "--", "-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid expression"));
}
