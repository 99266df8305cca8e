use assert_cmd::Command;

#[test]
fn test_server_command_available() {
    let mut cmd = Command::cargo_bin("tally").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicates::str::contains("server"));
}

#[test]
fn test_server_rejects_bad_port() {
    let mut cmd = Command::cargo_bin("tally").unwrap();
    cmd.args(["server", "--port", "not-a-port"]);

    cmd.assert().failure();
}
