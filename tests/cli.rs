use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_server_options() {
    Command::cargo_bin("contact-directory")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--host"))
        .stdout(predicate::str::contains("--port"))
        .stdout(predicate::str::contains("--log-level"))
        .stdout(predicate::str::contains("CONTACTS_PORT"));
}

#[test]
fn invalid_inputs() {
    // INVALID PORT
    Command::cargo_bin("contact-directory")
        .unwrap()
        .args(["--port", "not-a-port"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'not-a-port'"));

    // INVALID HOST
    Command::cargo_bin("contact-directory")
        .unwrap()
        .args(["--host", "localhost:5000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--host"));

    // INVALID LOG LEVEL
    Command::cargo_bin("contact-directory")
        .unwrap()
        .args(["--log-level", "loud"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--log-level"));

    // UNKNOWN FLAG
    Command::cargo_bin("contact-directory")
        .unwrap()
        .arg("--storage-choice")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument '--storage-choice'"));
}
