//! CLI integration tests.
//!
//! These drive the compiled binary non-interactively: every form has a
//! flag-based path, so no test needs a TTY.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn folio(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("folio").unwrap();
    cmd.arg("--data-dir").arg(data_dir.path());
    cmd
}

#[test]
fn status_on_empty_portfolio_lists_all_steps() {
    let temp = TempDir::new().unwrap();

    folio(&temp)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Profile setup"))
        .stdout(predicate::str::contains("Availability"))
        .stdout(predicate::str::contains("Next: folio profile"));
}

#[test]
fn status_is_the_default_command() {
    let temp = TempDir::new().unwrap();

    folio(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("Portfolio builder"));
}

#[test]
fn profile_flags_complete_the_profile_step() {
    let temp = TempDir::new().unwrap();

    folio(&temp)
        .args(["profile", "--name", "Ada Lovelace", "--tagline", "Engineer"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Profile saved"));

    folio(&temp)
        .args(["status", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"profile\": true"))
        .stdout(predicate::str::contains("\"previewReady\": true"));
}

#[test]
fn service_add_and_list_round_trip() {
    let temp = TempDir::new().unwrap();

    folio(&temp)
        .args([
            "services", "add", "--title", "Web development", "--pricing", "hourly", "--amount",
            "85", "--delivery", "2 weeks",
        ])
        .assert()
        .success();

    folio(&temp)
        .args(["services", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Web development"))
        .stdout(predicate::str::contains("hourly"));
}

#[test]
fn removing_an_unknown_service_still_succeeds() {
    let temp = TempDir::new().unwrap();

    folio(&temp)
        .args(["services", "remove", "svc_missing"])
        .assert()
        .success();
}

#[test]
fn editing_an_unknown_service_fails_cleanly() {
    let temp = TempDir::new().unwrap();

    folio(&temp)
        .args(["services", "edit", "svc_missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No service with id"));
}

#[test]
fn availability_flags_complete_the_step() {
    let temp = TempDir::new().unwrap();

    folio(&temp)
        .args([
            "availability",
            "--timezone",
            "Europe/Berlin",
            "--slot",
            "Monday,09:00,12:00",
            "--communication",
            "zoom",
        ])
        .assert()
        .success();

    folio(&temp)
        .args(["status", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"availability\": true"));
}

#[test]
fn malformed_slot_flag_is_rejected() {
    let temp = TempDir::new().unwrap();

    folio(&temp)
        .args(["availability", "--timezone", "UTC", "--slot", "Monday"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input"));
}

#[test]
fn preview_renders_filled_sections() {
    let temp = TempDir::new().unwrap();

    folio(&temp)
        .args(["profile", "--name", "Ada", "--tagline", "Engineer"])
        .assert()
        .success();
    folio(&temp)
        .args(["testimonials", "add", "--client", "Grace", "--rating", "4"])
        .assert()
        .success();

    folio(&temp)
        .arg("preview")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ada"))
        .stdout(predicate::str::contains("Testimonials"))
        .stdout(predicate::str::contains("avg rating 4.0"));
}

#[test]
fn export_writes_a_markdown_file() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("portfolio.md");

    folio(&temp)
        .args(["profile", "--name", "Ada", "--tagline", "Engineer"])
        .assert()
        .success();

    folio(&temp)
        .args(["export", "--output"])
        .arg(&output)
        .assert()
        .success();

    let contents = std::fs::read_to_string(&output).unwrap();
    assert!(contents.contains("# Ada"));
}

#[test]
fn export_of_empty_portfolio_fails() {
    let temp = TempDir::new().unwrap();

    folio(&temp)
        .arg("export")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to export"));
}

#[test]
fn clear_force_deletes_saved_data() {
    let temp = TempDir::new().unwrap();

    folio(&temp)
        .args(["profile", "--name", "Ada", "--tagline", "Engineer"])
        .assert()
        .success();

    folio(&temp)
        .args(["clear", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("deleted"));

    folio(&temp)
        .args(["status", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"draftSaved\": false"));
}

#[test]
fn completions_generate_for_bash() {
    let temp = TempDir::new().unwrap();

    folio(&temp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("folio"));
}
