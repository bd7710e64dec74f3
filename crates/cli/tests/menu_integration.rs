//! Scripted runs of the console menu against a temporary database

mod support;

use std::fs;

use support::{record, TestApp, SIGN_UP};

fn script(parts: &[&[&'static str]]) -> Vec<&'static str> {
    parts.concat()
}

#[test]
fn gated_options_require_a_session() {
    let app = TestApp::new();

    let output = app.run(&["1", "2", "3", "6", "0"]);

    assert_eq!(output.matches("Error: you must log in first.").count(), 4);
    assert!(output.contains("(active user: none)"));
    assert!(output.ends_with("Goodbye.\n"));
}

#[test]
fn unknown_choice_is_reported() {
    let app = TestApp::new();

    let output = app.run(&["9", "0"]);

    assert!(output.contains("Invalid option. Try again."));
}

#[test]
fn end_of_input_leaves_the_menu() {
    let app = TestApp::new();

    let output = app.run(&["4", "Ana"]);

    assert!(!output.contains("Goodbye."));
    assert!(!output.contains("Account created"));
}

#[test]
fn sign_up_record_and_query() {
    let app = TestApp::new();
    let input = script(&[
        &SIGN_UP,
        &record("2024-03-05", "  Concrete pour, slab 2  "),
        &["2", "2024-03-01", "2024-03-31"],
        &["0"],
    ]);

    let output = app.run(&input);

    assert!(output.contains("Account created. Logged in as Ana."));
    assert!(output.contains("(active user: Ana)"));
    assert!(output.contains("Activity #1 recorded."));
    assert!(output.contains("Activities found:"));
    assert!(output.contains(
        "#1 | 2024-03-05 | supervisor: Juan Perez | responsible: Carlos | Concrete pour, slab 2 \
         | attachments: - | weather: Sunny"
    ));
}

#[test]
fn query_outside_any_record_finds_nothing() {
    let app = TestApp::new();
    let input = script(&[
        &SIGN_UP,
        &record("2024-03-05", "Formwork"),
        &["2", "2024-04-01", "2024-04-30"],
        &["0"],
    ]);

    let output = app.run(&input);

    assert!(output.contains("No activities found."));
}

#[test]
fn validation_errors_are_rendered() {
    let app = TestApp::new();
    let input = script(&[
        &SIGN_UP,
        &record("05/03/2024", "Formwork"),
        &["1", "2024-03-05", "", "Formwork", "", "Carlos", ""],
        &["2", "2024-03-31", "2024-03-01"],
        &["0"],
    ]);

    let output = app.run(&input);

    assert!(output.contains("Error: Invalid date:"));
    assert!(output.contains("Error: Missing field:"));
    assert!(output.contains("Error: Invalid date range:"));
    assert!(!output.contains("recorded."));
}

#[test]
fn report_uses_default_name() {
    let app = TestApp::new();
    let input = script(&[
        &SIGN_UP,
        &record("2024-03-05", "Formwork"),
        &["3", "2024-03-01", "2024-03-31", ""],
        &["0"],
    ]);

    let output = app.run(&input);

    assert!(output.contains("(1 activities)."));
    let contents = fs::read_to_string(app.report_path("report.txt")).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines[0], "Activity report from 2024-03-01 to 2024-03-31");
    assert!(lines[1].starts_with("#1 | 2024-03-05 |"));
}

#[test]
fn report_rejects_bad_file_name() {
    let app = TestApp::new();
    let input =
        script(&[&SIGN_UP, &["3", "2024-03-01", "2024-03-31", "../escape.txt"], &["0"]]);

    let output = app.run(&input);

    assert!(output.contains("Error: Report error:"));
    assert!(!app.root().join("escape.txt").exists());
}

#[test]
fn session_survives_between_runs() {
    let app = TestApp::new();
    app.run(&script(&[&SIGN_UP, &["0"]]));
    assert!(app.session_file().exists());

    let output = app.run(&script(&[&record("2024-03-05", "Formwork"), &["7", "7", "0"]]));

    assert!(output.contains("(active user: Ana)"));
    assert!(output.contains("Activity #1 recorded."));
    assert!(output.contains("Session closed."));
    assert!(output.contains("No active session."));
    assert!(!app.session_file().exists());
}

#[test]
fn duplicate_account_is_rejected() {
    let app = TestApp::new();

    let output = app.run(&script(&[&SIGN_UP, &SIGN_UP, &["0"]]));

    assert!(output.contains("Error: Email already registered: ana@obra.co"));
}

#[test]
fn log_in_checks_the_password() {
    let app = TestApp::new();
    let input = script(&[
        &SIGN_UP,
        &["7"],
        &["5", "ana@obra.co", "wrong-pass"],
        &["5", "nadie@obra.co", "secreto1"],
        &["5", "ana@obra.co", "secreto1"],
        &["0"],
    ]);

    let output = app.run(&input);

    assert!(output.contains("Error: Incorrect password"));
    assert!(output.contains("Error: User not found: nadie@obra.co"));
    assert!(output.contains("Welcome Ana"));
}

#[test]
fn changing_password_logs_out() {
    let app = TestApp::new();
    let input = script(&[
        &SIGN_UP,
        &["6", "secreto1"],
        &["6", "nueva-clave"],
        &["1"],
        &["5", "ana@obra.co", "secreto1"],
        &["5", "ana@obra.co", "nueva-clave"],
        &["0"],
    ]);

    let output = app.run(&input);

    assert!(output.contains("Error: Invalid value:"));
    assert!(output.contains("Password changed. You have been logged out."));
    assert!(output.contains("Error: you must log in first."));
    assert!(output.contains("Error: Incorrect password"));
    assert!(output.contains("Welcome Ana"));
}

#[test]
fn stale_session_file_is_ignored() {
    let app = TestApp::new();
    fs::write(app.session_file(), r#"{"id":42,"email":"ghost@obra.co","name":"Ghost"}"#).unwrap();

    let input = script(&[
        &record("2024-03-05", "Pour"),
        &SIGN_UP,
        &record("2024-03-05", "Pour"),
        &["0"],
    ]);

    let output = app.run(&input);

    assert!(output.contains("(active user: none)"));
    assert!(output.contains("Error: you must log in first."));
    assert!(output.contains("Activity #1 recorded."));
    assert!(!output.contains("Database error"));
}
