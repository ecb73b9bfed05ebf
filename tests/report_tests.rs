use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db_with_data, rov, setup_test_db, temp_out};

#[test]
fn test_html_report_to_stdout() {
    let db_path = setup_test_db("report_html_stdout");
    init_db_with_data(&db_path);

    rov()
        .args(["--db", &db_path, "report", "--month", "2024-10"])
        .assert()
        .success()
        .stdout(contains("<table"))
        .stdout(contains("October 2024"))
        .stdout(contains("19:30"))
        .stdout(contains("Total extra hours"))
        .stdout(contains("2:15"));
}

#[test]
fn test_json_report_to_stdout() {
    let db_path = setup_test_db("report_json_stdout");
    init_db_with_data(&db_path);

    let output = rov()
        .args([
            "--db", &db_path, "report", "--month", "2024-10", "--format", "json",
        ])
        .output()
        .expect("run report");
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("report is valid JSON");
    assert_eq!(value["month"], "2024-10");
    assert_eq!(value["total_extra"], "2:15");
    assert_eq!(value["standard_workday"], "8:00");
    assert_eq!(value["days"][0]["date"], "1/10/2024");
    assert_eq!(value["days"][0]["extra"], "1:30");
    assert_eq!(value["days"][2]["extra"], "N/A");
}

#[test]
fn test_csv_report_to_file() {
    let db_path = setup_test_db("report_csv_file");
    init_db_with_data(&db_path);
    let out = temp_out("report_csv_file", "csv");

    rov()
        .args([
            "--db", &db_path, "report", "--month", "2024-10", "--format", "csv", "--file", &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("csv written");
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("date,entry,lunch_start,lunch_end,exit,extra")
    );
    assert_eq!(
        lines.next(),
        Some("1/10/2024,09:00,13:00,14:00,19:30,1:30")
    );
    assert_eq!(lines.next(), Some("2/10/2024,08:00,--,--,16:45,0:45"));
}

#[test]
fn test_pdf_report_to_file() {
    let db_path = setup_test_db("report_pdf_file");
    init_db_with_data(&db_path);
    let out = temp_out("report_pdf_file", "pdf");

    rov()
        .args([
            "--db", &db_path, "report", "--month", "2024-10", "--format", "pdf", "--file", &out,
        ])
        .assert()
        .success();

    let bytes = fs::read(&out).expect("pdf written");
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_pdf_report_needs_file() {
    let db_path = setup_test_db("report_pdf_no_file");
    init_db_with_data(&db_path);

    rov()
        .args([
            "--db", &db_path, "report", "--month", "2024-10", "--format", "pdf",
        ])
        .assert()
        .failure()
        .stderr(contains("--file"));
}

#[test]
fn test_existing_file_is_overwritten_with_force() {
    let db_path = setup_test_db("report_force");
    init_db_with_data(&db_path);
    let out = temp_out("report_force", "html");
    fs::write(&out, "old content").unwrap();

    rov()
        .args([
            "--db", &db_path, "report", "--month", "2024-10", "--file", &out, "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.contains("<table"));
    assert!(!content.contains("old content"));
}

#[test]
fn test_report_is_logged() {
    let db_path = setup_test_db("report_logged");
    init_db_with_data(&db_path);
    let out = temp_out("report_logged", "json");

    rov()
        .args([
            "--db", &db_path, "report", "--month", "2024-10", "--format", "json", "--file", &out,
        ])
        .assert()
        .success();

    rov()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("(2024-10)"));
}

#[test]
fn test_report_of_empty_month() {
    let db_path = setup_test_db("report_empty_month");
    init_db_with_data(&db_path);

    rov()
        .args([
            "--db", &db_path, "report", "--month", "2025-02", "--format", "csv",
        ])
        .assert()
        .success()
        .stdout(contains("\n3/2/2025,--,--,--,--,N/A"))
        .stdout(contains("\n1/2/2025,").not());
}

#[test]
fn test_existing_file_is_kept_when_overwrite_declined() {
    let db_path = setup_test_db("report_declined");
    init_db_with_data(&db_path);
    let out = temp_out("report_declined", "html");
    fs::write(&out, "old content").unwrap();

    rov()
        .args(["--db", &db_path, "report", "--month", "2024-10", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stdout(contains("Overwrite? [y/N]"))
        .stderr(contains("already exists"))
        .stderr(contains("not overwritten"));

    assert_eq!(fs::read_to_string(&out).unwrap(), "old content");
}
