use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db_with_data, rov, set_time, setup_test_db};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init_creates");

    rov()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Migration applied"))
        .stdout(contains("initialization completed"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_set_prints_day_extra() {
    let db_path = setup_test_db("set_prints_extra");
    rov()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    set_time(&db_path, "2024-10-01", "entry", "09:00");
    set_time(&db_path, "2024-10-01", "lunch-start", "13:00");
    set_time(&db_path, "2024-10-01", "lunch-end", "14:00");

    rov()
        .args([
            "--db",
            &db_path,
            "set",
            "2024-10-01",
            "--field",
            "exit",
            "--time",
            "19:30",
        ])
        .assert()
        .success()
        .stdout(contains("Exit set to 19:30"))
        .stdout(contains("Extra hours for 1/10/2024: 1:30"));
}

#[test]
fn test_incomplete_day_shows_na() {
    let db_path = setup_test_db("incomplete_day");
    rov()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rov()
        .args([
            "--db",
            &db_path,
            "set",
            "2024-10-03",
            "--field",
            "entry",
            "--time",
            "09:00",
        ])
        .assert()
        .success()
        .stdout(contains("Extra hours for 3/10/2024: N/A"));
}

#[test]
fn test_show_month_with_total() {
    let db_path = setup_test_db("show_total");
    init_db_with_data(&db_path);

    rov()
        .args(["--db", &db_path, "show", "--month", "2024-10"])
        .assert()
        .success()
        .stdout(contains("October 2024"))
        .stdout(contains("1/10/2024"))
        .stdout(contains("1:30"))
        .stdout(contains("0:45"))
        .stdout(contains("Total extra hours: 2:15"));
}

#[test]
fn test_show_prev_and_next_month() {
    let db_path = setup_test_db("show_prev_next");
    init_db_with_data(&db_path);

    rov()
        .args(["--db", &db_path, "show", "--month", "2024-11", "--prev"])
        .assert()
        .success()
        .stdout(contains("October 2024"))
        .stdout(contains("Total extra hours: 2:15"));

    rov()
        .args(["--db", &db_path, "show", "--month", "2024-10", "--next"])
        .assert()
        .success()
        .stdout(contains("November 2024"))
        .stdout(contains("Total extra hours: 0:00"));
}

#[test]
fn test_prev_conflicts_with_next() {
    rov()
        .args(["show", "--prev", "--next"])
        .assert()
        .failure();
}

#[test]
fn test_unsaved_month_lists_weekdays_only() {
    let db_path = setup_test_db("weekdays_only");
    rov()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    // 2024-10-07 is a Monday; no Saturday or Sunday is listed
    rov()
        .args(["--db", &db_path, "show", "--month", "2024-10"])
        .assert()
        .success()
        .stdout(contains("Mon 7/10/2024"))
        .stdout(contains("Sat").not())
        .stdout(contains("Sun").not());
}

#[test]
fn test_exit_before_entry_is_rejected() {
    let db_path = setup_test_db("exit_before_entry");
    rov()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    set_time(&db_path, "2024-10-04", "entry", "10:00");

    rov()
        .args([
            "--db",
            &db_path,
            "set",
            "2024-10-04",
            "--field",
            "exit",
            "--time",
            "08:00",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid input"));

    // the refused value was not stored
    rov()
        .args(["--db", &db_path, "show", "--month", "2024-10"])
        .assert()
        .success()
        .stdout(contains("08:00").not());
}

#[test]
fn test_invalid_time_and_date_are_rejected() {
    let db_path = setup_test_db("invalid_time_date");
    rov()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rov()
        .args([
            "--db",
            &db_path,
            "set",
            "2024-10-01",
            "--field",
            "entry",
            "--time",
            "25:00",
        ])
        .assert()
        .failure();

    rov()
        .args([
            "--db",
            &db_path,
            "set",
            "2024-13-01",
            "--field",
            "entry",
            "--time",
            "09:00",
        ])
        .assert()
        .failure();
}

#[test]
fn test_clear_removes_time() {
    let db_path = setup_test_db("clear_time");
    init_db_with_data(&db_path);

    rov()
        .args(["--db", &db_path, "clear", "2024-10-02", "--field", "exit"])
        .assert()
        .success()
        .stdout(contains("cleared"));

    rov()
        .args(["--db", &db_path, "show", "--month", "2024-10"])
        .assert()
        .success()
        .stdout(contains("16:45").not())
        .stdout(contains("Total extra hours: 1:30"));

    rov()
        .args(["--db", &db_path, "clear", "2024-10-02", "--field", "exit"])
        .assert()
        .success()
        .stdout(contains("nothing to clear"));
}

#[test]
fn test_log_print_records_operations() {
    let db_path = setup_test_db("log_print");
    init_db_with_data(&db_path);

    rov()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("(2024-10-01)"))
        .stdout(contains("exit = 19:30"));
}

#[test]
fn test_db_info_lists_months() {
    let db_path = setup_test_db("db_info");
    init_db_with_data(&db_path);

    rov()
        .args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Stored months:"))
        .stdout(contains("from: 2024-10"));
}

#[test]
fn test_db_migrate_is_idempotent() {
    let db_path = setup_test_db("db_migrate");
    rov()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rov()
        .args(["--db", &db_path, "db", "--migrate"])
        .assert()
        .success()
        .stdout(contains("up to date"))
        .stdout(contains("Migration applied").not());
}
