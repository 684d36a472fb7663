mod common;
use common::{bikeshare_in, setup_data_dir, temp_dir, temp_out};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_report_chicago_all() {
    let dir = setup_data_dir("cli_report_chicago");

    bikeshare_in("cli_report_chicago", &dir)
        .args(["report", "--city", "chicago"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5 trips in chicago"))
        .stdout(predicate::str::contains("Most common month: January (count: 3)"))
        .stdout(predicate::str::contains("Most common day: Monday (count: 4)"))
        .stdout(predicate::str::contains("Most common start hour: 08 (count: 2)"))
        .stdout(predicate::str::contains(
            "Most commonly used start station: A (count: 3)",
        ))
        .stdout(predicate::str::contains("Total travel time: 0 days 01:06:00"))
        .stdout(predicate::str::contains("Mean travel time: 0 days 00:13:12"))
        .stdout(predicate::str::contains("Earliest birth year: 1972"))
        .stdout(predicate::str::contains("This took"))
        .stdout(predicate::str::contains("-".repeat(40)));
}

#[test]
fn test_report_month_filter() {
    let dir = setup_data_dir("cli_report_february");

    bikeshare_in("cli_report_february", &dir)
        .args(["report", "--city", "Chicago", "--month", "february"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 trips in chicago"))
        .stdout(predicate::str::contains("Most common month: February (count: 2)"));
}

#[test]
fn test_report_washington_without_gender() {
    let dir = setup_data_dir("cli_report_washington");

    bikeshare_in("cli_report_washington", &dir)
        .args(["report", "--city", "washington"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Gender counts: not available"))
        .stdout(predicate::str::contains("Birth year: not available"))
        .stdout(predicate::str::contains("Subscriber"));
}

#[test]
fn test_report_empty_selection_warns() {
    let dir = setup_data_dir("cli_report_empty");

    bikeshare_in("cli_report_empty", &dir)
        .args(["report", "--city", "chicago", "--month", "december"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No trips in chicago"))
        .stdout(predicate::str::contains("Most common month").not());
}

#[test]
fn test_report_raw_rows() {
    let dir = setup_data_dir("cli_report_raw");

    bikeshare_in("cli_report_raw", &dir)
        .args(["report", "--city", "washington", "--raw", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Start Time"))
        .stdout(predicate::str::contains("489.066"))
        .stdout(predicate::str::contains("Jefferson Memorial"))
        .stdout(predicate::str::contains("2017-03-13 07:00:00").not());
}

#[test]
fn test_report_invalid_month() {
    let dir = setup_data_dir("cli_invalid_month");

    bikeshare_in("cli_invalid_month", &dir)
        .args(["report", "--city", "chicago", "--month", "smarch"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Invalid selector: unknown month 'smarch'"));
}

#[test]
fn test_report_unknown_city() {
    let dir = setup_data_dir("cli_unknown_city");

    bikeshare_in("cli_unknown_city", &dir)
        .args(["report", "--city", "boston"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown city 'boston'"));
}

#[test]
fn test_report_missing_data_file() {
    let dir = temp_dir("cli_missing_file");

    bikeshare_in("cli_missing_file", &dir)
        .args(["report", "--city", "chicago"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No data source for city 'chicago'"));
}

#[test]
fn test_log_output_is_plain_when_piped() {
    let dir = temp_dir("cli_plain_logs");
    fs::write(
        dir.join("chicago.csv"),
        "Start Time,End Time,Start Station,End Station,Birth Year\n\
         2017-01-02 09:00:00,2017-01-02 09:10:00,A,B,unknown\n",
    )
    .expect("write chicago");

    bikeshare_in("cli_plain_logs", &dir)
        .args(["report", "--city", "chicago"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Ignoring non-numeric or out-of-range birth year",
        ))
        .stderr(predicate::str::contains("\u{1b}[").not());
}

#[test]
fn test_cities_lists_files() {
    let dir = setup_data_dir("cli_cities");
    fs::remove_file(dir.join("washington.csv")).expect("remove washington");

    bikeshare_in("cli_cities", &dir)
        .arg("cities")
        .assert()
        .success()
        .stdout(predicate::str::contains("new_york_city.csv"))
        .stdout(predicate::str::contains("found"))
        .stdout(predicate::str::contains("missing"));
}

#[test]
fn test_explore_reprompts_and_pages_raw_rows() {
    let dir = setup_data_dir("cli_explore");

    bikeshare_in("cli_explore", &dir)
        .arg("explore")
        .write_stdin("boston\nchicago\njanuary\nall\nyes\nno\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Sorry! 'boston' is not an available option. Please try again.",
        ))
        .stdout(predicate::str::contains("Thanks for choosing chicago!"))
        .stdout(predicate::str::contains("3 trips in chicago"))
        .stdout(predicate::str::contains("Most common month: January (count: 3)"))
        .stdout(predicate::str::contains("2017-01-09 17:15:00"))
        .stdout(predicate::str::contains("No more raw data to display."))
        .stdout(predicate::str::contains("Would you like to restart?"));
}

#[test]
fn test_explore_is_the_default_and_restarts() {
    let dir = setup_data_dir("cli_explore_restart");

    bikeshare_in("cli_explore_restart", &dir)
        .write_stdin("washington\nall\nall\nno\nyes\nchicago\ndecember\nall\nno\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Gender counts: not available"))
        .stdout(predicate::str::contains("No trips in chicago"));
}

#[test]
fn test_explore_ends_cleanly_at_eof() {
    let dir = setup_data_dir("cli_explore_eof");

    bikeshare_in("cli_explore_eof", &dir)
        .arg("explore")
        .write_stdin("chicago\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Which month?"));
}

#[test]
fn test_export_json() {
    let dir = setup_data_dir("cli_export_json");
    let out = temp_out("cli_export_json", "json");

    bikeshare_in("cli_export_json", &dir)
        .args([
            "report", "--city", "chicago", "--export", &out, "--format", "json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("JSON export completed"));

    let content = fs::read_to_string(&out).expect("read exported json");
    let v: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(v["selection"]["city"], "chicago");
    assert_eq!(v["selection"]["records"], 5);
    assert_eq!(v["time"]["month"]["value"], "January");
    assert_eq!(v["duration"]["total_seconds"], 3960.0);
    assert_eq!(v["user"]["genders"]["status"], "present");
    assert_eq!(v["station"]["top_routes"][0]["value"]["start"], "A");
}

#[test]
fn test_export_csv_with_force() {
    let dir = setup_data_dir("cli_export_csv");
    let out = temp_out("cli_export_csv", "csv");
    fs::write(&out, "old content").expect("seed existing file");

    bikeshare_in("cli_export_csv", &dir)
        .args([
            "report",
            "--city",
            "washington",
            "--export",
            &out,
            "--format",
            "csv",
            "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("section,label,value,count"));
    assert!(content.contains("selection,city,washington,"));
    assert!(content.contains("time,most_common_month,March,2"));
    assert!(content.contains("user,gender,not available,"));
    assert!(!content.contains("old content"));
}

#[test]
fn test_export_existing_file_declined() {
    let dir = setup_data_dir("cli_export_declined");
    let out = temp_out("cli_export_declined", "csv");
    fs::write(&out, "keep me").expect("seed existing file");

    bikeshare_in("cli_export_declined", &dir)
        .args(["report", "--city", "chicago", "--export", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("was not overwritten"));

    assert_eq!(fs::read_to_string(&out).expect("read"), "keep me");
}

#[test]
fn test_config_print_uses_env_file() {
    let dir = temp_dir("cli_config_print");
    let conf = dir.join("custom.conf");
    fs::write(&conf, "raw_page_size: 2\nshow_timing: false\n").expect("write config");

    common::bikeshare()
        .env("BIKESHARE_CONFIG", &conf)
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("raw_page_size: 2"))
        .stdout(predicate::str::contains("show_timing: false"))
        .stdout(predicate::str::contains("separator_width: 40"));
}

#[test]
fn test_config_init_writes_defaults() {
    let dir = temp_dir("cli_config_init");
    let conf = dir.join("nested").join("bikeshare.conf");

    common::bikeshare()
        .env("BIKESHARE_CONFIG", &conf)
        .args(["config", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration file created"));

    let content = fs::read_to_string(&conf).expect("read config");
    assert!(content.contains("raw_page_size: 5"));
    assert!(content.contains("data_dir:"));
}

#[test]
fn test_invalid_config_fails() {
    let dir = temp_dir("cli_config_invalid");
    let conf = dir.join("bad.conf");
    fs::write(&conf, "raw_page_size: 0\n").expect("write config");

    common::bikeshare()
        .env("BIKESHARE_CONFIG", &conf)
        .arg("cities")
        .assert()
        .failure()
        .stderr(predicate::str::contains("raw_page_size must be at least 1"));
}

#[test]
fn test_config_page_size_drives_raw_paging() {
    let dir = setup_data_dir("cli_page_size");
    let conf = dir.join("paging.conf");
    fs::write(&conf, "raw_page_size: 2\nshow_timing: false\n").expect("write config");

    let data_dir = dir.to_string_lossy().to_string();
    common::bikeshare()
        .env("BIKESHARE_CONFIG", &conf)
        .args(["--data-dir", data_dir.as_str(), "explore"])
        .write_stdin("chicago\nall\nall\nyes\nno\nno\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Would you like to see 2 lines of raw data?"))
        .stdout(predicate::str::contains("Would you like to see 2 more lines?"))
        .stdout(predicate::str::contains("This took").not());
}
