//! CLI integration tests for the `gc` binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures").join(name)
}

/// `gc` isolated from the user's config and log directories
fn gc(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("gc").expect("Failed to find gc binary");
    cmd.current_dir(temp.path())
        .env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", temp.path().join("config"))
        .env("XDG_DATA_HOME", temp.path().join("data"))
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_harvest_calendar_text() {
    let temp = TempDir::new().unwrap();
    let expected = "\
Harvest Calendar
****************

April 2024
==========

   25 (Thu): Radish -- Harvest 30 plants

June 2024
=========

   12 (Wed): Tomato -- Start harvesting

   23 (Sun): Pepper -- Start harvesting

July 2024
=========

    4 (Thu): Carrot -- Harvest 20 plants
";

    gc(&temp)
        .arg(fixture("garden.txt"))
        .arg("-H")
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_by_month_is_default_view() {
    let temp = TempDir::new().unwrap();
    let output = gc(&temp).arg(fixture("garden.txt")).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Garden Action Items Calendar\n"));
    assert!(stdout.contains("   25 (Mon): Pepper -- Start 2 seeds under grow lamp\n"));
    assert!(stdout.contains("   28 (Thu): Radish -- Direct sow 34 seeds outdoors\n"));
    assert!(stdout.contains("   20 (Mon): Pepper -- Transplant 1 plant outdoors\n"));
    let underlines = stdout
        .lines()
        .filter(|l| !l.is_empty() && l.chars().all(|c| c == '='))
        .count();
    assert_eq!(underlines, 3);
    assert!(stdout.contains("March 2024\n==========\n"));
    assert!(stdout.contains("April 2024\n==========\n"));
    assert!(stdout.contains("May 2024\n========\n"));
    assert!(!stdout.contains("Harvest Calendar"));
}

#[test]
fn test_sprouting_ical() {
    let temp = TempDir::new().unwrap();
    let output = gc(&temp)
        .arg(fixture("garden.txt"))
        .args(["--sprouting", "--ical"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("BEGIN:VCALENDAR\r\nVERSION:2.0\r\nPRODID:"));
    assert!(stdout.ends_with("END:VCALENDAR\r\n"));
    assert_eq!(stdout.matches("BEGIN:VEVENT\r\n").count(), 8);

    let starts: Vec<&str> = stdout
        .split("\r\n")
        .filter_map(|l| l.strip_prefix("DTSTART;VALUE=DATE:"))
        .collect();
    assert_eq!(
        starts,
        vec!["20240403", "20240404", "20240407", "20240408", "20240410", "20240413", "20240507", "20240511"]
    );
    assert!(stdout.contains("SUMMARY:Check sprouts: Carrot\r\n"));
}

#[test]
fn test_yaml_by_plant() {
    let temp = TempDir::new().unwrap();
    gc(&temp)
        .arg(fixture("garden.yml"))
        .arg("--by-plant")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Calendar for Tomato:\n"))
        .stdout(predicate::str::contains("Separate or move to a bigger indoor pot: Wed, Apr. 24, 2024"))
        .stdout(predicate::str::contains("\nCalendar for Carrot:\n"))
        .stdout(predicate::str::contains("Thin to 20 plants: Sat, May. 11, 2024"));
}

#[test]
fn test_output_file() {
    let temp = TempDir::new().unwrap();
    let out_path = temp.path().join("harvest.ics");

    gc(&temp)
        .arg(fixture("garden.txt"))
        .args(["-H", "-i", "-o"])
        .arg(&out_path)
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("Wrote calendar to"));

    let ics = fs::read_to_string(&out_path).unwrap();
    assert_eq!(ics.matches("BEGIN:VEVENT").count(), 4);
    assert!(ics.contains("DTSTART;VALUE=DATE:20240704\r\nDTEND;VALUE=DATE:20240705\r\n"));
}

#[test]
fn test_config_supplies_views_and_format() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("gardencal.yml"),
        "views: [harvest]\nical: true\nprodid: -//Allotment 12//EN\n",
    )
    .unwrap();

    gc(&temp)
        .arg(fixture("garden.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("PRODID:-//Allotment 12//EN\r\n"))
        .stdout(predicate::str::contains("SUMMARY:Harvest: Radish\r\n"));
}

#[test]
fn test_bad_record_fails_without_output() {
    let temp = TempDir::new().unwrap();
    let plants = temp.path().join("plants.txt");
    fs::write(
        &plants,
        "Tomato,10,6,3,2024-05-15,0,70,0.8,5,10,0\nKale,4,0,0,2024-13-01,0,50,0.9,4,7,0\n",
    )
    .unwrap();

    gc(&temp)
        .arg(&plants)
        .arg("-m")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("2024-13-01"));
}

#[test]
fn test_invalid_germination_rate_fails() {
    let temp = TempDir::new().unwrap();
    let plants = temp.path().join("plants.txt");
    fs::write(&plants, "Okra,4,0,0,2024-06-01,0,60,1.5,4,7,0\n").unwrap();

    gc(&temp)
        .arg(&plants)
        .assert()
        .failure()
        .stderr(predicate::str::contains("germination rate"));
}

#[test]
fn test_missing_file_fails() {
    let temp = TempDir::new().unwrap();
    gc(&temp)
        .arg(temp.path().join("nowhere.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("nowhere.txt"));
}
