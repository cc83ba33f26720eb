//! Integration tests for the one-shot `list` command.

use assert_cmd::Command;
use predicates::prelude::*;
use weatherdeck_testing::{DatasetFixture, sample_records};

fn weatherdeck() -> Command {
    Command::cargo_bin("weatherdeck").expect("binary built")
}

#[test]
fn test_list_search_filters_by_city_substring() {
    let fixture = DatasetFixture::new();
    let dataset = fixture.json_dataset("cities.json", &sample_records()).unwrap();

    weatherdeck()
        .args(["list", "--search", "par"])
        .arg("--data-file")
        .arg(&dataset)
        .arg("--config")
        .arg(fixture.path().join("config.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Paris"))
        .stdout(predicate::str::contains("15.0°C"))
        .stdout(predicate::str::contains("New York").not());
}

#[test]
fn test_list_search_is_case_insensitive() {
    let fixture = DatasetFixture::new();
    let dataset = fixture.json_dataset("cities.json", &sample_records()).unwrap();

    let lower = weatherdeck()
        .args(["list", "--search", "paris", "--format", "json"])
        .arg("--data-file")
        .arg(&dataset)
        .arg("--config")
        .arg(fixture.path().join("config.toml"))
        .output()
        .unwrap();

    let upper = weatherdeck()
        .args(["list", "--search", "PARIS", "--format", "json"])
        .arg("--data-file")
        .arg(&dataset)
        .arg("--config")
        .arg(fixture.path().join("config.toml"))
        .output()
        .unwrap();

    assert!(lower.status.success());
    assert_eq!(lower.stdout, upper.stdout);
}

#[test]
fn test_list_without_search_shows_all_records_in_dataset_order() {
    let fixture = DatasetFixture::new();
    let dataset = fixture.json_dataset("cities.json", &sample_records()).unwrap();

    let output = weatherdeck()
        .args(["list", "--format", "json"])
        .arg("--data-file")
        .arg(&dataset)
        .arg("--config")
        .arg(fixture.path().join("config.toml"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let cities: Vec<&str> = rows
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["city"].as_str().unwrap())
        .collect();
    assert_eq!(cities, ["New York", "Paris", "London", "Tokyo"]);
}

#[test]
fn test_list_json_row_shape() {
    let fixture = DatasetFixture::new();
    let dataset = fixture.json_dataset("cities.json", &sample_records()).unwrap();

    let output = weatherdeck()
        .args(["list", "--search", "par", "--format", "json"])
        .arg("--data-file")
        .arg(&dataset)
        .arg("--config")
        .arg(fixture.path().join("config.toml"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    insta::assert_snapshot!(stdout.trim_end(), @r#"
    [
      {
        "id": 2,
        "city": "Paris",
        "temperature": "15.0°C",
        "description": "Light rain",
        "action_label": "Add to favorites",
        "is_favorite": false
      }
    ]
    "#);
}

#[test]
fn test_list_unit_flag_converts_display_only() {
    let fixture = DatasetFixture::new();
    let dataset = fixture.json_dataset("cities.json", &sample_records()).unwrap();

    weatherdeck()
        .args(["list", "--search", "par", "--unit", "fahrenheit"])
        .arg("--data-file")
        .arg(&dataset)
        .arg("--config")
        .arg(fixture.path().join("config.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("59.0°F"));
}

#[test]
fn test_list_unmatched_query_is_success_with_empty_result() {
    let fixture = DatasetFixture::new();
    let dataset = fixture.json_dataset("cities.json", &sample_records()).unwrap();

    weatherdeck()
        .args(["list", "--search", "atlantis"])
        .arg("--data-file")
        .arg(&dataset)
        .arg("--config")
        .arg(fixture.path().join("config.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("No matching records"));
}

#[test]
fn test_list_reads_csv_datasets_too() {
    let fixture = DatasetFixture::new();
    let dataset = fixture.csv_dataset("cities.csv", &sample_records()).unwrap();

    weatherdeck()
        .args(["list", "--search", "tok"])
        .arg("--data-file")
        .arg(&dataset)
        .arg("--config")
        .arg(fixture.path().join("config.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Tokyo"))
        .stdout(predicate::str::contains("26.0°C"));
}

#[test]
fn test_list_falls_back_to_bundled_dataset() {
    let fixture = DatasetFixture::new();

    weatherdeck()
        .args(["list", "--search", "paris"])
        .arg("--config")
        .arg(fixture.path().join("config.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Paris"));
}
