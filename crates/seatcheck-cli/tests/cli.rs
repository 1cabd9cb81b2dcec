//! Tests for the seatcheck binary against an isolated home and data directory

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

struct Sandbox {
    home: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            home: tempfile::tempdir().unwrap(),
        }
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("seatcheck").unwrap();
        cmd.env("HOME", self.home.path())
            .env("XDG_CONFIG_HOME", self.home.path().join("config"))
            .env("XDG_DATA_HOME", self.home.path().join("data"))
            .env_remove("RUST_LOG")
            .arg("--data-dir")
            .arg(self.home.path().join("store"));
        cmd
    }
}

#[test]
fn test_check_fits_at_the_limit() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["check", "AA", "18", "14", "8", "--unit", "in"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fits under the seat"))
        .stdout(predicate::str::contains("American Airlines"));
}

#[test]
fn test_check_reports_exceeded_axes() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["check", "ua", "50", "30", "20", "--unit", "cm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Does not fit"))
        .stdout(predicate::str::contains("length, width"));
}

#[test]
fn test_check_json_output() {
    let sandbox = Sandbox::new();
    let output = sandbox
        .cmd()
        .args(["--format", "json", "check", "DL", "40", "30", "15", "-u", "cm"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let body: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(body["verdict"]["status"], "fits");
    assert_eq!(body["airline"]["iataCode"], "DL");
}

#[test]
fn test_check_rejects_unknown_airline_and_bad_dimensions() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["check", "ZZ", "10", "10", "10"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Airline not found: ZZ"));

    sandbox
        .cmd()
        .args(["check", "AA", "-5", "10", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid length"));
}

#[test]
fn test_airlines_reference_view() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["airlines", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Southwest Airlines"))
        .stdout(predicate::str::contains("18.00 x 14.00 x 8.00 in"))
        .stdout(predicate::str::contains("Unverified"));

    sandbox
        .cmd()
        .args(["airlines", "show", "dl"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Conservative estimate"));
}

#[test]
fn test_airlines_import_upserts() {
    let sandbox = Sandbox::new();
    let dataset = sandbox.home.path().join("airlines.toml");
    std::fs::write(
        &dataset,
        r#"
[[airlines]]
name = "Alaska Airlines"
iata_code = "AS"
max_personal_item_length_cm = 43.18
max_personal_item_width_cm = 33.02
max_personal_item_height_cm = 20.32
verification_status = "VERIFIED_OFFICIAL"

[[airlines]]
name = "Delta Air Lines"
iata_code = "DL"
pet_carrier_allowed = false
max_personal_item_length_cm = 40.64
max_personal_item_width_cm = 30.48
max_personal_item_height_cm = 15.24
"#,
    )
    .unwrap();

    sandbox
        .cmd()
        .args(["airlines", "import"])
        .arg(&dataset)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created: 1"))
        .stdout(predicate::str::contains("Updated: 1"));

    sandbox
        .cmd()
        .args(["check", "DL", "10", "10", "10", "--pet-carrier"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pet carriers not allowed"));
}

#[test]
fn test_bag_catalogue_add_and_search() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args([
            "bags", "add", "--brand", "Away", "--model", "The Everywhere Bag", "45.72", "33.02",
            "20.32", "--unit", "cm",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Away The Everywhere Bag"));

    sandbox
        .cmd()
        .args(["bags", "search", "away", "everywhere"])
        .assert()
        .success()
        .stdout(predicate::str::contains("45.72 x 33.02 x 20.32 cm"));

    sandbox
        .cmd()
        .args(["bags", "search", "Away", "Duffel"])
        .assert()
        .success()
        .stdout(predicate::str::contains("enter dimensions manually"));
}

#[test]
fn test_bags_import_from_csv() {
    let sandbox = Sandbox::new();
    let csv = sandbox.home.path().join("bags.csv");
    std::fs::write(
        &csv,
        "brand,model,length,width,height,pet_carrier,carrier_type\n\
         Sherpa,Original Deluxe,17,11,10.5,true,soft-sided\n\
         Away,Carry-On,21.7,13.7,9,,\n",
    )
    .unwrap();

    sandbox
        .cmd()
        .args(["bags", "import", "--unit", "in"])
        .arg(&csv)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 2 bags"));

    sandbox
        .cmd()
        .args(["bags", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sherpa Original Deluxe"));
}

#[test]
fn test_history_and_export() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["check", "B6", "40", "30", "20", "-u", "cm", "--user", "alice", "--flight", "B6 42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded as"));

    sandbox
        .cmd()
        .args(["history", "--user", "alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("B6"))
        .stdout(predicate::str::contains("fits"));

    sandbox
        .cmd()
        .args(["history", "--user", "bob"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No bag checks recorded"));

    let workbook = sandbox.home.path().join("alice.xlsx");
    sandbox
        .cmd()
        .args(["export", "--user", "alice", "-o"])
        .arg(&workbook)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 checks"));
    assert!(workbook.exists());
}

#[test]
fn test_history_and_export_across_users() {
    let sandbox = Sandbox::new();
    for (airline, user) in [("AA", "alice"), ("WN", "bob")] {
        sandbox
            .cmd()
            .args(["check", airline, "30", "20", "10", "-u", "cm", "--user", user])
            .assert()
            .success();
    }

    sandbox
        .cmd()
        .args(["history"])
        .assert()
        .success()
        .stdout(predicate::str::contains("AA"))
        .stdout(predicate::str::contains("WN"));

    let workbook = sandbox.home.path().join("everyone.xlsx");
    sandbox
        .cmd()
        .args(["export", "-o"])
        .arg(&workbook)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 2 checks"));
    assert!(workbook.exists());
}

#[test]
fn test_config_set_and_show() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["config", "--set-unit", "cm", "--set-bind", "0.0.0.0:8080"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration updated"));

    sandbox
        .cmd()
        .args(["config", "--show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Default unit:   cm"))
        .stdout(predicate::str::contains("0.0.0.0:8080"));

    // the configured unit now applies to checks
    sandbox
        .cmd()
        .args(["check", "AA", "45.72", "35.56", "20.32"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fits under the seat"));

    sandbox
        .cmd()
        .args(["config", "--set-bind", "not-an-address"])
        .assert()
        .failure();
}
