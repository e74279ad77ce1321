use assert_cmd::Command;
use predicates::prelude::*;

fn cfr() -> Command {
    Command::cargo_bin("cfr").unwrap()
}

#[test]
fn baseline_age_prints_baseline_sentence() {
    for age in ["10", "14"] {
        cfr()
            .arg(age)
            .assert()
            .success()
            .stdout("You have a 0.2000% risk of dying if you contract COVID-19.\n");
    }
}

#[test]
fn age_15_rounds_up_to_the_twenty_band() {
    cfr()
        .arg("15")
        .assert()
        .success()
        .stdout("You have a 0.0403% risk of dying if you contract COVID-19.\n");
}

#[test]
fn flags_accept_short_and_long_forms() {
    // 65 -> 70 band, male: 1 - (1 - 0.002 * 43.7291) * (1 - 0.0275) = 11.2553%
    let expected = "You have a 11.2553% risk of dying if you contract COVID-19.\n";
    cfr().args(["-m", "65"]).assert().success().stdout(expected);
    cfr().args(["--male", "65"]).assert().success().stdout(expected);
}

#[test]
fn every_flag_is_recognised() {
    cfr()
        .args(["-s", "-m", "-H", "-d", "-c", "-r", "-C", "50"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("You have a "));

    cfr()
        .args([
            "--smoker",
            "--hypertensive",
            "--diabetic",
            "--cardiac-disease",
            "--chronic-respiratory-disease",
            "--cancer",
            "50",
        ])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("risk of dying if you contract COVID-19.\n"));
}

#[test]
fn ages_above_80_print_the_same_as_80() {
    let at = |age: &str| {
        let out = cfr().args(["-C", age]).output().unwrap();
        assert!(out.status.success());
        String::from_utf8(out.stdout).unwrap()
    };
    assert_eq!(at("85"), at("80"));
    assert_eq!(at("101"), at("80"));
}

#[test]
fn logs_stay_off_stdout() {
    cfr()
        .env("RUST_LOG", "debug")
        .arg("42")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("You have a "))
        .stderr(predicate::str::contains("risk evaluated"));
}
