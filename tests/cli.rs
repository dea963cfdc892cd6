//! End-to-end tests for the mikor binary.
//!
//! Time-dependent phrases ("most", "két óra múlva") are only checked against
//! the output shape; fixed phrases are checked exactly.

use assert_cmd::Command;
use predicates::prelude::*;

fn mikor() -> Command {
    Command::cargo_bin("mikor").expect("binary builds")
}

#[test]
fn resolves_bare_digit() {
    mikor()
        .arg("5")
        .assert()
        .success()
        .stdout(predicate::eq("05:00\n"));
}

#[test]
fn resolves_suffixed_numeral() {
    mikor()
        .arg("öt órakor")
        .assert()
        .success()
        .stdout(predicate::eq("05:00\n"));
}

#[test]
fn resolves_fixed_dayparts() {
    mikor()
        .args(["reggel", "délben", "este"])
        .assert()
        .success()
        .stdout(predicate::eq("00:00-10:00\n11:00-13:00\n17:00-23:59\n"));
}

#[test]
fn resolves_around_range() {
    mikor()
        .arg("hat körül")
        .assert()
        .success()
        .stdout(predicate::eq("05:30-06:30\n"));
}

#[test]
fn reads_phrases_from_stdin() {
    mikor()
        .write_stdin("öt előtt\n  öt után  \n")
        .assert()
        .success()
        .stdout(predicate::eq("00:00-04:45\n05:15-23:59\n"));
}

#[test]
fn unmatched_phrase_gets_marker_and_interval() {
    mikor()
        .arg("holnapután valamikor")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\d{2}:\d{2}-\d{2}:\d{2} \(no match\)\n$").unwrap());
}

#[test]
fn time_dependent_phrase_matches_shape() {
    mikor()
        .arg("két óra múlva")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\d{2}:\d{2}-\d{2}:\d{2}\n$").unwrap());
}

#[test]
fn json_output_carries_rule_tag() {
    mikor()
        .args(["-o", "json", "hat körül"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""display":"05:30-06:30""#))
        .stdout(predicate::str::contains(r#""matched":"around""#));
}

#[test]
fn json_output_flags_unmatched_phrase() {
    mikor()
        .args(["-o", "json", "zagyvaság"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""matched":null"#));
}

#[test]
fn examples_flag_prints_sample_phrases() {
    mikor()
        .arg("--examples")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"5-kor\""))
        .stdout(predicate::str::contains("\"hat körül\""));
}
