//! Integration tests for the showdown CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn showdown() -> Command {
    let mut cmd = Command::cargo_bin("showdown").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

/// A one-card catalog and a team that only has two batters.
fn bad_data() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("bad_cards.json"),
        r#"[
  {"id": "99#1", "name": "Broken", "usage": "Offense",
   "precondition": "BP", "postcondition": "ZAP+1"}
]"#,
    )
    .unwrap();
    fs::write(dir.path().join("empty_cards.json"), "[]").unwrap();
    fs::write(
        dir.path().join("short_team.json"),
        r#"{
  "name": "Short Bench",
  "batting_order": [
    {"position": "Catcher", "hitter": {"name": "Only One", "on_base": 8, "speed": "C",
      "bats": "R", "fielding": {"Catcher": 3}, "chart": [["SO", "1-10"], ["1B", "11+"]]}},
    {"position": "Shortstop", "hitter": {"name": "Only Two", "on_base": 8, "speed": 14,
      "bats": "L", "fielding": {"Shortstop": 2}, "chart": [["SO", "1-10"], ["1B", "11+"]]}}
  ],
  "pitcher": {"name": "Tired Arm", "control": 2, "innings": 5, "role": "Starter",
    "throws": "R", "chart": [["SO", "1-10"], ["1B", "11+"]]}
}"#,
    )
    .unwrap();
    dir
}

#[test]
fn help_lists_subcommands() {
    showdown()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("simulate"))
        .stdout(predicate::str::contains("play"))
        .stdout(predicate::str::contains("cards"));
}

#[test]
fn cards_lists_bundled_catalog() {
    showdown()
        .arg("cards")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rally Cap"))
        .stdout(predicate::str::contains("P+R^CL PI+2"))
        .stdout(predicate::str::contains("14 cards"));
}

#[test]
fn cards_rejects_bad_expression() {
    let dir = bad_data();
    showdown()
        .args(["cards", "--cards"])
        .arg(dir.path().join("bad_cards.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"))
        .stderr(predicate::str::contains("ZAP+1"));
}

#[test]
fn cards_rejects_empty_catalog() {
    let dir = bad_data();
    showdown()
        .args(["cards", "--cards"])
        .arg(dir.path().join("empty_cards.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("card catalog is empty"));
}

#[test]
fn cards_missing_file() {
    showdown()
        .args(["cards", "--cards", "/nonexistent/cards.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}

#[test]
fn simulate_prints_line_scores_and_summary() {
    showdown()
        .args(["simulate", "--games", "2", "--seed", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Game 1"))
        .stdout(predicate::str::contains("Game 2"))
        .stdout(predicate::str::contains("Harbor City Gulls"))
        .stdout(predicate::str::contains("Summit Ridge Goats"))
        .stdout(predicate::str::contains("runs per game"));
}

#[test]
fn simulate_is_deterministic_per_seed() {
    let run = || {
        showdown()
            .args(["simulate", "--games", "3", "--seed", "11", "--innings", "5"])
            .output()
            .unwrap()
    };
    let first = run();
    let second = run();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn simulate_without_cards_in_hand() {
    showdown()
        .args(["simulate", "--hand", "0", "--innings", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("seed=42"));
}

#[test]
fn simulate_zero_games() {
    showdown()
        .args(["simulate", "--games", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to simulate"));
}

#[test]
fn simulate_rejects_short_lineup() {
    let dir = bad_data();
    showdown()
        .args(["simulate", "--home"])
        .arg(dir.path().join("short_team.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("incomplete lineup"))
        .stderr(predicate::str::contains("Short Bench has 2 batters"));
}

#[test]
fn play_shows_each_batter() {
    showdown()
        .args(["play", "--batters", "4", "--seed", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Top 1, 0 out"))
        .stdout(predicate::str::contains("vs Lefty Doyle"))
        .stdout(predicate::str::contains("BP"));
}

#[test]
fn play_to_the_end_prints_final() {
    showdown()
        .args(["play", "--batters", "1000", "--innings", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Final"));
}

#[test]
fn verbose_logs_to_stderr() {
    showdown()
        .args(["--verbose", "play", "--batters", "1"])
        .assert()
        .success()
        .stderr(predicate::str::contains("game started"));
}
