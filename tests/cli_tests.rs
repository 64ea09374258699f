//! End-to-end tests for the gymmaster binary.
//!
//! Countdown runs use one- and two-second durations so they finish quickly on
//! the real clock.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn gymmaster() -> Command {
    Command::cargo_bin("gymmaster").unwrap()
}

// ============================================================================
// presets / completions
// ============================================================================

#[test]
fn presets_lists_default_durations() {
    gymmaster()
        .arg("presets")
        .assert()
        .success()
        .stdout(predicate::str::contains("00:30"))
        .stdout(predicate::str::contains("1.5м"))
        .stdout(predicate::str::contains("05:00"));
}

#[test]
fn presets_honours_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"presets":[45,75]}}"#).unwrap();

    gymmaster()
        .args(["presets", "--config"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("00:45"))
        .stdout(predicate::str::contains("01:15"))
        .stdout(predicate::str::contains("05:00").not());
}

#[test]
fn invalid_config_file_fails() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"presets":[]}}"#).unwrap();

    gymmaster()
        .args(["presets", "--config"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Ошибка"));
}

#[test]
fn completions_for_bash() {
    gymmaster()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gymmaster"));
}

// ============================================================================
// timer
// ============================================================================

#[test]
fn timer_counts_down_to_expiry() {
    gymmaster()
        .args(["timer", "--seconds", "2", "--no-bell"])
        .assert()
        .success()
        .stdout(predicate::str::contains("00:02"))
        .stdout(predicate::str::contains("00:01"))
        .stdout(predicate::str::contains("Время истекло!"));
}

#[test]
fn timer_shows_phase_label() {
    gymmaster()
        .args(["timer", "--seconds", "1", "--phase", "break", "--no-bell"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Отдых между упражнениями"));
}

#[test]
fn timer_rejects_negative_seconds() {
    gymmaster()
        .args(["timer", "--seconds", "-5"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("-5"))
        .stderr(predicate::str::contains("не меньше нуля"));
}

#[test]
fn timer_rejects_duration_over_display_limit() {
    gymmaster()
        .args(["timer", "--seconds", "6000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("5999"));
}

#[test]
fn timer_rejects_unknown_preset() {
    gymmaster()
        .args(["timer", "--preset", "45"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("30, 60, 90, 120, 180, 300"));
}

#[test]
fn timer_at_zero_does_not_start() {
    gymmaster()
        .args(["timer", "--seconds", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Время уже истекло"));
}

// ============================================================================
// session
// ============================================================================

#[test]
fn session_runs_sets_from_exercise_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"name":"Отжимания","sets":2,"reps":15,"restBetweenSets":1,"restBetweenExercises":1}}"#
    )
    .unwrap();

    gymmaster()
        .args(["session", "--no-bell", "--exercise"])
        .arg(file.path())
        .write_stdin("\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Подход 1 из 2 • 15 повторений"))
        .stdout(predicate::str::contains("Подход 2 из 2 • 15 повторений"))
        .stdout(predicate::str::contains("Отдых между подходами"))
        .stdout(predicate::str::contains("Упражнение «Отжимания» выполнено"));
}

#[test]
fn session_stops_when_input_ends() {
    gymmaster()
        .args(["session", "--sets", "3", "--rest", "1", "--no-bell"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Подход 1 из 3"))
        .stdout(predicate::str::contains("Подход 2").not());
}

#[test]
fn session_rejects_invalid_exercise_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"name":"Планка","sets":0,"reps":1,"restBetweenSets":30}}"#).unwrap();

    gymmaster()
        .args(["session", "--exercise"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("подходов"));
}

// ============================================================================
// nutrition
// ============================================================================

#[test]
fn nutrition_prints_plan() {
    gymmaster()
        .args(["nutrition", "--age", "30", "--weight", "80", "--height", "180"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Калории: 2759 ккал/день"))
        .stdout(predicate::str::contains("Белки: 176г"))
        .stdout(predicate::str::contains("Вода: 2800мл/день"));
}

#[test]
fn nutrition_rejects_bad_weight() {
    gymmaster()
        .args(["nutrition", "--age", "30", "--weight", "5", "--height", "180"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("вес"));
}
