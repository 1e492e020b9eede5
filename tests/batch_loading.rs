use std::error::Error;
use std::io::Write;

use chrono::{TimeZone, Utc};
use taskdag::batch::{load_and_validate, load_from_path};
use taskdag::dag::{compute_order, MissingDepPolicy, ScheduleOptions};

type TestResult = Result<(), Box<dyn Error>>;

fn write_batch(contents: &str) -> Result<tempfile::NamedTempFile, Box<dyn Error>> {
    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(contents.as_bytes())?;
    Ok(file)
}

#[test]
fn batch_file_parses_titles_dues_and_deps_in_order() -> TestResult {
    let file = write_batch(
        r#"
[[task]]
title = "gather data"
due = "2024-01-05T00:00:00Z"

[[task]]
title = "write report"
due = "2024-02-01T00:00:00Z"
deps = ["gather data"]

[[task]]
title = "file expenses"
"#,
    )?;

    let batch = load_from_path(file.path())?;
    let tasks = batch.tasks();

    assert_eq!(tasks.len(), 3);
    assert_eq!(tasks[0].title, "gather data");
    assert_eq!(
        tasks[0].due,
        Some(Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap())
    );
    assert_eq!(tasks[1].deps, vec!["gather data"]);
    assert_eq!(tasks[2].due, None);
    assert!(tasks[2].deps.is_empty());

    Ok(())
}

#[test]
fn loaded_batch_schedules_end_to_end() -> TestResult {
    let file = write_batch(
        r#"
[[task]]
title = "deploy"
deps = ["build", "test"]

[[task]]
title = "build"

[[task]]
title = "test"
deps = ["build"]
"#,
    )?;

    let batch = load_and_validate(file.path(), MissingDepPolicy::Lenient)?;
    let schedule = compute_order(batch.tasks(), &ScheduleOptions::default())?;

    assert_eq!(schedule.recommended_order, vec!["build", "test", "deploy"]);

    Ok(())
}

#[test]
fn validation_rejects_empty_batch() -> TestResult {
    let file = write_batch("")?;

    let err = load_and_validate(file.path(), MissingDepPolicy::Lenient).unwrap_err();
    assert!(err.to_string().contains("no tasks supplied"));

    Ok(())
}

#[test]
fn validation_rejects_cycles_with_a_named_task() -> TestResult {
    let file = write_batch(
        r#"
[[task]]
title = "A"
deps = ["B"]

[[task]]
title = "B"
deps = ["A"]
"#,
    )?;

    let err = load_and_validate(file.path(), MissingDepPolicy::Lenient).unwrap_err();
    assert!(err.to_string().contains("circular dependency"));

    Ok(())
}

#[test]
fn validation_rejects_self_dependency() -> TestResult {
    let file = write_batch(
        r#"
[[task]]
title = "A"
deps = ["A"]
"#,
    )?;

    let err = load_and_validate(file.path(), MissingDepPolicy::Lenient).unwrap_err();
    assert!(err.to_string().contains("cannot depend on itself"));

    Ok(())
}

#[test]
fn validation_rejects_duplicate_titles() -> TestResult {
    let file = write_batch(
        r#"
[[task]]
title = "A"

[[task]]
title = "A"
"#,
    )?;

    let err = load_and_validate(file.path(), MissingDepPolicy::Lenient).unwrap_err();
    assert!(err.to_string().contains("duplicate task title"));

    Ok(())
}

#[test]
fn strictness_is_applied_during_validation() -> TestResult {
    let contents = r#"
[[task]]
title = "A"
deps = ["Ghost"]
"#;

    let lenient = write_batch(contents)?;
    assert!(load_and_validate(lenient.path(), MissingDepPolicy::Lenient).is_ok());

    let strict = write_batch(contents)?;
    let err = load_and_validate(strict.path(), MissingDepPolicy::Strict).unwrap_err();
    assert!(err.to_string().contains("unknown task 'Ghost'"));

    Ok(())
}
