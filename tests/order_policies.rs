use std::error::Error;

use taskdag::batch::TaskDescriptor;
use taskdag::dag::{compute_order, MissingDepPolicy, ScheduleOptions};
use taskdag::errors::ScheduleError;

type TestResult = Result<(), Box<dyn Error>>;

fn task(title: &str, deps: &[&str]) -> TaskDescriptor {
    TaskDescriptor {
        title: title.into(),
        due: None,
        deps: deps.iter().map(|d| d.to_string()).collect(),
    }
}

#[test]
fn lenient_mode_ignores_unknown_dependency() -> TestResult {
    let tasks = vec![task("A", &["Ghost"]), task("B", &["A"])];

    let schedule = compute_order(&tasks, &ScheduleOptions::default())?;
    assert_eq!(schedule.recommended_order, vec!["A", "B"]);

    Ok(())
}

#[test]
fn strict_mode_rejects_unknown_dependency() -> TestResult {
    let tasks = vec![task("A", &["Ghost"])];

    let opts = ScheduleOptions {
        missing_deps: MissingDepPolicy::Strict,
        ..Default::default()
    };

    let err = compute_order(&tasks, &opts).unwrap_err();
    assert_eq!(
        err,
        ScheduleError::UnknownDependency {
            task: "A".into(),
            dependency: "Ghost".into(),
        }
    );

    Ok(())
}

#[test]
fn empty_batch_is_rejected() -> TestResult {
    let err = compute_order(&[], &ScheduleOptions::default()).unwrap_err();
    assert_eq!(err, ScheduleError::EmptyBatch);

    Ok(())
}

#[test]
fn empty_title_is_rejected() -> TestResult {
    let tasks = vec![task("", &[])];

    let err = compute_order(&tasks, &ScheduleOptions::default()).unwrap_err();
    assert_eq!(err, ScheduleError::EmptyTitle);

    Ok(())
}

#[test]
fn duplicate_titles_are_rejected() -> TestResult {
    let tasks = vec![task("A", &[]), task("A", &["B"]), task("B", &[])];

    let err = compute_order(&tasks, &ScheduleOptions::default()).unwrap_err();
    assert_eq!(err, ScheduleError::DuplicateTitle { title: "A".into() });

    Ok(())
}

#[test]
fn long_chain_does_not_overflow_the_stack() -> TestResult {
    // A pathological chain: task-4999 -> ... -> task-0. The traversal uses
    // an explicit stack, so depth is bounded by heap, not the call stack.
    let n = 5_000;
    let mut tasks = Vec::with_capacity(n);
    tasks.push(task("task-0", &[]));
    for i in 1..n {
        tasks.push(TaskDescriptor {
            title: format!("task-{i}"),
            due: None,
            deps: vec![format!("task-{}", i - 1)],
        });
    }
    // Seed from the deep end.
    tasks.reverse();

    let schedule = compute_order(&tasks, &ScheduleOptions::default())?;
    assert_eq!(schedule.recommended_order.len(), n);
    assert_eq!(schedule.recommended_order[0], "task-0");
    assert_eq!(schedule.recommended_order[n - 1], format!("task-{}", n - 1));

    Ok(())
}
