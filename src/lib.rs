// src/lib.rs

pub mod batch;
pub mod cli;
pub mod dag;
pub mod errors;
pub mod logging;

use anyhow::Result;
use tracing::debug;

use crate::batch::loader::load_and_validate;
use crate::batch::model::TaskDescriptor;
use crate::cli::{CliArgs, DueDateMode, OutputFormat};
use crate::dag::{
    compute_order, DepGraph, DueDatePolicy, MissingDepPolicy, ScheduleOptions,
};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - batch loading + validation
/// - the scheduler
/// - output rendering (plain lines or JSON)
pub fn run(args: CliArgs) -> Result<()> {
    let missing_deps = if args.strict {
        MissingDepPolicy::Strict
    } else {
        MissingDepPolicy::Lenient
    };

    let batch = load_and_validate(&args.batch, missing_deps)?;
    let tasks = batch.into_tasks();

    if args.dry_run {
        print_dry_run(&tasks)?;
        return Ok(());
    }

    let opts = ScheduleOptions {
        missing_deps,
        due_dates: match args.due_date_mode.unwrap_or(DueDateMode::VisitOrder) {
            DueDateMode::VisitOrder => DueDatePolicy::VisitOrder,
            DueDateMode::GlobalSort => DueDatePolicy::GlobalSort,
        },
    };

    let schedule = compute_order(&tasks, &opts)?;

    match args.format.unwrap_or(OutputFormat::Plain) {
        OutputFormat::Plain => {
            for title in &schedule.recommended_order {
                println!("{title}");
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&schedule)?);
        }
    }

    Ok(())
}

/// Simple dry-run output: print tasks, dues, deps and graph roots.
fn print_dry_run(tasks: &[TaskDescriptor]) -> Result<()> {
    let graph = DepGraph::from_tasks(tasks)?;

    println!("taskdag dry-run");
    println!();

    println!("tasks ({}):", tasks.len());
    for task in tasks {
        println!("  - {}", task.title);
        if let Some(due) = task.due {
            println!("      due: {}", due.to_rfc3339());
        }
        if !task.deps.is_empty() {
            println!("      deps: {:?}", task.deps);
        }
    }

    let roots: Vec<&str> = graph
        .roots()
        .map(|i| tasks[i].title.as_str())
        .collect();
    println!("roots (no dependencies): {roots:?}");

    for (i, dep) in graph.unresolved() {
        println!(
            "note: task '{}' references '{}' which is not in this batch",
            tasks[*i].title, dep
        );
    }

    debug!("dry-run complete (no ordering)");
    Ok(())
}
