// src/batch/validate.rs

use std::collections::HashSet;

use anyhow::{anyhow, Result};
use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;

use crate::batch::model::BatchFile;
use crate::dag::MissingDepPolicy;
use crate::errors::ScheduleError;

/// Run semantic validation against a loaded batch.
///
/// This checks:
/// - the batch contains at least one task
/// - every title is non-empty and unique
/// - no task depends on itself
/// - under [`MissingDepPolicy::Strict`], all `deps` refer to batch tasks
/// - the dependency graph has no cycles
///
/// Under [`MissingDepPolicy::Lenient`], dependency references outside the
/// batch are left alone here; the scheduler logs and skips them.
pub fn validate_batch(batch: &BatchFile, missing_deps: MissingDepPolicy) -> Result<()> {
    ensure_has_tasks(batch)?;
    validate_titles(batch)?;
    validate_dependencies(batch, missing_deps)?;
    validate_dag(batch)?;
    Ok(())
}

fn ensure_has_tasks(batch: &BatchFile) -> Result<()> {
    if batch.task.is_empty() {
        return Err(ScheduleError::EmptyBatch.into());
    }
    Ok(())
}

fn validate_titles(batch: &BatchFile) -> Result<()> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(batch.task.len());
    for task in &batch.task {
        if task.title.is_empty() {
            return Err(ScheduleError::EmptyTitle.into());
        }
        if !seen.insert(task.title.as_str()) {
            return Err(ScheduleError::DuplicateTitle {
                title: task.title.clone(),
            }
            .into());
        }
    }
    Ok(())
}

fn validate_dependencies(batch: &BatchFile, missing_deps: MissingDepPolicy) -> Result<()> {
    let titles: HashSet<&str> = batch.task.iter().map(|t| t.title.as_str()).collect();

    for task in &batch.task {
        for dep in &task.deps {
            if dep == &task.title {
                return Err(anyhow!(
                    "task '{}' cannot depend on itself",
                    task.title
                ));
            }
            if missing_deps == MissingDepPolicy::Strict && !titles.contains(dep.as_str()) {
                return Err(ScheduleError::UnknownDependency {
                    task: task.title.clone(),
                    dependency: dep.clone(),
                }
                .into());
            }
        }
    }
    Ok(())
}

fn validate_dag(batch: &BatchFile) -> Result<()> {
    // Build a petgraph graph over the batch.
    //
    // Edge direction: dep -> task. For:
    //   [[task]]
    //   title = "B"
    //   deps = ["A"]
    // we add edge A -> B. References outside the batch add no edge; they
    // impose no constraint (or were already rejected in strict mode).
    let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();

    for task in &batch.task {
        graph.add_node(task.title.as_str());
    }

    for task in &batch.task {
        for dep in &task.deps {
            if graph.contains_node(dep.as_str()) {
                graph.add_edge(dep.as_str(), task.title.as_str(), ());
            }
        }
    }

    // A topological sort will fail if there is a cycle.
    match toposort(&graph, None) {
        Ok(_order) => Ok(()),
        Err(cycle) => {
            let node = cycle.node_id();
            Err(ScheduleError::CircularDependency {
                title: node.to_string(),
            }
            .into())
        }
    }
}
