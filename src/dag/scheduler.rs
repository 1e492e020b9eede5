// src/dag/scheduler.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, warn};

use crate::batch::model::TaskDescriptor;
use crate::dag::graph::DepGraph;
use crate::errors::ScheduleError;

/// How dependency references that name no task in the batch are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingDepPolicy {
    /// Skip the reference; it imposes no ordering constraint. Logged at
    /// `warn!` so silently-dropped constraints are at least visible.
    #[default]
    Lenient,
    /// Reject the batch with [`ScheduleError::UnknownDependency`].
    Strict,
}

/// How due dates influence the final order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DueDatePolicy {
    /// Due dates order the traversal itself: tasks are seeded into the DFS
    /// due-ascending (missing dates last), and each task's dependencies are
    /// visited due-ascending. The dependency invariant always holds — a
    /// task is emitted only after its resolvable dependencies.
    #[default]
    VisitOrder,
    /// Traverse in input order, then stably re-sort the whole result by due
    /// date ascending with missing dates last. Equal dates keep their
    /// topological order, but an urgent task can be moved ahead of its own
    /// dependency. Kept for callers that want the legacy contract.
    GlobalSort,
}

/// Options for one scheduling call.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScheduleOptions {
    pub missing_deps: MissingDepPolicy,
    pub due_dates: DueDatePolicy,
}

/// Recommended execution order for one project's task batch: a permutation
/// of the input titles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schedule {
    pub recommended_order: Vec<String>,
}

/// Traversal mark per task, alive only during one call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    /// Currently on the DFS path; meeting this mark again is a cycle.
    InProgress,
    /// Already placed in the result.
    Done,
}

/// DFS stack frame: a task and a cursor into its dependency list.
#[derive(Debug, Clone, Copy)]
struct Frame {
    node: usize,
    next_dep: usize,
}

/// Compute a dependency-respecting execution order for `tasks`.
///
/// Pure and deterministic: no state is shared across calls, and the same
/// input always yields the same output. On any error the whole call fails;
/// no partial schedule is returned.
pub fn compute_order(
    tasks: &[TaskDescriptor],
    opts: &ScheduleOptions,
) -> Result<Schedule, ScheduleError> {
    let graph = DepGraph::from_tasks(tasks)?;

    match opts.missing_deps {
        MissingDepPolicy::Strict => {
            if let Some((i, dep)) = graph.unresolved().first() {
                return Err(ScheduleError::UnknownDependency {
                    task: tasks[*i].title.clone(),
                    dependency: dep.clone(),
                });
            }
        }
        MissingDepPolicy::Lenient => {
            for (i, dep) in graph.unresolved() {
                warn!(
                    task = %tasks[*i].title,
                    dependency = %dep,
                    "dependency not in batch; treating as unconstrained"
                );
            }
        }
    }

    // Per-task dependency visit order. Under VisitOrder, siblings are
    // visited due-ascending so ties among unconstrained tasks fall out in
    // due-date order without any post-sort.
    let visit_deps: Vec<Vec<usize>> = (0..tasks.len())
        .map(|i| {
            let mut deps = graph.dependencies_of(i).to_vec();
            if opts.due_dates == DueDatePolicy::VisitOrder {
                deps.sort_by_key(|&d| due_key(&tasks[d]));
            }
            deps
        })
        .collect();

    let mut seeds: Vec<usize> = (0..tasks.len()).collect();
    if opts.due_dates == DueDatePolicy::VisitOrder {
        // Stable: equal and missing dates keep input order.
        seeds.sort_by_key(|&i| due_key(&tasks[i]));
    }

    let mut mark = vec![Mark::Unvisited; tasks.len()];
    let mut order: Vec<usize> = Vec::with_capacity(tasks.len());

    for seed in seeds {
        if mark[seed] != Mark::Unvisited {
            continue;
        }
        visit(seed, tasks, &visit_deps, &mut mark, &mut order)?;
    }

    if opts.due_dates == DueDatePolicy::GlobalSort {
        // Stable sort: equal due dates retain the topological order. This
        // can move a task ahead of its dependency when their dates differ.
        order.sort_by_key(|&i| due_key(&tasks[i]));
    }

    debug!(tasks = tasks.len(), "schedule computed");

    Ok(Schedule {
        recommended_order: order
            .into_iter()
            .map(|i| tasks[i].title.clone())
            .collect(),
    })
}

/// Post-order DFS from `start` using an explicit frame stack.
///
/// Recursion would overflow on a long dependency chain, so the path lives
/// on the heap: each frame remembers how far through its dependency list
/// it has progressed.
fn visit(
    start: usize,
    tasks: &[TaskDescriptor],
    visit_deps: &[Vec<usize>],
    mark: &mut [Mark],
    order: &mut Vec<usize>,
) -> Result<(), ScheduleError> {
    let mut stack = vec![Frame {
        node: start,
        next_dep: 0,
    }];
    mark[start] = Mark::InProgress;

    while let Some(frame) = stack.last_mut() {
        let node = frame.node;
        if frame.next_dep < visit_deps[node].len() {
            let dep = visit_deps[node][frame.next_dep];
            frame.next_dep += 1;
            match mark[dep] {
                Mark::Done => {}
                Mark::InProgress => {
                    return Err(ScheduleError::CircularDependency {
                        title: tasks[dep].title.clone(),
                    });
                }
                Mark::Unvisited => {
                    mark[dep] = Mark::InProgress;
                    stack.push(Frame {
                        node: dep,
                        next_dep: 0,
                    });
                }
            }
        } else {
            // All dependencies placed; emit post-order.
            mark[node] = Mark::Done;
            order.push(node);
            stack.pop();
        }
    }

    Ok(())
}

/// Sort key for due dates: missing dates sort last.
fn due_key(task: &TaskDescriptor) -> DateTime<Utc> {
    task.due.unwrap_or(DateTime::<Utc>::MAX_UTC)
}
