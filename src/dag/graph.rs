// src/dag/graph.rs

use std::collections::HashMap;

use crate::batch::model::TaskDescriptor;
use crate::errors::ScheduleError;

/// Internal node structure: the task's resolved dependency edges.
#[derive(Debug, Clone)]
struct DagNode {
    /// Direct dependencies, as indices into the task batch. Only references
    /// that resolved to a task in the batch appear here.
    deps: Vec<usize>,
}

/// In-memory dependency graph over one task batch.
///
/// Tasks are addressed by their position in the input slice; titles are
/// only the lookup key while building. Keeping the graph index-based means
/// duplicate titles cannot silently shadow each other — they are rejected
/// at construction instead.
#[derive(Debug, Clone)]
pub struct DepGraph {
    nodes: Vec<DagNode>,
    /// Dependency references that did not resolve to any task in the batch,
    /// as `(task index, referenced title)`. Policy for these is decided by
    /// the scheduler, not here.
    unresolved: Vec<(usize, String)>,
}

impl DepGraph {
    /// Build a graph from a task batch.
    ///
    /// Fails if the batch is empty, a title is empty, or two tasks share a
    /// title. Unresolved dependency references are recorded, not rejected.
    pub fn from_tasks(tasks: &[TaskDescriptor]) -> Result<Self, ScheduleError> {
        if tasks.is_empty() {
            return Err(ScheduleError::EmptyBatch);
        }

        let mut index: HashMap<&str, usize> = HashMap::with_capacity(tasks.len());
        for (i, task) in tasks.iter().enumerate() {
            if task.title.is_empty() {
                return Err(ScheduleError::EmptyTitle);
            }
            if index.insert(task.title.as_str(), i).is_some() {
                return Err(ScheduleError::DuplicateTitle {
                    title: task.title.clone(),
                });
            }
        }

        // Resolve dependency titles to indices.
        let mut nodes: Vec<DagNode> = Vec::with_capacity(tasks.len());
        let mut unresolved = Vec::new();
        for (i, task) in tasks.iter().enumerate() {
            let mut deps = Vec::with_capacity(task.deps.len());
            for dep in &task.deps {
                match index.get(dep.as_str()) {
                    Some(&d) => deps.push(d),
                    None => unresolved.push((i, dep.clone())),
                }
            }
            nodes.push(DagNode { deps });
        }

        Ok(Self { nodes, unresolved })
    }

    /// Immediate resolvable dependencies of a task.
    pub fn dependencies_of(&self, idx: usize) -> &[usize] {
        self.nodes
            .get(idx)
            .map(|n| n.deps.as_slice())
            .unwrap_or(&[])
    }

    /// Dependency references that named no task in the batch.
    pub fn unresolved(&self) -> &[(usize, String)] {
        &self.unresolved
    }

    /// Tasks with no resolvable dependencies.
    pub fn roots(&self) -> impl Iterator<Item = usize> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.deps.is_empty())
            .map(|(i, _)| i)
    }
}
