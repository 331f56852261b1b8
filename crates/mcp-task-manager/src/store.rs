//! In-memory task store
//!
//! State lives in a [`TaskStore`] owned by the server instance. Each
//! operation holds the store lock for its whole read-modify-write.

use std::fmt;
use std::str::FromStr;
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};

/// A single task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub completed: bool,
}

impl Task {
    pub fn new(id: u64, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            completed: false,
        }
    }
}

/// Status filter for listing tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskFilter {
    #[default]
    All,
    Completed,
    Incomplete,
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Completed => task.completed,
            TaskFilter::Incomplete => !task.completed,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskFilter::All => "all",
            TaskFilter::Completed => "completed",
            TaskFilter::Incomplete => "incomplete",
        }
    }

    /// Every accepted filter value, in schema order
    pub const VALUES: [&'static str; 3] = ["all", "completed", "incomplete"];
}

impl FromStr for TaskFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(TaskFilter::All),
            "completed" => Ok(TaskFilter::Completed),
            "incomplete" => Ok(TaskFilter::Incomplete),
            other => Err(format!("unknown filter: {}", other)),
        }
    }
}

impl fmt::Display for TaskFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task list owned by one server instance
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Mutex<Vec<Task>>,
}

impl TaskStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with the two example tasks the demo server starts with.
    pub fn with_examples() -> Self {
        let mut done = Task::new(2, "Example Task 2", "Another example task");
        done.completed = true;
        Self::from_tasks(vec![
            Task::new(1, "Example Task 1", "This is an example task"),
            done,
        ])
    }

    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks: Mutex::new(tasks),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Task>> {
        self.tasks.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add a task with the next free ID (highest existing ID + 1).
    pub fn create(&self, title: impl Into<String>, description: impl Into<String>) -> Task {
        let mut tasks = self.lock();
        let id = tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        let task = Task::new(id, title, description);
        tasks.push(task.clone());
        task
    }

    /// Snapshot of the tasks matching `filter`, in insertion order.
    pub fn list(&self, filter: TaskFilter) -> Vec<Task> {
        self.lock()
            .iter()
            .filter(|t| filter.matches(t))
            .cloned()
            .collect()
    }

    pub fn get(&self, id: u64) -> Option<Task> {
        self.lock().iter().find(|t| t.id == id).cloned()
    }

    /// Mark a task completed, returning its new state.
    pub fn complete(&self, id: u64) -> Option<Task> {
        let mut tasks = self.lock();
        let task = tasks.iter_mut().find(|t| t.id == id)?;
        task.completed = true;
        Some(task.clone())
    }

    /// Remove a task, returning it.
    pub fn delete(&self, id: u64) -> Option<Task> {
        let mut tasks = self.lock();
        let index = tasks.iter().position(|t| t.id == id)?;
        Some(tasks.remove(index))
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn examples_are_seeded() {
        let store = TaskStore::with_examples();
        assert_eq!(store.len(), 2);
        assert!(!store.get(1).unwrap().completed);
        assert!(store.get(2).unwrap().completed);
    }

    #[test]
    fn ids_follow_highest_existing() {
        let store = TaskStore::with_examples();
        assert_eq!(store.create("a", "").id, 3);
        store.delete(3);
        // Deleting the highest ID frees it for reuse
        assert_eq!(store.create("b", "").id, 3);
    }

    #[test]
    fn empty_store_starts_at_one() {
        let store = TaskStore::new();
        assert!(store.is_empty());
        assert_eq!(store.create("first", "").id, 1);
    }

    #[rstest]
    #[case(TaskFilter::All, vec![1, 2])]
    #[case(TaskFilter::Completed, vec![2])]
    #[case(TaskFilter::Incomplete, vec![1])]
    fn list_applies_filter(#[case] filter: TaskFilter, #[case] expected: Vec<u64>) {
        let store = TaskStore::with_examples();
        let ids: Vec<u64> = store.list(filter).iter().map(|t| t.id).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn complete_and_delete_missing_return_none() {
        let store = TaskStore::new();
        assert!(store.complete(9).is_none());
        assert!(store.delete(9).is_none());
    }

    #[test]
    fn filter_round_trips_through_str() {
        for value in TaskFilter::VALUES {
            let filter: TaskFilter = value.parse().unwrap();
            assert_eq!(filter.to_string(), value);
        }
        assert!("done".parse::<TaskFilter>().is_err());
    }
}
