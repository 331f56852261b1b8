//! Stateless task tools
//!
//! The placeholder variant of the task manager: it answers with canned data
//! and identifies tasks by `task_id` rather than `id`. Nothing is stored.

use mcp_registry::params::whole_number;
use mcp_registry::{ParameterSchema, Property, ToolDescriptor, ToolRegistry};
use serde::Deserialize;
use serde_json::json;

use crate::store::{Task, TaskFilter, TaskStore};

/// Upper bound (exclusive) for the IDs handed out by `create_task`
pub const MAX_STUB_ID: u64 = 1000;

#[derive(Debug, Deserialize)]
struct CreateTaskArgs {
    title: String,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TaskRefArgs {
    #[serde(deserialize_with = "whole_number")]
    task_id: u64,
}

fn task_id_schema(description: &str) -> ParameterSchema {
    ParameterSchema::object()
        .property("task_id", Property::number(description))
        .required(["task_id"])
}

/// Register the placeholder task tools.
pub fn register_stub_tools(registry: &ToolRegistry) {
    registry.register(ToolDescriptor::from_fn(
        "create_task",
        "Create a new task in the task manager",
        ParameterSchema::object()
            .property("title", Property::string("The title of the task"))
            .property("description", Property::string("The description of the task"))
            .required(["title"]),
        |params| async move {
            let args: CreateTaskArgs = params.parse()?;
            let task = Task::new(
                fastrand::u64(0..MAX_STUB_ID),
                args.title,
                args.description.unwrap_or_default(),
            );
            Ok(json!({ "success": true, "task": task }))
        },
    ));

    registry.register(ToolDescriptor::from_fn(
        "list_tasks",
        "List all tasks in the task manager",
        ParameterSchema::object(),
        |_| async move {
            let tasks = TaskStore::with_examples().list(TaskFilter::All);
            Ok(json!({ "success": true, "tasks": tasks }))
        },
    ));

    registry.register(ToolDescriptor::from_fn(
        "complete_task",
        "Mark a task as completed",
        task_id_schema("The ID of the task to mark as completed"),
        |params| async move {
            let TaskRefArgs { task_id } = params.parse()?;
            Ok(json!({
                "success": true,
                "message": format!("Task {} marked as completed", task_id),
            }))
        },
    ));

    registry.register(ToolDescriptor::from_fn(
        "delete_task",
        "Delete a task",
        task_id_schema("The ID of the task to delete"),
        |params| async move {
            let TaskRefArgs { task_id } = params.parse()?;
            Ok(json!({
                "success": true,
                "message": format!("Task {} deleted", task_id),
            }))
        },
    ));
}
