//! Task tools backed by a [`TaskStore`]
//!
//! - `create_task` - add a task
//! - `list_tasks` - list tasks, optionally filtered by status
//! - `complete_task` - mark a task completed by `id`
//! - `delete_task` - remove a task by `id`

use std::sync::Arc;

use mcp_registry::params::whole_number;
use mcp_registry::{ParameterSchema, Params, Property, ToolDescriptor, ToolError, ToolRegistry};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::store::{TaskFilter, TaskStore};

#[derive(Debug, Deserialize)]
struct CreateTaskArgs {
    title: String,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ListTasksArgs {
    #[serde(default)]
    filter: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TaskIdArgs {
    #[serde(deserialize_with = "whole_number")]
    id: u64,
}

fn not_found(id: u64) -> ToolError {
    ToolError::handler(format!("Task with ID {} not found", id))
}

fn create_task(store: &TaskStore, params: Params) -> Result<Value, ToolError> {
    let args: CreateTaskArgs = params.parse()?;
    let task = store.create(args.title, args.description.unwrap_or_default());
    tracing::debug!(id = task.id, "Created task");
    Ok(json!({ "success": true, "task": task }))
}

fn list_tasks(store: &TaskStore, params: Params) -> Result<Value, ToolError> {
    let args: ListTasksArgs = params.parse()?;
    // Only "completed" and "incomplete" narrow the list; anything else lists all
    let filter = match args.filter.as_deref().map(str::parse::<TaskFilter>) {
        Some(Ok(filter)) => filter,
        Some(Err(e)) => {
            tracing::debug!(error = %e, "Falling back to all tasks");
            TaskFilter::All
        }
        None => TaskFilter::All,
    };
    tracing::debug!(%filter, "Listing tasks");
    Ok(json!({ "success": true, "tasks": store.list(filter) }))
}

fn complete_task(store: &TaskStore, params: Params) -> Result<Value, ToolError> {
    let TaskIdArgs { id } = params.parse()?;
    let task = store.complete(id).ok_or_else(|| not_found(id))?;
    Ok(json!({ "success": true, "task": task }))
}

fn delete_task(store: &TaskStore, params: Params) -> Result<Value, ToolError> {
    let TaskIdArgs { id } = params.parse()?;
    let task = store.delete(id).ok_or_else(|| not_found(id))?;
    Ok(json!({ "success": true, "task": task }))
}

fn id_schema(description: &str) -> ParameterSchema {
    ParameterSchema::object()
        .property("id", Property::number(description))
        .required(["id"])
}

/// Wrap a synchronous store operation as a tool handler.
fn tool<F>(
    store: &Arc<TaskStore>,
    name: &str,
    description: &str,
    schema: ParameterSchema,
    op: F,
) -> ToolDescriptor
where
    F: Fn(&TaskStore, Params) -> Result<Value, ToolError> + Copy + Send + Sync + 'static,
{
    let store = Arc::clone(store);
    ToolDescriptor::from_fn(name, description, schema, move |params| {
        let store = Arc::clone(&store);
        async move { op(&store, params) }
    })
}

/// Register the task tools against `store`.
pub fn register_tools(registry: &ToolRegistry, store: Arc<TaskStore>) {
    registry.register(tool(
        &store,
        "create_task",
        "Create a new task in the task manager",
        ParameterSchema::object()
            .property("title", Property::string("The title of the task"))
            .property("description", Property::string("The description of the task"))
            .required(["title"]),
        create_task,
    ));

    registry.register(tool(
        &store,
        "list_tasks",
        "List all tasks in the task manager",
        ParameterSchema::object().property(
            "filter",
            Property::string(r#"Filter tasks by status: "all", "completed", or "incomplete""#)
                .one_of(TaskFilter::VALUES),
        ),
        list_tasks,
    ));

    registry.register(tool(
        &store,
        "complete_task",
        "Mark a task as completed",
        id_schema("The ID of the task to mark as completed"),
        complete_task,
    ));

    registry.register(tool(
        &store,
        "delete_task",
        "Delete a task from the task manager",
        id_schema("The ID of the task to delete"),
        delete_task,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn registry() -> ToolRegistry {
        let registry = ToolRegistry::new();
        register_tools(&registry, Arc::new(TaskStore::with_examples()));
        registry
    }

    #[test]
    fn registers_four_tools_in_order() {
        assert_eq!(
            registry().names(),
            vec!["create_task", "list_tasks", "complete_task", "delete_task"]
        );
    }

    #[tokio::test]
    async fn create_defaults_description() {
        let out = registry()
            .invoke("create_task", json!({ "title": "X" }))
            .await
            .unwrap();
        assert_eq!(
            out,
            json!({
                "success": true,
                "task": { "id": 3, "title": "X", "description": "", "completed": false }
            })
        );
    }

    #[tokio::test]
    async fn create_without_title_is_structured_failure() {
        let err = registry()
            .invoke("create_task", json!({ "description": "untitled" }))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "invalid_params");
        assert!(err.to_string().contains("missing field `title`"));
    }

    #[rstest]
    #[case(json!({ "filter": "done" }))]
    #[case(json!({ "filter": "" }))]
    #[case(json!({ "filter": "ALL" }))]
    #[case(json!({ "filter": null }))]
    #[tokio::test]
    async fn unrecognised_filter_lists_everything(#[case] params: Value) {
        let out = registry().invoke("list_tasks", params).await.unwrap();
        assert_eq!(out["success"], true);
        assert_eq!(out["tasks"].as_array().unwrap().len(), 2);
    }

    #[rstest]
    #[case(json!(1))]
    #[case(json!(1.0))]
    #[tokio::test]
    async fn complete_accepts_whole_number_ids(#[case] id: Value) {
        let out = registry()
            .invoke("complete_task", json!({ "id": id }))
            .await
            .unwrap();
        assert_eq!(out["task"]["id"], 1);
        assert_eq!(out["task"]["completed"], true);
    }

    #[tokio::test]
    async fn fractional_id_is_invalid_params() {
        let err = registry()
            .invoke("delete_task", json!({ "id": 1.5 }))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "invalid_params");
    }

    #[tokio::test]
    async fn complete_unknown_id_reports_not_found() {
        let err = registry()
            .invoke("complete_task", json!({ "id": 42 }))
            .await
            .unwrap_err();
        assert_eq!(err, ToolError::Handler("Task with ID 42 not found".into()));
    }

    #[tokio::test]
    async fn string_id_is_invalid_params() {
        let err = registry()
            .invoke("delete_task", json!({ "id": "1" }))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "invalid_params");
    }
}
