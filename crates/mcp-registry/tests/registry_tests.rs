//! Registry contract tests
//!
//! Covers discovery ordering, overwrite semantics, the non-throwing failure
//! contract and independence of concurrent invocations.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use mcp_registry::{
    ParameterSchema, Params, Property, ToolDescriptor, ToolError, ToolHandler, ToolRegistry,
    ToolResult, outcome_to_value,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};

fn constant(name: &str, description: &str, value: Value) -> ToolDescriptor {
    let schema = ParameterSchema::object().property("x", Property::string(description));
    ToolDescriptor::from_fn(name, description, schema, move |_| {
        let value = value.clone();
        async move { Ok(value) }
    })
}

/// Handler that sleeps before echoing its `tag` parameter.
struct Delayed {
    delay: Duration,
}

#[async_trait]
impl ToolHandler for Delayed {
    async fn call(&self, params: Params) -> ToolResult {
        tokio::time::sleep(self.delay).await;
        let tag = params
            .get("tag")
            .cloned()
            .ok_or_else(|| ToolError::handler("tag is required"))?;
        Ok(json!({ "success": true, "tag": tag }))
    }
}

#[test]
fn describe_lists_tools_in_registration_order() {
    let registry = ToolRegistry::new();
    registry.register(constant("create_task", "Create a task", json!(1)));
    registry.register(constant("list_tasks", "List tasks", json!(2)));
    registry.register(constant("delete_task", "Delete a task", json!(3)));

    let described = registry.describe();
    let names: Vec<&str> = described.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["create_task", "list_tasks", "delete_task"]);
    assert_eq!(described[1].description, "List tasks");
    assert_eq!(
        serde_json::to_value(&described[1].parameters).unwrap(),
        json!({
            "type": "object",
            "properties": { "x": { "type": "string", "description": "List tasks" } }
        })
    );
}

#[test]
fn describe_reflects_last_registration_on_duplicates() {
    let registry = ToolRegistry::new();
    registry.register(constant("a", "first", json!(1)));
    registry.register(constant("b", "other", json!(2)));
    registry.register(constant("a", "second", json!(3)));

    let described = registry.describe();
    assert_eq!(described.len(), 2);
    assert_eq!(described[0].name, "a");
    assert_eq!(described[0].description, "second");
}

#[tokio::test]
async fn duplicate_registration_dispatches_to_latest_handler() {
    let registry = ToolRegistry::new();
    registry.register(constant("tool", "first", json!("first")));
    registry.register(constant("tool", "second", json!("second")));

    let out = registry.invoke("tool", json!({})).await.unwrap();
    assert_eq!(out, json!("second"));
}

#[rstest]
#[case("nonexistent_tool")]
#[case("")]
#[case("CREATE_TASK")]
#[tokio::test]
async fn unknown_names_resolve_to_not_found(#[case] name: &str) {
    let registry = ToolRegistry::new();
    registry.register(constant("create_task", "Create", json!(true)));

    let outcome = registry.invoke(name, json!({})).await;
    assert_eq!(outcome, Err(ToolError::NotFound(name.to_string())));
    assert_eq!(
        outcome_to_value(outcome),
        json!({ "success": false, "error": format!("Tool not found: {}", name) })
    );
}

#[tokio::test]
async fn handler_failure_is_returned_not_raised() {
    let registry = ToolRegistry::new();
    registry.register(ToolDescriptor::new(
        "slow",
        "Slow echo",
        ParameterSchema::object(),
        Arc::new(Delayed {
            delay: Duration::from_millis(1),
        }),
    ));

    let value = outcome_to_value(registry.invoke("slow", json!({})).await);
    assert_eq!(value, json!({ "success": false, "error": "tag is required" }));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn concurrent_invocations_stay_independent() {
    let registry = Arc::new(ToolRegistry::new());
    registry.register(ToolDescriptor::new(
        "slow",
        "Slow echo",
        ParameterSchema::object(),
        Arc::new(Delayed {
            delay: Duration::from_millis(50),
        }),
    ));
    registry.register(ToolDescriptor::new(
        "fast",
        "Fast echo",
        ParameterSchema::object(),
        Arc::new(Delayed {
            delay: Duration::from_millis(1),
        }),
    ));

    let slow = {
        let registry = Arc::clone(&registry);
        tokio::spawn(async move { registry.invoke("slow", json!({ "tag": "slow" })).await })
    };
    let fast = {
        let registry = Arc::clone(&registry);
        tokio::spawn(async move { registry.invoke("fast", json!({ "tag": "fast" })).await })
    };

    let (slow, fast) = (slow.await.unwrap(), fast.await.unwrap());
    assert_eq!(slow.unwrap(), json!({ "success": true, "tag": "slow" }));
    assert_eq!(fast.unwrap(), json!({ "success": true, "tag": "fast" }));
}

#[tokio::test]
async fn registration_while_serving_is_visible() {
    let registry = Arc::new(ToolRegistry::new());
    registry.register(constant("a", "first", json!(1)));

    assert!(registry.invoke("late", json!({})).await.is_err());
    registry.register(constant("late", "late", json!("late")));
    assert_eq!(registry.invoke("late", json!({})).await.unwrap(), json!("late"));
    assert!(registry.contains("late"));
}
