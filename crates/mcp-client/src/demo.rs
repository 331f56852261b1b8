//! Task manager walkthrough
//!
//! Lists, creates, completes and deletes a task against a running task
//! manager server, recording each step.

use serde::Serialize;
use serde_json::{Value, json};

use crate::client::McpClient;
use crate::error::{ClientError, Result};

/// One step of the walkthrough and the server's answer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoStep {
    pub title: &'static str,
    pub tool: &'static str,
    pub result: Value,
}

/// Run the seven step walkthrough.
///
/// Stops at the first transport or JSON-RPC error. A tool answering
/// `{success:false}` does not stop the run, except for `create_task`
/// whose task id every later step needs.
pub async fn run_task_demo(client: &McpClient) -> Result<Vec<DemoStep>> {
    let mut steps = Vec::with_capacity(7);

    steps.push(step(client, "Listing all tasks", "list_tasks", json!({})).await?);

    let created = step(
        client,
        "Creating a new task",
        "create_task",
        json!({
            "title": "Implement MCP client",
            "description": "Create a client application that demonstrates MCP functionality",
        }),
    )
    .await?;
    let id = created.result["task"]["id"]
        .as_u64()
        .ok_or_else(|| ClientError::UnexpectedResponse {
            tool: "create_task".to_string(),
            reason: "no task id in result".to_string(),
        })?;
    steps.push(created);

    steps.push(step(client, "Listing tasks after creation", "list_tasks", json!({})).await?);
    steps.push(step(client, "Completing a task", "complete_task", json!({ "id": id })).await?);
    steps.push(
        step(
            client,
            "Listing completed tasks",
            "list_tasks",
            json!({ "filter": "completed" }),
        )
        .await?,
    );
    steps.push(step(client, "Deleting a task", "delete_task", json!({ "id": id })).await?);
    steps.push(step(client, "Listing tasks after deletion", "list_tasks", json!({})).await?);

    Ok(steps)
}

async fn step(
    client: &McpClient,
    title: &'static str,
    tool: &'static str,
    params: Value,
) -> Result<DemoStep> {
    let result = client.call_tool(tool, params).await?;
    tracing::info!(step = title, tool, "Step finished");
    Ok(DemoStep {
        title,
        tool,
        result,
    })
}
