//! End-to-end task manager walkthrough
//!
//! Starts a real task manager server on an ephemeral port and drives it
//! with the HTTP client: list -> create -> list -> complete -> list
//! completed -> delete -> list.

use std::sync::Arc;

use mcp_client::{McpClient, run_task_demo};
use mcp_task_manager::{TaskStore, task_server};
use pretty_assertions::assert_eq;
use serde_json::Value;

fn ids(result: &Value) -> Vec<u64> {
    result["tasks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_u64().unwrap())
        .collect()
}

#[tokio::test]
async fn test_task_demo_against_live_server() {
    let store = Arc::new(TaskStore::with_examples());
    let server = task_server(Arc::clone(&store))
        .spawn("127.0.0.1:0".parse().unwrap())
        .await
        .unwrap();
    let client = McpClient::new(server.url()).unwrap();

    let steps = run_task_demo(&client).await.unwrap();
    let tools: Vec<_> = steps.iter().map(|s| s.tool).collect();
    assert_eq!(
        tools,
        vec![
            "list_tasks",
            "create_task",
            "list_tasks",
            "complete_task",
            "list_tasks",
            "delete_task",
            "list_tasks"
        ]
    );

    assert_eq!(ids(&steps[0].result), vec![1, 2]);

    let created = &steps[1].result["task"];
    assert_eq!(created["id"], 3);
    assert_eq!(created["title"], "Implement MCP client");
    assert_eq!(created["completed"], false);

    assert_eq!(ids(&steps[2].result), vec![1, 2, 3]);
    assert_eq!(steps[3].result["task"]["completed"], true);

    // Example task 2 ships completed
    assert_eq!(ids(&steps[4].result), vec![2, 3]);

    assert_eq!(steps[5].result["success"], true);
    assert_eq!(ids(&steps[6].result), vec![1, 2]);
    assert_eq!(store.len(), 2);

    server.shutdown().await.unwrap();
}
