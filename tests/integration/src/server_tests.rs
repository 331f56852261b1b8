//! Each server binary's tool family served over real TCP
//!
//! Servers are spawned on ephemeral ports so tests can run in parallel.

use std::sync::Arc;

use mcp_client::McpClient;
use mcp_file_explorer::{FileExplorer, file_server};
use mcp_http::{RunningServer, ToolServer};
use mcp_task_manager::{TaskStore, stub_server, task_server};
use mcp_weather::{WeatherService, weather_server};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tempfile::TempDir;

async fn start(server: ToolServer) -> (RunningServer, McpClient) {
    let running = server.spawn("127.0.0.1:0".parse().unwrap()).await.unwrap();
    let client = McpClient::new(running.url()).unwrap();
    (running, client)
}

fn names(tools: &[Value]) -> Vec<&str> {
    tools.iter().map(|t| t["name"].as_str().unwrap()).collect()
}

#[tokio::test]
async fn test_weather_scenario() {
    let (_server, client) = start(weather_server(Arc::new(WeatherService::default()))).await;

    let historical = client
        .call_tool(
            "get_historical_weather",
            json!({ "location": "tokyo", "date": "2023-05-01" }),
        )
        .await
        .unwrap();
    assert_eq!(
        historical["weather"],
        json!({ "high": 75, "low": 60, "condition": "Sunny" })
    );

    let forecast = client
        .call_tool("get_weather_forecast", json!({ "location": "London" }))
        .await
        .unwrap();
    assert_eq!(forecast["forecast"].as_array().unwrap().len(), 5);

    let unknown = client
        .call_tool("get_current_weather", json!({ "location": "Paris" }))
        .await
        .unwrap();
    assert_eq!(
        unknown,
        json!({ "success": false, "error": "Weather data not available for Paris" })
    );
}

#[tokio::test]
async fn test_file_explorer_scenario() {
    let temp = TempDir::new().unwrap();
    let (_server, client) = start(file_server(Arc::new(FileExplorer::new(temp.path())))).await;

    let created = client
        .call_tool(
            "create_file",
            json!({ "filePath": "docs/readme.md", "content": "# hi" }),
        )
        .await
        .unwrap();
    assert_eq!(created["success"], true);
    assert!(temp.path().join("docs/readme.md").exists());

    let listed = client
        .call_tool("list_files", json!({ "directory": "docs" }))
        .await
        .unwrap();
    assert_eq!(listed["files"][0]["name"], "readme.md");
    assert_eq!(listed["files"][0]["size"], 4);

    let read = client
        .call_tool("read_file", json!({ "filePath": "docs/readme.md" }))
        .await
        .unwrap();
    assert_eq!(read["content"], "# hi");

    let refused = client
        .call_tool("delete_file", json!({ "path": "docs" }))
        .await
        .unwrap();
    assert_eq!(refused["success"], false);

    let deleted = client
        .call_tool("delete_file", json!({ "path": "docs", "recursive": true }))
        .await
        .unwrap();
    assert_eq!(deleted["isDirectory"], true);
    assert!(!temp.path().join("docs").exists());
}

#[tokio::test]
async fn test_stub_task_server_uses_task_id() {
    let (_server, client) = start(stub_server()).await;

    let completed = client
        .call_tool("complete_task", json!({ "task_id": 7 }))
        .await
        .unwrap();
    assert_eq!(
        completed,
        json!({ "success": true, "message": "Task 7 marked as completed" })
    );

    let created = client
        .call_tool("create_task", json!({ "title": "stub" }))
        .await
        .unwrap();
    assert!(created["task"]["id"].as_u64().unwrap() < 1000);
}

#[tokio::test]
async fn test_unknown_tool_over_the_wire() {
    let (_server, client) = start(task_server(Arc::new(TaskStore::new()))).await;

    let out = client
        .call_tool("nonexistent_tool", json!({}))
        .await
        .unwrap();
    assert_eq!(
        out,
        json!({ "success": false, "error": "Tool not found: nonexistent_tool" })
    );
}

#[tokio::test]
async fn test_discovery_lists_tools_in_registration_order() {
    let temp = TempDir::new().unwrap();
    let cases = [
        (
            task_server(Arc::new(TaskStore::new())),
            vec!["create_task", "list_tasks", "complete_task", "delete_task"],
        ),
        (
            file_server(Arc::new(FileExplorer::new(temp.path()))),
            vec!["list_files", "read_file", "create_file", "delete_file"],
        ),
        (
            weather_server(Arc::new(WeatherService::default())),
            vec![
                "get_current_weather",
                "get_weather_forecast",
                "get_historical_weather",
            ],
        ),
    ];

    for (server, expected) in cases {
        let (running, client) = start(server).await;
        let tools = client.list_tools().await.unwrap();
        assert_eq!(names(&tools), expected);
        running.shutdown().await.unwrap();
    }
}

#[tokio::test]
async fn test_servers_keep_independent_state() {
    let (_first, a) = start(task_server(Arc::new(TaskStore::with_examples()))).await;
    let (_second, b) = start(task_server(Arc::new(TaskStore::with_examples()))).await;

    a.call_tool("create_task", json!({ "title": "only on a" }))
        .await
        .unwrap();

    let on_b = b.call_tool("list_tasks", json!({})).await.unwrap();
    assert_eq!(on_b["tasks"].as_array().unwrap().len(), 2);
}
