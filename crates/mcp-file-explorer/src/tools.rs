//! File tools backed by a [`FileExplorer`]

use std::sync::Arc;

use mcp_registry::{ParameterSchema, Property, ToolDescriptor, ToolError, ToolRegistry, ToolResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::explorer::FileExplorer;

#[derive(Debug, Deserialize)]
struct ListFilesArgs {
    directory: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReadFileArgs {
    file_path: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateFileArgs {
    file_path: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct DeleteFileArgs {
    path: String,
    #[serde(default)]
    recursive: Option<bool>,
}

/// Register the file tools against `explorer`.
pub fn register_tools(registry: &ToolRegistry, explorer: Arc<FileExplorer>) {
    let fx = Arc::clone(&explorer);
    registry.register(ToolDescriptor::from_fn(
        "list_files",
        "List files in a directory",
        ParameterSchema::object()
            .property(
                "directory",
                Property::string("The directory path to list files from"),
            )
            .required(["directory"]),
        move |params| {
            let fx = Arc::clone(&fx);
            async move {
                let args: ListFilesArgs = params.parse()?;
                let files = fx.list_files(&args.directory).await?;
                Ok(json!({
                    "success": true,
                    "directory": args.directory,
                    "files": files,
                }))
            }
        },
    ));

    let fx = Arc::clone(&explorer);
    registry.register(ToolDescriptor::from_fn(
        "read_file",
        "Read the contents of a file",
        ParameterSchema::object()
            .property("filePath", Property::string("The path of the file to read"))
            .required(["filePath"]),
        move |params| {
            let fx = Arc::clone(&fx);
            async move {
                let args: ReadFileArgs = params.parse()?;
                let file = fx.read_file(&args.file_path).await?;
                success_with(&file)
            }
        },
    ));

    let fx = Arc::clone(&explorer);
    registry.register(ToolDescriptor::from_fn(
        "create_file",
        "Create a new file with the specified content",
        ParameterSchema::object()
            .property(
                "filePath",
                Property::string("The path where the file should be created"),
            )
            .property(
                "content",
                Property::string("The content to write to the file"),
            )
            .required(["filePath", "content"]),
        move |params| {
            let fx = Arc::clone(&fx);
            async move {
                let args: CreateFileArgs = params.parse()?;
                let created = fx.create_file(&args.file_path, &args.content).await?;
                success_with(&created)
            }
        },
    ));

    let fx = explorer;
    registry.register(ToolDescriptor::from_fn(
        "delete_file",
        "Delete a file or directory",
        ParameterSchema::object()
            .property(
                "path",
                Property::string("The path of the file or directory to delete"),
            )
            .property(
                "recursive",
                Property::boolean("Whether to recursively delete directories"),
            )
            .required(["path"]),
        move |params| {
            let fx = Arc::clone(&fx);
            async move {
                let args: DeleteFileArgs = params.parse()?;
                let deleted = fx
                    .delete(&args.path, args.recursive.unwrap_or(false))
                    .await?;
                success_with(&deleted)
            }
        },
    ));
}

/// The fields of `record` plus `success: true`
fn success_with<T: Serialize>(record: &T) -> ToolResult {
    let fields = serde_json::to_value(record).map_err(|e| ToolError::handler(e.to_string()))?;
    let Value::Object(fields) = fields else {
        return Err(ToolError::handler(format!(
            "expected a record, got {}",
            fields
        )));
    };
    let mut out = Map::new();
    out.insert("success".to_string(), Value::Bool(true));
    out.extend(fields);
    Ok(Value::Object(out))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    use pretty_assertions::assert_eq;

    use crate::explorer::DeletedPath;

    #[test]
    fn success_flag_joins_record_fields() {
        let out = success_with(&DeletedPath {
            path: "a.txt".into(),
            is_directory: false,
        })
        .unwrap();
        assert_eq!(
            out,
            json!({ "success": true, "path": "a.txt", "isDirectory": false })
        );
    }

    #[test]
    fn unserializable_record_is_a_failure() {
        let bad: BTreeMap<(u8, u8), u8> = BTreeMap::from([((1, 2), 3)]);
        let err = success_with(&bad).unwrap_err();
        assert_eq!(err.kind(), "handler_failure");
        assert!(err.to_string().contains("key must be a string"));
    }

    #[test]
    fn non_object_record_is_a_failure() {
        let err = success_with(&5).unwrap_err();
        assert_eq!(err, ToolError::Handler("expected a record, got 5".into()));
    }
}
