//! Filesystem operations behind the file tools
//!
//! Relative paths are resolved against the explorer's root. Paths echoed
//! back to callers are the strings they sent, not the resolved paths.

use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use tokio::fs;

use crate::error::{FsError, Result};

/// One directory entry as reported by `list_files`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileEntry {
    pub name: String,
    pub path: String,
    pub is_directory: bool,
    pub size: u64,
    pub created: Option<String>,
    pub modified: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileContents {
    pub file_path: String,
    pub content: String,
    pub size: u64,
    pub modified: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedFile {
    pub file_path: String,
    pub size: u64,
    pub created: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedPath {
    pub path: String,
    pub is_directory: bool,
}

/// Format a filesystem timestamp as RFC 3339 UTC with milliseconds.
///
/// Platforms without birth-time support yield `None`.
fn timestamp(time: io::Result<SystemTime>) -> Option<String> {
    time.ok()
        .map(|t| DateTime::<Utc>::from(t).to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// File operations rooted at a base directory
#[derive(Debug, Clone)]
pub struct FileExplorer {
    root: PathBuf,
}

impl FileExplorer {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a caller-supplied path against the root
    pub fn resolve(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    /// List a directory, entries sorted by name
    pub async fn list_files(&self, directory: &str) -> Result<Vec<FileEntry>> {
        let dir = self.resolve(directory);
        let mut reader = fs::read_dir(&dir)
            .await
            .map_err(FsError::io("failed to read directory", &dir))?;

        let mut files = Vec::new();
        while let Some(entry) = reader
            .next_entry()
            .await
            .map_err(FsError::io("failed to read directory", &dir))?
        {
            let full_path = entry.path();
            let metadata = fs::metadata(&full_path)
                .await
                .map_err(FsError::io("failed to stat", &full_path))?;
            let name = entry.file_name().to_string_lossy().into_owned();

            files.push(FileEntry {
                path: Path::new(directory).join(&name).display().to_string(),
                name,
                is_directory: metadata.is_dir(),
                size: metadata.len(),
                created: timestamp(metadata.created()),
                modified: timestamp(metadata.modified()),
            });
        }

        files.sort_by(|a, b| a.name.cmp(&b.name));
        tracing::debug!(directory = %dir.display(), count = files.len(), "Listed directory");
        Ok(files)
    }

    /// Read a file as text; invalid UTF-8 is replaced rather than rejected
    pub async fn read_file(&self, file_path: &str) -> Result<FileContents> {
        let path = self.resolve(file_path);
        let bytes = fs::read(&path)
            .await
            .map_err(FsError::io("failed to read file", &path))?;
        let metadata = fs::metadata(&path)
            .await
            .map_err(FsError::io("failed to stat", &path))?;

        Ok(FileContents {
            file_path: file_path.to_string(),
            content: String::from_utf8_lossy(&bytes).into_owned(),
            size: metadata.len(),
            modified: timestamp(metadata.modified()),
        })
    }

    /// Write a file, creating missing parent directories
    pub async fn create_file(&self, file_path: &str, content: &str) -> Result<CreatedFile> {
        let path = self.resolve(file_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(FsError::io("failed to create directory", parent))?;
        }
        fs::write(&path, content)
            .await
            .map_err(FsError::io("failed to write file", &path))?;
        let metadata = fs::metadata(&path)
            .await
            .map_err(FsError::io("failed to stat", &path))?;

        tracing::debug!(path = %path.display(), size = metadata.len(), "Created file");
        Ok(CreatedFile {
            file_path: file_path.to_string(),
            size: metadata.len(),
            created: timestamp(metadata.created()),
        })
    }

    /// Delete a file or directory.
    ///
    /// A non-empty directory is only removed when `recursive` is set.
    /// Symlinks are removed themselves, never their targets.
    pub async fn delete(&self, target: &str, recursive: bool) -> Result<DeletedPath> {
        let path = self.resolve(target);
        let metadata = fs::symlink_metadata(&path)
            .await
            .map_err(FsError::io("failed to stat", &path))?;
        let is_directory = metadata.is_dir();

        if is_directory {
            if recursive {
                fs::remove_dir_all(&path)
                    .await
                    .map_err(FsError::io("failed to remove directory", &path))?;
            } else {
                let mut reader = fs::read_dir(&path)
                    .await
                    .map_err(FsError::io("failed to read directory", &path))?;
                let has_entries = reader
                    .next_entry()
                    .await
                    .map_err(FsError::io("failed to read directory", &path))?
                    .is_some();
                if has_entries {
                    return Err(FsError::DirectoryNotEmpty {
                        path: target.to_string(),
                    });
                }
                fs::remove_dir(&path)
                    .await
                    .map_err(FsError::io("failed to remove directory", &path))?;
            }
        } else {
            fs::remove_file(&path)
                .await
                .map_err(FsError::io("failed to remove file", &path))?;
        }

        tracing::debug!(path = %path.display(), is_directory, recursive, "Deleted path");
        Ok(DeletedPath {
            path: target.to_string(),
            is_directory,
        })
    }
}
