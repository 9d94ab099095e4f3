// ABOUTME: Local filesystem implementation of the file store
// ABOUTME: Reads documents for the compiler and provides folder and glob tooling around it

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;
use walkdir::WalkDir;

use super::error::{Result, StoreError};
use super::FileStore;

const DEFAULT_PATTERN: &str = "*.*";

#[derive(Debug, Clone, Default)]
pub struct LocalFileStore;

impl LocalFileStore {
    pub fn new() -> Self {
        Self
    }

    /// Create or overwrite a file with text content
    pub async fn write(&self, path: &Path, content: &str) -> Result<()> {
        fs::write(path, content)
            .await
            .map_err(|e| StoreError::io(path, e))?;
        debug!("Wrote {} bytes to {}", content.len(), path.display());
        Ok(())
    }

    /// Create or overwrite a file with two-space indented JSON
    pub async fn write_json(&self, path: &Path, value: &JsonValue) -> Result<()> {
        let content = serde_json::to_string_pretty(value).map_err(|e| StoreError::Json {
            path: path.to_path_buf(),
            source: e,
        })?;
        self.write(path, &content).await
    }

    pub async fn delete(&self, path: &Path) -> Result<()> {
        fs::remove_file(path)
            .await
            .map_err(|e| StoreError::io(path, e))
    }

    /// Create a single folder. A folder that already exists is not an error.
    pub async fn create_folder(&self, path: &Path) -> Result<PathBuf> {
        match fs::create_dir(path).await {
            Ok(()) => Ok(path.to_path_buf()),
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => Ok(path.to_path_buf()),
            Err(e) => Err(StoreError::io(path, e)),
        }
    }

    /// Create `root/folders[0]/folders[1]/...` one level at a time.
    ///
    /// The root must already exist. When `delete_previous_content` is set, any
    /// level that already exists is emptied by deleting and recreating it.
    /// Returns the path of the deepest folder.
    pub async fn create_folders(
        &self,
        root: &Path,
        folders: &[&str],
        delete_previous_content: bool,
    ) -> Result<PathBuf> {
        if !self.exists(root).await {
            return Err(StoreError::MissingRoot(root.to_path_buf()));
        }

        let mut current = root.to_path_buf();
        for folder in folders {
            current = current.join(folder);
            if self.exists(&current).await && delete_previous_content {
                self.delete_folder(&current).await?;
            }
            self.create_folder(&current).await?;
        }

        Ok(current)
    }

    /// Recursively delete a folder. A missing folder is not an error.
    pub async fn delete_folder(&self, path: &Path) -> Result<()> {
        match fs::remove_dir_all(path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::io(path, e)),
        }
    }

    /// Delete every empty folder under `root`, including `root` itself once
    /// its subfolders have been pruned. Symlinks are never followed.
    pub async fn delete_empty_folders(&self, root: &Path) -> Result<()> {
        let is_real_dir = fs::symlink_metadata(root)
            .await
            .map(|metadata| metadata.is_dir())
            .unwrap_or(false);
        if !is_real_dir {
            return Ok(());
        }

        let root = root.to_path_buf();
        tokio::task::spawn_blocking(move || -> Result<()> {
            // Children are yielded before their parents
            for entry in WalkDir::new(&root).follow_links(false).contents_first(true) {
                let entry = entry?;
                if !entry.file_type().is_dir() {
                    continue;
                }

                let path = entry.path();
                let is_empty = std::fs::read_dir(path)
                    .map_err(|e| StoreError::io(path, e))?
                    .next()
                    .is_none();
                if is_empty {
                    debug!("Removing empty folder {}", path.display());
                    std::fs::remove_dir(path).map_err(|e| StoreError::io(path, e))?;
                }
            }
            Ok(())
        })
        .await?
    }

    /// List the files under `folder` matching any of `patterns` (default `*.*`)
    /// and none of `ignore`. Both are glob patterns relative to `folder`.
    pub async fn list_files(
        &self,
        folder: &Path,
        patterns: &[String],
        ignore: &[String],
    ) -> Result<Vec<PathBuf>> {
        let patterns: Vec<String> = if patterns.is_empty() {
            vec![join_pattern(folder, DEFAULT_PATTERN)]
        } else {
            patterns.iter().map(|p| join_pattern(folder, p)).collect()
        };
        let ignore = ignore
            .iter()
            .map(|p| glob::Pattern::new(&join_pattern(folder, p)))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let files = tokio::task::spawn_blocking(move || -> Result<Vec<PathBuf>> {
            let mut files = Vec::new();
            for pattern in &patterns {
                for entry in glob::glob(pattern)? {
                    let path = entry?;
                    if !path.is_file() || ignore.iter().any(|p| p.matches_path(&path)) {
                        continue;
                    }
                    if !files.contains(&path) {
                        files.push(path);
                    }
                }
            }
            Ok(files)
        })
        .await??;

        debug!("Found {} files under {}", files.len(), folder.display());
        Ok(files)
    }

    /// Resolve a user supplied path. No input yields the current directory;
    /// absolute and home-relative (`~`) paths are returned untouched.
    pub fn absolute_path(&self, path: Option<&str>) -> Result<PathBuf> {
        let cwd = || std::env::current_dir().map_err(|e| StoreError::io(".", e));

        match path {
            None | Some("") => cwd(),
            Some(p) if p.starts_with('/') || p.starts_with('\\') || p.starts_with('~') => {
                Ok(PathBuf::from(p))
            }
            Some(p) => Ok(cwd()?.join(p)),
        }
    }
}

#[async_trait]
impl FileStore for LocalFileStore {
    async fn exists(&self, path: &Path) -> bool {
        fs::try_exists(path).await.unwrap_or(false)
    }

    async fn read(&self, path: &Path) -> Result<Vec<u8>> {
        fs::read(path).await.map_err(|e| StoreError::io(path, e))
    }
}

fn join_pattern(folder: &Path, pattern: &str) -> String {
    folder.join(pattern).to_string_lossy().to_string()
}
