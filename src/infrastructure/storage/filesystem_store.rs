//! Filesystem-based document store

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use url::Url;
use uuid::Uuid;

use crate::application::{DocumentDownloader, DocumentUploader};
use crate::core::error::{OrderError, Result};
use crate::orders::DocumentReference;

static UNSAFE_FILE_NAME_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[/\\:*?"<>|\x00-\x1f]"#).expect("valid file name pattern"));

/// Replaces characters that are not safe in a file name
fn sanitize_file_name(file_name: &str) -> String {
    let cleaned = UNSAFE_FILE_NAME_CHARS.replace_all(file_name.trim(), "_");
    match cleaned.trim_matches('.') {
        "" => "document".to_string(),
        trimmed => trimmed.to_string(),
    }
}

/// Stores each document in its own uuid-named directory under `root`
pub struct FilesystemDocumentStore {
    root: PathBuf,
}

impl FilesystemDocumentStore {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    async fn canonical_root(&self) -> Result<PathBuf> {
        fs::create_dir_all(&self.root).await.map_err(|e| {
            OrderError::Store(format!(
                "Failed to create directory {}: {}",
                self.root.display(),
                e
            ))
        })?;
        Ok(fs::canonicalize(&self.root).await?)
    }
}

fn file_url(path: &Path) -> Result<Url> {
    Url::from_file_path(path)
        .map_err(|_| OrderError::Store(format!("{} is not an absolute path", path.display())))
}

#[async_trait]
impl DocumentUploader for FilesystemDocumentStore {
    async fn upload(
        &self,
        bytes: Vec<u8>,
        file_name: &str,
        media_type: &str,
    ) -> Result<DocumentReference> {
        let root = self.canonical_root().await?;
        let directory = root.join(Uuid::new_v4().to_string());
        fs::create_dir_all(&directory).await.map_err(|e| {
            OrderError::Store(format!(
                "Failed to create directory {}: {}",
                directory.display(),
                e
            ))
        })?;

        let file_name = sanitize_file_name(file_name);
        let path = directory.join(&file_name);

        let mut file = fs::File::create(&path).await.map_err(|e| {
            OrderError::Store(format!("Failed to create file {}: {}", path.display(), e))
        })?;
        file.write_all(&bytes).await.map_err(|e| {
            OrderError::Store(format!("Failed to write file {}: {}", path.display(), e))
        })?;
        file.flush().await.map_err(|e| {
            OrderError::Store(format!("Failed to flush file {}: {}", path.display(), e))
        })?;

        tracing::info!(path = %path.display(), media_type, bytes = bytes.len(), "Stored document");

        Ok(DocumentReference {
            url: file_url(&directory)?.to_string(),
            binary_url: file_url(&path)?.to_string(),
            filename: file_name,
        })
    }
}

#[async_trait]
impl DocumentDownloader for FilesystemDocumentStore {
    async fn download(&self, document: &DocumentReference) -> Result<Vec<u8>> {
        let url = Url::parse(&document.binary_url).map_err(|e| {
            OrderError::Store(format!("Invalid document URL {}: {}", document.binary_url, e))
        })?;
        let path = url
            .to_file_path()
            .map_err(|_| OrderError::Store(format!("{url} is not a file URL")))?;

        let root = self.canonical_root().await?;
        let path = fs::canonicalize(&path).await.map_err(|e| {
            OrderError::Store(format!("Document {} not found: {}", path.display(), e))
        })?;
        if !path.starts_with(&root) {
            return Err(OrderError::Store(format!(
                "{} is outside the document store",
                path.display()
            )));
        }

        Ok(fs::read(&path).await?)
    }
}
