//! Local-filesystem object sink.
//!
//! The development and staging backend: objects land at
//! `{root}/{bucket}/{key}`, with parent directories created on demand.

use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::sink::ObjectSink;

/// Sink that lays objects out under a local root directory.
pub struct FsObjectSink {
    root: PathBuf,
}

impl FsObjectSink {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ObjectSink for FsObjectSink {
    async fn put_object(&self, bucket: &str, key: &str, body: &[u8]) -> Result<(), StoreError> {
        let path = self.root.join(bucket).join(key);

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| StoreError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        tokio::fs::write(&path, body)
            .await
            .map_err(|source| StoreError::Io {
                path: path.clone(),
                source,
            })?;

        tracing::debug!(bucket, key, path = %path.display(), bytes = body.len(), "object written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(test_name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("chartlake-store-{}-{test_name}", std::process::id()))
    }

    #[tokio::test]
    async fn put_object_writes_bytes_under_bucket_and_key() {
        let root = scratch_dir("writes-bytes");
        let sink = FsObjectSink::new(&root);

        sink.put_object("bucket", "top100tracks/snapshot.json", b"[1,2,3]")
            .await
            .unwrap();

        let written = std::fs::read(root.join("bucket/top100tracks/snapshot.json")).unwrap();
        assert_eq!(written, b"[1,2,3]");

        std::fs::remove_dir_all(&root).ok();
    }

    #[tokio::test]
    async fn put_object_overwrites_existing_object() {
        let root = scratch_dir("overwrites");
        let sink = FsObjectSink::new(&root);

        sink.put_object("bucket", "key.json", b"old").await.unwrap();
        sink.put_object("bucket", "key.json", b"new").await.unwrap();

        let written = std::fs::read(root.join("bucket/key.json")).unwrap();
        assert_eq!(written, b"new");

        std::fs::remove_dir_all(&root).ok();
    }
}
