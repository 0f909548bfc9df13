//! The storage-sink seam the pipeline writes through.

use std::future::Future;

use crate::error::StoreError;

/// Destination for serialized snapshots.
///
/// Explicitly constructed by the caller and passed into the pipeline, so a
/// test can substitute a recording fake. One snapshot is one `put_object`
/// call — writes are all-or-nothing from the caller's perspective.
pub trait ObjectSink {
    /// Stores `body` under `key` within `bucket`. Overwrites any existing
    /// object at that key.
    fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: &[u8],
    ) -> impl Future<Output = Result<(), StoreError>> + Send;
}
