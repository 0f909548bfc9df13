use chartlake_chart::ChartError;
use chartlake_store::StoreError;
use thiserror::Error;

/// Terminal failure signal for one ingestion cycle.
///
/// One failure at any step aborts the cycle; nothing is retried and no
/// partial snapshot is ever persisted.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The chart source was unreachable, timed out, or returned a page
    /// no entries could be extracted from.
    #[error("failed to get chart data: {0}")]
    Fetch(#[from] ChartError),

    /// The snapshot could not be serialized.
    #[error("failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The sink rejected the write.
    #[error("failed to store snapshot: {0}")]
    Store(#[from] StoreError),
}
