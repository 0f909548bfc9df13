//! Ingestion pipeline orchestration.

use chartlake_chart::{build_snapshot, BillboardClient};
use chartlake_core::AppConfig;
use chartlake_store::{FsObjectSink, HttpObjectSink, ObjectSink};
use chrono::NaiveDate;

use crate::error::IngestError;

/// What one successful cycle produced.
#[derive(Debug, Clone)]
pub struct IngestSummary {
    pub date: NaiveDate,
    pub record_count: usize,
    pub object_key: String,
}

/// Run one fetch → normalize → serialize → store cycle for `date`.
///
/// 1. Fetch the ordered chart entries (bounded by the client's timeout).
/// 2. Shape them into the dated snapshot.
/// 3. Serialize the snapshot to a JSON array.
/// 4. Hand the bytes to the sink under the snapshot's deterministic key.
///
/// Strictly sequential; a failure at any step aborts the cycle before the
/// next step runs, so a fetch failure never reaches the sink.
///
/// # Errors
///
/// Returns [`IngestError`] naming the step that failed.
pub async fn run_chart_ingest<S: ObjectSink>(
    client: &BillboardClient,
    sink: &S,
    bucket: &str,
    date: NaiveDate,
) -> Result<IngestSummary, IngestError> {
    tracing::info!(%date, "ingest: fetching chart");
    let entries = client.fetch_chart(date).await?;
    tracing::info!(%date, count = entries.len(), "ingest: chart fetched");

    let snapshot = build_snapshot(date, entries);
    let object_key = snapshot.object_key();
    let body = snapshot.to_json_bytes()?;

    sink.put_object(bucket, &object_key, &body).await?;
    tracing::info!(%date, bucket, key = %object_key, "ingest: snapshot stored");

    Ok(IngestSummary {
        date,
        record_count: snapshot.len(),
        object_key,
    })
}

/// Build the chart client and the configured sink, then run one cycle.
///
/// Sink selection: a configured store endpoint selects the HTTP sink;
/// otherwise objects land under the local store root. This is the seam the
/// CLI and the scheduler share.
///
/// # Errors
///
/// Returns [`IngestError`] if a collaborator cannot be constructed or the
/// cycle fails.
pub async fn ingest_for_date(
    config: &AppConfig,
    date: NaiveDate,
) -> Result<IngestSummary, IngestError> {
    let client = BillboardClient::new(
        &config.chart_base_url,
        config.chart_timeout_secs,
        &config.chart_user_agent,
    )?;

    match &config.store_endpoint {
        Some(endpoint) => {
            let sink = HttpObjectSink::new(endpoint, config.store_token.as_deref())?;
            run_chart_ingest(&client, &sink, &config.store_bucket, date).await
        }
        None => {
            let sink = FsObjectSink::new(config.store_root.clone());
            run_chart_ingest(&client, &sink, &config.store_bucket, date).await
        }
    }
}
