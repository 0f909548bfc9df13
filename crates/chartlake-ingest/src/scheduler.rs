//! Recurring ingestion scheduler.
//!
//! Registers one cron job that ingests "today's" chart. Job failures are
//! logged and the scheduler keeps running; the next firing gets a fresh
//! attempt with a fresh working set.

use std::sync::Arc;

use chartlake_core::AppConfig;
use chrono::Utc;
use tokio_cron_scheduler::{Job, JobScheduler, JobSchedulerError};

use crate::pipeline::ingest_for_date;

/// Builds and starts the scheduler with the recurring ingest job.
///
/// Returns the running [`JobScheduler`] handle, which must be kept alive
/// for the lifetime of the process — dropping it shuts down the job.
///
/// # Errors
///
/// Returns [`JobSchedulerError`] if the scheduler cannot be initialised,
/// the cron expression is invalid, or the scheduler fails to start.
pub async fn build_scheduler(config: Arc<AppConfig>) -> Result<JobScheduler, JobSchedulerError> {
    let scheduler = JobScheduler::new().await?;

    let schedule = config.ingest_schedule.clone();
    let job = Job::new_async(schedule.as_str(), move |_uuid, _lock| {
        let config = Arc::clone(&config);
        Box::pin(async move {
            run_scheduled_ingest(&config).await;
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;
    Ok(scheduler)
}

/// Drive one scheduled cycle for today's date (UTC).
async fn run_scheduled_ingest(config: &AppConfig) {
    let date = Utc::now().date_naive();
    tracing::info!(%date, "scheduler: starting chart ingest");

    match ingest_for_date(config, date).await {
        Ok(summary) => {
            tracing::info!(
                %date,
                records = summary.record_count,
                key = %summary.object_key,
                "scheduler: chart ingest complete"
            );
        }
        Err(e) => {
            tracing::error!(%date, error = %e, "scheduler: chart ingest failed");
        }
    }
}
