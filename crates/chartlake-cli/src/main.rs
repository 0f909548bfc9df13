use std::sync::Arc;

use anyhow::Context;
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "chartlake")]
#[command(about = "Billboard chart ingestion into the data lake")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run one fetch-transform-store cycle.
    Ingest {
        /// Chart date as YYYY-MM-DD; defaults to today (UTC).
        #[arg(long)]
        date: Option<String>,
    },
    /// Run the recurring ingestion scheduler until interrupted.
    Schedule,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = chartlake_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Ingest { date } => {
            let date = match date {
                Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
                    .with_context(|| format!("invalid date \"{raw}\", expected YYYY-MM-DD"))?,
                None => Utc::now().date_naive(),
            };
            let summary = chartlake_ingest::ingest_for_date(&config, date).await?;
            println!(
                "stored {} records for {} at {}",
                summary.record_count, summary.date, summary.object_key
            );
        }
        Commands::Schedule => {
            let mut scheduler = chartlake_ingest::build_scheduler(Arc::new(config)).await?;
            tracing::info!("scheduler started; press ctrl-c to stop");
            shutdown_signal().await;
            scheduler.shutdown().await?;
        }
    }

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, stopping scheduler");
}
