use std::path::PathBuf;

#[derive(Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub chart_base_url: String,
    pub chart_timeout_secs: u64,
    pub chart_user_agent: String,
    pub store_bucket: String,
    pub store_endpoint: Option<String>,
    pub store_token: Option<String>,
    pub store_root: PathBuf,
    pub ingest_schedule: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("log_level", &self.log_level)
            .field("chart_base_url", &self.chart_base_url)
            .field("chart_timeout_secs", &self.chart_timeout_secs)
            .field("chart_user_agent", &self.chart_user_agent)
            .field("store_bucket", &self.store_bucket)
            .field("store_endpoint", &self.store_endpoint)
            .field(
                "store_token",
                &self.store_token.as_ref().map(|_| "[redacted]"),
            )
            .field("store_root", &self.store_root)
            .field("ingest_schedule", &self.ingest_schedule)
            .finish()
    }
}
