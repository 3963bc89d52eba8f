use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, FixedOffset};
use tf_config::TaskflowConfig;
use tf_core::clock::{Clock, SystemClock};
use tf_core::entities::TaskRecord;
use tf_core::responses::DashboardResponse;
use tf_core::stats::{summarize, summarize_records};
use tf_db::repos::task::TaskFilter;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `tfl stats` against the project database.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let tasks = ctx.service.list_tasks(&TaskFilter::default()).await?;
    let now = ctx.now();
    let summary = summarize(&tasks, &now)?;
    tracing::debug!(total = summary.total, "dashboard summarized");
    output(&DashboardResponse::from(summary), flags.format)
}

/// Handle `tfl stats --input FILE`: summarize task records from a JSON file.
pub async fn handle_file(path: &str, flags: &GlobalFlags) -> anyhow::Result<()> {
    let config = TaskflowConfig::load().context("failed to load TaskFlow configuration")?;
    let now = SystemClock::new(config.general.offset()?).now();
    let response = dashboard_from_file(Path::new(path), &now).await?;
    output(&response, flags.format)
}

async fn dashboard_from_file(path: &Path, now: &DateTime<FixedOffset>) -> anyhow::Result<DashboardResponse> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    let records: Vec<TaskRecord> = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a JSON array of task records", path.display()))?;
    let summary = summarize_records(&records, now)?;
    Ok(DashboardResponse::from(summary))
}
