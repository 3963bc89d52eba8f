use chrono::{Duration, Utc};
use tf_core::enums::TaskStatus;
use tf_db::repos::task::NewTask;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::{parse_deadline, parse_enum};
use crate::commands::shared::rows::task_row;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    title: &str,
    description: Option<&str>,
    status: Option<&str>,
    deadline: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let viewer = ctx.viewer().await?;
    let now = ctx.now();
    let deadline = match deadline {
        Some(raw) => parse_deadline(raw, *now.offset())?,
        None => {
            now.with_timezone(&Utc) + Duration::days(i64::from(ctx.config.general.default_deadline_days))
        }
    };

    let mut new = NewTask::new(title, deadline);
    new.description = description.map(String::from);
    new.status = status
        .map(|value| parse_enum::<TaskStatus>(value, "status"))
        .transpose()?
        .unwrap_or(TaskStatus::Pending);

    let task = ctx.service.create_task(&viewer, new).await?;
    output(&task_row(task, &viewer, ctx).await?, flags.format)
}
