use anyhow::bail;
use tf_core::enums::TaskStatus;
use tf_db::updates::task::TaskUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::{parse_deadline, parse_enum};
use crate::commands::shared::rows::task_row;
use crate::context::AppContext;
use crate::output::output;

pub struct UpdateArgs<'a> {
    pub title: Option<&'a str>,
    /// `Some(None)` clears the description.
    pub description: Option<Option<&'a str>>,
    pub status: Option<&'a str>,
    pub deadline: Option<&'a str>,
}

pub async fn run(id: &str, args: UpdateArgs<'_>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut builder = TaskUpdateBuilder::new();
    if let Some(title) = args.title {
        builder = builder.title(title);
    }
    if let Some(description) = args.description {
        builder = builder.description(description.map(String::from));
    }
    if let Some(status) = args.status {
        builder = builder.status(parse_enum::<TaskStatus>(status, "status")?);
    }
    if let Some(deadline) = args.deadline {
        builder = builder.deadline(parse_deadline(deadline, *ctx.now().offset())?);
    }
    let update = builder.build();
    if update.is_empty() {
        bail!("nothing to update; pass --title, --description, --clear-description, --status, or --deadline");
    }

    let viewer = ctx.viewer().await?;
    let task = ctx.service.update_task(&viewer, id, update).await?;
    output(&task_row(task, &viewer, ctx).await?, flags.format)
}
