use tf_core::enums::TaskStatus;
use tf_core::responses::TaskRow;
use tf_db::repos::task::TaskFilter;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::{effective_limit, query_limit};
use crate::commands::shared::parse::parse_enum;
use crate::commands::shared::rows::task_rows;
use crate::context::AppContext;
use crate::output::output;

pub struct ListArgs<'a> {
    pub mine: bool,
    pub status: Option<&'a str>,
    pub overdue: bool,
    pub search: Option<&'a str>,
    pub limit: Option<u32>,
}

pub async fn run(args: ListArgs<'_>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let viewer = ctx.viewer().await?;
    let limit = effective_limit(args.limit, flags.limit, ctx.config.general.default_limit);

    let filter = TaskFilter {
        owner: args.mine.then(|| viewer.user_id.clone()),
        status: args
            .status
            .map(|value| parse_enum::<TaskStatus>(value, "status"))
            .transpose()?,
        search: args.search.map(String::from),
        limit: query_limit(limit, args.overdue),
    };
    let tasks = ctx.service.list_tasks(&filter).await?;
    let mut rows = task_rows(tasks, &viewer, ctx).await?;
    retain_overdue(&mut rows, args.overdue);
    rows.truncate(usize::try_from(limit)?);

    output(&rows, flags.format)
}

fn retain_overdue(rows: &mut Vec<TaskRow>, overdue_only: bool) {
    if overdue_only {
        rows.retain(|row| row.effective_status.is_overdue());
    }
}
