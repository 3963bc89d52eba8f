use tf_core::responses::CommentView;

use crate::cli::GlobalFlags;
use crate::commands::shared::rows::profile_if_exists;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(task_id: &str, content: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let viewer = ctx.viewer().await?;
    let comment = ctx.service.add_comment(&viewer, task_id, content).await?;
    let author = profile_if_exists(ctx.service.get_profile(&viewer.user_id).await)?;
    output(&CommentView::new(comment, author.as_ref()), flags.format)
}
