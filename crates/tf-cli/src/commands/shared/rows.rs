use std::collections::HashMap;

use tf_core::entities::{Profile, Task, TaskComment};
use tf_core::policy::Viewer;
use tf_core::responses::{CommentView, TaskRow};
use tf_db::error::DatabaseError;

use crate::context::AppContext;

/// Decorate tasks for `viewer`, looking up owner names in one query.
pub async fn task_rows(
    tasks: Vec<Task>,
    viewer: &Viewer,
    ctx: &AppContext,
) -> anyhow::Result<Vec<TaskRow>> {
    let owner_ids = distinct(tasks.iter().map(|t| t.user_id.clone()));
    let profiles = ctx.service.list_profiles_for(&owner_ids).await?;
    build_rows(tasks, &profiles, viewer, &ctx.now())
}

/// [`task_rows`] for a single task.
pub async fn task_row(task: Task, viewer: &Viewer, ctx: &AppContext) -> anyhow::Result<TaskRow> {
    let owner = profile_if_exists(ctx.service.get_profile(&task.user_id).await)?;
    Ok(TaskRow::build(task, owner.as_ref(), viewer, &ctx.now())?)
}

/// A missing profile is `None`; any other lookup failure is an error.
pub fn profile_if_exists(
    lookup: Result<Profile, DatabaseError>,
) -> Result<Option<Profile>, DatabaseError> {
    match lookup {
        Ok(profile) => Ok(Some(profile)),
        Err(DatabaseError::NoResult) => Ok(None),
        Err(error) => Err(error),
    }
}

/// Attach author names to comments. Authors without a profile show as unknown.
pub async fn comment_views(
    comments: Vec<TaskComment>,
    ctx: &AppContext,
) -> anyhow::Result<Vec<CommentView>> {
    let author_ids = distinct(comments.iter().map(|c| c.user_id.clone()));
    let authors = ctx.service.list_profiles_for(&author_ids).await?;
    Ok(comments
        .into_iter()
        .map(|comment| {
            let author = authors.iter().find(|p| p.user_id == comment.user_id);
            CommentView::new(comment, author)
        })
        .collect())
}

fn distinct(ids: impl Iterator<Item = String>) -> Vec<String> {
    let mut ids = ids.collect::<Vec<_>>();
    ids.sort();
    ids.dedup();
    ids
}

pub fn build_rows<Tz: chrono::TimeZone>(
    tasks: Vec<Task>,
    profiles: &[Profile],
    viewer: &Viewer,
    now: &chrono::DateTime<Tz>,
) -> anyhow::Result<Vec<TaskRow>> {
    let by_user = profiles
        .iter()
        .map(|p| (p.user_id.as_str(), p))
        .collect::<HashMap<_, _>>();
    tasks
        .into_iter()
        .map(|task| -> anyhow::Result<TaskRow> {
            let owner = by_user.get(task.user_id.as_str()).copied();
            Ok(TaskRow::build(task, owner, viewer, now)?)
        })
        .collect()
}
