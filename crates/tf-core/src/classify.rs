//! Task classifier: stored status + deadline + now → effective status.
//!
//! Every view that shows a task's state goes through [`classify`]; nothing
//! else decides whether a task is overdue.

use chrono::{DateTime, TimeZone};

use crate::clock::{is_past, is_same_day};
use crate::entities::{Task, TaskRecord};
use crate::enums::{EffectiveStatus, TaskStatus};
use crate::errors::CoreError;

/// Derive the effective status of `task` at `now`.
///
/// A deadline that falls on `now`'s calendar day is never overdue, whatever
/// the time of day.
///
/// # Errors
///
/// Returns `CoreError::InvalidTimestamp` if the task is completed but carries
/// no completion time.
pub fn classify<Tz: TimeZone>(task: &Task, now: &DateTime<Tz>) -> Result<EffectiveStatus, CoreError> {
    match task.status {
        TaskStatus::Completed => {
            let completed_at = task.completed_at.ok_or_else(|| {
                CoreError::invalid_timestamp(
                    "completed_at",
                    "",
                    format!("task {} is completed but has no completion time", task.id),
                )
            })?;
            if completed_at <= task.deadline {
                Ok(EffectiveStatus::CompletedOnTime)
            } else {
                Ok(EffectiveStatus::CompletedLate)
            }
        }
        TaskStatus::Pending | TaskStatus::InProgress
            if is_past(&task.deadline, now) && !is_same_day(&task.deadline, now) =>
        {
            Ok(EffectiveStatus::Overdue)
        }
        TaskStatus::InProgress => Ok(EffectiveStatus::InProgress),
        TaskStatus::Pending => Ok(EffectiveStatus::Pending),
    }
}

/// Classify a raw backend record, parsing its timestamps first.
///
/// # Errors
///
/// Returns `CoreError::InvalidTimestamp` if any timestamp cannot be parsed.
pub fn classify_record<Tz: TimeZone>(
    record: &TaskRecord,
    now: &DateTime<Tz>,
) -> Result<EffectiveStatus, CoreError> {
    let task = Task::try_from(record.clone())?;
    classify(&task, now)
}
