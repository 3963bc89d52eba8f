//! Statistics aggregator behind the dashboard.
//!
//! Counts come from [`classify`](crate::classify::classify), so the dashboard
//! and the task list always agree on which tasks are overdue.

use chrono::{DateTime, TimeZone};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::classify::classify;
use crate::entities::{Task, TaskRecord};
use crate::enums::StatsBucket;
use crate::errors::CoreError;

/// Raw completion statistics. All four buckets are always present.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Summary {
    pub total: u64,
    pub completed_on_time: u64,
    pub completed_late: u64,
    /// Not completed and not overdue: stored pending or in progress.
    #[serde(rename = "pending_or_in_progress")]
    pub pending: u64,
    pub overdue: u64,
    /// `(completed_on_time + completed_late) / total`, or 0 for no tasks.
    pub completion_rate: f64,
}

/// One non-empty chart segment.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ChartSlice {
    pub bucket: StatsBucket,
    pub label: String,
    pub value: u64,
}

impl Summary {
    #[must_use]
    pub const fn count(&self, bucket: StatsBucket) -> u64 {
        match bucket {
            StatsBucket::CompletedOnTime => self.completed_on_time,
            StatsBucket::CompletedLate => self.completed_late,
            StatsBucket::Pending => self.pending,
            StatsBucket::Overdue => self.overdue,
        }
    }

    #[must_use]
    pub const fn completed(&self) -> u64 {
        self.completed_on_time + self.completed_late
    }

    /// Completion rate as a whole percentage, rounded half away from zero.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn completion_percent(&self) -> u8 {
        (self.completion_rate * 100.0).round().clamp(0.0, 100.0) as u8
    }

    /// Chart-ready segments in fixed order, skipping empty buckets.
    #[must_use]
    pub fn chart_slices(&self) -> Vec<ChartSlice> {
        StatsBucket::ALL
            .into_iter()
            .filter_map(|bucket| {
                let value = self.count(bucket);
                (value > 0).then(|| ChartSlice {
                    bucket,
                    label: bucket.label().to_string(),
                    value,
                })
            })
            .collect()
    }

    fn record(&mut self, bucket: StatsBucket) {
        self.total += 1;
        match bucket {
            StatsBucket::CompletedOnTime => self.completed_on_time += 1,
            StatsBucket::CompletedLate => self.completed_late += 1,
            StatsBucket::Pending => self.pending += 1,
            StatsBucket::Overdue => self.overdue += 1,
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn finish(mut self) -> Self {
        self.completion_rate = if self.total == 0 {
            0.0
        } else {
            self.completed() as f64 / self.total as f64
        };
        self
    }
}

/// Classify every task at `now` and count them into buckets.
///
/// The result depends only on the multiset of tasks and `now`.
///
/// # Errors
///
/// Returns the first classification error; a partial summary is never produced.
pub fn summarize<'a, Tz, I>(tasks: I, now: &DateTime<Tz>) -> Result<Summary, CoreError>
where
    Tz: TimeZone,
    I: IntoIterator<Item = &'a Task>,
{
    let mut summary = Summary::default();
    for task in tasks {
        summary.record(classify(task, now)?.bucket());
    }
    Ok(summary.finish())
}

/// [`summarize`] over raw backend records.
///
/// # Errors
///
/// Returns `CoreError::InvalidTimestamp` if any record has unparseable timestamps.
pub fn summarize_records<Tz: TimeZone>(
    records: &[TaskRecord],
    now: &DateTime<Tz>,
) -> Result<Summary, CoreError> {
    let tasks = records
        .iter()
        .cloned()
        .map(Task::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    summarize(&tasks, now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::TaskStatus;
    use chrono::{FixedOffset, Utc};
    use pretty_assertions::assert_eq;

    fn utc(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    fn now() -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339("2024-01-10T12:00:00Z").unwrap()
    }

    fn task(id: &str, status: TaskStatus, deadline: &str, completed_at: Option<&str>) -> Task {
        Task {
            id: id.into(),
            user_id: "usr-0000000b".into(),
            title: id.into(),
            description: None,
            status,
            deadline: utc(deadline),
            completed_at: completed_at.map(utc),
            created_at: utc("2024-01-01T00:00:00Z"),
            updated_at: utc("2024-01-01T00:00:00Z"),
        }
    }

    fn sample() -> Vec<Task> {
        vec![
            task("on-time", TaskStatus::Completed, "2024-01-10T09:00:00Z", Some("2024-01-09T10:00:00Z")),
            task("late", TaskStatus::Completed, "2024-01-05T09:00:00Z", Some("2024-01-06T10:00:00Z")),
            task("today", TaskStatus::Pending, "2024-01-10T08:00:00Z", None),
            task("future", TaskStatus::InProgress, "2024-01-20T08:00:00Z", None),
            task("overdue", TaskStatus::Pending, "2024-01-08T08:00:00Z", None),
        ]
    }

    #[test]
    fn empty_input_has_zero_rate() {
        let summary = summarize(&Vec::<Task>::new(), &now()).unwrap();
        assert_eq!(summary.total, 0);
        assert!(summary.completion_rate.abs() < f64::EPSILON);
        assert_eq!(summary.completion_percent(), 0);
        assert!(summary.chart_slices().is_empty());
    }

    #[test]
    fn buckets_are_counted() {
        let summary = summarize(&sample(), &now()).unwrap();
        assert_eq!(summary.total, 5);
        assert_eq!(summary.completed_on_time, 1);
        assert_eq!(summary.completed_late, 1);
        assert_eq!(summary.pending, 2);
        assert_eq!(summary.overdue, 1);
        assert_eq!(summary.completed(), 2);
        assert!((summary.completion_rate - 0.4).abs() < 1e-9);
        assert_eq!(summary.completion_percent(), 40);
    }

    #[test]
    fn chart_skips_empty_buckets_in_fixed_order() {
        let tasks = vec![
            task("overdue", TaskStatus::Pending, "2024-01-08T08:00:00Z", None),
            task("on-time", TaskStatus::Completed, "2024-01-10T09:00:00Z", Some("2024-01-09T10:00:00Z")),
        ];
        let summary = summarize(&tasks, &now()).unwrap();
        let slices = summary.chart_slices();
        assert_eq!(
            slices,
            vec![
                ChartSlice {
                    bucket: StatsBucket::CompletedOnTime,
                    label: "Completed On Time".into(),
                    value: 1,
                },
                ChartSlice {
                    bucket: StatsBucket::Overdue,
                    label: "Overdue".into(),
                    value: 1,
                },
            ]
        );
        assert_eq!(summary.completed_late, 0);
        assert_eq!(summary.pending, 0);
    }

    #[test]
    fn open_bucket_serializes_as_pending_or_in_progress() {
        let summary = summarize(&sample(), &now()).unwrap();
        let json = serde_json::to_value(summary).unwrap();
        assert_eq!(json["pending_or_in_progress"], 2);
        assert!(json.get("pending").is_none());
        let back: Summary = serde_json::from_value(json).unwrap();
        assert_eq!(back.pending, 2);
    }

    #[test]
    fn one_bad_task_fails_the_summary() {
        let mut tasks = sample();
        tasks.push(task("broken", TaskStatus::Completed, "2024-01-10T09:00:00Z", None));
        assert!(matches!(
            summarize(&tasks, &now()),
            Err(CoreError::InvalidTimestamp { .. })
        ));
    }

    #[test]
    fn records_are_parsed_before_counting() {
        let records: Vec<TaskRecord> = sample().into_iter().map(TaskRecord::from).collect();
        let from_records = summarize_records(&records, &now()).unwrap();
        let from_tasks = summarize(&sample(), &now()).unwrap();
        assert_eq!(from_records, from_tasks);
    }

    #[test]
    fn percent_rounds_half_up() {
        let tasks = vec![
            task("a", TaskStatus::Completed, "2024-01-10T09:00:00Z", Some("2024-01-09T10:00:00Z")),
            task("b", TaskStatus::Pending, "2024-01-20T09:00:00Z", None),
            task("c", TaskStatus::Pending, "2024-01-20T09:00:00Z", None),
        ];
        let summary = summarize(&tasks, &now()).unwrap();
        assert_eq!(summary.completion_percent(), 33);
    }
}
