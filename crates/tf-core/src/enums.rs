//! Status enums, roles, and their display mappings for TaskFlow.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! Display lookups (`label`, `badge`, `icon`) are exhaustive matches, so adding a
//! variant forces every mapping to be updated.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// TaskStatus
// ---------------------------------------------------------------------------

/// Persisted status of a task, set only by explicit user action.
///
/// ```text
/// pending ⇄ in_progress → completed
/// pending ─────────────→ completed
/// completed → pending | in_progress (re-open)
/// ```
///
/// No linear order is enforced; every move between distinct statuses is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub const ALL: [Self; 3] = [Self::Pending, Self::InProgress, Self::Completed];

    #[must_use]
    #[allow(clippy::match_same_arms)]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Pending => &[Self::InProgress, Self::Completed],
            Self::InProgress => &[Self::Pending, Self::Completed],
            Self::Completed => &[Self::Pending, Self::InProgress],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn is_completed(self) -> bool {
        matches!(self, Self::Completed)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }

    /// Human label used in forms and detail views.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EffectiveStatus
// ---------------------------------------------------------------------------

/// Displayed task state, derived at read time and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EffectiveStatus {
    Pending,
    InProgress,
    CompletedOnTime,
    CompletedLate,
    Overdue,
}

impl EffectiveStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::CompletedOnTime => "completed_on_time",
            Self::CompletedLate => "completed_late",
            Self::Overdue => "overdue",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::CompletedOnTime => "Completed",
            Self::CompletedLate => "Completed Late",
            Self::Overdue => "Overdue",
        }
    }

    #[must_use]
    pub const fn badge(self) -> BadgeVariant {
        match self {
            Self::Pending => BadgeVariant::Outline,
            Self::InProgress => BadgeVariant::Secondary,
            Self::CompletedOnTime | Self::CompletedLate => BadgeVariant::Default,
            Self::Overdue => BadgeVariant::Destructive,
        }
    }

    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Pending => "clock",
            Self::InProgress => "play-circle",
            Self::CompletedOnTime | Self::CompletedLate => "check-circle",
            Self::Overdue => "alert-triangle",
        }
    }

    /// Dashboard bucket this status is counted in.
    #[must_use]
    pub const fn bucket(self) -> StatsBucket {
        match self {
            Self::Pending | Self::InProgress => StatsBucket::Pending,
            Self::CompletedOnTime => StatsBucket::CompletedOnTime,
            Self::CompletedLate => StatsBucket::CompletedLate,
            Self::Overdue => StatsBucket::Overdue,
        }
    }

    #[must_use]
    pub const fn is_overdue(self) -> bool {
        matches!(self, Self::Overdue)
    }
}

impl fmt::Display for EffectiveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// StatsBucket
// ---------------------------------------------------------------------------

/// The four dashboard buckets. Every effective status lands in exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum StatsBucket {
    CompletedOnTime,
    CompletedLate,
    /// Not completed and not overdue (stored pending or in progress).
    Pending,
    Overdue,
}

impl StatsBucket {
    /// Chart order.
    pub const ALL: [Self; 4] = [
        Self::CompletedOnTime,
        Self::CompletedLate,
        Self::Pending,
        Self::Overdue,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CompletedOnTime => "completed_on_time",
            Self::CompletedLate => "completed_late",
            Self::Pending => "pending",
            Self::Overdue => "overdue",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::CompletedOnTime => "Completed On Time",
            Self::CompletedLate => "Completed Late",
            Self::Pending => "Pending",
            Self::Overdue => "Overdue",
        }
    }
}

impl fmt::Display for StatsBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Role attached to a user identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Manager,
    Employee,
}

impl Role {
    pub const ALL: [Self; 3] = [Self::Admin, Self::Manager, Self::Employee];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Manager => "manager",
            Self::Employee => "employee",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Manager => "Manager",
            Self::Employee => "Employee",
        }
    }

    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Admin => "shield",
            Self::Manager => "briefcase",
            Self::Employee => "users",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// BadgeVariant
// ---------------------------------------------------------------------------

/// Visual weight of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum BadgeVariant {
    Default,
    Secondary,
    Destructive,
    Outline,
}
