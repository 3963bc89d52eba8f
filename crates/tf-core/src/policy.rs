//! Access policy mirror.
//!
//! Decides which edit/delete affordances to show. This is not the security
//! boundary: the data layer re-checks ownership on every mutation.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Task;
use crate::enums::Role;

/// The acting user, passed explicitly to every policy and data call.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Viewer {
    pub user_id: String,
    pub role: Role,
}

impl Viewer {
    #[must_use]
    pub fn new(user_id: impl Into<String>, role: Role) -> Self {
        Self {
            user_id: user_id.into(),
            role,
        }
    }

    #[must_use]
    pub fn can_edit(&self, task: &Task) -> bool {
        can_edit(self.role, &self.user_id, &task.user_id)
    }

    #[must_use]
    pub fn can_delete(&self, task: &Task) -> bool {
        can_delete(self.role, &self.user_id, &task.user_id)
    }
}

/// Admins may edit anything; everyone may edit their own tasks.
#[must_use]
pub fn can_edit(viewer_role: Role, viewer_id: &str, task_owner_id: &str) -> bool {
    matches!(viewer_role, Role::Admin) || viewer_id == task_owner_id
}

/// Same rule as [`can_edit`].
#[must_use]
pub fn can_delete(viewer_role: Role, viewer_id: &str, task_owner_id: &str) -> bool {
    can_edit(viewer_role, viewer_id, task_owner_id)
}
