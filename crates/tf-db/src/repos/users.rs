//! Users repository: profiles and their single role.

use chrono::Utc;

use tf_core::entities::Profile;
use tf_core::enums::Role;
use tf_core::errors::CoreError;
use tf_core::ids::{PREFIX_PROFILE, PREFIX_ROLE, PREFIX_USER};
use tf_core::policy::Viewer;

use crate::error::DatabaseError;
use crate::helpers::{collect_rows, fmt_ts, get_opt_string, parse_datetime, parse_enum};
use crate::service::TaskflowService;

const PROFILE_COLS: &str = "id, user_id, full_name, avatar_url, created_at";

fn row_to_profile(row: &libsql::Row) -> Result<Profile, DatabaseError> {
    Ok(Profile {
        id: row.get(0)?,
        user_id: row.get(1)?,
        full_name: row.get(2)?,
        avatar_url: get_opt_string(row, 3)?,
        created_at: parse_datetime("created_at", &row.get::<String>(4)?)?,
    })
}

impl TaskflowService {
    /// Register a user: a profile plus its role, in one transaction.
    pub async fn create_user(&self, full_name: &str, role: Role) -> Result<Profile, DatabaseError> {
        let full_name = full_name.trim();
        if full_name.is_empty() {
            return Err(CoreError::Validation("Please enter a full name".into()).into());
        }

        let user_id = self.db().generate_id(PREFIX_USER).await?;
        let profile_id = self.db().generate_id(PREFIX_PROFILE).await?;
        let role_id = self.db().generate_id(PREFIX_ROLE).await?;
        let now = fmt_ts(&Utc::now());

        let tx = self.db().conn().transaction().await?;
        tx.execute(
            &format!("INSERT INTO profiles ({PROFILE_COLS}) VALUES (?1, ?2, ?3, NULL, ?4)"),
            libsql::params![profile_id.as_str(), user_id.as_str(), full_name, now.as_str()],
        )
        .await?;
        tx.execute(
            "INSERT INTO user_roles (id, user_id, role) VALUES (?1, ?2, ?3)",
            libsql::params![role_id.as_str(), user_id.as_str(), role.as_str()],
        )
        .await?;
        tx.commit().await?;

        tracing::debug!(%user_id, role = role.as_str(), "user created");
        self.get_profile(&user_id).await
    }

    pub async fn get_profile(&self, user_id: &str) -> Result<Profile, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {PROFILE_COLS} FROM profiles WHERE user_id = ?1"),
                [user_id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_profile(&row)
    }

    pub async fn list_profiles(&self) -> Result<Vec<Profile>, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {PROFILE_COLS} FROM profiles ORDER BY full_name, created_at"),
                (),
            )
            .await?;
        collect_rows(rows, row_to_profile).await
    }

    /// Profiles for the given user IDs. Unknown IDs are skipped.
    pub async fn list_profiles_for(&self, user_ids: &[String]) -> Result<Vec<Profile>, DatabaseError> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }
        let placeholders = (1..=user_ids.len())
            .map(|i| format!("?{i}"))
            .collect::<Vec<_>>()
            .join(", ");
        let rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {PROFILE_COLS} FROM profiles WHERE user_id IN ({placeholders}) \
                     ORDER BY full_name"
                ),
                libsql::params_from_iter(user_ids.iter().map(String::as_str)),
            )
            .await?;
        collect_rows(rows, row_to_profile).await
    }

    /// The user's role, or `None` if no role row exists.
    pub async fn get_role(&self, user_id: &str) -> Result<Option<Role>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query("SELECT role FROM user_roles WHERE user_id = ?1", [user_id])
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(parse_enum(&row.get::<String>(0)?)?)),
            None => Ok(None),
        }
    }

    /// Change a user's role. Admins only.
    pub async fn set_role(
        &self,
        viewer: &Viewer,
        user_id: &str,
        role: Role,
    ) -> Result<(), DatabaseError> {
        if self.get_role(&viewer.user_id).await? != Some(Role::Admin) {
            return Err(DatabaseError::Forbidden(format!(
                "{} may not change roles",
                viewer.user_id
            )));
        }
        self.get_profile(user_id).await?;

        let role_id = self.db().generate_id(PREFIX_ROLE).await?;
        self.db()
            .conn()
            .execute(
                "INSERT INTO user_roles (id, user_id, role) VALUES (?1, ?2, ?3) \
                 ON CONFLICT(user_id) DO UPDATE SET role = excluded.role",
                libsql::params![role_id.as_str(), user_id, role.as_str()],
            )
            .await?;
        tracing::debug!(%user_id, role = role.as_str(), by = %viewer.user_id, "role changed");
        Ok(())
    }

    /// Resolve the acting user. A user without a role row acts as an employee.
    ///
    /// # Errors
    ///
    /// `InvalidState` if no profile exists for `user_id`.
    pub async fn viewer_for(&self, user_id: &str) -> Result<Viewer, DatabaseError> {
        match self.get_profile(user_id).await {
            Ok(_) => {}
            Err(DatabaseError::NoResult) => {
                return Err(DatabaseError::InvalidState(format!("unknown user {user_id}")));
            }
            Err(e) => return Err(e),
        }
        let role = self.get_role(user_id).await?.unwrap_or(Role::Employee);
        Ok(Viewer::new(user_id, role))
    }
}
