use chrono::{DateTime, FixedOffset, Utc};
use serde::de::DeserializeOwned;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Parse `--deadline` text in the acting user's offset.
pub fn parse_deadline(raw: &str, offset: FixedOffset) -> anyhow::Result<DateTime<Utc>> {
    Ok(tf_core::clock::parse_user_input("deadline", raw, offset)?)
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, TimeZone, Utc};
    use tf_core::enums::{Role, TaskStatus};

    use super::{parse_deadline, parse_enum};

    #[test]
    fn parses_snake_case_enum() {
        let status: TaskStatus = parse_enum("completed", "status").expect("status should parse");
        assert_eq!(status, TaskStatus::Completed);
    }

    #[test]
    fn parses_hyphenated_alias() {
        let status: TaskStatus = parse_enum("in-progress", "status").expect("status should parse");
        assert_eq!(status, TaskStatus::InProgress);
        let role: Role = parse_enum("Admin", "role").expect("role should parse");
        assert_eq!(role, Role::Admin);
    }

    #[test]
    fn overdue_is_not_a_stored_status() {
        let err = parse_enum::<TaskStatus>("overdue", "status").expect_err("should fail");
        assert!(err.to_string().contains("invalid status 'overdue'"));
    }

    #[test]
    fn bare_date_deadline_ends_that_day_in_offset() {
        let offset = FixedOffset::east_opt(2 * 3600).expect("offset");
        let deadline = parse_deadline("2024-03-10", offset).expect("deadline should parse");
        assert_eq!(deadline, Utc.with_ymd_and_hms(2024, 3, 10, 21, 59, 59).unwrap());
    }

    #[test]
    fn garbage_deadline_is_rejected() {
        let offset = FixedOffset::east_opt(0).expect("offset");
        assert!(parse_deadline("next week", offset).is_err());
    }
}
