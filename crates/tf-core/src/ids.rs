//! ID prefix constants.
//!
//! IDs are `<prefix>-<8 hex chars>`, generated by the database layer.

pub const PREFIX_TASK: &str = "tsk";
pub const PREFIX_USER: &str = "usr";
pub const PREFIX_PROFILE: &str = "prf";
pub const PREFIX_ROLE: &str = "rol";
pub const PREFIX_ATTACHMENT: &str = "att";
pub const PREFIX_COMMENT: &str = "cmt";

/// Return the prefix portion of an ID, if it has one.
#[must_use]
pub fn prefix_of(id: &str) -> Option<&str> {
    id.split_once('-').map(|(prefix, _)| prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_of_extracts_prefix() {
        assert_eq!(prefix_of("tsk-a3f8b2c1"), Some(PREFIX_TASK));
        assert_eq!(prefix_of("nodash"), None);
    }
}
