/// Compute effective limit with precedence: local arg -> global flag -> config default.
#[must_use]
pub fn effective_limit(local: Option<u32>, global: Option<u32>, fallback: u32) -> u32 {
    local.or(global).unwrap_or(fallback)
}

/// Limit to push down into the query. `None` when rows are filtered after
/// loading (e.g. on a derived status), so the cut must happen afterwards.
#[must_use]
pub const fn query_limit(limit: u32, filtered_after_load: bool) -> Option<u32> {
    if filtered_after_load { None } else { Some(limit) }
}

#[cfg(test)]
mod tests {
    use super::{effective_limit, query_limit};

    #[test]
    fn local_takes_precedence() {
        assert_eq!(effective_limit(Some(5), Some(10), 20), 5);
    }

    #[test]
    fn global_used_when_local_missing() {
        assert_eq!(effective_limit(None, Some(10), 20), 10);
    }

    #[test]
    fn config_default_used_when_none_set() {
        assert_eq!(effective_limit(None, None, 20), 20);
    }

    #[test]
    fn post_filtered_queries_load_everything() {
        assert_eq!(query_limit(20, false), Some(20));
        assert_eq!(query_limit(20, true), None);
    }
}
