/// Longest user-agent string persisted with a submission
pub const MAX_USER_AGENT_LEN: usize = 512;

/// Picks the effective user agent for a submission: the payload value when
/// non-empty, otherwise the request's `User-Agent` header. The result is
/// truncated to [`MAX_USER_AGENT_LEN`] characters.
pub fn resolve(payload: Option<&str>, header: Option<&str>) -> Option<String> {
    payload
        .filter(|value| !value.is_empty())
        .or(header)
        .map(truncate)
}

fn truncate(value: &str) -> String {
    match value.char_indices().nth(MAX_USER_AGENT_LEN) {
        Some((boundary, _)) => value[..boundary].to_owned(),
        None => value.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_the_payload_value() {
        assert_eq!(
            resolve(Some("payload-agent"), Some("header-agent")).as_deref(),
            Some("payload-agent")
        );
    }

    #[test]
    fn falls_back_to_the_header() {
        assert_eq!(
            resolve(None, Some("header-agent")).as_deref(),
            Some("header-agent")
        );
    }

    #[test]
    fn empty_payload_value_counts_as_absent() {
        assert_eq!(
            resolve(Some(""), Some("header-agent")).as_deref(),
            Some("header-agent")
        );
    }

    #[test]
    fn absent_everywhere_stays_absent() {
        assert_eq!(resolve(None, None), None);
    }

    #[test]
    fn truncates_to_the_persisted_limit() {
        let long = "a".repeat(MAX_USER_AGENT_LEN + 40);
        let resolved = resolve(Some(&long), None).unwrap();
        assert_eq!(resolved.chars().count(), MAX_USER_AGENT_LEN);
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let long = "é".repeat(MAX_USER_AGENT_LEN + 1);
        let resolved = resolve(Some(&long), None).unwrap();
        assert_eq!(resolved.chars().count(), MAX_USER_AGENT_LEN);
    }
}
