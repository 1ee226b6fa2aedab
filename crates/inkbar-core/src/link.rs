//! Link target normalization for the create-link control.

/// Prefix added to link targets that don't mention a scheme.
pub const LINK_PREFIX: &str = "http://";

/// Turn prompt input into a link target.
///
/// Input containing `http` anywhere (any case) is kept verbatim; anything else
/// gets `http://` prepended. A cancelled prompt (`None`) counts as empty input
/// and yields the bare prefix.
pub fn normalize_link(input: Option<&str>) -> String {
    let input = input.unwrap_or_default();
    if contains_http(input) {
        input.to_string()
    } else {
        format!("{LINK_PREFIX}{input}")
    }
}

fn contains_http(s: &str) -> bool {
    s.as_bytes()
        .windows(4)
        .any(|w| w.eq_ignore_ascii_case(b"http"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_host_gets_prefix() {
        assert_eq!(normalize_link(Some("example.com")), "http://example.com");
    }

    #[test]
    fn test_http_kept() {
        assert_eq!(
            normalize_link(Some("http://example.com")),
            "http://example.com"
        );
    }

    #[test]
    fn test_match_is_case_insensitive() {
        assert_eq!(normalize_link(Some("HTTPS://x.com")), "HTTPS://x.com");
        assert_eq!(normalize_link(Some("hTtP://x.com")), "hTtP://x.com");
    }

    #[test]
    fn test_http_anywhere_counts() {
        // Not just a scheme check.
        assert_eq!(
            normalize_link(Some("example.com/http-docs")),
            "example.com/http-docs"
        );
    }

    #[test]
    fn test_cancel_and_empty_yield_prefix() {
        assert_eq!(normalize_link(None), "http://");
        assert_eq!(normalize_link(Some("")), "http://");
    }

    #[test]
    fn test_non_ascii_input() {
        assert_eq!(normalize_link(Some("bücher.de")), "http://bücher.de");
    }
}
