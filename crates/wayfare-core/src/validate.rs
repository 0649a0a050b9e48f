//! Syntax validation for user-typed input fields.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("e-mail pattern is valid")
});

static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(https?://)?(www\.)?[A-Za-z0-9-]+(\.[A-Za-z]{2,})+(/\S*)?$")
        .expect("url pattern is valid")
});

/// True when the candidate looks like an e-mail address
/// (local part, `@`, domain, dot, tld-like suffix).
pub fn is_email(candidate: &str) -> bool {
    EMAIL_RE.is_match(candidate)
}

/// True when the candidate looks like a web URL. The scheme is optional.
pub fn is_url(candidate: &str) -> bool {
    URL_RE.is_match(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_accepts_plain_addresses() {
        assert!(is_email("ana@example.com"));
        assert!(is_email("first.last+tag@sub.example.co"));
    }

    #[test]
    fn test_email_rejects_malformed_addresses() {
        assert!(!is_email("not-an-email"));
        assert!(!is_email("missing@tld"));
        assert!(!is_email("@example.com"));
        assert!(!is_email("two words@example.com"));
    }

    #[test]
    fn test_url_accepts_common_forms() {
        assert!(is_url("https://example.com/path"));
        assert!(is_url("www.example.com"));
        assert!(is_url("example.com"));
    }

    #[test]
    fn test_url_rejects_malformed_links() {
        assert!(!is_url("not a url"));
        assert!(!is_url("http://"));
    }
}
