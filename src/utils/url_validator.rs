//! Long URL validation with a loopback SSRF guard.
//!
//! The input is checked but never rewritten: the caller's string is what gets
//! stored, so trailing slashes, casing and query order are preserved.

use crate::domain::error::ShortenError;
use url::Url;

/// Validates a candidate long URL.
///
/// # Rules
///
/// 1. Must not contain whitespace or ASCII control characters
/// 2. Must parse as an absolute URL
/// 3. Scheme must be `http` or `https`
/// 4. Host must not be `localhost` (with or without a trailing dot) or start
///    with `127.0.0.1`
///
/// The host check only covers loopback targets; private network ranges are
/// not rejected.
///
/// # Errors
///
/// - [`ShortenError::MalformedUrl`] for inputs that do not parse or carry
///   characters the parser would silently strip
/// - [`ShortenError::UnsupportedScheme`] for non-HTTP(S) schemes
/// - [`ShortenError::DisallowedHost`] for loopback hosts
///
/// # Examples
///
/// ```ignore
/// assert!(validate_url("https://example.com/page").is_ok());
/// assert!(validate_url("ftp://example.com").is_err());
/// assert!(validate_url("http://localhost:8080").is_err());
/// ```
pub fn validate_url(candidate: &str) -> Result<(), ShortenError> {
    // The parser drops tabs and newlines and trims spaces, but the stored
    // string is used verbatim as a `Location` header.
    if candidate
        .chars()
        .any(|c| c.is_ascii_control() || c.is_ascii_whitespace())
    {
        return Err(ShortenError::MalformedUrl(
            "URL must not contain whitespace or control characters".to_string(),
        ));
    }

    let url = Url::parse(candidate)?;

    match url.scheme() {
        "http" | "https" => {}
        other => return Err(ShortenError::UnsupportedScheme(other.to_string())),
    }

    let host = url.host_str().unwrap_or_default();
    if host.trim_end_matches('.').eq_ignore_ascii_case("localhost")
        || host.starts_with("127.0.0.1")
    {
        return Err(ShortenError::DisallowedHost(host.to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_http_url() {
        assert!(validate_url("http://example.com").is_ok());
    }

    #[test]
    fn test_validate_https_url_with_path_and_query() {
        assert!(validate_url("https://example.com/page?b=2&a=1#frag").is_ok());
    }

    #[test]
    fn test_validate_custom_port() {
        assert!(validate_url("https://example.com:8443/path").is_ok());
    }

    #[test]
    fn test_validate_public_ip() {
        assert!(validate_url("http://93.184.216.34/").is_ok());
    }

    #[test]
    fn test_validate_private_ip_is_allowed() {
        assert!(validate_url("http://10.0.0.1/").is_ok());
    }

    #[test]
    fn test_validate_host_containing_localhost_word() {
        assert!(validate_url("https://notlocalhost.com").is_ok());
    }

    #[test]
    fn test_reject_not_a_url() {
        let result = validate_url("not a url");
        assert!(matches!(result, Err(ShortenError::MalformedUrl(_))));
    }

    #[test]
    fn test_reject_relative_path() {
        let result = validate_url("/relative/path");
        assert!(matches!(result, Err(ShortenError::MalformedUrl(_))));
    }

    #[test]
    fn test_reject_empty_host() {
        let result = validate_url("http://");
        assert!(matches!(result, Err(ShortenError::MalformedUrl(_))));
    }

    #[test]
    fn test_reject_empty_string() {
        let result = validate_url("");
        assert!(matches!(result, Err(ShortenError::MalformedUrl(_))));
    }

    #[test]
    fn test_reject_embedded_newline() {
        let result = validate_url("https://example.com/a\nb");
        assert!(matches!(result, Err(ShortenError::MalformedUrl(_))));
    }

    #[test]
    fn test_reject_embedded_tab_and_carriage_return() {
        for url in ["https://example.com/a\tb", "https://example.com/a\rb"] {
            let result = validate_url(url);
            assert!(
                matches!(result, Err(ShortenError::MalformedUrl(_))),
                "{url:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_reject_surrounding_spaces() {
        for url in [" https://example.com", "https://example.com ", "https://exa mple.com"] {
            let result = validate_url(url);
            assert!(
                matches!(result, Err(ShortenError::MalformedUrl(_))),
                "{url:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_reject_ftp_scheme() {
        let result = validate_url("ftp://example.com");
        assert!(matches!(result, Err(ShortenError::UnsupportedScheme(s)) if s == "ftp"));
    }

    #[test]
    fn test_reject_dangerous_schemes() {
        for url in [
            "javascript:alert(1)",
            "data:text/html,<b>hi</b>",
            "file:///etc/passwd",
            "mailto:user@example.com",
        ] {
            let result = validate_url(url);
            assert!(
                matches!(result, Err(ShortenError::UnsupportedScheme(_))),
                "{url} should be rejected"
            );
        }
    }

    #[test]
    fn test_reject_localhost() {
        let result = validate_url("http://localhost");
        assert!(matches!(result, Err(ShortenError::DisallowedHost(h)) if h == "localhost"));
    }

    #[test]
    fn test_reject_localhost_any_case_and_port() {
        let result = validate_url("https://LocalHost:8080/admin");
        assert!(matches!(result, Err(ShortenError::DisallowedHost(_))));
    }

    #[test]
    fn test_reject_localhost_trailing_dot() {
        let result = validate_url("http://localhost./admin");
        assert!(matches!(result, Err(ShortenError::DisallowedHost(_))));
    }

    #[test]
    fn test_reject_loopback_ip() {
        let result = validate_url("http://127.0.0.1");
        assert!(matches!(result, Err(ShortenError::DisallowedHost(h)) if h == "127.0.0.1"));
    }

    #[test]
    fn test_reject_loopback_ip_with_port() {
        let result = validate_url("http://127.0.0.1:3000/internal");
        assert!(matches!(result, Err(ShortenError::DisallowedHost(_))));
    }

    #[test]
    fn test_reject_host_starting_with_loopback_ip() {
        let result = validate_url("http://127.0.0.1.nip.io/");
        assert!(matches!(result, Err(ShortenError::DisallowedHost(_))));
    }
}
