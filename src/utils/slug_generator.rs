//! Random slug generation.
//!
//! Slugs are drawn from the OS CSPRNG and encoded as URL-safe base64 without
//! padding (`A-Z`, `a-z`, `0-9`, `-`, `_`).

use crate::domain::error::ShortenError;
use base64::Engine as _;

/// Upper bound for a requested slug length.
pub const MAX_SLUG_LENGTH: usize = 64;

/// Slugs that would shadow a fixed route and must never be handed out.
pub const RESERVED_SLUGS: &[&str] = &["app", "api", "shorten", "health", "static"];

/// Number of random bytes needed so that unpadded base64 yields at least
/// `length` characters.
///
/// Unpadded base64 emits `ceil(4 * bytes / 3)` characters, so
/// `ceil(3 * length / 4)` bytes always suffice.
pub fn random_bytes_for(length: usize) -> usize {
    (length * 3).div_ceil(4)
}

/// Generates a random slug of exactly `length` characters.
///
/// # Errors
///
/// Returns [`ShortenError::InvalidSlugLength`] if `length` is zero or above
/// [`MAX_SLUG_LENGTH`], and [`ShortenError::Entropy`] if the system random
/// number generator fails.
///
/// # Examples
///
/// ```ignore
/// let slug = generate_slug(6)?;
/// assert_eq!(slug.len(), 6);
/// assert!(slug.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
/// ```
pub fn generate_slug(length: usize) -> Result<String, ShortenError> {
    if length == 0 || length > MAX_SLUG_LENGTH {
        return Err(ShortenError::InvalidSlugLength(length));
    }

    let mut buffer = vec![0u8; random_bytes_for(length)];
    getrandom::fill(&mut buffer).map_err(|e| ShortenError::Entropy(e.to_string()))?;

    let mut slug = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(&buffer);
    slug.truncate(length);

    Ok(slug)
}

/// Returns true if `slug` collides with a reserved route segment.
pub fn is_reserved_slug(slug: &str) -> bool {
    RESERVED_SLUGS.contains(&slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn is_slug_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || c == '-' || c == '_'
    }

    #[test]
    fn test_generate_slug_exact_length_across_range() {
        for length in 1..=MAX_SLUG_LENGTH {
            for _ in 0..20 {
                let slug = generate_slug(length).unwrap();
                assert_eq!(slug.len(), length, "requested {length} characters");
            }
        }
    }

    #[test]
    fn test_generate_slug_url_safe_characters() {
        let slug = generate_slug(MAX_SLUG_LENGTH).unwrap();
        assert!(slug.chars().all(is_slug_char));
        assert!(!slug.contains('='));
    }

    #[test]
    fn test_generate_slug_produces_unique_slugs() {
        let mut slugs = HashSet::new();

        for _ in 0..1000 {
            slugs.insert(generate_slug(12).unwrap());
        }

        assert_eq!(slugs.len(), 1000);
    }

    #[test]
    fn test_generate_slug_rejects_zero_length() {
        let result = generate_slug(0);
        assert!(matches!(result, Err(ShortenError::InvalidSlugLength(0))));
    }

    #[test]
    fn test_generate_slug_rejects_oversized_length() {
        let result = generate_slug(MAX_SLUG_LENGTH + 1);
        assert!(matches!(result, Err(ShortenError::InvalidSlugLength(65))));
    }

    #[test]
    fn test_random_bytes_for_known_sizes() {
        assert_eq!(random_bytes_for(1), 1);
        assert_eq!(random_bytes_for(4), 3);
        assert_eq!(random_bytes_for(6), 5);
        assert_eq!(random_bytes_for(8), 6);
        assert_eq!(random_bytes_for(12), 9);
    }

    #[test]
    fn test_random_bytes_always_encode_to_enough_characters() {
        for length in 1..=MAX_SLUG_LENGTH {
            let bytes = random_bytes_for(length);
            let encoded = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(vec![0u8; bytes]);
            assert!(encoded.len() >= length, "{bytes} bytes for {length} chars");
        }
    }

    #[test]
    fn test_reserved_slugs() {
        for &reserved in RESERVED_SLUGS {
            assert!(is_reserved_slug(reserved));
        }
        assert!(!is_reserved_slug("aB3_-x"));
    }
}
