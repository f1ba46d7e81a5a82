//! Small shared helpers: timestamps, IDs, slugs.

/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a Snowflake-style i64 for use as resource ID.
///
/// Layout (53 bits, fits in JavaScript's Number.MAX_SAFE_INTEGER):
///   - 41 bits: milliseconds since 2024-01-01 UTC (~69 years)
///   - 12 bits: random (4096 values per ms)
pub fn snowflake_id() -> i64 {
    use rand::Rng;
    // Custom epoch: 2024-01-01 00:00:00 UTC
    const EPOCH_MS: i64 = 1_704_067_200_000;
    let now = now_millis();
    let ts = (now - EPOCH_MS) & 0x1FF_FFFF_FFFF; // 41 bits
    let rand_bits: i64 = rand::thread_rng().gen_range(0..0x1000); // 12 bits
    (ts << 12) | rand_bits
}

/// Derive a URL slug from a title: lowercase ASCII alphanumerics, runs of
/// everything else collapsed to single hyphens, no leading/trailing hyphen.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut last_hyphen = true; // suppress a leading hyphen
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_hyphen = false;
        } else if !last_hyphen {
            slug.push('-');
            last_hyphen = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snowflake_id_positive() {
        assert!(snowflake_id() > 0);
    }

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Birthday Party Package"), "birthday-party-package");
    }

    #[test]
    fn test_slugify_punctuation_collapses() {
        assert_eq!(slugify("Magic & Mayhem -- Live!"), "magic-mayhem-live");
    }

    #[test]
    fn test_slugify_trims_edges() {
        assert_eq!(slugify("  Fun Zone  "), "fun-zone");
    }
}
