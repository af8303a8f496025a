/// Current UTC timestamp in milliseconds.
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

/// Canonical category display name: trimmed and lowercased.
pub fn normalize_category_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Derive a URL-safe slug from a display name.
///
/// Normalizes first, then joins whitespace-separated words with a single
/// dash, so any spacing variant of the same name yields the same slug.
pub fn slugify(name: &str) -> String {
    normalize_category_name(name)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_is_lowercased_and_dashed() {
        assert_eq!(slugify("Fast Food"), "fast-food");
    }

    #[test]
    fn slug_collapses_whitespace_runs() {
        assert_eq!(slugify("  Fast   Food  "), "fast-food");
        assert_eq!(slugify("fast\tfood"), "fast-food");
    }

    #[test]
    fn slug_is_stable_across_casing() {
        assert_eq!(slugify("KOREAN BBQ"), slugify("korean bbq"));
    }

    #[test]
    fn snowflake_ids_are_positive_and_distinct() {
        let ids: Vec<i64> = (0..16).map(|_| snowflake_id()).collect();
        assert!(ids.iter().all(|id| *id > 0));
        let distinct: std::collections::HashSet<_> = ids.iter().collect();
        // 12 random bits per draw; 16 draws all colliding is effectively impossible
        assert!(distinct.len() > 1);
    }
}
