//! Query normalization: lower-case, trim, expand side/corner abbreviations.

use crate::seed::locations::expand_abbreviation;

/// Normalize a free-text query for ranking.
///
/// Idempotent: normalizing an already-normalized query is a no-op. Blank
/// input normalizes to the empty string.
pub fn normalize_query(query: &str) -> String {
    query
        .to_lowercase()
        .split_whitespace()
        .map(|token| expand_abbreviation(token).unwrap_or(token).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_collapses_whitespace() {
        assert_eq!(normalize_query("  Front   BRAKE  "), "front brake");
    }

    #[test]
    fn expands_corner_abbreviations() {
        assert_eq!(normalize_query("nsf brake"), "near side front brake");
        assert_eq!(normalize_query("O/S/R tyre"), "off side rear tyre");
        assert_eq!(normalize_query("ns door"), "near side door");
    }

    #[test]
    fn is_idempotent() {
        let once = normalize_query("NSF Brake  Disc");
        assert_eq!(normalize_query(&once), once);
    }

    #[test]
    fn blank_input_normalizes_to_empty() {
        assert_eq!(normalize_query(""), "");
        assert_eq!(normalize_query("   "), "");
    }
}
