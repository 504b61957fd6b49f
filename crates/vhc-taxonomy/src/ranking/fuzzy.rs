//! Fuzzy subsequence scorer.
//!
//! Every character of the query must appear in order (not necessarily
//! contiguously) within the text. The distance formula
//! `2 * first + (last - first)` rewards matches that start early and sit
//! tightly together; it is part of the observable ranking contract, so no
//! external fuzzy-matching crate is used.

/// Match `query` as a character subsequence of `text`.
///
/// Returns the distance on a full match, `None` otherwise. An empty query
/// matches nothing.
pub fn subsequence_distance(query: &str, text: &str) -> Option<usize> {
    let mut needles = query.chars();
    let mut needle = needles.next()?;

    let mut first_match: Option<usize> = None;
    let mut last_match = 0;

    for (i, c) in text.chars().enumerate() {
        if c == needle {
            if first_match.is_none() {
                first_match = Some(i);
            }
            last_match = i;
            match needles.next() {
                Some(n) => needle = n,
                None => {
                    let first = first_match.unwrap_or(0);
                    return Some(2 * first + (last_match - first));
                }
            }
        }
    }
    None
}
