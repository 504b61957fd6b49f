//! Query boost: additive, tier-independent heuristic for domain-relevant
//! token overlap between the query and a suggestion's text. Used only as a
//! secondary sort key.

/// Token-association table: a query trigger word predicts related tokens;
/// each predicted token present in the entry text adds a small bonus.
fn associated_tokens(trigger: &str) -> &'static [&'static str] {
    match trigger {
        "wiper" => &["front", "rear", "blade", "motor", "jet", "washer"],
        "brake" => &["pad", "disc", "fluid", "pipe", "wear"],
        "pad" => &["brake", "disc", "worn", "low", "wear"],
        "bush" => &["bush", "arm", "suspension", "worn", "split"],
        "suspension" => &["bush", "arm", "link", "shock", "spring"],
        _ => &[],
    }
}

const SIDE_BONUS: u32 = 25;
const FRONT_REAR_BONUS: u32 = 20;
const KEYWORD_BONUS: u32 = 18;
const ASSOCIATION_BONUS: u32 = 6;

/// Compute the boost for one entry. Both inputs are already lower-cased
/// (the normalized query and the entry's index text).
pub fn query_boost(query: &str, entry_text: &str) -> u32 {
    let mut boost = 0;

    if query.contains("front") && entry_text.contains("front") {
        boost += FRONT_REAR_BONUS;
    }
    if query.contains("rear") && entry_text.contains("rear") {
        boost += FRONT_REAR_BONUS;
    }

    // The entry may carry either the spelled-out side or its slash form.
    if query.contains("near side") && (entry_text.contains("near side") || entry_text.contains("n/s"))
    {
        boost += SIDE_BONUS;
    }
    if query.contains("off side") && (entry_text.contains("off side") || entry_text.contains("o/s"))
    {
        boost += SIDE_BONUS;
    }

    for keyword in ["pad", "disc", "leak"] {
        if query.contains(keyword) && entry_text.contains(keyword) {
            boost += KEYWORD_BONUS;
        }
    }

    for token in query.split_whitespace() {
        for associated in associated_tokens(token) {
            if entry_text.contains(associated) {
                boost += ASSOCIATION_BONUS;
            }
        }
    }

    boost
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn front_overlap_scores_twenty() {
        assert!(query_boost("front", "front brake disc corroded - renew") >= 20);
    }

    #[test]
    fn side_overlap_matches_slash_form() {
        assert!(query_boost("near side brake", "n/s/f brake pipe corroded - inspect") >= 25);
        assert_eq!(query_boost("near side", "o/s/f brake pipe corroded"), 0);
    }

    #[test]
    fn keyword_overlap_stacks() {
        let boost = query_boost("pad disc", "front brake pad and disc worn");
        // front not in query; pad (18) + disc (18) + "pad" association hits.
        assert!(boost >= 36);
    }

    #[test]
    fn association_tokens_add_six_each() {
        // "wiper" predicts blade/motor/front/...; text has "front" and "blade".
        let boost = query_boost("wiper", "front wiper blade split - renew");
        assert_eq!(boost, 12);
    }

    #[test]
    fn unrelated_text_gets_nothing() {
        assert_eq!(query_boost("horn", "courtesy light bulb blown - renew"), 0);
    }
}
