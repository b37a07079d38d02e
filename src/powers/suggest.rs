/// Fuzzy "did you mean" suggestions for unrecognized names.
use nucleo_matcher::{
    Matcher, Utf32Str,
    pattern::{CaseMatching, Normalization, Pattern},
};

/// Maximum number of suggestions attached to an error.
const MAX_SUGGESTIONS: usize = 3;

/// Rank `candidates` by fuzzy similarity to `query`, best first.
///
/// Candidates that do not match at all are dropped. Ties keep the
/// candidates' original order.
#[must_use]
pub fn suggest(candidates: &[&str], query: &str) -> Vec<String> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }

    let pattern = Pattern::parse(query, CaseMatching::Ignore, Normalization::Smart);
    let mut matcher = Matcher::new(nucleo_matcher::Config::DEFAULT);

    let mut scored: Vec<(&str, u32)> = candidates
        .iter()
        .filter_map(|candidate| {
            let mut buf = Vec::new();
            let haystack = Utf32Str::new(candidate, &mut buf);
            pattern
                .score(haystack, &mut matcher)
                .map(|score| (*candidate, score))
        })
        .collect();

    // Stable sort keeps declaration order among equal scores.
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.truncate(MAX_SUGGESTIONS);
    scored.into_iter().map(|(c, _)| c.to_owned()).collect()
}
