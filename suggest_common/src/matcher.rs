//! Substring matching of the typed query against the company list.

use crate::company::Company;

/// Maximum number of suggestions shown at once.
pub const MAX_SUGGESTIONS: usize = 10;

/// Returns up to `limit` companies whose name or ticker contains `query`,
/// case-insensitively, in the order of `companies`.
///
/// A blank query (empty or only whitespace) yields no suggestions at all. Otherwise
/// the query is matched as typed, surrounding whitespace included.
pub fn find_matches<'a>(companies: &'a [Company], query: &str, limit: usize) -> Vec<&'a Company> {
    if query.trim().is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();

    companies
        .iter()
        .filter(|company| {
            company.name.to_lowercase().contains(&needle)
                || company.ticker.to_lowercase().contains(&needle)
        })
        .take(limit)
        .collect()
}
