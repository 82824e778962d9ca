//! Discovery constants and helpers.
//!
//! This module lives in `core` (zero internal deps) so it can be used by both
//! the repository layer and the API handlers without pulling in sqlx or axum.

// ---------------------------------------------------------------------------
// Pagination defaults
// ---------------------------------------------------------------------------

/// Default number of results per discovery page.
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Hard cap on the featured-series snapshot.
pub const FEATURED_SERIES_LIMIT: i64 = 10;

/// Hard cap on the recent-episodes snapshot.
pub const RECENT_EPISODES_LIMIT: i64 = 20;

/// The wildcard content type accepted by every discovery endpoint.
pub const TYPE_ALL: &str = "all";

/// Default content type for the universal search endpoint.
pub const DEFAULT_SEARCH_TYPE: &str = "all";

/// Default content type (and scope word) for episode endpoints.
pub const EPISODE_SCOPE: &str = "episode";

/// Default content type (and scope word) for series endpoints.
pub const SERIES_SCOPE: &str = "series";

// ---------------------------------------------------------------------------
// Parameter coercion
// ---------------------------------------------------------------------------

/// Coerce a user-provided offset to the contract: non-negative, default 0.
pub fn clamp_from(from: Option<i64>) -> i64 {
    from.unwrap_or(0).max(0)
}

/// Coerce a user-provided page size to the contract: positive, default
/// [`DEFAULT_PAGE_SIZE`]. Zero and negative values fall back to the default
/// rather than being clamped to 1.
pub fn clamp_size(size: Option<i64>) -> i64 {
    match size {
        Some(s) if s > 0 => s,
        _ => DEFAULT_PAGE_SIZE,
    }
}

// ---------------------------------------------------------------------------
// Search routing
// ---------------------------------------------------------------------------

/// Which query service(s) a universal search dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchTarget {
    /// Delegate entirely to the episode search.
    Episodes,
    /// Delegate entirely to the series search.
    Series,
    /// Query both and merge (series hits first).
    Combined,
}

/// Route a universal search by its `type` parameter.
///
/// `"episode"` goes to episodes; `"series"`, `"podcast"`, and
/// `"documentary"` go to series; everything else (including `"all"` and
/// unrecognized values) runs the combined search.
pub fn classify_target(content_type: &str) -> SearchTarget {
    match content_type {
        "episode" => SearchTarget::Episodes,
        "series" | "podcast" | "documentary" => SearchTarget::Series,
        _ => SearchTarget::Combined,
    }
}

/// The exact-match series-type filter implied by a `type` parameter.
///
/// Returns `None` when the value is empty, equal to the endpoint's own scope
/// word (e.g. `"series"` on the series search), or `"all"` -- those mean
/// "no filter". Anything else is passed through verbatim; an unrecognized
/// value simply matches no rows.
pub fn type_filter<'a>(content_type: &'a str, scope: &str) -> Option<&'a str> {
    if content_type.is_empty() || content_type == scope || content_type == TYPE_ALL {
        None
    } else {
        Some(content_type)
    }
}

/// The series-type filter for the featured snapshot: absent and `"all"`
/// mean no filter.
pub fn featured_type_filter(content_type: Option<&str>) -> Option<&str> {
    content_type.filter(|t| !t.is_empty() && *t != TYPE_ALL)
}

// ---------------------------------------------------------------------------
// Query text
// ---------------------------------------------------------------------------

/// Build an ILIKE substring pattern from user query text.
///
/// Whitespace-only input yields `None` (no text predicate); otherwise the
/// trimmed text is wrapped in `%` wildcards.
pub fn like_pattern(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(format!("%{trimmed}%"))
    }
}

// ---------------------------------------------------------------------------
// Combined-search merge
// ---------------------------------------------------------------------------

/// Per-service page size for the combined search: `ceil(size / 2)`.
pub fn half_size(size: i64) -> i64 {
    (size + 1) / 2
}

/// Slice a merged result list to the `[from, from + size)` window.
///
/// The combined search applies `from` in each sub-query and then again here,
/// over the concatenation. That double offset does not reproduce true global
/// pagination across the two sources; it is the contract's acknowledged
/// approximation and is kept as-is.
pub fn page_window<T>(items: Vec<T>, from: i64, size: i64) -> Vec<T> {
    items
        .into_iter()
        .skip(from.max(0) as usize)
        .take(size.max(0) as usize)
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
