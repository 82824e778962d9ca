//! Discovery parameter and envelope types.
//!
//! Contains the raw query-parameter structs deserialized by the API layer,
//! the normalized search request consumed by the repositories, and the
//! response envelopes for the discovery endpoints.

use sada_core::discovery::{clamp_from, clamp_size};
use serde::{Deserialize, Serialize};

use crate::models::episode::EpisodeWithSeries;
use crate::models::series::SeriesWithEpisodes;

// ---------------------------------------------------------------------------
// Inbound query parameters
// ---------------------------------------------------------------------------

/// Raw query parameters for the search endpoints
/// (`?query=&from=&size=&type=`).
#[derive(Debug, Clone, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
    pub from: Option<i64>,
    pub size: Option<i64>,
    #[serde(rename = "type")]
    pub content_type: Option<String>,
}

/// Query parameters for the featured endpoint (`?type=`).
#[derive(Debug, Clone, Deserialize)]
pub struct FeaturedParams {
    #[serde(rename = "type")]
    pub content_type: Option<String>,
}

/// Query parameters for the recent-episodes endpoint (`?size=&type=`).
#[derive(Debug, Clone, Deserialize)]
pub struct RecentEpisodesParams {
    pub size: Option<i64>,
    #[serde(rename = "type")]
    pub content_type: Option<String>,
}

/// Query parameters for the series-by-type endpoint
/// (`?type=&from=&size=`).
#[derive(Debug, Clone, Deserialize)]
pub struct SeriesByTypeParams {
    #[serde(rename = "type")]
    pub content_type: Option<String>,
    pub from: Option<i64>,
    pub size: Option<i64>,
}

// ---------------------------------------------------------------------------
// Normalized search request
// ---------------------------------------------------------------------------

/// A fully-defaulted search request as consumed by the repositories.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub query: String,
    pub from: i64,
    pub size: i64,
    pub content_type: String,
}

impl SearchRequest {
    /// Normalize raw parameters: coerce invalid numbers to their defaults
    /// and fill in the endpoint's default content type.
    pub fn from_params(params: SearchParams, default_type: &str) -> Self {
        Self {
            query: params.query.unwrap_or_default(),
            from: clamp_from(params.from),
            size: clamp_size(params.size),
            content_type: match params.content_type {
                Some(t) if !t.is_empty() => t,
                _ => default_type.to_string(),
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Response envelopes
// ---------------------------------------------------------------------------

/// Standard paginated envelope for discovery results.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub total: i64,
    pub from: i64,
    pub size: i64,
}

/// A single universal-search hit: either a series or an episode.
///
/// Serialized untagged; consumers tell the variants apart by shape
/// (series hits carry `episodes`, episode hits carry `video_url`).
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum SearchHit {
    Series(SeriesWithEpisodes),
    Episode(EpisodeWithSeries),
}

/// Fixed-size featured snapshot (not caller-paginated).
#[derive(Debug, Clone, Serialize)]
pub struct FeaturedContent {
    pub featured_series: Vec<SeriesWithEpisodes>,
    pub recent_episodes: Vec<EpisodeWithSeries>,
}

/// Distinct category names of published series.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryList {
    pub categories: Vec<String>,
}
