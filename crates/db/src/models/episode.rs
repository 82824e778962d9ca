//! Episode entity model and DTOs.

use sada_core::types::{DbId, EpisodeId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::series::Series;

/// A row from the `episodes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Episode {
    pub id: EpisodeId,
    pub series_id: DbId,
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub thumbnail_url: String,
    pub duration_secs: i32,
    pub episode_number: i32,
    pub season_number: Option<i32>,
    pub is_published: bool,
    pub published_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An episode together with its parent series, resolved at query time.
#[derive(Debug, Clone, Serialize)]
pub struct EpisodeWithSeries {
    #[serde(flatten)]
    pub episode: Episode,
    pub series: Series,
}

/// DTO for creating an episode. The parent is supplied by reference id.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEpisode {
    pub series_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub video_url: String,
    pub thumbnail_url: Option<String>,
    pub duration_secs: Option<i32>,
    pub episode_number: i32,
    pub season_number: Option<i32>,
    pub is_published: Option<bool>,
    pub published_at: Option<Timestamp>,
}

/// DTO for updating an episode. Only non-`None` fields are applied.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateEpisode {
    pub series_id: Option<DbId>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub video_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub duration_secs: Option<i32>,
    pub episode_number: Option<i32>,
    pub season_number: Option<i32>,
    pub is_published: Option<bool>,
    pub published_at: Option<Timestamp>,
}
