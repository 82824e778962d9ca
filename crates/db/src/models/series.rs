//! Series entity model and DTOs.

use sada_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::episode::Episode;

/// Kind of a series, stored as the `series_type` Postgres enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "series_type", rename_all = "lowercase")]
pub enum SeriesType {
    Podcast,
    Documentary,
}

/// Content language, stored as the `series_language` Postgres enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "series_language", rename_all = "lowercase")]
pub enum Language {
    Ar,
    En,
}

/// A row from the `series` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Series {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub series_type: SeriesType,
    pub thumbnail_url: String,
    pub category: String,
    pub language: Language,
    pub is_published: bool,
    pub date_published: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A series together with its episode collection, resolved at query time.
#[derive(Debug, Clone, Serialize)]
pub struct SeriesWithEpisodes {
    #[serde(flatten)]
    pub series: Series,
    pub episodes: Vec<Episode>,
}

/// DTO for creating a series.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSeries {
    pub title: String,
    pub description: Option<String>,
    pub series_type: SeriesType,
    pub thumbnail_url: Option<String>,
    pub category: String,
    pub language: Language,
    pub is_published: Option<bool>,
    pub date_published: Option<Timestamp>,
}

/// DTO for updating a series. Only non-`None` fields are applied.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSeries {
    pub title: Option<String>,
    pub description: Option<String>,
    pub series_type: Option<SeriesType>,
    pub thumbnail_url: Option<String>,
    pub category: Option<String>,
    pub language: Option<Language>,
    pub is_published: Option<bool>,
    pub date_published: Option<Timestamp>,
}
