//! Repository for the `episodes` table.

use std::collections::HashMap;

use sada_core::discovery::{self, like_pattern, EPISODE_SCOPE, RECENT_EPISODES_LIMIT};
use sada_core::types::{DbId, EpisodeId};
use sqlx::PgPool;

use crate::models::discovery::SearchRequest;
use crate::models::episode::{CreateEpisode, Episode, EpisodeWithSeries, UpdateEpisode};
use crate::models::series::Series;

use super::series_repo::COLUMNS as SERIES_COLUMNS;

/// Column list shared across queries to avoid repetition.
pub(crate) const COLUMNS: &str = "id, series_id, title, description, video_url, \
    thumbnail_url, duration_secs, episode_number, season_number, is_published, \
    published_at, created_at, updated_at";

/// `COLUMNS` qualified with the `e.` alias for joined queries.
const QUALIFIED_COLUMNS: &str = "e.id, e.series_id, e.title, e.description, e.video_url, \
    e.thumbnail_url, e.duration_secs, e.episode_number, e.season_number, e.is_published, \
    e.published_at, e.created_at, e.updated_at";

/// Shared filter for the discovery search: both sides published, optional
/// substring match ($1), optional parent-type match ($2).
const SEARCH_PREDICATE: &str = "e.is_published = true AND s.is_published = true \
    AND ($1::TEXT IS NULL OR e.title ILIKE $1 OR e.description ILIKE $1 OR s.title ILIKE $1) \
    AND ($2::TEXT IS NULL OR s.series_type::text = $2)";

/// Provides CRUD and discovery queries for episodes.
pub struct EpisodeRepo;

impl EpisodeRepo {
    /// Insert a new episode, returning the created row.
    ///
    /// The parent is referenced by `series_id`; a nonexistent series
    /// surfaces as a foreign-key violation from the store.
    pub async fn create(pool: &PgPool, input: &CreateEpisode) -> Result<Episode, sqlx::Error> {
        let query = format!(
            "INSERT INTO episodes
                (series_id, title, description, video_url, thumbnail_url, duration_secs,
                 episode_number, season_number, is_published, published_at)
             VALUES ($1, $2, COALESCE($3, ''), $4, COALESCE($5, ''), COALESCE($6, 0),
                     $7, $8, COALESCE($9, false), $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Episode>(&query)
            .bind(input.series_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.video_url)
            .bind(&input.thumbnail_url)
            .bind(input.duration_secs)
            .bind(input.episode_number)
            .bind(input.season_number)
            .bind(input.is_published)
            .bind(input.published_at)
            .fetch_one(pool)
            .await
    }

    /// List all episodes (any publish state) with their parent series,
    /// newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<EpisodeWithSeries>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM episodes ORDER BY created_at DESC");
        let rows = sqlx::query_as::<_, Episode>(&query).fetch_all(pool).await?;
        attach_series(pool, rows).await
    }

    /// Find an episode by ID with its parent series.
    pub async fn find_by_id(
        pool: &PgPool,
        id: EpisodeId,
    ) -> Result<Option<EpisodeWithSeries>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM episodes WHERE id = $1");
        let row = sqlx::query_as::<_, Episode>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        match row {
            Some(episode) => Ok(attach_series(pool, vec![episode]).await?.pop()),
            None => Ok(None),
        }
    }

    /// List the episodes of one series, ordered by `episode_number`.
    /// `season` narrows to a single season.
    pub async fn list_by_series(
        pool: &PgPool,
        series_id: DbId,
        season: Option<i32>,
    ) -> Result<Vec<Episode>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM episodes
             WHERE series_id = $1
               AND ($2::INTEGER IS NULL OR season_number = $2)
             ORDER BY episode_number ASC"
        );
        sqlx::query_as::<_, Episode>(&query)
            .bind(series_id)
            .bind(season)
            .fetch_all(pool)
            .await
    }

    /// Update an episode. Only non-`None` fields in `input` are applied;
    /// `updated_at` is refreshed by the table trigger.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: EpisodeId,
        input: &UpdateEpisode,
    ) -> Result<Option<Episode>, sqlx::Error> {
        let query = format!(
            "UPDATE episodes SET
                series_id = COALESCE($2, series_id),
                title = COALESCE($3, title),
                description = COALESCE($4, description),
                video_url = COALESCE($5, video_url),
                thumbnail_url = COALESCE($6, thumbnail_url),
                duration_secs = COALESCE($7, duration_secs),
                episode_number = COALESCE($8, episode_number),
                season_number = COALESCE($9, season_number),
                is_published = COALESCE($10, is_published),
                published_at = COALESCE($11, published_at)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Episode>(&query)
            .bind(id)
            .bind(input.series_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.video_url)
            .bind(&input.thumbnail_url)
            .bind(input.duration_secs)
            .bind(input.episode_number)
            .bind(input.season_number)
            .bind(input.is_published)
            .bind(input.published_at)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete an episode by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: EpisodeId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM episodes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Discovery
    // -----------------------------------------------------------------------

    /// Search published episodes of published series.
    ///
    /// Ordered by `published_at` descending with nulls last; the returned
    /// total is the filtered count before pagination. Each hit carries its
    /// resolved parent series.
    pub async fn search(
        pool: &PgPool,
        req: &SearchRequest,
    ) -> Result<(Vec<EpisodeWithSeries>, i64), sqlx::Error> {
        let pattern = like_pattern(&req.query);
        let type_filter = discovery::type_filter(&req.content_type, EPISODE_SCOPE);

        let count_query = format!(
            "SELECT COUNT(*) FROM episodes e
             JOIN series s ON s.id = e.series_id
             WHERE {SEARCH_PREDICATE}"
        );
        let total: i64 = sqlx::query_scalar(&count_query)
            .bind(pattern.as_deref())
            .bind(type_filter)
            .fetch_one(pool)
            .await?;

        let page_query = format!(
            "SELECT {QUALIFIED_COLUMNS} FROM episodes e
             JOIN series s ON s.id = e.series_id
             WHERE {SEARCH_PREDICATE}
             ORDER BY e.published_at DESC NULLS LAST
             LIMIT $3 OFFSET $4"
        );
        let rows = sqlx::query_as::<_, Episode>(&page_query)
            .bind(pattern.as_deref())
            .bind(type_filter)
            .bind(req.size)
            .bind(req.from)
            .fetch_all(pool)
            .await?;

        let data = attach_series(pool, rows).await?;
        Ok((data, total))
    }

    /// The recent-episodes snapshot: both sides published, optionally
    /// filtered by parent type, newest publication first, capped at
    /// [`RECENT_EPISODES_LIMIT`].
    pub async fn recent(
        pool: &PgPool,
        type_filter: Option<&str>,
    ) -> Result<Vec<EpisodeWithSeries>, sqlx::Error> {
        let query = format!(
            "SELECT {QUALIFIED_COLUMNS} FROM episodes e
             JOIN series s ON s.id = e.series_id
             WHERE e.is_published = true AND s.is_published = true
               AND ($1::TEXT IS NULL OR s.series_type::text = $1)
             ORDER BY e.published_at DESC NULLS LAST
             LIMIT $2"
        );
        let rows = sqlx::query_as::<_, Episode>(&query)
            .bind(type_filter)
            .bind(RECENT_EPISODES_LIMIT)
            .fetch_all(pool)
            .await?;
        attach_series(pool, rows).await
    }
}

/// Resolve the parent series for a page of episodes in one query,
/// preserving the page order.
///
/// The FK guarantees a parent exists; a row deleted between the two
/// queries is dropped rather than panicking.
async fn attach_series(
    pool: &PgPool,
    episodes: Vec<Episode>,
) -> Result<Vec<EpisodeWithSeries>, sqlx::Error> {
    if episodes.is_empty() {
        return Ok(Vec::new());
    }

    let mut ids: Vec<DbId> = episodes.iter().map(|e| e.series_id).collect();
    ids.sort_unstable();
    ids.dedup();

    let query = format!("SELECT {SERIES_COLUMNS} FROM series WHERE id = ANY($1)");
    let series = sqlx::query_as::<_, Series>(&query)
        .bind(&ids)
        .fetch_all(pool)
        .await?;
    let by_id: HashMap<DbId, Series> = series.into_iter().map(|s| (s.id, s)).collect();

    Ok(episodes
        .into_iter()
        .filter_map(|episode| {
            by_id
                .get(&episode.series_id)
                .cloned()
                .map(|series| EpisodeWithSeries { episode, series })
        })
        .collect())
}
