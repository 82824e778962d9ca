//! Repository for the `series` table.

use std::collections::HashMap;

use sada_core::discovery::{self, like_pattern, FEATURED_SERIES_LIMIT, SERIES_SCOPE};
use sada_core::types::DbId;
use sqlx::PgPool;

use crate::models::discovery::SearchRequest;
use crate::models::episode::Episode;
use crate::models::series::{CreateSeries, Series, SeriesType, SeriesWithEpisodes, UpdateSeries};

use super::episode_repo::COLUMNS as EPISODE_COLUMNS;

/// Column list shared across queries to avoid repetition.
pub(crate) const COLUMNS: &str = "id, title, description, series_type, thumbnail_url, \
    category, language, is_published, date_published, created_at, updated_at";

/// Shared filter for the discovery search: published rows, optional
/// substring match ($1), optional exact type match ($2).
const SEARCH_PREDICATE: &str = "is_published = true \
    AND ($1::TEXT IS NULL OR title ILIKE $1 OR description ILIKE $1 OR category ILIKE $1) \
    AND ($2::TEXT IS NULL OR series_type::text = $2)";

/// Provides CRUD and discovery queries for series.
pub struct SeriesRepo;

impl SeriesRepo {
    /// Insert a new series, returning the created row.
    ///
    /// Optional text fields default to `''` and `is_published` to `false`.
    pub async fn create(pool: &PgPool, input: &CreateSeries) -> Result<Series, sqlx::Error> {
        let query = format!(
            "INSERT INTO series
                (title, description, series_type, thumbnail_url, category, language,
                 is_published, date_published)
             VALUES ($1, COALESCE($2, ''), $3, COALESCE($4, ''), $5, $6,
                     COALESCE($7, false), $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Series>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.series_type)
            .bind(&input.thumbnail_url)
            .bind(&input.category)
            .bind(input.language)
            .bind(input.is_published)
            .bind(input.date_published)
            .fetch_one(pool)
            .await
    }

    /// List all series (any publish state) with their full episode
    /// collections, newest first. `series_type` narrows to one kind.
    pub async fn list(
        pool: &PgPool,
        series_type: Option<SeriesType>,
    ) -> Result<Vec<SeriesWithEpisodes>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM series
             WHERE ($1::series_type IS NULL OR series_type = $1)
             ORDER BY created_at DESC"
        );
        let rows = sqlx::query_as::<_, Series>(&query)
            .bind(series_type)
            .fetch_all(pool)
            .await?;
        attach_episodes(pool, rows, false).await
    }

    /// Find a series by ID with its full episode collection.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<SeriesWithEpisodes>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM series WHERE id = $1");
        let row = sqlx::query_as::<_, Series>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        match row {
            Some(series) => Ok(attach_episodes(pool, vec![series], false).await?.pop()),
            None => Ok(None),
        }
    }

    /// Update a series. Only non-`None` fields in `input` are applied;
    /// `updated_at` is refreshed by the table trigger.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSeries,
    ) -> Result<Option<Series>, sqlx::Error> {
        let query = format!(
            "UPDATE series SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                series_type = COALESCE($4, series_type),
                thumbnail_url = COALESCE($5, thumbnail_url),
                category = COALESCE($6, category),
                language = COALESCE($7, language),
                is_published = COALESCE($8, is_published),
                date_published = COALESCE($9, date_published)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Series>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.series_type)
            .bind(&input.thumbnail_url)
            .bind(&input.category)
            .bind(input.language)
            .bind(input.is_published)
            .bind(input.date_published)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a series by ID (episodes cascade). Returns `true` if a
    /// row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM series WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Discovery
    // -----------------------------------------------------------------------

    /// Search published series.
    ///
    /// Ordered by `date_published` descending with nulls last; the returned
    /// total is the filtered count before pagination. Each hit carries its
    /// published episodes only.
    pub async fn search(
        pool: &PgPool,
        req: &SearchRequest,
    ) -> Result<(Vec<SeriesWithEpisodes>, i64), sqlx::Error> {
        let pattern = like_pattern(&req.query);
        let type_filter = discovery::type_filter(&req.content_type, SERIES_SCOPE);

        let count_query = format!("SELECT COUNT(*) FROM series WHERE {SEARCH_PREDICATE}");
        let total: i64 = sqlx::query_scalar(&count_query)
            .bind(pattern.as_deref())
            .bind(type_filter)
            .fetch_one(pool)
            .await?;

        let page_query = format!(
            "SELECT {COLUMNS} FROM series WHERE {SEARCH_PREDICATE}
             ORDER BY date_published DESC NULLS LAST
             LIMIT $3 OFFSET $4"
        );
        let rows = sqlx::query_as::<_, Series>(&page_query)
            .bind(pattern.as_deref())
            .bind(type_filter)
            .bind(req.size)
            .bind(req.from)
            .fetch_all(pool)
            .await?;

        let data = attach_episodes(pool, rows, true).await?;
        Ok((data, total))
    }

    /// The featured-series snapshot: published, optionally filtered by
    /// type, newest publication first, capped at [`FEATURED_SERIES_LIMIT`].
    pub async fn featured(
        pool: &PgPool,
        type_filter: Option<&str>,
    ) -> Result<Vec<SeriesWithEpisodes>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM series
             WHERE is_published = true
               AND ($1::TEXT IS NULL OR series_type::text = $1)
             ORDER BY date_published DESC NULLS LAST
             LIMIT $2"
        );
        let rows = sqlx::query_as::<_, Series>(&query)
            .bind(type_filter)
            .bind(FEATURED_SERIES_LIMIT)
            .fetch_all(pool)
            .await?;
        attach_episodes(pool, rows, true).await
    }

    /// Distinct, non-blank category names of published series.
    pub async fn categories(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT category FROM series \
             WHERE is_published = true \
               AND category IS NOT NULL \
               AND category <> ''",
        )
        .fetch_all(pool)
        .await
    }
}

/// Load the episode collections for a page of series in one query.
///
/// Discovery views pass `published_only = true` so unpublished episodes of
/// a published series stay hidden; the CRUD surface loads everything.
async fn attach_episodes(
    pool: &PgPool,
    rows: Vec<Series>,
    published_only: bool,
) -> Result<Vec<SeriesWithEpisodes>, sqlx::Error> {
    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let ids: Vec<DbId> = rows.iter().map(|s| s.id).collect();
    let filter = if published_only {
        "AND is_published = true"
    } else {
        ""
    };
    let query = format!(
        "SELECT {EPISODE_COLUMNS} FROM episodes
         WHERE series_id = ANY($1) {filter}
         ORDER BY episode_number ASC"
    );
    let episodes = sqlx::query_as::<_, Episode>(&query)
        .bind(&ids)
        .fetch_all(pool)
        .await?;

    let mut by_series: HashMap<DbId, Vec<Episode>> = HashMap::new();
    for episode in episodes {
        by_series.entry(episode.series_id).or_default().push(episode);
    }

    Ok(rows
        .into_iter()
        .map(|series| {
            let episodes = by_series.remove(&series.id).unwrap_or_default();
            SeriesWithEpisodes { series, episodes }
        })
        .collect())
}
