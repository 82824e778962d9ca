/// Series primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Episode primary keys are opaque UUIDs.
pub type EpisodeId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
