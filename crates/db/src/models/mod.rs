//! Domain model structs and DTOs.
//!
//! Each entity submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//!
//! `discovery` holds the search parameter/envelope types shared by the
//! discovery endpoints.

pub mod discovery;
pub mod episode;
pub mod series;
