//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the corresponding repository in `sada_db` and map
//! errors via [`crate::error::AppError`].

pub mod discovery;
pub mod episodes;
pub mod series;
