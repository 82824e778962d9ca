//! Shared leaf crate for the Sada backend.
//!
//! Zero internal dependencies so both the db/repository layer and the API
//! layer can use the same type aliases, error enum, and discovery helpers.

pub mod discovery;
pub mod error;
pub mod types;
