//! Shared domain types for the Folio portfolio backend.

pub mod color;
pub mod error;
pub mod imageops;
pub mod ordering;
pub mod types;
pub mod upload;
