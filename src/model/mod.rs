//! Data transfer objects shared with API consumers.

pub mod api;
pub mod gallery;
