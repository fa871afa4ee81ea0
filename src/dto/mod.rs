//! DTO modules that bridge the API boundary with services and renderers.

pub mod api;
pub mod list;
