//! Document tracking console: typed records, searchable paginated list views,
//! confirmed deletions and report exports over saved API responses.

pub mod context;
pub mod domain;
pub mod dto;
pub mod forms;
pub mod list_view;
pub mod pagination;
pub mod search;
pub mod selection;

#[cfg(feature = "console")]
pub mod error_conversions;
#[cfg(feature = "console")]
pub mod export;
#[cfg(feature = "console")]
pub mod models;
#[cfg(feature = "console")]
pub mod repository;
#[cfg(feature = "console")]
pub mod services;
