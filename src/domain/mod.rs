//! Typed records for the document-tracking tables.

pub mod action_officer;
pub mod action_required;
pub mod action_required_days;
pub mod action_taken;
pub mod destination;
pub mod document;
pub mod document_type;
pub mod office;
pub mod region;
pub mod types;
pub mod user_level;

/// A row fetched from one of the tracked tables.
pub trait Record {
    /// Raw identifier used for selection and deletion.
    fn record_id(&self) -> i32;

    /// Human readable label used in confirmation prompts.
    fn display_name(&self) -> String;
}

/// Column layout used by console listings and exports.
pub trait Tabular {
    /// Column headers in display order.
    fn headers() -> Vec<&'static str>;

    /// Cell values matching [`Tabular::headers`]; empty strings for blanks.
    fn cells(&self) -> Vec<String>;
}
