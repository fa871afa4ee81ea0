use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::action_officer::ActionOfficer;
use crate::domain::action_required::ActionRequired;
use crate::domain::action_required_days::ActionRequiredDays;
use crate::domain::action_taken::ActionTaken;
use crate::domain::destination::{DocumentDestination, sort_by_sequence};
use crate::domain::document::OutboxDocument;
use crate::domain::document_type::DocumentType;
use crate::domain::office::Office;
use crate::domain::region::Region;
use crate::domain::types::TypeConstraintError;
use crate::domain::user_level::UserLevel;
use crate::domain::{Record, Tabular};
use crate::dto::api::{
    ActionOfficerRow, ActionRequiredDaysRow, ActionRequiredRow, ActionTakenRow, DestinationRow,
    DocumentRow, DocumentTypeRow, OfficeRow, RegionRow, UserLevelRow,
};
use crate::repository::errors::RepositoryResult;
use crate::search::Searchable;

pub mod errors;
pub mod json;
#[cfg(feature = "test-mocks")]
pub mod mock;

pub use json::JsonFileRepository;

/// Tables exposed by the API, one list page each.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Table {
    Office,
    Region,
    ActionOfficer,
    DocumentType,
    ActionRequired,
    ActionTaken,
    ActionRequiredDays,
    UserLevel,
    Document,
    Destination,
}

impl Table {
    pub const ALL: [Table; 10] = [
        Table::Office,
        Table::Region,
        Table::ActionOfficer,
        Table::DocumentType,
        Table::ActionRequired,
        Table::ActionTaken,
        Table::ActionRequiredDays,
        Table::UserLevel,
        Table::Document,
        Table::Destination,
    ];

    /// Name used for snapshot files, CLI arguments and export file names.
    pub fn slug(self) -> &'static str {
        match self {
            Table::Office => "office",
            Table::Region => "region",
            Table::ActionOfficer => "action_officer",
            Table::DocumentType => "document_type",
            Table::ActionRequired => "action_required",
            Table::ActionTaken => "action_taken",
            Table::ActionRequiredDays => "document_action_required_days",
            Table::UserLevel => "user_levels",
            Table::Document => "document_source",
            Table::Destination => "document_destination",
        }
    }

    /// Page heading.
    pub fn title(self) -> &'static str {
        match self {
            Table::Office => "Office",
            Table::Region => "Region",
            Table::ActionOfficer => "Action Officer",
            Table::DocumentType => "Document Type",
            Table::ActionRequired => "Action Required",
            Table::ActionTaken => "Action Taken",
            Table::ActionRequiredDays => "Document/Action Required Days",
            Table::UserLevel => "User Levels",
            Table::Document => "Outbox",
            Table::Destination => "Document Destinations",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Table {
    type Err = TypeConstraintError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim().to_lowercase().replace('-', "_");
        Table::ALL
            .into_iter()
            .find(|table| table.slug() == value)
            .ok_or(TypeConstraintError::InvalidValue(value))
    }
}

/// Typed record stored in one of the [`Table`]s.
pub trait TableRecord: Record + Tabular + Searchable + Clone + Serialize + 'static {
    /// Wire shape returned by the API.
    type Row: DeserializeOwned;

    const TABLE: Table;

    fn from_row(row: Self::Row) -> Result<Self, TypeConstraintError>;

    /// Puts freshly loaded records in display order. Keeps API order by default.
    fn arrange(_records: &mut [Self]) {}
}

macro_rules! table_record {
    ($record:ty, $row:ty, $table:expr) => {
        impl TableRecord for $record {
            type Row = $row;

            const TABLE: Table = $table;

            fn from_row(row: Self::Row) -> Result<Self, TypeConstraintError> {
                Self::try_from(row)
            }
        }
    };
}

table_record!(Office, OfficeRow, Table::Office);
table_record!(Region, RegionRow, Table::Region);
table_record!(ActionOfficer, ActionOfficerRow, Table::ActionOfficer);
table_record!(DocumentType, DocumentTypeRow, Table::DocumentType);
table_record!(ActionRequired, ActionRequiredRow, Table::ActionRequired);
table_record!(ActionTaken, ActionTakenRow, Table::ActionTaken);
table_record!(
    ActionRequiredDays,
    ActionRequiredDaysRow,
    Table::ActionRequiredDays
);
table_record!(UserLevel, UserLevelRow, Table::UserLevel);
table_record!(OutboxDocument, DocumentRow, Table::Document);

impl TableRecord for DocumentDestination {
    type Row = DestinationRow;

    const TABLE: Table = Table::Destination;

    fn from_row(row: Self::Row) -> Result<Self, TypeConstraintError> {
        Self::try_from(row)
    }

    fn arrange(records: &mut [Self]) {
        sort_by_sequence(records);
    }
}

pub trait RecordReader {
    /// Every record of `T::TABLE`, in display order.
    fn list_records<T: TableRecord>(&self) -> RepositoryResult<Vec<T>>;
}

pub trait RecordRemover {
    /// Deletes one record; fails with `NotFound` when it does not exist.
    fn delete_record(&self, table: Table, id: i32) -> RepositoryResult<()>;

    /// Deletes every listed record that exists, returning how many were removed.
    fn delete_records(&self, table: Table, ids: &[i32]) -> RepositoryResult<usize>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_parse_from_their_slug() {
        for table in Table::ALL {
            assert_eq!(table.slug().parse::<Table>(), Ok(table));
        }
        assert_eq!("Action-Officer".parse::<Table>(), Ok(Table::ActionOfficer));
        assert!("calendar".parse::<Table>().is_err());
    }
}
