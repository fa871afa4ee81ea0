//! User levels and the per-table permission matrix attached to them.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::types::{UserLevelId, UserLevelName};
use crate::domain::{Record, Tabular};
use crate::search::Searchable;

/// Operations a user level may perform on a table.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Permission {
    pub add_copy: bool,
    pub delete: bool,
    pub edit: bool,
    pub list_search_view: bool,
}

impl Permission {
    pub const NONE: Self = Self {
        add_copy: false,
        delete: false,
        edit: false,
        list_search_view: false,
    };

    pub const ALL: Self = Self {
        add_copy: true,
        delete: true,
        edit: true,
        list_search_view: true,
    };
}

/// Single permission flag, used when toggling one checkbox of the matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PermissionKind {
    AddCopy,
    Delete,
    Edit,
    ListSearchView,
}

/// Row emphasis in the permissions table.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Highlight {
    #[default]
    Normal,
    Green,
    Red,
}

/// Permissions for one table.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TablePermission {
    pub table_name: String,
    pub display_name: String,
    pub highlight: Highlight,
    pub permissions: Permission,
}

/// Tables a user level can be granted access to, in display order.
const TABLES: &[(&str, &str, Highlight, Permission)] = &[
    ("action_officer", "Action Office", Highlight::Normal, Permission::NONE),
    ("action_required", "Action Required", Highlight::Normal, Permission::NONE),
    ("action_taken", "Action Taken", Highlight::Normal, Permission::NONE),
    ("document_type", "Document Type", Highlight::Normal, Permission::NONE),
    ("document_destination", "Document Destination", Highlight::Normal, Permission::ALL),
    ("document_source_outbox", "Document Source (OUTBOX)", Highlight::Green, Permission::ALL),
    ("office", "Office", Highlight::Normal, Permission::NONE),
    ("region", "Region", Highlight::Normal, Permission::NONE),
    ("time_required", "Time Required", Highlight::Normal, Permission::NONE),
    ("user_account", "User Account", Highlight::Normal, Permission::NONE),
    ("external_documents", "External Documents", Highlight::Normal, Permission::ALL),
    ("inbox_received", "INBOX - Received", Highlight::Red, Permission::ALL),
    ("inbox_action_taken", "INBOX - Action Taken", Highlight::Normal, Permission::ALL),
    ("personal_group", "Personal Group", Highlight::Normal, Permission::NONE),
    (
        "document_action_required_days",
        "Document/Action Required Days",
        Highlight::Normal,
        Permission::NONE,
    ),
];

/// Per-table permissions of a user level, keyed by table name.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PermissionMatrix {
    tables: Vec<TablePermission>,
}

impl Default for PermissionMatrix {
    fn default() -> Self {
        let tables = TABLES
            .iter()
            .map(|(table_name, display_name, highlight, permissions)| TablePermission {
                table_name: (*table_name).to_string(),
                display_name: (*display_name).to_string(),
                highlight: *highlight,
                permissions: *permissions,
            })
            .collect();
        Self { tables }
    }
}

impl PermissionMatrix {
    pub fn tables(&self) -> &[TablePermission] {
        &self.tables
    }

    pub fn get(&self, table_name: &str) -> Option<Permission> {
        self.tables
            .iter()
            .find(|table| table.table_name == table_name)
            .map(|table| table.permissions)
    }

    /// Updates one flag; returns `false` when the table is unknown.
    pub fn set(&mut self, table_name: &str, kind: PermissionKind, value: bool) -> bool {
        let Some(table) = self
            .tables
            .iter_mut()
            .find(|table| table.table_name == table_name)
        else {
            return false;
        };
        let permissions = &mut table.permissions;
        match kind {
            PermissionKind::AddCopy => permissions.add_copy = value,
            PermissionKind::Delete => permissions.delete = value,
            PermissionKind::Edit => permissions.edit = value,
            PermissionKind::ListSearchView => permissions.list_search_view = value,
        }
        true
    }

    /// Map form submitted back to the API, keyed by table name.
    pub fn to_map(&self) -> BTreeMap<String, Permission> {
        self.tables
            .iter()
            .map(|table| (table.table_name.clone(), table.permissions))
            .collect()
    }

    /// Applies stored permissions over the defaults, ignoring unknown tables.
    pub fn apply(&mut self, stored: &BTreeMap<String, Permission>) {
        for table in &mut self.tables {
            if let Some(permissions) = stored.get(&table.table_name) {
                table.permissions = *permissions;
            }
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct UserLevel {
    pub id: UserLevelId,
    pub user_level_name: UserLevelName,
    pub permissions: PermissionMatrix,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewUserLevel {
    pub user_level_name: UserLevelName,
}

impl Record for UserLevel {
    fn record_id(&self) -> i32 {
        self.id.get()
    }

    fn display_name(&self) -> String {
        self.user_level_name.to_string()
    }
}

impl Searchable for UserLevel {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Owned(self.id.padded()),
            Cow::Borrowed(self.user_level_name.as_str()),
        ]
    }
}

impl Tabular for UserLevel {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "User Level"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.id.padded(), self.user_level_name.to_string()]
    }
}
