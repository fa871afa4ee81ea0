use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::types::{ActionOfficerId, EmployeeCode, PersonName};
use crate::domain::{Record, Tabular};
use crate::search::Searchable;

/// Employee who can be assigned to act on routed documents.
///
/// The account password is write-only and never part of the read model.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ActionOfficer {
    pub id: ActionOfficerId,
    pub employee_code: EmployeeCode,
    pub last_name: PersonName,
    pub first_name: PersonName,
    pub middle_name: String,
    pub office: String,
    pub user_level: String,
    pub office_representative: String,
}

impl ActionOfficer {
    /// `Last, First Middle` as printed on routing slips.
    pub fn full_name(&self) -> String {
        let mut name = format!("{}, {}", self.last_name, self.first_name);
        if !self.middle_name.is_empty() {
            name.push(' ');
            name.push_str(&self.middle_name);
        }
        name
    }
}

/// Payload sent when creating or updating an action officer.
#[derive(Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewActionOfficer {
    pub employee_code: EmployeeCode,
    pub last_name: PersonName,
    pub first_name: PersonName,
    pub middle_name: PersonName,
    pub office: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_password: Option<String>,
    pub user_level: String,
    pub office_representative: String,
}

impl fmt::Debug for NewActionOfficer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewActionOfficer")
            .field("employee_code", &self.employee_code)
            .field("last_name", &self.last_name)
            .field("first_name", &self.first_name)
            .field("middle_name", &self.middle_name)
            .field("office", &self.office)
            .field("user_password", &self.user_password.as_ref().map(|_| "***"))
            .field("user_level", &self.user_level)
            .field("office_representative", &self.office_representative)
            .finish()
    }
}

impl Record for ActionOfficer {
    fn record_id(&self) -> i32 {
        self.id.get()
    }

    fn display_name(&self) -> String {
        self.full_name()
    }
}

impl Searchable for ActionOfficer {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Owned(self.id.padded()),
            Cow::Borrowed(self.employee_code.as_str()),
            Cow::Borrowed(self.last_name.as_str()),
            Cow::Borrowed(self.first_name.as_str()),
            Cow::Borrowed(&self.middle_name),
            Cow::Borrowed(&self.office),
            Cow::Borrowed(&self.user_level),
        ]
    }
}

impl Tabular for ActionOfficer {
    fn headers() -> Vec<&'static str> {
        vec![
            "ID",
            "Employee Code",
            "Name",
            "Office",
            "User Level",
            "Office Representative",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.padded(),
            self.employee_code.to_string(),
            self.full_name(),
            self.office.clone(),
            self.user_level.clone(),
            self.office_representative.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn officer(middle: &str) -> ActionOfficer {
        ActionOfficer {
            id: ActionOfficerId::new(1).expect("valid id"),
            employee_code: EmployeeCode::new("E-100").expect("valid code"),
            last_name: PersonName::new("Santos").expect("valid name"),
            first_name: PersonName::new("Maria").expect("valid name"),
            middle_name: middle.to_string(),
            office: "Records".to_string(),
            user_level: "Encoder".to_string(),
            office_representative: String::new(),
        }
    }

    #[test]
    fn full_name_skips_missing_middle_name() {
        assert_eq!(officer("Cruz").full_name(), "Santos, Maria Cruz");
        assert_eq!(officer("").full_name(), "Santos, Maria");
    }

    #[test]
    fn payload_debug_hides_password() {
        let payload = NewActionOfficer {
            employee_code: EmployeeCode::new("E-1").expect("valid code"),
            last_name: PersonName::new("Reyes").expect("valid name"),
            first_name: PersonName::new("Jose").expect("valid name"),
            middle_name: PersonName::new("Luna").expect("valid name"),
            office: String::new(),
            user_password: Some("hunter2".to_string()),
            user_level: "Admin".to_string(),
            office_representative: String::new(),
        };
        let debug = format!("{payload:?}");
        assert!(!debug.contains("hunter2"));
        let json = serde_json::to_value(&payload).expect("serializable");
        assert_eq!(json["userPassword"], "hunter2");
        assert_eq!(json["employeeCode"], "E-1");
    }
}
