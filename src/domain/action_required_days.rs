use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::domain::types::{ActionLabel, ActionRequiredDaysId, DocumentTypeName, RequiredDays};
use crate::domain::{Record, Tabular};
use crate::search::Searchable;

/// Number of days a document type allows for a required action.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ActionRequiredDays {
    pub id: ActionRequiredDaysId,
    pub document_type: DocumentTypeName,
    pub action_required: ActionLabel,
    pub required_days: RequiredDays,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewActionRequiredDays {
    pub document_type: DocumentTypeName,
    pub action_required: ActionLabel,
    pub required_days: RequiredDays,
}

impl Record for ActionRequiredDays {
    fn record_id(&self) -> i32 {
        self.id.get()
    }

    fn display_name(&self) -> String {
        format!("{} / {}", self.document_type, self.action_required)
    }
}

impl Searchable for ActionRequiredDays {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Owned(self.id.padded()),
            Cow::Borrowed(self.document_type.as_str()),
            Cow::Borrowed(self.action_required.as_str()),
            Cow::Owned(self.required_days.to_string()),
        ]
    }
}

impl Tabular for ActionRequiredDays {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Document Type", "Action Required", "Required Days"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.padded(),
            self.document_type.to_string(),
            self.action_required.to_string(),
            self.required_days.to_string(),
        ]
    }
}
