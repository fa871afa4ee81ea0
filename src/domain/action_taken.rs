use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::domain::types::{ActionLabel, ActionTakenId};
use crate::domain::{Record, Tabular};
use crate::search::Searchable;

/// Action an office reports back on a routed document.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ActionTaken {
    pub id: ActionTakenId,
    pub action_taken_code: String,
    pub action_taken: ActionLabel,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewActionTaken {
    pub action_taken_code: String,
    pub action_taken: ActionLabel,
}

impl Record for ActionTaken {
    fn record_id(&self) -> i32 {
        self.id.get()
    }

    fn display_name(&self) -> String {
        self.action_taken.to_string()
    }
}

impl Searchable for ActionTaken {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Owned(self.id.padded()),
            Cow::Borrowed(self.action_taken.as_str()),
        ]
    }
}

impl Tabular for ActionTaken {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Code", "Action Taken"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.padded(),
            self.action_taken_code.clone(),
            self.action_taken.to_string(),
        ]
    }
}
