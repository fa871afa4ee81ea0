use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::domain::types::{ActionLabel, ActionRequiredId};
use crate::domain::{Record, Tabular};
use crate::search::Searchable;

/// Action a destination office is asked to perform.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ActionRequired {
    pub id: ActionRequiredId,
    pub action_required: ActionLabel,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewActionRequired {
    pub action_required: ActionLabel,
}

impl Record for ActionRequired {
    fn record_id(&self) -> i32 {
        self.id.get()
    }

    fn display_name(&self) -> String {
        self.action_required.to_string()
    }
}

impl Searchable for ActionRequired {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Owned(self.id.padded()),
            Cow::Borrowed(self.action_required.as_str()),
        ]
    }
}

impl Tabular for ActionRequired {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Action Required"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.id.padded(), self.action_required.to_string()]
    }
}
