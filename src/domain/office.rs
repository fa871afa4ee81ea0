use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::domain::types::{OfficeId, OfficeName};
use crate::domain::{Record, Tabular};
use crate::search::Searchable;

/// Office reference entry.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Office {
    pub id: OfficeId,
    pub office: OfficeName,
    pub region: String,
    pub short_name: String,
    pub head_office: String,
}

/// Payload sent when creating or updating an office.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewOffice {
    pub office: OfficeName,
    pub region: String,
    pub short_name: String,
    pub head_office: String,
}

impl Record for Office {
    fn record_id(&self) -> i32 {
        self.id.get()
    }

    fn display_name(&self) -> String {
        self.office.to_string()
    }
}

impl Searchable for Office {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Owned(self.id.padded()),
            Cow::Borrowed(self.office.as_str()),
            Cow::Borrowed(&self.region),
            Cow::Borrowed(&self.short_name),
            Cow::Borrowed(&self.head_office),
        ]
    }
}

impl Tabular for Office {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Office", "Region", "Short Name", "Head Office"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.padded(),
            self.office.to_string(),
            self.region.clone(),
            self.short_name.clone(),
            self.head_office.clone(),
        ]
    }
}
