use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::{RegionId, RegionName, UserLevelId};
use crate::domain::{Record, Tabular};
use crate::search::Searchable;

/// Region reference entry.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Region {
    pub id: RegionId,
    pub region_name: RegionName,
    pub abbreviation: String,
    pub nscb_code: String,
    pub nscb_name: String,
    pub added_by: String,
    pub status: String,
    pub user_level_id: Option<UserLevelId>,
    /// Last modification reported by the API, when present and parseable.
    pub date_updated: Option<DateTime<Utc>>,
}

/// Payload sent when creating or updating a region.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewRegion {
    pub region_name: RegionName,
    pub abbreviation: String,
    pub nscb_code: String,
    pub nscb_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_level_id: Option<UserLevelId>,
    pub added_by: String,
    pub status: String,
}

impl Record for Region {
    fn record_id(&self) -> i32 {
        self.id.get()
    }

    fn display_name(&self) -> String {
        self.region_name.to_string()
    }
}

impl Searchable for Region {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Owned(self.id.padded()),
            Cow::Borrowed(self.region_name.as_str()),
            Cow::Borrowed(&self.nscb_code),
            Cow::Borrowed(&self.nscb_name),
            Cow::Borrowed(&self.added_by),
            Cow::Borrowed(&self.status),
        ]
    }
}

impl Tabular for Region {
    fn headers() -> Vec<&'static str> {
        vec![
            "ID",
            "Region Name",
            "Abbreviation",
            "NSCB Code",
            "NSCB Name",
            "Added By",
            "Status",
            "Date Updated",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.padded(),
            self.region_name.to_string(),
            self.abbreviation.clone(),
            self.nscb_code.clone(),
            self.nscb_name.clone(),
            self.added_by.clone(),
            self.status.clone(),
            self.date_updated
                .map(|date| date.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_default(),
        ]
    }
}
