//! Routing rows: where an outbox document was sent and what happened there.

use std::borrow::Cow;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::domain::types::{ControlNumber, DestinationId, DocumentId};
use crate::domain::{Record, Tabular};
use crate::search::Searchable;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DocumentDestination {
    pub id: DestinationId,
    pub document_source_id: Option<DocumentId>,
    pub document_control_no: String,
    pub route_no: String,
    pub sequence_no: u32,
    pub destination_office: String,
    pub employee_action_officer: String,
    pub action_required: String,
    pub date_released: Option<NaiveDate>,
    pub time_released: Option<NaiveTime>,
    pub date_required: Option<NaiveDate>,
    pub time_required: Option<NaiveTime>,
    pub date_received: Option<NaiveDate>,
    pub time_received: Option<NaiveTime>,
    pub remarks: String,
    pub action_taken: String,
    pub remarks_on_action_taken: String,
    pub date_acted_upon: Option<NaiveDate>,
    pub time_acted_upon: Option<NaiveTime>,
}

impl DocumentDestination {
    /// Whether the destination office has reported an action.
    pub fn is_acted_upon(&self) -> bool {
        !self.action_taken.is_empty() || self.date_acted_upon.is_some()
    }

    /// Whether the action is still open after the required date.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        match self.date_required {
            Some(required) => !self.is_acted_upon() && today > required,
            None => false,
        }
    }
}

/// Payload sent when adding a destination row to a document.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewDestination {
    pub document_source_id: DocumentId,
    pub document_control_no: ControlNumber,
    pub route_no: ControlNumber,
    pub sequence_no: u32,
    pub destination_office: String,
    pub employee_action_officer: String,
    pub action_required: String,
    pub date_released: Option<NaiveDate>,
    pub time_released: Option<NaiveTime>,
    pub date_required: Option<NaiveDate>,
    pub time_required: Option<NaiveTime>,
    pub remarks: String,
}

/// Orders destinations the way routing slips list them.
pub fn sort_by_sequence(destinations: &mut [DocumentDestination]) {
    destinations.sort_by_key(|destination| destination.sequence_no);
}

fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

impl Record for DocumentDestination {
    fn record_id(&self) -> i32 {
        self.id.get()
    }

    fn display_name(&self) -> String {
        format!("#{} {}", self.sequence_no, self.destination_office)
    }
}

impl Searchable for DocumentDestination {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(&self.document_control_no),
            Cow::Borrowed(&self.route_no),
            Cow::Borrowed(&self.destination_office),
            Cow::Borrowed(&self.employee_action_officer),
            Cow::Borrowed(&self.action_required),
            Cow::Borrowed(&self.action_taken),
            Cow::Borrowed(&self.remarks),
        ]
    }
}

impl Tabular for DocumentDestination {
    fn headers() -> Vec<&'static str> {
        vec![
            "Seq",
            "Destination Office",
            "Action Officer",
            "Action Required",
            "Date Released",
            "Date Required",
            "Date Received",
            "Action Taken",
            "Remarks",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.sequence_no.to_string(),
            self.destination_office.clone(),
            self.employee_action_officer.clone(),
            self.action_required.clone(),
            format_date(self.date_released),
            format_date(self.date_required),
            format_date(self.date_received),
            self.action_taken.clone(),
            self.remarks.clone(),
        ]
    }
}
