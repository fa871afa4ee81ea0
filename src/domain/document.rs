//! Outgoing documents recorded in the Outbox.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::domain::types::{DocumentId, Remarks, Subject};
use crate::domain::{Record, Tabular};
use crate::search::Searchable;

/// Number of reference control numbers a document can carry.
pub const REFERENCE_SLOTS: usize = 5;

/// Document source entry shown in the Outbox table.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct OutboxDocument {
    pub id: DocumentId,
    pub document_control_no: String,
    pub route_no: String,
    pub office_control_no: String,
    pub subject: Subject,
    pub document_type: String,
    pub source_type: String,
    pub internal_originating_office: String,
    pub internal_originating_employee: String,
    pub external_originating_office: String,
    pub external_originating_employee: String,
    pub no_of_pages: String,
    pub attached_document_filename: String,
    pub attachment_list: String,
    pub userid: String,
    pub in_sequence: String,
    pub remarks: String,
    /// Non-empty reference control numbers in slot order.
    pub references: Vec<String>,
}

impl OutboxDocument {
    /// Originating office, preferring the internal one.
    pub fn originating_office(&self) -> &str {
        if self.internal_originating_office.is_empty() {
            &self.external_originating_office
        } else {
            &self.internal_originating_office
        }
    }
}

/// Payload sent when creating or updating an outbox document.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewDocument {
    pub subject: Subject,
    pub document_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,
    pub internal_originating_office: String,
    pub internal_originating_employee: String,
    pub external_originating_office: String,
    pub external_originating_employee: String,
    pub no_of_pages: String,
    pub attached_document_filename: String,
    pub attachment_list: String,
    pub userid: String,
    pub in_sequence: String,
    pub remarks: Remarks,
    pub reference_document_control_no1: String,
    pub reference_document_control_no2: String,
    pub reference_document_control_no3: String,
    pub reference_document_control_no4: String,
    pub reference_document_control_no5: String,
}

impl Record for OutboxDocument {
    fn record_id(&self) -> i32 {
        self.id.get()
    }

    fn display_name(&self) -> String {
        if self.document_control_no.is_empty() {
            self.subject.to_string()
        } else {
            format!("{} ({})", self.document_control_no, self.subject)
        }
    }
}

impl Searchable for OutboxDocument {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Owned(self.id.padded()),
            Cow::Borrowed(&self.document_control_no),
            Cow::Borrowed(&self.route_no),
            Cow::Borrowed(&self.office_control_no),
            Cow::Borrowed(self.subject.as_str()),
            Cow::Borrowed(&self.document_type),
            Cow::Borrowed(&self.source_type),
        ]
    }
}

impl Tabular for OutboxDocument {
    fn headers() -> Vec<&'static str> {
        vec![
            "Document Control No.",
            "Route No.",
            "Office Control No.",
            "Subject",
            "Document Type",
            "Source Type",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.document_control_no.clone(),
            self.route_no.clone(),
            self.office_control_no.clone(),
            self.subject.to_string(),
            self.document_type.clone(),
            self.source_type.clone(),
        ]
    }
}
