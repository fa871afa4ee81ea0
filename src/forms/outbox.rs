use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use validator::Validate;

use crate::domain::destination::NewDestination;
use crate::domain::document::{NewDocument, REFERENCE_SLOTS};
use crate::domain::types::{ControlNumber, DocumentId, Remarks, Subject};
use crate::forms::{FormError, trimmed};

#[derive(Debug, Default, Deserialize, Validate)]
/// Form data for adding or editing an outbox document.
pub struct DocumentForm {
    #[validate(length(max = 1000))]
    pub subject: String,
    #[serde(default)]
    pub document_type: String,
    /// "Internal" or "External"; blank when not chosen.
    #[serde(default)]
    pub source_type: String,
    #[serde(default)]
    pub internal_originating_office: String,
    #[serde(default)]
    pub internal_originating_employee: String,
    #[serde(default)]
    pub external_originating_office: String,
    #[serde(default)]
    pub external_originating_employee: String,
    #[serde(default)]
    #[validate(length(max = 10))]
    pub no_of_pages: String,
    #[serde(default)]
    pub attached_document_filename: String,
    #[serde(default)]
    pub attachment_list: String,
    #[serde(default)]
    pub userid: String,
    #[serde(default)]
    pub in_sequence: String,
    #[validate(length(max = 2000))]
    pub remarks: String,
    /// Up to five referenced control numbers; extra entries are rejected.
    #[serde(default)]
    #[validate(length(max = 5))]
    pub references: Vec<String>,
}

impl TryFrom<DocumentForm> for NewDocument {
    type Error = FormError;

    fn try_from(form: DocumentForm) -> Result<Self, Self::Error> {
        let subject = Subject::new(form.subject).map_err(|_| FormError::SubjectAndRemarksRequired)?;
        let remarks = Remarks::new(form.remarks).map_err(|_| FormError::SubjectAndRemarksRequired)?;

        if form.references.len() > REFERENCE_SLOTS {
            return Err(FormError::InvalidValue("references"));
        }
        let mut references: [String; REFERENCE_SLOTS] = Default::default();
        for (slot, reference) in references.iter_mut().zip(&form.references) {
            *slot = trimmed(reference);
        }
        let [
            reference_document_control_no1,
            reference_document_control_no2,
            reference_document_control_no3,
            reference_document_control_no4,
            reference_document_control_no5,
        ] = references;

        let source_type = Some(trimmed(&form.source_type)).filter(|value| !value.is_empty());

        Ok(Self {
            subject,
            document_type: trimmed(&form.document_type),
            source_type,
            internal_originating_office: trimmed(&form.internal_originating_office),
            internal_originating_employee: trimmed(&form.internal_originating_employee),
            external_originating_office: trimmed(&form.external_originating_office),
            external_originating_employee: trimmed(&form.external_originating_employee),
            no_of_pages: trimmed(&form.no_of_pages),
            attached_document_filename: trimmed(&form.attached_document_filename),
            attachment_list: trimmed(&form.attachment_list),
            userid: trimmed(&form.userid),
            in_sequence: trimmed(&form.in_sequence),
            remarks,
            reference_document_control_no1,
            reference_document_control_no2,
            reference_document_control_no3,
            reference_document_control_no4,
            reference_document_control_no5,
        })
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
/// Form data for a routing row added to a document.
pub struct DestinationForm {
    #[serde(default)]
    pub document_source_id: Option<i32>,
    pub document_control_no: String,
    pub route_no: String,
    #[serde(default)]
    pub sequence_no: u32,
    #[serde(default)]
    pub destination_office: String,
    #[serde(default)]
    pub employee_action_officer: String,
    #[serde(default)]
    pub action_required: String,
    /// `YYYY-MM-DD`, blank when unset.
    #[serde(default)]
    pub date_released: String,
    /// `HH:MM` or `HH:MM:SS`, blank when unset.
    #[serde(default)]
    pub time_released: String,
    #[serde(default)]
    pub date_required: String,
    #[serde(default)]
    pub time_required: String,
    #[serde(default)]
    #[validate(length(max = 2000))]
    pub remarks: String,
}

impl TryFrom<DestinationForm> for NewDestination {
    type Error = FormError;

    fn try_from(form: DestinationForm) -> Result<Self, Self::Error> {
        let document_source_id = form
            .document_source_id
            .ok_or(FormError::DocumentSourceRequired)
            .and_then(|id| DocumentId::new(id).map_err(|_| FormError::DocumentSourceRequired))?;

        let (document_control_no, route_no) = match (
            ControlNumber::new(form.document_control_no),
            ControlNumber::new(form.route_no),
        ) {
            (Ok(control_no), Ok(route_no)) => (control_no, route_no),
            _ => return Err(FormError::ControlAndRouteRequired),
        };

        Ok(Self {
            document_source_id,
            document_control_no,
            route_no,
            sequence_no: form.sequence_no,
            destination_office: trimmed(&form.destination_office),
            employee_action_officer: trimmed(&form.employee_action_officer),
            action_required: trimmed(&form.action_required),
            date_released: optional_date(&form.date_released, "date released")?,
            time_released: optional_time(&form.time_released, "time released")?,
            date_required: optional_date(&form.date_required, "date required")?,
            time_required: optional_time(&form.time_required, "time required")?,
            remarks: trimmed(&form.remarks),
        })
    }
}

fn optional_date(value: &str, field: &'static str) -> Result<Option<NaiveDate>, FormError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| FormError::InvalidValue(field))
}

fn optional_time(value: &str, field: &'static str) -> Result<Option<NaiveTime>, FormError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .map(Some)
        .map_err(|_| FormError::InvalidValue(field))
}
