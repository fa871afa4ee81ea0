//! Wire shapes of the document-tracking REST API.
//!
//! Rows are decoded permissively, the way list pages have always treated the
//! API: missing or `null` text becomes an empty string, numbers may arrive as
//! strings. Conversion into typed records happens through `TryFrom`, which is
//! where ids and required labels are validated.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::domain::action_officer::ActionOfficer;
use crate::domain::action_required::ActionRequired;
use crate::domain::action_required_days::ActionRequiredDays;
use crate::domain::action_taken::ActionTaken;
use crate::domain::destination::DocumentDestination;
use crate::domain::document::OutboxDocument;
use crate::domain::document_type::DocumentType;
use crate::domain::office::Office;
use crate::domain::region::Region;
use crate::domain::types::{
    ActionLabel, ActionOfficerId, ActionRequiredDaysId, ActionRequiredId, ActionTakenId,
    DestinationId, DocumentId, DocumentTypeId, DocumentTypeName, EmployeeCode, OfficeId,
    OfficeName, PersonName, RegionId, RegionName, RequiredDays, Subject, TypeConstraintError,
    UserLevelId, UserLevelName,
};
use crate::domain::user_level::{Permission, PermissionMatrix, UserLevel};

/// Message used when a failed response carries neither `error` nor `message`.
pub const GENERIC_FAILURE: &str = "Request failed";

/// Envelope wrapping every API response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            message: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            message: None,
        }
    }

    /// Message describing a failed response: `error`, else `message`, else
    /// [`GENERIC_FAILURE`].
    pub fn failure_message(&self) -> String {
        self.error
            .as_deref()
            .or(self.message.as_deref())
            .filter(|text| !text.is_empty())
            .unwrap_or(GENERIC_FAILURE)
            .to_string()
    }

    /// Splits the envelope into its payload or its failure message.
    pub fn into_data(self) -> Result<Option<T>, String> {
        if self.success {
            Ok(self.data)
        } else {
            Err(self.failure_message())
        }
    }
}

/// Request body of the bulk delete endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BulkDeleteRequest {
    pub ids: Vec<i32>,
}

fn empty_if_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text,
        Some(other) => other.to_string(),
    })
}

/// Reads a whole number sent either as a JSON number or as text.
fn whole_number(value: &Value) -> Result<u32, TypeConstraintError> {
    match value {
        Value::Number(number) => number
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| TypeConstraintError::InvalidNumber(number.to_string())),
        Value::String(text) => RequiredDays::parse(text).map(RequiredDays::get),
        Value::Null => Err(TypeConstraintError::EmptyString),
        other => Err(TypeConstraintError::InvalidNumber(other.to_string())),
    }
}

fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    DateTime::parse_from_rfc3339(value)
        .map(|parsed| parsed.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|naive| naive.and_utc())
        })
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

fn parse_time(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    NaiveTime::parse_from_str(value, "%H:%M:%S%.f")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .ok()
}

#[derive(Debug, Clone, Deserialize)]
pub struct OfficeRow {
    pub id: i32,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub office: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub region: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub short_name: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub head_office: String,
}

impl TryFrom<OfficeRow> for Office {
    type Error = TypeConstraintError;

    fn try_from(row: OfficeRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: OfficeId::new(row.id)?,
            office: OfficeName::new(row.office)?,
            region: row.region,
            short_name: row.short_name,
            head_office: row.head_office,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegionRow {
    pub id: i32,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub region_name: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub abbreviation: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub nscb_code: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub nscb_name: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub added_by: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub status: String,
    #[serde(default)]
    pub user_level_id: Option<i32>,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub updated_at: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub date_updated: String,
}

impl TryFrom<RegionRow> for Region {
    type Error = TypeConstraintError;

    fn try_from(row: RegionRow) -> Result<Self, Self::Error> {
        let updated = if row.updated_at.is_empty() {
            &row.date_updated
        } else {
            &row.updated_at
        };
        Ok(Self {
            id: RegionId::new(row.id)?,
            date_updated: parse_timestamp(updated),
            region_name: RegionName::new(row.region_name)?,
            abbreviation: row.abbreviation,
            nscb_code: row.nscb_code,
            nscb_name: row.nscb_name,
            added_by: row.added_by,
            status: row.status,
            user_level_id: row.user_level_id.map(UserLevelId::new).transpose()?,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ActionOfficerRow {
    pub id: i32,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub employee_code: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub last_name: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub first_name: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub middle_name: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub office: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub user_level: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub office_representative: String,
}

impl TryFrom<ActionOfficerRow> for ActionOfficer {
    type Error = TypeConstraintError;

    fn try_from(row: ActionOfficerRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ActionOfficerId::new(row.id)?,
            employee_code: EmployeeCode::new(row.employee_code)?,
            last_name: PersonName::new(row.last_name)?,
            first_name: PersonName::new(row.first_name)?,
            middle_name: row.middle_name,
            office: row.office,
            user_level: row.user_level,
            office_representative: row.office_representative,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DocumentTypeRow {
    pub id: i32,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub document_type_code: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub document_type: String,
}

impl TryFrom<DocumentTypeRow> for DocumentType {
    type Error = TypeConstraintError;

    fn try_from(row: DocumentTypeRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: DocumentTypeId::new(row.id)?,
            document_type_code: row.document_type_code,
            document_type: DocumentTypeName::new(row.document_type)?,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ActionRequiredRow {
    pub id: i32,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub action_required: String,
}

impl TryFrom<ActionRequiredRow> for ActionRequired {
    type Error = TypeConstraintError;

    fn try_from(row: ActionRequiredRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ActionRequiredId::new(row.id)?,
            action_required: ActionLabel::new(row.action_required)?,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ActionTakenRow {
    pub id: i32,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub action_taken_code: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub action_taken: String,
}

impl TryFrom<ActionTakenRow> for ActionTaken {
    type Error = TypeConstraintError;

    fn try_from(row: ActionTakenRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ActionTakenId::new(row.id)?,
            action_taken_code: row.action_taken_code,
            action_taken: ActionLabel::new(row.action_taken)?,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ActionRequiredDaysRow {
    pub id: i32,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub document_type: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub action_required: String,
    #[serde(default)]
    pub required_days: Value,
}

impl TryFrom<ActionRequiredDaysRow> for ActionRequiredDays {
    type Error = TypeConstraintError;

    fn try_from(row: ActionRequiredDaysRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ActionRequiredDaysId::new(row.id)?,
            document_type: DocumentTypeName::new(row.document_type)?,
            action_required: ActionLabel::new(row.action_required)?,
            required_days: RequiredDays::new(whole_number(&row.required_days)?),
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserLevelRow {
    pub id: i32,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub user_level_name: String,
    #[serde(default)]
    pub permissions: Option<BTreeMap<String, Permission>>,
}

impl TryFrom<UserLevelRow> for UserLevel {
    type Error = TypeConstraintError;

    fn try_from(row: UserLevelRow) -> Result<Self, Self::Error> {
        let mut permissions = PermissionMatrix::default();
        if let Some(stored) = &row.permissions {
            permissions.apply(stored);
        }
        Ok(Self {
            id: UserLevelId::new(row.id)?,
            user_level_name: UserLevelName::new(row.user_level_name)?,
            permissions,
        })
    }
}

/// Outbox row as returned by `/document-source/`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRow {
    pub id: i32,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub document_control_no: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub route_no: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub office_control_no: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub subject: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub document_type: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub source_type: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub internal_originating_office: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub internal_originating_employee: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub external_originating_office: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub external_originating_employee: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub no_of_pages: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub attached_document_filename: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub attachment_list: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub userid: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub in_sequence: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub remarks: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub reference_document_control_no1: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub reference_document_control_no2: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub reference_document_control_no3: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub reference_document_control_no4: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub reference_document_control_no5: String,
}

impl TryFrom<DocumentRow> for OutboxDocument {
    type Error = TypeConstraintError;

    fn try_from(row: DocumentRow) -> Result<Self, Self::Error> {
        let references = vec![
            row.reference_document_control_no1,
            row.reference_document_control_no2,
            row.reference_document_control_no3,
            row.reference_document_control_no4,
            row.reference_document_control_no5,
        ];
        Ok(Self {
            id: DocumentId::new(row.id)?,
            document_control_no: row.document_control_no,
            route_no: row.route_no,
            office_control_no: row.office_control_no,
            subject: Subject::new(row.subject)?,
            document_type: row.document_type,
            source_type: row.source_type,
            internal_originating_office: row.internal_originating_office,
            internal_originating_employee: row.internal_originating_employee,
            external_originating_office: row.external_originating_office,
            external_originating_employee: row.external_originating_employee,
            no_of_pages: row.no_of_pages,
            attached_document_filename: row.attached_document_filename,
            attachment_list: row.attachment_list,
            userid: row.userid,
            in_sequence: row.in_sequence,
            remarks: row.remarks,
            references,
        })
    }
}

/// Destination row as returned by `/document-destination/`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationRow {
    pub id: i32,
    #[serde(default)]
    pub document_source_id: Option<i32>,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub document_control_no: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub route_no: String,
    #[serde(default)]
    pub sequence_no: Value,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub destination_office: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub employee_action_officer: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub action_required: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub date_released: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub time_released: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub date_required: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub time_required: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub date_received: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub time_received: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub remarks: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub action_taken: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub remarks_on_action_taken: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub date_acted_upon: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub time_acted_upon: String,
}

impl TryFrom<DestinationRow> for DocumentDestination {
    type Error = TypeConstraintError;

    fn try_from(row: DestinationRow) -> Result<Self, Self::Error> {
        // The API reports a missing sequence as 0.
        let sequence_no = match row.sequence_no {
            Value::Null => 0,
            ref value => whole_number(value)?,
        };
        Ok(Self {
            id: DestinationId::new(row.id)?,
            document_source_id: row.document_source_id.map(DocumentId::new).transpose()?,
            document_control_no: row.document_control_no,
            route_no: row.route_no,
            sequence_no,
            destination_office: row.destination_office,
            employee_action_officer: row.employee_action_officer,
            action_required: row.action_required,
            date_released: parse_date(&row.date_released),
            time_released: parse_time(&row.time_released),
            date_required: parse_date(&row.date_required),
            time_required: parse_time(&row.time_required),
            date_received: parse_date(&row.date_received),
            time_received: parse_time(&row.time_received),
            remarks: row.remarks,
            action_taken: row.action_taken,
            remarks_on_action_taken: row.remarks_on_action_taken,
            date_acted_upon: parse_date(&row.date_acted_upon),
            time_acted_upon: parse_time(&row.time_acted_upon),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn failure_message_prefers_error_then_message() {
        let response: ApiResponse<()> = serde_json::from_value(json!({
            "success": false,
            "error": "Region Name is required",
            "message": "ignored"
        }))
        .expect("valid envelope");
        assert_eq!(response.into_data(), Err("Region Name is required".to_string()));

        let response: ApiResponse<()> =
            serde_json::from_value(json!({"success": false, "message": "Gone"}))
                .expect("valid envelope");
        assert_eq!(response.failure_message(), "Gone");

        let response: ApiResponse<()> =
            serde_json::from_value(json!({"success": false})).expect("valid envelope");
        assert_eq!(response.failure_message(), GENERIC_FAILURE);
    }

    #[test]
    fn null_text_fields_become_empty() {
        let row: OfficeRow = serde_json::from_value(json!({
            "id": 3,
            "office": "Records Section",
            "region": null
        }))
        .expect("valid row");
        let office = Office::try_from(row).expect("valid office");
        assert_eq!(office.region, "");
        assert_eq!(office.short_name, "");
    }

    #[test]
    fn rows_with_invalid_ids_are_rejected() {
        let row: ActionRequiredRow =
            serde_json::from_value(json!({"id": 0, "action_required": "For signature"}))
                .expect("valid row");
        assert_eq!(
            ActionRequired::try_from(row),
            Err(TypeConstraintError::NonPositiveId)
        );
    }

    #[test]
    fn required_days_accept_numbers_and_text() {
        for days in [json!(7), json!("7")] {
            let row: ActionRequiredDaysRow = serde_json::from_value(json!({
                "id": 1,
                "document_type": "Memo",
                "action_required": "For review",
                "required_days": days
            }))
            .expect("valid row");
            let rule = ActionRequiredDays::try_from(row).expect("valid rule");
            assert_eq!(rule.required_days.get(), 7);
        }
    }

    #[test]
    fn region_prefers_updated_at() {
        let row: RegionRow = serde_json::from_value(json!({
            "id": 1,
            "region_name": "NCR",
            "updated_at": "2024-03-01T08:30:00+00:00",
            "date_updated": "garbage"
        }))
        .expect("valid row");
        let region = Region::try_from(row).expect("valid region");
        let updated = region.date_updated.expect("parsed timestamp");
        assert_eq!(updated.to_rfc3339(), "2024-03-01T08:30:00+00:00");
    }

    #[test]
    fn destination_parses_dates_and_times() {
        let row: DestinationRow = serde_json::from_value(json!({
            "id": 9,
            "documentSourceId": 4,
            "documentControlNo": "DC-1",
            "routeNo": "R-1",
            "sequenceNo": 2,
            "dateRequired": "2024-05-10",
            "timeRequired": "14:30:00",
            "dateActedUpon": ""
        }))
        .expect("valid row");
        let destination = DocumentDestination::try_from(row).expect("valid destination");
        assert_eq!(destination.sequence_no, 2);
        assert_eq!(
            destination.date_required,
            NaiveDate::from_ymd_opt(2024, 5, 10)
        );
        assert_eq!(destination.time_required, NaiveTime::from_hms_opt(14, 30, 0));
        assert_eq!(destination.date_acted_upon, None);
    }

    #[test]
    fn user_level_permissions_overlay_defaults() {
        let row: UserLevelRow = serde_json::from_value(json!({
            "id": 2,
            "user_level_name": "Encoder",
            "permissions": {
                "region": {"addCopy": true, "delete": false, "edit": true, "listSearchView": true}
            }
        }))
        .expect("valid row");
        let level = UserLevel::try_from(row).expect("valid level");
        let region = level.permissions.get("region").expect("known table");
        assert!(region.add_copy);
        assert!(!region.delete);
        assert_eq!(level.permissions.get("office"), Some(Permission::NONE));
    }
}
