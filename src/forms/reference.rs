use serde::Deserialize;
use validator::Validate;

use crate::domain::action_officer::NewActionOfficer;
use crate::domain::action_required::NewActionRequired;
use crate::domain::action_required_days::NewActionRequiredDays;
use crate::domain::action_taken::NewActionTaken;
use crate::domain::document_type::NewDocumentType;
use crate::domain::office::NewOffice;
use crate::domain::region::NewRegion;
use crate::domain::types::{
    ActionLabel, DocumentTypeName, EmployeeCode, OfficeName, PersonName, RegionName,
    RequiredDays, TypeConstraintError, UserLevelId, UserLevelName,
};
use crate::domain::user_level::NewUserLevel;
use crate::forms::{FormError, required, trimmed};

#[derive(Debug, Default, Deserialize, Validate)]
/// Form data for adding or editing an office.
pub struct OfficeForm {
    #[validate(length(max = 255))]
    pub office: String,
    #[serde(default)]
    #[validate(length(max = 255))]
    pub region: String,
    #[serde(default)]
    #[validate(length(max = 50))]
    pub short_name: String,
    #[serde(default)]
    #[validate(length(max = 255))]
    pub head_office: String,
}

impl TryFrom<OfficeForm> for NewOffice {
    type Error = FormError;

    fn try_from(form: OfficeForm) -> Result<Self, Self::Error> {
        Ok(Self {
            office: required::<OfficeName>(form.office, "Office")?,
            region: trimmed(&form.region),
            short_name: trimmed(&form.short_name),
            head_office: trimmed(&form.head_office),
        })
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
/// Form data for adding or editing a region. Every text field is required.
pub struct RegionForm {
    #[validate(length(max = 255))]
    pub region_name: String,
    #[validate(length(max = 50))]
    pub abbreviation: String,
    #[validate(length(max = 50))]
    pub nscb_code: String,
    #[validate(length(max = 255))]
    pub nscb_name: String,
    #[validate(length(max = 255))]
    pub added_by: String,
    #[validate(length(max = 50))]
    pub status: String,
    /// Owning user level, when the region is restricted to one.
    #[serde(default)]
    pub user_level_id: Option<i32>,
}

impl TryFrom<RegionForm> for NewRegion {
    type Error = FormError;

    fn try_from(form: RegionForm) -> Result<Self, Self::Error> {
        let region_name = required::<RegionName>(form.region_name, "Region Name")?;
        let abbreviation = required_text(&form.abbreviation, "Abbreviation")?;
        let nscb_code = required_text(&form.nscb_code, "NSCB Code")?;
        let nscb_name = required_text(&form.nscb_name, "NSCB Name")?;
        let added_by = required_text(&form.added_by, "Added By")?;
        let status = required_text(&form.status, "Status")?;
        let user_level_id = form
            .user_level_id
            .map(UserLevelId::new)
            .transpose()
            .map_err(|_| FormError::InvalidValue("user level"))?;

        Ok(Self {
            region_name,
            abbreviation,
            nscb_code,
            nscb_name,
            user_level_id,
            added_by,
            status,
        })
    }
}

#[derive(Default, Deserialize, Validate)]
/// Form data for adding or editing an action officer.
pub struct ActionOfficerForm {
    /// Present when editing an existing officer.
    #[serde(default)]
    pub id: Option<i32>,
    #[validate(length(max = 50))]
    pub employee_code: String,
    #[validate(length(max = 100))]
    pub last_name: String,
    #[validate(length(max = 100))]
    pub first_name: String,
    #[validate(length(max = 100))]
    pub middle_name: String,
    #[serde(default)]
    pub office: String,
    /// Required for new officers; left blank on edit to keep the current one.
    #[serde(default)]
    #[validate(length(max = 128))]
    pub user_password: String,
    #[serde(default)]
    pub user_level: String,
    #[serde(default)]
    pub office_representative: String,
}

impl std::fmt::Debug for ActionOfficerForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionOfficerForm")
            .field("id", &self.id)
            .field("employee_code", &self.employee_code)
            .field("last_name", &self.last_name)
            .field("user_level", &self.user_level)
            .finish_non_exhaustive()
    }
}

impl TryFrom<ActionOfficerForm> for NewActionOfficer {
    type Error = FormError;

    fn try_from(form: ActionOfficerForm) -> Result<Self, Self::Error> {
        let employee_code = required::<EmployeeCode>(form.employee_code, "Employee Code")?;
        let last_name = required::<PersonName>(form.last_name, "Last Name")?;
        let first_name = required::<PersonName>(form.first_name, "First Name")?;
        let middle_name = required::<PersonName>(form.middle_name, "Middle Name")?;

        let user_password = if form.user_password.is_empty() {
            None
        } else {
            Some(form.user_password)
        };
        if form.id.is_none() && user_password.is_none() {
            return Err(FormError::Required("User Password"));
        }

        let user_level = required_text(&form.user_level, "User Level")?;

        Ok(Self {
            employee_code,
            last_name,
            first_name,
            middle_name,
            office: trimmed(&form.office),
            user_password,
            user_level,
            office_representative: trimmed(&form.office_representative),
        })
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
/// Form data for adding or editing a document type.
pub struct DocumentTypeForm {
    #[validate(length(max = 50))]
    pub document_type_code: String,
    #[validate(length(max = 255))]
    pub document_type: String,
}

impl TryFrom<DocumentTypeForm> for NewDocumentType {
    type Error = FormError;

    fn try_from(form: DocumentTypeForm) -> Result<Self, Self::Error> {
        let document_type_code = required_text(&form.document_type_code, "Document Type Code")?;
        Ok(Self {
            document_type_code,
            document_type: required::<DocumentTypeName>(form.document_type, "Document Type")?,
        })
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
/// Form data for adding or editing an action required entry.
pub struct ActionRequiredForm {
    #[validate(length(max = 255))]
    pub action_required: String,
}

impl TryFrom<ActionRequiredForm> for NewActionRequired {
    type Error = FormError;

    fn try_from(form: ActionRequiredForm) -> Result<Self, Self::Error> {
        let action_required =
            ActionLabel::new(form.action_required).map_err(|_| FormError::ActionRequiredMissing)?;
        Ok(Self { action_required })
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
/// Form data for adding or editing an action taken entry.
pub struct ActionTakenForm {
    #[validate(length(max = 50))]
    pub action_taken_code: String,
    #[validate(length(max = 255))]
    pub action_taken: String,
}

impl TryFrom<ActionTakenForm> for NewActionTaken {
    type Error = FormError;

    fn try_from(form: ActionTakenForm) -> Result<Self, Self::Error> {
        let action_taken_code = required_text(&form.action_taken_code, "Action Taken Code")?;
        Ok(Self {
            action_taken_code,
            action_taken: required::<ActionLabel>(form.action_taken, "Action Taken")?,
        })
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
/// Form data linking a document type and an action to a number of days.
pub struct ActionRequiredDaysForm {
    pub document_type: String,
    pub action_required: String,
    /// Raw text of the number input.
    #[validate(length(max = 10))]
    pub required_days: String,
}

impl TryFrom<ActionRequiredDaysForm> for NewActionRequiredDays {
    type Error = FormError;

    fn try_from(form: ActionRequiredDaysForm) -> Result<Self, Self::Error> {
        let document_type = required::<DocumentTypeName>(form.document_type, "Document Type")?;
        let action_required = required::<ActionLabel>(form.action_required, "Action Required")?;
        let required_days = RequiredDays::parse(&form.required_days).map_err(|err| match err {
            TypeConstraintError::EmptyString => FormError::Required("Required Days"),
            _ => FormError::InvalidRequiredDays,
        })?;

        Ok(Self {
            document_type,
            action_required,
            required_days,
        })
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
/// Form data for adding or renaming a user level.
pub struct UserLevelForm {
    #[validate(length(max = 100))]
    pub user_level_name: String,
}

impl TryFrom<UserLevelForm> for NewUserLevel {
    type Error = FormError;

    fn try_from(form: UserLevelForm) -> Result<Self, Self::Error> {
        Ok(Self {
            user_level_name: required::<UserLevelName>(form.user_level_name, "User Level Name")?,
        })
    }
}

/// Trimmed text for fields that are required but stay plain strings.
fn required_text(value: &str, label: &'static str) -> Result<String, FormError> {
    let value = trimmed(value);
    if value.is_empty() {
        return Err(FormError::Required(label));
    }
    Ok(value)
}
