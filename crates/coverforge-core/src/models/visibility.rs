use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The closed set of displayable fields that can be shown or hidden on the
/// rendered page. Nothing outside this set is toggleable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum VisibleField {
    InstitutionName,
    Logo,
    DocumentType,
    CourseCode,
    CourseTitle,
    ProjectTitle,
    SubmittedByName,
    SubmittedById,
    SubmittedBySection,
    SubmittedByProgram,
    SubmittedToName,
    SubmittedToDesignation,
    SubmittedToDepartment,
    SubmittedToInstitution,
    SubmissionDate,
}

impl VisibleField {
    /// Parse the camelCase name used by the frontend checkboxes.
    pub fn parse(name: &str) -> Result<Self, CoreError> {
        serde_json::from_value(serde_json::Value::String(name.to_string()))
            .map_err(|_| CoreError::UnknownVisibilityField(name.to_string()))
    }
}

/// Per-field show/hide flags. Everything is visible by default; hiding a
/// field is an omission in the projection, never an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct VisibilityState {
    pub institution_name: bool,
    pub logo: bool,
    pub document_type: bool,
    pub course_code: bool,
    pub course_title: bool,
    pub project_title: bool,
    pub submitted_by_name: bool,
    pub submitted_by_id: bool,
    pub submitted_by_section: bool,
    pub submitted_by_program: bool,
    pub submitted_to_name: bool,
    pub submitted_to_designation: bool,
    pub submitted_to_department: bool,
    pub submitted_to_institution: bool,
    pub submission_date: bool,
}

impl Default for VisibilityState {
    fn default() -> Self {
        Self {
            institution_name: true,
            logo: true,
            document_type: true,
            course_code: true,
            course_title: true,
            project_title: true,
            submitted_by_name: true,
            submitted_by_id: true,
            submitted_by_section: true,
            submitted_by_program: true,
            submitted_to_name: true,
            submitted_to_designation: true,
            submitted_to_department: true,
            submitted_to_institution: true,
            submission_date: true,
        }
    }
}

impl VisibilityState {
    pub fn is_shown(&self, field: VisibleField) -> bool {
        match field {
            VisibleField::InstitutionName => self.institution_name,
            VisibleField::Logo => self.logo,
            VisibleField::DocumentType => self.document_type,
            VisibleField::CourseCode => self.course_code,
            VisibleField::CourseTitle => self.course_title,
            VisibleField::ProjectTitle => self.project_title,
            VisibleField::SubmittedByName => self.submitted_by_name,
            VisibleField::SubmittedById => self.submitted_by_id,
            VisibleField::SubmittedBySection => self.submitted_by_section,
            VisibleField::SubmittedByProgram => self.submitted_by_program,
            VisibleField::SubmittedToName => self.submitted_to_name,
            VisibleField::SubmittedToDesignation => self.submitted_to_designation,
            VisibleField::SubmittedToDepartment => self.submitted_to_department,
            VisibleField::SubmittedToInstitution => self.submitted_to_institution,
            VisibleField::SubmissionDate => self.submission_date,
        }
    }

    /// Return a copy with exactly one flag set to `shown`.
    pub fn with(&self, field: VisibleField, shown: bool) -> Self {
        let mut next = self.clone();
        match field {
            VisibleField::InstitutionName => next.institution_name = shown,
            VisibleField::Logo => next.logo = shown,
            VisibleField::DocumentType => next.document_type = shown,
            VisibleField::CourseCode => next.course_code = shown,
            VisibleField::CourseTitle => next.course_title = shown,
            VisibleField::ProjectTitle => next.project_title = shown,
            VisibleField::SubmittedByName => next.submitted_by_name = shown,
            VisibleField::SubmittedById => next.submitted_by_id = shown,
            VisibleField::SubmittedBySection => next.submitted_by_section = shown,
            VisibleField::SubmittedByProgram => next.submitted_by_program = shown,
            VisibleField::SubmittedToName => next.submitted_to_name = shown,
            VisibleField::SubmittedToDesignation => next.submitted_to_designation = shown,
            VisibleField::SubmittedToDepartment => next.submitted_to_department = shown,
            VisibleField::SubmittedToInstitution => next.submitted_to_institution = shown,
            VisibleField::SubmissionDate => next.submission_date = shown,
        }
        next
    }
}
