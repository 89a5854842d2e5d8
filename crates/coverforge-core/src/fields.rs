//! Typed field addressing for the document record.
//!
//! Every editable scalar has one variant here, so an update can never address
//! a field that does not exist. The dotted-string form used by the frontend
//! (`submittedBy.id`) is parsed once at the command boundary; an unknown path
//! is a programming error surfaced as [`CoreError::UnknownField`], since
//! paths are statically known and never come from untrusted input.

use crate::error::CoreError;
use crate::models::cover::CoverPageData;

/// Fallback applied when a numeric logo dimension cannot be parsed or is not
/// positive. A silent-repair policy, not a validation error.
pub const LOGO_DIMENSION_FALLBACK: u32 = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitterField {
    Name,
    Id,
    Section,
    Program,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipientField {
    Name,
    Designation,
    Department,
    Institution,
}

/// One scalar field of [`CoverPageData`]. The applied style and the
/// visibility flags are updated through their dedicated operations, not
/// through this path-setter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPath {
    InstitutionName,
    LogoUrl,
    LogoWidth,
    LogoHeight,
    DocumentType,
    CourseCode,
    CourseTitle,
    ProjectTitle,
    SubmissionDate,
    SubmittedBy(SubmitterField),
    SubmittedTo(RecipientField),
}

impl FieldPath {
    /// Parse the dotted camelCase form the input controls are wired with.
    pub fn parse(path: &str) -> Result<Self, CoreError> {
        let parsed = match path {
            "institutionName" => Some(FieldPath::InstitutionName),
            "logoUrl" => Some(FieldPath::LogoUrl),
            "logoWidth" => Some(FieldPath::LogoWidth),
            "logoHeight" => Some(FieldPath::LogoHeight),
            "documentType" => Some(FieldPath::DocumentType),
            "courseCode" => Some(FieldPath::CourseCode),
            "courseTitle" => Some(FieldPath::CourseTitle),
            "projectTitle" => Some(FieldPath::ProjectTitle),
            "submissionDate" => Some(FieldPath::SubmissionDate),
            "submittedBy.name" => Some(FieldPath::SubmittedBy(SubmitterField::Name)),
            "submittedBy.id" => Some(FieldPath::SubmittedBy(SubmitterField::Id)),
            "submittedBy.section" => Some(FieldPath::SubmittedBy(SubmitterField::Section)),
            "submittedBy.program" => Some(FieldPath::SubmittedBy(SubmitterField::Program)),
            "submittedTo.name" => Some(FieldPath::SubmittedTo(RecipientField::Name)),
            "submittedTo.designation" => Some(FieldPath::SubmittedTo(RecipientField::Designation)),
            "submittedTo.department" => Some(FieldPath::SubmittedTo(RecipientField::Department)),
            "submittedTo.institution" => Some(FieldPath::SubmittedTo(RecipientField::Institution)),
            _ => None,
        };
        parsed.ok_or_else(|| CoreError::UnknownField(path.to_string()))
    }
}

fn parse_dimension(raw: &str) -> u32 {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|&n| n > 0)
        .unwrap_or(LOGO_DIMENSION_FALLBACK)
}

impl CoverPageData {
    /// Pure update: a copy of the record with exactly the addressed field
    /// replaced. Raw values arrive as strings from the input controls; the
    /// two numeric fields coerce unparseable input to
    /// [`LOGO_DIMENSION_FALLBACK`].
    pub fn with_field(&self, path: FieldPath, raw: &str) -> Self {
        let mut next = self.clone();
        match path {
            FieldPath::InstitutionName => next.institution_name = raw.to_string(),
            FieldPath::LogoUrl => next.logo_url = raw.to_string(),
            FieldPath::LogoWidth => next.logo_width = parse_dimension(raw),
            FieldPath::LogoHeight => next.logo_height = parse_dimension(raw),
            FieldPath::DocumentType => next.document_type = raw.to_string(),
            FieldPath::CourseCode => next.course_code = raw.to_string(),
            FieldPath::CourseTitle => next.course_title = raw.to_string(),
            FieldPath::ProjectTitle => next.project_title = raw.to_string(),
            FieldPath::SubmissionDate => next.submission_date = raw.to_string(),
            FieldPath::SubmittedBy(field) => match field {
                SubmitterField::Name => next.submitted_by.name = raw.to_string(),
                SubmitterField::Id => next.submitted_by.id = raw.to_string(),
                SubmitterField::Section => next.submitted_by.section = raw.to_string(),
                SubmitterField::Program => next.submitted_by.program = raw.to_string(),
            },
            FieldPath::SubmittedTo(field) => match field {
                RecipientField::Name => next.submitted_to.name = raw.to_string(),
                RecipientField::Designation => next.submitted_to.designation = raw.to_string(),
                RecipientField::Department => next.submitted_to.department = raw.to_string(),
                RecipientField::Institution => next.submitted_to.institution = raw.to_string(),
            },
        }
        next
    }
}
