use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::style::{FontFamily, FontScale, Layout, StyleBundle};
use crate::models::visibility::VisibilityState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubmittedBy {
    pub name: String,
    pub id: String,
    pub section: String,
    pub program: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubmittedTo {
    pub name: String,
    pub designation: String,
    pub department: String,
    pub institution: String,
}

/// The single source of truth for one cover page being edited.
///
/// One record is created per session and replaced wholesale by the pure
/// update operations; nothing here is persisted between sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CoverPageData {
    pub institution_name: String,
    /// Opaque image reference (data-URL or path), stored verbatim.
    pub logo_url: String,
    pub logo_width: u32,
    pub logo_height: u32,
    pub document_type: String,
    pub course_code: String,
    pub course_title: String,
    pub project_title: String,
    pub submitted_by: SubmittedBy,
    pub submitted_to: SubmittedTo,
    pub submission_date: String,
    /// Snapshot of the selected preset's bundle. Selecting another preset
    /// overwrites the whole bundle, never merges.
    pub applied_style: StyleBundle,
    /// Id of the preset the bundle was copied from.
    pub selected_preset: String,
    pub visibility: VisibilityState,
}

impl Default for CoverPageData {
    fn default() -> Self {
        Self {
            institution_name: "University of Excellence".to_string(),
            logo_url: String::new(),
            logo_width: 120,
            logo_height: 120,
            document_type: "Project Report".to_string(),
            course_code: "CSE 4001".to_string(),
            course_title: "Software Engineering".to_string(),
            project_title: "Dynamic Cover Page Generator".to_string(),
            submitted_by: SubmittedBy {
                name: "John Doe".to_string(),
                id: "201812345".to_string(),
                section: "A".to_string(),
                program: "Computer Science & Engineering".to_string(),
            },
            submitted_to: SubmittedTo {
                name: "Dr. Jane Smith".to_string(),
                designation: "Professor".to_string(),
                department: "Department of Computer Science".to_string(),
                institution: "University of Excellence".to_string(),
            },
            submission_date: jiff::Zoned::now().strftime("%d/%m/%Y").to_string(),
            // Matches the first catalog entry (classic-1), which is also the
            // default selection in the editor.
            applied_style: StyleBundle {
                font_size: FontScale {
                    title: "text-4xl".to_string(),
                    heading: "text-2xl".to_string(),
                    body: "text-base".to_string(),
                },
                font_family: FontFamily::Serif,
                primary_color: "text-blue-800".to_string(),
                accent_color: "text-blue-600".to_string(),
                background_color: "bg-white".to_string(),
                border_style: "border-blue-200".to_string(),
                layout: Layout::Centered,
                decorative_elements: true,
            },
            selected_preset: "classic-1".to_string(),
            visibility: VisibilityState::default(),
        }
    }
}

impl CoverPageData {
    /// Full overwrite of the applied style from a preset's bundle, recording
    /// the preset id as the active selection.
    pub fn with_style(&self, bundle: StyleBundle, preset_id: &str) -> Self {
        Self {
            applied_style: bundle,
            selected_preset: preset_id.to_string(),
            ..self.clone()
        }
    }

    /// Copy with one visibility flag changed; content fields untouched.
    pub fn with_visibility(
        &self,
        field: crate::models::visibility::VisibleField,
        shown: bool,
    ) -> Self {
        Self {
            visibility: self.visibility.with(field, shown),
            ..self.clone()
        }
    }

    /// Store a picked logo reference verbatim.
    pub fn with_logo(&self, logo_url: &str) -> Self {
        Self {
            logo_url: logo_url.to_string(),
            ..self.clone()
        }
    }
}
