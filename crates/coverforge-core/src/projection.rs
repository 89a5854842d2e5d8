//! Preview projection: the pure transformation of a [`CoverPageData`] into a
//! renderable layout tree.
//!
//! A displayable field contributes a block iff its visibility flag is true;
//! missing optional content (an empty logo reference, an empty string field)
//! is an omission, never a placeholder. No side effects, no error cases.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::cover::CoverPageData;
use crate::models::style::{FontFamily, Layout};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum Block {
    /// Institution name, rendered at the title scale.
    Heading { text: String, size: String },
    Logo { url: String, width: u32, height: u32 },
    /// Document-type banner, rendered at the heading scale.
    Banner { text: String, size: String },
    CourseLine { label: String, value: String },
    ProjectTitle { text: String, size: String },
    /// One of the two submission panels; `accent` distinguishes the
    /// recipient panel from the submitter panel.
    PartyPanel {
        title: String,
        lines: Vec<String>,
        accent: bool,
    },
    DateFooter { text: String },
}

/// The fully resolved layout for one cover page, ready for a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LayoutTree {
    pub layout: Layout,
    pub decorative_elements: bool,
    pub font_family: FontFamily,
    pub body_size: String,
    pub primary_color: String,
    pub accent_color: String,
    pub background_color: String,
    pub border_style: String,
    pub blocks: Vec<Block>,
}

pub fn project(record: &CoverPageData) -> LayoutTree {
    let style = &record.applied_style;
    let vis = &record.visibility;
    let mut blocks = Vec::new();

    if vis.institution_name {
        blocks.push(Block::Heading {
            text: record.institution_name.clone(),
            size: style.font_size.title.clone(),
        });
    }

    if vis.logo && !record.logo_url.is_empty() {
        blocks.push(Block::Logo {
            url: record.logo_url.clone(),
            width: record.logo_width,
            height: record.logo_height,
        });
    }

    if vis.document_type {
        blocks.push(Block::Banner {
            text: record.document_type.clone(),
            size: style.font_size.heading.clone(),
        });
    }

    if vis.course_code {
        blocks.push(Block::CourseLine {
            label: "Course Code".to_string(),
            value: record.course_code.clone(),
        });
    }

    if vis.course_title {
        blocks.push(Block::CourseLine {
            label: "Course Title".to_string(),
            value: record.course_title.clone(),
        });
    }

    if vis.project_title {
        blocks.push(Block::ProjectTitle {
            text: record.project_title.clone(),
            size: style.font_size.heading.clone(),
        });
    }

    let mut by_lines = Vec::new();
    if vis.submitted_by_name {
        by_lines.push(record.submitted_by.name.clone());
    }
    if vis.submitted_by_id {
        by_lines.push(format!("ID: {}", record.submitted_by.id));
    }
    if vis.submitted_by_section {
        by_lines.push(format!("Section: {}", record.submitted_by.section));
    }
    if vis.submitted_by_program {
        by_lines.push(record.submitted_by.program.clone());
    }
    blocks.push(Block::PartyPanel {
        title: "Submitted By:".to_string(),
        lines: by_lines,
        accent: false,
    });

    let mut to_lines = Vec::new();
    if vis.submitted_to_name {
        to_lines.push(record.submitted_to.name.clone());
    }
    if vis.submitted_to_designation {
        to_lines.push(record.submitted_to.designation.clone());
    }
    if vis.submitted_to_department {
        to_lines.push(record.submitted_to.department.clone());
    }
    if vis.submitted_to_institution {
        to_lines.push(record.submitted_to.institution.clone());
    }
    blocks.push(Block::PartyPanel {
        title: "Submitted To:".to_string(),
        lines: to_lines,
        accent: true,
    });

    if vis.submission_date {
        blocks.push(Block::DateFooter {
            text: format!("Submission Date: {}", record.submission_date),
        });
    }

    LayoutTree {
        layout: style.layout,
        decorative_elements: style.decorative_elements,
        font_family: style.font_family,
        body_size: style.font_size.body.clone(),
        primary_color: style.primary_color.clone(),
        accent_color: style.accent_color.clone(),
        background_color: style.background_color.clone(),
        border_style: style.border_style.clone(),
        blocks,
    }
}
