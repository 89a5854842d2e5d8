use coverforge_core::models::{CoverPageData, Layout, VisibleField};
use coverforge_core::projection::{Block, project};

#[test]
fn default_record_projects_all_fields() {
    let record = CoverPageData {
        logo_url: "logo.png".to_string(),
        ..CoverPageData::default()
    };
    let tree = project(&record);

    assert!(matches!(
        &tree.blocks[0],
        Block::Heading { text, .. } if text == "University of Excellence"
    ));
    assert!(tree.blocks.iter().any(|b| matches!(b, Block::Logo { .. })));
    assert!(tree.blocks.iter().any(
        |b| matches!(b, Block::Banner { text, .. } if text == "Project Report")
    ));
    assert!(tree.blocks.iter().any(|b| matches!(b, Block::DateFooter { .. })));
}

#[test]
fn hidden_field_is_omitted() {
    let record = CoverPageData::default().with_visibility(VisibleField::DocumentType, false);
    let tree = project(&record);

    assert!(!tree.blocks.iter().any(|b| matches!(b, Block::Banner { .. })));
    // Siblings still render.
    assert!(tree.blocks.iter().any(|b| matches!(b, Block::Heading { .. })));
}

#[test]
fn missing_logo_is_an_omission_not_a_placeholder() {
    // Default record has an empty logo reference; visible or not, no logo
    // block appears.
    let tree = project(&CoverPageData::default());
    assert!(!tree.blocks.iter().any(|b| matches!(b, Block::Logo { .. })));
}

#[test]
fn hidden_panel_lines_are_dropped_but_panel_remains() {
    let record = CoverPageData::default()
        .with_visibility(VisibleField::SubmittedById, false)
        .with_visibility(VisibleField::SubmittedBySection, false);
    let tree = project(&record);

    let by_panel = tree
        .blocks
        .iter()
        .find_map(|b| match b {
            Block::PartyPanel { title, lines, .. } if title == "Submitted By:" => Some(lines),
            _ => None,
        })
        .expect("submitter panel present");

    assert_eq!(by_panel.len(), 2);
    assert!(by_panel.iter().all(|line| !line.starts_with("ID:")));
    assert!(by_panel.contains(&"John Doe".to_string()));
}

#[test]
fn layout_and_decoration_follow_applied_style() {
    let record = CoverPageData::default();
    let tree = project(&record);

    assert_eq!(tree.layout, Layout::Centered);
    assert!(tree.decorative_elements);
    assert_eq!(tree.primary_color, "text-blue-800");
    assert_eq!(tree.body_size, "text-base");
}

#[test]
fn projection_is_pure() {
    let record = CoverPageData::default();
    assert_eq!(project(&record), project(&record));
}
