use coverforge_core::models::{CoverPageData, VisibleField};
use coverforge_core::projection::project;
use coverforge_export::render::render_surface;

#[test]
fn surface_contains_visible_content() {
    let record = CoverPageData::default();
    let html = render_surface(&project(&record)).unwrap();

    assert!(html.contains("University of Excellence"));
    assert!(html.contains("Dynamic Cover Page Generator"));
    assert!(html.contains("Submitted By:"));
    assert!(html.contains("Submission Date:"));
    assert!(html.contains("layout-centered"));
    assert!(html.contains("font-serif"));
}

#[test]
fn hidden_fields_do_not_render() {
    let record = CoverPageData::default()
        .with_visibility(VisibleField::InstitutionName, false)
        .with_visibility(VisibleField::SubmissionDate, false);
    let html = render_surface(&project(&record)).unwrap();

    assert!(!html.contains("University of Excellence"));
    assert!(!html.contains("Submission Date:"));
    assert!(html.contains("Dynamic Cover Page Generator"));
}

#[test]
fn decorations_follow_the_style_bundle() {
    // classic-1 is decorated.
    let decorated = render_surface(&project(&CoverPageData::default())).unwrap();
    assert!(decorated.contains("ornament-top"));

    let plain_record = coverforge_presets::apply_preset(&CoverPageData::default(), "modern-3");
    let plain = render_surface(&project(&plain_record)).unwrap();
    assert!(!plain.contains("ornament-top"));
    assert!(plain.contains("layout-left"));
}
