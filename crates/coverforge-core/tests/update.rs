use coverforge_core::fields::{FieldPath, LOGO_DIMENSION_FALLBACK};
use coverforge_core::models::{CoverPageData, VisibleField};

#[test]
fn field_update_is_local() {
    let record = CoverPageData::default();
    let updated = record.with_field(FieldPath::parse("projectTitle").unwrap(), "Compilers Lab");

    assert_eq!(updated.project_title, "Compilers Lab");

    // Everything off the path is untouched.
    assert_eq!(updated.institution_name, record.institution_name);
    assert_eq!(updated.course_code, record.course_code);
    assert_eq!(updated.submitted_by, record.submitted_by);
    assert_eq!(updated.submitted_to, record.submitted_to);
    assert_eq!(updated.applied_style, record.applied_style);
    assert_eq!(updated.visibility, record.visibility);
}

#[test]
fn nested_update_leaves_siblings_unchanged() {
    let record = CoverPageData::default();
    let updated = record.with_field(FieldPath::parse("submittedBy.id").unwrap(), "22-12345");

    assert_eq!(updated.submitted_by.id, "22-12345");
    assert_eq!(updated.submitted_by.name, record.submitted_by.name);
    assert_eq!(updated.submitted_by.section, record.submitted_by.section);
    assert_eq!(updated.submitted_to, record.submitted_to);
}

#[test]
fn every_known_path_parses() {
    for path in [
        "institutionName",
        "logoUrl",
        "logoWidth",
        "logoHeight",
        "documentType",
        "courseCode",
        "courseTitle",
        "projectTitle",
        "submissionDate",
        "submittedBy.name",
        "submittedBy.id",
        "submittedBy.section",
        "submittedBy.program",
        "submittedTo.name",
        "submittedTo.designation",
        "submittedTo.department",
        "submittedTo.institution",
    ] {
        assert!(FieldPath::parse(path).is_ok(), "path {path} should parse");
    }
}

#[test]
fn unknown_path_is_an_error() {
    assert!(FieldPath::parse("appliedStyle.layout").is_err());
    assert!(FieldPath::parse("visibility.logo").is_err());
    assert!(FieldPath::parse("submittedBy.email").is_err());
    assert!(FieldPath::parse("").is_err());
}

#[test]
fn non_numeric_logo_dimensions_fall_back_to_default() {
    let record = CoverPageData::default();
    let width_path = FieldPath::parse("logoWidth").unwrap();

    assert_eq!(record.with_field(width_path, "abc").logo_width, LOGO_DIMENSION_FALLBACK);
    assert_eq!(record.with_field(width_path, "").logo_width, LOGO_DIMENSION_FALLBACK);
    assert_eq!(record.with_field(width_path, "-40").logo_width, LOGO_DIMENSION_FALLBACK);
    assert_eq!(record.with_field(width_path, "0").logo_width, LOGO_DIMENSION_FALLBACK);

    let height_path = FieldPath::parse("logoHeight").unwrap();
    assert_eq!(record.with_field(height_path, "200").logo_height, 200);
    assert_eq!(record.with_field(height_path, " 96 ").logo_height, 96);
}

#[test]
fn visibility_toggle_is_independent() {
    let record = CoverPageData::default();
    let updated = record.with_visibility(VisibleField::CourseCode, false);

    assert!(!updated.visibility.course_code);
    assert!(updated.visibility.course_title);
    assert!(updated.visibility.logo);
    assert!(updated.visibility.submission_date);

    // Content fields are untouched.
    assert_eq!(updated.course_code, record.course_code);
    assert_eq!(updated.project_title, record.project_title);

    // Toggling back restores the original state.
    let restored = updated.with_visibility(VisibleField::CourseCode, true);
    assert_eq!(restored.visibility, record.visibility);
}

#[test]
fn unknown_visibility_field_is_an_error() {
    assert!(VisibleField::parse("submittedByName").is_ok());
    assert!(VisibleField::parse("watermark").is_err());
}

#[test]
fn logo_reference_is_stored_verbatim() {
    let record = CoverPageData::default();
    let data_url = "data:image/png;base64,iVBORw0KGgo=";
    let updated = record.with_logo(data_url);

    assert_eq!(updated.logo_url, data_url);
    assert_eq!(updated.logo_width, record.logo_width);
}
