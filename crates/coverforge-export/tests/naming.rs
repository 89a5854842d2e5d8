use coverforge_export::naming::{export_base_name, export_file_name};

#[test]
fn whitespace_runs_collapse_to_single_underscores() {
    assert_eq!(
        export_base_name("Dynamic Cover Page Generator"),
        "Dynamic_Cover_Page_Generator"
    );
    assert_eq!(export_base_name("  Two   Words \t Here "), "Two_Words_Here");
    assert_eq!(export_base_name("Single"), "Single");
}

#[test]
fn empty_title_falls_back() {
    assert_eq!(export_base_name(""), "cover_page");
    assert_eq!(export_base_name("   "), "cover_page");
}

#[test]
fn file_name_adds_suffix_and_extension() {
    assert_eq!(
        export_file_name("Dynamic Cover Page Generator", "pdf"),
        "Dynamic_Cover_Page_Generator_cover.pdf"
    );
    assert_eq!(export_file_name("My Report", "webp"), "My_Report_cover.webp");
}
