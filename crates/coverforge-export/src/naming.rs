//! Export file naming.
//!
//! The only externally observable naming contract: the base name is the
//! current project title with whitespace runs collapsed to single
//! underscores.

/// Derive the export base name from a project title.
/// "Dynamic Cover Page Generator" → "Dynamic_Cover_Page_Generator".
pub fn export_base_name(project_title: &str) -> String {
    let collapsed = project_title.split_whitespace().collect::<Vec<_>>().join("_");
    if collapsed.is_empty() {
        "cover_page".to_string()
    } else {
        collapsed
    }
}

/// Full file name for an export, e.g. "My_Project_cover.pdf".
pub fn export_file_name(project_title: &str, extension: &str) -> String {
    format!("{}_cover.{extension}", export_base_name(project_title))
}
