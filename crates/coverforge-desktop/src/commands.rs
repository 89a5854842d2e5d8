use tauri::State;

use coverforge_core::fields::FieldPath;
use coverforge_core::models::{Category, CoverPageData, StylePreset, VisibleField};
use coverforge_core::projection::project;
use coverforge_export::encode::{RasterFormat, encode_raster};
use coverforge_export::naming::export_file_name;
use coverforge_export::pdf::package_pdf;
use coverforge_export::render::render_surface;

use crate::state::SessionState;

#[tauri::command]
pub async fn get_document(state: State<'_, SessionState>) -> Result<CoverPageData, String> {
    Ok(state.document.lock().await.clone())
}

#[tauri::command]
pub fn list_presets() -> Vec<StylePreset> {
    coverforge_presets::catalog().to_vec()
}

#[tauri::command]
pub fn presets_in_category(category: Category) -> Vec<StylePreset> {
    coverforge_presets::presets_by_category(category)
        .into_iter()
        .cloned()
        .collect()
}

/// Apply a preset by id. An unknown id leaves the record unchanged.
#[tauri::command]
pub async fn select_preset(
    state: State<'_, SessionState>,
    id: String,
) -> Result<CoverPageData, String> {
    let mut doc = state.document.lock().await;
    *doc = coverforge_presets::apply_preset(&doc, &id);
    Ok(doc.clone())
}

/// Update one scalar field addressed by its dotted path. All paths are wired
/// statically in the frontend, so an unknown path is a bug and surfaces as an
/// error rather than being repaired.
#[tauri::command]
pub async fn set_field(
    state: State<'_, SessionState>,
    path: String,
    value: String,
) -> Result<CoverPageData, String> {
    let path = FieldPath::parse(&path).map_err(|e| e.to_string())?;
    let mut doc = state.document.lock().await;
    *doc = doc.with_field(path, &value);
    Ok(doc.clone())
}

#[tauri::command]
pub async fn set_visibility(
    state: State<'_, SessionState>,
    field: String,
    shown: bool,
) -> Result<CoverPageData, String> {
    let field = VisibleField::parse(&field).map_err(|e| e.to_string())?;
    let mut doc = state.document.lock().await;
    *doc = doc.with_visibility(field, shown);
    Ok(doc.clone())
}

/// Store a picked logo reference (data-URL) verbatim.
#[tauri::command]
pub async fn set_logo(
    state: State<'_, SessionState>,
    data_url: String,
) -> Result<CoverPageData, String> {
    let mut doc = state.document.lock().await;
    *doc = doc.with_logo(&data_url);
    Ok(doc.clone())
}

/// Project the current record and render the HTML preview surface.
#[tauri::command]
pub async fn render_preview(state: State<'_, SessionState>) -> Result<String, String> {
    let doc = state.document.lock().await.clone();
    render_surface(&project(&doc)).map_err(|e| e.to_string())
}

/// Package the captured preview raster as an A4 PDF and save it. The file
/// name is snapshotted from the record before any dialog is shown, so later
/// edits cannot race the export.
#[tauri::command]
pub async fn export_pdf(
    state: State<'_, SessionState>,
    capture_png: Vec<u8>,
) -> Result<Option<String>, String> {
    let title = state.document.lock().await.project_title.clone();
    let bytes = package_pdf(&capture_png, &title).map_err(|e| e.to_string())?;
    save_with_dialog(&export_file_name(&title, "pdf"), "PDF", &["pdf"], &bytes).await
}

/// Re-encode the captured preview raster and save it as an image file.
#[tauri::command]
pub async fn export_image(
    state: State<'_, SessionState>,
    capture_png: Vec<u8>,
    format: String,
) -> Result<Option<String>, String> {
    let raster = RasterFormat::parse(&format)
        .ok_or_else(|| format!("unsupported image format: {format}"))?;
    let title = state.document.lock().await.project_title.clone();
    let bytes = encode_raster(&capture_png, raster).map_err(|e| e.to_string())?;
    save_with_dialog(
        &export_file_name(&title, raster.extension()),
        "Image",
        &[raster.extension()],
        &bytes,
    )
    .await
}

/// Prompt for a destination and write the export. `None` means the user
/// cancelled the dialog.
async fn save_with_dialog(
    file_name: &str,
    filter_name: &str,
    extensions: &[&str],
    bytes: &[u8],
) -> Result<Option<String>, String> {
    let picked = rfd::AsyncFileDialog::new()
        .set_file_name(file_name)
        .add_filter(filter_name, extensions)
        .save_file()
        .await;

    match picked {
        Some(handle) => {
            let path = handle.path().to_path_buf();
            tokio::fs::write(&path, bytes)
                .await
                .map_err(|e| format!("failed to write {}: {e}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = bytes.len(), "export saved");
            Ok(Some(path.display().to_string()))
        }
        None => Ok(None),
    }
}
