#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eyre::Result;

mod commands;
mod state;

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tauri::Builder::default()
        .manage(state::SessionState::default())
        .invoke_handler(tauri::generate_handler![
            commands::get_document,
            commands::list_presets,
            commands::presets_in_category,
            commands::select_preset,
            commands::set_field,
            commands::set_visibility,
            commands::set_logo,
            commands::render_preview,
            commands::export_pdf,
            commands::export_image,
        ])
        .run(tauri::generate_context!())
        .map_err(|e| eyre::eyre!("tauri error: {e}"))?;

    Ok(())
}
