use tera::{Context, Tera};

use coverforge_core::projection::LayoutTree;

use crate::error::ExportError;

const TEMPLATE_NAME: &str = "cover_page";
const TEMPLATE: &str = include_str!("../templates/cover_page.html.tera");

/// Render a projected layout tree into the HTML preview surface.
///
/// The tree's fields become the template context variables via serde_json.
pub fn render_surface(tree: &LayoutTree) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(TEMPLATE_NAME, TEMPLATE)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(tree)?;
    let context = Context::from_value(value)
        .map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(TEMPLATE_NAME, &context)?;
    Ok(rendered)
}
