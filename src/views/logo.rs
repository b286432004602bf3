// ============================================================================
// LOGO VIEW
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;

/// Renderizar el logo de la plataforma
pub fn render_logo(height: u32) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("img")?
        .class("codex-auth-logo")
        .attr("src", "/assets/codex-logo.png")?
        .attr("alt", "SMART METRO Codex Logo")?
        .attr("height", &height.to_string())?
        .build())
}
