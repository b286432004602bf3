// ============================================================================
// NAVIGATION VIEW - Barra de navegación con logo, links y perfil
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::models::nav::NavLink;
use crate::viewmodels::AuthViewModel;
use crate::views::profile_dropdown::render_profile_dropdown;

/// Renderizar la barra de navegación. Sin estado propio: todo entra por
/// parámetros y la identidad la resuelve el profile dropdown.
pub fn render_navigation(
    vm: &AuthViewModel,
    logo: Option<Element>,
    logo_href: Option<&str>,
    links: &[NavLink],
    on_login_click: Rc<dyn Fn()>,
) -> Result<Element, JsValue> {
    let nav = ElementBuilder::new("nav")?
        .class("codex-auth-navigation")
        .build();

    let container = ElementBuilder::new("div")?
        .class("codex-auth-nav-container")
        .build();

    // Logo
    let logo_section = ElementBuilder::new("div")?
        .class("codex-auth-nav-logo")
        .build();
    if let Some(logo) = logo {
        match logo_href {
            Some(href) => {
                let link = ElementBuilder::new("a")?
                    .class("codex-auth-logo-link")
                    .attr("href", href)?
                    .child(logo)?
                    .build();
                append_child(&logo_section, &link)?;
            }
            None => append_child(&logo_section, &logo)?,
        }
    }

    // Links
    let links_section = ElementBuilder::new("div")?
        .class("codex-auth-nav-links")
        .build();
    for link in links {
        let class = if link.active {
            "codex-auth-nav-link active"
        } else {
            "codex-auth-nav-link"
        };
        let anchor = ElementBuilder::new("a")?
            .class(class)
            .attr("href", &link.href)?
            .text(&link.label)
            .build();
        append_child(&links_section, &anchor)?;
    }

    // Perfil
    let profile_section = ElementBuilder::new("div")?
        .class("codex-auth-nav-profile")
        .build();
    append_child(
        &profile_section,
        &render_profile_dropdown(vm, on_login_click)?,
    )?;

    append_child(&container, &logo_section)?;
    append_child(&container, &links_section)?;
    append_child(&container, &profile_section)?;
    append_child(&nav, &container)?;

    Ok(nav)
}
