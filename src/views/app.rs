// ============================================================================
// APP VIEW - Home de la plataforma Codex
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::models::nav::NavLink;
use crate::viewmodels::AuthViewModel;
use crate::views::login_modal::{open_login_modal, render_login_modal};
use crate::views::logo::render_logo;
use crate::views::navigation::render_navigation;

const APP_TITLE: &str = "SMART METRO Codex";
const APP_SUBTITLE: &str = "Sign in to access all Codex applications";

/// Renderizar la aplicación completa: navegación, contenido y modal de login
pub fn render_app(vm: &AuthViewModel) -> Result<Element, JsValue> {
    let state = vm.state();

    let root = ElementBuilder::new("div")?.class("codex-home").build();

    // Manager solo aparece para usuarios autenticados
    let mut links = vec![
        NavLink::new("Digital Twin", "/twin"),
        NavLink::new("Insights", "/insights"),
    ];
    if state.is_authenticated() {
        links.push(NavLink::new("Manager", "/manager"));
    }

    let on_login_click: Rc<dyn Fn()> = Rc::new(open_login_modal);

    let nav = render_navigation(vm, Some(render_logo(40)?), Some("/"), &links, on_login_click)?;
    append_child(&root, &nav)?;

    // Contenido principal
    let main = ElementBuilder::new("main")?.class("codex-home-main").build();
    let content = ElementBuilder::new("div")?
        .class("codex-home-content")
        .build();

    append_child(&content, &ElementBuilder::new("h1")?.text("SMART METRO Codex Platform").build())?;

    if state.is_loading() {
        let loading = ElementBuilder::new("p")?
            .class("codex-home-loading")
            .text("Loading...")
            .build();
        append_child(&content, &loading)?;
    } else if let Some(user) = state.user() {
        let welcome = ElementBuilder::new("h2")?
            .text(&format!("Welcome, {}!", user.name))
            .build();
        append_child(&content, &welcome)?;

        let cards = ElementBuilder::new("div")?.class("codex-home-cards").build();
        append_child(
            &cards,
            &app_card("/twin", "Digital Twin", "Access the digital twin simulation platform")?,
        )?;
        append_child(
            &cards,
            &app_card("/insights", "Insights", "View analytics and insights dashboard")?,
        )?;
        append_child(
            &cards,
            &app_card("/manager", "Manager", "Access administrative controls")?,
        )?;
        append_child(&content, &cards)?;
    } else {
        let prompt = ElementBuilder::new("p")?
            .text("Please log in to access all Codex applications")
            .build();
        append_child(&content, &prompt)?;

        let login_btn = ElementBuilder::new("button")?
            .class("codex-home-login-button")
            .text("Login")
            .build();
        on_click(&login_btn, move |_| open_login_modal())?;
        append_child(&content, &login_btn)?;
    }

    append_child(&main, &content)?;
    append_child(&root, &main)?;

    // Modal de login (siempre montado, se abre con la clase "open")
    let on_success: Rc<dyn Fn()> = Rc::new(|| {
        log::info!("✅ Usuario logueado correctamente");
    });
    let modal = render_login_modal(
        vm,
        Some(render_logo(40)?),
        APP_TITLE,
        APP_SUBTITLE,
        Some(on_success),
    )?;
    append_child(&root, &modal)?;

    Ok(root)
}

/// Card de acceso a una aplicación de la plataforma
fn app_card(href: &str, title: &str, description: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("a")?
        .class("codex-home-card")
        .attr("href", href)?
        .child(ElementBuilder::new("h3")?.text(title).build())?
        .child(ElementBuilder::new("p")?.text(description).build())?
        .build())
}
