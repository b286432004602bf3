// ============================================================================
// PROFILE DROPDOWN VIEW - Avatar con iniciales + menú de usuario
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent, Node};

use crate::dom::{
    add_class, append_child, document, has_class, on_click, remove_class, ElementBuilder,
};
use crate::models::user::User;
use crate::viewmodels::AuthViewModel;

const ARROW_SVG: &str = r#"<svg width="12" height="12" viewBox="0 0 12 12" fill="none"><path d="M3 4.5L6 7.5L9 4.5" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round"/></svg>"#;

const LOGOUT_SVG: &str = r#"<svg width="16" height="16" viewBox="0 0 16 16" fill="none"><path d="M6 14H3C2.73478 14 2.48043 13.8946 2.29289 13.7071C2.10536 13.5196 2 13.2652 2 13V3C2 2.73478 2.10536 2.48043 2.29289 2.29289C2.48043 2.10536 2.73478 2 3 2H6M11 11L14 8M14 8L11 5M14 8H6" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round"/></svg>"#;

/// Iniciales para el avatar: primera letra de cada palabra, mayúsculas,
/// máximo dos. "U" si no hay de dónde sacarlas.
pub fn get_initials(name: &str) -> String {
    let initials: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(|c| c.to_uppercase())
        .take(2)
        .collect();

    if initials.is_empty() {
        "U".to_string()
    } else {
        initials
    }
}

/// Fuente de las iniciales: nombre, si no username, si no el placeholder
fn avatar_initials(user: &User) -> String {
    if !user.name.trim().is_empty() {
        get_initials(&user.name)
    } else {
        get_initials(&user.username)
    }
}

/// Renderizar el widget de perfil.
/// Anónimo: un avatar pelado que dispara el callback de login.
/// Autenticado: avatar con iniciales + dropdown con detalle y sign out.
pub fn render_profile_dropdown(
    vm: &AuthViewModel,
    on_login_click: Rc<dyn Fn()>,
) -> Result<Element, JsValue> {
    let user = match vm.state().user() {
        Some(user) => user,
        None => {
            let avatar = ElementBuilder::new("button")?
                .class("codex-auth-profile-avatar")
                .build();
            on_click(&avatar, move |_| on_login_click())?;
            return Ok(avatar);
        }
    };

    let initials = avatar_initials(&user);

    let container = ElementBuilder::new("div")?
        .class("codex-auth-profile-dropdown")
        .build();

    // Botón que abre/cierra el menú
    let button = ElementBuilder::new("button")?
        .class("codex-auth-profile-button")
        .attr("aria-haspopup", "true")?
        .attr("aria-expanded", "false")?
        .build();

    let avatar = ElementBuilder::new("div")?
        .class("codex-auth-profile-avatar")
        .text(&initials)
        .build();

    let arrow = ElementBuilder::new("span")?
        .class("codex-auth-dropdown-arrow")
        .html(ARROW_SVG)
        .build();

    append_child(&button, &avatar)?;
    append_child(&button, &arrow)?;

    let menu = render_menu(vm, &user, &initials)?;

    {
        let menu_clone = menu.clone();
        let arrow_clone = arrow.clone();
        let button_clone = button.clone();
        on_click(&button, move |_| {
            let open = has_class(&menu_clone, "open");
            let (menu_result, arrow_result) = if open {
                (
                    remove_class(&menu_clone, "open"),
                    remove_class(&arrow_clone, "open"),
                )
            } else {
                (
                    add_class(&menu_clone, "open"),
                    add_class(&arrow_clone, "open"),
                )
            };
            if menu_result.is_err() || arrow_result.is_err() {
                log::warn!("⚠️ No se pudo alternar el menú de perfil");
            }
            let _ = button_clone.set_attribute("aria-expanded", if open { "false" } else { "true" });
        })?;
    }

    append_child(&container, &button)?;
    append_child(&container, &menu)?;

    register_outside_close(&container, &menu, &arrow)?;

    Ok(container)
}

fn render_menu(vm: &AuthViewModel, user: &User, initials: &str) -> Result<Element, JsValue> {
    let menu = ElementBuilder::new("div")?
        .class("codex-auth-dropdown-menu")
        .build();

    // Header: avatar + nombre + email
    let header = ElementBuilder::new("div")?
        .class("codex-auth-dropdown-header")
        .build();

    let header_avatar = ElementBuilder::new("div")?
        .class("codex-auth-user-avatar")
        .text(initials)
        .build();

    let display_name = if user.name.trim().is_empty() {
        user.username.clone()
    } else {
        user.name.clone()
    };

    let info = ElementBuilder::new("div")?
        .class("codex-auth-user-info")
        .child(
            ElementBuilder::new("div")?
                .class("codex-auth-user-name")
                .text(&display_name)
                .build(),
        )?
        .child(
            ElementBuilder::new("div")?
                .class("codex-auth-user-email")
                .text(&user.email)
                .build(),
        )?
        .build();

    append_child(&header, &header_avatar)?;
    append_child(&header, &info)?;
    append_child(&menu, &header)?;
    append_child(&menu, &divider()?)?;

    // Detalle del usuario
    let content = ElementBuilder::new("div")?
        .class("codex-auth-dropdown-content")
        .build();

    append_child(&content, &detail_row("Username:", &user.username)?)?;
    append_child(&content, &detail_row("User Type:", &user.user_type)?)?;
    append_child(&content, &detail_row("ID:", &user.user_id.to_string())?)?;

    // Listas opcionales: ausente y vacía se tratan igual (no se renderizan)
    if let Some(units) = &user.assigned_units {
        if !units.is_empty() {
            append_child(&content, &assigned_list("Assigned Units:", units)?)?;
        }
    }
    if let Some(sectors) = &user.assigned_sectors {
        if !sectors.is_empty() {
            append_child(&content, &assigned_list("Assigned Sectors:", sectors)?)?;
        }
    }

    append_child(&menu, &content)?;
    append_child(&menu, &divider()?)?;

    // Sign out
    let logout_btn = ElementBuilder::new("button")?
        .class("codex-auth-logout-button")
        .html(LOGOUT_SVG)
        .build();
    let logout_label = ElementBuilder::new("span")?.text("Sign Out").build();
    append_child(&logout_btn, &logout_label)?;

    {
        let vm_clone = vm.clone();
        let menu_clone = menu.clone();
        on_click(&logout_btn, move |_| {
            let _ = remove_class(&menu_clone, "open");
            vm_clone.logout();
        })?;
    }

    append_child(&menu, &logout_btn)?;

    Ok(menu)
}

fn divider() -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class("codex-auth-dropdown-divider")
        .build())
}

fn detail_row(label: &str, value: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class("codex-auth-user-detail")
        .child(
            ElementBuilder::new("span")?
                .class("codex-auth-detail-label")
                .text(label)
                .build(),
        )?
        .child(
            ElementBuilder::new("span")?
                .class("codex-auth-detail-value")
                .text(value)
                .build(),
        )?
        .build())
}

fn assigned_list(label: &str, items: &[String]) -> Result<Element, JsValue> {
    let section = ElementBuilder::new("div")?
        .class("codex-auth-assigned-section")
        .child(
            ElementBuilder::new("span")?
                .class("codex-auth-detail-label")
                .text(label)
                .build(),
        )?
        .build();

    let list = ElementBuilder::new("ul")?
        .class("codex-auth-assigned-list")
        .build();
    for item in items {
        append_child(&list, &ElementBuilder::new("li")?.text(item).build())?;
    }
    append_child(&section, &list)?;

    Ok(section)
}

/// Cerrar el menú con cualquier mousedown fuera del dropdown. El listener es
/// global (document), así que NO se puede olvidar: se guarda el closure y se
/// auto-remueve cuando el dropdown sale del DOM.
fn register_outside_close(
    container: &Element,
    menu: &Element,
    arrow: &Element,
) -> Result<(), JsValue> {
    let cell: Rc<RefCell<Option<Closure<dyn FnMut(MouseEvent)>>>> = Rc::new(RefCell::new(None));

    let container_clone = container.clone();
    let menu_clone = menu.clone();
    let arrow_clone = arrow.clone();
    let cell_clone = cell.clone();

    let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
        if !container_clone.is_connected() {
            // El dropdown ya no existe: dar de baja este listener global.
            // El drop del closure se difiere porque todavía está ejecutando.
            if let Some(doc) = document() {
                if let Some(closure) = cell_clone.borrow_mut().take() {
                    let _ = doc.remove_event_listener_with_callback(
                        "mousedown",
                        closure.as_ref().unchecked_ref(),
                    );
                    gloo_timers::callback::Timeout::new(0, move || drop(closure)).forget();
                }
            }
            return;
        }

        let target = event
            .target()
            .and_then(|t| t.dyn_into::<Node>().ok());
        let inside = match &target {
            Some(node) => container_clone.contains(Some(node)),
            None => false,
        };

        if !inside {
            let _ = remove_class(&menu_clone, "open");
            let _ = remove_class(&arrow_clone, "open");
        }
    }) as Box<dyn FnMut(MouseEvent)>);

    if let Some(doc) = document() {
        doc.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())?;
    }
    *cell.borrow_mut() = Some(closure);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_named(name: &str, username: &str) -> User {
        User {
            user_id: 1,
            username: username.to_string(),
            email: "u@x.com".to_string(),
            name: name.to_string(),
            user_type: "user".to_string(),
            assigned_units: None,
            assigned_sectors: None,
        }
    }

    #[test]
    fn initials_take_first_two_words() {
        assert_eq!(get_initials("Alice Bob Carol"), "AB");
        assert_eq!(get_initials("Alice"), "A");
        assert_eq!(get_initials("alice bob"), "AB");
    }

    #[test]
    fn initials_fall_back_to_placeholder() {
        assert_eq!(get_initials(""), "U");
        assert_eq!(get_initials("   "), "U");
    }

    #[test]
    fn avatar_prefers_name_then_username() {
        assert_eq!(avatar_initials(&user_named("Alice Bob", "zeta")), "AB");
        assert_eq!(avatar_initials(&user_named("", "zeta")), "Z");
        assert_eq!(avatar_initials(&user_named("", "")), "U");
        assert_eq!(avatar_initials(&user_named("  ", "zeta")), "Z");
    }
}
