// ============================================================================
// LOGIN MODAL VIEW - Formulario de login en modal
// ============================================================================
// Siempre presente en el DOM; la visibilidad se controla con la clase "open"
// (mismo esquema que el resto de los modales). El estado del formulario es
// local a los closures del render.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement};

use crate::dom::{
    add_class, append_child, get_element_by_id, on_click, on_input, on_submit, remove_attribute,
    remove_class, set_attribute, set_text_content, ElementBuilder,
};
use crate::viewmodels::AuthViewModel;

pub const LOGIN_MODAL_ID: &str = "codex-auth-login-modal";

const BAD_CREDENTIALS_MESSAGE: &str = "Invalid username or password";
const GENERIC_ERROR_MESSAGE: &str = "An error occurred. Please try again.";

/// Abrir el modal de login (si está montado)
pub fn open_login_modal() {
    if let Some(modal) = get_element_by_id(LOGIN_MODAL_ID) {
        if add_class(&modal, "open").is_err() {
            log::warn!("⚠️ No se pudo abrir el modal de login");
        }
    }
}

/// Renderizar el modal de login
pub fn render_login_modal(
    vm: &AuthViewModel,
    logo: Option<Element>,
    title: &str,
    subtitle: &str,
    on_success: Option<Rc<dyn Fn()>>,
) -> Result<Element, JsValue> {
    // Estado local del formulario (en closures)
    let username = Rc::new(RefCell::new(String::new()));
    let password = Rc::new(RefCell::new(String::new()));
    let submitting = Rc::new(RefCell::new(false));

    let overlay = ElementBuilder::new("div")?
        .id(LOGIN_MODAL_ID)?
        .class("codex-auth-modal-overlay")
        .build();

    let container = ElementBuilder::new("div")?
        .class("codex-auth-modal-container")
        .build();

    // El click dentro del contenido no cierra el modal
    on_click(&container, |e| e.stop_propagation())?;

    let close_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("codex-auth-modal-close")
        .html("&times;")
        .build();

    // Header
    let header = ElementBuilder::new("div")?
        .class("codex-auth-modal-header")
        .build();
    if let Some(logo) = logo {
        let logo_wrap = ElementBuilder::new("div")?
            .class("codex-auth-modal-logo")
            .child(logo)?
            .build();
        append_child(&header, &logo_wrap)?;
    }
    append_child(&header, &ElementBuilder::new("h1")?.text(title).build())?;
    append_child(&header, &ElementBuilder::new("p")?.text(subtitle).build())?;

    // Mensaje de error (oculto hasta que tenga la clase "show")
    let error_box = ElementBuilder::new("div")?
        .class("codex-auth-modal-error")
        .build();

    // Formulario
    let form = ElementBuilder::new("form")?
        .class("codex-auth-modal-form")
        .build();

    let (username_group, username_input) =
        form_group("username", "Username", "text", username.clone())?;
    set_attribute(&username_input, "autofocus", "")?;
    let (password_group, password_input) =
        form_group("password", "Password", "password", password.clone())?;

    let submit_btn = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("codex-auth-modal-submit")
        .text("Sign In")
        .build();

    append_child(&form, &username_group)?;
    append_child(&form, &password_group)?;
    append_child(&form, &submit_btn)?;

    // Cerrar: limpia campos y error, saca la clase "open"
    let handle_close: Rc<dyn Fn()> = {
        let overlay = overlay.clone();
        let error_box = error_box.clone();
        let username = username.clone();
        let password = password.clone();
        let username_input = username_input.clone();
        let password_input = password_input.clone();
        Rc::new(move || {
            username.borrow_mut().clear();
            password.borrow_mut().clear();
            clear_input(&username_input);
            clear_input(&password_input);
            hide_error(&error_box);
            let _ = remove_class(&overlay, "open");
        })
    };

    {
        let handle_close = handle_close.clone();
        on_click(&close_btn, move |_| handle_close())?;
    }
    {
        let handle_close = handle_close.clone();
        on_click(&overlay, move |_| handle_close())?;
    }

    // Submit: login contra el manager
    {
        let vm = vm.clone();
        let username = username.clone();
        let password = password.clone();
        let submitting = submitting.clone();
        let submit_btn = submit_btn.clone();
        let error_box = error_box.clone();
        let handle_close = handle_close.clone();

        on_submit(&form, move |e| {
            e.prevent_default();

            if *submitting.borrow() {
                return;
            }
            *submitting.borrow_mut() = true;
            hide_error(&error_box);
            set_text_content(&submit_btn, "Signing in...");
            let _ = set_attribute(&submit_btn, "disabled", "true");

            let vm = vm.clone();
            let username_val = username.borrow().clone();
            let password_val = password.borrow().clone();
            let submitting = submitting.clone();
            let submit_btn = submit_btn.clone();
            let error_box = error_box.clone();
            let handle_close = handle_close.clone();
            let on_success = on_success.clone();

            spawn_local(async move {
                match vm.try_login(&username_val, &password_val).await {
                    Ok(()) => {
                        handle_close();
                        if let Some(callback) = &on_success {
                            callback();
                        }
                    }
                    Err(e) => {
                        let message = if e.is_invalid_credentials() {
                            BAD_CREDENTIALS_MESSAGE
                        } else {
                            GENERIC_ERROR_MESSAGE
                        };
                        show_error(&error_box, message);
                    }
                }

                *submitting.borrow_mut() = false;
                set_text_content(&submit_btn, "Sign In");
                let _ = remove_attribute(&submit_btn, "disabled");
            });
        })?;
    }

    append_child(&container, &close_btn)?;
    append_child(&container, &header)?;
    append_child(&container, &error_box)?;
    append_child(&container, &form)?;
    append_child(&overlay, &container)?;

    Ok(overlay)
}

/// Helper para crear form group (label + input controlado)
fn form_group(
    id: &str,
    label_text: &str,
    input_type: &str,
    value: Rc<RefCell<String>>,
) -> Result<(Element, Element), JsValue> {
    let group = ElementBuilder::new("div")?
        .class("codex-auth-form-group")
        .build();

    let label = ElementBuilder::new("label")?
        .attr("for", id)?
        .text(label_text)
        .build();

    let input = ElementBuilder::new("input")?
        .id(id)?
        .attr("type", input_type)?
        .attr("name", id)?
        .attr("required", "")?
        .build();

    on_input(&input, move |e| {
        if let Some(target) = e
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        {
            *value.borrow_mut() = target.value();
        }
    })?;

    append_child(&group, &label)?;
    append_child(&group, &input)?;

    Ok((group, input))
}

fn clear_input(input: &Element) {
    if let Some(input) = input.dyn_ref::<HtmlInputElement>() {
        input.set_value("");
    }
}

fn show_error(error_box: &Element, message: &str) {
    set_text_content(error_box, message);
    if add_class(error_box, "show").is_err() {
        log::warn!("⚠️ No se pudo mostrar el error de login");
    }
}

fn hide_error(error_box: &Element) {
    set_text_content(error_box, "");
    let _ = remove_class(error_box, "show");
}
