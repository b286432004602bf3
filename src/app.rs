// ============================================================================
// APP - Aplicación principal
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, get_element_by_id, set_inner_html};
use crate::state::session_state::SessionState;
use crate::viewmodels::AuthViewModel;
use crate::views::render_app;

/// Aplicación principal
pub struct App {
    state: SessionState,
    viewmodel: AuthViewModel,
    root: Option<Element>,
}

impl App {
    /// Crear nueva aplicación
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = SessionState::new();
        let viewmodel = AuthViewModel::new(state.clone());

        // Reconciliación inicial: ¿hay una sesión guardada y sigue válida?
        {
            let vm = viewmodel.clone();
            spawn_local(async move {
                vm.check_auth().await;
            });
        }

        // Suscribirse a cambios de sesión para re-renderizar automáticamente
        state.subscribe(move || {
            // Batchear múltiples updates con un timeout de 0ms
            use gloo_timers::callback::Timeout;
            Timeout::new(0, move || {
                crate::rerender_app();
            })
            .forget();
        });

        Ok(Self {
            state,
            viewmodel,
            root: Some(root),
        })
    }

    /// Renderizar aplicación
    pub fn render(&mut self) -> Result<(), JsValue> {
        if let Some(root) = &self.root {
            // Limpiar contenido anterior
            set_inner_html(root, "");

            let app_view = render_app(&self.viewmodel)?;
            append_child(root, &app_view)?;
        }
        Ok(())
    }

    /// Obtener referencia al estado de sesión
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Obtener referencia al viewmodel de autenticación
    pub fn viewmodel(&self) -> &AuthViewModel {
        &self.viewmodel
    }
}
