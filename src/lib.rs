// ============================================================================
// CODEX AUTH - Login, navegación y perfil para la plataforma SMART METRO Codex
// ============================================================================
// Arquitectura MVVM:
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: Estado + Lógica de autenticación
// - Services: SOLO comunicación API
// - State: State Management con Rc<RefCell> + notificaciones
// - Models: Estructuras compartidas con backend
// ============================================================================

pub mod config;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;
pub mod views;
pub mod dom;
pub mod app;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::app::App;

// Variable estática global para mantener la instancia de App
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Inicializar panic hook para mejor debugging
    console_error_panic_hook::set_once();

    // Inicializar logging
    if config::CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::default());
    }
    log::info!("🚀 Codex Auth - login + sesión JWT");

    // Crear y renderizar app
    let mut app = App::new()?;
    app.render()?;

    // Guardar app en variable global
    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Re-renderizar la aplicación completa (la dispara el estado de sesión)
pub fn rerender_app() {
    APP.with(|app_cell| {
        if let Some(app) = app_cell.borrow_mut().as_mut() {
            if let Err(e) = app.render() {
                log::error!("❌ Error re-renderizando la app: {:?}", e);
            }
        }
    });
}
