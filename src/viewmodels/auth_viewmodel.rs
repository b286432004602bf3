// ============================================================================
// AUTH VIEWMODEL - LÓGICA DE AUTENTICACIÓN
// ============================================================================
// Login, logout y la reconciliación inicial de sesión. Las vistas llaman acá;
// el estado compartido notifica a quien esté suscrito.
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use crate::services::{AuthError, AuthService};
use crate::state::session_state::SessionState;
use crate::utils::cookies::{
    get_cookie, remove_cookie, set_cookie, ACCESS_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE,
};
use crate::utils::jwt::get_user_from_token;

/// ViewModel de autenticación. Los clones comparten estado y contador de
/// requests, así un logout invalida cualquier request que siga en vuelo.
#[derive(Clone)]
pub struct AuthViewModel {
    service: AuthService,
    state: SessionState,
    // Contador de vida: cada request lo sube al arrancar y lo compara antes
    // de escribir estado. Una respuesta con contador viejo se descarta.
    epoch: Rc<Cell<u64>>,
}

impl AuthViewModel {
    pub fn new(state: SessionState) -> Self {
        Self::with_service(AuthService::new(), state)
    }

    pub fn with_service(service: AuthService, state: SessionState) -> Self {
        Self {
            service,
            state,
            epoch: Rc::new(Cell::new(0)),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    fn begin_request(&self) -> u64 {
        let epoch = self.epoch.get() + 1;
        self.epoch.set(epoch);
        epoch
    }

    fn is_current(&self, epoch: u64) -> bool {
        self.epoch.get() == epoch
    }

    /// Login contra el endpoint de tokens. El único efecto durable son las
    /// cookies; cualquier fallo se traga y se reporta solo por el resultado.
    pub async fn try_login(&self, username: &str, password: &str) -> Result<(), AuthError> {
        let epoch = self.begin_request();

        let pair = self.service.request_token(username, password).await?;

        // Validar localmente antes de persistir nada
        let user = match get_user_from_token(&pair.access) {
            Some(user) => user,
            None => {
                log::error!("❌ El endpoint de tokens devolvió un access token inválido");
                return Err(AuthError::InvalidToken);
            }
        };

        if !self.is_current(epoch) {
            // Hubo un logout (o un login más nuevo) mientras esperábamos
            log::info!("🗑️ Respuesta de login descartada: sesión invalidada en vuelo");
            return Err(AuthError::InvalidToken);
        }

        if let Err(e) = set_cookie(ACCESS_TOKEN_COOKIE, &pair.access) {
            log::warn!("⚠️ {}", e);
        }
        if let Err(e) = set_cookie(REFRESH_TOKEN_COOKIE, &pair.refresh) {
            log::warn!("⚠️ {}", e);
        }

        log::info!("✅ Login exitoso para {}", user.username);
        self.state.set_authenticated(user);
        Ok(())
    }

    /// Login simplificado: true si la sesión quedó autenticada
    pub async fn login(&self, username: &str, password: &str) -> bool {
        match self.try_login(username, password).await {
            Ok(()) => true,
            Err(e) => {
                log::error!("❌ Error en login: {}", e);
                false
            }
        }
    }

    /// Logout - borra cookies y deja la sesión anónima. Idempotente.
    pub fn logout(&self) {
        // Invalidar cualquier request en vuelo
        self.epoch.set(self.epoch.get() + 1);

        remove_cookie(ACCESS_TOKEN_COOKIE);
        remove_cookie(REFRESH_TOKEN_COOKIE);
        self.state.set_anonymous();
        log::info!("👋 Sesión cerrada");
    }

    /// Reconciliación inicial: chequeo local de expiración y después
    /// confirmación contra el servidor. Corre una vez al montar la app.
    pub async fn check_auth(&self) {
        let epoch = self.begin_request();
        self.state.set_unknown();

        let access = match get_cookie(ACCESS_TOKEN_COOKIE) {
            Some(token) => token,
            None => {
                // Sin cookie no hay nada que validar (ni round trip al server)
                self.state.set_anonymous();
                return;
            }
        };

        // Chequeo local primero: un token ya expirado no amerita red
        if get_user_from_token(&access).is_none() {
            remove_cookie(ACCESS_TOKEN_COOKIE);
            remove_cookie(REFRESH_TOKEN_COOKIE);
            self.state.set_anonymous();
            return;
        }

        match self.service.fetch_identity(&access).await {
            Ok(identity) => {
                if !self.is_current(epoch) {
                    log::info!("🗑️ Identidad descartada: sesión invalidada en vuelo");
                    return;
                }
                // Los datos del servidor mandan: pueden ser más frescos que
                // los claims del token
                self.state.set_authenticated(identity.into_user());
            }
            Err(e) => {
                log::warn!("⚠️ El servidor rechazó el token: {}", e);
                if !self.is_current(epoch) {
                    return;
                }
                remove_cookie(ACCESS_TOKEN_COOKIE);
                remove_cookie(REFRESH_TOKEN_COOKIE);
                self.state.set_anonymous();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::session_state::SessionStatus;

    #[test]
    fn logout_is_idempotent() {
        let state = SessionState::new();
        let vm = AuthViewModel::new(state.clone());

        vm.logout();
        assert_eq!(state.status(), SessionStatus::Anonymous);

        // Segunda vez: sin error, mismo estado
        vm.logout();
        assert_eq!(state.status(), SessionStatus::Anonymous);
        assert!(state.user().is_none());
    }

    #[test]
    fn clones_share_session_state() {
        let state = SessionState::new();
        let vm = AuthViewModel::new(state.clone());
        let vm_clone = vm.clone();

        vm_clone.logout();
        assert_eq!(vm.state().status(), SessionStatus::Anonymous);
    }
}
