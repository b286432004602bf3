// ============================================================================
// SESSION STATE - Estado de sesión de autenticación
// ============================================================================

use crate::models::user::User;
use crate::state::reactivity::ReactiveState;

/// Lo que el cliente cree sobre "quién está logueado".
/// Unknown equivale a "cargando": todavía no reconciliamos con el servidor.
#[derive(Clone, PartialEq, Debug)]
pub enum SessionStatus {
    Unknown,
    Authenticated(User),
    Anonymous,
}

/// Handle clonable al estado de sesión. Los consumidores guardan una
/// referencia y se suscriben a los cambios; nunca hay un singleton.
#[derive(Clone)]
pub struct SessionState {
    status: ReactiveState<SessionStatus>,
}

impl SessionState {
    /// Crear nuevo estado de sesión (arranca en Unknown)
    pub fn new() -> Self {
        Self {
            status: ReactiveState::new(SessionStatus::Unknown),
        }
    }

    /// Obtener el estado actual
    pub fn status(&self) -> SessionStatus {
        self.status.with(|s| s.clone())
    }

    /// Todavía no sabemos si hay sesión (reconciliación en curso)
    pub fn is_loading(&self) -> bool {
        self.status.with(|s| matches!(s, SessionStatus::Unknown))
    }

    pub fn is_authenticated(&self) -> bool {
        self.status
            .with(|s| matches!(s, SessionStatus::Authenticated(_)))
    }

    /// Usuario confirmado, si lo hay
    pub fn user(&self) -> Option<User> {
        self.status.with(|s| match s {
            SessionStatus::Authenticated(user) => Some(user.clone()),
            _ => None,
        })
    }

    pub fn set_unknown(&self) {
        self.status.set(SessionStatus::Unknown);
    }

    pub fn set_authenticated(&self, user: User) {
        self.status.set(SessionStatus::Authenticated(user));
    }

    pub fn set_anonymous(&self) {
        self.status.set(SessionStatus::Anonymous);
    }

    /// Suscribirse a cambios de sesión
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.status.subscribe(callback);
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn test_user() -> User {
        User {
            user_id: 7,
            username: "alice".to_string(),
            email: "a@x.com".to_string(),
            name: "Alice A".to_string(),
            user_type: "admin".to_string(),
            assigned_units: None,
            assigned_sectors: None,
        }
    }

    #[test]
    fn starts_unknown_and_loading() {
        let state = SessionState::new();
        assert_eq!(state.status(), SessionStatus::Unknown);
        assert!(state.is_loading());
        assert!(!state.is_authenticated());
        assert!(state.user().is_none());
    }

    #[test]
    fn authenticated_exposes_user() {
        let state = SessionState::new();
        state.set_authenticated(test_user());
        assert!(state.is_authenticated());
        assert!(!state.is_loading());
        assert_eq!(state.user().unwrap().username, "alice");
    }

    #[test]
    fn anonymous_clears_user() {
        let state = SessionState::new();
        state.set_authenticated(test_user());
        state.set_anonymous();
        assert!(!state.is_authenticated());
        assert!(!state.is_loading());
        assert!(state.user().is_none());
    }

    #[test]
    fn user_is_replaced_wholesale() {
        let state = SessionState::new();
        state.set_authenticated(test_user());

        let mut other = test_user();
        other.user_id = 8;
        other.name = "Alicia".to_string();
        state.set_authenticated(other);

        let user = state.user().unwrap();
        assert_eq!(user.user_id, 8);
        assert_eq!(user.name, "Alicia");
    }

    #[test]
    fn transitions_notify_shared_subscribers() {
        let state = SessionState::new();
        let handle = state.clone();

        let fired = Rc::new(Cell::new(0));
        let fired_clone = fired.clone();
        state.subscribe(move || fired_clone.set(fired_clone.get() + 1));

        handle.set_authenticated(test_user());
        handle.set_anonymous();

        assert_eq!(fired.get(), 2);
        assert!(!state.is_authenticated());
    }
}
