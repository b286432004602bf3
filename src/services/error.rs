use thiserror::Error;

/// Errores del servicio de autenticación
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AuthError {
    #[error("Error de red: {0}")]
    Network(String),

    #[error("HTTP {status}")]
    Http { status: u16 },

    #[error("Respuesta inválida: {0}")]
    InvalidResponse(String),

    #[error("El token recibido es inválido o está expirado")]
    InvalidToken,
}

impl AuthError {
    /// El servidor rechazó las credenciales (vs. un fallo de transporte)
    pub fn is_invalid_credentials(&self) -> bool {
        matches!(self, AuthError::Http { status: 400 | 401 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_rejections_are_distinguished() {
        assert!(AuthError::Http { status: 401 }.is_invalid_credentials());
        assert!(AuthError::Http { status: 400 }.is_invalid_credentials());
        assert!(!AuthError::Http { status: 500 }.is_invalid_credentials());
        assert!(!AuthError::Network("timeout".to_string()).is_invalid_credentials());
        assert!(!AuthError::InvalidToken.is_invalid_credentials());
    }
}
