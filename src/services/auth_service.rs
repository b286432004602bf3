// ============================================================================
// AUTH SERVICE - SOLO comunicación HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP contra el backend
// de cuentas. El viewmodel decide qué hacer con las respuestas.
// ============================================================================

use gloo_net::http::Request;

use crate::config::CONFIG;
use crate::models::auth::{IdentityResponse, TokenPair, TokenRequest};
use crate::services::error::AuthError;

/// Cliente del backend de cuentas
#[derive(Clone)]
pub struct AuthService {
    base_url: String,
}

impl AuthService {
    pub fn new() -> Self {
        Self {
            base_url: CONFIG.api_base_url.clone(),
        }
    }

    /// Usar otra URL base (consumidores embebidos en otra app)
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Intercambiar credenciales por un par access/refresh
    pub async fn request_token(
        &self,
        username: &str,
        password: &str,
    ) -> Result<TokenPair, AuthError> {
        let url = format!("{}/api/accounts/token/", self.base_url);
        let body = TokenRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        let response = Request::post(&url)
            .json(&body)
            .map_err(|e| AuthError::Network(format!("Request build error: {}", e)))?
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(AuthError::Http {
                status: response.status(),
            });
        }

        response
            .json::<TokenPair>()
            .await
            .map_err(|e| AuthError::InvalidResponse(e.to_string()))
    }

    /// Pedir al servidor la identidad asociada al access token ("who am I")
    pub async fn fetch_identity(&self, access_token: &str) -> Result<IdentityResponse, AuthError> {
        let url = format!("{}/api/accounts/me/", self.base_url);
        let bearer = format!("Bearer {}", access_token);

        let response = Request::get(&url)
            .header("Authorization", &bearer)
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(AuthError::Http {
                status: response.status(),
            });
        }

        response
            .json::<IdentityResponse>()
            .await
            .map_err(|e| AuthError::InvalidResponse(e.to_string()))
    }
}

impl Default for AuthService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_configured_base_url() {
        let service = AuthService::new();
        assert_eq!(service.base_url(), "/manager");
    }

    #[test]
    fn with_base_url_trims_trailing_slash() {
        let service = AuthService::with_base_url("https://codex.example.com/manager/");
        assert_eq!(service.base_url(), "https://codex.example.com/manager");
    }
}
