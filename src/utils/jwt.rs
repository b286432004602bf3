// ============================================================================
// JWT - Decodificación del payload SIN verificar firma
// ============================================================================
// La verificación criptográfica es responsabilidad del servidor; aquí solo
// leemos los claims para mostrar la identidad y chequear la expiración local.
// ============================================================================

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;

use crate::models::auth::TokenClaims;
use crate::models::user::User;

/// Decodificar los claims del segmento payload de un JWT
pub fn decode_claims(token: &str) -> Result<TokenClaims, String> {
    let mut segments = token.split('.');
    let payload = match (segments.next(), segments.next(), segments.next()) {
        (Some(_header), Some(payload), Some(_signature)) => payload,
        _ => return Err("El token no tiene formato JWT".to_string()),
    };

    if segments.next().is_some() {
        return Err("El token tiene segmentos de más".to_string());
    }

    // Algunos emisores rellenan con '=' aunque el estándar no lo lleva
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| format!("Error decodificando base64: {}", e))?;

    serde_json::from_slice(&bytes).map_err(|e| format!("Error parseando claims: {}", e))
}

/// Extraer el usuario de un access token, o None si está expirado o es inválido.
/// Nunca propaga el error de decodificación hacia afuera.
pub fn get_user_from_token(token: &str) -> Option<User> {
    let claims = match decode_claims(token) {
        Ok(claims) => claims,
        Err(e) => {
            log::error!("❌ Error decodificando token: {}", e);
            return None;
        }
    };

    let now = chrono::Utc::now().timestamp();
    if claims.exp < now {
        return None;
    }

    Some(User {
        user_id: claims.user_id,
        username: claims.username,
        email: claims.email,
        name: claims.name,
        user_type: claims.user_type,
        assigned_units: None,
        assigned_sectors: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine as _;
    use serde_json::json;

    /// Armar un token de prueba (firma falsa, igual que la que ignoramos)
    fn make_token(payload: &serde_json::Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload.to_string().as_bytes());
        format!("{}.{}.firma", header, body)
    }

    fn claims_json(exp: i64) -> serde_json::Value {
        json!({
            "user_type": "admin",
            "username": "alice",
            "email": "a@x.com",
            "name": "Alice A",
            "user_id": 7,
            "exp": exp,
            "iat": exp - 3600,
            "jti": "abc123",
            "token_type": "access"
        })
    }

    #[test]
    fn valid_token_yields_user() {
        let exp = chrono::Utc::now().timestamp() + 3600;
        let user = get_user_from_token(&make_token(&claims_json(exp))).unwrap();
        assert_eq!(user.user_id, 7);
        assert_eq!(user.username, "alice");
        assert_eq!(user.email, "a@x.com");
        assert_eq!(user.name, "Alice A");
        assert_eq!(user.user_type, "admin");
        assert_eq!(user.assigned_units, None);
    }

    #[test]
    fn expired_token_yields_no_user() {
        let exp = chrono::Utc::now().timestamp() - 10;
        assert!(get_user_from_token(&make_token(&claims_json(exp))).is_none());
    }

    #[test]
    fn long_expired_token_yields_no_user_despite_valid_claims() {
        assert!(get_user_from_token(&make_token(&claims_json(1))).is_none());
    }

    #[test]
    fn malformed_tokens_fail_cleanly() {
        for token in [
            "",
            "abc",
            "a.b",
            "a.b.c.d",
            "no-es.un!token.%%%",
            "a.!!!!.c",
        ] {
            assert!(get_user_from_token(token).is_none(), "token: {:?}", token);
        }
    }

    #[test]
    fn payload_that_is_not_json_fails_cleanly() {
        let body = URL_SAFE_NO_PAD.encode(b"esto no es json");
        let token = format!("h.{}.s", body);
        assert!(get_user_from_token(&token).is_none());
    }

    #[test]
    fn payload_missing_exp_fails_cleanly() {
        let token = make_token(&json!({
            "user_type": "user",
            "username": "x",
            "email": "x@x.com",
            "name": "X",
            "user_id": 1
        }));
        assert!(get_user_from_token(&token).is_none());
    }

    #[test]
    fn padded_payload_is_accepted() {
        let exp = chrono::Utc::now().timestamp() + 3600;
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256"}"#);
        let mut body = URL_SAFE_NO_PAD.encode(claims_json(exp).to_string().as_bytes());
        while body.len() % 4 != 0 {
            body.push('=');
        }
        let token = format!("{}.{}.firma", header, body);
        assert!(get_user_from_token(&token).is_some());
    }

    #[test]
    fn decode_claims_keeps_optional_fields() {
        let exp = chrono::Utc::now().timestamp() + 3600;
        let claims = decode_claims(&make_token(&claims_json(exp))).unwrap();
        assert_eq!(claims.jti.as_deref(), Some("abc123"));
        assert_eq!(claims.token_type.as_deref(), Some("access"));
    }
}
