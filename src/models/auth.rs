use serde::{Deserialize, Serialize};

use crate::models::user::User;

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct TokenRequest {
    pub username: String,
    pub password: String,
}

/// Par de tokens que devuelve el endpoint de login
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Claims embebidos en el access token (decodificados sin verificar firma)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct TokenClaims {
    pub user_type: String,
    pub username: String,
    pub email: String,
    pub name: String,
    pub user_id: i64,
    /// Expiración (segundos Unix)
    pub exp: i64,
    #[serde(default)]
    pub iat: Option<i64>,
    #[serde(default)]
    pub jti: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Respuesta del endpoint /api/accounts/me/
/// El backend no es uniforme: el id y el nombre pueden venir en varios campos
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct IdentityResponse {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub user_id: Option<i64>,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub user_type: Option<String>,
    #[serde(default)]
    pub assigned_units: Option<Vec<String>>,
    #[serde(default)]
    pub assigned_sectors: Option<Vec<String>>,
}

impl IdentityResponse {
    /// Normalizar la respuesta del servidor a un User
    pub fn into_user(self) -> User {
        let name = self
            .name
            .or(self.full_name)
            .unwrap_or_else(|| {
                format!(
                    "{} {}",
                    self.first_name.unwrap_or_default(),
                    self.last_name.unwrap_or_default()
                )
                .trim()
                .to_string()
            });

        User {
            user_id: self.id.or(self.user_id).unwrap_or_default(),
            username: self.username,
            email: self.email,
            name,
            user_type: self.user_type.unwrap_or_else(|| "user".to_string()),
            assigned_units: self.assigned_units,
            assigned_sectors: self.assigned_sectors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_prefers_id_over_user_id() {
        let identity: IdentityResponse = serde_json::from_str(
            r#"{"id": 3, "user_id": 9, "username": "alice", "email": "a@x.com", "name": "Alice A"}"#,
        )
        .unwrap();
        let user = identity.into_user();
        assert_eq!(user.user_id, 3);
        assert_eq!(user.name, "Alice A");
    }

    #[test]
    fn identity_falls_back_to_user_id_and_full_name() {
        let identity: IdentityResponse = serde_json::from_str(
            r#"{"user_id": 9, "username": "bob", "email": "b@x.com", "full_name": "Bob B"}"#,
        )
        .unwrap();
        let user = identity.into_user();
        assert_eq!(user.user_id, 9);
        assert_eq!(user.name, "Bob B");
    }

    #[test]
    fn identity_builds_name_from_first_and_last() {
        let identity: IdentityResponse = serde_json::from_str(
            r#"{"id": 1, "username": "c", "email": "c@x.com", "first_name": "Carol", "last_name": "C"}"#,
        )
        .unwrap();
        assert_eq!(identity.into_user().name, "Carol C");
    }

    #[test]
    fn identity_name_empty_when_no_name_fields() {
        let identity: IdentityResponse = serde_json::from_str(
            r#"{"id": 1, "username": "d", "email": "d@x.com"}"#,
        )
        .unwrap();
        assert_eq!(identity.into_user().name, "");
    }

    #[test]
    fn identity_user_type_defaults_to_user() {
        let identity: IdentityResponse = serde_json::from_str(
            r#"{"id": 1, "username": "e", "email": "e@x.com", "name": "E"}"#,
        )
        .unwrap();
        assert_eq!(identity.into_user().user_type, "user");
    }

    #[test]
    fn identity_keeps_assigned_lists() {
        let identity: IdentityResponse = serde_json::from_str(
            r#"{"id": 1, "username": "f", "email": "f@x.com", "name": "F",
                "user_type": "admin", "assigned_units": ["U1", "U2"], "assigned_sectors": []}"#,
        )
        .unwrap();
        let user = identity.into_user();
        assert_eq!(user.user_type, "admin");
        assert_eq!(user.assigned_units, Some(vec!["U1".to_string(), "U2".to_string()]));
        assert_eq!(user.assigned_sectors, Some(vec![]));
    }

    #[test]
    fn claims_accept_missing_optional_fields() {
        let claims: TokenClaims = serde_json::from_str(
            r#"{"user_type": "admin", "username": "alice", "email": "a@x.com",
                "name": "Alice A", "user_id": 7, "exp": 2000000000}"#,
        )
        .unwrap();
        assert_eq!(claims.user_id, 7);
        assert_eq!(claims.iat, None);
        assert_eq!(claims.jti, None);
        assert_eq!(claims.token_type, None);
    }
}
