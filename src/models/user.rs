use serde::{Deserialize, Serialize};

/// Identidad confirmada que consumen las vistas.
/// Se reemplaza completo en cada login/validación, nunca se muta parcialmente.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct User {
    pub user_id: i64,
    pub username: String,
    pub email: String,
    pub name: String,
    pub user_type: String,
    #[serde(default)]
    pub assigned_units: Option<Vec<String>>,
    #[serde(default)]
    pub assigned_sectors: Option<Vec<String>>,
}
