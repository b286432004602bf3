use serde::{Deserialize, Serialize};

/// Enlace de la barra de navegación
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct NavLink {
    pub label: String,
    pub href: String,
    #[serde(default)]
    pub active: bool,
}

impl NavLink {
    pub fn new(label: &str, href: &str) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
            active: false,
        }
    }
}
