// ============================================================================
// COOKIES - Lectura/escritura de document.cookie
// ============================================================================

use chrono::{DateTime, Duration, Utc};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

use crate::config::CONFIG;

pub const ACCESS_TOKEN_COOKIE: &str = "access_token";
pub const REFRESH_TOKEN_COOKIE: &str = "refresh_token";

/// Vida de las cookies de sesión
const COOKIE_LIFETIME_DAYS: i64 = 7;

#[cfg(target_arch = "wasm32")]
fn html_document() -> Option<HtmlDocument> {
    web_sys::window()?
        .document()?
        .dyn_into::<HtmlDocument>()
        .ok()
}

// Fuera del navegador no hay document: las cookies se comportan como vacías
#[cfg(not(target_arch = "wasm32"))]
fn html_document() -> Option<HtmlDocument> {
    None
}

/// Armar el string de cookie con sus atributos
pub fn cookie_string(name: &str, value: &str, expires: DateTime<Utc>, secure: bool) -> String {
    let mut cookie = format!(
        "{}={}; expires={}; path=/; SameSite=Strict",
        name,
        value,
        expires.format("%a, %d %b %Y %H:%M:%S GMT")
    );
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// Buscar una cookie por nombre dentro del header completo de document.cookie
pub fn find_cookie(cookie_header: &str, name: &str) -> Option<String> {
    cookie_header
        .split(';')
        .map(|part| part.trim())
        .find_map(|part| {
            let (key, value) = part.split_once('=')?;
            if key == name {
                Some(value.to_string())
            } else {
                None
            }
        })
}

/// Leer una cookie del documento
pub fn get_cookie(name: &str) -> Option<String> {
    let document = html_document()?;
    let header = document.cookie().ok()?;
    find_cookie(&header, name)
}

/// Escribir una cookie de sesión (7 días, SameSite=Strict, Secure en producción)
pub fn set_cookie(name: &str, value: &str) -> Result<(), String> {
    let document = html_document().ok_or("No se pudo acceder al document")?;
    let expires = Utc::now() + Duration::days(COOKIE_LIFETIME_DAYS);
    document
        .set_cookie(&cookie_string(name, value, expires, CONFIG.secure_cookies()))
        .map_err(|_| format!("Error escribiendo la cookie {}", name))
}

/// Borrar una cookie. No falla si no existe.
pub fn remove_cookie(name: &str) {
    if let Some(document) = html_document() {
        let expired = format!(
            "{}=; expires=Thu, 01 Jan 1970 00:00:00 GMT; path=/; SameSite=Strict; Max-Age=0",
            name
        );
        if document.set_cookie(&expired).is_err() {
            log::warn!("⚠️ No se pudo borrar la cookie {}", name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn cookie_string_carries_all_attributes() {
        let expires = Utc.with_ymd_and_hms(2026, 8, 12, 10, 30, 0).unwrap();
        let cookie = cookie_string("access_token", "abc", expires, false);
        assert_eq!(
            cookie,
            "access_token=abc; expires=Wed, 12 Aug 2026 10:30:00 GMT; path=/; SameSite=Strict"
        );
    }

    #[test]
    fn cookie_string_adds_secure_flag() {
        let expires = Utc.with_ymd_and_hms(2026, 8, 12, 10, 30, 0).unwrap();
        let cookie = cookie_string("refresh_token", "r1", expires, true);
        assert!(cookie.ends_with("; Secure"));
    }

    #[test]
    fn find_cookie_among_several() {
        let header = "theme=dark; access_token=tok123; refresh_token=r1";
        assert_eq!(find_cookie(header, "access_token").as_deref(), Some("tok123"));
        assert_eq!(find_cookie(header, "refresh_token").as_deref(), Some("r1"));
        assert_eq!(find_cookie(header, "theme").as_deref(), Some("dark"));
    }

    #[test]
    fn find_cookie_missing_returns_none() {
        assert_eq!(find_cookie("theme=dark", "access_token"), None);
        assert_eq!(find_cookie("", "access_token"), None);
    }

    #[test]
    fn find_cookie_keeps_equals_inside_value() {
        let header = "access_token=abc==; other=1";
        assert_eq!(find_cookie(header, "access_token").as_deref(), Some("abc=="));
    }

    #[test]
    fn find_cookie_does_not_match_prefix_names() {
        let header = "xaccess_token=nope; access_token=yes";
        assert_eq!(find_cookie(header, "access_token").as_deref(), Some("yes"));
    }
}
