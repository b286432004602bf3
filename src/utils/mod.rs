// Utils compartidos

pub mod jwt;
pub mod cookies;

pub use jwt::*;
pub use cookies::*;
