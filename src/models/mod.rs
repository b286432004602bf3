pub mod user;
pub mod auth;
pub mod nav;

pub use user::User;
pub use auth::{TokenRequest, TokenPair, TokenClaims, IdentityResponse};
pub use nav::NavLink;
