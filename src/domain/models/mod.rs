pub mod auth;
pub mod token;

pub use auth::authenticated_user::AuthenticatedUser;
pub use auth::authentication_request::RequiredRole;
pub use token::token::{JwtToken, RefreshToken, TokenClaims, TokenType};
