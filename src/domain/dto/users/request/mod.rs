pub mod signup;
pub mod auth_request;
pub mod account;

pub use signup::{SendEmailRequest, SignUpRequest, VerificationQuery, VerificationRequest};
pub use auth_request::LoginRequest;
pub use account::{FindEmailRequest, PasswordResetRequest};
