pub mod response;

pub use response::{AccessTokenResponse, ApiResponse};
