pub mod users;
pub mod tokens;
pub mod reservations;
pub mod teams;

pub use users::{
    FindEmailRequest, FindEmailResponse, LoginRequest, PasswordResetRequest, SendEmailRequest,
    SignUpRequest, SignUpResponse, UserResponse, VerificationQuery, VerificationRequest,
};
pub use tokens::{AccessTokenResponse, ApiResponse};
pub use reservations::{CreateReservationRequest, ReservationView, UpdateReservationRequest};
pub use teams::{CreateHackathonRequest, CreateTeamRequest, HackathonResponse, TeamListQuery, TeamResponse};
