pub mod request;
pub mod response;

pub use request::{CreateReservationRequest, UpdateReservationRequest};
pub use response::ReservationView;
