pub mod users;
pub mod reservations;
pub mod teams;

pub use users::user::User;
pub use reservations::reservation::Reservation;
pub use teams::hackathon::Hackathon;
pub use teams::team::{Team, TeamStatus};
