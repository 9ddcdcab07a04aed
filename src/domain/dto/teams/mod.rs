pub mod request;
pub mod response;

pub use request::{CreateHackathonRequest, CreateTeamRequest, TeamListQuery};
pub use response::{HackathonResponse, TeamResponse};
