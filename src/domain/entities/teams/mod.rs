pub mod hackathon;
pub mod team;
