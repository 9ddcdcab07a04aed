//! 해커톤/팀 리포지토리 (MongoDB `hackathons`, `teams` 컬렉션)

pub mod hackathon_repo;
pub mod team_repo;

pub use hackathon_repo::HackathonRepository;
pub use team_repo::TeamRepository;
