//! 해커톤/팀 서비스

pub mod team_service;

pub use team_service::TeamService;
