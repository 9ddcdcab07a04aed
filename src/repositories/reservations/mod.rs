//! 예약 리포지토리 (MongoDB `reservations` 컬렉션)

pub mod reservation_repo;

pub use reservation_repo::ReservationRepository;
