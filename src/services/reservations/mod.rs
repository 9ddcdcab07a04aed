//! 예약 서비스

pub mod reservation_service;

pub use reservation_service::ReservationService;
