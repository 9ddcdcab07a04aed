use chrono::NaiveDateTime;
use mongodb::bson::oid::ObjectId;
use serde::Serialize;

use crate::domain::entities::reservations::reservation::Reservation;

/// 조회하는 사용자 입장에서 본 예약
///
/// `counterpart_id`는 상대방 id이며, `is_leader`는 조회자가 리더인지 나타냅니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationView {
    pub reservation_id: String,
    pub counterpart_id: String,
    pub is_leader: bool,
    pub reservation_datetime: NaiveDateTime,
}

impl ReservationView {
    /// 조회자가 참여자가 아니거나 아직 저장되지 않은 예약이면 `None`
    pub fn for_viewer(reservation: &Reservation, viewer: &ObjectId) -> Option<Self> {
        let id = reservation.id?;
        let (counterpart, is_leader) = reservation.counterpart_of(viewer)?;

        Some(Self {
            reservation_id: id.to_hex(),
            counterpart_id: counterpart.to_hex(),
            is_leader,
            reservation_datetime: reservation.reservation_datetime,
        })
    }
}
