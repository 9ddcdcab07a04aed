//! 예약 엔티티
//!
//! 리더와 멤버 사이의 한 시점 면담 예약입니다. 시간 구간이 아니라
//! `reservation_datetime` 한 점으로 표현되며, 같은 사용자가 같은 시각에
//! 두 개의 예약을 가질 수 없다는 규칙은 생성/변경 시점의 스캔으로 보장합니다.

use chrono::{DateTime, NaiveDateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// 예약을 받은 사용자
    pub leader: ObjectId,

    /// 예약을 신청한 사용자
    pub member: ObjectId,

    pub reservation_datetime: NaiveDateTime,

    pub created_at: DateTime<Utc>,
}

impl Reservation {
    pub fn new(leader: ObjectId, member: ObjectId, reservation_datetime: NaiveDateTime) -> Self {
        Self {
            id: None,
            leader,
            member,
            reservation_datetime,
            created_at: Utc::now(),
        }
    }

    /// 일정 변경. 참여자는 바뀌지 않습니다.
    pub fn reschedule(&mut self, reservation_datetime: NaiveDateTime) {
        self.reservation_datetime = reservation_datetime;
    }

    /// 사용자가 리더 또는 멤버로 참여하는지
    pub fn involves(&self, user_id: &ObjectId) -> bool {
        self.leader == *user_id || self.member == *user_id
    }

    /// 주어진 사용자 입장에서 본 상대방 id와 리더 여부
    ///
    /// 참여자가 아니면 `None`
    pub fn counterpart_of(&self, user_id: &ObjectId) -> Option<(ObjectId, bool)> {
        if self.leader == *user_id {
            Some((self.member, true))
        } else if self.member == *user_id {
            Some((self.leader, false))
        } else {
            None
        }
    }

    pub fn is_at(&self, datetime: &NaiveDateTime) -> bool {
        self.reservation_datetime == *datetime
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 11, 2)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_counterpart_from_each_side() {
        let leader = ObjectId::new();
        let member = ObjectId::new();
        let reservation = Reservation::new(leader, member, at(10));

        assert_eq!(reservation.counterpart_of(&leader), Some((member, true)));
        assert_eq!(reservation.counterpart_of(&member), Some((leader, false)));
        assert_eq!(reservation.counterpart_of(&ObjectId::new()), None);
    }

    #[test]
    fn test_reschedule_keeps_participants() {
        let leader = ObjectId::new();
        let member = ObjectId::new();
        let mut reservation = Reservation::new(leader, member, at(10));

        reservation.reschedule(at(11));

        assert!(reservation.is_at(&at(11)));
        assert!(!reservation.is_at(&at(10)));
        assert_eq!(reservation.leader, leader);
        assert_eq!(reservation.member, member);
    }
}
