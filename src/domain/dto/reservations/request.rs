use chrono::NaiveDateTime;
use serde::Deserialize;
use validator::Validate;

/// 예약 신청
///
/// 신청자는 인증 주체이며 멤버가 되고, `targetUserId`가 리더가 됩니다.
///
/// ```json
/// { "targetUserId": "665f1c...", "reservationDatetime": "2024-11-02T10:00:00" }
/// ```
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationRequest {
    #[validate(length(equal = 24, message = "대상 사용자 id 형식이 올바르지 않습니다"))]
    pub target_user_id: String,

    pub reservation_datetime: NaiveDateTime,
}

/// 예약 일정 변경
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReservationRequest {
    pub reservation_datetime: NaiveDateTime,
}
