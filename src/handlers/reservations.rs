//! # 예약 HTTP 핸들러 (`/api/auth/reservations`)
//!
//! 변경/삭제는 예약 참여자(리더 또는 멤버)만 할 수 있습니다.
//! 참여자가 아니면 `403`, 예약이 없으면 `404`입니다.

use actix_web::{delete, get, post, put, web, HttpResponse};
use mongodb::bson::oid::ObjectId;
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::reservations::{CreateReservationRequest, UpdateReservationRequest};
use crate::domain::dto::tokens::ApiResponse;
use crate::domain::models::AuthenticatedUser;
use crate::handlers::parse_object_id;
use crate::services::reservations::ReservationService;

#[get("/reservations")]
pub async fn list_reservations(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    let reservations = ReservationService::instance()
        .list_my_reservations(&user.user_id)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(reservations)))
}

#[post("/reservations")]
pub async fn create_reservation(
    user: AuthenticatedUser,
    payload: web::Json<CreateReservationRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;
    let target_user_id = parse_object_id(&payload.target_user_id)?;

    let reservation = ReservationService::instance()
        .create_reservation(&user.user_id, &target_user_id, payload.reservation_datetime)
        .await?;
    Ok(HttpResponse::Created().json(ApiResponse::success(reservation)))
}

#[put("/reservations/{reservation_id}")]
pub async fn update_reservation(
    user: AuthenticatedUser,
    path: web::Path<String>,
    payload: web::Json<UpdateReservationRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;
    let reservation_id = parse_object_id(&path)?;
    let service = ReservationService::instance();

    require_participant(&service, &reservation_id, &user.user_id).await?;

    let reservation = service
        .update_reservation(&reservation_id, &user.user_id, payload.reservation_datetime)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(reservation)))
}

#[delete("/reservations/{reservation_id}")]
pub async fn delete_reservation(
    user: AuthenticatedUser,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let reservation_id = parse_object_id(&path)?;
    let service = ReservationService::instance();

    require_participant(&service, &reservation_id, &user.user_id).await?;

    service.delete_reservation(&reservation_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

async fn require_participant(
    service: &ReservationService,
    reservation_id: &ObjectId,
    user_id: &ObjectId,
) -> Result<(), AppError> {
    if !service.is_owned_by(reservation_id, user_id).await? {
        log::warn!(
            "예약 접근 거부 - reservation: {}, user: {}",
            reservation_id.to_hex(),
            user_id.to_hex()
        );
        return Err(AppError::AuthorizationError("예약 참여자만 접근할 수 있습니다".to_string()));
    }
    Ok(())
}
