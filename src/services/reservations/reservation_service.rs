//! # 예약 스케줄러
//!
//! 사용자 사이의 한 시점 면담 예약을 관리합니다.
//!
//! 한 사용자는 같은 시각에 두 개의 예약을 가질 수 없습니다. 규칙은 저장 직전
//! 참여자들의 예약 목록을 스캔해 시각이 정확히 같은 항목이 있는지로 검사합니다.
//! 구간 겹침은 보지 않습니다.
//!
//! 스캔과 저장 사이의 경쟁은 프로세스 내부 예약 잠금으로 직렬화합니다.
//! 여러 프로세스가 같은 저장소를 쓰는 배포에서는 이 잠금이 적용되지 않습니다.

use std::sync::Arc;
use async_trait::async_trait;
use chrono::NaiveDateTime;
use futures_util::lock::Mutex;
use mongodb::bson::oid::ObjectId;

use crate::core::errors::{AppError, AppResult};
use crate::core::registry::{Service, ServiceLocator, ServiceRegistration};
use crate::domain::dto::reservations::ReservationView;
use crate::domain::entities::reservations::reservation::Reservation;
use crate::repositories::reservations::ReservationRepository;
use crate::repositories::stores::{ReservationStore, UserStore};
use crate::repositories::users::UserRepository;

pub struct ReservationService {
    reservations: Arc<dyn ReservationStore>,
    users: Arc<dyn UserStore>,
    booking_lock: Mutex<()>,
}

impl ReservationService {
    pub fn new(reservations: Arc<dyn ReservationStore>, users: Arc<dyn UserStore>) -> Self {
        Self {
            reservations,
            users,
            booking_lock: Mutex::new(()),
        }
    }

    pub fn instance() -> Arc<Self> {
        ServiceLocator::get::<Self>()
    }

    fn build() -> Self {
        Self::new(ReservationRepository::instance(), UserRepository::instance())
    }

    /// 사용자가 리더 또는 멤버인 모든 예약 (저장 순서)
    pub async fn list_my_reservations(&self, user_id: &ObjectId) -> AppResult<Vec<ReservationView>> {
        let reservations = self.reservations.find_by_leader_or_member(user_id).await?;

        Ok(reservations
            .iter()
            .filter_map(|reservation| ReservationView::for_viewer(reservation, user_id))
            .collect())
    }

    /// 예약 생성
    ///
    /// 신청자(`user_id`)가 멤버, 대상(`target_user_id`)이 리더가 됩니다.
    /// 두 사람 중 누구라도 같은 시각에 예약이 있으면 `ConflictError`입니다.
    pub async fn create_reservation(
        &self,
        user_id: &ObjectId,
        target_user_id: &ObjectId,
        reservation_datetime: NaiveDateTime,
    ) -> AppResult<ReservationView> {
        if user_id == target_user_id {
            return Err(AppError::InvalidArgument("자기 자신과는 예약할 수 없습니다".to_string()));
        }

        self.ensure_user_exists(user_id).await?;
        self.ensure_user_exists(target_user_id).await?;

        let _guard = self.booking_lock.lock().await;

        self.ensure_slot_free(&[*user_id, *target_user_id], &reservation_datetime, None)
            .await?;

        let saved = self.reservations
            .save(Reservation::new(*target_user_id, *user_id, reservation_datetime))
            .await?;

        log::info!(
            "예약 생성 - leader: {}, member: {}, at: {}",
            target_user_id.to_hex(),
            user_id.to_hex(),
            reservation_datetime
        );

        ReservationView::for_viewer(&saved, user_id)
            .ok_or_else(|| AppError::InternalError("저장된 예약에 id가 없습니다".to_string()))
    }

    /// 예약 시각 변경
    ///
    /// 새 시각에서 요청자와 두 참여자의 일정을 다시 검사합니다.
    /// 변경 대상 예약 자신은 검사에서 제외되므로 같은 시각으로 다시 저장해도 충돌이 아닙니다.
    /// 참여자는 바뀌지 않습니다.
    pub async fn update_reservation(
        &self,
        reservation_id: &ObjectId,
        user_id: &ObjectId,
        reservation_datetime: NaiveDateTime,
    ) -> AppResult<ReservationView> {
        let _guard = self.booking_lock.lock().await;

        let mut reservation = self.find_reservation(reservation_id).await?;

        let mut participants = vec![*user_id];
        for participant in [reservation.leader, reservation.member] {
            if !participants.contains(&participant) {
                participants.push(participant);
            }
        }

        self.ensure_slot_free(&participants, &reservation_datetime, Some(reservation_id))
            .await?;

        reservation.reschedule(reservation_datetime);
        let saved = self.reservations.save(reservation).await?;

        log::info!("예약 변경 - id: {}, at: {}", reservation_id.to_hex(), reservation_datetime);

        // 참여자가 아닌 사용자가 변경한 경우 리더 시점으로 응답
        ReservationView::for_viewer(&saved, user_id)
            .or_else(|| ReservationView::for_viewer(&saved, &saved.leader))
            .ok_or_else(|| AppError::InternalError("저장된 예약에 id가 없습니다".to_string()))
    }

    pub async fn delete_reservation(&self, reservation_id: &ObjectId) -> AppResult<()> {
        if !self.reservations.delete_by_id(reservation_id).await? {
            return Err(Self::reservation_not_found());
        }

        log::info!("예약 삭제 - id: {}", reservation_id.to_hex());
        Ok(())
    }

    /// 사용자가 예약의 리더 또는 멤버인지
    ///
    /// 예약이 없으면 `NotFound`
    pub async fn is_owned_by(&self, reservation_id: &ObjectId, user_id: &ObjectId) -> AppResult<bool> {
        Ok(self.find_reservation(reservation_id).await?.involves(user_id))
    }

    async fn find_reservation(&self, reservation_id: &ObjectId) -> AppResult<Reservation> {
        self.reservations
            .find_by_id(reservation_id)
            .await?
            .ok_or_else(Self::reservation_not_found)
    }

    async fn ensure_user_exists(&self, user_id: &ObjectId) -> AppResult<()> {
        match self.users.find_by_id(user_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::NotFound(format!("사용자를 찾을 수 없습니다: {}", user_id.to_hex()))),
        }
    }

    async fn ensure_slot_free(
        &self,
        participants: &[ObjectId],
        reservation_datetime: &NaiveDateTime,
        excluded: Option<&ObjectId>,
    ) -> AppResult<()> {
        for participant in participants {
            let taken = self.reservations
                .find_by_leader_or_member(participant)
                .await?
                .iter()
                .any(|r| r.is_at(reservation_datetime) && r.id.as_ref() != excluded);

            if taken {
                log::warn!(
                    "예약 충돌 - user: {}, at: {}",
                    participant.to_hex(),
                    reservation_datetime
                );
                return Err(AppError::ConflictError("이미 예약된 시간입니다".to_string()));
            }
        }
        Ok(())
    }

    fn reservation_not_found() -> AppError {
        AppError::NotFound("예약을 찾을 수 없습니다".to_string())
    }
}

#[async_trait]
impl Service for ReservationService {
    fn name(&self) -> &str {
        "reservation"
    }

    async fn init(&self) -> Result<(), Box<dyn std::error::Error>> {
        log::info!("Service reservation initialized");
        Ok(())
    }
}

inventory::submit! {
    ServiceRegistration {
        name: "reservation_service",
        constructor: || Box::new(Arc::new(ReservationService::build())),
    }
}
