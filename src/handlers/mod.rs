//! # HTTP 핸들러
//!
//! 요청을 DTO로 받아 검증하고 서비스 싱글톤에 위임합니다.
//! 에러는 `AppError`로 반환되어 `ResponseError` 구현이 상태 코드로 바꿉니다.
//!
//! ```text
//! handlers/
//! ├── auth.rs          # 로그인, 리프레시 토큰 교환/회전, 로그아웃 (쿠키)
//! ├── users.rs         # 회원가입, 이메일 인증, 계정 찾기/재설정, 내 정보, 탈퇴
//! ├── reservations.rs  # 예약 목록/생성/변경/삭제
//! └── teams.rs         # 해커톤, 팀
//! ```
//!
//! 인증이 필요한 핸들러는 `AuthenticatedUser` 추출자를 인자로 받습니다.
//! 스코프에 `AuthMiddleware`가 걸려 있지 않으면 추출 단계에서 `401`이 됩니다.

use mongodb::bson::oid::ObjectId;

use crate::core::errors::AppError;

pub mod auth;
pub mod reservations;
pub mod teams;
pub mod users;

/// 경로/본문의 24자리 hex id 파싱
pub(crate) fn parse_object_id(raw: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(raw)
        .map_err(|_| AppError::InvalidArgument(format!("잘못된 id 형식입니다: {}", raw)))
}
