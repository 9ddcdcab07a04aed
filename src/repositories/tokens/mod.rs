//! Redis 기반 토큰/인증 코드 리포지토리
//!
//! # Key layout
//!
//! | 키 | 값 | TTL |
//! |----|----|-----|
//! | `refreshToken:<sha256(token)>` | [`RefreshToken`](crate::domain::models::RefreshToken) | `REFRESH_TOKEN_EXPIRE_TIME` |
//! | `verification:code:<email>` | 6자리 코드 | `VERIFICATION_CODE_TTL` |
//! | `verification:verified:<email>` | `true` | `VERIFIED_EMAIL_TTL` |
//!
//! 리프레시 토큰은 원문 대신 해시로 키를 만들어 키 길이를 고정하고
//! `KEYS` 출력에 토큰 원문이 드러나지 않게 합니다.

pub mod refresh_token_repo;
pub mod verification_code_repo;

pub use refresh_token_repo::RefreshTokenRepository;
pub use verification_code_repo::VerificationCodeRepository;
