//! # User Data Transfer Objects Module
//!
//! 계정 관련 API의 요청/응답 계약입니다.
//!
//! ```text
//! users/
//! ├── request/
//! │   ├── signup.rs        # 회원가입, 인증 코드 발송/확인
//! │   ├── auth_request.rs  # 로그인
//! │   └── account.rs       # 이메일 찾기, 비밀번호 재설정
//! └── response/
//!     └── user_response.rs # 내 정보, 가입 결과, 이메일 찾기 결과
//! ```
//!
//! JSON 필드는 프론트엔드와 맞춰 camelCase를 사용합니다.
//! 응답에는 비밀번호 해시가 포함되지 않습니다.

pub mod request;
pub mod response;

pub use request::{
    FindEmailRequest, LoginRequest, PasswordResetRequest, SendEmailRequest, SignUpRequest,
    VerificationQuery, VerificationRequest,
};
pub use response::{FindEmailResponse, SignUpResponse, UserResponse};
