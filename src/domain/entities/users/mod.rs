//! 사용자 엔티티
//!
//! 계정은 가입 경로에 따라 둘로 나뉩니다.
//!
//! - [`User::new_local`]: 이메일 인증을 거친 비밀번호 계정. 로그인, 비밀번호 재설정 가능
//! - [`User::new_social`]: 소셜 로그인 계정. 비밀번호가 없어 토큰 교환으로만 세션을 얻음
//!
//! `users` 컬렉션의 `email`에는 유니크 인덱스가 걸려 있습니다.
//!
//! [`User::new_local`]: user::User::new_local
//! [`User::new_social`]: user::User::new_social

pub mod user;
