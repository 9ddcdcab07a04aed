use crate::config::PasswordConfig;
use crate::core::errors::{AppError, AppResult};

/// bcrypt 해시 생성/검증
#[derive(Debug, Clone, Copy)]
pub struct PasswordEncoder {
    cost: u32,
}

impl PasswordEncoder {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// `BCRYPT_COST` 또는 실행 환경별 기본 비용 사용
    pub fn from_env() -> Self {
        Self::new(PasswordConfig::bcrypt_cost())
    }

    pub fn hash(&self, raw_password: &str) -> AppResult<String> {
        let started = std::time::Instant::now();

        let hashed = bcrypt::hash(raw_password, self.cost)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;

        log::debug!("Password hashing took: {:?} (cost {})", started.elapsed(), self.cost);
        Ok(hashed)
    }

    pub fn matches(&self, raw_password: &str, password_hash: &str) -> AppResult<bool> {
        bcrypt::verify(raw_password, password_hash)
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_match() {
        let encoder = PasswordEncoder::new(4);
        let hashed = encoder.hash("SecurePass123").unwrap();

        assert_ne!(hashed, "SecurePass123");
        assert!(encoder.matches("SecurePass123", &hashed).unwrap());
        assert!(!encoder.matches("WrongPass123", &hashed).unwrap());
    }
}
