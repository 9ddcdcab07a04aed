/// 스코프 진입에 필요한 역할 (예: `/api/admin` → `"admin"`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredRole(String);

impl RequiredRole {
    pub fn new(role: &str) -> Self {
        Self(role.to_string())
    }

    pub fn is_satisfied(&self, user_roles: &[String]) -> bool {
        user_roles.iter().any(|role| *role == self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_role_matching() {
        let roles = vec!["user".to_string()];

        assert!(RequiredRole::new("user").is_satisfied(&roles));
        assert!(!RequiredRole::new("admin").is_satisfied(&roles));
        assert!(!RequiredRole::new("admin").is_satisfied(&[]));
    }
}
