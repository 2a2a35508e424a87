//! Demo sign-in: a string-matching heuristic on the username that hands
//! out one of three fixed role profiles. No credentials are checked.

use crate::models::user::{Role, User};

pub struct AuthService;

impl AuthService {
    pub fn new() -> Self {
        Self
    }

    /// Resolve a username to a mock profile. "tutor" and "admin"
    /// substrings win, case-insensitively; anything else signs in as the
    /// demo student.
    pub fn login(&self, username: &str) -> User {
        let username = username.to_lowercase();
        let role = if username.contains("tutor") {
            Role::Tutor
        } else if username.contains("admin") {
            Role::Admin
        } else {
            Role::Student
        };
        log::info!("Signed in '{}' as {}", username, role);
        self.profile_for(role)
    }

    /// The fixed mock profile for a role
    pub fn profile_for(&self, role: Role) -> User {
        let user = match role {
            Role::Student => User::new(1, "Nguyen Van A", "student@hcmut.edu.vn", Role::Student)
                .map(|u| u.with_avatar("https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=100&h=100&fit=crop")),
            Role::Tutor => User::new(2, "Tran Thi B", "tutor@hcmut.edu.vn", Role::Tutor)
                .map(|u| u.with_avatar("https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=100&h=100&fit=crop")),
            Role::Admin => User::new(3, "Le Van C", "admin@hcmut.edu.vn", Role::Admin)
                .map(|u| u.with_avatar("https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=100&h=100&fit=crop")),
        };
        user.expect("mock profiles are valid")
    }
}

impl Default for AuthService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_heuristic() {
        let auth = AuthService::new();
        assert_eq!(auth.login("tutor@hcmut.edu.vn").role, Role::Tutor);
        assert_eq!(auth.login("admin01").role, Role::Admin);
        assert_eq!(auth.login("student@hcmut.edu.vn").role, Role::Student);
    }

    #[test]
    fn test_unknown_username_defaults_to_student() {
        let auth = AuthService::new();
        assert_eq!(auth.login("somebody").role, Role::Student);
        assert_eq!(auth.login("").role, Role::Student);
    }

    #[test]
    fn test_profiles_have_avatars() {
        let auth = AuthService::new();
        for role in [Role::Student, Role::Tutor, Role::Admin] {
            assert!(auth.profile_for(role).avatar_url.is_some());
        }
    }
}
