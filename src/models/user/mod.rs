// User module
// Identity record handed to every portal by the login screen

use std::fmt;

/// Closed set of portal roles. Every screen is dispatched through a single
/// match on this enum rather than parallel per-role view trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Student,
    Tutor,
    Admin,
}

impl Role {
    /// Portal label shown in the sidebar header
    pub fn portal_label(&self) -> &'static str {
        match self {
            Role::Student => "Student Portal",
            Role::Tutor => "Tutor Portal",
            Role::Admin => "Admin Portal",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Student => write!(f, "student"),
            Role::Tutor => write!(f, "tutor"),
            Role::Admin => write!(f, "admin"),
        }
    }
}

/// The signed-in user identity consumed by all screens
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub avatar_url: Option<String>,
}

impl User {
    /// Create a new user with required fields
    ///
    /// # Returns
    /// Returns `Result<User, String>` with validation
    pub fn new(
        id: i64,
        name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
    ) -> Result<Self, String> {
        let name = name.into();
        let email = email.into();

        if name.trim().is_empty() {
            return Err("User name cannot be empty".to_string());
        }
        if !email.contains('@') {
            return Err("User email must contain '@'".to_string());
        }

        Ok(Self {
            id,
            name,
            email,
            role,
            avatar_url: None,
        })
    }

    pub fn with_avatar(mut self, url: impl Into<String>) -> Self {
        self.avatar_url = Some(url.into());
        self
    }

    /// New identity with edited name and email; id, role and avatar are
    /// not editable and carry over. Same validation as `new`.
    pub fn updated(&self, name: &str, email: &str) -> Result<Self, String> {
        let mut user = Self::new(self.id, name, email, self.role)?;
        user.avatar_url = self.avatar_url.clone();
        Ok(user)
    }

    /// Single-letter fallback shown when no avatar image is available
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_success() {
        let user = User::new(1, "Tran Thi B", "tutor@hcmut.edu.vn", Role::Tutor).unwrap();
        assert_eq!(user.name, "Tran Thi B");
        assert_eq!(user.role, Role::Tutor);
        assert!(user.avatar_url.is_none());
    }

    #[test]
    fn test_new_user_empty_name() {
        let result = User::new(1, "  ", "a@b.edu", Role::Student);
        assert!(result.is_err());
        assert_eq!(result.unwrap_err(), "User name cannot be empty");
    }

    #[test]
    fn test_new_user_bad_email() {
        let result = User::new(1, "Nguyen Van A", "not-an-email", Role::Student);
        assert!(result.is_err());
    }

    #[test]
    fn test_updated_keeps_identity() {
        let user = User::new(2, "Tran Thi B", "tutor@hcmut.edu.vn", Role::Tutor)
            .unwrap()
            .with_avatar("https://example.com/b.png");

        let edited = user.updated("Tran Thi Bich", "bich@hcmut.edu.vn").unwrap();
        assert_eq!(edited.id, 2);
        assert_eq!(edited.role, Role::Tutor);
        assert_eq!(edited.name, "Tran Thi Bich");
        assert_eq!(edited.avatar_url, user.avatar_url);

        assert!(user.updated("", "bich@hcmut.edu.vn").is_err());
        assert!(user.updated("Tran Thi Bich", "not-an-email").is_err());
    }

    #[test]
    fn test_initial() {
        let user = User::new(1, "Le Van C", "admin@hcmut.edu.vn", Role::Admin).unwrap();
        assert_eq!(user.initial(), 'L');
    }

    #[test]
    fn test_role_display() {
        assert_eq!(Role::Tutor.to_string(), "tutor");
        assert_eq!(Role::Admin.portal_label(), "Admin Portal");
    }
}
