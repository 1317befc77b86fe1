//! The single credential authority.
//!
//! Every surface that signs a user up or verifies a login goes through
//! [`AuthService`], so there is exactly one hash cost and one set of error
//! messages. A failed login never reveals whether the email or the
//! password was wrong.

use std::fmt;
use std::sync::Arc;

use serde::Deserialize;
use uuid::Uuid;

use crate::model::{Role, User};
use crate::store::TableStore;

/// bcrypt cost factor for all stored password hashes.
pub const HASH_COST: u32 = 10;

#[derive(Debug)]
pub enum AuthError {
    /// A required signup field was empty.
    MissingFields,
    /// password != confirm_password, caught before hashing.
    PasswordMismatch,
    /// Unknown email or wrong password; deliberately indistinguishable.
    InvalidCredentials,
    /// Store-reported failure, surfaced verbatim.
    Store(anyhow::Error),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::MissingFields => write!(f, "All fields are required"),
            AuthError::PasswordMismatch => write!(f, "Please ensure both passwords match"),
            AuthError::InvalidCredentials => write!(f, "Invalid email or password."),
            AuthError::Store(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for AuthError {}

/// Signup form. `role` defaults to participant when omitted.
#[derive(Debug, Clone, Deserialize)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    #[serde(default)]
    pub role: Role,
}

pub struct AuthService {
    store: Arc<TableStore>,
}

impl AuthService {
    pub fn new(store: Arc<TableStore>) -> Self {
        Self { store }
    }

    /// Register an account: local checks first, then one hashed insert.
    /// Mismatched passwords never reach the store.
    pub fn signup(&self, form: SignupForm) -> Result<User, AuthError> {
        if form.name.trim().is_empty()
            || form.email.trim().is_empty()
            || form.password.is_empty()
        {
            return Err(AuthError::MissingFields);
        }
        if form.password != form.confirm_password {
            return Err(AuthError::PasswordMismatch);
        }

        let password_hash = bcrypt::hash(&form.password, HASH_COST)
            .map_err(|e| AuthError::Store(e.into()))?;

        let user = User {
            id: Uuid::new_v4(),
            name: form.name,
            email: form.email,
            password_hash,
            role: form.role,
        };
        self.store.insert_user(user).map_err(AuthError::Store)
    }

    /// Select-by-email and compare against the stored hash. Both a missing
    /// row and a failed comparison map to the same error.
    pub fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let user = self
            .store
            .find_user_by_email(email)
            .ok_or(AuthError::InvalidCredentials)?;

        let valid = bcrypt::verify(password, &user.password_hash)
            .map_err(|_| AuthError::InvalidCredentials)?;
        if !valid {
            return Err(AuthError::InvalidCredentials);
        }
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn service(dir: &std::path::Path) -> AuthService {
        AuthService::new(Arc::new(TableStore::open(dir).unwrap()))
    }

    fn form(email: &str, password: &str, confirm: &str) -> SignupForm {
        SignupForm {
            name: "Juan Dela Cruz".to_string(),
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
            role: Role::Participant,
        }
    }

    #[test]
    fn test_signup_then_login() {
        let dir = tempdir().unwrap();
        let auth = service(dir.path());
        let created = auth
            .signup(form("juan@email.com", "hunter22", "hunter22"))
            .unwrap();
        assert!(created.password_hash.starts_with("$2"));
        assert_ne!(created.password_hash, "hunter22");

        let user = auth.login("juan@email.com", "hunter22").unwrap();
        assert_eq!(user.id, created.id);
    }

    #[test]
    fn test_mismatched_passwords_never_reach_the_store() {
        let dir = tempdir().unwrap();
        let store = Arc::new(TableStore::open(dir.path()).unwrap());
        let auth = AuthService::new(store.clone());

        let err = auth
            .signup(form("juan@email.com", "hunter22", "hunter23"))
            .unwrap_err();
        assert!(matches!(err, AuthError::PasswordMismatch));
        assert_eq!(store.user_count(), 0);
    }

    #[test]
    fn test_wrong_password_and_unknown_email_look_identical() {
        let dir = tempdir().unwrap();
        let auth = service(dir.path());
        auth.signup(form("juan@email.com", "hunter22", "hunter22"))
            .unwrap();

        let wrong_password = auth.login("juan@email.com", "hunter23").unwrap_err();
        let unknown_email = auth.login("nobody@email.com", "hunter22").unwrap_err();
        assert_eq!(wrong_password.to_string(), unknown_email.to_string());
        assert_eq!(wrong_password.to_string(), "Invalid email or password.");
    }

    #[test]
    fn test_duplicate_email_surfaces_store_message() {
        let dir = tempdir().unwrap();
        let auth = service(dir.path());
        auth.signup(form("juan@email.com", "hunter22", "hunter22"))
            .unwrap();
        let err = auth
            .signup(form("juan@email.com", "other-pass", "other-pass"))
            .unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn test_empty_fields_rejected_locally() {
        let dir = tempdir().unwrap();
        let auth = service(dir.path());
        let err = auth.signup(form("", "hunter22", "hunter22")).unwrap_err();
        assert!(matches!(err, AuthError::MissingFields));
    }
}
