use argon2::{
    Argon2,
    password_hash::{PasswordHasher, SaltString},
};
use once_cell::sync::Lazy;
use password_hash::rand_core::OsRng;
use regex::Regex;

use crate::application::ports::user_repository::UserRepository;
use crate::domain::users::user::User;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid regex"));

pub const MIN_PASSWORD_LEN: usize = 6;

pub struct Register<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
}

#[derive(Debug, Clone)]
pub struct RegisterRequest {
    pub email: String,
    pub name: String,
    pub password: String,
}

#[derive(thiserror::Error, Debug)]
pub enum RegisterError {
    #[error("{0}")]
    Invalid(&'static str),
    #[error("email already registered")]
    EmailTaken,
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl<'a, R: UserRepository + ?Sized> Register<'a, R> {
    pub async fn execute(&self, req: &RegisterRequest) -> Result<User, RegisterError> {
        let email = req.email.trim().to_lowercase();
        if !EMAIL_RE.is_match(&email) {
            return Err(RegisterError::Invalid("a valid email is required"));
        }
        if req.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(RegisterError::Invalid("password must be at least 6 characters"));
        }
        let name = match req.name.trim() {
            "" => email.split('@').next().unwrap_or_default().to_string(),
            n => n.to_string(),
        };
        if self.repo.find_by_email(&email).await?.is_some() {
            return Err(RegisterError::EmailTaken);
        }
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(req.password.as_bytes(), &salt)
            .map_err(|e| anyhow::anyhow!(e.to_string()))?
            .to_string();
        let user = self.repo.create_user(&email, &name, &hash).await?;
        tracing::info!(user_id = %user.id, "user_registered");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::local::testing::memory_backend;

    fn req(email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            email: email.into(),
            name: String::new(),
            password: password.into(),
        }
    }

    #[tokio::test]
    async fn registers_and_rejects_duplicates() {
        let backend = memory_backend();
        let uc = Register {
            repo: backend.users.as_ref(),
        };
        let user = uc.execute(&req(" Hunter@Example.com ", "s3cret!")).await.unwrap();
        assert_eq!(user.email, "hunter@example.com");
        assert_eq!(user.name, "hunter");

        let err = uc
            .execute(&req("hunter@example.com", "another1"))
            .await
            .unwrap_err();
        assert!(matches!(err, RegisterError::EmailTaken));
    }

    #[tokio::test]
    async fn rejects_bad_email_and_short_password() {
        let backend = memory_backend();
        let uc = Register {
            repo: backend.users.as_ref(),
        };
        assert!(matches!(
            uc.execute(&req("nope", "s3cret!")).await,
            Err(RegisterError::Invalid(_))
        ));
        assert!(matches!(
            uc.execute(&req("a@b.io", "123")).await,
            Err(RegisterError::Invalid(_))
        ));
    }
}
