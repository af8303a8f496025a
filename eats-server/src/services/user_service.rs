//! User Service
//!
//! Account creation and credential verification. Tokens are issued here;
//! decoding them back into a request identity is the auth middleware's job.

use shared::models::{User, UserCreate};
use sqlx::SqlitePool;
use validator::Validate;

use super::{ServiceError, ServiceResult};
use crate::auth::JwtService;
use crate::db::repository::user;

/// Hash a password with argon2 and a fresh salt.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    use argon2::{
        Argon2,
        password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
    };

    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2.hash_password(password.as_bytes(), &salt)?;
    Ok(password_hash.to_string())
}

/// Verify a password against a stored argon2 hash.
pub fn verify_password(hash: &str, password: &str) -> Result<bool, argon2::password_hash::Error> {
    use argon2::{
        Argon2,
        password_hash::{PasswordHash, PasswordVerifier},
    };

    let parsed_hash = PasswordHash::new(hash)?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Uniform credential failure; never reveals whether the email exists.
fn invalid_credentials() -> ServiceError {
    ServiceError::Validation("Invalid email or password".into())
}

pub async fn create_account(pool: &SqlitePool, input: UserCreate) -> ServiceResult<User> {
    input.validate()?;
    if user::find_by_email(pool, &input.email).await?.is_some() {
        return Err(ServiceError::Conflict(format!(
            "Account '{}' already exists",
            input.email
        )));
    }
    let hash = hash_password(&input.password)
        .map_err(|e| ServiceError::Internal(format!("Failed to hash password: {e}")))?;
    let created = user::create(pool, &input.email, &hash, input.role).await?;
    tracing::info!(user_id = created.id, role = created.role.as_str(), "account created");
    Ok(created)
}

/// Verify credentials and issue an access token.
pub async fn login(
    pool: &SqlitePool,
    jwt: &JwtService,
    email: &str,
    password: &str,
) -> ServiceResult<(String, User)> {
    let found = user::find_by_email(pool, email)
        .await?
        .ok_or_else(invalid_credentials)?;

    let valid = verify_password(&found.password_hash, password)
        .map_err(|e| ServiceError::Internal(format!("Password verification failed: {e}")))?;
    if !valid {
        return Err(invalid_credentials());
    }

    let token = jwt
        .generate_token(&found)
        .map_err(|e| ServiceError::Internal(format!("Failed to generate token: {e}")))?;

    tracing::info!(user_id = found.id, "user logged in");
    Ok((token, found))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::JwtConfig;
    use crate::db::test_pool;
    use shared::models::UserRole;

    fn test_jwt() -> JwtService {
        JwtService::with_config(JwtConfig {
            secret: "test-secret-test-secret-test-secret!".into(),
            expiration_minutes: 60,
            issuer: "eats-server".into(),
            audience: "eats-clients".into(),
        })
    }

    fn account(email: &str) -> UserCreate {
        UserCreate {
            email: email.into(),
            password: "hunter2hunter2".into(),
            role: UserRole::Owner,
        }
    }

    #[tokio::test]
    async fn create_account_hashes_password_and_fixes_role() {
        let pool = test_pool().await;
        let created = create_account(&pool, account("alice@eats.test")).await.unwrap();
        assert_eq!(created.role, UserRole::Owner);
        assert_ne!(created.password_hash, "hunter2hunter2");
        assert!(verify_password(&created.password_hash, "hunter2hunter2").unwrap());
    }

    #[tokio::test]
    async fn duplicate_email_is_a_conflict() {
        let pool = test_pool().await;
        create_account(&pool, account("alice@eats.test")).await.unwrap();
        let err = create_account(&pool, account("alice@eats.test")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
    }

    #[tokio::test]
    async fn login_round_trips_identity_through_the_token() {
        let pool = test_pool().await;
        let jwt = test_jwt();
        let created = create_account(&pool, account("alice@eats.test")).await.unwrap();

        let (token, user) = login(&pool, &jwt, "alice@eats.test", "hunter2hunter2")
            .await
            .unwrap();
        assert_eq!(user.id, created.id);

        let claims = jwt.validate_token(&token).unwrap();
        assert_eq!(claims.sub, created.id.to_string());
        assert_eq!(claims.role, UserRole::Owner);
    }

    #[tokio::test]
    async fn login_failure_is_uniform_for_unknown_email_and_bad_password() {
        let pool = test_pool().await;
        let jwt = test_jwt();
        create_account(&pool, account("alice@eats.test")).await.unwrap();

        let unknown = login(&pool, &jwt, "bob@eats.test", "hunter2hunter2")
            .await
            .unwrap_err();
        let wrong = login(&pool, &jwt, "alice@eats.test", "wrong-password")
            .await
            .unwrap_err();
        assert_eq!(unknown.to_string(), wrong.to_string());
    }
}
