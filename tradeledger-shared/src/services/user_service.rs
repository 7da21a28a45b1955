/// User registration and password authentication

use std::sync::Arc;

use tracing::{debug, info};

use super::ServiceResult;
use crate::auth::password::{hash_password, verify_password};
use crate::models::{CreateUser, User};
use crate::stores::UserStore;

#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// Hashes the password and stores a new user
    ///
    /// A duplicate email surfaces as
    /// [`StoreError::UniqueViolation`](crate::stores::StoreError::UniqueViolation).
    pub async fn register_user(
        &self,
        email: &str,
        password: &str,
        name: Option<String>,
    ) -> ServiceResult<User> {
        let password_hash = hash_password(password)?;

        let user = self
            .store
            .insert_user(CreateUser {
                email: email.to_string(),
                password_hash,
                name,
            })
            .await?;

        info!(user_id = user.id, "User registered");
        Ok(user)
    }

    /// Returns the user if `email` exists and `password` matches its hash
    pub async fn authenticate_user(&self, email: &str, password: &str) -> ServiceResult<Option<User>> {
        let Some(user) = self.store.find_user_by_email(email).await? else {
            debug!("Authentication failed: unknown email");
            return Ok(None);
        };

        if !verify_password(password, &user.password_hash)? {
            debug!(user_id = user.id, "Authentication failed: password mismatch");
            return Ok(None);
        }

        Ok(Some(user))
    }

    pub async fn get_user(&self, user_id: i64) -> ServiceResult<Option<User>> {
        Ok(self.store.find_user(user_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{testing::RecordingStore, ServiceError};
    use crate::stores::StoreError;

    fn service() -> (Arc<RecordingStore>, UserService) {
        let store = Arc::new(RecordingStore::new());
        (store.clone(), UserService::new(store))
    }

    #[tokio::test]
    async fn test_register_user_hashes_password() {
        let (store, service) = service();

        let user = service
            .register_user("test@example.com", "password123", Some("Test User".to_string()))
            .await
            .unwrap();

        assert_eq!(user.email, "test@example.com");
        assert_eq!(user.name.as_deref(), Some("Test User"));
        assert_ne!(user.password_hash, "password123");
        assert!(verify_password("password123", &user.password_hash).unwrap());
        assert_eq!(store.inserts(), 1);
    }

    #[tokio::test]
    async fn test_register_duplicate_email_fails() {
        let (_, service) = service();
        service
            .register_user("test@example.com", "password123", None)
            .await
            .unwrap();

        let result = service
            .register_user("test@example.com", "password456", None)
            .await;

        assert!(matches!(
            result,
            Err(ServiceError::Store(StoreError::UniqueViolation { .. }))
        ));
    }

    #[tokio::test]
    async fn test_authenticate_user_success() {
        let (_, service) = service();
        let registered = service
            .register_user("test@example.com", "password123", None)
            .await
            .unwrap();

        let user = service
            .authenticate_user("test@example.com", "password123")
            .await
            .unwrap();

        assert_eq!(user.map(|u| u.id), Some(registered.id));
    }

    #[tokio::test]
    async fn test_authenticate_user_wrong_password() {
        let (_, service) = service();
        service
            .register_user("test@example.com", "password123", None)
            .await
            .unwrap();

        let user = service
            .authenticate_user("test@example.com", "wrongpassword")
            .await
            .unwrap();

        assert!(user.is_none());
    }

    #[tokio::test]
    async fn test_authenticate_unknown_email() {
        let (_, service) = service();

        let user = service
            .authenticate_user("nobody@example.com", "password123")
            .await
            .unwrap();

        assert!(user.is_none());
    }

    #[tokio::test]
    async fn test_get_user() {
        let (_, service) = service();
        let user = service
            .register_user("test@example.com", "password123", None)
            .await
            .unwrap();

        assert_eq!(service.get_user(user.id).await.unwrap(), Some(user));
        assert!(service.get_user(999).await.unwrap().is_none());
    }
}
