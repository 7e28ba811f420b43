//! User service - Handles user-related business logic.
//!
//! SOLID (SRP): Handles user-related use cases only.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{email_available, User, UserId};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UserRepository;
use crate::types::ListParams;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Get user by ID
    async fn get_user(&self, id: UserId) -> AppResult<User>;

    /// List users in descending order of creation time
    async fn list_users(&self, params: ListParams) -> AppResult<Vec<User>>;

    /// Create a user, rejecting an email already held by someone else
    async fn create_user(&self, fullname: String, email: String) -> AppResult<User>;

    /// Replace fullname and email of an existing user
    async fn update_user(&self, id: UserId, fullname: String, email: String) -> AppResult<User>;

    /// Delete user, returning the removed record
    async fn delete_user(&self, id: UserId) -> AppResult<User>;
}

/// Concrete implementation of UserService over a repository.
pub struct UserManager {
    users: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Check-then-write uniqueness guard; the unique index backs it up.
    async fn ensure_email_available(&self, email: &str, saving: Option<UserId>) -> AppResult<()> {
        let holder = self.users.find_by_email(email).await?;

        if email_available(holder.as_ref(), saving) {
            Ok(())
        } else {
            tracing::debug!(email, "Email already taken");
            Err(AppError::email_taken())
        }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn get_user(&self, id: UserId) -> AppResult<User> {
        self.users.find_by_id(id).await?.ok_or_not_found()
    }

    async fn list_users(&self, params: ListParams) -> AppResult<Vec<User>> {
        self.users.list(params.skip, params.limit()).await
    }

    async fn create_user(&self, fullname: String, email: String) -> AppResult<User> {
        self.ensure_email_available(&email, None).await?;
        self.users.create(fullname, email).await
    }

    async fn update_user(&self, id: UserId, fullname: String, email: String) -> AppResult<User> {
        self.get_user(id).await?;
        self.ensure_email_available(&email, Some(id)).await?;

        self.users
            .update(id, fullname, email)
            .await?
            .ok_or_not_found()
    }

    async fn delete_user(&self, id: UserId) -> AppResult<User> {
        self.users.delete(id).await?.ok_or_not_found()
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::infra::MockUserRepository;

    fn create_test_user(email: &str) -> User {
        User::new("Rafael Sanchez".to_string(), email.to_string())
    }

    fn service(repo: MockUserRepository) -> UserManager {
        UserManager::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn test_get_user_success() {
        let user = create_test_user("a@example.com");
        let id = user.id;

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .with(eq(id))
            .returning(move |_| Ok(Some(user.clone())));

        let result = service(repo).get_user(id).await;
        assert_eq!(result.unwrap().id, id);
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let result = service(repo).get_user(UserId::new()).await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound));
    }

    #[tokio::test]
    async fn test_list_users_applies_capped_limit() {
        let mut repo = MockUserRepository::new();
        repo.expect_list()
            .with(eq(5u64), eq(100u64))
            .returning(|_, _| Ok(vec![create_test_user("a@example.com")]));

        let result = service(repo).list_users(ListParams::new(5, 5_000)).await;
        assert_eq!(result.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_user_with_free_email() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .with(eq("new@example.com"))
            .returning(|_| Ok(None));
        repo.expect_create()
            .times(1)
            .returning(|fullname, email| Ok(User::new(fullname, email)));

        let user = service(repo)
            .create_user("New User".to_string(), "new@example.com".to_string())
            .await
            .unwrap();

        assert_eq!(user.fullname, "New User");
        assert_eq!(user.email, "new@example.com");
    }

    #[tokio::test]
    async fn test_create_user_with_taken_email_never_writes() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(|email| Ok(Some(create_test_user(email))));
        repo.expect_create().never();

        let result = service(repo)
            .create_user("Other".to_string(), "taken@example.com".to_string())
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_update_user_keeping_own_email() {
        let existing = create_test_user("same@example.com");
        let id = existing.id;
        let holder = existing.clone();

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(existing.clone())));
        repo.expect_find_by_email()
            .returning(move |_| Ok(Some(holder.clone())));
        repo.expect_update()
            .with(eq(id), eq("KK".to_string()), eq("same@example.com".to_string()))
            .returning(move |id, fullname, email| {
                let mut user = User::new(fullname, email);
                user.id = id;
                Ok(Some(user))
            });

        let user = service(repo)
            .update_user(id, "KK".to_string(), "same@example.com".to_string())
            .await
            .unwrap();

        assert_eq!(user.id, id);
        assert_eq!(user.fullname, "KK");
    }

    #[tokio::test]
    async fn test_update_user_to_email_of_other_user() {
        let existing = create_test_user("mine@example.com");
        let id = existing.id;

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(existing.clone())));
        repo.expect_find_by_email()
            .returning(|email| Ok(Some(create_test_user(email))));
        repo.expect_update().never();

        let result = service(repo)
            .update_user(id, "Me".to_string(), "theirs@example.com".to_string())
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_update_missing_user_is_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        repo.expect_find_by_email().never();
        repo.expect_update().never();

        let result = service(repo)
            .update_user(UserId::new(), "Me".to_string(), "me@example.com".to_string())
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_user_returns_removed_record() {
        let user = create_test_user("gone@example.com");
        let id = user.id;

        let mut repo = MockUserRepository::new();
        repo.expect_delete()
            .with(eq(id))
            .returning(move |_| Ok(Some(user.clone())));

        let removed = service(repo).delete_user(id).await.unwrap();
        assert_eq!(removed.email, "gone@example.com");
    }

    #[tokio::test]
    async fn test_delete_missing_user_is_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_delete().returning(|_| Ok(None));

        let result = service(repo).delete_user(UserId::new()).await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound));
    }
}
