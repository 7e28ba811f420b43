//! User repository backed by a MongoDB collection.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    error::{ErrorKind, WriteFailure},
    options::{IndexOptions, ReturnDocument},
    Collection, IndexModel,
};
use tracing::instrument;

use super::entities::UserDocument;
use crate::config::{DUPLICATE_KEY_CODE, EMAIL_UNIQUE_INDEX, USERS_COLLECTION};
use crate::domain::{User, UserId};
use crate::errors::{AppError, AppResult};
use crate::infra::Database;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Each method is a single store operation; uniqueness and NotFound
/// decisions belong to the service layer.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>>;

    /// Find user by email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// List users, newest first
    async fn list(&self, skip: u64, limit: u64) -> AppResult<Vec<User>>;

    /// Create a new user
    async fn create(&self, fullname: String, email: String) -> AppResult<User>;

    /// Overwrite fullname and email, returning the updated user if it exists
    async fn update(&self, id: UserId, fullname: String, email: String) -> AppResult<Option<User>>;

    /// Remove user, returning it if it existed
    async fn delete(&self, id: UserId) -> AppResult<Option<User>>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    collection: Collection<UserDocument>,
}

impl UserStore {
    /// Create new repository instance over the `users` collection
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(USERS_COLLECTION),
        }
    }

    /// Create the unique index on `email`.
    ///
    /// Turns a lost check-then-write race into a conflict instead of a
    /// duplicate record.
    pub async fn ensure_indexes(&self) -> AppResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name(EMAIL_UNIQUE_INDEX.to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(index).await?;
        tracing::info!(index = EMAIL_UNIQUE_INDEX, "User indexes ensured");
        Ok(())
    }

    fn id_filter(id: UserId) -> Document {
        doc! { "_id": id.as_object_id() }
    }

    fn newest_first() -> Document {
        doc! { "createdAt": -1, "_id": -1 }
    }
}

/// Map a write failure, translating duplicate keys into a conflict
fn map_write_error(err: mongodb::error::Error) -> AppError {
    if is_duplicate_key(&err) {
        AppError::email_taken()
    } else {
        AppError::from(err)
    }
}

/// Inserts report a duplicate key as a write error, find-and-modify as a
/// command error. The driver's error types cannot be built outside it, so
/// this is covered by the live-server tests (`tests/mongo_store_test.rs`).
fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(e)) => e.code == DUPLICATE_KEY_CODE,
        ErrorKind::Command(e) => e.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}

#[async_trait]
impl UserRepository for UserStore {
    #[instrument(skip(self), fields(user_id = %id))]
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        let found = self.collection.find_one(Self::id_filter(id)).await?;
        Ok(found.map(User::from))
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let found = self.collection.find_one(doc! { "email": email }).await?;
        Ok(found.map(User::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, skip: u64, limit: u64) -> AppResult<Vec<User>> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);

        let cursor = self
            .collection
            .find(doc! {})
            .sort(Self::newest_first())
            .skip(skip)
            .limit(limit)
            .await?;
        let documents: Vec<UserDocument> = cursor.try_collect().await?;

        Ok(documents.into_iter().map(User::from).collect())
    }

    #[instrument(skip(self, fullname))]
    async fn create(&self, fullname: String, email: String) -> AppResult<User> {
        let user = User::new(fullname, email);

        self.collection
            .insert_one(UserDocument::from(&user))
            .await
            .map_err(map_write_error)?;

        tracing::info!(user_id = %user.id, "User created");
        Ok(user)
    }

    #[instrument(skip(self, fullname), fields(user_id = %id))]
    async fn update(&self, id: UserId, fullname: String, email: String) -> AppResult<Option<User>> {
        let changes = doc! { "$set": { "fullname": fullname, "email": email } };

        let updated = self
            .collection
            .find_one_and_update(Self::id_filter(id), changes)
            .return_document(ReturnDocument::After)
            .await
            .map_err(map_write_error)?;

        if updated.is_some() {
            tracing::info!(user_id = %id, "User updated");
        }
        Ok(updated.map(User::from))
    }

    #[instrument(skip(self), fields(user_id = %id))]
    async fn delete(&self, id: UserId) -> AppResult<Option<User>> {
        let removed = self
            .collection
            .find_one_and_delete(Self::id_filter(id))
            .await?;

        if removed.is_some() {
            tracing::info!(user_id = %id, "User deleted");
        }
        Ok(removed.map(User::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_filter_uses_object_id() {
        let id = UserId::new();
        let filter = UserStore::id_filter(id);
        assert_eq!(filter.get_object_id("_id").unwrap(), id.as_object_id());
    }

    #[test]
    fn test_sort_is_newest_first_with_id_tiebreak() {
        let sort = UserStore::newest_first();
        let keys: Vec<&String> = sort.keys().collect();
        assert_eq!(keys, vec!["createdAt", "_id"]);
        assert_eq!(sort.get_i32("createdAt").unwrap(), -1);
        assert_eq!(sort.get_i32("_id").unwrap(), -1);
    }
}
