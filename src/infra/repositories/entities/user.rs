//! User document as stored in the `users` collection.

use chrono::{DateTime, Utc};
use mongodb::bson::{self, oid::ObjectId};
use serde::{Deserialize, Serialize};

use crate::domain::User;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub fullname: String,
    pub email: String,
    #[serde(rename = "createdAt")]
    pub created_at: bson::DateTime,
}

/// Convert stored document to domain entity
impl From<UserDocument> for User {
    fn from(doc: UserDocument) -> Self {
        User {
            id: doc.id.into(),
            fullname: doc.fullname,
            email: doc.email,
            created_at: DateTime::<Utc>::from(doc.created_at.to_system_time()),
        }
    }
}

impl From<&User> for UserDocument {
    fn from(user: &User) -> Self {
        UserDocument {
            id: user.id.as_object_id(),
            fullname: user.fullname.clone(),
            email: user.email.clone(),
            created_at: bson::DateTime::from_millis(user.created_at.timestamp_millis()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_field_names() {
        let user = User::new("KK".to_string(), "kk@example.com".to_string());
        let doc = bson::to_document(&UserDocument::from(&user)).unwrap();

        assert_eq!(doc.get_object_id("_id").unwrap(), user.id.as_object_id());
        assert_eq!(doc.get_str("fullname").unwrap(), "KK");
        assert_eq!(doc.get_str("email").unwrap(), "kk@example.com");
        assert!(doc.get_datetime("createdAt").is_ok());
    }

    #[test]
    fn test_stored_user_reads_back_unchanged() {
        let user = User::new("KK".to_string(), "kk@example.com".to_string());
        let restored = User::from(UserDocument::from(&user));

        assert_eq!(restored, user);
    }
}
