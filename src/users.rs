//! In-memory user registry.
//!
//! Ids are sequential and email addresses are unique. Uniqueness is enforced
//! through a secondary index whose entry API claims the address atomically,
//! so concurrent creates with the same email cannot both succeed.

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::{ApiError, ErrorCode};

/// A registered user.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct User {
    /// Unique user id, assigned at creation.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Email address, unique across all users.
    pub email: String,
}

/// Thread-safe registry of users.
pub struct UserStore {
    users: DashMap<u64, User>,
    /// Maps email addresses to user ids for uniqueness checks.
    email_index: DashMap<String, u64>,
    next_id: AtomicU64,
}

impl UserStore {
    /// Creates an empty store. Ids start at 1.
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            email_index: DashMap::new(),
            next_id: AtomicU64::new(1),
        }
    }

    /// Creates a user. Returns `EMAIL_DUPLICATION` if the address is taken.
    pub fn create(&self, name: &str, email: &str) -> Result<User, ApiError> {
        match self.email_index.entry(email.to_string()) {
            Entry::Occupied(_) => Err(ApiError::code(ErrorCode::EmailDuplication)),
            Entry::Vacant(slot) => {
                let id = self.next_id.fetch_add(1, Ordering::Relaxed);
                let user = User {
                    id,
                    name: name.to_string(),
                    email: email.to_string(),
                };
                self.users.insert(id, user.clone());
                slot.insert(id);
                Ok(user)
            }
        }
    }

    /// Returns a clone of the user with the given id.
    pub fn get(&self, id: u64) -> Option<User> {
        self.users.get(&id).map(|u| u.value().clone())
    }

    /// Lists all users in id order.
    pub fn list(&self) -> Vec<User> {
        let mut result: Vec<User> = self.users.iter().map(|u| u.value().clone()).collect();
        result.sort_by_key(|u| u.id);
        result
    }

    /// Returns the number of registered users.
    pub fn count(&self) -> usize {
        self.users.len()
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_get() {
        let store = UserStore::new();
        let user = store.create("홍길동", "hong@example.com").unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.name, "홍길동");

        let fetched = store.get(user.id).unwrap();
        assert_eq!(fetched.email, "hong@example.com");

        assert!(store.get(999).is_none());
    }

    #[test]
    fn test_duplicate_email_rejected() {
        let store = UserStore::new();
        store.create("first", "dup@example.com").unwrap();

        let err = store.create("second", "dup@example.com").unwrap_err();
        assert!(matches!(
            err,
            ApiError::App {
                code: ErrorCode::EmailDuplication,
                ..
            }
        ));

        // The failed create must not have consumed an id or stored a user.
        assert_eq!(store.count(), 1);
        let user = store.create("third", "other@example.com").unwrap();
        assert_eq!(user.id, 2);
    }

    #[test]
    fn test_list_in_id_order() {
        let store = UserStore::new();
        store.create("a", "a@example.com").unwrap();
        store.create("b", "b@example.com").unwrap();
        store.create("c", "c@example.com").unwrap();

        let list = store.list();
        assert_eq!(list.len(), 3);
        assert_eq!(list[0].id, 1);
        assert_eq!(list[1].id, 2);
        assert_eq!(list[2].id, 3);
        assert_eq!(store.count(), 3);
    }
}
