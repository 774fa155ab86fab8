// SPDX-License-Identifier: MIT

//! User directory repository.
//!
//! The directory behind `/api/users` is an injected trait so the HTTP
//! layer does not care where the records live: production uses the
//! Firestore-backed implementation, tests and local dev use the seeded
//! in-memory one.

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU32, Ordering};

use crate::db::FirestoreDb;
use crate::error::AppError;
use crate::models::DirectoryUser;

/// Repository of directory users.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// All users, ordered by id.
    async fn list(&self) -> Result<Vec<DirectoryUser>, AppError>;

    /// Append a user with `id = previous_count + 1` and return it.
    async fn create(&self, name: String, email: String) -> Result<DirectoryUser, AppError>;
}

// ─── Firestore implementation ────────────────────────────────────

/// Directory backed by the `directory_users` collection.
pub struct FirestoreDirectory {
    db: FirestoreDb,
}

impl FirestoreDirectory {
    pub fn new(db: FirestoreDb) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserDirectory for FirestoreDirectory {
    async fn list(&self) -> Result<Vec<DirectoryUser>, AppError> {
        self.db.list_directory_users().await
    }

    async fn create(&self, name: String, email: String) -> Result<DirectoryUser, AppError> {
        // Count-then-write, not serialized across instances. Matches the
        // id = previous_count + 1 contract for a single writer.
        let count = self.db.list_directory_users().await?.len() as u32;
        let user = DirectoryUser {
            id: count + 1,
            name,
            email,
        };
        self.db.set_directory_user(&user).await?;
        Ok(user)
    }
}

// ─── In-memory implementation ────────────────────────────────────

/// In-memory directory for tests and local development.
pub struct InMemoryDirectory {
    users: DashMap<u32, DirectoryUser>,
    next_id: AtomicU32,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            next_id: AtomicU32::new(1),
        }
    }

    /// Directory pre-populated with the three sample users.
    pub fn seeded() -> Self {
        let dir = Self::new();
        for (name, email) in [
            ("Alice Johnson", "alice@example.com"),
            ("Bob Smith", "bob@example.com"),
            ("Charlie Brown", "charlie@example.com"),
        ] {
            let id = dir.next_id.fetch_add(1, Ordering::SeqCst);
            dir.users.insert(
                id,
                DirectoryUser {
                    id,
                    name: name.to_string(),
                    email: email.to_string(),
                },
            );
        }
        dir
    }
}

impl Default for InMemoryDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserDirectory for InMemoryDirectory {
    async fn list(&self) -> Result<Vec<DirectoryUser>, AppError> {
        let mut users: Vec<DirectoryUser> =
            self.users.iter().map(|entry| entry.value().clone()).collect();
        users.sort_by_key(|u| u.id);
        Ok(users)
    }

    async fn create(&self, name: String, email: String) -> Result<DirectoryUser, AppError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let user = DirectoryUser { id, name, email };
        self.users.insert(id, user.clone());
        Ok(user)
    }
}
