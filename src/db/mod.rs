//! Database layer (Firestore).

pub mod firestore;

pub use firestore::FirestoreDb;

/// Collection names as constants.
pub mod collections {
    /// User profiles (keyed by identity-provider uid)
    pub const USERS: &str = "users";
    /// Public directory users (keyed by numeric id)
    pub const DIRECTORY_USERS: &str = "directory_users";
}
