use redb::{Database, ReadableTable, ReadableTableMetadata, TableDefinition};
use std::path::Path;
use thiserror::Error;
use validator::Validate;

use crate::models::{DeletedPair, User};

const USERS: TableDefinition<&str, &[u8]> = TableDefinition::new("users");

/// Errors that can occur when interacting with the user database
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("No such user: {0}")]
    NotFound(String),

    #[error("User already exists: {0}")]
    AlreadyExists(String),

    #[error("Consistency error: {0}")]
    Consistency(String),

    #[error("Invalid user record: {0}")]
    Invalid(#[from] validator::ValidationErrors),
}

fn storage<E: std::fmt::Display>(err: E) -> StoreError {
    StoreError::Storage(err.to_string())
}

/// Durable username -> user record mapping backed by a single redb file
///
/// Every call runs in exactly one redb transaction. Read-modify-write
/// sequences spanning several calls are not isolated from another process
/// using the same file; the last `put` wins.
pub struct UserDb {
    db: Database,
}

impl UserDb {
    /// Open or create the database file and make sure the users table exists
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        tracing::debug!("Opening user database at {}", path.display());

        let db = Database::create(path).map_err(storage)?;

        let write_txn = db.begin_write().map_err(storage)?;
        {
            let _table = write_txn.open_table(USERS).map_err(storage)?;
        }
        write_txn.commit().map_err(storage)?;

        Ok(Self { db })
    }

    /// Look up a user. A missing record is `Ok(None)`; a corrupt one is an error.
    pub fn get(&self, username: &str) -> Result<Option<User>, StoreError> {
        let read_txn = self.db.begin_read().map_err(storage)?;
        let table = read_txn.open_table(USERS).map_err(storage)?;

        let bytes = match table.get(username).map_err(storage)? {
            Some(guard) => guard.value().to_vec(),
            None => {
                tracing::trace!("User not found: {}", username);
                return Ok(None);
            }
        };

        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    /// Upsert the full record under `user.username`
    pub fn put(&self, user: &User) -> Result<(), StoreError> {
        user.validate()?;
        let bytes = serde_json::to_vec(user)?;

        let write_txn = self.db.begin_write().map_err(storage)?;
        {
            let mut table = write_txn.open_table(USERS).map_err(storage)?;
            table
                .insert(user.username.as_str(), bytes.as_slice())
                .map_err(storage)?;
        }
        write_txn.commit().map_err(storage)?;

        tracing::debug!("Stored user {}", user.username);
        Ok(())
    }

    /// Create two linked users with no rated names
    ///
    /// The existence check and both writes share one write transaction, so
    /// either both records are created or nothing changes.
    pub fn create_pair(&self, username: &str, partner_username: &str) -> Result<(User, User), StoreError> {
        if username == partner_username {
            return Err(StoreError::Consistency(format!(
                "cannot link user {} to themself",
                username
            )));
        }

        let user = User::new(username, partner_username);
        let partner = User::new(partner_username, username);
        user.validate()?;
        partner.validate()?;

        let user_bytes = serde_json::to_vec(&user)?;
        let partner_bytes = serde_json::to_vec(&partner)?;

        let write_txn = self.db.begin_write().map_err(storage)?;
        {
            let mut table = write_txn.open_table(USERS).map_err(storage)?;
            for name in [username, partner_username] {
                if table.get(name).map_err(storage)?.is_some() {
                    // Dropping the transaction aborts it
                    return Err(StoreError::AlreadyExists(name.to_string()));
                }
            }
            table.insert(username, user_bytes.as_slice()).map_err(storage)?;
            table
                .insert(partner_username, partner_bytes.as_slice())
                .map_err(storage)?;
        }
        write_txn.commit().map_err(storage)?;

        tracing::info!("Created users [{}, {}]", username, partner_username);
        Ok((user, partner))
    }

    /// Delete a user together with the record at its stored partner key
    ///
    /// A missing partner record does not fail the call; it is reported through
    /// `DeletedPair::partner_found`.
    pub fn delete_pair(&self, username: &str) -> Result<DeletedPair, StoreError> {
        let write_txn = self.db.begin_write().map_err(storage)?;
        let (user, partner_found) = {
            let mut table = write_txn.open_table(USERS).map_err(storage)?;

            let bytes = match table.get(username).map_err(storage)? {
                Some(guard) => guard.value().to_vec(),
                None => return Err(StoreError::NotFound(username.to_string())),
            };
            let user: User = serde_json::from_slice(&bytes)?;

            table.remove(username).map_err(storage)?;
            let partner_found = table
                .remove(user.partner_username.as_str())
                .map_err(storage)?
                .is_some();

            (user, partner_found)
        };
        write_txn.commit().map_err(storage)?;

        if partner_found {
            tracing::info!("Deleted users [{}, {}]", user.username, user.partner_username);
        } else {
            tracing::warn!(
                "Deleted user {}; partner record {} was already missing",
                user.username,
                user.partner_username
            );
        }

        Ok(DeletedPair { user, partner_found })
    }

    /// Number of stored user records
    pub fn count(&self) -> Result<u64, StoreError> {
        let read_txn = self.db.begin_read().map_err(storage)?;
        let table = read_txn.open_table(USERS).map_err(storage)?;
        table.len().map_err(storage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open_temp() -> (TempDir, UserDb) {
        let dir = TempDir::new().unwrap();
        let db = UserDb::open(&dir.path().join("users.db")).unwrap();
        (dir, db)
    }

    #[test]
    fn test_get_missing_is_none() {
        let (_dir, db) = open_temp();
        assert!(db.get("alice").unwrap().is_none());
        assert_eq!(db.count().unwrap(), 0);
    }

    #[test]
    fn test_create_pair_links_both() {
        let (_dir, db) = open_temp();
        db.create_pair("alice", "bob").unwrap();

        let alice = db.get("alice").unwrap().unwrap();
        assert_eq!(alice.partner_username, "bob");
        assert!(alice.liked_names.is_empty());
        assert!(alice.disliked_names.is_empty());

        let bob = db.get("bob").unwrap().unwrap();
        assert_eq!(bob.partner_username, "alice");
    }

    #[test]
    fn test_create_pair_rejects_self_link() {
        let (_dir, db) = open_temp();
        let err = db.create_pair("alice", "alice").unwrap_err();
        assert!(matches!(err, StoreError::Consistency(_)));
        assert_eq!(db.count().unwrap(), 0);
    }

    #[test]
    fn test_create_pair_rejects_empty_names() {
        let (_dir, db) = open_temp();
        let err = db.create_pair("alice", "").unwrap_err();
        assert!(matches!(err, StoreError::Invalid(_)));
        assert!(db.get("alice").unwrap().is_none());
    }

    #[test]
    fn test_put_overwrites() {
        let (_dir, db) = open_temp();
        let (mut alice, _) = db.create_pair("alice", "bob").unwrap();
        alice.like_name("Ann");
        db.put(&alice).unwrap();

        alice.dislike_name("Ann");
        db.put(&alice).unwrap();

        let stored = db.get("alice").unwrap().unwrap();
        assert!(stored.disliked_names.contains("Ann"));
        assert!(!stored.liked_names.contains("Ann"));
    }

    #[test]
    fn test_corrupt_record_is_error() {
        let (_dir, db) = open_temp();
        let write_txn = db.db.begin_write().unwrap();
        {
            let mut table = write_txn.open_table(USERS).unwrap();
            table.insert("alice", b"not json".as_slice()).unwrap();
        }
        write_txn.commit().unwrap();

        let err = db.get("alice").unwrap_err();
        assert!(matches!(err, StoreError::Serialization(_)));
    }

    #[test]
    fn test_delete_pair_without_partner_record() {
        let (_dir, db) = open_temp();
        db.put(&User::new("alice", "bob")).unwrap();

        let deleted = db.delete_pair("alice").unwrap();
        assert!(!deleted.partner_found);
        assert_eq!(deleted.user.partner_username, "bob");
        assert!(db.get("alice").unwrap().is_none());
    }

    #[test]
    fn test_delete_pair_missing_user() {
        let (_dir, db) = open_temp();
        let err = db.delete_pair("nobody").unwrap_err();
        assert!(matches!(err, StoreError::NotFound(name) if name == "nobody"));
    }
}
