use std::io::{BufRead, Write};

use super::SessionError;
use crate::models::DeletedPair;
use crate::services::UserDb;
use crate::terminal::{non_empty, Terminal};

const RESET_IDENTITY_PROMPT: &str = "What is your name? (deletes both you and your partner's account):\n";

/// Ask for a username and delete it together with its partner
pub fn reset_pair<R: BufRead, W: Write>(
    terminal: &mut Terminal<R, W>,
    db: &UserDb,
) -> Result<DeletedPair, SessionError> {
    let username = terminal.prompt(non_empty, RESET_IDENTITY_PROMPT)?;
    let deleted = db.delete_pair(&username)?;

    terminal.say(format!(
        "Deleted users [{},{}]",
        deleted.user.username, deleted.user.partner_username
    ))?;
    if !deleted.partner_found {
        terminal.say(format!(
            "Note: partner record {} was already missing.",
            deleted.user.partner_username
        ))?;
    }

    Ok(deleted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::StoreError;
    use std::io::Cursor;
    use tempfile::TempDir;

    #[test]
    fn test_reset_deletes_both() {
        let dir = TempDir::new().unwrap();
        let db = UserDb::open(&dir.path().join("users.db")).unwrap();
        db.create_pair("alice", "bob").unwrap();

        let mut term = Terminal::new(Cursor::new(b"bob\n".to_vec()), Vec::new());
        let deleted = reset_pair(&mut term, &db).unwrap();
        assert!(deleted.partner_found);
        assert_eq!(db.count().unwrap(), 0);

        let (_, output) = term.into_inner();
        assert!(String::from_utf8(output).unwrap().contains("Deleted users [bob,alice]\n"));
    }

    #[test]
    fn test_reset_unknown_user() {
        let dir = TempDir::new().unwrap();
        let db = UserDb::open(&dir.path().join("users.db")).unwrap();

        let mut term = Terminal::new(Cursor::new(b"nobody\n".to_vec()), Vec::new());
        let err = reset_pair(&mut term, &db).unwrap_err();
        assert!(matches!(err, SessionError::Store(StoreError::NotFound(_))));
    }
}
