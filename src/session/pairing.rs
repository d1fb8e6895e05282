use std::io::{BufRead, Write};

use super::SessionError;
use crate::models::User;
use crate::services::UserDb;
use crate::terminal::{non_empty, Terminal};

const IDENTITY_PROMPT: &str = "What is your name? (creates your account):\n";
const PARTNER_PROMPT: &str = "Who is your partner? (creates their account):\n";

/// Resolve the current user and their partner, creating the pair if needed
///
/// An unknown username starts the linking flow: the partner must not exist
/// yet, and both records are created together. A known username must have
/// its partner record present; a dangling link is a consistency error and
/// is never repaired here.
pub fn identify<R: BufRead, W: Write>(
    terminal: &mut Terminal<R, W>,
    db: &UserDb,
) -> Result<(User, User), SessionError> {
    let username = terminal.prompt(non_empty, IDENTITY_PROMPT)?;

    if let Some(user) = db.get(&username)? {
        let partner = db.get(&user.partner_username)?.ok_or_else(|| {
            SessionError::Consistency(format!(
                "Missing partner {} for user {} in user database.",
                user.partner_username, user.username
            ))
        })?;
        tracing::debug!("Resumed session for {} with partner {}", user.username, partner.username);
        return Ok((user, partner));
    }

    let partner_username = terminal.prompt(non_empty, PARTNER_PROMPT)?;
    if db.get(&partner_username)?.is_some() {
        return Err(SessionError::Consistency(
            "Cannot link new user to existing partner.".to_string(),
        ));
    }

    Ok(db.create_pair(&username, &partner_username)?)
}
