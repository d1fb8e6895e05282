use std::io::{BufRead, Write};

use super::SessionError;
use crate::core::{matched, needs_rating, partner_suggestions};
use crate::models::{User, Verdict};
use crate::services::UserDb;
use crate::terminal::{yes_or_no, Terminal};

/// Totals reported when a rating session ends
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub rated: usize,
    pub liked: usize,
    pub matched: Vec<String>,
}

/// Drive the like/dislike loop for `user`
///
/// Names the partner already liked come first (ascending), then the session
/// names in the order given. Names the user has rated are skipped, so
/// duplicates are asked once. Every answer is persisted before the next prompt.
pub fn rate_names<R: BufRead, W: Write>(
    terminal: &mut Terminal<R, W>,
    db: &UserDb,
    user: &mut User,
    partner: &User,
    names: &[String],
) -> Result<SessionSummary, SessionError> {
    report_matches(terminal, &matched(user, partner))?;

    let mut rated = 0;
    let mut liked = 0;

    for name in partner_suggestions(user, partner) {
        let verdict = ask(terminal, &name)?;
        user.rate(&name, verdict);
        db.put(user)?;
        rated += 1;

        if verdict == Verdict::Like {
            liked += 1;
            terminal.say(format!("You and your partner matched on the name {:?}!", name))?;
        }
    }

    for name in names {
        if !needs_rating(user, name) {
            continue;
        }

        let verdict = ask(terminal, name)?;
        user.rate(name, verdict);
        db.put(user)?;
        rated += 1;

        if verdict == Verdict::Like {
            liked += 1;
            if partner.likes(name) {
                terminal.say(format!("You and your partner matched on the name {:?}!", name))?;
            }
        }
    }

    let summary = SessionSummary {
        rated,
        liked,
        matched: matched(user, partner),
    };
    terminal.say(format!("You rated {} names this session.", summary.rated))?;
    report_matches(terminal, &summary.matched)?;
    tracing::info!(
        "Session for {} finished: rated={} liked={} matched={}",
        user.username,
        summary.rated,
        summary.liked,
        summary.matched.len()
    );

    Ok(summary)
}

fn report_matches<R: BufRead, W: Write>(
    terminal: &mut Terminal<R, W>,
    names: &[String],
) -> Result<(), SessionError> {
    if names.is_empty() {
        terminal.say("You and your partner have not matched any names.")?;
    } else {
        terminal.say(format!(
            "You and your partner have matched the following names: {:?}",
            names
        ))?;
    }
    Ok(())
}

fn ask<R: BufRead, W: Write>(terminal: &mut Terminal<R, W>, name: &str) -> Result<Verdict, SessionError> {
    let answer = terminal.prompt(yes_or_no, &format!("Do you like the name {:?}? (y/n):\n", name))?;
    // yes_or_no only accepts answers Verdict understands
    Ok(Verdict::from_answer(&answer).unwrap_or(Verdict::Dislike))
}
