use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use validator::Validate;

/// One participant's record: identity, partner link and name preferences
///
/// `liked_names` and `disliked_names` are kept disjoint by `like_name` and
/// `dislike_name`; the last call for a given name wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct User {
    #[validate(length(min = 1))]
    pub username: String,
    #[serde(rename = "partnerUsername")]
    #[validate(length(min = 1))]
    pub partner_username: String,
    #[serde(rename = "likedNames", default)]
    pub liked_names: HashSet<String>,
    #[serde(rename = "dislikedNames", default)]
    pub disliked_names: HashSet<String>,
}

impl User {
    /// Fresh record with no rated names
    pub fn new(username: impl Into<String>, partner_username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            partner_username: partner_username.into(),
            liked_names: HashSet::new(),
            disliked_names: HashSet::new(),
        }
    }

    pub fn like_name(&mut self, name: &str) {
        self.disliked_names.remove(name);
        self.liked_names.insert(name.to_string());
    }

    pub fn dislike_name(&mut self, name: &str) {
        self.liked_names.remove(name);
        self.disliked_names.insert(name.to_string());
    }

    pub fn likes(&self, name: &str) -> bool {
        self.liked_names.contains(name)
    }

    /// Whether the name has been liked or disliked already
    pub fn has_rated(&self, name: &str) -> bool {
        self.liked_names.contains(name) || self.disliked_names.contains(name)
    }

    /// Apply a yes/no verdict
    pub fn rate(&mut self, name: &str, verdict: Verdict) {
        match verdict {
            Verdict::Like => self.like_name(name),
            Verdict::Dislike => self.dislike_name(name),
        }
    }
}

/// Answer given for one candidate name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Like,
    Dislike,
}

impl Verdict {
    /// Parse a trimmed `y`/`n` answer
    pub fn from_answer(answer: &str) -> Option<Self> {
        match answer {
            "y" => Some(Verdict::Like),
            "n" => Some(Verdict::Dislike),
            _ => None,
        }
    }
}

/// Outcome of a paired deletion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletedPair {
    pub user: User,
    /// False when the partner key held no record at delete time
    pub partner_found: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_then_dislike_last_wins() {
        let mut user = User::new("alice", "bob");
        user.like_name("Ann");
        user.dislike_name("Ann");

        assert!(user.disliked_names.contains("Ann"));
        assert!(!user.liked_names.contains("Ann"));

        user.like_name("Ann");
        assert!(user.likes("Ann"));
        assert!(!user.disliked_names.contains("Ann"));
    }

    #[test]
    fn test_like_is_idempotent() {
        let mut user = User::new("alice", "bob");
        user.like_name("Ann");
        user.like_name("Ann");

        assert_eq!(user.liked_names.len(), 1);
        assert!(user.disliked_names.is_empty());
    }

    #[test]
    fn test_serialized_shape() {
        let user = User::new("alice", "bob");
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "username": "alice",
                "partnerUsername": "bob",
                "likedNames": [],
                "dislikedNames": [],
            })
        );
    }

    #[test]
    fn test_round_trip_with_names() {
        let mut user = User::new("alice", "bob");
        user.like_name("Ann");
        user.dislike_name("Bo");

        let bytes = serde_json::to_vec(&user).unwrap();
        let decoded: User = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(decoded, user);
    }

    #[test]
    fn test_validation_rejects_empty_username() {
        assert!(User::new("", "bob").validate().is_err());
        assert!(User::new("alice", "").validate().is_err());
        assert!(User::new("alice", "bob").validate().is_ok());
    }

    #[test]
    fn test_verdict_from_answer() {
        assert_eq!(Verdict::from_answer("y"), Some(Verdict::Like));
        assert_eq!(Verdict::from_answer("n"), Some(Verdict::Dislike));
        assert_eq!(Verdict::from_answer("yes"), None);
    }
}
