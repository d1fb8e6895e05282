use crate::models::User;

/// Names both partners have liked, in ascending order
///
/// Symmetric in its arguments. Disjoint or empty liked sets give an empty result.
pub fn matched(user: &User, partner: &User) -> Vec<String> {
    // Probe the larger set from the smaller one
    let (small, large) = if user.liked_names.len() <= partner.liked_names.len() {
        (&user.liked_names, &partner.liked_names)
    } else {
        (&partner.liked_names, &user.liked_names)
    };

    let mut names: Vec<String> = small
        .iter()
        .filter(|name| large.contains(*name))
        .cloned()
        .collect();
    names.sort();
    names
}

/// Names the partner liked that the user has not rated yet, ascending
#[inline]
pub fn partner_suggestions(user: &User, partner: &User) -> Vec<String> {
    let mut names: Vec<String> = partner
        .liked_names
        .iter()
        .filter(|name| !user.has_rated(name))
        .cloned()
        .collect();
    names.sort();
    names
}

/// Whether the name should still be offered to the user
#[inline]
pub fn needs_rating(user: &User, name: &str) -> bool {
    !user.has_rated(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_user(username: &str, partner: &str, liked: &[&str], disliked: &[&str]) -> User {
        let mut user = User::new(username, partner);
        for name in liked {
            user.like_name(name);
        }
        for name in disliked {
            user.dislike_name(name);
        }
        user
    }

    #[test]
    fn test_matched_single_overlap() {
        let alice = create_user("alice", "bob", &["Ann"], &[]);
        let bob = create_user("bob", "alice", &["Ann", "Bo"], &[]);

        assert_eq!(matched(&alice, &bob), vec!["Ann".to_string()]);
    }

    #[test]
    fn test_matched_is_symmetric_and_sorted() {
        let alice = create_user("alice", "bob", &["Zed", "Ann", "Mia", "Cy"], &[]);
        let bob = create_user("bob", "alice", &["Cy", "Zed", "Ann"], &["Mia"]);

        let forward = matched(&alice, &bob);
        assert_eq!(forward, matched(&bob, &alice));
        assert_eq!(forward, vec!["Ann", "Cy", "Zed"]);
    }

    #[test]
    fn test_matched_disjoint_is_empty() {
        let alice = create_user("alice", "bob", &["Ann"], &[]);
        let bob = create_user("bob", "alice", &["Bo"], &["Ann"]);

        assert!(matched(&alice, &bob).is_empty());
        assert!(matched(&User::new("a", "b"), &User::new("b", "a")).is_empty());
    }

    #[test]
    fn test_partner_suggestions_skip_rated() {
        let alice = create_user("alice", "bob", &["Ann"], &["Cy"]);
        let bob = create_user("bob", "alice", &["Cy", "Bo", "Ann", "Al"], &[]);

        assert_eq!(partner_suggestions(&alice, &bob), vec!["Al", "Bo"]);
    }

    #[test]
    fn test_needs_rating() {
        let alice = create_user("alice", "bob", &["Ann"], &["Bo"]);

        assert!(!needs_rating(&alice, "Ann"));
        assert!(!needs_rating(&alice, "Bo"));
        assert!(needs_rating(&alice, "Cy"));
    }
}
