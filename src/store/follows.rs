use std::collections::BTreeSet;

/// Ids the signed-in user follows. Never contains the user's own id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FollowSet {
    owner: String,
    ids: BTreeSet<String>,
}

impl FollowSet {
    pub fn new<I, S>(owner: impl Into<String>, initial: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let owner = owner.into();
        let ids = initial
            .into_iter()
            .map(Into::into)
            .filter(|id| *id != owner)
            .collect();
        Self { owner, ids }
    }

    /// Flip membership; returns whether `user_id` is now followed.
    /// Toggling the owner is a no-op.
    pub fn toggle(&mut self, user_id: &str) -> bool {
        if user_id == self.owner {
            return false;
        }
        if !self.ids.remove(user_id) {
            self.ids.insert(user_id.to_string());
            return true;
        }
        false
    }

    pub fn contains(&self, user_id: &str) -> bool {
        self.ids.contains(user_id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores() {
        let mut set = FollowSet::new("u2", ["u1"]);
        let before = set.clone();
        assert!(set.toggle("u3"));
        assert!(set.contains("u3"));
        assert!(!set.toggle("u3"));
        assert_eq!(set, before);
    }

    #[test]
    fn test_owner_never_followed() {
        let mut set = FollowSet::new("u2", ["u1", "u2"]);
        assert!(!set.contains("u2"));
        assert!(!set.toggle("u2"));
        assert!(!set.contains("u2"));
        assert_eq!(set.len(), 1);
    }
}
