//! Substring search across the feed, people and the network catalog.

use crate::models::{Community, Opportunity, Post, User};
use crate::widgets::InputBox;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchSection {
    #[default]
    Posts,
    People,
    Communities,
    Opportunities,
}

impl SearchSection {
    pub const ALL: [SearchSection; 4] = [
        SearchSection::Posts,
        SearchSection::People,
        SearchSection::Communities,
        SearchSection::Opportunities,
    ];

    pub fn label_key(&self) -> &'static str {
        match self {
            SearchSection::Posts => "search.posts",
            SearchSection::People => "search.people",
            SearchSection::Communities => "search.communities",
            SearchSection::Opportunities => "network.opportunities",
        }
    }
}

/// Matches for one query. Posts are held by id so results stay valid while
/// the store changes underneath.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SearchResults {
    pub posts: Vec<String>,
    pub users: Vec<User>,
    pub communities: Vec<Community>,
    pub opportunities: Vec<Opportunity>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
            && self.users.is_empty()
            && self.communities.is_empty()
            && self.opportunities.is_empty()
    }

    pub fn total(&self) -> usize {
        self.posts.len() + self.users.len() + self.communities.len() + self.opportunities.len()
    }
}

fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn any_tag(tags: &[String], needle: &str) -> bool {
    tags.iter().any(|t| contains(t, needle))
}

/// Case-insensitive substring search. A blank query matches nothing.
pub fn search(
    query: &str,
    posts: &[Post],
    users: &[User],
    communities: &[Community],
    opportunities: &[Opportunity],
) -> SearchResults {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return SearchResults::default();
    }

    SearchResults {
        posts: posts
            .iter()
            .filter(|p| contains(&p.content, &needle))
            .map(|p| p.id.clone())
            .collect(),
        users: users
            .iter()
            .filter(|u| {
                contains(&u.name, &needle) || contains(&u.handle, &needle) || any_tag(&u.tags, &needle)
            })
            .cloned()
            .collect(),
        communities: communities
            .iter()
            .filter(|c| contains(&c.name, &needle) || any_tag(&c.tags, &needle))
            .cloned()
            .collect(),
        opportunities: opportunities
            .iter()
            .filter(|o| {
                contains(&o.title, &needle)
                    || contains(&o.organization, &needle)
                    || any_tag(&o.tags, &needle)
            })
            .cloned()
            .collect(),
    }
}

#[derive(Debug, Default)]
pub struct SearchState {
    pub query: InputBox,
    pub section: SearchSection,
    pub cursor: usize,
    results: SearchResults,
}

impl SearchState {
    pub fn results(&self) -> &SearchResults {
        &self.results
    }

    pub fn set_results(&mut self, results: SearchResults) {
        self.results = results;
        self.cursor = 0;
    }

    pub fn next_section(&mut self) {
        let i = SearchSection::ALL
            .iter()
            .position(|s| *s == self.section)
            .unwrap_or(0);
        self.section = SearchSection::ALL[(i + 1) % SearchSection::ALL.len()];
        self.cursor = 0;
    }

    pub fn section_len(&self) -> usize {
        match self.section {
            SearchSection::Posts => self.results.posts.len(),
            SearchSection::People => self.results.users.len(),
            SearchSection::Communities => self.results.communities.len(),
            SearchSection::Opportunities => self.results.opportunities.len(),
        }
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.section_len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        self.cursor = (self.cursor as isize + delta).clamp(0, len as isize - 1) as usize;
    }

    /// Drops post hits that are no longer in the store.
    pub fn retain_posts(&mut self, exists: impl Fn(&str) -> bool) {
        self.results.posts.retain(|id| exists(id));
        if self.section == SearchSection::Posts {
            self.move_cursor(0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn run(query: &str) -> SearchResults {
        search(
            query,
            &seed::posts(),
            &seed::users(),
            &seed::communities(),
            &seed::opportunities(),
        )
    }

    #[test]
    fn test_blank_query_matches_nothing() {
        assert!(run("").is_empty());
        assert!(run("   ").is_empty());
    }

    #[test]
    fn test_user_match_is_case_insensitive() {
        let results = run("LI WEI");
        assert!(results.users.iter().any(|u| u.id == "u2"));
        let by_handle = run("Sato_H");
        assert!(by_handle.users.iter().any(|u| u.id == "u1"));
    }

    #[test]
    fn test_tag_matches_users_and_communities() {
        let results = run("rust");
        assert!(results.users.iter().any(|u| u.id == "u2"));
        for c in &results.communities {
            assert!(c.name.to_lowercase().contains("rust") || c.tags.iter().any(|t| t.contains("rust")));
        }
    }

    #[test]
    fn test_post_content_match() {
        let posts = seed::posts();
        let word: String = posts[0].content.chars().take(4).collect();
        let results = run(&word);
        assert!(results.posts.contains(&posts[0].id));
    }

    #[test]
    fn test_no_match() {
        assert!(run("zzzz-no-such-thing").is_empty());
    }

    #[test]
    fn test_retain_posts_drops_deleted() {
        let mut state = SearchState::default();
        state.set_results(SearchResults {
            posts: vec!["p1".into(), "p2".into()],
            ..SearchResults::default()
        });
        state.cursor = 1;
        state.retain_posts(|id| id == "p1");
        assert_eq!(state.results().posts, vec!["p1".to_string()]);
        assert_eq!(state.cursor, 0);
    }
}
