//! Search view actions.

use crate::seed;
use crate::state::search::search;
use crate::state::SearchSection;

use super::{App, View};

impl App {
    /// Re-run the query against the current data.
    pub fn refresh_search(&mut self) {
        let results = search(
            self.search.query.content(),
            self.store.posts(),
            &self.known_users(),
            &seed::communities(),
            &seed::opportunities(),
        );
        self.search.set_results(results);
    }

    /// Enter on a hit: people open their profile, posts jump to the feed.
    pub fn search_activate(&mut self) -> bool {
        let cursor = self.search.cursor;
        match self.search.section {
            SearchSection::Posts => {
                let Some(index) = self
                    .search
                    .results()
                    .posts
                    .get(cursor)
                    .and_then(|id| self.store.position(id))
                else {
                    return false;
                };
                self.navigate(super::NavTarget::Feed);
                self.feed_cursor = index;
                true
            }
            SearchSection::People => {
                let Some(id) = self.search.results().users.get(cursor).map(|u| u.id.clone())
                else {
                    return false;
                };
                self.view_profile(&id);
                self.view == View::Profile
            }
            SearchSection::Communities | SearchSection::Opportunities => false,
        }
    }
}
