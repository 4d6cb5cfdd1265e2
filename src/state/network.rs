//! Network browser: people, communities and opportunities.

use std::collections::HashSet;

use crate::models::{Community, Opportunity, User};
use crate::seed;
use crate::store::FollowSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NetworkTab {
    Connections,
    #[default]
    Communities,
    Opportunities,
}

impl NetworkTab {
    pub const ALL: [NetworkTab; 3] = [
        NetworkTab::Connections,
        NetworkTab::Communities,
        NetworkTab::Opportunities,
    ];

    pub fn label_key(&self) -> &'static str {
        match self {
            NetworkTab::Connections => "network.connections",
            NetworkTab::Communities => "network.communities",
            NetworkTab::Opportunities => "network.opportunities",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            NetworkTab::Connections => NetworkTab::Communities,
            NetworkTab::Communities => NetworkTab::Opportunities,
            NetworkTab::Opportunities => NetworkTab::Connections,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommunitySort {
    #[default]
    Recommended,
    Popular,
    Newest,
}

impl CommunitySort {
    pub const ALL: [CommunitySort; 3] = [
        CommunitySort::Recommended,
        CommunitySort::Popular,
        CommunitySort::Newest,
    ];

    pub fn label_key(&self) -> &'static str {
        match self {
            CommunitySort::Recommended => "recommended",
            CommunitySort::Popular => "popular",
            CommunitySort::Newest => "newest",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            CommunitySort::Recommended => CommunitySort::Popular,
            CommunitySort::Popular => CommunitySort::Newest,
            CommunitySort::Newest => CommunitySort::Recommended,
        }
    }
}

/// Order communities for display. `Recommended` is a stable partition
/// putting tag matches first.
pub fn sort_communities(communities: &[Community], sort: CommunitySort, tags: &[String]) -> Vec<Community> {
    let mut out = communities.to_vec();
    match sort {
        CommunitySort::Recommended => out.sort_by_key(|c| !c.matches_tags(tags)),
        CommunitySort::Popular => out.sort_by(|a, b| b.member_count.cmp(&a.member_count)),
        CommunitySort::Newest => out.reverse(),
    }
    out
}

#[derive(Debug, Clone)]
pub struct NetworkState {
    pub tab: NetworkTab,
    pub sort: CommunitySort,
    pub cursor: usize,
    users: Vec<User>,
    communities: Vec<Community>,
    opportunities: Vec<Opportunity>,
    joined: HashSet<String>,
}

impl Default for NetworkState {
    fn default() -> Self {
        Self::new(seed::users(), seed::communities(), seed::opportunities())
    }
}

impl NetworkState {
    pub fn new(users: Vec<User>, communities: Vec<Community>, opportunities: Vec<Opportunity>) -> Self {
        Self {
            tab: NetworkTab::default(),
            sort: CommunitySort::default(),
            cursor: 0,
            users,
            communities,
            opportunities,
            joined: HashSet::new(),
        }
    }

    pub fn set_tab(&mut self, tab: NetworkTab) {
        if self.tab != tab {
            self.tab = tab;
            self.cursor = 0;
        }
    }

    pub fn cycle_sort(&mut self) {
        self.sort = self.sort.next();
        self.cursor = 0;
    }

    /// People to suggest: not me, not already followed.
    pub fn connections(&self, me: &str, follows: &FollowSet) -> Vec<&User> {
        self.users
            .iter()
            .filter(|u| u.id != me && !follows.contains(&u.id))
            .collect()
    }

    pub fn sorted_communities(&self, tags: &[String]) -> Vec<Community> {
        sort_communities(&self.communities, self.sort, tags)
    }

    /// Communities sharing a tag with the viewer, in the current order.
    pub fn ai_recommended(&self, tags: &[String]) -> Vec<Community> {
        self.sorted_communities(tags)
            .into_iter()
            .filter(|c| c.matches_tags(tags))
            .collect()
    }

    pub fn opportunities(&self) -> &[Opportunity] {
        &self.opportunities
    }

    pub fn related_opportunities(&self, community: &Community) -> Vec<&Opportunity> {
        self.opportunities
            .iter()
            .filter(|o| o.matches_tags(&community.tags))
            .collect()
    }

    /// Local join toggle; returns whether the community is now joined.
    pub fn toggle_join(&mut self, community_id: &str) -> bool {
        if self.joined.remove(community_id) {
            false
        } else {
            self.joined.insert(community_id.to_string());
            true
        }
    }

    pub fn is_joined(&self, community_id: &str) -> bool {
        self.joined.contains(community_id)
    }

    pub fn move_cursor(&mut self, delta: isize, len: usize) {
        if len == 0 {
            self.cursor = 0;
            return;
        }
        self.cursor = self.cursor.saturating_add_signed(delta).min(len - 1);
    }
}
