//! Network view actions and follow toggling.

use tracing::info;

use crate::state::NetworkTab;

use super::App;

impl App {
    /// Flip follow state for `user_id`. Toggling yourself does nothing.
    pub fn toggle_follow(&mut self, user_id: &str) -> bool {
        if user_id == self.current_user.id {
            return false;
        }
        let following = self.follows.toggle(user_id);
        info!(user = %user_id, following, "follow toggled");
        true
    }

    pub fn network_len(&self) -> usize {
        match self.network.tab {
            NetworkTab::Connections => self
                .network
                .connections(&self.current_user.id, &self.follows)
                .len(),
            NetworkTab::Communities => self.network.sorted_communities(&self.current_user.tags).len(),
            NetworkTab::Opportunities => self.network.opportunities().len(),
        }
    }

    pub fn next_network_tab(&mut self) {
        let next = self.network.tab.next();
        self.network.set_tab(next);
    }

    /// Sort modes only apply to the communities tab.
    pub fn cycle_community_sort(&mut self) -> bool {
        if self.network.tab != NetworkTab::Communities {
            return false;
        }
        self.network.cycle_sort();
        true
    }

    /// Enter on the network list: open a person, or join/leave a
    /// community.
    pub fn network_activate(&mut self) -> bool {
        match self.network.tab {
            NetworkTab::Connections => {
                let Some(id) = self.selected_connection() else {
                    return false;
                };
                self.view_profile(&id);
                true
            }
            NetworkTab::Communities => {
                let Some(id) = self
                    .network
                    .sorted_communities(&self.current_user.tags)
                    .get(self.network.cursor)
                    .map(|c| c.id.clone())
                else {
                    return false;
                };
                let joined = self.network.toggle_join(&id);
                info!(community = %id, joined, "community membership toggled");
                true
            }
            NetworkTab::Opportunities => false,
        }
    }

    /// Follow the highlighted person on the connections tab.
    pub fn network_follow_selected(&mut self) -> bool {
        if self.network.tab != NetworkTab::Connections {
            return false;
        }
        let Some(id) = self.selected_connection() else {
            return false;
        };
        let toggled = self.toggle_follow(&id);
        let len = self.network_len();
        self.network.move_cursor(0, len);
        toggled
    }

    fn selected_connection(&self) -> Option<String> {
        self.network
            .connections(&self.current_user.id, &self.follows)
            .get(self.network.cursor)
            .map(|u| u.id.clone())
    }
}
