//! Live broadcast flow: setup modal, broadcaster view, replay.

use std::time::Duration;

use tracing::info;

use crate::state::{Broadcast, LiveSetup};
use crate::tasks::TaskGuard;

use super::{App, AppMessage, Focus, View};

impl App {
    /// Open the "go live" modal. Refused while a draft holds media.
    pub fn start_live_setup(&mut self) -> bool {
        if self.is_live() || !self.composer.can_go_live() {
            return false;
        }
        self.live_setup = Some(LiveSetup::default());
        true
    }

    pub fn cancel_live_setup(&mut self) {
        self.live_setup = None;
    }

    /// Confirm from the modal using its description buffer.
    pub fn confirm_live_setup(&mut self) -> Option<String> {
        let description = self.live_setup.as_mut()?.take_description();
        Some(self.confirm_live(&description))
    }

    /// Publish a live post and switch to the broadcaster view.
    pub fn confirm_live(&mut self, description: &str) -> String {
        let id = self.store.add_live(&self.current_user, description);
        self.live_setup = None;
        self.live_post_id = Some(id.clone());
        self.broadcast = Some(Broadcast::new(id.clone()));
        self.live_clock = Some(self.spawn_live_clock(id.clone()));
        self.view = View::LiveBroadcaster;
        self.focus = Focus::Browse;
        self.feed_cursor = 0;
        info!(post = %id, "live stream started");
        id
    }

    fn spawn_live_clock(&self, post_id: String) -> TaskGuard {
        let tx = self.message_tx.clone();
        TaskGuard::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(1));
            interval.tick().await;
            loop {
                interval.tick().await;
                let msg = AppMessage::LiveTick {
                    post_id: post_id.clone(),
                };
                if tx.send(msg).is_err() {
                    break;
                }
            }
        })
    }

    /// Finalize the live post into a replay and return to the feed.
    pub fn end_live(&mut self) -> bool {
        let Some(id) = self.live_post_id.take() else {
            return false;
        };
        self.store.end_live(&id);
        self.broadcast = None;
        self.live_clock = None;
        self.tasks.cancel(&id);
        self.view = View::Feed;
        self.focus = Focus::Browse;
        info!(post = %id, "live stream ended");
        true
    }

    /// Post the broadcaster's chat input and request its interpretation.
    pub fn send_live_chat(&mut self) -> bool {
        let author = self.current_user.name.clone();
        let Some(broadcast) = self.broadcast.as_mut() else {
            return false;
        };
        let Some(line) = broadcast.send_chat(&author) else {
            return false;
        };
        let post_id = broadcast.post_id().to_string();
        let translator = self.translator.clone();
        let tx = self.message_tx.clone();
        let owner = post_id.clone();
        self.tasks.spawn(&owner, async move {
            let text = translator.live_interpretation(&line.text).await;
            let _ = tx.send(AppMessage::ChatInterpreted {
                post_id,
                line_id: line.id,
                text,
            });
        });
        true
    }
}
