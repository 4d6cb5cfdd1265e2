//! Ownership for background tasks.
//!
//! A [`TaskGuard`] aborts its task when dropped, so a task lives exactly as
//! long as the state that started it. [`TaskSet`] groups guards by owner id
//! (a post, a live stream) so all of an owner's work can be cancelled at
//! once.

use std::collections::HashMap;
use std::future::Future;

use tokio::task::JoinHandle;

#[derive(Debug)]
pub struct TaskGuard {
    handle: JoinHandle<()>,
}

impl TaskGuard {
    pub fn new(handle: JoinHandle<()>) -> Self {
        Self { handle }
    }

    pub fn spawn<F>(future: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        Self::new(tokio::spawn(future))
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    pub fn abort(&self) {
        self.handle.abort();
    }
}

impl Drop for TaskGuard {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Guards keyed by owner id.
#[derive(Debug, Default)]
pub struct TaskSet {
    tasks: HashMap<String, Vec<TaskGuard>>,
}

impl TaskSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn<F>(&mut self, owner: &str, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let guards = self.tasks.entry(owner.to_string()).or_default();
        guards.retain(|g| !g.is_finished());
        guards.push(TaskGuard::spawn(future));
    }

    /// Abort everything owned by `owner`; returns how many guards were
    /// dropped.
    pub fn cancel(&mut self, owner: &str) -> usize {
        self.tasks.remove(owner).map(|g| g.len()).unwrap_or(0)
    }

    pub fn cancel_all(&mut self) {
        self.tasks.clear();
    }

    /// Unfinished tasks for `owner`.
    pub fn running(&self, owner: &str) -> usize {
        self.tasks
            .get(owner)
            .map(|guards| guards.iter().filter(|g| !g.is_finished()).count())
            .unwrap_or(0)
    }

    pub fn any_running(&self) -> bool {
        self.tasks
            .values()
            .flatten()
            .any(|g| !g.is_finished())
    }
}
