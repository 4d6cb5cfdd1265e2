//! Input handling module for keyboard and command processing.
//!
//! All input is:
//!
//! 1. Translated to a [`Command`] by the [`CommandRegistry`]
//! 2. Dispatched to the handlers in the [`handlers`] module
//!
//! # Architecture
//!
//! ```text
//! KeyEvent -> CommandRegistry::dispatch() -> Command -> Handler -> App mutation
//! ```
//!
//! # Example
//!
//! ```ignore
//! use kizuna::input::CommandRegistry;
//!
//! let registry = CommandRegistry::new();
//! let context = app.build_input_context();
//!
//! if let Some(cmd) = registry.dispatch(key_event, &context) {
//!     app.execute_command(cmd);
//! }
//! ```

pub mod command;
pub mod context;
pub mod handlers;
pub mod keybindings;
pub mod registry;

pub use command::Command;
pub use context::{InputContext, ModalType};
pub use keybindings::{KeyCombo, KeybindingConfig};
pub use registry::CommandRegistry;

use crate::app::{App, AuthStatus};

impl App {
    /// Snapshot of the state the registry needs to pick bindings.
    pub fn build_input_context(&self) -> InputContext {
        let modal = match self.auth {
            AuthStatus::Authenticated if self.path_prompt.is_some() => ModalType::PathPrompt,
            AuthStatus::Authenticated if self.live_setup.is_some() => ModalType::LiveSetup,
            auth => InputContext::modal_for_auth(auth),
        };

        InputContext::new()
            .with_view(self.view)
            .with_focus(self.focus)
            .with_modal(modal)
    }

    /// Execute a command. Returns `true` if some handler acted on it.
    pub fn execute_command(&mut self, cmd: Command) -> bool {
        tracing::debug!("execute_command: {:?}", cmd);

        if cmd.marks_dirty() {
            self.mark_dirty();
            self.notice = None;
        }

        if cmd.is_quit() {
            self.should_quit = true;
            return true;
        }

        let modal = self.build_input_context().modal;
        if modal != ModalType::None {
            if matches!(cmd, Command::CycleLocale) {
                self.cycle_locale();
                return true;
            }
            return handlers::handle_modal_command(self, &cmd, modal);
        }

        if handlers::handle_editing_command(self, &cmd) {
            return true;
        }

        handlers::handle_navigation_command(self, &cmd)
    }

    /// Dispatch and execute a key press with the default bindings.
    pub fn handle_key(&mut self, registry: &CommandRegistry, key: crossterm::event::KeyEvent) -> bool {
        let context = self.build_input_context();
        match registry.dispatch(key, &context) {
            Some(cmd) => self.execute_command(cmd),
            None => false,
        }
    }
}
