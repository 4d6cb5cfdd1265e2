//! Default keybindings for the application.
//!
//! Maps key combinations to commands per layer: global, modal, browse-mode
//! per view, and per focused input.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

use super::command::Command;
use super::context::ModalType;
use crate::app::{Focus, NavTarget, View};

/// Represents a key combination (key code + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub const fn ch(c: char) -> Self {
        Self::plain(KeyCode::Char(c))
    }

    /// Shift is dropped for character keys; the character already carries
    /// the case.
    pub fn from_event(key: &KeyEvent) -> Self {
        let modifiers = match key.code {
            KeyCode::Char(_) => key.modifiers - KeyModifiers::SHIFT,
            _ => key.modifiers,
        };
        Self::new(key.code, modifiers)
    }
}

/// Keybinding configuration for the application.
#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    /// Global keybindings (always active outside modals)
    pub global: HashMap<KeyCombo, Command>,
    /// Keybindings per modal type
    pub modal: HashMap<ModalType, HashMap<KeyCombo, Command>>,
    /// Browse-mode bindings shared by every view
    pub browse: HashMap<KeyCombo, Command>,
    /// Browse-mode bindings per view
    pub view: HashMap<View, HashMap<KeyCombo, Command>>,
    /// Extra bindings per focused input
    pub focus: HashMap<Focus, HashMap<KeyCombo, Command>>,
    /// Editing keys for any focused input
    pub input_editing: HashMap<KeyCombo, Command>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    pub fn new() -> Self {
        let mut config = Self {
            global: HashMap::new(),
            modal: HashMap::new(),
            browse: HashMap::new(),
            view: HashMap::new(),
            focus: HashMap::new(),
            input_editing: HashMap::new(),
        };

        config.setup_global_bindings();
        config.setup_modal_bindings();
        config.setup_browse_bindings();
        config.setup_view_bindings();
        config.setup_focus_bindings();
        config.setup_input_editing_bindings();

        config
    }

    fn setup_global_bindings(&mut self) {
        self.global
            .insert(KeyCombo::ctrl(KeyCode::Char('c')), Command::Quit);
        self.global
            .insert(KeyCombo::ctrl(KeyCode::Char('l')), Command::CycleLocale);
    }

    fn setup_modal_bindings(&mut self) {
        let mut loading = HashMap::new();
        loading.insert(KeyCombo::ch('q'), Command::Quit);
        self.modal.insert(ModalType::Loading, loading);

        let mut sign_in = HashMap::new();
        sign_in.insert(KeyCombo::ch('q'), Command::Quit);
        sign_in.insert(KeyCombo::plain(KeyCode::Up), Command::MoveUp);
        sign_in.insert(KeyCombo::ch('k'), Command::MoveUp);
        sign_in.insert(KeyCombo::plain(KeyCode::Down), Command::MoveDown);
        sign_in.insert(KeyCombo::ch('j'), Command::MoveDown);
        sign_in.insert(KeyCombo::plain(KeyCode::Enter), Command::SignIn);
        self.modal.insert(ModalType::SignIn, sign_in);

        for modal in [ModalType::LiveSetup, ModalType::PathPrompt] {
            let mut bindings = HashMap::new();
            bindings.insert(KeyCombo::plain(KeyCode::Enter), Command::ConfirmModal);
            bindings.insert(KeyCombo::plain(KeyCode::Esc), Command::CancelModal);
            self.modal.insert(modal, bindings);
        }
    }

    fn setup_browse_bindings(&mut self) {
        let b = &mut self.browse;
        b.insert(KeyCombo::ch('q'), Command::Quit);
        b.insert(KeyCombo::ch('O'), Command::Logout);
        b.insert(KeyCombo::ch('1'), Command::Navigate(NavTarget::Feed));
        b.insert(KeyCombo::ch('2'), Command::Navigate(NavTarget::Network));
        b.insert(KeyCombo::ch('3'), Command::Navigate(NavTarget::Messages));
        b.insert(KeyCombo::ch('4'), Command::Navigate(NavTarget::Search));
        b.insert(KeyCombo::ch('5'), Command::Navigate(NavTarget::Me));
        b.insert(KeyCombo::plain(KeyCode::Up), Command::MoveUp);
        b.insert(KeyCombo::ch('k'), Command::MoveUp);
        b.insert(KeyCombo::plain(KeyCode::Down), Command::MoveDown);
        b.insert(KeyCombo::ch('j'), Command::MoveDown);
        b.insert(KeyCombo::plain(KeyCode::Esc), Command::Back);
        b.insert(KeyCombo::plain(KeyCode::Enter), Command::Activate);
        b.insert(KeyCombo::plain(KeyCode::Tab), Command::NextTab);
    }

    fn setup_view_bindings(&mut self) {
        let card = [
            ('l', Command::ToggleLike),
            ('s', Command::Share),
            ('c', Command::FocusComment),
            ('t', Command::TranslatePost),
            (']', Command::NextComment),
            ('[', Command::PrevComment),
            ('y', Command::TranslateComment),
            ('o', Command::ShowOriginal),
            ('e', Command::EditPost),
            ('d', Command::DeletePost),
            ('m', Command::TogglePostMenu),
            ('p', Command::TogglePlayback),
            ('a', Command::ViewAuthor),
            ('f', Command::FollowAuthor),
        ];

        let mut feed: HashMap<KeyCombo, Command> = card
            .iter()
            .map(|(c, cmd)| (KeyCombo::ch(*c), cmd.clone()))
            .collect();
        feed.insert(KeyCombo::ch('n'), Command::FocusComposer);
        feed.insert(KeyCombo::ch('i'), Command::PickImage);
        feed.insert(KeyCombo::ch('v'), Command::PickVideo);
        feed.insert(KeyCombo::ch('x'), Command::RemoveImage);
        feed.insert(KeyCombo::ch('g'), Command::StartLive);
        self.view.insert(View::Feed, feed);

        let mut profile: HashMap<KeyCombo, Command> = card
            .iter()
            .filter(|(c, _)| !matches!(c, 'e' | 'a' | 'f'))
            .map(|(c, cmd)| (KeyCombo::ch(*c), cmd.clone()))
            .collect();
        profile.insert(KeyCombo::ch('E'), Command::EditProfile);
        profile.insert(KeyCombo::ch('f'), Command::FollowAuthor);
        self.view.insert(View::Profile, profile);

        let mut network = HashMap::new();
        network.insert(KeyCombo::ch('o'), Command::CycleSort);
        network.insert(KeyCombo::ch('f'), Command::FollowSelected);
        self.view.insert(View::Network, network);

        let mut messages = HashMap::new();
        messages.insert(KeyCombo::ch('b'), Command::Navigate(NavTarget::Feed));
        self.view.insert(View::Messages, messages);

        let mut search = HashMap::new();
        search.insert(KeyCombo::ch('/'), Command::FocusSearch);
        self.view.insert(View::Search, search);

        let mut live = HashMap::new();
        live.insert(KeyCombo::ch('c'), Command::FocusLiveChat);
        live.insert(KeyCombo::ch('E'), Command::EndLive);
        live.insert(KeyCombo::ch('t'), Command::TranslatePost);
        self.view.insert(View::LiveBroadcaster, live);
    }

    fn setup_focus_bindings(&mut self) {
        let mut composer = HashMap::new();
        composer.insert(KeyCombo::ctrl(KeyCode::Char('a')), Command::AttachMedia);
        composer.insert(KeyCombo::ctrl(KeyCode::Char('o')), Command::AttachAlternate);
        composer.insert(KeyCombo::ctrl(KeyCode::Char('x')), Command::RemoveMedia);
        self.focus.insert(Focus::Composer, composer);

        let mut chat = HashMap::new();
        chat.insert(KeyCombo::ctrl(KeyCode::Char('a')), Command::AttachMedia);
        chat.insert(KeyCombo::ctrl(KeyCode::Char('x')), Command::RemoveMedia);
        self.focus.insert(Focus::Chat, chat);

        let mut profile = HashMap::new();
        profile.insert(KeyCombo::plain(KeyCode::Tab), Command::NextField);
        profile.insert(KeyCombo::ctrl(KeyCode::Char('a')), Command::AttachMedia);
        profile.insert(KeyCombo::ctrl(KeyCode::Char('o')), Command::AttachAlternate);
        self.focus.insert(Focus::ProfileForm, profile);
    }

    fn setup_input_editing_bindings(&mut self) {
        let e = &mut self.input_editing;
        e.insert(KeyCombo::plain(KeyCode::Backspace), Command::Backspace);
        e.insert(KeyCombo::plain(KeyCode::Delete), Command::DeleteChar);
        e.insert(KeyCombo::plain(KeyCode::Left), Command::MoveCursorLeft);
        e.insert(KeyCombo::plain(KeyCode::Right), Command::MoveCursorRight);
        e.insert(KeyCombo::plain(KeyCode::Home), Command::MoveCursorHome);
        e.insert(KeyCombo::plain(KeyCode::End), Command::MoveCursorEnd);
        e.insert(KeyCombo::ctrl(KeyCode::Char('e')), Command::MoveCursorEnd);
        e.insert(KeyCombo::plain(KeyCode::Enter), Command::Submit);
        e.insert(KeyCombo::plain(KeyCode::Esc), Command::Unfocus);
    }

    pub fn get_global(&self, combo: &KeyCombo) -> Option<&Command> {
        self.global.get(combo)
    }

    pub fn get_modal(&self, modal: ModalType, combo: &KeyCombo) -> Option<&Command> {
        self.modal.get(&modal).and_then(|m| m.get(combo))
    }

    /// View binding first, then the shared browse layer.
    pub fn get_browse(&self, view: View, combo: &KeyCombo) -> Option<&Command> {
        self.view
            .get(&view)
            .and_then(|m| m.get(combo))
            .or_else(|| self.browse.get(combo))
    }

    pub fn get_focus(&self, focus: Focus, combo: &KeyCombo) -> Option<&Command> {
        self.focus.get(&focus).and_then(|m| m.get(combo))
    }

    pub fn get_input_editing(&self, combo: &KeyCombo) -> Option<&Command> {
        self.input_editing.get(combo)
    }
}
