//! Live broadcast: setup modal and broadcaster view.

use crate::translation::INTERPRETATION_FAILED;
use crate::widgets::InputBox;

/// One line in the broadcaster's chat panel.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatLine {
    pub id: String,
    pub author: String,
    pub text: String,
    /// `(JP): … (CN): …` once the interpreter answers.
    pub interpretation: Option<String>,
}

impl ChatLine {
    pub fn is_pending(&self) -> bool {
        self.interpretation.is_none()
    }
}

/// Description buffer for the "go live" modal.
#[derive(Debug, Default)]
pub struct LiveSetup {
    pub description: InputBox,
}

impl LiveSetup {
    pub fn take_description(&mut self) -> String {
        self.description.take().trim().to_string()
    }
}

#[derive(Debug)]
pub struct Broadcast {
    post_id: String,
    elapsed_secs: u64,
    pub chat_input: InputBox,
    chat: Vec<ChatLine>,
}

impl Broadcast {
    pub fn new(post_id: impl Into<String>) -> Self {
        Self {
            post_id: post_id.into(),
            elapsed_secs: 0,
            chat_input: InputBox::new(),
            chat: Vec::new(),
        }
    }

    pub fn post_id(&self) -> &str {
        &self.post_id
    }

    pub fn tick(&mut self) {
        self.elapsed_secs += 1;
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    /// Elapsed time as `MM:SS`, or `H:MM:SS` past the hour.
    pub fn elapsed_label(&self) -> String {
        let h = self.elapsed_secs / 3600;
        let m = (self.elapsed_secs % 3600) / 60;
        let s = self.elapsed_secs % 60;
        if h > 0 {
            format!("{}:{:02}:{:02}", h, m, s)
        } else {
            format!("{:02}:{:02}", m, s)
        }
    }

    pub fn chat(&self) -> &[ChatLine] {
        &self.chat
    }

    /// Post the chat input. Returns the new line so the caller can request
    /// its interpretation.
    pub fn send_chat(&mut self, author: &str) -> Option<ChatLine> {
        if self.chat_input.is_blank() {
            return None;
        }
        let line = ChatLine {
            id: format!("chat-{}", uuid::Uuid::new_v4()),
            author: author.to_string(),
            text: self.chat_input.take().trim().to_string(),
            interpretation: None,
        };
        self.chat.push(line.clone());
        Some(line)
    }

    /// Attach an interpreter result. Unknown line ids are ignored; a blank
    /// answer counts as a failure.
    pub fn attach_interpretation(&mut self, line_id: &str, text: String) -> bool {
        match self.chat.iter_mut().find(|l| l.id == line_id) {
            Some(line) => {
                line.interpretation = Some(if text.trim().is_empty() {
                    INTERPRETATION_FAILED.to_string()
                } else {
                    text
                });
                true
            }
            None => false,
        }
    }
}
