use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Widget},
};
use unicode_width::UnicodeWidthChar;

use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_CURSOR, COLOR_DIM, COLOR_TEXT};

/// Single-line text buffer with a character cursor.
///
/// Every text field in the client (composer, comments, chat, profile
/// fields, search, live description) is one of these. Positions are in
/// characters, so CJK input edits cleanly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBox {
    content: String,
    /// Cursor position in characters.
    cursor: usize,
}

impl InputBox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(content: impl Into<String>) -> Self {
        let mut input = Self::new();
        input.set_content(content);
        input
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    pub fn insert_str(&mut self, s: &str) {
        for c in s.chars().filter(|c| *c != '\n' && *c != '\r') {
            self.insert_char(c);
        }
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    pub fn delete_char(&mut self) {
        if self.cursor < self.char_len() {
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor = self.char_len();
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor
    }

    /// Replace the content and put the cursor at the end.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.cursor = self.char_len();
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Take the content, leaving the box empty.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.content)
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }

    /// First visible character so the cursor fits in `width` columns.
    fn scroll_offset(&self, width: usize) -> usize {
        let chars: Vec<char> = self.content.chars().collect();
        let mut start = 0;
        loop {
            let used: usize = chars[start..self.cursor.min(chars.len())]
                .iter()
                .map(|c| c.width().unwrap_or(0))
                .sum();
            // One column is kept for the cursor block.
            if used < width || start >= self.cursor {
                return start;
            }
            start += 1;
        }
    }
}

/// Bordered, titled rendering of an [`InputBox`].
pub struct InputBoxWidget<'a> {
    input: &'a InputBox,
    title: &'a str,
    placeholder: &'a str,
    focused: bool,
}

impl<'a> InputBoxWidget<'a> {
    pub fn new(input: &'a InputBox, title: &'a str, focused: bool) -> Self {
        Self {
            input,
            title,
            placeholder: "",
            focused,
        }
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }
}

impl Widget for InputBoxWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.focused { COLOR_ACCENT } else { COLOR_BORDER };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(self.title);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let width = inner.width as usize;
        if self.input.is_empty() && !self.focused {
            buf.set_stringn(
                inner.x,
                inner.y,
                self.placeholder,
                width,
                Style::default().fg(COLOR_DIM),
            );
            return;
        }

        let offset = self.input.scroll_offset(width);
        let mut x = inner.x;
        let right = inner.x + inner.width;
        for (i, c) in self.input.content.chars().enumerate().skip(offset) {
            let w = c.width().unwrap_or(0) as u16;
            if x + w > right {
                break;
            }
            let style = if self.focused && i == self.input.cursor {
                Style::default().fg(COLOR_TEXT).bg(COLOR_CURSOR)
            } else {
                Style::default().fg(COLOR_TEXT)
            };
            buf.set_string(x, inner.y, c.to_string(), style);
            x += w;
        }
        if self.focused && self.input.cursor >= self.input.char_len() && x < right {
            buf.set_string(x, inner.y, " ", Style::default().bg(COLOR_CURSOR));
        }
    }
}
