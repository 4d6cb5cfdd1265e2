//! Centered dialogs: go-live description and file path prompt.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    text::Span,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;
use crate::widgets::{InputBox, InputBoxWidget};

use super::helpers::centered_rect;
use super::theme::{COLOR_ACCENT, COLOR_DIALOG_BG, COLOR_DIM};

/// Draw whichever modal is open on top of the current view.
pub fn render_modals(frame: &mut Frame, app: &App) {
    if let Some(setup) = app.live_setup.as_ref() {
        render_dialog(
            frame,
            app.t("live.setup_title"),
            &setup.description,
            app.t("live.description"),
            app.t("live.setup_hint"),
        );
    } else if let Some(prompt) = app.path_prompt.as_ref() {
        render_dialog(
            frame,
            app.t(prompt.target.label_key()),
            &prompt.input,
            "",
            app.t("prompt.hint"),
        );
    }
}

fn render_dialog(frame: &mut Frame, title: &str, input: &InputBox, placeholder: &str, hint: &str) {
    let area = centered_rect(60, 7, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_ACCENT))
        .style(Style::default().bg(COLOR_DIALOG_BG))
        .title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1), Constraint::Min(0)])
        .split(inner);
    frame.render_widget(InputBoxWidget::new(input, "", true).placeholder(placeholder), chunks[0]);
    frame.render_widget(
        Paragraph::new(Span::styled(hint, Style::default().fg(COLOR_DIM))),
        chunks[1],
    );
}
