use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::app::{App, AuthStatus};
use crate::seed;

use super::helpers::{marker, spinner};
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER};

pub const KIZUNA_LOGO: [&str; 3] = ["╻┏ ╻┏━┓╻ ╻┏┓╻┏━┓", "┣┻┓┃┏━┛┃ ┃┃┗┫┣━┫", "╹ ╹╹┗━╸┗━┛╹ ╹╹ ╹"];

pub fn render_login_screen(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let outer_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(COLOR_BORDER));
    frame.render_widget(outer_block, area);

    let inner = area.inner(Margin::new(2, 1));

    let logo_area = Rect::new(inner.x, inner.y, inner.width, 4.min(inner.height));
    let logo = Paragraph::new(KIZUNA_LOGO.join("\n"))
        .style(Style::default().fg(COLOR_HEADER))
        .alignment(Alignment::Center);
    frame.render_widget(logo, logo_area);

    let users = seed::users();
    let dialog_height = (users.len() as u16 + 6).min(inner.height.saturating_sub(5));
    let dialog_area = Rect::new(
        inner.x + 4,
        inner.y + 5,
        inner.width.saturating_sub(8),
        dialog_height,
    )
    .intersection(inner);
    let dialog_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(app.t("login.title"));

    let lines: Vec<Line> = if app.auth == AuthStatus::Loading {
        vec![Line::from(format!("{} {}", spinner(app.tick_count), app.t("auth.loading")))]
    } else {
        let mut lines = vec![
            Line::from(Span::styled(app.t("login.prompt"), Style::default().fg(COLOR_DIM))),
            Line::default(),
        ];
        for (i, user) in users.iter().enumerate() {
            let selected = i == app.login_cursor;
            let style = if selected {
                Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(COLOR_HEADER)
            };
            lines.push(Line::from(vec![
                Span::styled(marker(selected), Style::default().fg(COLOR_ACCENT)),
                Span::styled(user.name.clone(), style),
                Span::styled(format!("  @{} · {}", user.handle, user.title), Style::default().fg(COLOR_DIM)),
            ]));
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(app.t("login.hint"), Style::default().fg(COLOR_DIM))));
        lines
    };

    let para = Paragraph::new(lines).block(dialog_block);
    frame.render_widget(para, dialog_area);
}
