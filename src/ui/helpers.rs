//! Helper functions for UI rendering
//!
//! Width-aware truncation, dialog placement and small text builders.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_PROGRESS, COLOR_PROGRESS_BG};

/// Spinner frames for pending translations
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn spinner(tick: u64) -> &'static str {
    SPINNER_FRAMES[(tick / 4) as usize % SPINNER_FRAMES.len()]
}

/// Truncate to at most `max_width` terminal columns, adding "…" when cut.
/// CJK characters count as two columns.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Greedy wrap to `width` columns. Breaks on spaces where possible and
/// mid-word otherwise, so CJK text without spaces still wraps.
pub fn wrap_text(s: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    for paragraph in s.split('\n') {
        let mut line = String::new();
        let mut used = 0;
        for word in paragraph.split_inclusive(' ') {
            let w = word.width();
            if used + word.trim_end().width() > width && !line.is_empty() {
                lines.push(line.trim_end().to_string());
                line.clear();
                used = 0;
            }
            if word.trim_end().width() > width {
                for c in word.chars() {
                    let cw = c.width().unwrap_or(0);
                    if used + cw > width && !line.is_empty() {
                        lines.push(std::mem::take(&mut line));
                        used = 0;
                    }
                    line.push(c);
                    used += cw;
                }
            } else {
                line.push_str(word);
                used += w;
            }
        }
        lines.push(line.trim_end().to_string());
    }
    lines
}

/// Centered rect of the given size, clamped to `area`.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Text progress bar such as `██████░░░░ 60%`.
pub fn progress_bar(progress: u8, width: usize) -> Line<'static> {
    let progress = progress.min(100) as usize;
    let filled = width * progress / 100;
    Line::from(vec![
        Span::styled("█".repeat(filled), Style::default().fg(COLOR_PROGRESS)),
        Span::styled(
            "░".repeat(width - filled),
            Style::default().fg(COLOR_PROGRESS_BG),
        ),
        Span::raw(format!(" {}%", progress)),
    ])
}

/// Horizontal tab row with a `▶` marker on the selected label.
pub fn tab_line(labels: &[&str], selected: usize) -> Line<'static> {
    let mut spans = Vec::with_capacity(labels.len() * 2);
    for (i, label) in labels.iter().enumerate() {
        if i == selected {
            spans.push(Span::styled(
                format!("▶ {}", label),
                Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(
                format!("  {}", label),
                Style::default().fg(COLOR_DIM),
            ));
        }
        spans.push(Span::raw("   "));
    }
    Line::from(spans)
}

/// Selection marker for list rows.
pub fn marker(selected: bool) -> &'static str {
    if selected {
        "▶ "
    } else {
        "  "
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("hello world", 6), "hello…");
    }

    #[test]
    fn test_truncate_counts_cjk_as_double() {
        assert_eq!(truncate_to_width("こんにちは", 5), "こん…");
        assert_eq!(truncate_to_width("こんにちは", 10), "こんにちは");
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    fn test_wrap_text() {
        assert_eq!(wrap_text("hello big world", 9), vec!["hello big", "world"]);
        assert_eq!(wrap_text("日本語の文章", 4), vec!["日本", "語の", "文章"]);
        assert_eq!(wrap_text("a\nb", 10), vec!["a", "b"]);
    }

    #[test]
    fn test_centered_rect_clamps() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(centered_rect(10, 4, area), Rect::new(5, 3, 10, 4));
        assert_eq!(centered_rect(40, 40, area), area);
    }

    #[test]
    fn test_progress_bar_width() {
        let line = progress_bar(50, 10);
        assert_eq!(line.spans[0].content, "█████");
        assert_eq!(line.spans[1].content, "░░░░░");
        assert_eq!(line.spans[2].content, " 50%");
    }
}
