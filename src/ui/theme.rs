//! Color theme constants for the Kizuna UI
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

// ============================================================================
// Minimal Dark Color Theme
// ============================================================================

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - white for highlights and the focused element
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color
pub const COLOR_HEADER: Color = Color::White;

/// Body text
pub const COLOR_TEXT: Color = Color::Gray;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Cursor block inside a focused input
pub const COLOR_CURSOR: Color = Color::Gray;

/// Row highlight for the selected list item
pub const COLOR_SELECTED_BG: Color = Color::Rgb(30, 30, 45);

// ============================================================================
// State Colors
// ============================================================================

/// Liked, following, joined
pub const COLOR_ACTIVE: Color = Color::Rgb(4, 181, 117);

/// LIVE badge and the broadcaster clock
pub const COLOR_LIVE: Color = Color::Red;

/// Translation text under the original
pub const COLOR_TRANSLATION: Color = Color::Cyan;

/// Inline validation errors
pub const COLOR_ERROR: Color = Color::Red;

/// Upload progress fill
pub const COLOR_PROGRESS: Color = Color::White;

/// Upload progress background
pub const COLOR_PROGRESS_BG: Color = Color::DarkGray;

/// AI recommendation marker
pub const COLOR_AI: Color = Color::Magenta;

// ============================================================================
// Dialog Colors
// ============================================================================

/// Background color for modal dialogs (go live, path prompt)
pub const COLOR_DIALOG_BG: Color = Color::Rgb(10, 15, 35);
