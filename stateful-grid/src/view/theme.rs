//! src/view/theme.rs
//! ============================================================================
//! # Catppuccin Mocha Theme Color Palette
//!
//! Colors used by the default content views and `ItemGrid`. Colors are from
//! the official Catppuccin theme specification:
//! https://github.com/catppuccin/catppuccin

use ratatui::style::{Color, Modifier, Style};

pub const BACKGROUND: Color = Color::Rgb(30, 30, 46); // Base
pub const CURRENT_LINE: Color = Color::Rgb(69, 71, 90); // Surface1
pub const FOREGROUND: Color = Color::Rgb(205, 214, 244); // Text
pub const COMMENT: Color = Color::Rgb(127, 132, 156); // Overlay1
pub const PINK: Color = Color::Rgb(245, 194, 231); // Pink
pub const PURPLE: Color = Color::Rgb(203, 166, 247); // Mauve
pub const RED: Color = Color::Rgb(243, 139, 168); // Red
pub const YELLOW: Color = Color::Rgb(249, 226, 175); // Yellow

pub fn content_slot_style() -> Style {
    Style::default().bg(BACKGROUND).fg(FOREGROUND)
}

pub fn spinner_style() -> Style {
    Style::default().fg(PINK).add_modifier(Modifier::BOLD)
}

pub fn caption_style() -> Style {
    Style::default().fg(COMMENT)
}

pub fn message_style() -> Style {
    Style::default().fg(YELLOW).add_modifier(Modifier::BOLD)
}

pub fn error_message_style() -> Style {
    Style::default().fg(RED).add_modifier(Modifier::BOLD)
}

pub fn button_style() -> Style {
    Style::default()
        .bg(CURRENT_LINE)
        .fg(PURPLE)
        .add_modifier(Modifier::BOLD)
}

pub fn footer_style() -> Style {
    Style::default().bg(BACKGROUND).fg(COMMENT)
}
