//! Neon-on-charcoal theme tokens.
//!
//! # Color Palette
//! - **Accent**: Electric cyan (focus, highlights)
//! - **Positive**: Neon green (healthy margin)
//! - **Negative**: Hot pink (losses, failures)
//! - **Warning**: Neon orange (freight alert)
//! - **Neutral**: Cool purple (middling margin)
//! - **Muted**: Steel blue (labels, secondary text)

use marginlab_core::PillTone;
use ratatui::style::{Color, Modifier, Style};

const ACCENT: Color = Color::Rgb(0, 255, 255);
const POSITIVE: Color = Color::Rgb(0, 255, 128);
const NEGATIVE: Color = Color::Rgb(255, 20, 147);
const WARNING: Color = Color::Rgb(255, 140, 0);
const NEUTRAL: Color = Color::Rgb(147, 112, 219);
const MUTED: Color = Color::Rgb(100, 149, 237);
const TEXT_SECONDARY: Color = Color::Rgb(170, 170, 170);

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn positive() -> Style {
    Style::default().fg(POSITIVE)
}

pub fn negative() -> Style {
    Style::default().fg(NEGATIVE)
}

pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

pub fn neutral() -> Style {
    Style::default().fg(NEUTRAL)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn text_secondary() -> Style {
    Style::default().fg(TEXT_SECONDARY)
}

pub fn panel_border(active: bool) -> Style {
    if active { accent() } else { muted() }
}

pub fn panel_title(active: bool) -> Style {
    if active { accent_bold() } else { muted() }
}

/// Color a signed amount (profit green, loss pink).
pub fn metric_color(value: f64) -> Style {
    if value >= 0.0 { positive() } else { negative() }
}

/// Style for the margin pill.
pub fn tone(tone: PillTone) -> Style {
    match tone {
        PillTone::Bad => Style::default().fg(NEGATIVE).add_modifier(Modifier::BOLD),
        PillTone::Good => Style::default().fg(POSITIVE).add_modifier(Modifier::BOLD),
        PillTone::Neutral => Style::default().fg(NEUTRAL).add_modifier(Modifier::BOLD),
    }
}
