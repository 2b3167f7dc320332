//! Overlay widgets — welcome screen and the clipboard acknowledgment dialog.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::StatusLevel;
use crate::theme;
use crate::ui::centered_rect;

/// First-run welcome overlay.
pub fn render_welcome(f: &mut Frame, area: Rect) {
    let popup = centered_rect(60, 40, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Welcome to MarginLab ")
        .title_style(theme::accent_bold());

    let text = vec![
        Line::from(""),
        Line::from(Span::styled("Getting started:", theme::accent_bold())),
        Line::from(""),
        Line::from(Span::styled(
            "  1. Type amounts into Sale Total, Order Cost, Freight Cost",
            theme::muted(),
        )),
        Line::from(Span::styled(
            "  2. Tab or arrow keys move between fields",
            theme::muted(),
        )),
        Line::from(Span::styled(
            "  3. Space toggles whether freight counts as cost",
            theme::muted(),
        )),
        Line::from(Span::styled(
            "  4. Ctrl+Y copies a one-line summary to the clipboard",
            theme::muted(),
        )),
        Line::from(""),
        Line::from(Span::styled("Press any key to dismiss...", theme::neutral())),
    ];

    let para = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    f.render_widget(para, popup);
}

/// Blocking acknowledgment dialog for the clipboard outcome.
pub fn render_notice(f: &mut Frame, area: Rect, message: &str, level: StatusLevel) {
    let popup = centered_rect(50, 25, area);
    f.render_widget(Clear, popup);

    let (border, title) = match level {
        StatusLevel::Error => (theme::negative(), " Clipboard Error "),
        StatusLevel::Warning => (theme::warning(), " Notice "),
        StatusLevel::Info => (theme::accent(), " Done "),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(title)
        .title_style(border);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(message.to_string(), theme::text_secondary())),
        Line::from(""),
        Line::from(Span::styled("Press any key to dismiss...", theme::muted())),
    ];

    let para = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    f.render_widget(para, popup);
}
