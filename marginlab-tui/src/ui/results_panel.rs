//! Results panel — derived figures, margin pill, warning banners.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use marginlab_core::{currency, freight_high, is_negative, percent, pill_tone};

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let r = app.result();
    let mut lines: Vec<Line> = Vec::new();

    metric_line(
        &mut lines,
        "Cost after freight",
        currency(r.cost_after_freight),
        theme::text_secondary(),
    );
    metric_line(
        &mut lines,
        "Gross profit",
        currency(r.gross_profit),
        theme::metric_color(r.gross_profit),
    );
    metric_line(
        &mut lines,
        "Profit margin",
        percent(r.margin),
        theme::tone(pill_tone(&r)),
    );
    metric_line(
        &mut lines,
        "Freight share",
        percent(r.freight_pct),
        if freight_high(&r) {
            theme::warning()
        } else {
            theme::text_secondary()
        },
    );
    lines.push(Line::from(""));

    if is_negative(&r) {
        lines.push(Line::from(Span::styled(
            "  ▌ Negative margin: this sale loses money.",
            theme::negative(),
        )));
    }
    if freight_high(&r) {
        lines.push(Line::from(Span::styled(
            format!(
                "  ▌ Freight is {} of the sale (warn at {}).",
                percent(r.freight_pct),
                percent(r.warn_threshold),
            ),
            theme::warning(),
        )));
    }

    let para = Paragraph::new(lines);
    f.render_widget(para, area);
}

fn metric_line<'a>(lines: &mut Vec<Line<'a>>, label: &str, value: String, style: ratatui::style::Style) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {:>18}: ", label), theme::muted()),
        Span::styled(value, style),
    ]));
    lines.push(Line::from(""));
}
