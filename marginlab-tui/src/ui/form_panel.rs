//! Input form — five rows, free-form text plus the freight checkbox.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{AppState, Field};
use crate::theme;

const FIELDS: [Field; 5] = [
    Field::SaleTotal,
    Field::OrderCost,
    Field::FreightCost,
    Field::IncludeFreight,
    Field::WarnThreshold,
];

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(
        "[Tab/↑↓]field [Space]toggle [^Y]copy [^X]clear",
        theme::muted(),
    )));
    lines.push(Line::from(""));

    for field in FIELDS {
        let is_active = field == app.active_field;

        let label_style = if is_active {
            theme::accent().add_modifier(Modifier::REVERSED)
        } else {
            theme::muted()
        };

        let value = field_value(app, field, is_active);
        let value_style = if is_active {
            theme::accent_bold()
        } else {
            theme::text_secondary()
        };

        lines.push(Line::from(vec![
            Span::styled(format!("{:>17}: ", field.label()), label_style),
            Span::styled(value, value_style),
        ]));
        lines.push(Line::from(""));
    }

    let para = Paragraph::new(lines);
    f.render_widget(para, area);
}

fn field_value(app: &AppState, field: Field, is_active: bool) -> String {
    let caret = if is_active { "_" } else { "" };
    match field {
        Field::SaleTotal => format!("{}{caret}", app.inputs.sale_total),
        Field::OrderCost => format!("{}{caret}", app.inputs.order_cost),
        Field::FreightCost => format!("{}{caret}", app.inputs.freight_cost),
        Field::IncludeFreight => {
            if app.inputs.include_freight {
                "[x]".into()
            } else {
                "[ ]".into()
            }
        }
        Field::WarnThreshold => format!("{}{caret}", app.inputs.warn_threshold),
    }
}
