/// NumericFieldWidget - renders a labeled integer field row
///
/// Composes: margin + selection indicator + padded label + value text,
/// with a block cursor appended while the field is being edited. The value
/// column is padded to the width of the widest configured bound so rows
/// keep their size as the value changes. Always renders as 1 line.

use ratatui::{buffer::Buffer, layout::Rect, style::{Color, Style}};
use unicode_width::UnicodeWidthStr;

use super::field::NumericField;

/// Renders a single numeric field row
///
/// Returns the height consumed (always 1)
pub fn render_numeric_field(
    field: &NumericField,
    is_selected: bool,
    max_label_width: usize,
    margin: u16,
    area: Rect,
    y: u16,
    buf: &mut Buffer,
    selection_fg: Color,
) -> u16 {
    if y >= area.bottom() {
        return 0;
    }

    let mut x = area.x;

    // Render left margin
    buf.set_string(x, y, " ".repeat(margin as usize), Style::default());
    x += margin;

    // Render selection indicator
    if is_selected {
        buf.set_string(x, y, "► ", Style::default().fg(selection_fg));
    } else {
        buf.set_string(x, y, "  ", Style::default());
    }
    x += 2;

    // Render padded label
    let padded_label = format!("{:<width$}", field.label, width = max_label_width);
    buf.set_string(x, y, &padded_label, Style::default());
    x += padded_label.width() as u16;

    // Render value text, padded to the widest bound, cursor while editing
    let text = if field.is_editing() {
        format!("{}█", field.text())
    } else {
        field.text().to_string()
    };
    let field_width = field.controller().characters_width().max(text.width() as u16);
    buf.set_string(x, y, format!("{:<width$}", text, width = field_width as usize), Style::default());

    1 // Always 1 line height
}
