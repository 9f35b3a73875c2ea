// Module declarations
pub mod field;
pub mod widget;

#[cfg(test)]
mod integration_tests;

pub use field::NumericField;
pub use widget::render_numeric_field;

use std::io;
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    style::{Color, Style},
    Terminal,
};
use unicode_width::UnicodeWidthStr;

const SELECTION_FG: Color = Color::Rgb(255, 165, 0); // Orange
const FIELD_MARGIN: u16 = 2;

/// Main entry point for the demo form
///
/// Renders the given fields as a vertical form. Enter edits the focused
/// field, Tab/Down/Up move focus (committing any in-progress edit with a
/// focus-lost reason), q or Esc quits when nothing is being edited.
pub fn run(mut fields: Vec<NumericField>) -> Result<(), io::Error> {
    if fields.is_empty() {
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let max_label_width = fields
        .iter()
        .map(|f| f.label.width())
        .max()
        .unwrap_or(0)
        + 2;
    let mut focused: usize = 0;

    // Main loop
    loop {
        terminal.draw(|f| {
            let area = f.area();
            let buf = f.buffer_mut();

            let mut y = area.y + 1;
            for (i, field) in fields.iter().enumerate() {
                y += render_numeric_field(
                    field,
                    i == focused,
                    max_label_width,
                    FIELD_MARGIN,
                    area,
                    y,
                    buf,
                    SELECTION_FG,
                );
            }

            let editing = fields.get(focused).is_some_and(|f| f.is_editing());
            let hint = if editing {
                "Type digits, Up/Down step, Enter save, Esc cancel, Tab next field"
            } else {
                "Enter to edit, Tab/Down/Up to move, q to quit"
            };
            if area.height > 0 {
                let status_y = area.bottom() - 1;
                buf.set_string(area.x + 1, status_y, hint, Style::default().fg(Color::DarkGray));
            }
        })?;

        if let Event::Key(key) = event::read()? {
            if fields[focused].handle_key(key) {
                continue;
            }

            match key.code {
                KeyCode::Tab | KeyCode::Down => {
                    fields[focused].blur();
                    focused = (focused + 1) % fields.len();
                }
                KeyCode::Up => {
                    fields[focused].blur();
                    focused = (focused + fields.len() - 1) % fields.len();
                }
                KeyCode::Char('q') | KeyCode::Esc => {
                    tracing::debug!("quitting demo form");
                    break;
                }
                _ => {}
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
