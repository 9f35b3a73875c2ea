use crossterm::event::{KeyCode, KeyEvent};
use tracing::debug;

use crate::controller::NumericValueController;
use crate::events::CommitReason;
use crate::text::text_from_value;

/// A labeled integer field driven by terminal key events.
///
/// Wraps a [`NumericValueController`] and maps keystrokes onto its edit
/// and commit handlers. The field has two modes: idle (shows the committed
/// value) and editing (keystrokes flow through the controller, Up/Down
/// step the value, Enter commits, Esc restores the pre-edit value).
pub struct NumericField {
    pub label: String,
    controller: NumericValueController,
    editing: bool,
    /// Value captured when editing starts, restored on Esc.
    revert_value: i32,
}

impl NumericField {
    pub fn new(label: impl Into<String>, controller: NumericValueController) -> Self {
        NumericField {
            label: label.into(),
            controller,
            editing: false,
            revert_value: 0,
        }
    }

    pub fn controller(&self) -> &NumericValueController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut NumericValueController {
        &mut self.controller
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn value(&self) -> i32 {
        self.controller.value()
    }

    pub fn text(&self) -> &str {
        self.controller.text()
    }

    /// Handle a key event. Returns true when the key was consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if !self.editing {
            return match key.code {
                KeyCode::Enter => {
                    self.revert_value = self.controller.value();
                    self.editing = true;
                    debug!("started editing {:?} at {}", self.label, self.revert_value);
                    true
                }
                _ => false,
            };
        }

        match key.code {
            KeyCode::Enter => {
                self.commit(CommitReason::Enter);
                true
            }
            KeyCode::Esc => {
                // Restore the pre-edit value, then commit it.
                let restored = text_from_value(self.revert_value);
                self.controller.handle_text_committed(&restored, CommitReason::Cleared);
                self.editing = false;
                true
            }
            KeyCode::Backspace => {
                let mut candidate = self.controller.text().to_string();
                candidate.pop();
                self.controller.handle_text_changed(&candidate);
                true
            }
            KeyCode::Char(c) => {
                // Rejection of non-numeric characters happens in the
                // controller: the display simply stays put.
                let mut candidate = self.controller.text().to_string();
                candidate.push(c);
                self.controller.handle_text_changed(&candidate);
                true
            }
            KeyCode::Up => {
                self.step(1);
                true
            }
            KeyCode::Down => {
                self.step(-1);
                true
            }
            // Tab passes through so the host can move focus (and blur us).
            KeyCode::Tab => false,
            _ => true, // consume all other keys while editing
        }
    }

    /// Called by the host when focus moves away from this field.
    pub fn blur(&mut self) {
        if self.editing {
            self.commit(CommitReason::FocusLost);
        }
    }

    fn commit(&mut self, reason: CommitReason) {
        let text = self.controller.text().to_string();
        self.controller.handle_text_committed(&text, reason);
        self.editing = false;
    }

    fn step(&mut self, delta: i32) {
        let stepped = self.controller.value().saturating_add(delta);
        self.controller.handle_text_changed(&text_from_value(stepped));
    }
}
