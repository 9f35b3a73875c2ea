/// Outbound notifications from the controller
///
/// Hosts register plain callbacks instead of wiring up a delegate object:
/// `on_value_changed` fires on every accepted keystroke-driven update,
/// `on_value_committed` fires once per commit.

/// Why an edit session ended, forwarded from the host text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitReason {
    /// The user explicitly confirmed the text (Enter).
    Enter,
    /// The field lost focus while an edit was in progress.
    FocusLost,
    /// The edit was abandoned and the previous value restored (Esc).
    Cleared,
}

type ValueChangedFn = Box<dyn FnMut(i32)>;
type ValueCommittedFn = Box<dyn FnMut(i32, CommitReason)>;

/// Callback registry for controller notifications.
///
/// Callbacks fire synchronously, in registration order, after the
/// corresponding state mutation has been fully applied.
#[derive(Default)]
pub struct Observers {
    changed: Vec<ValueChangedFn>,
    committed: Vec<ValueCommittedFn>,
}

impl Observers {
    pub fn on_value_changed(&mut self, callback: impl FnMut(i32) + 'static) {
        self.changed.push(Box::new(callback));
    }

    pub fn on_value_committed(&mut self, callback: impl FnMut(i32, CommitReason) + 'static) {
        self.committed.push(Box::new(callback));
    }

    pub(crate) fn emit_changed(&mut self, value: i32) {
        for callback in &mut self.changed {
            callback(value);
        }
    }

    pub(crate) fn emit_committed(&mut self, value: i32, reason: CommitReason) {
        for callback in &mut self.committed {
            callback(value, reason);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_changed_callbacks_fire_in_registration_order() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut observers = Observers::default();

        let first = Rc::clone(&order);
        observers.on_value_changed(move |v| first.borrow_mut().push(("first", v)));
        let second = Rc::clone(&order);
        observers.on_value_changed(move |v| second.borrow_mut().push(("second", v)));

        observers.emit_changed(7);

        assert_eq!(*order.borrow(), vec![("first", 7), ("second", 7)]);
    }

    #[test]
    fn test_committed_callbacks_receive_reason() {
        let seen = Rc::new(RefCell::new(None));
        let mut observers = Observers::default();

        let sink = Rc::clone(&seen);
        observers.on_value_committed(move |v, reason| *sink.borrow_mut() = Some((v, reason)));

        observers.emit_committed(40, CommitReason::FocusLost);

        assert_eq!(*seen.borrow(), Some((40, CommitReason::FocusLost)));
    }
}
