/// NumericValueController - integer value/text reconciliation
///
/// Owns the authoritative value, the bound configuration and the display
/// text of an integer field. Host widgets feed raw keystroke text through
/// `handle_text_changed` and end the edit through `handle_text_committed`.
/// While an edit is in progress the display follows a relaxed "soft" clamp
/// so partially typed numbers survive (typing 40 into a 10-50 field must
/// not clamp the intermediate "4" to 10); the authoritative value tracks
/// the hard bounds the whole time, and commit retracts the leniency.

use tracing::{debug, trace};

use crate::config::FieldConfig;
use crate::events::{CommitReason, Observers};
use crate::text::{characters_width, text_from_value, value_from_text};

pub struct NumericValueController {
    value: i32,
    min_value: i32,
    max_value: i32,
    clamp_min: bool,
    clamp_max: bool,
    /// Relax clamp targets toward zero while typing. When false the soft
    /// clamp degenerates to the hard clamp.
    pub use_smart_typing_clamp: bool,
    text: String,
    observers: Observers,
}

impl NumericValueController {
    pub fn new() -> Self {
        Self::from_config(&FieldConfig::default())
    }

    pub fn from_config(config: &FieldConfig) -> Self {
        let mut controller = NumericValueController {
            value: 0,
            min_value: config.min_value,
            max_value: config.max_value,
            clamp_min: config.clamp_min,
            clamp_max: config.clamp_max,
            use_smart_typing_clamp: config.smart_typing_clamp,
            text: String::new(),
            observers: Observers::default(),
        };
        // Config files can carry inverted bounds; repair them like any
        // other bound mutation instead of rejecting the config.
        controller.fix_up_bounds();
        controller.set_value(0);
        controller
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    /// The display text the host field should show.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Authoritative commit path: hard-clamps, stores, and reformats the
    /// display text so it matches the value exactly.
    pub fn set_value(&mut self, new_value: i32) {
        let clamped = self.clamped(new_value);
        self.value = clamped;
        self.text = text_from_value(clamped);
    }

    pub fn min_value(&self) -> i32 {
        self.min_value
    }

    pub fn max_value(&self) -> i32 {
        self.max_value
    }

    pub fn is_clamping_min(&self) -> bool {
        self.clamp_min
    }

    pub fn is_clamping_max(&self) -> bool {
        self.clamp_max
    }

    /// Set the lower bound and enforce it immediately. The new min is
    /// authoritative: an enabled max below it is pushed up, never the
    /// other way around.
    pub fn set_min_value(&mut self, new_min: i32) {
        self.min_value = new_min;
        self.clamp_min = true;
        if self.clamp_max && self.max_value < self.min_value {
            debug!("raising max bound {} to new min {}", self.max_value, new_min);
            self.max_value = self.min_value;
        }
        self.set_value(self.value);
    }

    /// Set the upper bound and enforce it immediately. The new max is
    /// authoritative: an enabled min above it is pulled down.
    pub fn set_max_value(&mut self, new_max: i32) {
        self.max_value = new_max;
        self.clamp_max = true;
        if self.clamp_min && self.min_value > self.max_value {
            debug!("lowering min bound {} to new max {}", self.min_value, new_max);
            self.min_value = self.max_value;
        }
        self.set_value(self.value);
    }

    pub fn set_clamp_min(&mut self, enable: bool) {
        self.clamp_min = enable;
        self.fix_up_bounds();
        self.set_value(self.value);
    }

    pub fn set_clamp_max(&mut self, enable: bool) {
        self.clamp_max = enable;
        self.fix_up_bounds();
        self.set_value(self.value);
    }

    // Toggling a clamp flag can expose a stale bound; the max bound yields
    // so a configured min is never silently weakened.
    fn fix_up_bounds(&mut self) {
        if self.clamp_min && self.clamp_max && self.max_value < self.min_value {
            debug!("raising stale max bound {} to min {}", self.max_value, self.min_value);
            self.max_value = self.min_value;
        }
    }

    /// Hard clamp against the enabled bounds. Min applies first, then max.
    pub fn clamped(&self, value: i32) -> i32 {
        let mut value = value;
        if self.clamp_min {
            value = value.max(self.min_value);
        }
        if self.clamp_max {
            value = value.min(self.max_value);
        }
        value
    }

    /// Clamp used for the displayed text while typing. Per enabled bound,
    /// the clamp target is relaxed to 0 whenever the bound sits on the far
    /// side of zero (min >= 0, or max <= 0), so digit-by-digit entry is
    /// not clamped before the number is finished.
    pub fn soft_clamped(&self, value: i32) -> i32 {
        if !self.use_smart_typing_clamp {
            return self.clamped(value);
        }

        let mut value = value;
        if self.clamp_min {
            value = value.max(if self.min_value >= 0 { 0 } else { self.min_value });
        }
        if self.clamp_max {
            value = value.min(if self.max_value <= 0 { 0 } else { self.max_value });
        }
        value
    }

    /// Character cells the widest in-bounds value can occupy; callers use
    /// this to pre-size the field.
    pub fn characters_width(&self) -> u16 {
        characters_width(self.min_value, self.max_value)
    }

    /// Invoked with the raw display text on every keystroke.
    ///
    /// Unparseable text rejects the edit: the display keeps the previous
    /// text and nothing fires. Parseable text updates the display to the
    /// soft-clamped form and the authoritative value to the hard-clamped
    /// one, then notifies value-changed listeners.
    pub fn handle_text_changed(&mut self, raw: &str) {
        let Some(value) = value_from_text(raw) else {
            trace!("rejected edit {:?}, display stays {:?}", raw, self.text);
            return;
        };

        // A parsed 0 covers "", "0", "000" and bare signs; those stay
        // exactly as typed so reformatting does not fight the cursor.
        if value != 0 {
            self.text = text_from_value(self.soft_clamped(value));
        } else {
            self.text = raw.to_string();
        }

        self.value = self.clamped(value);
        self.observers.emit_changed(self.value);
    }

    /// Invoked when editing ends. Text that fails to parse commits as 0.
    /// This is where the soft-clamp leniency is retracted: the value is
    /// hard-clamped and the display reformatted to match it exactly.
    pub fn handle_text_committed(&mut self, raw: &str, reason: CommitReason) {
        let value = value_from_text(raw).unwrap_or(0);
        self.set_value(value);
        debug!("committed {} ({:?})", self.value, reason);
        self.observers.emit_committed(self.value, reason);
    }

    pub fn on_value_changed(&mut self, callback: impl FnMut(i32) + 'static) {
        self.observers.on_value_changed(callback);
    }

    pub fn on_value_committed(&mut self, callback: impl FnMut(i32, CommitReason) + 'static) {
        self.observers.on_value_committed(callback);
    }
}

impl Default for NumericValueController {
    fn default() -> Self {
        Self::new()
    }
}
