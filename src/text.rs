/// Text <-> value conversions for integer fields
///
/// These are the pure functions behind the controller: parsing display
/// text into an i32, formatting an i32 back into display text, and
/// computing how many character cells the configured bounds can occupy.

/// Parse display text into a value, or signal "not parseable".
///
/// Rules, in order:
/// 1. Empty or whitespace-only text parses to 0 (a cleared box stays valid
///    while editing).
/// 2. The first character must be an ASCII digit or a sign character.
/// 3. Every later character must be an ASCII digit.
/// 4. A lone sign character parses to 0; anything else goes through the
///    standard base-10 conversion. Out-of-range literals fail that
///    conversion and are treated as not parseable.
pub fn value_from_text(text: &str) -> Option<i32> {
    if text.chars().all(char::is_whitespace) {
        return Some(0);
    }

    let mut chars = text.chars();
    let first = chars.next()?;
    if !(first.is_ascii_digit() || first == '+' || first == '-') {
        return None;
    }
    if !chars.all(|c| c.is_ascii_digit()) {
        return None;
    }
    if text.len() == 1 && !first.is_ascii_digit() {
        return Some(0);
    }

    text.parse::<i32>().ok()
}

/// Format a value as plain minimal decimal: no forced sign, no grouping,
/// at least one digit.
pub fn text_from_value(value: i32) -> String {
    value.to_string()
}

/// Widest possible value between the two configured bounds, in character
/// cells. Negative numbers count one extra cell for the sign. Clamp flags
/// are ignored; callers size the field against the configured bounds.
pub fn characters_width(min_value: i32, max_value: i32) -> u16 {
    digit_width(min_value).max(digit_width(max_value))
}

fn digit_width(value: i32) -> u16 {
    let mut remaining = value.unsigned_abs();
    let mut width: u16 = if value < 0 { 1 } else { 0 };
    loop {
        width += 1;
        remaining /= 10;
        if remaining == 0 {
            break;
        }
    }
    width
}
