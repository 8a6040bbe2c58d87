use std::cell::RefCell;
use std::rc::Rc;

use fltk::{enums::Event, input::FloatInput, prelude::*};

use crate::data::StateError;

// ─── Numeric field validation ────────────────────────────────────────────────
//
// Revert-based validation attached via handle() rather than set_callback():
// a widget only has one callback slot, and the functional callback set by
// the wiring layer would overwrite validation set there. handle() fires
// independently of callbacks, and also catches paste/remote-desktop input
// that never arrives as plain keystrokes. On every event that may have
// changed the text we check validity and revert to the last valid text.

pub fn is_valid_float_text(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    if digits.is_empty() {
        return true;
    }
    if digits.starts_with('.') {
        return false;
    }
    let parts: Vec<&str> = digits.split('.').collect();
    parts.len() <= 2
        && parts
            .iter()
            .all(|p| p.is_empty() || p.chars().all(|c| c.is_ascii_digit()))
}

/// Attach revert-based float validation. Survives any later
/// set_callback() on the same widget.
pub fn attach_float_validation(input: &mut FloatInput) {
    let last_valid = Rc::new(RefCell::new(input.value()));
    input.handle(move |field, ev| {
        match ev {
            Event::KeyUp | Event::Paste | Event::Shortcut | Event::Unfocus => {
                let current = field.value();
                let lv = last_valid.borrow().clone();
                if current == lv {
                    return false;
                }
                let minus_just_added = current.contains('-') && !lv.contains('-');
                let typed_at_start = field.position() == 1;
                if is_valid_float_text(&current) && !(minus_just_added && !typed_at_start) {
                    *last_valid.borrow_mut() = current;
                } else {
                    let restore = field.position().saturating_sub(1);
                    field.set_value(&lv);
                    field.set_position(restore).ok();
                }
                false // don't consume; other handlers still see the event
            }
            _ => false,
        }
    });
}

/// Parse a submitted field as f64. An empty field counts as unset and is
/// rejected the same way as garbage text; the converter never sees it.
pub fn parse_degrees(text: &str) -> Result<f64, StateError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(StateError::InvalidNumericInput(text.to_string()));
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| StateError::InvalidNumericInput(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_float_text() {
        for ok in ["", "-", "1", "-1", "1.5", "-0.25", "12.", "180"] {
            assert!(is_valid_float_text(ok), "{ok:?} should be valid");
        }
        for bad in [".5", "1.2.3", "1e5", "abc", "--1", "1-2"] {
            assert!(!is_valid_float_text(bad), "{bad:?} should be invalid");
        }
    }

    #[test]
    fn test_parse_degrees() {
        assert!((parse_degrees("45.5").unwrap() - 45.5).abs() < 1e-12);
        assert!((parse_degrees(" 180 ").unwrap() - 180.0).abs() < 1e-12);
        assert!(matches!(
            parse_degrees(""),
            Err(StateError::InvalidNumericInput(_))
        ));
        assert!(matches!(
            parse_degrees("nope"),
            Err(StateError::InvalidNumericInput(_))
        ));
        assert!(matches!(
            parse_degrees("NaN"),
            Err(StateError::InvalidNumericInput(_))
        ));
    }
}
