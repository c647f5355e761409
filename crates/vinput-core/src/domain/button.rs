//! Mouse button ids from the remote protocol and their native codes.
//!
//! | Id | Button  | Native       |
//! |----|---------|--------------|
//! | 1  | Left    | `BTN_LEFT`   |
//! | 2  | Middle  | `BTN_MIDDLE` |
//! | 3  | Right   | `BTN_RIGHT`  |
//! | 4  | Back    | `BTN_SIDE`   |
//! | 5  | Forward | `BTN_EXTRA`  |
//!
//! Id 0 means "no button" and is never mapped.

use crate::keymap::{evdev, NativeCode};

/// Button id as sent by the remote peer.
pub type ButtonId = u8;

/// Native codes indexed by `id - 1`.
pub const BUTTON_CODES: [NativeCode; 5] = [
    evdev::BTN_LEFT,
    evdev::BTN_MIDDLE,
    evdev::BTN_RIGHT,
    evdev::BTN_SIDE,
    evdev::BTN_EXTRA,
];

/// Resolves a button id, or `None` for ids outside the table.
pub fn button_to_native(id: ButtonId) -> Option<NativeCode> {
    let index = usize::from(id).checked_sub(1)?;
    BUTTON_CODES.get(index).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_buttons() {
        assert_eq!(button_to_native(1), Some(evdev::BTN_LEFT));
        assert_eq!(button_to_native(2), Some(evdev::BTN_MIDDLE));
        assert_eq!(button_to_native(3), Some(evdev::BTN_RIGHT));
    }

    #[test]
    fn test_side_buttons() {
        assert_eq!(button_to_native(4), Some(evdev::BTN_SIDE));
        assert_eq!(button_to_native(5), Some(evdev::BTN_EXTRA));
    }

    #[test]
    fn test_out_of_table_ids_are_unmapped() {
        assert_eq!(button_to_native(0), None);
        assert_eq!(button_to_native(6), None);
        assert_eq!(button_to_native(u8::MAX), None);
    }
}
