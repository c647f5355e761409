//! Key code translation from the external key-identifier space to native
//! Linux input codes.
//!
//! The table is built once by [`KeyTranslationTable::new`] and is read-only
//! afterwards.  Callers either build their own instance at startup and pass it
//! by reference, or use [`KeyTranslationTable::shared`] which builds the
//! process-wide instance exactly once, even under concurrent first use.
//!
//! # Known simplification
//!
//! Shifted symbols map to the key that produces them *with* Shift held
//! (`'!'` → `KEY_1`).  No Shift press is synthesized; the receiving side sees
//! the bare key.  Senders forward their own Shift key events, so in practice
//! the resulting character is usually right.

pub mod evdev;
pub mod key_id;

use std::sync::OnceLock;

use tracing::debug;

/// Identifier in the external (remote protocol) key space.
pub type KeyId = u16;

/// Native Linux input key or button code.
pub type NativeCode = u16;

/// Number of slots in the translation table.
///
/// Ids at or above this bound are always unmapped.
pub const TABLE_LEN: usize = 65_535;

const LETTER_CODES: [NativeCode; 26] = [
    evdev::KEY_A,
    evdev::KEY_B,
    evdev::KEY_C,
    evdev::KEY_D,
    evdev::KEY_E,
    evdev::KEY_F,
    evdev::KEY_G,
    evdev::KEY_H,
    evdev::KEY_I,
    evdev::KEY_J,
    evdev::KEY_K,
    evdev::KEY_L,
    evdev::KEY_M,
    evdev::KEY_N,
    evdev::KEY_O,
    evdev::KEY_P,
    evdev::KEY_Q,
    evdev::KEY_R,
    evdev::KEY_S,
    evdev::KEY_T,
    evdev::KEY_U,
    evdev::KEY_V,
    evdev::KEY_W,
    evdev::KEY_X,
    evdev::KEY_Y,
    evdev::KEY_Z,
];

const DIGIT_CODES: [NativeCode; 10] = [
    evdev::KEY_0,
    evdev::KEY_1,
    evdev::KEY_2,
    evdev::KEY_3,
    evdev::KEY_4,
    evdev::KEY_5,
    evdev::KEY_6,
    evdev::KEY_7,
    evdev::KEY_8,
    evdev::KEY_9,
];

/// Symbols and the unshifted key a US layout needs to type them.
const SYMBOL_CODES: [(u8, NativeCode); 20] = [
    (b'!', evdev::KEY_1),
    (b'@', evdev::KEY_2),
    (b'#', evdev::KEY_3),
    (b'$', evdev::KEY_4),
    (b'%', evdev::KEY_5),
    (b'^', evdev::KEY_6),
    (b'&', evdev::KEY_7),
    (b'*', evdev::KEY_8),
    (b'(', evdev::KEY_9),
    (b')', evdev::KEY_0),
    (b'-', evdev::KEY_MINUS),
    (b'_', evdev::KEY_MINUS),
    (b'=', evdev::KEY_EQUAL),
    (b'+', evdev::KEY_EQUAL),
    (b'?', evdev::KEY_SLASH),
    (b'/', evdev::KEY_SLASH),
    (b'.', evdev::KEY_DOT),
    (b'>', evdev::KEY_DOT),
    (b',', evdev::KEY_COMMA),
    (b'<', evdev::KEY_COMMA),
];

/// ASCII control characters some senders use instead of named key ids.
const CONTROL_CHAR_CODES: [(KeyId, NativeCode); 5] = [
    (0x08, evdev::KEY_BACKSPACE),
    (0x0A, evdev::KEY_ENTER),
    (0x0D, evdev::KEY_ENTER),
    (0x1B, evdev::KEY_ESC),
    (0x20, evdev::KEY_SPACE),
];

const NAMED_KEY_CODES: [(KeyId, NativeCode); 24] = [
    (key_id::BACK_SPACE, evdev::KEY_BACKSPACE),
    (key_id::RETURN, evdev::KEY_ENTER),
    (key_id::TAB, evdev::KEY_TAB),
    (key_id::ESCAPE, evdev::KEY_ESC),
    (key_id::LEFT, evdev::KEY_LEFT),
    (key_id::UP, evdev::KEY_UP),
    (key_id::RIGHT, evdev::KEY_RIGHT),
    (key_id::DOWN, evdev::KEY_DOWN),
    (key_id::HOME, evdev::KEY_HOME),
    (key_id::END, evdev::KEY_END),
    (key_id::INSERT, evdev::KEY_INSERT),
    (key_id::DELETE, evdev::KEY_DELETE),
    (key_id::PAGE_UP, evdev::KEY_PAGEUP),
    (key_id::PAGE_DOWN, evdev::KEY_PAGEDOWN),
    (key_id::SHIFT_L, evdev::KEY_LEFTSHIFT),
    (key_id::SHIFT_R, evdev::KEY_RIGHTSHIFT),
    (key_id::CONTROL_L, evdev::KEY_LEFTCTRL),
    (key_id::CONTROL_R, evdev::KEY_RIGHTCTRL),
    (key_id::ALT_L, evdev::KEY_LEFTALT),
    (key_id::ALT_R, evdev::KEY_RIGHTALT),
    (key_id::SUPER_L, evdev::KEY_LEFTMETA),
    (key_id::SUPER_R, evdev::KEY_RIGHTMETA),
    (key_id::F11, evdev::KEY_F11),
    (key_id::F12, evdev::KEY_F12),
];

static SHARED: OnceLock<KeyTranslationTable> = OnceLock::new();

/// Immutable lookup from [`KeyId`] to [`NativeCode`].
///
/// Lookups are a single bounds-checked slice index.  Any id without an entry,
/// including ids outside the table, translates to `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyTranslationTable {
    entries: Box<[Option<NativeCode>]>,
}

impl KeyTranslationTable {
    /// Builds a fully populated table.
    pub fn new() -> Self {
        let mut table = Self {
            entries: vec![None; TABLE_LEN].into_boxed_slice(),
        };

        for (offset, &code) in LETTER_CODES.iter().enumerate() {
            let offset = offset as u8;
            table.insert(KeyId::from(b'a' + offset), code);
            table.insert(KeyId::from(b'A' + offset), code);
        }
        for (offset, &code) in DIGIT_CODES.iter().enumerate() {
            table.insert(KeyId::from(b'0' + offset as u8), code);
        }
        for (symbol, code) in SYMBOL_CODES {
            table.insert(KeyId::from(symbol), code);
        }
        for (id, code) in CONTROL_CHAR_CODES.into_iter().chain(NAMED_KEY_CODES) {
            table.insert(id, code);
        }
        // F1..F10 are contiguous on both sides; F11/F12 are not natively.
        for i in 0..10 {
            table.insert(key_id::F1 + i, evdev::KEY_F1 + i);
        }

        debug!(mapped = table.mapped_count(), "key translation table built");
        table
    }

    /// Returns the process-wide table, building it on first call.
    pub fn shared() -> &'static Self {
        SHARED.get_or_init(Self::new)
    }

    /// Translates an external key id to its native code.
    ///
    /// Returns `None` when the id has no mapping.
    pub fn translate(&self, id: KeyId) -> Option<NativeCode> {
        self.entries.get(usize::from(id)).copied().flatten()
    }

    /// Number of ids that have a native mapping.
    pub fn mapped_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.is_some()).count()
    }

    fn insert(&mut self, id: KeyId, code: NativeCode) {
        debug_assert!(usize::from(id) < TABLE_LEN, "key id {id:#06x} outside table");
        if let Some(slot) = self.entries.get_mut(usize::from(id)) {
            *slot = Some(code);
        }
    }
}

impl Default for KeyTranslationTable {
    fn default() -> Self {
        Self::new()
    }
}
