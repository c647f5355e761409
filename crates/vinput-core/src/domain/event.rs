//! Primitive event records written to a virtual device.
//!
//! Every logical action (a key press, a cursor move) becomes one or more
//! `(class, code, value)` records followed by a synchronization record.  The
//! synchronization record tells readers that the preceding records form one
//! atomic update.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::keymap::NativeCode;

pub const SYN_REPORT: u16 = 0x00;

pub const ABS_X: u16 = 0x00;
pub const ABS_Y: u16 = 0x01;
/// Size of the kernel's per-axis arrays in the legacy device record.
pub const ABS_CNT: usize = 0x40;

pub const REL_X: u16 = 0x00;
pub const REL_Y: u16 = 0x01;
pub const REL_HWHEEL: u16 = 0x06;
pub const REL_WHEEL: u16 = 0x08;

/// Event classes (`EV_*`) used by the virtual devices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u16)]
pub enum EventClass {
    Sync = 0x00,
    Key = 0x01,
    Relative = 0x02,
    Absolute = 0x03,
    Misc = 0x04,
}

impl EventClass {
    /// Raw `EV_*` value.
    pub fn raw(self) -> u16 {
        self as u16
    }
}

/// Error returned when a raw key state byte is not 0, 1 or 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid key state: {0}")]
pub struct InvalidKeyState(pub u8);

/// Key and button state carried in the `value` field of a key record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyState {
    Released,
    Pressed,
    Repeat,
}

impl KeyState {
    pub fn value(self) -> i32 {
        match self {
            KeyState::Released => 0,
            KeyState::Pressed => 1,
            KeyState::Repeat => 2,
        }
    }
}

impl TryFrom<u8> for KeyState {
    type Error = InvalidKeyState;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(KeyState::Released),
            1 => Ok(KeyState::Pressed),
            2 => Ok(KeyState::Repeat),
            other => Err(InvalidKeyState(other)),
        }
    }
}

/// One `(class, code, value)` record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrimitiveEvent {
    pub class: EventClass,
    pub code: u16,
    pub value: i32,
}

impl PrimitiveEvent {
    pub fn new(class: EventClass, code: u16, value: i32) -> Self {
        Self { class, code, value }
    }

    /// The `SYN_REPORT` marker that closes a batch.
    pub fn sync() -> Self {
        Self::new(EventClass::Sync, SYN_REPORT, 0)
    }

    pub fn key(code: NativeCode, state: KeyState) -> Self {
        Self::new(EventClass::Key, code, state.value())
    }

    pub fn absolute(axis: u16, value: i32) -> Self {
        Self::new(EventClass::Absolute, axis, value)
    }

    pub fn relative(axis: u16, value: i32) -> Self {
        Self::new(EventClass::Relative, axis, value)
    }

    pub fn is_sync(&self) -> bool {
        self.class == EventClass::Sync && self.code == SYN_REPORT
    }
}
