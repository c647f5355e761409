//! Device descriptor: the name and identity record written before commit.

use super::event::{ABS_X, ABS_Y};

/// Length of the kernel's fixed name field, including the NUL terminator.
pub const UINPUT_MAX_NAME_SIZE: usize = 80;

pub const BUS_USB: u16 = 0x03;

pub const DEFAULT_POINTER_NAME: &str = "synergyMouse";
pub const DEFAULT_KEYBOARD_NAME: &str = "synergyKeyboard";

/// Bus/vendor/product/version tuple reported to the rest of the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeviceIdentity {
    pub bustype: u16,
    pub vendor: u16,
    pub product: u16,
    pub version: u16,
}

impl DeviceIdentity {
    pub const POINTER: Self = Self {
        bustype: BUS_USB,
        vendor: 0x1,
        product: 0x1,
        version: 1,
    };

    pub const KEYBOARD: Self = Self {
        bustype: BUS_USB,
        vendor: 0x1,
        product: 0x2,
        version: 1,
    };
}

/// Value range of one absolute axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AbsAxisRange {
    pub axis: u16,
    pub min: i32,
    pub max: i32,
}

/// Everything written in the device record besides the capability bits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceDescriptor {
    pub name: String,
    pub identity: DeviceIdentity,
    pub abs_ranges: Vec<AbsAxisRange>,
}

impl DeviceDescriptor {
    /// Pointer descriptor with X in `0..=width` and Y in `0..=height`.
    pub fn pointer(name: impl Into<String>, width: u16, height: u16) -> Self {
        Self {
            name: name.into(),
            identity: DeviceIdentity::POINTER,
            abs_ranges: vec![
                AbsAxisRange {
                    axis: ABS_X,
                    min: 0,
                    max: i32::from(width),
                },
                AbsAxisRange {
                    axis: ABS_Y,
                    min: 0,
                    max: i32::from(height),
                },
            ],
        }
    }

    pub fn keyboard(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            identity: DeviceIdentity::KEYBOARD,
            abs_ranges: Vec::new(),
        }
    }

    /// The name as a NUL-padded kernel field.
    ///
    /// Names longer than `UINPUT_MAX_NAME_SIZE - 1` bytes are truncated so the
    /// field always ends in a NUL.
    pub fn name_field(&self) -> [u8; UINPUT_MAX_NAME_SIZE] {
        let mut field = [0u8; UINPUT_MAX_NAME_SIZE];
        let bytes = self.name.as_bytes();
        let len = bytes.len().min(UINPUT_MAX_NAME_SIZE - 1);
        field[..len].copy_from_slice(&bytes[..len]);
        field
    }
}
