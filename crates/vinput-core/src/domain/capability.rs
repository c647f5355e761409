//! Capability declarations for the two virtual device kinds.
//!
//! # Why declare capabilities up front? (for beginners)
//!
//! A uinput device must announce every event class and code it will ever
//! emit *before* it is created.  After `UI_DEV_CREATE` the set is frozen, and
//! the kernel silently drops events for codes that were never declared.  A
//! [`CapabilitySet`] is the complete, ordered list of those announcements.

use std::collections::HashSet;

use super::button::BUTTON_CODES;
use super::event::{EventClass, PrimitiveEvent, ABS_X, ABS_Y, REL_HWHEEL, REL_WHEEL, REL_X, REL_Y};
use crate::keymap::evdev::KEYBOARD_KEY_COUNT;

/// Ordered event classes plus ordered `(class, code)` pairs to register.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilitySet {
    event_classes: Vec<EventClass>,
    codes: Vec<(EventClass, u16)>,
    /// Same pairs as `codes`, for constant-time write checks.
    permitted: HashSet<(EventClass, u16)>,
}

impl CapabilitySet {
    /// Pointer: buttons, wheels, absolute X/Y and relative X/Y.
    pub fn pointer() -> Self {
        let mut codes: Vec<(EventClass, u16)> = BUTTON_CODES
            .iter()
            .map(|&code| (EventClass::Key, code))
            .collect();
        codes.extend([
            (EventClass::Relative, REL_WHEEL),
            (EventClass::Relative, REL_HWHEEL),
            (EventClass::Absolute, ABS_X),
            (EventClass::Absolute, ABS_Y),
            (EventClass::Relative, REL_X),
            (EventClass::Relative, REL_Y),
        ]);

        Self::new(
            vec![
                EventClass::Sync,
                EventClass::Key,
                EventClass::Absolute,
                EventClass::Relative,
            ],
            codes,
        )
    }

    /// Keyboard: every standard key code `0..256`.
    pub fn keyboard() -> Self {
        Self::new(
            vec![EventClass::Sync, EventClass::Key, EventClass::Misc],
            (0..KEYBOARD_KEY_COUNT)
                .map(|code| (EventClass::Key, code))
                .collect(),
        )
    }

    fn new(event_classes: Vec<EventClass>, codes: Vec<(EventClass, u16)>) -> Self {
        let permitted = codes.iter().copied().collect();
        Self {
            event_classes,
            codes,
            permitted,
        }
    }

    pub fn event_classes(&self) -> &[EventClass] {
        &self.event_classes
    }

    pub fn codes(&self) -> &[(EventClass, u16)] {
        &self.codes
    }

    /// Whether a device with this set may emit `event`.
    ///
    /// Synchronization records only need the `Sync` class; every other record
    /// needs its exact `(class, code)` pair.
    pub fn permits(&self, event: &PrimitiveEvent) -> bool {
        if !self.event_classes.contains(&event.class) {
            return false;
        }
        event.class == EventClass::Sync || self.permitted.contains(&(event.class, event.code))
    }
}
