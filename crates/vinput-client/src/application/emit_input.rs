//! EventEmitter: serializes logical actions into primitive records.
//!
//! Every operation is a no-op on a disabled device.  Write failures are
//! logged and counted but never abort the remaining records of an action and
//! never disable the device; the next call tries again.
//!
//! # Reduced-fidelity actions
//!
//! - **Wheel** deltas are reduced to their sign: any positive delta scrolls one
//!   notch, any negative delta scrolls one notch the other way.
//! - **Relative motion** writes X and Y as two separately synchronized updates
//!   rather than one combined update.

use tracing::{error, warn};
use vinput_core::{
    domain::{
        button::{button_to_native, ButtonId},
        event::{ABS_X, ABS_Y, REL_HWHEEL, REL_WHEEL, REL_X, REL_Y},
    },
    InputAction, KeyId, KeyState, KeyTranslationTable, PrimitiveEvent,
};

use super::manage_devices::{UinputNode, VirtualDevice};

/// The pointer and keyboard pair that actions are routed to.
#[derive(Debug)]
pub struct DeviceSet<N: UinputNode> {
    pub pointer: VirtualDevice<N>,
    pub keyboard: VirtualDevice<N>,
}

/// Counters for what the emitter wrote and what it had to drop.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EmitStats {
    /// Records accepted by a device, synchronization records included.
    pub events_written: u64,
    pub write_failures: u64,
    /// Key actions dropped because the key id has no native code.
    pub translation_misses: u64,
    /// Button actions dropped because the button id is outside the table.
    pub unmapped_buttons: u64,
}

/// Writes logical actions to virtual devices.
pub struct EventEmitter<'t> {
    table: &'t KeyTranslationTable,
    stats: EmitStats,
}

impl<'t> EventEmitter<'t> {
    pub fn new(table: &'t KeyTranslationTable) -> Self {
        Self {
            table,
            stats: EmitStats::default(),
        }
    }

    pub fn stats(&self) -> EmitStats {
        self.stats
    }

    /// Writes a single synchronization record.
    pub fn sync<N: UinputNode>(&mut self, device: &mut VirtualDevice<N>) {
        self.write(device, PrimitiveEvent::sync());
    }

    /// Absolute cursor position: X, then Y, then sync.
    ///
    /// Values are written unchanged; callers keep them inside the surface the
    /// pointer was created with.
    pub fn motion<N: UinputNode>(&mut self, device: &mut VirtualDevice<N>, x: i32, y: i32) {
        if !device.is_live() {
            return;
        }
        self.write(device, PrimitiveEvent::absolute(ABS_X, x));
        self.write(device, PrimitiveEvent::absolute(ABS_Y, y));
        self.sync(device);
    }

    /// Relative cursor movement; each nonzero axis is its own synchronized update.
    pub fn relative_motion<N: UinputNode>(
        &mut self,
        device: &mut VirtualDevice<N>,
        dx: i32,
        dy: i32,
    ) {
        if !device.is_live() {
            return;
        }
        if dx != 0 {
            self.write(device, PrimitiveEvent::relative(REL_X, dx));
            self.sync(device);
        }
        if dy != 0 {
            self.write(device, PrimitiveEvent::relative(REL_Y, dy));
            self.sync(device);
        }
    }

    /// Wheel movement; each nonzero axis scrolls exactly one notch in its direction.
    pub fn wheel<N: UinputNode>(&mut self, device: &mut VirtualDevice<N>, dx: i32, dy: i32) {
        if !device.is_live() {
            return;
        }
        if dx != 0 {
            self.write(device, PrimitiveEvent::relative(REL_HWHEEL, dx.signum()));
            self.sync(device);
        }
        if dy != 0 {
            self.write(device, PrimitiveEvent::relative(REL_WHEEL, dy.signum()));
            self.sync(device);
        }
    }

    /// Mouse button press or release.
    pub fn button<N: UinputNode>(
        &mut self,
        device: &mut VirtualDevice<N>,
        id: ButtonId,
        state: KeyState,
    ) {
        if !device.is_live() {
            return;
        }
        let Some(code) = button_to_native(id) else {
            self.stats.unmapped_buttons += 1;
            warn!(button = id, "mouse button {id} translation error");
            return;
        };
        self.write(device, PrimitiveEvent::key(code, state));
        self.sync(device);
    }

    /// Keyboard key press or release.
    ///
    /// An unmapped key id is reported once and nothing is written, so an
    /// unmapped press can never leave a key stuck down.
    pub fn key<N: UinputNode>(
        &mut self,
        device: &mut VirtualDevice<N>,
        key_id: KeyId,
        state: KeyState,
    ) {
        if !device.is_live() {
            return;
        }
        let Some(code) = self.table.translate(key_id) else {
            self.stats.translation_misses += 1;
            warn!(key_id, "key {key_id} translation error");
            return;
        };
        self.write(device, PrimitiveEvent::key(code, state));
        self.sync(device);
    }

    /// Routes one action to the device it belongs to.
    pub fn apply<N: UinputNode>(&mut self, devices: &mut DeviceSet<N>, action: &InputAction) {
        match *action {
            InputAction::Motion { x, y } => self.motion(&mut devices.pointer, x, y),
            InputAction::RelativeMotion { dx, dy } => {
                self.relative_motion(&mut devices.pointer, dx, dy)
            }
            InputAction::Wheel { dx, dy } => self.wheel(&mut devices.pointer, dx, dy),
            InputAction::Button { id, state } => self.button(&mut devices.pointer, id, state),
            InputAction::Key { key_id, state } => self.key(&mut devices.keyboard, key_id, state),
            InputAction::Sync => {
                self.sync(&mut devices.pointer);
                self.sync(&mut devices.keyboard);
            }
        }
    }

    fn write<N: UinputNode>(&mut self, device: &mut VirtualDevice<N>, event: PrimitiveEvent) {
        match device.write(&event) {
            Some(Ok(())) => self.stats.events_written += 1,
            Some(Err(e)) => {
                self.stats.write_failures += 1;
                error!(kind = %device.kind(), ?event, "write error: {e}");
            }
            None => {}
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
