//! Logical input actions, one per call on the inbound action interface.
//!
//! The transport that receives these from the remote peer lives outside this
//! workspace.  It decodes whatever wire format it speaks into [`InputAction`]
//! values and hands them to the client's emitter.

use serde::{Deserialize, Serialize};

use super::button::ButtonId;
use super::event::KeyState;
use crate::keymap::KeyId;

/// One logical input action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputAction {
    /// Absolute cursor position within the pointer's declared surface.
    Motion { x: i32, y: i32 },
    /// Relative cursor movement.
    RelativeMotion { dx: i32, dy: i32 },
    /// Wheel movement; only the sign of each delta is used.
    Wheel { dx: i32, dy: i32 },
    Button { id: ButtonId, state: KeyState },
    Key { key_id: KeyId, state: KeyState },
    /// Flush both devices.
    Sync,
}
