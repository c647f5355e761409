//! Domain entities for virtual input devices.
//!
//! Everything here is plain data: no file descriptors, no ioctls.  The client
//! crate turns these descriptions into registration calls and event writes.

/// Logical input actions received from the remote peer.
pub mod action;

/// Fixed mouse-button table.
pub mod button;

/// Event-class and code declarations for each device kind.
pub mod capability;

/// Name and identity record written before device commit.
pub mod descriptor;

/// Primitive event records.
pub mod event;
