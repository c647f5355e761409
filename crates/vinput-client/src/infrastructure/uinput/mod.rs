//! Backends for the [`UinputNode`](crate::application::manage_devices::UinputNode) seam.
//!
//! The kernel backend is only compiled on Linux.  The recording backend is
//! always available so integration tests and other crates can drive the
//! device manager and emitter without `/dev/uinput`.

pub mod mock;

#[cfg(target_os = "linux")]
pub mod linux;
