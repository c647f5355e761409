//! vinput-client library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! # What does vinput-client do? (for beginners)
//!
//! The client registers two software-only input devices with the Linux
//! kernel through `/dev/uinput`: a pointer (mouse) and a keyboard.  Once
//! registered, the rest of the system (X11, Wayland compositors, consoles)
//! treats them like real hardware.
//!
//! 1. [`application::manage_devices`] declares each device's capabilities,
//!    writes its descriptor, and commits it.
//! 2. [`application::emit_input`] turns logical actions (cursor motion, a key
//!    press) into primitive event records followed by a synchronization
//!    record.
//! 3. [`infrastructure::uinput`] performs the actual ioctls and writes, or
//!    records them in memory for tests.

/// Application layer: device lifecycle and event emission.
pub mod application;

/// Infrastructure layer: uinput node access and configuration storage.
pub mod infrastructure;
