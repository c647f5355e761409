//! # vinput-core
//!
//! Platform-free building blocks for software-emulated input devices:
//! key translation tables, primitive event records, and the fixed
//! capability declarations of the virtual pointer and keyboard.
//!
//! This crate has no dependency on `/dev/uinput` or any other OS API.
//! The `vinput-client` crate owns the device handles and performs the
//! actual registration and writes.
//!
//! # Architecture overview (for beginners)
//!
//! A remote peer describes keyboard and mouse activity using a portable
//! *key identifier* space (printable characters plus named keys such as
//! `0xEF1B` for Escape).  The Linux input subsystem knows nothing about
//! those identifiers; it speaks small integer *native codes* (`KEY_ESC` = 1).
//!
//! - **`keymap`** – The external key-identifier constants, the native
//!   evdev code constants, and the [`KeyTranslationTable`] that maps one
//!   onto the other.
//!
//! - **`domain`** – Event records (`type`, `code`, `value`), the mouse
//!   button table, capability sets, and device descriptors.  These describe
//!   *what* a virtual device announces and emits, independent of *how* the
//!   bytes reach the kernel.

pub mod domain;
pub mod keymap;

pub use domain::action::InputAction;
pub use domain::capability::CapabilitySet;
pub use domain::descriptor::{DeviceDescriptor, DeviceIdentity};
pub use domain::event::{EventClass, KeyState, PrimitiveEvent};
pub use keymap::{KeyId, KeyTranslationTable, NativeCode};
