//! Application layer use cases for the client.
//!
//! - **`manage_devices`** – Opens, registers, commits and tears down virtual
//!   devices.  The OS access itself goes through the [`manage_devices::UinputNode`]
//!   trait so the registration sequence can be tested without `/dev/uinput`.
//!
//! - **`emit_input`** – Serializes logical actions into primitive records on a
//!   live device, consulting the key translation table for keyboard keys.

pub mod emit_input;
pub mod manage_devices;
