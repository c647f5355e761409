//! Infrastructure layer: the uinput node backends and configuration storage.

pub mod storage;
pub mod uinput;
