//! Kernel uinput backend.
//!
//! # What is uinput? (for beginners)
//!
//! `/dev/uinput` is a character device that lets a user-space process create
//! input devices the kernel treats exactly like physical hardware.  Events
//! written to it reach every reader of the input stack: the display server,
//! the console, games, anything listening on `/dev/input/event*`.
//!
//! Creating a device is a fixed sequence on one open file descriptor:
//!
//! 1. `UI_SET_EVBIT` once per event class the device will produce.
//! 2. `UI_SET_KEYBIT` / `UI_SET_RELBIT` / `UI_SET_ABSBIT` / `UI_SET_MSCBIT`
//!    once per code inside those classes.
//! 3. `write()` one `uinput_user_dev` record: name, bus/vendor/product ids and
//!    the min/max of every absolute axis.
//! 4. `UI_DEV_CREATE`.  The device now exists.
//!
//! After that, every `write()` of one `input_event` record injects one event,
//! and `UI_DEV_DESTROY` followed by `close()` removes the device.
//!
//! # Permissions
//!
//! The node is normally root-only, or group-writable through a udev rule.  An
//! `EACCES` from [`LinuxNodeOpener::open`] is reported as
//! [`DeviceError::Unavailable`](crate::application::manage_devices::DeviceError::Unavailable).

use std::{
    fs::{File, OpenOptions},
    io::{self, Write},
    mem,
    os::{
        fd::{AsRawFd, RawFd},
        unix::fs::OpenOptionsExt,
    },
    path::{Path, PathBuf},
    slice,
};

use nix::libc;
use vinput_core::{DeviceDescriptor, EventClass, PrimitiveEvent};

use crate::application::manage_devices::{NodeOpener, UinputNode};

/// Default location of the uinput character device.
pub const DEFAULT_UINPUT_PATH: &str = "/dev/uinput";

// ── ioctl requests ────────────────────────────────────────────────────────────

mod ioctl {
    const UINPUT_IOCTL_BASE: u8 = b'U';

    nix::ioctl_none!(ui_dev_create, UINPUT_IOCTL_BASE, 1);
    nix::ioctl_none!(ui_dev_destroy, UINPUT_IOCTL_BASE, 2);
    nix::ioctl_write_int!(ui_set_evbit, UINPUT_IOCTL_BASE, 100);
    nix::ioctl_write_int!(ui_set_keybit, UINPUT_IOCTL_BASE, 101);
    nix::ioctl_write_int!(ui_set_relbit, UINPUT_IOCTL_BASE, 102);
    nix::ioctl_write_int!(ui_set_absbit, UINPUT_IOCTL_BASE, 103);
    nix::ioctl_write_int!(ui_set_mscbit, UINPUT_IOCTL_BASE, 104);
}

// ── Kernel records ────────────────────────────────────────────────────────────

/// Builds the legacy device setup record (`struct uinput_user_dev`).
fn user_dev_record(descriptor: &DeviceDescriptor) -> libc::uinput_user_dev {
    // SAFETY: uinput_user_dev is plain C data and all-zero is a valid value.
    let mut record: libc::uinput_user_dev = unsafe { mem::zeroed() };
    for (dst, &src) in record.name.iter_mut().zip(descriptor.name_field().iter()) {
        *dst = src as libc::c_char;
    }
    let identity = descriptor.identity;
    record.id.bustype = identity.bustype;
    record.id.vendor = identity.vendor;
    record.id.product = identity.product;
    record.id.version = identity.version;
    for range in &descriptor.abs_ranges {
        let axis = usize::from(range.axis);
        if axis < record.absmax.len() {
            record.absmin[axis] = range.min;
            record.absmax[axis] = range.max;
        }
    }
    record
}

/// Builds one event record (`struct input_event`).  The kernel stamps the time.
fn input_event_record(event: &PrimitiveEvent) -> libc::input_event {
    // SAFETY: input_event is plain C data; a zero timestamp asks the kernel
    // to fill in the time.
    let mut record: libc::input_event = unsafe { mem::zeroed() };
    record.type_ = event.class.raw();
    record.code = event.code;
    record.value = event.value;
    record
}

/// Views a kernel record as the bytes `write()` expects.
///
/// # Safety
///
/// `T` must be one of the padding-free `libc` input records.
unsafe fn record_bytes<T>(record: &T) -> &[u8] {
    slice::from_raw_parts((record as *const T).cast::<u8>(), mem::size_of::<T>())
}

// ── Node ──────────────────────────────────────────────────────────────────────

/// An open `/dev/uinput` file descriptor.
#[derive(Debug)]
pub struct LinuxUinputNode {
    file: File,
}

impl LinuxUinputNode {
    fn fd(&self) -> RawFd {
        self.file.as_raw_fd()
    }

    /// Writes the whole record in one `write()`; a short write is an error.
    fn write_record(&mut self, bytes: &[u8]) -> io::Result<()> {
        let written = self.file.write(bytes)?;
        if written != bytes.len() {
            return Err(io::Error::new(
                io::ErrorKind::WriteZero,
                format!("short write: {written} of {} bytes", bytes.len()),
            ));
        }
        Ok(())
    }
}

impl UinputNode for LinuxUinputNode {
    fn set_event_bit(&mut self, class: EventClass) -> io::Result<()> {
        // SAFETY: fd is an open uinput descriptor for the lifetime of self.
        unsafe { ioctl::ui_set_evbit(self.fd(), class.raw().into()) }?;
        Ok(())
    }

    fn set_code_bit(&mut self, class: EventClass, code: u16) -> io::Result<()> {
        let fd = self.fd();
        let code: nix::sys::ioctl::ioctl_param_type = code.into();
        // SAFETY: fd is an open uinput descriptor for the lifetime of self.
        unsafe {
            match class {
                EventClass::Key => ioctl::ui_set_keybit(fd, code),
                EventClass::Relative => ioctl::ui_set_relbit(fd, code),
                EventClass::Absolute => ioctl::ui_set_absbit(fd, code),
                EventClass::Misc => ioctl::ui_set_mscbit(fd, code),
                EventClass::Sync => {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidInput,
                        "sync codes cannot be declared",
                    ))
                }
            }
        }?;
        Ok(())
    }

    fn write_descriptor(&mut self, descriptor: &DeviceDescriptor) -> io::Result<()> {
        let record = user_dev_record(descriptor);
        // SAFETY: uinput_user_dev is padding-free.
        let bytes = unsafe { record_bytes(&record) };
        self.write_record(bytes)
    }

    fn commit(&mut self) -> io::Result<()> {
        // SAFETY: fd is an open uinput descriptor for the lifetime of self.
        unsafe { ioctl::ui_dev_create(self.fd()) }?;
        Ok(())
    }

    fn destroy(&mut self) -> io::Result<()> {
        // SAFETY: fd is an open uinput descriptor for the lifetime of self.
        unsafe { ioctl::ui_dev_destroy(self.fd()) }?;
        Ok(())
    }

    fn write_event(&mut self, event: &PrimitiveEvent) -> io::Result<()> {
        let record = input_event_record(event);
        // SAFETY: input_event is padding-free.
        let bytes = unsafe { record_bytes(&record) };
        self.write_record(bytes)
    }
}

// ── Opener ────────────────────────────────────────────────────────────────────

/// Opens the uinput node write-only and non-blocking.
#[derive(Debug, Clone)]
pub struct LinuxNodeOpener {
    path: PathBuf,
}

impl LinuxNodeOpener {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for LinuxNodeOpener {
    fn default() -> Self {
        Self::new(DEFAULT_UINPUT_PATH)
    }
}

impl NodeOpener for LinuxNodeOpener {
    type Node = LinuxUinputNode;

    fn path(&self) -> &Path {
        &self.path
    }

    fn open(&self) -> io::Result<LinuxUinputNode> {
        let file = OpenOptions::new()
            .write(true)
            .custom_flags(libc::O_NONBLOCK)
            .open(&self.path)?;
        Ok(LinuxUinputNode { file })
    }
}
