//! Virtual device lifecycle: open, declare capabilities, commit, destroy.
//!
//! Creation is all-or-nothing.  If any registration step fails the node is
//! dropped (which closes it) before the device was committed, so a partially
//! declared device never becomes visible to the rest of the system.

use std::{
    fmt, io,
    path::{Path, PathBuf},
    thread,
    time::Duration,
};

use thiserror::Error;
use tracing::{debug, error, info, warn};
use vinput_core::{
    domain::descriptor::{DEFAULT_KEYBOARD_NAME, DEFAULT_POINTER_NAME},
    CapabilitySet, DeviceDescriptor, EventClass, PrimitiveEvent,
};

/// Error type for virtual device construction.
#[derive(Debug, Error)]
pub enum DeviceError {
    /// The uinput node could not be opened (missing module, permissions).
    #[error("cannot open {path}: {source}")]
    Unavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A capability registration call was refused.
    #[error("{step} rejected: {source}")]
    CapabilityRejected {
        step: String,
        #[source]
        source: io::Error,
    },

    /// Writing the device descriptor record failed.
    #[error("device descriptor write failed: {0}")]
    DescriptorRejected(#[source] io::Error),

    /// `UI_DEV_CREATE` was refused after all declarations succeeded.
    #[error("UI_DEV_CREATE failed: {0}")]
    CommitFailed(#[source] io::Error),

    /// The pointer surface must be at least 1x1.
    #[error("invalid pointer surface {width}x{height}")]
    InvalidSurface { width: u16, height: u16 },
}

/// Raw operations on one opened uinput node.
///
/// Dropping the node closes the underlying handle.
#[cfg_attr(test, mockall::automock)]
pub trait UinputNode {
    /// `UI_SET_EVBIT`: declare an event class.
    fn set_event_bit(&mut self, class: EventClass) -> io::Result<()>;

    /// `UI_SET_{KEY,REL,ABS,MSC}BIT`: declare one code within a class.
    fn set_code_bit(&mut self, class: EventClass, code: u16) -> io::Result<()>;

    /// Writes the zero-initialized legacy device record.
    fn write_descriptor(&mut self, descriptor: &DeviceDescriptor) -> io::Result<()>;

    /// `UI_DEV_CREATE`.
    fn commit(&mut self) -> io::Result<()>;

    /// `UI_DEV_DESTROY`.
    fn destroy(&mut self) -> io::Result<()>;

    /// Writes one primitive event record.
    fn write_event(&mut self, event: &PrimitiveEvent) -> io::Result<()>;
}

/// Opens fresh uinput nodes.
pub trait NodeOpener {
    type Node: UinputNode;

    /// Path reported in [`DeviceError::Unavailable`].
    fn path(&self) -> &Path;

    fn open(&self) -> io::Result<Self::Node>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceKind {
    Pointer,
    Keyboard,
}

impl DeviceKind {
    fn capabilities(self) -> CapabilitySet {
        match self {
            DeviceKind::Pointer => CapabilitySet::pointer(),
            DeviceKind::Keyboard => CapabilitySet::keyboard(),
        }
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceKind::Pointer => f.write_str("pointer"),
            DeviceKind::Keyboard => f.write_str("keyboard"),
        }
    }
}

/// A committed virtual device, or a disabled placeholder.
///
/// A disabled device accepts every emitter call and does nothing, so call
/// sites do not need to check liveness.  A live device is destroyed and
/// closed when dropped or when [`VirtualDevice::close`] is called.
pub struct VirtualDevice<N: UinputNode> {
    kind: DeviceKind,
    node: Option<N>,
    capabilities: CapabilitySet,
}

impl<N: UinputNode> VirtualDevice<N> {
    /// A device that was never created.
    pub fn disabled(kind: DeviceKind) -> Self {
        Self {
            kind,
            node: None,
            capabilities: kind.capabilities(),
        }
    }

    /// Wraps a node that has already been committed.
    pub(crate) fn committed(kind: DeviceKind, node: N) -> Self {
        Self {
            kind,
            node: Some(node),
            capabilities: kind.capabilities(),
        }
    }

    pub fn kind(&self) -> DeviceKind {
        self.kind
    }

    pub fn is_live(&self) -> bool {
        self.node.is_some()
    }

    /// Writes one record.
    ///
    /// Returns `None` for a disabled device.  Records whose class or code was
    /// not declared at creation are refused with `InvalidInput` and never
    /// reach the node.
    pub fn write(&mut self, event: &PrimitiveEvent) -> Option<io::Result<()>> {
        let node = self.node.as_mut()?;
        if !self.capabilities.permits(event) {
            return Some(Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "{:?} code {} was not declared by the {} device",
                    event.class, event.code, self.kind
                ),
            )));
        }
        Some(node.write_event(event))
    }

    /// Destroys and closes the device.  No-op on a disabled device.
    pub fn close(mut self) {
        self.teardown();
    }

    fn teardown(&mut self) {
        if let Some(mut node) = self.node.take() {
            if let Err(e) = node.destroy() {
                warn!(kind = %self.kind, "UI_DEV_DESTROY failed: {e}");
            }
            info!(kind = %self.kind, "virtual device destroyed");
        }
    }
}

impl<N: UinputNode> Drop for VirtualDevice<N> {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl<N: UinputNode> fmt::Debug for VirtualDevice<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VirtualDevice")
            .field("kind", &self.kind)
            .field("live", &self.is_live())
            .finish()
    }
}

/// Creates pointer and keyboard devices through a [`NodeOpener`].
pub struct DeviceManager<O: NodeOpener> {
    opener: O,
    settle_delay: Duration,
    pointer_name: String,
    keyboard_name: String,
}

impl<O: NodeOpener> DeviceManager<O> {
    /// `settle_delay` is slept once after each successful commit so that udev
    /// and the display server can pick up the new device before events flow.
    pub fn new(opener: O, settle_delay: Duration) -> Self {
        Self {
            opener,
            settle_delay,
            pointer_name: DEFAULT_POINTER_NAME.to_string(),
            keyboard_name: DEFAULT_KEYBOARD_NAME.to_string(),
        }
    }

    pub fn with_names(mut self, pointer: impl Into<String>, keyboard: impl Into<String>) -> Self {
        self.pointer_name = pointer.into();
        self.keyboard_name = keyboard.into();
        self
    }

    /// Creates the pointer device with absolute axes `0..=width` and `0..=height`.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::InvalidSurface`] for a zero dimension, otherwise
    /// the first registration step that failed.
    pub fn create_pointer(
        &self,
        width: u16,
        height: u16,
    ) -> Result<VirtualDevice<O::Node>, DeviceError> {
        if width == 0 || height == 0 {
            return Err(DeviceError::InvalidSurface { width, height });
        }
        let descriptor = DeviceDescriptor::pointer(self.pointer_name.as_str(), width, height);
        self.create(DeviceKind::Pointer, descriptor)
    }

    /// Creates the keyboard device declaring all 256 standard key codes.
    ///
    /// # Errors
    ///
    /// Returns the first registration step that failed.
    pub fn create_keyboard(&self) -> Result<VirtualDevice<O::Node>, DeviceError> {
        let descriptor = DeviceDescriptor::keyboard(self.keyboard_name.as_str());
        self.create(DeviceKind::Keyboard, descriptor)
    }

    /// Like [`create_pointer`](Self::create_pointer) but reports the failure
    /// and returns a disabled device instead.
    pub fn create_pointer_or_disabled(&self, width: u16, height: u16) -> VirtualDevice<O::Node> {
        self.create_pointer(width, height)
            .unwrap_or_else(|e| disabled_after(DeviceKind::Pointer, &e))
    }

    /// Like [`create_keyboard`](Self::create_keyboard) but reports the failure
    /// and returns a disabled device instead.
    pub fn create_keyboard_or_disabled(&self) -> VirtualDevice<O::Node> {
        self.create_keyboard()
            .unwrap_or_else(|e| disabled_after(DeviceKind::Keyboard, &e))
    }

    fn create(
        &self,
        kind: DeviceKind,
        descriptor: DeviceDescriptor,
    ) -> Result<VirtualDevice<O::Node>, DeviceError> {
        let capabilities = kind.capabilities();

        let mut node = self.opener.open().map_err(|source| DeviceError::Unavailable {
            path: self.opener.path().to_path_buf(),
            source,
        })?;

        for &class in capabilities.event_classes() {
            node.set_event_bit(class)
                .map_err(|source| DeviceError::CapabilityRejected {
                    step: format!("UI_SET_EVBIT {class:?}"),
                    source,
                })?;
        }
        for &(class, code) in capabilities.codes() {
            node.set_code_bit(class, code)
                .map_err(|source| DeviceError::CapabilityRejected {
                    step: format!("{} {code}", code_bit_request(class)),
                    source,
                })?;
        }
        debug!(
            %kind,
            classes = capabilities.event_classes().len(),
            codes = capabilities.codes().len(),
            "capabilities declared"
        );

        node.write_descriptor(&descriptor)
            .map_err(DeviceError::DescriptorRejected)?;
        node.commit().map_err(DeviceError::CommitFailed)?;
        info!(%kind, name = %descriptor.name, "virtual device created");

        if !self.settle_delay.is_zero() {
            debug!(
                %kind,
                delay_ms = self.settle_delay.as_millis() as u64,
                "waiting for device to settle"
            );
            thread::sleep(self.settle_delay);
        }

        Ok(VirtualDevice::committed(kind, node))
    }
}

fn disabled_after<N: UinputNode>(kind: DeviceKind, err: &DeviceError) -> VirtualDevice<N> {
    error!(%kind, "virtual device unavailable: {err}");
    VirtualDevice::disabled(kind)
}

fn code_bit_request(class: EventClass) -> &'static str {
    match class {
        EventClass::Key => "UI_SET_KEYBIT",
        EventClass::Relative => "UI_SET_RELBIT",
        EventClass::Absolute => "UI_SET_ABSBIT",
        EventClass::Misc => "UI_SET_MSCBIT",
        EventClass::Sync => "UI_SET_EVBIT",
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::{predicate::eq, Sequence};
    use std::cell::RefCell;
    use vinput_core::{domain::event::ABS_X, keymap::evdev, DeviceIdentity, KeyState};

    /// Hands out a single prepared mock node.
    struct MockOpener {
        node: RefCell<Option<MockUinputNode>>,
    }

    impl MockOpener {
        fn with(node: MockUinputNode) -> Self {
            Self {
                node: RefCell::new(Some(node)),
            }
        }

        fn unavailable() -> Self {
            Self {
                node: RefCell::new(None),
            }
        }
    }

    impl NodeOpener for MockOpener {
        type Node = MockUinputNode;

        fn path(&self) -> &Path {
            Path::new("/dev/uinput-test")
        }

        fn open(&self) -> io::Result<MockUinputNode> {
            self.node
                .borrow_mut()
                .take()
                .ok_or_else(|| io::Error::from(io::ErrorKind::PermissionDenied))
        }
    }

    fn manager(opener: MockOpener) -> DeviceManager<MockOpener> {
        DeviceManager::new(opener, Duration::ZERO)
    }

    #[test]
    fn test_create_keyboard_declares_everything_before_commit() {
        // Arrange
        let mut node = MockUinputNode::new();
        let mut seq = Sequence::new();
        node.expect_set_event_bit()
            .times(3)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        node.expect_set_code_bit()
            .times(256)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        node.expect_write_descriptor()
            .withf(|d| d.identity == DeviceIdentity::KEYBOARD && d.name == "synergyKeyboard")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        node.expect_commit()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(()));
        node.expect_destroy()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(()));

        // Act
        let device = manager(MockOpener::with(node)).create_keyboard().unwrap();

        // Assert
        assert!(device.is_live());
        assert_eq!(device.kind(), DeviceKind::Keyboard);
        device.close();
    }

    #[test]
    fn test_create_pointer_writes_surface_ranges() {
        // Arrange
        let mut node = MockUinputNode::new();
        node.expect_set_event_bit().times(4).returning(|_| Ok(()));
        node.expect_set_code_bit().returning(|_, _| Ok(()));
        node.expect_write_descriptor()
            .withf(|d| {
                d.identity == DeviceIdentity::POINTER
                    && d.abs_ranges.iter().any(|r| r.axis == ABS_X && r.max == 1920)
            })
            .times(1)
            .returning(|_| Ok(()));
        node.expect_commit().times(1).returning(|| Ok(()));
        node.expect_destroy().times(1).returning(|| Ok(()));

        // Act
        let device = manager(MockOpener::with(node)).create_pointer(1920, 1080);

        // Assert
        assert!(device.unwrap().is_live());
    }

    #[test]
    fn test_open_failure_returns_unavailable() {
        let result = manager(MockOpener::unavailable()).create_keyboard();

        match result {
            Err(DeviceError::Unavailable { path, .. }) => {
                assert_eq!(path, PathBuf::from("/dev/uinput-test"));
            }
            other => panic!("expected Unavailable, got {other:?}"),
        }
    }

    #[test]
    fn test_rejected_code_bit_aborts_before_commit() {
        // Arrange: the tenth code registration fails
        let mut node = MockUinputNode::new();
        node.expect_set_event_bit().returning(|_| Ok(()));
        let mut calls = 0;
        node.expect_set_code_bit().returning(move |_, _| {
            calls += 1;
            if calls == 10 {
                Err(io::Error::from(io::ErrorKind::InvalidInput))
            } else {
                Ok(())
            }
        });
        node.expect_write_descriptor().never();
        node.expect_commit().never();
        node.expect_destroy().never();

        // Act
        let result = manager(MockOpener::with(node)).create_keyboard();

        // Assert
        match result {
            Err(DeviceError::CapabilityRejected { step, .. }) => {
                assert_eq!(step, "UI_SET_KEYBIT 9");
            }
            other => panic!("expected CapabilityRejected, got {other:?}"),
        }
    }

    #[test]
    fn test_rejected_event_bit_names_the_class() {
        let mut node = MockUinputNode::new();
        node.expect_set_event_bit()
            .with(eq(EventClass::Sync))
            .returning(|_| Ok(()));
        node.expect_set_event_bit()
            .with(eq(EventClass::Key))
            .returning(|_| Err(io::Error::from(io::ErrorKind::PermissionDenied)));
        node.expect_commit().never();

        let err = manager(MockOpener::with(node)).create_keyboard().unwrap_err();

        assert!(err.to_string().starts_with("UI_SET_EVBIT Key"), "{err}");
    }

    #[test]
    fn test_commit_failure_is_reported_and_not_destroyed() {
        let mut node = MockUinputNode::new();
        node.expect_set_event_bit().returning(|_| Ok(()));
        node.expect_set_code_bit().returning(|_, _| Ok(()));
        node.expect_write_descriptor().returning(|_| Ok(()));
        node.expect_commit()
            .returning(|| Err(io::Error::from(io::ErrorKind::Other)));
        node.expect_destroy().never();

        let result = manager(MockOpener::with(node)).create_pointer(800, 600);

        assert!(matches!(result, Err(DeviceError::CommitFailed(_))));
    }

    #[test]
    fn test_descriptor_failure_is_reported() {
        let mut node = MockUinputNode::new();
        node.expect_set_event_bit().returning(|_| Ok(()));
        node.expect_set_code_bit().returning(|_, _| Ok(()));
        node.expect_write_descriptor()
            .returning(|_| Err(io::Error::from(io::ErrorKind::WriteZero)));
        node.expect_commit().never();

        let result = manager(MockOpener::with(node)).create_keyboard();

        assert!(matches!(result, Err(DeviceError::DescriptorRejected(_))));
    }

    #[test]
    fn test_zero_surface_is_rejected_without_opening() {
        let opener = MockOpener::with(MockUinputNode::new());

        let result = manager(opener).create_pointer(0, 1080);

        assert!(matches!(
            result,
            Err(DeviceError::InvalidSurface { width: 0, height: 1080 })
        ));
    }

    #[test]
    fn test_or_disabled_returns_disabled_device_on_failure() {
        let device = manager(MockOpener::unavailable()).create_keyboard_or_disabled();

        assert!(!device.is_live());
        assert_eq!(device.kind(), DeviceKind::Keyboard);
    }

    #[test]
    fn test_disabled_device_write_is_none_and_close_is_noop() {
        let mut device: VirtualDevice<MockUinputNode> = VirtualDevice::disabled(DeviceKind::Pointer);

        assert!(device.write(&PrimitiveEvent::sync()).is_none());
        device.close();
    }

    #[test]
    fn test_undeclared_record_is_refused_before_reaching_node() {
        // Arrange
        let mut node = MockUinputNode::new();
        node.expect_write_event().never();
        node.expect_destroy().times(1).returning(|| Ok(()));
        let mut device = VirtualDevice::committed(DeviceKind::Keyboard, node);

        // Act
        let result = device.write(&PrimitiveEvent::key(evdev::BTN_LEFT, KeyState::Pressed));

        // Assert
        let err = result.unwrap().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_destroy_failure_during_drop_does_not_panic() {
        let mut node = MockUinputNode::new();
        node.expect_destroy()
            .times(1)
            .returning(|| Err(io::Error::from(io::ErrorKind::NotFound)));

        drop(VirtualDevice::committed(DeviceKind::Pointer, node));
    }
}
