//! Recording uinput backend for testing.
//!
//! # Why a recording backend?
//!
//! The kernel backend needs write access to `/dev/uinput`, and every record it
//! writes lands in the test machine's real input stack.  The
//! [`RecordingOpener`] replaces the node with an in-memory journal: every
//! configuration request, descriptor, commit, event and teardown is appended
//! to a shared `Vec<NodeCall>` in the order it happened, so tests can assert on
//! exact sequences.
//!
//! # Usage in tests
//!
//! ```ignore
//! let opener = RecordingOpener::new();
//! let journal = opener.journal();
//! let manager = DeviceManager::new(opener, Duration::ZERO);
//!
//! let mut pointer = manager.create_pointer(1920, 1080)?;
//! EventEmitter::new(KeyTranslationTable::shared()).motion(&mut pointer, 960, 540);
//!
//! assert_eq!(journal.events().len(), 3);
//! ```
//!
//! # Fail points
//!
//! [`RecordingOpener::failing_at`] makes one step of the lifecycle fail so the
//! error paths can be tested without a broken kernel.

use std::{
    io,
    path::{Path, PathBuf},
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use vinput_core::{DeviceDescriptor, EventClass, PrimitiveEvent};

use crate::application::manage_devices::{NodeOpener, UinputNode};

/// One observed interaction with a recording node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeCall {
    Open,
    SetEventBit(EventClass),
    SetCodeBit(EventClass, u16),
    WriteDescriptor(DeviceDescriptor),
    Commit,
    Destroy,
    Event(PrimitiveEvent),
    /// The node handle was dropped.
    Close,
}

/// The step at which a recording node should fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailPoint {
    Open,
    EventBit(EventClass),
    CodeBit(EventClass, u16),
    Descriptor,
    Commit,
    /// Every event write fails after this many successful ones.
    EventWrites(usize),
}

/// Ordered, shared record of every call made to nodes from one opener.
#[derive(Debug, Clone, Default)]
pub struct Journal(Arc<Mutex<Vec<NodeCall>>>);

impl Journal {
    fn lock(&self) -> MutexGuard<'_, Vec<NodeCall>> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn push(&self, call: NodeCall) {
        self.lock().push(call);
    }

    /// Snapshot of every call so far.
    pub fn calls(&self) -> Vec<NodeCall> {
        self.lock().clone()
    }

    /// Only the event records, in write order.
    pub fn events(&self) -> Vec<PrimitiveEvent> {
        self.lock()
            .iter()
            .filter_map(|call| match call {
                NodeCall::Event(event) => Some(*event),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }
}

/// Opener that hands out [`RecordingNode`]s sharing one [`Journal`].
#[derive(Debug, Clone)]
pub struct RecordingOpener {
    path: PathBuf,
    journal: Journal,
    fail_at: Option<FailPoint>,
}

impl RecordingOpener {
    pub fn new() -> Self {
        Self {
            path: PathBuf::from("/dev/uinput"),
            journal: Journal::default(),
            fail_at: None,
        }
    }

    /// An opener whose nodes fail at `point`.
    pub fn failing_at(point: FailPoint) -> Self {
        Self {
            fail_at: Some(point),
            ..Self::new()
        }
    }

    pub fn journal(&self) -> Journal {
        self.journal.clone()
    }
}

impl Default for RecordingOpener {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeOpener for RecordingOpener {
    type Node = RecordingNode;

    fn path(&self) -> &Path {
        &self.path
    }

    fn open(&self) -> io::Result<RecordingNode> {
        if self.fail_at == Some(FailPoint::Open) {
            return Err(io::Error::from(io::ErrorKind::PermissionDenied));
        }
        self.journal.push(NodeCall::Open);
        Ok(RecordingNode {
            journal: self.journal.clone(),
            fail_at: self.fail_at,
            events_written: 0,
        })
    }
}

/// In-memory node that appends every call to its journal.
#[derive(Debug)]
pub struct RecordingNode {
    journal: Journal,
    fail_at: Option<FailPoint>,
    events_written: usize,
}

impl RecordingNode {
    fn injected(&self, point: FailPoint) -> io::Result<()> {
        if self.fail_at == Some(point) {
            Err(io::Error::other(format!("injected failure at {point:?}")))
        } else {
            Ok(())
        }
    }
}

impl UinputNode for RecordingNode {
    fn set_event_bit(&mut self, class: EventClass) -> io::Result<()> {
        self.injected(FailPoint::EventBit(class))?;
        self.journal.push(NodeCall::SetEventBit(class));
        Ok(())
    }

    fn set_code_bit(&mut self, class: EventClass, code: u16) -> io::Result<()> {
        self.injected(FailPoint::CodeBit(class, code))?;
        self.journal.push(NodeCall::SetCodeBit(class, code));
        Ok(())
    }

    fn write_descriptor(&mut self, descriptor: &DeviceDescriptor) -> io::Result<()> {
        self.injected(FailPoint::Descriptor)?;
        self.journal.push(NodeCall::WriteDescriptor(descriptor.clone()));
        Ok(())
    }

    fn commit(&mut self) -> io::Result<()> {
        self.injected(FailPoint::Commit)?;
        self.journal.push(NodeCall::Commit);
        Ok(())
    }

    fn destroy(&mut self) -> io::Result<()> {
        self.journal.push(NodeCall::Destroy);
        Ok(())
    }

    fn write_event(&mut self, event: &PrimitiveEvent) -> io::Result<()> {
        if let Some(FailPoint::EventWrites(limit)) = self.fail_at {
            if self.events_written >= limit {
                return Err(io::Error::from(io::ErrorKind::WouldBlock));
            }
        }
        self.events_written += 1;
        self.journal.push(NodeCall::Event(*event));
        Ok(())
    }
}

impl Drop for RecordingNode {
    fn drop(&mut self) {
        self.journal.push(NodeCall::Close);
    }
}
