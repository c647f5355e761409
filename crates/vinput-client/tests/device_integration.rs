//! Integration tests for virtual device creation and event emission.
//!
//! These tests drive the public `DeviceManager` and `EventEmitter` API end to
//! end against the recording uinput backend, asserting on the exact sequence
//! of registration calls and event records a kernel node would have received.

use std::time::Duration;

use vinput_client::{
    application::{
        emit_input::{DeviceSet, EmitStats, EventEmitter},
        manage_devices::{DeviceError, DeviceManager},
    },
    infrastructure::uinput::mock::{FailPoint, NodeCall, RecordingOpener},
};
use vinput_core::{
    domain::event::{ABS_X, ABS_Y, REL_HWHEEL, REL_WHEEL, REL_X},
    keymap::{evdev, key_id},
    DeviceDescriptor, EventClass, InputAction, KeyState, KeyTranslationTable, PrimitiveEvent,
};

fn manager(opener: RecordingOpener) -> DeviceManager<RecordingOpener> {
    DeviceManager::new(opener, Duration::ZERO)
}

fn emitter() -> EventEmitter<'static> {
    EventEmitter::new(KeyTranslationTable::shared())
}

// ── Device creation ───────────────────────────────────────────────────────────

#[test]
fn test_pointer_registration_sequence() {
    // Arrange
    let opener = RecordingOpener::new();
    let journal = opener.journal();

    // Act
    let pointer = manager(opener).create_pointer(1920, 1080).expect("pointer");

    // Assert
    assert!(pointer.is_live());
    let calls = journal.calls();
    assert_eq!(calls[0], NodeCall::Open);
    assert_eq!(
        calls[1..5],
        [
            NodeCall::SetEventBit(EventClass::Sync),
            NodeCall::SetEventBit(EventClass::Key),
            NodeCall::SetEventBit(EventClass::Absolute),
            NodeCall::SetEventBit(EventClass::Relative),
        ]
    );
    assert_eq!(calls[5], NodeCall::SetCodeBit(EventClass::Key, evdev::BTN_LEFT));
    assert_eq!(
        calls[calls.len() - 2],
        NodeCall::WriteDescriptor(DeviceDescriptor::pointer("synergyMouse", 1920, 1080))
    );
    assert_eq!(calls.last(), Some(&NodeCall::Commit));
}

#[test]
fn test_keyboard_declares_every_standard_key() {
    let opener = RecordingOpener::new();
    let journal = opener.journal();

    let keyboard = manager(opener).create_keyboard().expect("keyboard");

    assert!(keyboard.is_live());
    let key_bits = journal
        .calls()
        .iter()
        .filter(|c| matches!(c, NodeCall::SetCodeBit(EventClass::Key, _)))
        .count();
    assert_eq!(key_bits, 256);
    assert!(journal.calls().contains(&NodeCall::SetEventBit(EventClass::Misc)));
}

#[test]
fn test_open_failure_yields_disabled_device_that_writes_nothing() {
    // Arrange
    let opener = RecordingOpener::failing_at(FailPoint::Open);
    let journal = opener.journal();
    let mut pointer = manager(opener).create_pointer_or_disabled(1920, 1080);
    let mut emitter = emitter();

    // Act
    emitter.motion(&mut pointer, 10, 10);
    emitter.button(&mut pointer, 1, KeyState::Pressed);
    emitter.sync(&mut pointer);

    // Assert
    assert!(!pointer.is_live());
    assert!(journal.calls().is_empty());
    assert_eq!(emitter.stats(), EmitStats::default());
}

#[test]
fn test_capability_failure_closes_node_without_commit() {
    let opener =
        RecordingOpener::failing_at(FailPoint::CodeBit(EventClass::Absolute, ABS_Y));
    let journal = opener.journal();

    let result = manager(opener).create_pointer(1920, 1080);

    match result {
        Err(DeviceError::CapabilityRejected { step, .. }) => {
            assert_eq!(step, "UI_SET_ABSBIT 1");
        }
        other => panic!("expected CapabilityRejected, got {other:?}"),
    }
    let calls = journal.calls();
    assert!(!calls.contains(&NodeCall::Commit));
    assert!(!calls.contains(&NodeCall::Destroy));
    assert_eq!(calls.last(), Some(&NodeCall::Close));
}

#[test]
fn test_commit_failure_is_reported_and_node_closed() {
    let opener = RecordingOpener::failing_at(FailPoint::Commit);
    let journal = opener.journal();

    let result = manager(opener).create_keyboard();

    assert!(matches!(result, Err(DeviceError::CommitFailed(_))));
    assert_eq!(journal.calls().last(), Some(&NodeCall::Close));
}

#[test]
fn test_drop_destroys_then_closes() {
    let opener = RecordingOpener::new();
    let journal = opener.journal();
    let keyboard = manager(opener).create_keyboard().expect("keyboard");

    drop(keyboard);

    let calls = journal.calls();
    assert_eq!(calls[calls.len() - 2..], [NodeCall::Destroy, NodeCall::Close]);
}

#[test]
fn test_explicit_close_tears_down_once() {
    let opener = RecordingOpener::new();
    let journal = opener.journal();
    let pointer = manager(opener).create_pointer(800, 600).expect("pointer");

    pointer.close();

    let destroys = journal
        .calls()
        .iter()
        .filter(|c| **c == NodeCall::Destroy)
        .count();
    assert_eq!(destroys, 1);
}

#[test]
fn test_custom_names_reach_descriptor() {
    let opener = RecordingOpener::new();
    let journal = opener.journal();

    let _keyboard = manager(opener)
        .with_names("remote pointer", "remote keyboard")
        .create_keyboard()
        .expect("keyboard");

    assert!(journal
        .calls()
        .contains(&NodeCall::WriteDescriptor(DeviceDescriptor::keyboard("remote keyboard"))));
}

// ── Emission ──────────────────────────────────────────────────────────────────

#[test]
fn test_centered_motion_writes_exactly_three_records() {
    // Arrange
    let opener = RecordingOpener::new();
    let journal = opener.journal();
    let mut pointer = manager(opener).create_pointer(1920, 1080).expect("pointer");
    journal.clear();

    // Act
    emitter().motion(&mut pointer, 960, 540);

    // Assert
    assert_eq!(
        journal.events(),
        vec![
            PrimitiveEvent::absolute(ABS_X, 960),
            PrimitiveEvent::absolute(ABS_Y, 540),
            PrimitiveEvent::sync(),
        ]
    );
}

#[test]
fn test_key_q_press_and_release() {
    let opener = RecordingOpener::new();
    let journal = opener.journal();
    let mut keyboard = manager(opener).create_keyboard().expect("keyboard");
    let mut emitter = emitter();

    emitter.key(&mut keyboard, u16::from(b'q'), KeyState::Pressed);
    emitter.key(&mut keyboard, u16::from(b'q'), KeyState::Released);

    assert_eq!(
        journal.events(),
        vec![
            PrimitiveEvent::key(evdev::KEY_Q, KeyState::Pressed),
            PrimitiveEvent::sync(),
            PrimitiveEvent::key(evdev::KEY_Q, KeyState::Released),
            PrimitiveEvent::sync(),
        ]
    );
    assert_eq!(emitter.stats().events_written, 4);
}

#[test]
fn test_named_key_and_modifier_translate() {
    let opener = RecordingOpener::new();
    let journal = opener.journal();
    let mut keyboard = manager(opener).create_keyboard().expect("keyboard");
    let mut emitter = emitter();

    emitter.key(&mut keyboard, key_id::SHIFT_L, KeyState::Pressed);
    emitter.key(&mut keyboard, key_id::RETURN, KeyState::Pressed);

    let keys: Vec<u16> = journal
        .events()
        .iter()
        .filter(|e| !e.is_sync())
        .map(|e| e.code)
        .collect();
    assert_eq!(keys, vec![evdev::KEY_LEFTSHIFT, evdev::KEY_ENTER]);
}

#[test]
fn test_relative_motion_zero_then_x_only() {
    let opener = RecordingOpener::new();
    let journal = opener.journal();
    let mut pointer = manager(opener).create_pointer(1920, 1080).expect("pointer");
    let mut emitter = emitter();

    emitter.relative_motion(&mut pointer, 0, 0);
    assert!(journal.events().is_empty());

    emitter.relative_motion(&mut pointer, 5, 0);
    assert_eq!(
        journal.events(),
        vec![PrimitiveEvent::relative(REL_X, 5), PrimitiveEvent::sync()]
    );
}

#[test]
fn test_wheel_reduces_deltas_to_single_notches() {
    let opener = RecordingOpener::new();
    let journal = opener.journal();
    let mut pointer = manager(opener).create_pointer(1920, 1080).expect("pointer");

    emitter().wheel(&mut pointer, 3, -7);

    assert_eq!(
        journal.events(),
        vec![
            PrimitiveEvent::relative(REL_HWHEEL, 1),
            PrimitiveEvent::sync(),
            PrimitiveEvent::relative(REL_WHEEL, -1),
            PrimitiveEvent::sync(),
        ]
    );
}

#[test]
fn test_unmapped_key_writes_nothing_and_is_counted_once() {
    let opener = RecordingOpener::new();
    let journal = opener.journal();
    let mut keyboard = manager(opener).create_keyboard().expect("keyboard");
    let mut emitter = emitter();

    emitter.key(&mut keyboard, key_id::F13, KeyState::Pressed);

    assert!(journal.events().is_empty());
    assert_eq!(emitter.stats().translation_misses, 1);
}

#[test]
fn test_write_failures_do_not_disable_device() {
    // Arrange: the node accepts one record, then refuses every later one.
    let opener = RecordingOpener::failing_at(FailPoint::EventWrites(1));
    let journal = opener.journal();
    let mut pointer = manager(opener).create_pointer(1920, 1080).expect("pointer");
    let mut emitter = emitter();

    // Act
    emitter.motion(&mut pointer, 1, 1);
    emitter.motion(&mut pointer, 2, 2);

    // Assert
    assert!(pointer.is_live());
    assert_eq!(journal.events(), vec![PrimitiveEvent::absolute(ABS_X, 1)]);
    let stats = emitter.stats();
    assert_eq!(stats.events_written, 1);
    assert_eq!(stats.write_failures, 5);
}

// ── Action routing ────────────────────────────────────────────────────────────

#[test]
fn test_action_stream_routes_to_both_devices() {
    // Arrange
    let opener = RecordingOpener::new();
    let journal = opener.journal();
    let manager = manager(opener);
    let mut devices = DeviceSet {
        pointer: manager.create_pointer(1920, 1080).expect("pointer"),
        keyboard: manager.create_keyboard().expect("keyboard"),
    };
    journal.clear();
    let actions = [
        InputAction::Motion { x: 100, y: 200 },
        InputAction::Button {
            id: 1,
            state: KeyState::Pressed,
        },
        InputAction::Key {
            key_id: u16::from(b'a'),
            state: KeyState::Pressed,
        },
        InputAction::Sync,
    ];
    let mut emitter = emitter();

    // Act
    for action in &actions {
        emitter.apply(&mut devices, action);
    }

    // Assert
    assert_eq!(
        journal.events(),
        vec![
            PrimitiveEvent::absolute(ABS_X, 100),
            PrimitiveEvent::absolute(ABS_Y, 200),
            PrimitiveEvent::sync(),
            PrimitiveEvent::key(evdev::BTN_LEFT, KeyState::Pressed),
            PrimitiveEvent::sync(),
            PrimitiveEvent::key(evdev::KEY_A, KeyState::Pressed),
            PrimitiveEvent::sync(),
            PrimitiveEvent::sync(),
            PrimitiveEvent::sync(),
        ]
    );
}
