//! Native Linux input codes (`linux/input-event-codes.h`).
//!
//! Only the codes that the translation table, the mouse-button table, and the
//! capability declarations refer to are listed here.  The keyboard device
//! declares the whole `0..256` range, so keys missing from this list are still
//! emittable by number.

use super::NativeCode;

pub const KEY_RESERVED: NativeCode = 0;
pub const KEY_ESC: NativeCode = 1;
pub const KEY_1: NativeCode = 2;
pub const KEY_2: NativeCode = 3;
pub const KEY_3: NativeCode = 4;
pub const KEY_4: NativeCode = 5;
pub const KEY_5: NativeCode = 6;
pub const KEY_6: NativeCode = 7;
pub const KEY_7: NativeCode = 8;
pub const KEY_8: NativeCode = 9;
pub const KEY_9: NativeCode = 10;
pub const KEY_0: NativeCode = 11;
pub const KEY_MINUS: NativeCode = 12;
pub const KEY_EQUAL: NativeCode = 13;
pub const KEY_BACKSPACE: NativeCode = 14;
pub const KEY_TAB: NativeCode = 15;
pub const KEY_Q: NativeCode = 16;
pub const KEY_W: NativeCode = 17;
pub const KEY_E: NativeCode = 18;
pub const KEY_R: NativeCode = 19;
pub const KEY_T: NativeCode = 20;
pub const KEY_Y: NativeCode = 21;
pub const KEY_U: NativeCode = 22;
pub const KEY_I: NativeCode = 23;
pub const KEY_O: NativeCode = 24;
pub const KEY_P: NativeCode = 25;
pub const KEY_ENTER: NativeCode = 28;
pub const KEY_LEFTCTRL: NativeCode = 29;
pub const KEY_A: NativeCode = 30;
pub const KEY_S: NativeCode = 31;
pub const KEY_D: NativeCode = 32;
pub const KEY_F: NativeCode = 33;
pub const KEY_G: NativeCode = 34;
pub const KEY_H: NativeCode = 35;
pub const KEY_J: NativeCode = 36;
pub const KEY_K: NativeCode = 37;
pub const KEY_L: NativeCode = 38;
pub const KEY_LEFTSHIFT: NativeCode = 42;
pub const KEY_Z: NativeCode = 44;
pub const KEY_X: NativeCode = 45;
pub const KEY_C: NativeCode = 46;
pub const KEY_V: NativeCode = 47;
pub const KEY_B: NativeCode = 48;
pub const KEY_N: NativeCode = 49;
pub const KEY_M: NativeCode = 50;
pub const KEY_COMMA: NativeCode = 51;
pub const KEY_DOT: NativeCode = 52;
pub const KEY_SLASH: NativeCode = 53;
pub const KEY_RIGHTSHIFT: NativeCode = 54;
pub const KEY_LEFTALT: NativeCode = 56;
pub const KEY_SPACE: NativeCode = 57;
pub const KEY_F1: NativeCode = 59;
pub const KEY_F10: NativeCode = 68;
pub const KEY_F11: NativeCode = 87;
pub const KEY_F12: NativeCode = 88;
pub const KEY_RIGHTCTRL: NativeCode = 97;
pub const KEY_RIGHTALT: NativeCode = 100;
pub const KEY_HOME: NativeCode = 102;
pub const KEY_UP: NativeCode = 103;
pub const KEY_PAGEUP: NativeCode = 104;
pub const KEY_LEFT: NativeCode = 105;
pub const KEY_RIGHT: NativeCode = 106;
pub const KEY_END: NativeCode = 107;
pub const KEY_DOWN: NativeCode = 108;
pub const KEY_PAGEDOWN: NativeCode = 109;
pub const KEY_INSERT: NativeCode = 110;
pub const KEY_DELETE: NativeCode = 111;
pub const KEY_LEFTMETA: NativeCode = 125;
pub const KEY_RIGHTMETA: NativeCode = 126;

/// Number of standard key codes the virtual keyboard declares (`KEY_RESERVED..256`).
pub const KEYBOARD_KEY_COUNT: NativeCode = 256;

// Mouse buttons (BTN_MOUSE block).
pub const BTN_LEFT: NativeCode = 0x110;
pub const BTN_RIGHT: NativeCode = 0x111;
pub const BTN_MIDDLE: NativeCode = 0x112;
pub const BTN_SIDE: NativeCode = 0x113;
pub const BTN_EXTRA: NativeCode = 0x114;
