//! External key identifiers used by the remote input protocol.
//!
//! The space is 16 bits wide.  Printable characters use their Unicode/ASCII
//! value directly (`'a'` = 0x61), so they are not listed here.  Named keys live
//! in the `0xE000..0xF000` block.
//!
//! # Why two ids for Backspace? (for beginners)
//!
//! Senders are not consistent: some send the ASCII control character
//! (8 for Backspace, 13 for carriage return, 27 for Escape) and others send the
//! named key id (`BACK_SPACE` = 0xEF08).  The translation table accepts both.

use super::KeyId;

/// No key.
pub const NONE: KeyId = 0x0000;

// TTY functions
pub const BACK_SPACE: KeyId = 0xEF08;
pub const TAB: KeyId = 0xEF09;
pub const LINEFEED: KeyId = 0xEF0A;
pub const CLEAR: KeyId = 0xEF0B;
pub const RETURN: KeyId = 0xEF0D;
pub const PAUSE: KeyId = 0xEF13;
pub const SCROLL_LOCK: KeyId = 0xEF14;
pub const SYS_REQ: KeyId = 0xEF15;
pub const ESCAPE: KeyId = 0xEF1B;
pub const HENKAN: KeyId = 0xEF23;
pub const KANA: KeyId = 0xEF26;
pub const HIRAGANA_KATAKANA: KeyId = 0xEF27;
pub const ZENKAKU: KeyId = 0xEF2A;
pub const KANZI: KeyId = 0xEF2A;
pub const HANGUL: KeyId = 0xEF31;
pub const HANJA: KeyId = 0xEF34;
pub const DELETE: KeyId = 0xEFFF;

// Cursor control
pub const HOME: KeyId = 0xEF50;
pub const LEFT: KeyId = 0xEF51;
pub const UP: KeyId = 0xEF52;
pub const RIGHT: KeyId = 0xEF53;
pub const DOWN: KeyId = 0xEF54;
pub const PAGE_UP: KeyId = 0xEF55;
pub const PAGE_DOWN: KeyId = 0xEF56;
pub const END: KeyId = 0xEF57;
pub const BEGIN: KeyId = 0xEF58;

// Misc functions
pub const SELECT: KeyId = 0xEF60;
pub const PRINT: KeyId = 0xEF61;
pub const EXECUTE: KeyId = 0xEF62;
pub const INSERT: KeyId = 0xEF63;
pub const UNDO: KeyId = 0xEF65;
pub const REDO: KeyId = 0xEF66;
pub const MENU: KeyId = 0xEF67;
pub const FIND: KeyId = 0xEF68;
pub const CANCEL: KeyId = 0xEF69;
pub const HELP: KeyId = 0xEF6A;
pub const BREAK: KeyId = 0xEF6B;
pub const ALT_GR: KeyId = 0xEF7E;
pub const NUM_LOCK: KeyId = 0xEF7F;

// Keypad
pub const KP_SPACE: KeyId = 0xEF80;
pub const KP_TAB: KeyId = 0xEF89;
pub const KP_ENTER: KeyId = 0xEF8D;
pub const KP_F1: KeyId = 0xEF91;
pub const KP_F2: KeyId = 0xEF92;
pub const KP_F3: KeyId = 0xEF93;
pub const KP_F4: KeyId = 0xEF94;
pub const KP_HOME: KeyId = 0xEF95;
pub const KP_LEFT: KeyId = 0xEF96;
pub const KP_UP: KeyId = 0xEF97;
pub const KP_RIGHT: KeyId = 0xEF98;
pub const KP_DOWN: KeyId = 0xEF99;
pub const KP_PAGE_UP: KeyId = 0xEF9A;
pub const KP_PAGE_DOWN: KeyId = 0xEF9B;
pub const KP_END: KeyId = 0xEF9C;
pub const KP_BEGIN: KeyId = 0xEF9D;
pub const KP_INSERT: KeyId = 0xEF9E;
pub const KP_DELETE: KeyId = 0xEF9F;
pub const KP_EQUAL: KeyId = 0xEFBD;
pub const KP_MULTIPLY: KeyId = 0xEFAA;
pub const KP_ADD: KeyId = 0xEFAB;
pub const KP_SEPARATOR: KeyId = 0xEFAC;
pub const KP_SUBTRACT: KeyId = 0xEFAD;
pub const KP_DECIMAL: KeyId = 0xEFAE;
pub const KP_DIVIDE: KeyId = 0xEFAF;
pub const KP_0: KeyId = 0xEFB0;
pub const KP_1: KeyId = 0xEFB1;
pub const KP_2: KeyId = 0xEFB2;
pub const KP_3: KeyId = 0xEFB3;
pub const KP_4: KeyId = 0xEFB4;
pub const KP_5: KeyId = 0xEFB5;
pub const KP_6: KeyId = 0xEFB6;
pub const KP_7: KeyId = 0xEFB7;
pub const KP_8: KeyId = 0xEFB8;
pub const KP_9: KeyId = 0xEFB9;

// Function keys (F1..F35 are contiguous in this space)
pub const F1: KeyId = 0xEFBE;
pub const F2: KeyId = 0xEFBF;
pub const F3: KeyId = 0xEFC0;
pub const F4: KeyId = 0xEFC1;
pub const F5: KeyId = 0xEFC2;
pub const F6: KeyId = 0xEFC3;
pub const F7: KeyId = 0xEFC4;
pub const F8: KeyId = 0xEFC5;
pub const F9: KeyId = 0xEFC6;
pub const F10: KeyId = 0xEFC7;
pub const F11: KeyId = 0xEFC8;
pub const F12: KeyId = 0xEFC9;
pub const F13: KeyId = 0xEFCA;
pub const F14: KeyId = 0xEFCB;
pub const F15: KeyId = 0xEFCC;
pub const F16: KeyId = 0xEFCD;
pub const F17: KeyId = 0xEFCE;
pub const F18: KeyId = 0xEFCF;
pub const F19: KeyId = 0xEFD0;
pub const F20: KeyId = 0xEFD1;
pub const F21: KeyId = 0xEFD2;
pub const F22: KeyId = 0xEFD3;
pub const F23: KeyId = 0xEFD4;
pub const F24: KeyId = 0xEFD5;
pub const F25: KeyId = 0xEFD6;
pub const F26: KeyId = 0xEFD7;
pub const F27: KeyId = 0xEFD8;
pub const F28: KeyId = 0xEFD9;
pub const F29: KeyId = 0xEFDA;
pub const F30: KeyId = 0xEFDB;
pub const F31: KeyId = 0xEFDC;
pub const F32: KeyId = 0xEFDD;
pub const F33: KeyId = 0xEFDE;
pub const F34: KeyId = 0xEFDF;
pub const F35: KeyId = 0xEFE0;

// Modifiers
pub const SHIFT_L: KeyId = 0xEFE1;
pub const SHIFT_R: KeyId = 0xEFE2;
pub const CONTROL_L: KeyId = 0xEFE3;
pub const CONTROL_R: KeyId = 0xEFE4;
pub const CAPS_LOCK: KeyId = 0xEFE5;
pub const SHIFT_LOCK: KeyId = 0xEFE6;
pub const META_L: KeyId = 0xEFE7;
pub const META_R: KeyId = 0xEFE8;
pub const ALT_L: KeyId = 0xEFE9;
pub const ALT_R: KeyId = 0xEFEA;
pub const SUPER_L: KeyId = 0xEFEB;
pub const SUPER_R: KeyId = 0xEFEC;
pub const HYPER_L: KeyId = 0xEFED;
pub const HYPER_R: KeyId = 0xEFEE;

// Multi-key character composition
pub const COMPOSE: KeyId = 0xEF20;
pub const DEAD_GRAVE: KeyId = 0x0300;
pub const DEAD_ACUTE: KeyId = 0x0301;
pub const DEAD_CIRCUMFLEX: KeyId = 0x0302;
pub const DEAD_TILDE: KeyId = 0x0303;
pub const DEAD_MACRON: KeyId = 0x0304;
pub const DEAD_BREVE: KeyId = 0x0306;
pub const DEAD_ABOVEDOT: KeyId = 0x0307;
pub const DEAD_DIAERESIS: KeyId = 0x0308;
pub const DEAD_ABOVERING: KeyId = 0x030A;
pub const DEAD_DOUBLEACUTE: KeyId = 0x030B;
pub const DEAD_CARON: KeyId = 0x030C;
pub const DEAD_CEDILLA: KeyId = 0x0327;
pub const DEAD_OGONEK: KeyId = 0x0328;

pub const LEFT_TAB: KeyId = 0xEE20;

// Modifier and group updates
pub const SET_MODIFIERS: KeyId = 0xEE06;
pub const CLEAR_MODIFIERS: KeyId = 0xEE07;
pub const NEXT_GROUP: KeyId = 0xEE08;
pub const PREV_GROUP: KeyId = 0xEE0A;

// Extended keys
pub const EJECT: KeyId = 0xE001;
pub const SLEEP: KeyId = 0xE05F;
pub const WWW_BACK: KeyId = 0xE0A6;
pub const WWW_FORWARD: KeyId = 0xE0A7;
pub const WWW_REFRESH: KeyId = 0xE0A8;
pub const WWW_STOP: KeyId = 0xE0A9;
pub const WWW_SEARCH: KeyId = 0xE0AA;
pub const WWW_FAVORITES: KeyId = 0xE0AB;
pub const WWW_HOME: KeyId = 0xE0AC;
pub const AUDIO_MUTE: KeyId = 0xE0AD;
pub const AUDIO_DOWN: KeyId = 0xE0AE;
pub const AUDIO_UP: KeyId = 0xE0AF;
pub const AUDIO_NEXT: KeyId = 0xE0B0;
pub const AUDIO_PREV: KeyId = 0xE0B1;
pub const AUDIO_STOP: KeyId = 0xE0B2;
pub const AUDIO_PLAY: KeyId = 0xE0B3;
pub const APP_MAIL: KeyId = 0xE0B4;
pub const APP_MEDIA: KeyId = 0xE0B5;
pub const APP_USER1: KeyId = 0xE0B6;
pub const APP_USER2: KeyId = 0xE0B7;
pub const BRIGHTNESS_DOWN: KeyId = 0xE0B8;
pub const BRIGHTNESS_UP: KeyId = 0xE0B9;
pub const MISSION_CONTROL: KeyId = 0xE0C0;
pub const LAUNCHPAD: KeyId = 0xE0C1;
