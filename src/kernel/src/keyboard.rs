//! Scancode set 1 decoder.
//!
//! [`Decoder`] turns raw make/break codes into ASCII bytes while tracking
//! the shift keys. [`Keyboard`] pairs it with a [`ScancodeSource`] and blocks
//! until a code produces a character.

use lumen_common::Modifiers;
use lumen_hal::ScancodeSource;

/// Left shift pressed.
pub const LEFT_SHIFT_MAKE: u8 = 0x2A;
/// Right shift pressed.
pub const RIGHT_SHIFT_MAKE: u8 = 0x36;
/// Left shift released.
pub const LEFT_SHIFT_BREAK: u8 = 0xAA;
/// Right shift released.
pub const RIGHT_SHIFT_BREAK: u8 = 0xB6;
/// Prefix announcing an extended key.
pub const EXTENDED_PREFIX: u8 = 0xE0;

/// Set on every break (release) code.
const RELEASE_BIT: u8 = 0x80;

/// Numeric keypad block, `7` through `.`.
const KEYPAD_FIRST: u8 = 0x47;
const KEYPAD_LAST: u8 = 0x53;

/// Top-row keys `1` through `=`.
pub(crate) const TOP_ROW_FIRST: u8 = 0x02;
const TOP_ROW_LAST: u8 = 0x0D;

/// Extended make codes that still produce text.
const EXTENDED_KEYPAD_ENTER: u8 = 0x1C;
const EXTENDED_KEYPAD_SLASH: u8 = 0x35;

/// Keypad characters by position: `7 8 9 -`, `4 5 6 +`, `1 2 3 0`, `. * / enter`.
static KEYPAD: [u8; 16] = *b"789-456+1230.*/\n";

/// Shifted top row, aligned with `1 2 3 4 5 6 7 8 9 0 - =`.
pub(crate) static SHIFTED_TOP_ROW: [u8; 12] = *b"!@#$%^&*()_+";

/// US layout, unshifted. Zero means "no character".
pub(crate) static PRIMARY: [u8; 128] = primary_layout();

const fn primary_layout() -> [u8; 128] {
    const MAPPED: &[u8] =
        b"\0\x001234567890-=\x08\tqwertyuiop[]\n\0asdfghjkl;'`\0\\zxcvbnm,./\0*\0 ";
    let mut map = [0u8; 128];
    let mut i = 0;
    while i < MAPPED.len() {
        map[i] = MAPPED[i];
        i += 1;
    }
    map
}

/// Scancode decoder state.
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    modifiers: Modifiers,
    /// The previous code was `0xE0`.
    extended: bool,
}

impl Decoder {
    /// A decoder with no keys held.
    pub const fn new() -> Self {
        Decoder {
            modifiers: Modifiers::empty(),
            extended: false,
        }
    }

    /// Modifier keys currently held.
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Processes one raw code, returning the character it produces, if any.
    pub fn feed(&mut self, code: u8) -> Option<u8> {
        if self.extended {
            self.extended = false;
            return match code {
                EXTENDED_KEYPAD_ENTER => Some(b'\n'),
                EXTENDED_KEYPAD_SLASH => Some(b'/'),
                _ => None,
            };
        }

        match code {
            EXTENDED_PREFIX => {
                self.extended = true;
                None
            }
            LEFT_SHIFT_MAKE => {
                self.modifiers.insert(Modifiers::LEFT_SHIFT);
                None
            }
            RIGHT_SHIFT_MAKE => {
                self.modifiers.insert(Modifiers::RIGHT_SHIFT);
                None
            }
            LEFT_SHIFT_BREAK => {
                self.modifiers.remove(Modifiers::LEFT_SHIFT);
                None
            }
            RIGHT_SHIFT_BREAK => {
                self.modifiers.remove(Modifiers::RIGHT_SHIFT);
                None
            }
            code if code & RELEASE_BIT != 0 => None,
            KEYPAD_FIRST..=KEYPAD_LAST => mapped(KEYPAD[usize::from(code - KEYPAD_FIRST)]),
            TOP_ROW_FIRST..=TOP_ROW_LAST if self.modifiers.shift() => {
                Some(SHIFTED_TOP_ROW[usize::from(code - TOP_ROW_FIRST)])
            }
            code => {
                let byte = mapped(PRIMARY[usize::from(code)]);
                if byte.is_none() {
                    log::trace!("unmapped scancode {:#04x}", code);
                }
                byte
            }
        }
    }
}

fn mapped(byte: u8) -> Option<u8> {
    (byte != 0).then_some(byte)
}

/// Blocking character reader.
pub struct Keyboard<S: ScancodeSource> {
    source: S,
    decoder: Decoder,
}

impl<S: ScancodeSource> Keyboard<S> {
    /// Creates a reader over `source` with no keys held.
    pub fn new(source: S) -> Self {
        Keyboard {
            source,
            decoder: Decoder::new(),
        }
    }

    /// Waits for the next key that produces a character.
    ///
    /// There is no timeout: this only returns once such a key arrives.
    pub fn next_char(&mut self) -> u8 {
        loop {
            let code = self.source.wait_scancode();
            if let Some(byte) = self.decoder.feed(code) {
                return byte;
            }
        }
    }

    /// Decoder state.
    pub fn decoder(&self) -> &Decoder {
        &self.decoder
    }

    /// The underlying scancode source.
    pub fn source(&self) -> &S {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::ScriptedScancodes;

    const KEY_1: u8 = 0x02;
    const KEY_A: u8 = 0x1E;

    #[test]
    fn test_primary_layout() {
        let mut decoder = Decoder::new();
        assert_eq!(decoder.feed(KEY_1), Some(b'1'));
        assert_eq!(decoder.feed(KEY_A), Some(b'a'));
        assert_eq!(decoder.feed(0x0E), Some(0x08));
        assert_eq!(decoder.feed(0x1C), Some(b'\n'));
        assert_eq!(decoder.feed(0x39), Some(b' '));
        assert_eq!(decoder.feed(0x0F), Some(b'\t'));
    }

    #[test]
    fn test_unmapped_codes_yield_nothing() {
        let mut decoder = Decoder::new();
        assert_eq!(decoder.feed(0x00), None);
        assert_eq!(decoder.feed(0x01), None); // escape
        assert_eq!(decoder.feed(0x3B), None); // F1
        assert_eq!(decoder.feed(0x9E), None); // 'a' released
    }

    #[test]
    fn test_shifted_top_row() {
        let mut decoder = Decoder::new();
        assert_eq!(decoder.feed(LEFT_SHIFT_MAKE), None);
        assert_eq!(decoder.feed(KEY_1), Some(b'!'));
        assert_eq!(decoder.feed(0x0D), Some(b'+'));
        assert_eq!(decoder.feed(0x0B), Some(b')'));
    }

    #[test]
    fn test_shift_break_restores_unshifted() {
        let mut decoder = Decoder::new();
        decoder.feed(LEFT_SHIFT_MAKE);
        decoder.feed(LEFT_SHIFT_BREAK);
        assert!(decoder.modifiers().is_empty());
        assert_eq!(decoder.feed(KEY_1), Some(b'1'));

        decoder.feed(RIGHT_SHIFT_MAKE);
        assert_eq!(decoder.feed(0x03), Some(b'@'));
        decoder.feed(RIGHT_SHIFT_BREAK);
        assert_eq!(decoder.feed(0x03), Some(b'2'));
    }

    #[test]
    fn test_both_shifts_held() {
        let mut decoder = Decoder::new();
        decoder.feed(LEFT_SHIFT_MAKE);
        decoder.feed(RIGHT_SHIFT_MAKE);
        decoder.feed(LEFT_SHIFT_BREAK);
        assert_eq!(decoder.feed(KEY_1), Some(b'!'));
    }

    #[test]
    fn test_keypad_positions() {
        let mut decoder = Decoder::new();
        let decoded: Vec<u8> = (KEYPAD_FIRST..=KEYPAD_LAST)
            .filter_map(|code| decoder.feed(code))
            .collect();
        assert_eq!(decoded, b"789-456+1230.");
    }

    #[test]
    fn test_keypad_ignores_shift() {
        let mut decoder = Decoder::new();
        decoder.feed(LEFT_SHIFT_MAKE);
        assert_eq!(decoder.feed(0x4F), Some(b'1'));
    }

    #[test]
    fn test_extended_keys() {
        let mut decoder = Decoder::new();
        // Arrow up shares its code with keypad 8.
        assert_eq!(decoder.feed(EXTENDED_PREFIX), None);
        assert_eq!(decoder.feed(0x48), None);
        assert_eq!(decoder.feed(0x48), Some(b'8'));

        decoder.feed(EXTENDED_PREFIX);
        assert_eq!(decoder.feed(0x1C), Some(b'\n'));
        decoder.feed(EXTENDED_PREFIX);
        assert_eq!(decoder.feed(0x35), Some(b'/'));
    }

    #[test]
    fn test_next_char_skips_silent_codes() {
        let script = [0x01, LEFT_SHIFT_MAKE, 0x9E, KEY_1, LEFT_SHIFT_BREAK, KEY_A];
        let mut keyboard = Keyboard::new(ScriptedScancodes::new(&script));
        assert_eq!(keyboard.next_char(), b'!');
        assert_eq!(keyboard.next_char(), b'a');
        assert!(keyboard.decoder().modifiers().is_empty());
    }
}
