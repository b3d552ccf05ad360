//! Text-mode cell encoding.
//!
//! A cell is 16 bits: the low byte is the glyph, the high byte is the
//! attribute, whose low nibble is the foreground color and high nibble the
//! background color. `ScreenChar` is laid out so that an array of them is
//! byte-for-byte the VGA text buffer.

/// Glyph written into cleared cells.
pub const BLANK: u8 = b' ';

/// Standard 16-color VGA palette for text mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Color {
    /// Black color.
    Black = 0,
    /// Blue color.
    Blue = 1,
    /// Green color.
    Green = 2,
    /// Cyan color.
    Cyan = 3,
    /// Red color.
    Red = 4,
    /// Magenta color.
    Magenta = 5,
    /// Brown color.
    Brown = 6,
    /// Light gray color.
    LightGray = 7,
    /// Dark gray color.
    DarkGray = 8,
    /// Light blue color.
    LightBlue = 9,
    /// Light green color.
    LightGreen = 10,
    /// Light cyan color.
    LightCyan = 11,
    /// Light red color.
    LightRed = 12,
    /// Pink color.
    Pink = 13,
    /// Yellow color.
    Yellow = 14,
    /// White color.
    White = 15,
}

impl Color {
    /// Decodes the low four bits of `nibble` into a palette entry.
    pub const fn from_nibble(nibble: u8) -> Color {
        match nibble & 0x0F {
            0 => Color::Black,
            1 => Color::Blue,
            2 => Color::Green,
            3 => Color::Cyan,
            4 => Color::Red,
            5 => Color::Magenta,
            6 => Color::Brown,
            7 => Color::LightGray,
            8 => Color::DarkGray,
            9 => Color::LightBlue,
            10 => Color::LightGreen,
            11 => Color::LightCyan,
            12 => Color::LightRed,
            13 => Color::Pink,
            14 => Color::Yellow,
            _ => Color::White,
        }
    }
}

/// Packed foreground/background attribute byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct ColorCode(u8);

impl ColorCode {
    /// Creates a new color code from foreground and background colors.
    pub const fn new(foreground: Color, background: Color) -> ColorCode {
        ColorCode((background as u8) << 4 | (foreground as u8))
    }

    /// Wraps an already packed attribute byte.
    pub const fn from_byte(byte: u8) -> ColorCode {
        ColorCode(byte)
    }

    /// The packed attribute byte.
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// Foreground color (low nibble).
    pub const fn foreground(self) -> Color {
        Color::from_nibble(self.0)
    }

    /// Background color (high nibble).
    pub const fn background(self) -> Color {
        Color::from_nibble(self.0 >> 4)
    }
}

impl Default for ColorCode {
    fn default() -> Self {
        ColorCode::new(Color::White, Color::Black)
    }
}

/// A single character cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct ScreenChar {
    /// Glyph byte.
    pub ascii_character: u8,
    /// Attribute byte.
    pub color_code: ColorCode,
}

impl ScreenChar {
    /// Creates a cell from a glyph and attribute.
    pub const fn new(ascii_character: u8, color_code: ColorCode) -> Self {
        ScreenChar {
            ascii_character,
            color_code,
        }
    }

    /// A blank cell at the given attribute.
    pub const fn blank(color_code: ColorCode) -> Self {
        ScreenChar::new(BLANK, color_code)
    }

    /// Encodes the cell as the 16-bit value the display hardware reads.
    pub const fn to_u16(self) -> u16 {
        (self.color_code.0 as u16) << 8 | self.ascii_character as u16
    }

    /// Decodes a 16-bit hardware cell.
    pub const fn from_u16(raw: u16) -> Self {
        ScreenChar {
            ascii_character: (raw & 0xFF) as u8,
            color_code: ColorCode((raw >> 8) as u8),
        }
    }
}
