//! Zero-alloc ANSI colour codes for tinting a sparkline.

use std::{error::Error, fmt, str};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorError {
    InvalidHexDigit,
    InvalidHexLength,
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorError::InvalidHexDigit => f.write_str("invalid hex colour digit"),
            ColorError::InvalidHexLength => {
                f.write_str("unknown colour name (hex colours must be exactly 6 digits)")
            }
        }
    }
}
impl Error for ColorError {}

/// Named colours accepted by [`AnsiCode::from_name`], in display order.
pub const NAMED: [(&str, AnsiCode); 9] = [
    ("black", AnsiCode::Static("\x1b[30m")),
    ("red", AnsiCode::Static("\x1b[31m")),
    ("green", AnsiCode::Static("\x1b[32m")),
    ("yellow", AnsiCode::Static("\x1b[33m")),
    ("blue", AnsiCode::Static("\x1b[34m")),
    ("magenta", AnsiCode::Static("\x1b[35m")),
    ("cyan", AnsiCode::Static("\x1b[36m")),
    ("white", AnsiCode::Static("\x1b[37m")),
    ("orange", AnsiCode::Static("\x1b[38;2;210;135;10m")),
];

// --- AnsiCode ---
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnsiCode {
    Static(&'static str),
    /// `ESC[38;2;R;G;Bm` is at most 19 bytes.
    Inline { buf: [u8; 20], len: u8 },
}

impl AnsiCode {
    #[inline]
    #[must_use]
    pub const fn reset() -> Self {
        Self::Static("\x1b[0m")
    }

    /// True-colour escape `ESC[38;2;R;G;Bm`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        let mut buf = [0u8; 20];
        buf[..7].copy_from_slice(b"\x1b[38;2;");
        let mut len = 7;

        for (i, v) in [r, g, b].into_iter().enumerate() {
            len += write_u8(&mut buf[len..], v);
            if i != 2 {
                buf[len] = b';';
                len += 1;
            }
        }
        buf[len] = b'm';
        len += 1;
        Self::Inline {
            buf,
            len: len as u8,
        }
    }

    /// Parse colour names or `#rrggbb`.  Falls back to hex parser on miss.
    ///
    /// # Errors
    /// [`ColorError`] when `s` is neither a known name nor a 6-digit hex code.
    pub fn from_name(s: &str) -> Result<Self, ColorError> {
        let wanted = s.trim().to_ascii_lowercase();
        let wanted = if wanted == "industrial" {
            "orange"
        } else {
            wanted.as_str()
        };
        NAMED
            .iter()
            .find(|(name, _)| *name == wanted)
            .map_or_else(|| Self::from_hex(s.trim()), |(_, code)| Ok(*code))
    }

    /// # Errors
    /// [`ColorError`] on a wrong length or a non-hex digit.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let h = hex.trim_start_matches('#');
        if h.len() != 6 || !h.is_ascii() {
            return Err(ColorError::InvalidHexLength);
        }
        let byte = |s: &str| u8::from_str_radix(s, 16).map_err(|_| ColorError::InvalidHexDigit);
        Ok(Self::rgb(byte(&h[..2])?, byte(&h[2..4])?, byte(&h[4..])?))
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Static(s) => s,
            // only ever filled with ASCII by `rgb`
            Self::Inline { buf, len } => str::from_utf8(&buf[..*len as usize]).unwrap_or_default(),
        }
    }
}

// --- Helpers ---
fn write_u8(dst: &mut [u8], mut n: u8) -> usize {
    let mut tmp = [0u8; 3];
    let mut i = 3;
    loop {
        i -= 1;
        tmp[i] = b'0' + n % 10;
        n /= 10;
        if n == 0 {
            break;
        }
    }
    let len = 3 - i;
    dst[..len].copy_from_slice(&tmp[i..]);
    len
}

impl fmt::Display for AnsiCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wrap `text` in colour + reset sequence.
#[inline]
#[must_use]
pub fn colorize(c: &AnsiCode, text: &str) -> String {
    format!("{c}{text}{}", AnsiCode::reset())
}
