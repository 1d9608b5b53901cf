use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// An opaque identifier for a platform window.
///
/// On Windows this is the numeric value of an `HWND`. The handle is a
/// foreign key into the OS: it stays valid for the window's lifetime and
/// dangles once the window is destroyed. Nothing in this crate owns the
/// window it refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowHandle(usize);

impl WindowHandle {
    /// The null handle, meaning "no window".
    pub const NULL: WindowHandle = WindowHandle(0);

    pub const fn from_raw(raw: usize) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> usize {
        self.0
    }

    pub const fn is_null(self) -> bool {
        self.0 == 0
    }
}

impl From<usize> for WindowHandle {
    fn from(raw: usize) -> Self {
        Self(raw)
    }
}

impl fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:X}", self.0)
    }
}

/// Parses a handle from decimal or `0x`-prefixed hex.
impl FromStr for WindowHandle {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let raw = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            usize::from_str_radix(hex, 16)?
        } else {
            s.parse()?
        };
        Ok(Self(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use simple_test_case::test_case;

    #[test_case("0x1A2B", 0x1A2B; "hex lowercase prefix")]
    #[test_case("0X1a2b", 0x1A2B; "hex uppercase prefix")]
    #[test_case("6699", 6699; "decimal")]
    #[test_case(" 42 ", 42; "surrounding whitespace")]
    #[test]
    fn parses_decimal_and_hex(input: &str, expected: usize) {
        let h: WindowHandle = input.parse().unwrap();

        assert_eq!(h.raw(), expected);
    }

    #[test]
    fn rejects_garbage() {
        assert!("0xZZ".parse::<WindowHandle>().is_err());
        assert!("window".parse::<WindowHandle>().is_err());
    }

    #[test]
    fn null_handle_is_zero() {
        assert!(WindowHandle::NULL.is_null());
        assert!(!WindowHandle::from_raw(1).is_null());
        assert_eq!(WindowHandle::default(), WindowHandle::NULL);
    }
}
