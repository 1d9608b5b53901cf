//! Enumerated constants shared with the native windowing API.
//!
//! The numeric values are the ones Win32 uses (`SW_*`, `GA_*`, `HWND_*`,
//! `SWP_*`) and are part of the public contract: backends pass them
//! straight through.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::WindowHandle;

/// Show state passed to `show_window`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[repr(i32)]
pub enum WindowState {
    Hide = 0,
    ShowNormal = 1,
    ShowMinimized = 2,
    #[strum(to_string = "MAXIMIZE", serialize = "SHOWMAXIMIZED")]
    Maximize = 3,
    ShowNoActivate = 4,
    Show = 5,
    Minimize = 6,
    ShowMinNoActive = 7,
    ShowNa = 8,
    Restore = 9,
    ShowDefault = 10,
    ForceMinimize = 11,
}

impl WindowState {
    /// Same value as [`WindowState::Maximize`].
    pub const SHOW_MAXIMIZED: WindowState = WindowState::Maximize;

    pub const fn value(self) -> i32 {
        self as i32
    }

    /// Whether the state leaves the window shown (in any form).
    pub const fn is_shown(self) -> bool {
        !matches!(self, WindowState::Hide)
    }

    /// Whether the state minimizes the window.
    pub const fn is_minimizing(self) -> bool {
        matches!(
            self,
            WindowState::ShowMinimized
                | WindowState::Minimize
                | WindowState::ShowMinNoActive
                | WindowState::ForceMinimize
        )
    }

    /// Whether the state activates (focuses) the window.
    pub const fn activates(self) -> bool {
        matches!(
            self,
            WindowState::ShowNormal
                | WindowState::ShowMinimized
                | WindowState::Maximize
                | WindowState::Show
                | WindowState::Restore
                | WindowState::ShowDefault
        )
    }
}

impl TryFrom<i32> for WindowState {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        let state = match value {
            0 => Self::Hide,
            1 => Self::ShowNormal,
            2 => Self::ShowMinimized,
            3 => Self::Maximize,
            4 => Self::ShowNoActivate,
            5 => Self::Show,
            6 => Self::Minimize,
            7 => Self::ShowMinNoActive,
            8 => Self::ShowNa,
            9 => Self::Restore,
            10 => Self::ShowDefault,
            11 => Self::ForceMinimize,
            other => return Err(other),
        };
        Ok(state)
    }
}

/// Selects which ancestor `get_ancestor` resolves.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[repr(i32)]
pub enum AncestorFlag {
    /// The parent window (not the owner).
    Parent = 1,
    /// The top-level window reached by walking the parent chain.
    Root = 2,
    /// The root, then the end of its owner chain.
    RootOwner = 3,
}

impl AncestorFlag {
    pub const fn value(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for AncestorFlag {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Parent),
            2 => Ok(Self::Root),
            3 => Ok(Self::RootOwner),
            other => Err(other),
        }
    }
}

/// Z-order placement for `set_window_pos`.
///
/// Either one of the well-known pseudo handles or a concrete window the
/// positioned window should be placed behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InsertAfter {
    NoTopmost,
    Topmost,
    Top,
    Bottom,
    Window(WindowHandle),
}

impl InsertAfter {
    pub const NO_TOPMOST_VALUE: isize = -2;
    pub const TOPMOST_VALUE: isize = -1;
    pub const TOP_VALUE: isize = 0;
    pub const BOTTOM_VALUE: isize = 1;

    /// The integer the native API expects for `hWndInsertAfter`.
    pub fn raw(self) -> isize {
        match self {
            Self::NoTopmost => Self::NO_TOPMOST_VALUE,
            Self::Topmost => Self::TOPMOST_VALUE,
            Self::Top => Self::TOP_VALUE,
            Self::Bottom => Self::BOTTOM_VALUE,
            Self::Window(h) => h.raw() as isize,
        }
    }

    /// Decodes a raw `hWndInsertAfter` value.
    ///
    /// The pseudo-handle values win over real handles, mirroring Win32,
    /// where no window can have a handle of -2, -1, 0 or 1.
    pub fn from_raw(raw: isize) -> Self {
        match raw {
            Self::NO_TOPMOST_VALUE => Self::NoTopmost,
            Self::TOPMOST_VALUE => Self::Topmost,
            Self::TOP_VALUE => Self::Top,
            Self::BOTTOM_VALUE => Self::Bottom,
            other => Self::Window(WindowHandle::from_raw(other as usize)),
        }
    }
}

impl From<WindowHandle> for InsertAfter {
    fn from(handle: WindowHandle) -> Self {
        Self::from_raw(handle.raw() as isize)
    }
}

bitflags! {
    /// Flags for `set_window_pos`. Each bit enables or suppresses one part
    /// of the operation.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct SwpFlags: u32 {
        /// Keep the current size (ignore width/height).
        const NOSIZE         = 0x0001;
        /// Keep the current position (ignore x/y).
        const NOMOVE         = 0x0002;
        /// Keep the current z-order (ignore insert-after).
        const NOZORDER       = 0x0004;
        const NOREDRAW       = 0x0008;
        /// Do not activate the window.
        const NOACTIVATE     = 0x0010;
        const FRAMECHANGED   = 0x0020;
        const DRAWFRAME      = Self::FRAMECHANGED.bits();
        const SHOWWINDOW     = 0x0040;
        const HIDEWINDOW     = 0x0080;
        const NOCOPYBITS     = 0x0100;
        /// Do not change the owner window's z-order.
        const NOOWNERZORDER  = 0x0200;
        const NOREPOSITION   = Self::NOOWNERZORDER.bits();
        const NOSENDCHANGING = 0x0400;
        const DEFERERASE     = 0x2000;
        const ASYNCWINDOWPOS = 0x4000;
    }
}

impl SwpFlags {
    /// Combines a list of flags into one set.
    pub fn from_list(flags: &[SwpFlags]) -> Self {
        flags.iter().fold(Self::empty(), |acc, f| acc | *f)
    }
}
