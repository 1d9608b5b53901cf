use std::ffi::c_void;

use windows::Win32::Foundation::{GetLastError, HWND, RECT};
use windows::Win32::UI::WindowsAndMessaging::{SET_WINDOW_POS_FLAGS, SHOW_WINDOW_CMD};
use windows::core::HRESULT;
use winctl_core::{Dimensions, InsertAfter, PlatformError, SwpFlags, WindowHandle, WindowState};

pub(crate) fn hwnd(handle: WindowHandle) -> HWND {
    HWND(handle.raw() as *mut c_void)
}

pub(crate) fn handle(hwnd: HWND) -> WindowHandle {
    WindowHandle::from_raw(hwnd.0 as usize)
}

/// Pseudo-handles (`HWND_TOP`, `HWND_BOTTOM`, ...) are small integers cast
/// to `HWND`; a concrete window passes its own handle.
pub(crate) fn insert_after(insert_after: InsertAfter) -> HWND {
    HWND(insert_after.raw() as *mut c_void)
}

pub(crate) fn show_cmd(state: WindowState) -> SHOW_WINDOW_CMD {
    SHOW_WINDOW_CMD(state.value())
}

pub(crate) fn swp_flags(flags: SwpFlags) -> SET_WINDOW_POS_FLAGS {
    SET_WINDOW_POS_FLAGS(flags.bits())
}

/// Win32 rectangles are trusted to be well-formed; a degenerate one is
/// collapsed to zero size rather than rejected.
pub(crate) fn dimensions(rect: &RECT) -> Dimensions {
    Dimensions {
        left: rect.left,
        top: rect.top,
        right: rect.right.max(rect.left),
        bottom: rect.bottom.max(rect.top),
    }
}

/// Builds a [`PlatformError`] from the calling thread's last-error value.
pub(crate) fn last_error() -> PlatformError {
    // SAFETY: GetLastError only reads thread-local state.
    let code = unsafe { GetLastError() };
    let message = HRESULT::from_win32(code.0).message();
    PlatformError::new(i64::from(code.0), message)
}

pub(crate) fn from_windows(error: windows::core::Error) -> PlatformError {
    PlatformError::new(i64::from(error.code().0), error.message())
}
