use std::ops::ControlFlow;

use tracing::trace;
use windows::Win32::Foundation::{HWND, LPARAM, RECT};
use windows::Win32::UI::WindowsAndMessaging::{
    EnumWindows, GA_PARENT, GW_OWNER, GetAncestor, GetDesktopWindow, GetForegroundWindow,
    GetWindow, GetWindowRect, GetWindowTextLengthW, GetWindowTextW, GetWindowThreadProcessId,
    IsWindow, IsWindowVisible, RealGetWindowClassW, SetForegroundWindow, SetWindowPos, ShowWindow,
};
use windows::core::BOOL;
use winctl_core::platform::PlatformResult;
use winctl_core::{
    Dimensions, InsertAfter, Monitor, Platform, SwpFlags, WindowHandle, WindowState,
};

use crate::convert;

/// The live Windows desktop.
///
/// Stateless: every method is a direct `user32` call on the caller's thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct Win32Platform;

/// Carries the visitor through `EnumWindows`' `LPARAM`.
struct EnumState<'a> {
    visitor: &'a mut dyn FnMut(WindowHandle) -> ControlFlow<()>,
    stopped: bool,
}

impl Platform for Win32Platform {
    fn enum_windows(
        &self,
        visitor: &mut dyn FnMut(WindowHandle) -> ControlFlow<()>,
    ) -> PlatformResult<()> {
        let mut state = EnumState {
            visitor,
            stopped: false,
        };

        // SAFETY: EnumWindows runs synchronously and calls our callback for
        // each top-level window. `state` outlives the call, and the callback
        // is the only code that dereferences the pointer.
        let result = unsafe {
            EnumWindows(
                Some(enum_window_callback),
                LPARAM(&mut state as *mut EnumState as isize),
            )
        };

        match result {
            Ok(()) => Ok(()),
            // Returning FALSE from the callback makes EnumWindows "fail".
            Err(_) if state.stopped => Ok(()),
            Err(e) => Err(convert::from_windows(e)),
        }
    }

    fn is_window(&self, handle: WindowHandle) -> bool {
        // SAFETY: IsWindow accepts any value and only reports whether it
        // names an existing window.
        unsafe { IsWindow(Some(convert::hwnd(handle))).as_bool() }
    }

    fn is_visible(&self, handle: WindowHandle) -> bool {
        // SAFETY: IsWindowVisible is a simple query that returns a BOOL.
        unsafe { IsWindowVisible(convert::hwnd(handle)).as_bool() }
    }

    fn window_text(&self, handle: WindowHandle) -> PlatformResult<String> {
        let hwnd = convert::hwnd(handle);

        // SAFETY: GetWindowTextLengthW and GetWindowTextW read window text
        // without modifying state. The buffer is sized from the reported
        // length plus the terminator.
        unsafe {
            let length = GetWindowTextLengthW(hwnd);
            if length == 0 {
                return Ok(String::new());
            }

            let mut buffer = vec![0u16; (length + 1) as usize];
            let copied = GetWindowTextW(hwnd, &mut buffer);
            Ok(String::from_utf16_lossy(&buffer[..copied as usize]))
        }
    }

    fn class_name(&self, handle: WindowHandle) -> PlatformResult<String> {
        // SAFETY: RealGetWindowClassW reads the window class name.
        // 256 is the maximum class name length in Win32.
        unsafe {
            let mut buffer = [0u16; 256];
            let length = RealGetWindowClassW(convert::hwnd(handle), &mut buffer);
            if length == 0 {
                return Err(convert::last_error());
            }
            Ok(String::from_utf16_lossy(&buffer[..length as usize]))
        }
    }

    fn process_id(&self, handle: WindowHandle) -> PlatformResult<u32> {
        let mut pid = 0u32;

        // SAFETY: GetWindowThreadProcessId writes the pid into our local.
        let thread = unsafe { GetWindowThreadProcessId(convert::hwnd(handle), Some(&mut pid as *mut u32)) };
        if thread == 0 {
            return Err(convert::last_error());
        }
        Ok(pid)
    }

    fn parent(&self, handle: WindowHandle) -> PlatformResult<WindowHandle> {
        // GetParent would return the owner for popups; GA_PARENT does not.
        // For a top-level window GA_PARENT yields the desktop window, which
        // is reported as "no parent".
        //
        // SAFETY: GetAncestor and GetDesktopWindow are read-only queries.
        let (parent, desktop) = unsafe {
            (
                GetAncestor(convert::hwnd(handle), GA_PARENT),
                GetDesktopWindow(),
            )
        };

        if parent.is_invalid() || parent == desktop {
            Ok(WindowHandle::NULL)
        } else {
            Ok(convert::handle(parent))
        }
    }

    fn owner(&self, handle: WindowHandle) -> PlatformResult<WindowHandle> {
        // SAFETY: GetWindow with GW_OWNER is a read-only query. It reports an
        // unowned window as an error carrying no real error code.
        match unsafe { GetWindow(convert::hwnd(handle), GW_OWNER) } {
            Ok(owner) => Ok(convert::handle(owner)),
            Err(_) if self.is_window(handle) => Ok(WindowHandle::NULL),
            Err(e) => Err(convert::from_windows(e)),
        }
    }

    fn window_rect(&self, handle: WindowHandle) -> PlatformResult<Dimensions> {
        let mut rect = RECT::default();

        // SAFETY: GetWindowRect fills our local RECT.
        unsafe { GetWindowRect(convert::hwnd(handle), &mut rect) }
            .map_err(convert::from_windows)?;
        Ok(convert::dimensions(&rect))
    }

    fn foreground_window(&self) -> Option<WindowHandle> {
        // SAFETY: GetForegroundWindow takes no arguments and returns a
        // possibly-null HWND.
        let hwnd = unsafe { GetForegroundWindow() };
        (!hwnd.is_invalid()).then(|| convert::handle(hwnd))
    }

    fn show_window(&self, handle: WindowHandle, state: WindowState) -> PlatformResult<()> {
        // SAFETY: ShowWindow with a valid HWND is safe. Its return value is
        // the previous visibility, not a success flag.
        unsafe {
            let _ = ShowWindow(convert::hwnd(handle), convert::show_cmd(state));
        }
        Ok(())
    }

    fn set_foreground_window(&self, handle: WindowHandle) -> PlatformResult<bool> {
        // SAFETY: SetForegroundWindow is safe to call with a valid HWND.
        // FALSE means the foreground-lock rules declined the request.
        let accepted = unsafe { SetForegroundWindow(convert::hwnd(handle)) }.as_bool();
        Ok(accepted)
    }

    fn set_window_pos(
        &self,
        handle: WindowHandle,
        insert_after: InsertAfter,
        x: i32,
        y: i32,
        cx: i32,
        cy: i32,
        flags: SwpFlags,
    ) -> PlatformResult<()> {
        trace!(
            event = "windows.set_window_pos",
            hwnd = %handle,
            insert_after = insert_after.raw(),
            flags = flags.bits()
        );

        // SAFETY: SetWindowPos with a valid HWND is safe. HWND_TOP (0) is
        // passed as a null handle, the other pseudo-handles as-is.
        unsafe {
            SetWindowPos(
                convert::hwnd(handle),
                Some(convert::insert_after(insert_after)),
                x,
                y,
                cx,
                cy,
                convert::swp_flags(flags),
            )
        }
        .map_err(convert::from_windows)
    }

    fn monitors(&self) -> PlatformResult<Vec<Monitor>> {
        crate::monitor::enumerate_monitors()
    }
}

/// Callback invoked by `EnumWindows` for each top-level window.
///
/// Returns `TRUE` to continue enumeration, `FALSE` to stop.
unsafe extern "system" fn enum_window_callback(hwnd: HWND, lparam: LPARAM) -> BOOL {
    // SAFETY: lparam is the pointer to EnumState built in enum_windows().
    let state = unsafe { &mut *(lparam.0 as *mut EnumState) };

    match (state.visitor)(convert::handle(hwnd)) {
        ControlFlow::Continue(()) => BOOL(1),
        ControlFlow::Break(()) => {
            state.stopped = true;
            BOOL(0)
        }
    }
}
