//! Per-handle read operations and the method-style [`Window`] view.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{
    AncestorFlag, Dimensions, InsertAfter, Monitor, Platform, Result, SwpFlags, WinCtl,
    WindowHandle, WindowState,
};

/// Metadata captured for a window at one point in time.
///
/// Snapshots are never updated in place; re-query to observe live state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSnapshot {
    pub handle: WindowHandle,
    pub title: String,
    pub class_name: String,
    pub pid: u32,
    pub parent: WindowHandle,
    pub visible: bool,
    pub dimensions: Dimensions,
}

impl<P: Platform> WinCtl<P> {
    /// Returns the window title.
    pub fn get_title(&self, handle: WindowHandle) -> Result<String> {
        self.ensure_exists(handle)?;
        self.native(handle, "GetWindowText", self.platform.window_text(handle))
    }

    /// Returns the window class name.
    pub fn get_class_name(&self, handle: WindowHandle) -> Result<String> {
        self.ensure_exists(handle)?;
        self.native(handle, "GetClassName", self.platform.class_name(handle))
    }

    /// Returns the id of the owning process.
    pub fn get_pid(&self, handle: WindowHandle) -> Result<u32> {
        self.ensure_exists(handle)?;
        self.native(
            handle,
            "GetWindowThreadProcessId",
            self.platform.process_id(handle),
        )
    }

    /// Returns the parent handle, `NULL` for a top-level window.
    pub fn get_parent(&self, handle: WindowHandle) -> Result<WindowHandle> {
        self.ensure_exists(handle)?;
        self.native(handle, "GetParent", self.platform.parent(handle))
    }

    /// Returns the window rectangle in screen coordinates.
    pub fn dimensions(&self, handle: WindowHandle) -> Result<Dimensions> {
        self.ensure_exists(handle)?;
        self.native(handle, "GetWindowRect", self.platform.window_rect(handle))
    }

    /// The OS visibility flag. A minimized window can still be visible;
    /// a dead handle is not.
    pub fn is_visible(&self, handle: WindowHandle) -> bool {
        self.exists(handle) && self.platform.is_visible(handle)
    }

    /// Returns a snapshot of `handle`, from the registry when a live cached
    /// entry exists.
    pub fn snapshot(&self, handle: WindowHandle) -> Result<WindowSnapshot> {
        if let Some(registry) = &self.registry
            && let Some(cached) = registry.get(handle, |h| self.exists(h))
        {
            trace!(event = "core.registry.hit", hwnd = %handle);
            return Ok(cached);
        }

        let snapshot = self.capture(handle)?;
        if let Some(registry) = &self.registry {
            registry.insert(snapshot.clone());
        }
        Ok(snapshot)
    }

    /// Reads a fresh snapshot from the backend, bypassing the registry.
    pub fn capture(&self, handle: WindowHandle) -> Result<WindowSnapshot> {
        Ok(WindowSnapshot {
            handle,
            title: self.get_title(handle)?,
            class_name: self.get_class_name(handle)?,
            pid: self.get_pid(handle)?,
            parent: self.get_parent(handle)?,
            visible: self.is_visible(handle),
            dimensions: self.dimensions(handle)?,
        })
    }
}

/// A window handle bound to the layer that resolves it.
///
/// Every method forwards to the matching [`WinCtl`] operation, so the same
/// liveness and error rules apply.
#[derive(Debug)]
pub struct Window<'a, P> {
    ctl: &'a WinCtl<P>,
    hwnd: WindowHandle,
}

impl<P> Clone for Window<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for Window<'_, P> {}

impl<'a, P: Platform> Window<'a, P> {
    pub(crate) fn new(ctl: &'a WinCtl<P>, hwnd: WindowHandle) -> Self {
        Self { ctl, hwnd }
    }

    /// Returns the raw window handle.
    pub fn hwnd(&self) -> WindowHandle {
        self.hwnd
    }

    pub fn exists(&self) -> bool {
        self.ctl.exists(self.hwnd)
    }

    pub fn is_visible(&self) -> bool {
        self.ctl.is_visible(self.hwnd)
    }

    pub fn title(&self) -> Result<String> {
        self.ctl.get_title(self.hwnd)
    }

    pub fn class_name(&self) -> Result<String> {
        self.ctl.get_class_name(self.hwnd)
    }

    pub fn pid(&self) -> Result<u32> {
        self.ctl.get_pid(self.hwnd)
    }

    pub fn parent(&self) -> Result<WindowHandle> {
        self.ctl.get_parent(self.hwnd)
    }

    pub fn ancestor(&self, flag: AncestorFlag) -> Result<WindowHandle> {
        self.ctl.get_ancestor(self.hwnd, flag)
    }

    pub fn monitor(&self) -> Result<Monitor> {
        self.ctl.get_monitor(self.hwnd)
    }

    pub fn dimensions(&self) -> Result<Dimensions> {
        self.ctl.dimensions(self.hwnd)
    }

    pub fn snapshot(&self) -> Result<WindowSnapshot> {
        self.ctl.snapshot(self.hwnd)
    }

    pub fn move_to(&self, x: i32, y: i32, width: i32, height: i32) -> Result<()> {
        self.ctl.move_window(self.hwnd, x, y, width, height)
    }

    pub fn move_relative(&self, dx: i32, dy: i32, dw: i32, dh: i32) -> Result<()> {
        self.ctl.move_relative(self.hwnd, dx, dy, dw, dh)
    }

    pub fn show(&self, state: WindowState) -> Result<()> {
        self.ctl.show_window(self.hwnd, state)
    }

    pub fn set_foreground(&self) -> Result<()> {
        self.ctl.set_foreground_window(self.hwnd)
    }

    pub fn set_pos(
        &self,
        insert_after: InsertAfter,
        x: i32,
        y: i32,
        cx: i32,
        cy: i32,
        flags: SwpFlags,
    ) -> Result<()> {
        self.ctl
            .set_window_pos(self.hwnd, insert_after, x, y, cx, cy, flags)
    }
}
