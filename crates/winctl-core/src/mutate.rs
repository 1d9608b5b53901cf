//! Window geometry, show-state and z-order changes.
//!
//! All mutations are requests to the OS: a successful return means the
//! request was issued, not that it has taken effect. Callers re-query to
//! observe the outcome. Nothing here is retried or locked; concurrent
//! writers to the same window get last-write-wins.

use tracing::{debug, info};

use crate::{
    Dimensions, Error, InsertAfter, Platform, Result, SwpFlags, WinCtl, WindowHandle, WindowState,
};

impl<P: Platform> WinCtl<P> {
    /// Moves and resizes `handle` to an absolute rectangle.
    ///
    /// Z-order and activation are left alone.
    pub fn move_window(
        &self,
        handle: WindowHandle,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    ) -> Result<()> {
        self.ensure_exists(handle)?;
        let target = Dimensions::from_origin_size(x, y, width, height)?;
        self.set_window_pos(
            handle,
            InsertAfter::Top,
            target.left,
            target.top,
            target.width(),
            target.height(),
            SwpFlags::NOZORDER | SwpFlags::NOACTIVATE,
        )
    }

    /// Moves and resizes `handle` by deltas applied to its current rectangle.
    ///
    /// The read and the write are separate native calls, so a concurrent
    /// mover can interleave; the last write wins.
    pub fn move_relative(
        &self,
        handle: WindowHandle,
        dx: i32,
        dy: i32,
        dw: i32,
        dh: i32,
    ) -> Result<()> {
        let current = self.dimensions(handle)?;
        debug!(
            event = "core.window.move_relative",
            hwnd = %handle,
            from = %current,
            dx,
            dy,
            dw,
            dh
        );

        self.move_window(
            handle,
            current.left.saturating_add(dx),
            current.top.saturating_add(dy),
            current.width().saturating_add(dw),
            current.height().saturating_add(dh),
        )
    }

    /// Sets the show state of `handle`.
    pub fn show_window(&self, handle: WindowHandle, state: WindowState) -> Result<()> {
        self.ensure_exists(handle)?;
        self.native(
            handle,
            "ShowWindow",
            self.platform.show_window(handle, state),
        )?;
        self.forget(handle);

        info!(event = "core.window.show", hwnd = %handle, state = %state);
        Ok(())
    }

    /// Asks the OS to give `handle` keyboard focus.
    ///
    /// The OS may decline (foreground-lock rules); that still returns `Ok`.
    pub fn set_foreground_window(&self, handle: WindowHandle) -> Result<()> {
        self.ensure_exists(handle)?;
        let accepted = self.native(
            handle,
            "SetForegroundWindow",
            self.platform.set_foreground_window(handle),
        )?;

        if !accepted {
            debug!(event = "core.window.foreground_refused", hwnd = %handle);
        }
        Ok(())
    }

    /// Changes position, size and z-order of `handle` in one call.
    ///
    /// `NOMOVE` ignores `x`/`y`, `NOSIZE` ignores `cx`/`cy`, and `NOZORDER`
    /// ignores `insert_after`. A concrete `insert_after` window must be live.
    #[allow(clippy::too_many_arguments)]
    pub fn set_window_pos(
        &self,
        handle: WindowHandle,
        insert_after: InsertAfter,
        x: i32,
        y: i32,
        cx: i32,
        cy: i32,
        flags: SwpFlags,
    ) -> Result<()> {
        self.ensure_exists(handle)?;

        if !flags.contains(SwpFlags::NOZORDER)
            && let InsertAfter::Window(other) = insert_after
        {
            self.ensure_exists(other)?;
        }

        if !flags.contains(SwpFlags::NOSIZE) && (cx < 0 || cy < 0) {
            return Err(Error::InvalidDimensions {
                left: x,
                top: y,
                right: x.saturating_add(cx),
                bottom: y.saturating_add(cy),
            });
        }

        debug!(
            event = "core.window.set_pos",
            hwnd = %handle,
            insert_after = insert_after.raw(),
            x,
            y,
            cx,
            cy,
            flags = flags.bits()
        );

        self.native(
            handle,
            "SetWindowPos",
            self.platform
                .set_window_pos(handle, insert_after, x, y, cx, cy, flags),
        )?;
        self.forget(handle);
        Ok(())
    }
}
