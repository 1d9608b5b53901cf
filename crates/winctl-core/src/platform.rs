use std::ops::ControlFlow;

use crate::{
    Dimensions, InsertAfter, Monitor, PlatformError, SwpFlags, WindowHandle, WindowState,
};

/// Result of a native call.
pub type PlatformResult<T> = Result<T, PlatformError>;

/// The native windowing subsystem.
///
/// Each platform crate (e.g. `winctl-windows`) provides its own
/// implementation; [`MemoryDesktop`](crate::memory::MemoryDesktop) is an
/// in-process one. Methods are thin: no validation, no retries. The layer
/// on top re-checks handle liveness and translates failures.
pub trait Platform {
    /// Calls `visitor` for every top-level window in native z-order.
    ///
    /// Enumeration stops as soon as the visitor returns `Break`.
    fn enum_windows(
        &self,
        visitor: &mut dyn FnMut(WindowHandle) -> ControlFlow<()>,
    ) -> PlatformResult<()>;

    /// Whether the OS still recognises `handle` as a live window.
    fn is_window(&self, handle: WindowHandle) -> bool;

    /// The OS visibility flag (independent of minimization).
    fn is_visible(&self, handle: WindowHandle) -> bool;

    /// Returns the window title.
    fn window_text(&self, handle: WindowHandle) -> PlatformResult<String>;

    /// Returns the window class name.
    fn class_name(&self, handle: WindowHandle) -> PlatformResult<String>;

    /// Returns the id of the process that created the window.
    fn process_id(&self, handle: WindowHandle) -> PlatformResult<u32>;

    /// Returns the parent window, or `NULL` for a top-level window.
    fn parent(&self, handle: WindowHandle) -> PlatformResult<WindowHandle>;

    /// Returns the owner window, or `NULL` if the window is unowned.
    fn owner(&self, handle: WindowHandle) -> PlatformResult<WindowHandle>;

    /// Returns the window bounding rectangle in screen coordinates.
    fn window_rect(&self, handle: WindowHandle) -> PlatformResult<Dimensions>;

    /// Returns the window with keyboard focus, if any.
    fn foreground_window(&self) -> Option<WindowHandle>;

    fn show_window(&self, handle: WindowHandle, state: WindowState) -> PlatformResult<()>;

    /// Requests focus for `handle`.
    ///
    /// Returns `Ok(false)` when the OS declined the request (e.g. because of
    /// foreground-lock rules). That is not an error.
    fn set_foreground_window(&self, handle: WindowHandle) -> PlatformResult<bool>;

    #[allow(clippy::too_many_arguments)]
    fn set_window_pos(
        &self,
        handle: WindowHandle,
        insert_after: InsertAfter,
        x: i32,
        y: i32,
        cx: i32,
        cy: i32,
        flags: SwpFlags,
    ) -> PlatformResult<()>;

    /// Returns every display attached to the system.
    fn monitors(&self) -> PlatformResult<Vec<Monitor>>;
}
