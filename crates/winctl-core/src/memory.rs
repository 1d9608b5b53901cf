//! An in-process desktop implementing [`Platform`].
//!
//! `MemoryDesktop` keeps windows, z-order, focus and monitors in memory and
//! follows Win32 semantics for show states, `SetWindowPos` flags and
//! z-order placement. It backs the test suite and can back downstream
//! tests that need a deterministic windowing system.

use std::cell::RefCell;
use std::collections::HashMap;
use std::ops::ControlFlow;

use crate::platform::PlatformResult;
use crate::{
    Dimensions, InsertAfter, Monitor, Platform, PlatformError, SwpFlags, WindowHandle,
    WindowState,
};

/// Win32 `ERROR_INVALID_WINDOW_HANDLE`.
const ERROR_INVALID_WINDOW_HANDLE: i64 = 1400;

const FIRST_HANDLE: usize = 0x1_0000;
const HANDLE_STEP: usize = 0x10;

/// Describes a window to create with [`MemoryDesktop::add_window`].
#[derive(Debug, Clone)]
pub struct WindowSpec {
    pub title: String,
    pub class_name: String,
    pub pid: u32,
    pub parent: WindowHandle,
    pub owner: WindowHandle,
    pub visible: bool,
    pub dimensions: Dimensions,
}

impl WindowSpec {
    /// A visible, unowned, top-level 800x600 window at the origin.
    pub fn new(title: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            class_name: class_name.into(),
            pid: 1000,
            parent: WindowHandle::NULL,
            owner: WindowHandle::NULL,
            visible: true,
            dimensions: Dimensions {
                left: 0,
                top: 0,
                right: 800,
                bottom: 600,
            },
        }
    }

    pub fn pid(mut self, pid: u32) -> Self {
        self.pid = pid;
        self
    }

    /// Makes this a child window of `parent`.
    pub fn child_of(mut self, parent: WindowHandle) -> Self {
        self.parent = parent;
        self
    }

    pub fn owned_by(mut self, owner: WindowHandle) -> Self {
        self.owner = owner;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn at(mut self, dimensions: Dimensions) -> Self {
        self.dimensions = dimensions;
        self
    }
}

#[derive(Debug, Clone)]
struct MemoryWindow {
    spec: WindowSpec,
    minimized: bool,
    maximized: bool,
    topmost: bool,
}

#[derive(Debug, Default)]
struct State {
    windows: HashMap<WindowHandle, MemoryWindow>,
    /// Top-level windows, front first. Topmost windows precede the rest.
    z_order: Vec<WindowHandle>,
    monitors: Vec<Monitor>,
    foreground: Option<WindowHandle>,
    foreground_locked: bool,
    enumeration_error: Option<PlatformError>,
    next_handle: usize,
}

impl State {
    fn window(&self, handle: WindowHandle) -> PlatformResult<&MemoryWindow> {
        self.windows.get(&handle).ok_or_else(invalid_handle)
    }

    fn window_mut(&mut self, handle: WindowHandle) -> PlatformResult<&mut MemoryWindow> {
        self.windows.get_mut(&handle).ok_or_else(invalid_handle)
    }

    fn is_topmost(&self, handle: WindowHandle) -> bool {
        self.windows.get(&handle).is_some_and(|w| w.topmost)
    }

    /// Index of the first slot in the requested band, ignoring `handle`.
    fn band_front(&self, topmost: bool) -> usize {
        if topmost {
            0
        } else {
            self.z_order.iter().filter(|h| self.is_topmost(**h)).count()
        }
    }

    /// Re-inserts a top-level window at the front of its band.
    fn raise(&mut self, handle: WindowHandle) {
        if !self.z_order.contains(&handle) {
            return;
        }
        self.z_order.retain(|h| *h != handle);
        let index = self.band_front(self.is_topmost(handle));
        self.z_order.insert(index, handle);
    }

    fn place(&mut self, handle: WindowHandle, insert_after: InsertAfter) {
        if !self.z_order.contains(&handle) {
            // Child windows are stacked within their parent; not modelled.
            return;
        }

        match insert_after {
            InsertAfter::Top => self.raise(handle),
            InsertAfter::Topmost => {
                self.set_topmost(handle, true);
                self.raise(handle);
            }
            InsertAfter::NoTopmost => {
                self.set_topmost(handle, false);
                self.raise(handle);
            }
            InsertAfter::Bottom => {
                self.set_topmost(handle, false);
                self.z_order.retain(|h| *h != handle);
                self.z_order.push(handle);
            }
            InsertAfter::Window(other) => {
                if other == handle {
                    return;
                }
                let topmost = self.is_topmost(other);
                self.set_topmost(handle, topmost);
                self.z_order.retain(|h| *h != handle);
                let index = self
                    .z_order
                    .iter()
                    .position(|h| *h == other)
                    .map_or(self.z_order.len(), |i| i + 1);
                self.z_order.insert(index, handle);
            }
        }
    }

    fn set_topmost(&mut self, handle: WindowHandle, topmost: bool) {
        if let Some(w) = self.windows.get_mut(&handle) {
            w.topmost = topmost;
        }
    }

    fn activate(&mut self, handle: WindowHandle) {
        self.foreground = Some(handle);
        self.raise(handle);
    }

    /// Handles that go away with `handle`: its children and owned windows.
    fn dependents(&self, handle: WindowHandle) -> Vec<WindowHandle> {
        let mut out = vec![handle];
        let mut i = 0;
        while i < out.len() {
            let current = out[i];
            for (h, w) in &self.windows {
                if (w.spec.parent == current || w.spec.owner == current) && !out.contains(h) {
                    out.push(*h);
                }
            }
            i += 1;
        }
        out
    }
}

fn invalid_handle() -> PlatformError {
    PlatformError::new(ERROR_INVALID_WINDOW_HANDLE, "Invalid window handle.")
}

/// A simulated desktop.
#[derive(Debug, Default)]
pub struct MemoryDesktop {
    state: RefCell<State>,
}

impl MemoryDesktop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a window and returns its handle.
    ///
    /// Top-level windows open in front of all other non-topmost windows.
    pub fn add_window(&self, spec: WindowSpec) -> WindowHandle {
        let mut state = self.state.borrow_mut();
        let handle = WindowHandle::from_raw(FIRST_HANDLE + state.next_handle * HANDLE_STEP);
        state.next_handle += 1;

        let top_level = spec.parent.is_null();
        state.windows.insert(
            handle,
            MemoryWindow {
                spec,
                minimized: false,
                maximized: false,
                topmost: false,
            },
        );
        if top_level {
            let index = state.band_front(false);
            state.z_order.insert(index, handle);
        }
        handle
    }

    /// Destroys a window along with its children and owned windows.
    ///
    /// Returns `false` if the handle was already dead.
    pub fn destroy(&self, handle: WindowHandle) -> bool {
        let mut state = self.state.borrow_mut();
        if !state.windows.contains_key(&handle) {
            return false;
        }

        for h in state.dependents(handle) {
            state.windows.remove(&h);
            state.z_order.retain(|z| *z != h);
            if state.foreground == Some(h) {
                state.foreground = None;
            }
        }
        true
    }

    pub fn add_monitor(&self, name: impl Into<String>, primary: bool, dimensions: Dimensions) {
        self.state
            .borrow_mut()
            .monitors
            .push(Monitor::new(name, primary, dimensions));
    }

    /// Changes a window title, as the owning application would.
    pub fn set_title(&self, handle: WindowHandle, title: impl Into<String>) {
        if let Some(w) = self.state.borrow_mut().windows.get_mut(&handle) {
            w.spec.title = title.into();
        }
    }

    /// Moves a window without going through `set_window_pos`, as the user
    /// dragging it would.
    pub fn set_dimensions(&self, handle: WindowHandle, dimensions: Dimensions) {
        if let Some(w) = self.state.borrow_mut().windows.get_mut(&handle) {
            w.spec.dimensions = dimensions;
        }
    }

    /// When locked, focus requests are declined like Win32's foreground lock.
    pub fn set_foreground_lock(&self, locked: bool) {
        self.state.borrow_mut().foreground_locked = locked;
    }

    /// Gives `handle` focus directly, bypassing the lock.
    pub fn focus(&self, handle: WindowHandle) {
        let mut state = self.state.borrow_mut();
        if state.windows.contains_key(&handle) {
            state.activate(handle);
        }
    }

    /// Makes the next enumerations fail with `error` until cleared.
    pub fn fail_enumeration(&self, error: Option<PlatformError>) {
        self.state.borrow_mut().enumeration_error = error;
    }

    /// Top-level windows, front first.
    pub fn z_order(&self) -> Vec<WindowHandle> {
        self.state.borrow().z_order.clone()
    }

    pub fn is_minimized(&self, handle: WindowHandle) -> bool {
        self.state
            .borrow()
            .windows
            .get(&handle)
            .is_some_and(|w| w.minimized)
    }

    pub fn is_maximized(&self, handle: WindowHandle) -> bool {
        self.state
            .borrow()
            .windows
            .get(&handle)
            .is_some_and(|w| w.maximized)
    }

    pub fn is_topmost(&self, handle: WindowHandle) -> bool {
        self.state.borrow().is_topmost(handle)
    }
}

impl Platform for MemoryDesktop {
    fn enum_windows(
        &self,
        visitor: &mut dyn FnMut(WindowHandle) -> ControlFlow<()>,
    ) -> PlatformResult<()> {
        // Copy the list so the visitor may call back into the desktop.
        let handles = {
            let state = self.state.borrow();
            if let Some(e) = &state.enumeration_error {
                return Err(e.clone());
            }
            state.z_order.clone()
        };

        for handle in handles {
            if visitor(handle).is_break() {
                break;
            }
        }
        Ok(())
    }

    fn is_window(&self, handle: WindowHandle) -> bool {
        self.state.borrow().windows.contains_key(&handle)
    }

    fn is_visible(&self, handle: WindowHandle) -> bool {
        self.state
            .borrow()
            .windows
            .get(&handle)
            .is_some_and(|w| w.spec.visible)
    }

    fn window_text(&self, handle: WindowHandle) -> PlatformResult<String> {
        Ok(self.state.borrow().window(handle)?.spec.title.clone())
    }

    fn class_name(&self, handle: WindowHandle) -> PlatformResult<String> {
        Ok(self.state.borrow().window(handle)?.spec.class_name.clone())
    }

    fn process_id(&self, handle: WindowHandle) -> PlatformResult<u32> {
        Ok(self.state.borrow().window(handle)?.spec.pid)
    }

    fn parent(&self, handle: WindowHandle) -> PlatformResult<WindowHandle> {
        Ok(self.state.borrow().window(handle)?.spec.parent)
    }

    fn owner(&self, handle: WindowHandle) -> PlatformResult<WindowHandle> {
        Ok(self.state.borrow().window(handle)?.spec.owner)
    }

    fn window_rect(&self, handle: WindowHandle) -> PlatformResult<Dimensions> {
        Ok(self.state.borrow().window(handle)?.spec.dimensions)
    }

    fn foreground_window(&self) -> Option<WindowHandle> {
        self.state.borrow().foreground
    }

    fn show_window(&self, handle: WindowHandle, show: WindowState) -> PlatformResult<()> {
        let mut state = self.state.borrow_mut();
        let w = state.window_mut(handle)?;

        w.spec.visible = show.is_shown();
        match show {
            s if s.is_minimizing() => {
                w.minimized = true;
                w.maximized = false;
            }
            WindowState::Maximize => {
                w.minimized = false;
                w.maximized = true;
            }
            WindowState::ShowNormal
            | WindowState::Restore
            | WindowState::ShowNoActivate
            | WindowState::ShowDefault => {
                w.minimized = false;
                w.maximized = false;
            }
            _ => {}
        }

        if show.is_minimizing() || !show.is_shown() {
            if state.foreground == Some(handle) {
                state.foreground = None;
            }
        } else if show.activates() {
            state.activate(handle);
        }
        Ok(())
    }

    fn set_foreground_window(&self, handle: WindowHandle) -> PlatformResult<bool> {
        let mut state = self.state.borrow_mut();
        state.window(handle)?;
        if state.foreground_locked {
            return Ok(false);
        }
        state.activate(handle);
        Ok(true)
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
        let mut state = self.state.borrow_mut();
        let w = state.window_mut(handle)?;

        let mut d = w.spec.dimensions;
        if !flags.contains(SwpFlags::NOMOVE) {
            d = d.translate(x.saturating_sub(d.left), y.saturating_sub(d.top));
        }
        if !flags.contains(SwpFlags::NOSIZE) {
            d.right = d.left.saturating_add(cx.max(0));
            d.bottom = d.top.saturating_add(cy.max(0));
        }
        w.spec.dimensions = d;

        if flags.contains(SwpFlags::SHOWWINDOW) {
            w.spec.visible = true;
        } else if flags.contains(SwpFlags::HIDEWINDOW) {
            w.spec.visible = false;
        }

        if !flags.contains(SwpFlags::NOZORDER) {
            state.place(handle, insert_after);
        }
        if !flags.contains(SwpFlags::NOACTIVATE) && !state.foreground_locked {
            state.foreground = Some(handle);
        }
        Ok(())
    }

    fn monitors(&self) -> PlatformResult<Vec<Monitor>> {
        Ok(self.state.borrow().monitors.clone())
    }
}
