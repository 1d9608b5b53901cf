//! Window enumeration and lookup.
//!
//! Every query walks the live top-level window list in native z-order.
//! Nothing is cached between calls: the list is produced, consumed, and
//! dropped within one operation.

use std::fmt::Display;
use std::future::Future;
use std::ops::ControlFlow;

use tracing::{debug, info, warn};

use crate::{Error, Platform, Result, WinCtl, WindowHandle, WindowSnapshot};

impl<P: Platform> WinCtl<P> {
    /// Calls `visitor` for every top-level window until it returns `Break`.
    ///
    /// Windows created or destroyed while the traversal runs may or may not
    /// be visited.
    pub fn enumerate_windows<F>(&self, mut visitor: F) -> Result<()>
    where
        F: FnMut(WindowHandle) -> ControlFlow<()>,
    {
        self.platform
            .enum_windows(&mut visitor)
            .map_err(|e| Error::EnumerationFailed {
                message: e.to_string(),
            })
    }

    /// Lazily iterates over the current top-level windows.
    ///
    /// The handle list is taken once, up front; the iterator itself never
    /// touches the OS.
    pub fn iter_windows(&self) -> Result<std::vec::IntoIter<WindowHandle>> {
        Ok(self.candidates()?.into_iter())
    }

    /// Returns every top-level window whose snapshot satisfies `predicate`.
    ///
    /// Candidates are evaluated one at a time in enumeration order. If the
    /// predicate fails, enumeration stops and the error is reported as
    /// [`Error::EnumerationFailed`]. Windows that close before their
    /// snapshot can be taken are skipped.
    ///
    /// Predicates always see live state. Each capture replaces the window's
    /// registry entry.
    pub fn find_windows<F, E>(&self, mut predicate: F) -> Result<Vec<WindowHandle>>
    where
        F: FnMut(&WindowSnapshot) -> std::result::Result<bool, E>,
        E: Display,
    {
        info!(event = "core.window.find_started");

        let mut matched = Vec::new();
        for handle in self.candidates()? {
            let Some(snapshot) = self.candidate_snapshot(handle) else {
                continue;
            };
            if predicate(&snapshot).map_err(predicate_failed)? {
                matched.push(handle);
            }
        }

        info!(event = "core.window.find_completed", count = matched.len());
        Ok(matched)
    }

    /// Like [`find_windows`](Self::find_windows) with an asynchronous
    /// predicate.
    ///
    /// The predicate future for one candidate is awaited to completion
    /// before the next candidate is considered, so evaluation order is
    /// enumeration order.
    pub async fn find_windows_async<F, Fut, E>(&self, mut predicate: F) -> Result<Vec<WindowHandle>>
    where
        F: FnMut(WindowSnapshot) -> Fut,
        Fut: Future<Output = std::result::Result<bool, E>>,
        E: Display,
    {
        info!(event = "core.window.find_async_started");

        let mut matched = Vec::new();
        for handle in self.candidates()? {
            let Some(snapshot) = self.candidate_snapshot(handle) else {
                continue;
            };
            if predicate(snapshot).await.map_err(predicate_failed)? {
                matched.push(handle);
            }
        }

        info!(
            event = "core.window.find_async_completed",
            count = matched.len()
        );
        Ok(matched)
    }

    /// Returns the first window whose title contains `fragment`.
    ///
    /// Matching is case-sensitive.
    pub fn find_by_title(&self, fragment: &str) -> Result<WindowHandle> {
        self.first_matching(
            |h| self.get_title(h).map(|t| t.contains(fragment)),
            || format!("title containing '{fragment}'"),
        )
    }

    /// Returns the first window whose title is exactly `title`.
    pub fn get_window_by_title_exact(&self, title: &str) -> Result<WindowHandle> {
        self.first_matching(
            |h| self.get_title(h).map(|t| t == title),
            || format!("title '{title}'"),
        )
    }

    /// Returns the first window whose class name is exactly `class_name`.
    pub fn get_window_by_class_name(&self, class_name: &str) -> Result<WindowHandle> {
        self.first_matching(
            |h| self.get_class_name(h).map(|c| c == class_name),
            || format!("class '{class_name}'"),
        )
    }

    /// Returns the window with keyboard focus.
    pub fn get_active_window(&self) -> Result<WindowHandle> {
        match self.platform.foreground_window() {
            Some(handle) if self.exists(handle) => Ok(handle),
            _ => Err(Error::NoActiveWindow),
        }
    }

    /// Collects the current top-level handles.
    fn candidates(&self) -> Result<Vec<WindowHandle>> {
        let mut handles = Vec::new();
        self.enumerate_windows(|h| {
            handles.push(h);
            ControlFlow::Continue(())
        })?;
        Ok(handles)
    }

    /// Snapshot for a candidate, or `None` if it closed mid-enumeration or
    /// could not be read.
    fn candidate_snapshot(&self, handle: WindowHandle) -> Option<WindowSnapshot> {
        match self.capture(handle) {
            Ok(snapshot) => {
                if let Some(registry) = &self.registry {
                    registry.insert(snapshot.clone());
                }
                Some(snapshot)
            }
            Err(Error::InvalidHandle { .. }) => {
                debug!(event = "core.window.candidate_vanished", hwnd = %handle);
                None
            }
            Err(e) => {
                warn!(event = "core.window.snapshot_failed", hwnd = %handle, error = %e);
                None
            }
        }
    }

    /// First candidate for which `matches` holds, checked against live
    /// state rather than cached snapshots.
    fn first_matching(
        &self,
        matches: impl Fn(WindowHandle) -> Result<bool>,
        describe: impl FnOnce() -> String,
    ) -> Result<WindowHandle> {
        for handle in self.candidates()? {
            match matches(handle) {
                Ok(true) => return Ok(handle),
                Ok(false) => {}
                // One unreadable window does not fail the whole search.
                Err(e) => {
                    debug!(event = "core.window.candidate_skipped", hwnd = %handle, error = %e);
                }
            }
        }

        Err(Error::NotFound { query: describe() })
    }
}

fn predicate_failed(e: impl Display) -> Error {
    Error::EnumerationFailed {
        message: format!("predicate failed: {e}"),
    }
}
