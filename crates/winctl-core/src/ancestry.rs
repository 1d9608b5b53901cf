//! Parent, root and root-owner resolution.
//!
//! Walks are built from the backend's single-step `parent` and `owner`
//! primitives and capped at the configured depth, so a cyclic chain
//! reported by a misbehaving backend ends instead of spinning.

use tracing::warn;

use crate::{AncestorFlag, Platform, Result, WinCtl, WindowHandle};

impl<P: Platform> WinCtl<P> {
    /// Resolves the ancestor of `handle` selected by `flag`.
    ///
    /// - `Parent`: the parent window, `NULL` for a top-level window.
    /// - `Root`: the top-level window at the end of the parent chain. A
    ///   top-level window is its own root.
    /// - `RootOwner`: the root, then the last window of its owner chain.
    ///
    /// Fails only when `handle` is not a live window.
    pub fn get_ancestor(&self, handle: WindowHandle, flag: AncestorFlag) -> Result<WindowHandle> {
        self.ensure_exists(handle)?;

        let ancestor = match flag {
            AncestorFlag::Parent => self.step(handle, Step::Parent),
            AncestorFlag::Root => self.walk(handle, Step::Parent),
            AncestorFlag::RootOwner => {
                let root = self.walk(handle, Step::Parent);
                self.walk(root, Step::Owner)
            }
        };
        Ok(ancestor)
    }

    /// One hop. A failed native read counts as "no further ancestor".
    fn step(&self, handle: WindowHandle, step: Step) -> WindowHandle {
        let next = match step {
            Step::Parent => self.platform.parent(handle),
            Step::Owner => self.platform.owner(handle),
        };
        match next {
            Ok(h) if self.exists(h) => h,
            _ => WindowHandle::NULL,
        }
    }

    /// Follows `step` until it runs out and returns the last live handle.
    fn walk(&self, start: WindowHandle, step: Step) -> WindowHandle {
        let mut current = start;
        for _ in 0..self.max_ancestry_depth {
            let next = self.step(current, step);
            if next.is_null() || next == current {
                return current;
            }
            current = next;
        }

        warn!(
            event = "core.ancestry.depth_exceeded",
            hwnd = %start,
            max_depth = self.max_ancestry_depth
        );
        current
    }
}

#[derive(Debug, Clone, Copy)]
enum Step {
    Parent,
    Owner,
}
