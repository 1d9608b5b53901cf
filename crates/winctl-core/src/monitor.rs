//! Monitor placement.
//!
//! Resolution is a pure function over the monitor list so it can be tested
//! without a windowing system.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Dimensions, Error, Platform, Result, WinCtl, WindowHandle};

/// A physical display in the shared virtual-screen coordinate space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monitor {
    /// Device name as reported by the OS (e.g. `\\.\DISPLAY1`).
    pub name: String,
    /// Exactly one monitor in the system is primary.
    pub primary: bool,
    /// The full display rectangle.
    pub dimensions: Dimensions,
}

impl Monitor {
    pub fn new(name: impl Into<String>, primary: bool, dimensions: Dimensions) -> Self {
        Self {
            name: name.into(),
            primary,
            dimensions,
        }
    }
}

/// Picks the monitor a window belongs to.
///
/// The winner is the monitor sharing the largest area with `window`. Ties
/// (including a window that touches no monitor at all) go to the primary
/// monitor, then to the first monitor reported. Returns `None` only for an
/// empty monitor list.
pub fn resolve<'a>(window: &Dimensions, monitors: &'a [Monitor]) -> Option<&'a Monitor> {
    let mut best: Option<(&Monitor, i64)> = None;

    for monitor in monitors {
        let overlap = monitor.dimensions.overlap_area(window);
        let better = match best {
            None => true,
            Some((current, area)) => {
                overlap > area || (overlap == area && monitor.primary && !current.primary)
            }
        };
        if better {
            best = Some((monitor, overlap));
        }
    }

    best.map(|(monitor, _)| monitor)
}

/// Returns the primary monitor, or the first one if none is flagged.
pub fn primary(monitors: &[Monitor]) -> Option<&Monitor> {
    monitors
        .iter()
        .find(|m| m.primary)
        .or_else(|| monitors.first())
}

impl<P: Platform> WinCtl<P> {
    /// Returns every display attached to the system.
    pub fn monitors(&self) -> Result<Vec<Monitor>> {
        self.platform.monitors().map_err(|source| Error::Platform {
            call: "EnumDisplayMonitors",
            source,
        })
    }

    /// Returns the primary display.
    pub fn primary_monitor(&self) -> Result<Monitor> {
        primary(&self.monitors()?).cloned().ok_or(Error::NoMonitor)
    }

    /// Returns the display `handle` is (mostly) on.
    pub fn get_monitor(&self, handle: WindowHandle) -> Result<Monitor> {
        let window = self.dimensions(handle)?;
        let monitors = self.monitors()?;

        let monitor = resolve(&window, &monitors).ok_or(Error::NoMonitor)?;
        debug!(
            event = "core.monitor.resolved",
            hwnd = %handle,
            monitor = %monitor.name,
            candidates = monitors.len()
        );
        Ok(monitor.clone())
    }
}
