use std::sync::OnceLock;

use tracing::{debug, warn};
use windows::Win32::UI::HiDpi::{
    DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2, DPI_AWARENESS_PER_MONITOR_AWARE,
    GetAwarenessFromDpiAwarenessContext, GetThreadDpiAwarenessContext,
    SetProcessDpiAwarenessContext,
};

static PHYSICAL_PIXELS: OnceLock<bool> = OnceLock::new();

/// Makes `GetWindowRect` and `GetMonitorInfoW` report physical pixels.
///
/// Without per-monitor awareness both are scaled by the primary display's
/// DPI, and largest-overlap monitor resolution drifts on mixed-DPI desks.
/// The switch is attempted once per process. Returns whether the calling
/// thread ends up per-monitor aware, which also covers awareness already
/// declared in the application manifest.
pub(crate) fn ensure_physical_pixels() -> bool {
    *PHYSICAL_PIXELS.get_or_init(|| {
        // SAFETY: takes a predefined context constant and touches only
        // process-wide DPI state.
        let switched = unsafe {
            SetProcessDpiAwarenessContext(DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2)
        };
        if let Err(e) = &switched {
            debug!(event = "windows.dpi.switch_refused", error = %e);
        }

        let aware = per_monitor_aware();
        if aware {
            debug!(event = "windows.dpi.per_monitor");
        } else {
            warn!(
                event = "windows.dpi.scaled",
                "rectangles are DPI-scaled; monitor placement may be off"
            );
        }
        aware
    })
}

fn per_monitor_aware() -> bool {
    // SAFETY: both calls only read the current thread's DPI context.
    let awareness = unsafe { GetAwarenessFromDpiAwarenessContext(GetThreadDpiAwarenessContext()) };
    awareness == DPI_AWARENESS_PER_MONITOR_AWARE
}
