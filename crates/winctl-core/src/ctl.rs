use tracing::debug;

use crate::platform::PlatformResult;
use crate::{Config, Error, Platform, Registry, Result, Window, WindowHandle};

/// Entry point of the abstraction layer.
///
/// Wraps a [`Platform`] backend and exposes the query, accessor, mutator,
/// monitor and ancestry operations on top of it. `WinCtl` holds no
/// authoritative window state: every call goes to the backend, apart from
/// the optional snapshot [`Registry`].
///
/// ```
/// use winctl_core::memory::{MemoryDesktop, WindowSpec};
/// use winctl_core::{Dimensions, WinCtl};
///
/// let desktop = MemoryDesktop::new();
/// desktop.add_monitor("DISPLAY1", true, Dimensions::new(0, 0, 1920, 1080).unwrap());
/// let h = desktop.add_window(WindowSpec::new("Untitled - Notepad", "Notepad"));
///
/// let ctl = WinCtl::new(desktop);
/// ctl.move_relative(h, 10, 0, 0, 0).unwrap();
/// assert_eq!(ctl.get_title(h).unwrap(), "Untitled - Notepad");
/// ```
#[derive(Debug)]
pub struct WinCtl<P> {
    pub(crate) platform: P,
    pub(crate) registry: Option<Registry>,
    pub(crate) max_ancestry_depth: u32,
}

impl<P: Platform> WinCtl<P> {
    /// Creates a layer with the default configuration.
    pub fn new(platform: P) -> Self {
        Self::with_config(platform, &Config::default())
    }

    pub fn with_config(platform: P, config: &Config) -> Self {
        Self {
            platform,
            registry: config.registry.enabled.then(Registry::new),
            max_ancestry_depth: config.ancestry.max_depth.max(1),
        }
    }

    /// The backend this layer delegates to.
    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// The snapshot cache, if enabled.
    pub fn registry(&self) -> Option<&Registry> {
        self.registry.as_ref()
    }

    /// Returns a method-style view of `handle`.
    pub fn window(&self, handle: WindowHandle) -> Window<'_, P> {
        Window::new(self, handle)
    }

    /// Whether `handle` still refers to a live window. Never fails.
    pub fn exists(&self, handle: WindowHandle) -> bool {
        !handle.is_null() && self.platform.is_window(handle)
    }

    pub(crate) fn ensure_exists(&self, handle: WindowHandle) -> Result<()> {
        if self.exists(handle) {
            Ok(())
        } else {
            Err(Error::InvalidHandle { handle })
        }
    }

    /// Translates a native failure for `handle`.
    ///
    /// A window that vanished between the liveness check and the call is
    /// reported as `InvalidHandle`; anything else keeps its native code
    /// inside `Error::Platform`.
    pub(crate) fn native<T>(
        &self,
        handle: WindowHandle,
        call: &'static str,
        result: PlatformResult<T>,
    ) -> Result<T> {
        result.map_err(|source| {
            if self.exists(handle) {
                debug!(
                    event = "core.platform.call_failed",
                    call,
                    hwnd = %handle,
                    code = source.code,
                    error = %source.message
                );
                Error::Platform { call, source }
            } else {
                Error::InvalidHandle { handle }
            }
        })
    }

    /// Drops any cached snapshot for `handle`.
    pub(crate) fn forget(&self, handle: WindowHandle) {
        if let Some(registry) = &self.registry {
            registry.invalidate(handle);
        }
    }
}
