//! Win32 backend for `winctl-core`.
//!
//! Everything here wraps `user32` calls and is compiled only on Windows.
//! Other targets get an empty crate so the workspace still builds.

#[cfg(windows)]
mod dpi;

/// Display enumeration.
#[cfg(windows)]
pub mod monitor;

/// `Platform` implementation over `HWND`s.
#[cfg(windows)]
pub mod platform;

#[cfg(windows)]
mod convert;

#[cfg(windows)]
pub use platform::Win32Platform;

/// Creates the layer over the native desktop, applying `config`.
///
/// The first call switches the process to per-monitor DPI awareness so
/// window and monitor rectangles share one coordinate space.
#[cfg(windows)]
pub fn native(config: &winctl_core::Config) -> winctl_core::WinCtl<Win32Platform> {
    dpi::ensure_physical_pixels();
    winctl_core::WinCtl::with_config(Win32Platform, config)
}
