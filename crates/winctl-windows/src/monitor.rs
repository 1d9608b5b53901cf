use std::mem;

use tracing::warn;
use windows::Win32::Foundation::{LPARAM, RECT};
use windows::Win32::Graphics::Gdi::{
    EnumDisplayMonitors, GetMonitorInfoW, HDC, HMONITOR, MONITORINFO, MONITORINFOEXW,
    MONITORINFOF_PRIMARY,
};
use windows::core::BOOL;
use winctl_core::Monitor;
use winctl_core::platform::PlatformResult;

use crate::convert;

/// Returns every display, in the order `EnumDisplayMonitors` reports them.
///
/// A display whose info cannot be read is skipped with a warning rather
/// than failing the whole list.
pub fn enumerate_monitors() -> PlatformResult<Vec<Monitor>> {
    let mut monitors: Vec<Monitor> = Vec::new();

    // SAFETY: EnumDisplayMonitors runs synchronously. We pass a pointer to
    // our Vec as LPARAM and the callback casts it back; the Vec outlives
    // the call.
    let ok = unsafe {
        EnumDisplayMonitors(
            None,
            None,
            Some(enum_monitor_callback),
            LPARAM(&mut monitors as *mut Vec<Monitor> as isize),
        )
    };

    if !ok.as_bool() {
        return Err(convert::last_error());
    }
    Ok(monitors)
}

unsafe extern "system" fn enum_monitor_callback(
    hmonitor: HMONITOR,
    _hdc: HDC,
    _clip: *mut RECT,
    lparam: LPARAM,
) -> BOOL {
    // SAFETY: lparam is the Vec<Monitor> pointer from enumerate_monitors().
    let monitors = unsafe { &mut *(lparam.0 as *mut Vec<Monitor>) };

    let mut info = MONITORINFOEXW {
        monitorInfo: MONITORINFO {
            cbSize: mem::size_of::<MONITORINFOEXW>() as u32,
            ..Default::default()
        },
        ..Default::default()
    };

    // SAFETY: cbSize tells GetMonitorInfoW it may fill the extended
    // struct, which starts with MONITORINFO.
    let ok = unsafe {
        GetMonitorInfoW(
            hmonitor,
            &mut info as *mut MONITORINFOEXW as *mut MONITORINFO,
        )
    };
    if !ok.as_bool() {
        warn!(event = "windows.monitor.info_failed", index = monitors.len());
        return BOOL(1);
    }

    let device = &info.szDevice;
    let len = device.iter().position(|&c| c == 0).unwrap_or(device.len());

    monitors.push(Monitor::new(
        String::from_utf16_lossy(&device[..len]),
        info.monitorInfo.dwFlags & MONITORINFOF_PRIMARY != 0,
        convert::dimensions(&info.monitorInfo.rcMonitor),
    ));

    BOOL(1) // TRUE: continue enumerating
}
