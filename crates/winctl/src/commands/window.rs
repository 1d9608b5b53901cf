use std::io::Write;

use clap::Args;
use tracing::info;
use winctl_core::{InsertAfter, Platform, SwpFlags, WinCtl, WindowHandle, WindowState};

use crate::error::CliError;

/// A single window handle argument.
#[derive(Args)]
pub struct HandleArg {
    /// Window handle (decimal or hex with 0x prefix)
    pub hwnd: WindowHandle,
}

/// Arguments for the `move` subcommand.
#[derive(Args)]
pub struct MoveArgs {
    /// Window handle (decimal or hex with 0x prefix)
    hwnd: WindowHandle,
    /// X position in pixels
    #[arg(allow_negative_numbers = true)]
    x: i32,
    /// Y position in pixels
    #[arg(allow_negative_numbers = true)]
    y: i32,
    /// Width in pixels
    width: i32,
    /// Height in pixels
    height: i32,
}

/// Arguments for the `move-relative` subcommand.
#[derive(Args)]
pub struct MoveRelativeArgs {
    /// Window handle (decimal or hex with 0x prefix)
    hwnd: WindowHandle,
    /// Horizontal offset
    #[arg(allow_negative_numbers = true)]
    dx: i32,
    /// Vertical offset
    #[arg(allow_negative_numbers = true)]
    dy: i32,
    /// Width change
    #[arg(allow_negative_numbers = true)]
    dw: i32,
    /// Height change
    #[arg(allow_negative_numbers = true)]
    dh: i32,
}

/// Arguments for the `show` subcommand.
#[derive(Args)]
pub struct ShowArgs {
    /// Window handle (decimal or hex with 0x prefix)
    pub hwnd: WindowHandle,
    /// Show state name, e.g. HIDE, SHOWNORMAL, MINIMIZE, SHOWMAXIMIZED
    pub state: WindowState,
}

/// Arguments for the `raise` subcommand. Without a flag the window is
/// brought to the top of its band.
#[derive(Args)]
pub struct RaiseArgs {
    /// Window handle (decimal or hex with 0x prefix)
    hwnd: WindowHandle,
    /// Keep the window above all non-topmost windows
    #[arg(long, conflicts_with_all = ["bottom", "no_topmost"])]
    topmost: bool,
    /// Send the window behind all others
    #[arg(long, conflicts_with = "no_topmost")]
    bottom: bool,
    /// Drop the topmost flag
    #[arg(long)]
    no_topmost: bool,
}

impl RaiseArgs {
    fn placement(&self) -> InsertAfter {
        if self.topmost {
            InsertAfter::Topmost
        } else if self.bottom {
            InsertAfter::Bottom
        } else if self.no_topmost {
            InsertAfter::NoTopmost
        } else {
            InsertAfter::Top
        }
    }
}

pub fn move_window<P: Platform>(
    ctl: &WinCtl<P>,
    args: &MoveArgs,
    out: &mut impl Write,
) -> Result<(), CliError> {
    ctl.move_window(args.hwnd, args.x, args.y, args.width, args.height)?;
    report_rect(ctl, args.hwnd, out)
}

pub fn move_relative<P: Platform>(
    ctl: &WinCtl<P>,
    args: &MoveRelativeArgs,
    out: &mut impl Write,
) -> Result<(), CliError> {
    ctl.move_relative(args.hwnd, args.dx, args.dy, args.dw, args.dh)?;
    report_rect(ctl, args.hwnd, out)
}

pub fn show<P: Platform>(
    ctl: &WinCtl<P>,
    args: &ShowArgs,
    out: &mut impl Write,
) -> Result<(), CliError> {
    ctl.show_window(args.hwnd, args.state)?;
    writeln!(out, "{} -> {}", args.hwnd, args.state)?;
    Ok(())
}

pub fn focus<P: Platform>(
    ctl: &WinCtl<P>,
    args: &HandleArg,
    out: &mut impl Write,
) -> Result<(), CliError> {
    ctl.set_foreground_window(args.hwnd)?;

    // The OS may have declined; report what actually holds focus.
    match ctl.get_active_window() {
        Ok(active) if active == args.hwnd => writeln!(out, "{} focused", args.hwnd)?,
        _ => writeln!(out, "{} focus requested (declined by the OS)", args.hwnd)?,
    }
    Ok(())
}

pub fn raise<P: Platform>(
    ctl: &WinCtl<P>,
    args: &RaiseArgs,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let placement = args.placement();
    info!(event = "cli.raise", hwnd = %args.hwnd, insert_after = placement.raw());

    ctl.set_window_pos(
        args.hwnd,
        placement,
        0,
        0,
        0,
        0,
        SwpFlags::NOMOVE | SwpFlags::NOSIZE | SwpFlags::NOACTIVATE,
    )?;
    writeln!(out, "{} reordered", args.hwnd)?;
    Ok(())
}

/// Mutations are requests; re-query so the output shows what the OS did.
fn report_rect<P: Platform>(
    ctl: &WinCtl<P>,
    handle: WindowHandle,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let now = ctl.dimensions(handle)?;
    writeln!(out, "{handle} now at {now}")?;
    Ok(())
}
