use std::io::Write;

use clap::Subcommand;
use winctl_core::{Platform, WinCtl};

use crate::error::CliError;

pub mod find;
pub mod info;
pub mod list;
pub mod monitors;
pub mod window;

#[derive(Subcommand)]
pub enum Commands {
    /// List top-level windows in z-order
    List(list::ListArgs),
    /// Print the window with keyboard focus
    Active,
    /// Find the first window matching a title or class
    Find(find::FindArgs),
    /// Show everything known about a window
    Info(info::InfoArgs),
    /// Move and resize a window to an absolute rectangle
    Move(window::MoveArgs),
    /// Move and resize a window relative to its current rectangle
    MoveRelative(window::MoveRelativeArgs),
    /// Change the show state of a window (HIDE, MINIMIZE, RESTORE, ...)
    Show(window::ShowArgs),
    /// Ask the OS to give a window keyboard focus
    Focus(window::HandleArg),
    /// Resolve a window's PARENT, ROOT or ROOTOWNER
    Ancestor(info::AncestorArgs),
    /// Print the monitor a window is on
    Monitor(window::HandleArg),
    /// List attached monitors
    Monitors,
    /// Change a window's z-order without moving it
    Raise(window::RaiseArgs),
}

/// Runs `command` against `ctl`, writing human or JSON output to `out`.
#[cfg_attr(not(windows), allow(dead_code))]
pub fn execute<P: Platform>(
    ctl: &WinCtl<P>,
    command: &Commands,
    out: &mut impl Write,
) -> Result<(), CliError> {
    match command {
        Commands::List(args) => list::execute(ctl, args, out),
        Commands::Active => find::active(ctl, out),
        Commands::Find(args) => find::execute(ctl, args, out),
        Commands::Info(args) => info::execute(ctl, args, out),
        Commands::Move(args) => window::move_window(ctl, args, out),
        Commands::MoveRelative(args) => window::move_relative(ctl, args, out),
        Commands::Show(args) => window::show(ctl, args, out),
        Commands::Focus(args) => window::focus(ctl, args, out),
        Commands::Ancestor(args) => info::ancestor(ctl, args, out),
        Commands::Monitor(args) => monitors::monitor(ctl, args, out),
        Commands::Monitors => monitors::execute(ctl, out),
        Commands::Raise(args) => window::raise(ctl, args, out),
    }
}
