use std::io::Write;

use clap::Args;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use winctl_core::{Platform, WinCtl, WindowSnapshot};

use crate::error::CliError;

/// Arguments for the `list` subcommand.
#[derive(Args)]
pub struct ListArgs {
    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
    /// Include hidden and untitled windows
    #[arg(long)]
    all: bool,
}

pub fn execute<P: Platform>(
    ctl: &WinCtl<P>,
    args: &ListArgs,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let all = args.all;
    let handles = ctl.find_windows(|s| {
        Ok::<_, std::convert::Infallible>(all || (s.visible && !s.title.is_empty()))
    })?;

    // Snapshots were cached while filtering, so this does not re-query.
    let windows: Vec<WindowSnapshot> = handles
        .into_iter()
        .filter_map(|h| ctl.snapshot(h).ok())
        .collect();

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &windows)?;
        writeln!(out)?;
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("HWND"),
            Cell::new("Title"),
            Cell::new("Class"),
            Cell::new("PID").set_alignment(CellAlignment::Right),
            Cell::new("X").set_alignment(CellAlignment::Right),
            Cell::new("Y").set_alignment(CellAlignment::Right),
            Cell::new("Width").set_alignment(CellAlignment::Right),
            Cell::new("Height").set_alignment(CellAlignment::Right),
        ]);

    for w in &windows {
        let d = &w.dimensions;
        table.add_row(vec![
            Cell::new(w.handle),
            Cell::new(&w.title),
            Cell::new(&w.class_name),
            Cell::new(w.pid).set_alignment(CellAlignment::Right),
            Cell::new(d.left).set_alignment(CellAlignment::Right),
            Cell::new(d.top).set_alignment(CellAlignment::Right),
            Cell::new(d.width()).set_alignment(CellAlignment::Right),
            Cell::new(d.height()).set_alignment(CellAlignment::Right),
        ]);
    }

    writeln!(out, "{table}")?;
    writeln!(out, "\n{} windows found", windows.len())?;
    Ok(())
}
