use std::io::Write;

use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use winctl_core::{Platform, WinCtl};

use super::window::HandleArg;
use crate::error::CliError;

/// Lists every display.
pub fn execute<P: Platform>(ctl: &WinCtl<P>, out: &mut impl Write) -> Result<(), CliError> {
    let monitors = ctl.monitors()?;

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Name"),
            Cell::new("Primary"),
            Cell::new("X").set_alignment(CellAlignment::Right),
            Cell::new("Y").set_alignment(CellAlignment::Right),
            Cell::new("Width").set_alignment(CellAlignment::Right),
            Cell::new("Height").set_alignment(CellAlignment::Right),
        ]);

    for m in &monitors {
        let d = &m.dimensions;
        table.add_row(vec![
            Cell::new(&m.name),
            Cell::new(if m.primary { "yes" } else { "" }),
            Cell::new(d.left).set_alignment(CellAlignment::Right),
            Cell::new(d.top).set_alignment(CellAlignment::Right),
            Cell::new(d.width()).set_alignment(CellAlignment::Right),
            Cell::new(d.height()).set_alignment(CellAlignment::Right),
        ]);
    }

    writeln!(out, "{table}")?;
    writeln!(out, "\n{} monitors found", monitors.len())?;
    Ok(())
}

/// Prints the display a window is on.
pub fn monitor<P: Platform>(
    ctl: &WinCtl<P>,
    args: &HandleArg,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let m = ctl.get_monitor(args.hwnd)?;
    let primary = if m.primary { " (primary)" } else { "" };
    writeln!(out, "{}{primary}\t{}", m.name, m.dimensions)?;
    Ok(())
}
