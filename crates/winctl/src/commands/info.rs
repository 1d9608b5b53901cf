use std::io::Write;

use clap::Args;
use serde::Serialize;
use winctl_core::{AncestorFlag, Monitor, Platform, WinCtl, WindowHandle, WindowSnapshot};

use crate::error::CliError;

/// Arguments for the `info` subcommand.
#[derive(Args)]
pub struct InfoArgs {
    /// Window handle (decimal or hex with 0x prefix)
    hwnd: WindowHandle,
    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

/// Arguments for the `ancestor` subcommand.
#[derive(Args)]
pub struct AncestorArgs {
    /// Window handle (decimal or hex with 0x prefix)
    hwnd: WindowHandle,
    /// PARENT, ROOT or ROOTOWNER
    flag: AncestorFlag,
}

#[derive(Serialize)]
struct Info {
    #[serde(flatten)]
    window: WindowSnapshot,
    root: WindowHandle,
    root_owner: WindowHandle,
    monitor: Option<Monitor>,
}

pub fn execute<P: Platform>(
    ctl: &WinCtl<P>,
    args: &InfoArgs,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let handle = args.hwnd;
    let info = Info {
        window: ctl.capture(handle)?,
        root: ctl.get_ancestor(handle, AncestorFlag::Root)?,
        root_owner: ctl.get_ancestor(handle, AncestorFlag::RootOwner)?,
        // A machine without displays still has window metadata to show.
        monitor: ctl.get_monitor(handle).ok(),
    };

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &info)?;
        writeln!(out)?;
        return Ok(());
    }

    let w = &info.window;
    writeln!(out, "Handle:     {}", w.handle)?;
    writeln!(out, "Title:      {}", w.title)?;
    writeln!(out, "Class:      {}", w.class_name)?;
    writeln!(out, "PID:        {}", w.pid)?;
    writeln!(out, "Visible:    {}", w.visible)?;
    writeln!(out, "Rect:       {}", w.dimensions)?;
    writeln!(out, "Parent:     {}", w.parent)?;
    writeln!(out, "Root:       {}", info.root)?;
    writeln!(out, "Root owner: {}", info.root_owner)?;
    match &info.monitor {
        Some(m) => writeln!(out, "Monitor:    {}", m.name)?,
        None => writeln!(out, "Monitor:    -")?,
    }
    Ok(())
}

pub fn ancestor<P: Platform>(
    ctl: &WinCtl<P>,
    args: &AncestorArgs,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let ancestor = ctl.get_ancestor(args.hwnd, args.flag)?;
    writeln!(out, "{ancestor}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{desktop, run};
    use winctl_core::memory::WindowSpec;

    #[test]
    fn text_info_shows_metadata_and_monitor() {
        let (ctl, editor, _) = desktop();
        let args = InfoArgs {
            hwnd: editor,
            json: false,
        };

        let output = run(|out| execute(&ctl, &args, out));

        assert!(output.contains("Title:      notes.txt - Editor"));
        assert!(output.contains("PID:        42"));
        assert!(output.contains("Rect:       (100,100) 800x600"));
        assert!(output.contains("Monitor:    \\\\.\\DISPLAY1"));
    }

    #[test]
    fn json_info_flattens_snapshot() {
        let (ctl, editor, _) = desktop();
        let args = InfoArgs {
            hwnd: editor,
            json: true,
        };

        let output = run(|out| execute(&ctl, &args, out));

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["title"], "notes.txt - Editor");
        assert_eq!(value["handle"], editor.raw());
        assert_eq!(value["root"], editor.raw());
        assert_eq!(value["monitor"]["primary"], true);
    }

    #[test]
    fn info_on_dead_handle_is_invalid_handle() {
        let (ctl, editor, _) = desktop();
        ctl.platform().destroy(editor);
        let args = InfoArgs {
            hwnd: editor,
            json: false,
        };

        let err = execute(&ctl, &args, &mut Vec::new()).unwrap_err();

        assert_eq!(err.code(), "INVALID_HANDLE");
    }

    #[test]
    fn ancestor_prints_resolved_handle() {
        let (ctl, editor, _) = desktop();
        let button = ctl
            .platform()
            .add_window(WindowSpec::new("OK", "Button").child_of(editor));
        let args = AncestorArgs {
            hwnd: button,
            flag: AncestorFlag::Root,
        };

        let output = run(|out| ancestor(&ctl, &args, out));

        assert_eq!(output.trim(), editor.to_string());
    }
}
