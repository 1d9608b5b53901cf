use std::io::Write;

use clap::Args;
use winctl_core::{Platform, WinCtl, WindowHandle};

use crate::error::CliError;

/// Arguments for the `find` subcommand. Exactly one criterion is required.
#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct FindArgs {
    /// Case-sensitive title fragment
    #[arg(long)]
    title: Option<String>,
    /// Exact, case-sensitive title
    #[arg(long)]
    title_exact: Option<String>,
    /// Exact window class name
    #[arg(long)]
    class: Option<String>,
}

pub fn execute<P: Platform>(
    ctl: &WinCtl<P>,
    args: &FindArgs,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let handle = if let Some(fragment) = &args.title {
        ctl.find_by_title(fragment)?
    } else if let Some(title) = &args.title_exact {
        ctl.get_window_by_title_exact(title)?
    } else {
        ctl.get_window_by_class_name(args.class.as_deref().unwrap_or_default())?
    };
    print_handle(ctl, handle, out)
}

/// Prints the foreground window.
pub fn active<P: Platform>(ctl: &WinCtl<P>, out: &mut impl Write) -> Result<(), CliError> {
    let handle = ctl.get_active_window()?;
    print_handle(ctl, handle, out)
}

fn print_handle<P: Platform>(
    ctl: &WinCtl<P>,
    handle: WindowHandle,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let title = ctl.get_title(handle)?;
    writeln!(out, "{handle}\t{title}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{desktop, run};

    fn by_title(fragment: &str) -> FindArgs {
        FindArgs {
            title: Some(fragment.into()),
            title_exact: None,
            class: None,
        }
    }

    #[test]
    fn find_prints_handle_and_title() {
        let (ctl, editor, _) = desktop();

        let output = run(|out| execute(&ctl, &by_title("notes"), out));

        assert_eq!(output, format!("{editor}\tnotes.txt - Editor\n"));
    }

    #[test]
    fn find_by_class() {
        let (ctl, _, hidden) = desktop();
        let args = FindArgs {
            title: None,
            title_exact: None,
            class: Some("Helper".into()),
        };

        let output = run(|out| execute(&ctl, &args, out));

        assert!(output.starts_with(&hidden.to_string()));
    }

    #[test]
    fn find_without_match_is_not_found() {
        let (ctl, _, _) = desktop();
        let args = FindArgs {
            title: None,
            title_exact: Some("notes".into()),
            class: None,
        };

        let err = execute(&ctl, &args, &mut Vec::new()).unwrap_err();

        assert_eq!(err.code(), "NOT_FOUND");
    }

    #[test]
    fn active_without_focus_is_an_error() {
        let (ctl, _, _) = desktop();

        let err = active(&ctl, &mut Vec::new()).unwrap_err();

        assert_eq!(err.code(), "NO_ACTIVE_WINDOW");
    }

    #[test]
    fn active_prints_focused_window() {
        let (ctl, editor, _) = desktop();
        ctl.platform().focus(editor);

        let output = run(|out| active(&ctl, out));

        assert!(output.contains("notes.txt - Editor"));
    }
}
