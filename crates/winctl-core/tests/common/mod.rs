#![allow(dead_code)]

use winctl_core::memory::{MemoryDesktop, WindowSpec};
use winctl_core::{Dimensions, WinCtl, WindowHandle};

pub fn rect(left: i32, top: i32, right: i32, bottom: i32) -> Dimensions {
    Dimensions::new(left, top, right, bottom).unwrap()
}

/// Handles created by [`desktop`].
pub struct Fixture {
    pub notepad: WindowHandle,
    pub editor: WindowHandle,
    pub save_dialog: WindowHandle,
    pub edit_control: WindowHandle,
    pub hidden: WindowHandle,
}

/// A two-monitor desktop with a handful of windows.
///
/// ```text
/// DISPLAY2 (-1920,0)..(0,1080)   DISPLAY1* (0,0)..(1920,1080)
///
/// z-order (front first): hidden, save_dialog, editor, notepad
/// save_dialog is owned by editor; edit_control is a child of notepad.
/// ```
pub fn desktop() -> (WinCtl<MemoryDesktop>, Fixture) {
    let d = MemoryDesktop::new();
    d.add_monitor("\\\\.\\DISPLAY2", false, rect(-1920, 0, 0, 1080));
    d.add_monitor("\\\\.\\DISPLAY1", true, rect(0, 0, 1920, 1080));

    let notepad = d.add_window(
        WindowSpec::new("Untitled - Notepad", "Notepad")
            .pid(100)
            .at(rect(100, 100, 300, 200)),
    );
    let edit_control = d.add_window(
        WindowSpec::new("", "Edit")
            .pid(100)
            .child_of(notepad)
            .at(rect(105, 130, 295, 195)),
    );
    let editor = d.add_window(
        WindowSpec::new("main.rs - Editor", "Chrome_WidgetWin_1")
            .pid(200)
            .at(rect(-1800, 50, -200, 1000)),
    );
    let save_dialog = d.add_window(
        WindowSpec::new("Save As", "#32770")
            .pid(200)
            .owned_by(editor)
            .at(rect(-1200, 300, -700, 700)),
    );
    let hidden = d.add_window(
        WindowSpec::new("Default IME", "IME")
            .pid(300)
            .hidden()
            .at(rect(0, 0, 0, 0)),
    );

    (
        WinCtl::new(d),
        Fixture {
            notepad,
            editor,
            save_dialog,
            edit_control,
            hidden,
        },
    )
}
