//! Geometry, show-state, focus and z-order changes.

mod common;

use common::{desktop, rect};
use simple_test_case::test_case;
use winctl_core::config::RegistryConfig;
use winctl_core::memory::{MemoryDesktop, WindowSpec};
use winctl_core::{Config, Error, InsertAfter, SwpFlags, WinCtl, WindowHandle, WindowState};

// ---------------------------------------------------------------------------
// move_window / move_relative
// ---------------------------------------------------------------------------

#[test]
fn move_window_sets_absolute_rectangle() {
    let (ctl, w) = desktop();

    ctl.move_window(w.notepad, 400, 300, 640, 480).unwrap();

    assert_eq!(ctl.dimensions(w.notepad).unwrap(), rect(400, 300, 1040, 780));
}

#[test]
fn move_window_keeps_z_order_and_focus() {
    let (ctl, w) = desktop();
    ctl.platform().focus(w.editor);
    let before = ctl.platform().z_order();

    ctl.move_window(w.notepad, 0, 0, 10, 10).unwrap();

    assert_eq!(ctl.platform().z_order(), before);
    assert_eq!(ctl.get_active_window().unwrap(), w.editor);
}

#[test]
fn move_window_rejects_negative_size() {
    let (ctl, w) = desktop();

    let err = ctl.move_window(w.notepad, 0, 0, -10, 100).unwrap_err();

    assert!(matches!(err, Error::InvalidDimensions { .. }));
    assert_eq!(ctl.dimensions(w.notepad).unwrap(), rect(100, 100, 300, 200));
}

#[test_case(i32::MAX - 10, 0, 100, 100; "right edge overflows")]
#[test_case(0, i32::MAX - 10, 100, 100; "bottom edge overflows")]
#[test]
fn move_window_rejects_edges_beyond_coordinate_range(x: i32, y: i32, width: i32, height: i32) {
    // Arrange
    let (ctl, w) = desktop();

    // Act
    let err = ctl.move_window(w.notepad, x, y, width, height).unwrap_err();

    // Assert
    assert!(matches!(err, Error::InvalidDimensions { .. }));
    assert_eq!(ctl.dimensions(w.notepad).unwrap(), rect(100, 100, 300, 200));
}

#[test]
fn move_relative_past_coordinate_range_is_rejected() {
    let (ctl, w) = desktop();

    let err = ctl.move_relative(w.notepad, i32::MAX, 0, 0, 0).unwrap_err();

    assert!(matches!(err, Error::InvalidDimensions { .. }));
    assert_eq!(ctl.dimensions(w.notepad).unwrap(), rect(100, 100, 300, 200));
}

#[test]
fn set_window_pos_with_extreme_values_does_not_wrap() {
    let (ctl, w) = desktop();

    ctl.set_window_pos(
        w.notepad,
        InsertAfter::Top,
        i32::MAX,
        i32::MIN,
        i32::MAX,
        i32::MAX,
        SwpFlags::NOZORDER | SwpFlags::NOACTIVATE,
    )
    .unwrap();

    let after = ctl.dimensions(w.notepad).unwrap();
    assert!(after.left <= after.right && after.top <= after.bottom);
    assert_eq!(after.right, i32::MAX);
}

#[test]
fn move_relative_applies_position_and_size_deltas() {
    // Arrange
    let (ctl, w) = desktop();

    // Act
    ctl.move_relative(w.notepad, -50, 0, 0, 50).unwrap();

    // Assert
    assert_eq!(ctl.dimensions(w.notepad).unwrap(), rect(50, 100, 250, 250));
}

#[test_case(10, 0, rect(110, 100, 310, 200); "right")]
#[test_case(0, -20, rect(100, 80, 300, 180); "up")]
#[test_case(-100, 40, rect(0, 140, 200, 240); "down left")]
#[test]
fn move_relative_position_only_keeps_size(dx: i32, dy: i32, expected: winctl_core::Dimensions) {
    let (ctl, w) = desktop();

    ctl.move_relative(w.notepad, dx, dy, 0, 0).unwrap();

    let after = ctl.dimensions(w.notepad).unwrap();
    assert_eq!(after, expected);
    assert_eq!((after.width(), after.height()), (200, 100));
}

#[test]
fn move_relative_shrinking_past_zero_is_rejected() {
    let (ctl, w) = desktop();

    let err = ctl.move_relative(w.notepad, 0, 0, -201, 0).unwrap_err();

    assert!(matches!(err, Error::InvalidDimensions { .. }));
}

#[test]
fn moves_fail_for_dead_handle() {
    let (ctl, w) = desktop();
    ctl.platform().destroy(w.notepad);

    assert!(ctl.move_window(w.notepad, 0, 0, 10, 10).unwrap_err().is_invalid_handle());
    assert!(ctl.move_relative(w.notepad, 1, 1, 0, 0).unwrap_err().is_invalid_handle());
}

// ---------------------------------------------------------------------------
// show_window / set_foreground_window
// ---------------------------------------------------------------------------

#[test]
fn hide_clears_visibility_and_show_restores_it() {
    let (ctl, w) = desktop();

    ctl.show_window(w.notepad, WindowState::Hide).unwrap();
    assert!(!ctl.is_visible(w.notepad));

    ctl.show_window(w.notepad, WindowState::Show).unwrap();
    assert!(ctl.is_visible(w.notepad));
}

#[test]
fn maximize_alias_maximizes_and_activates() {
    let (ctl, w) = desktop();

    ctl.show_window(w.notepad, WindowState::SHOW_MAXIMIZED).unwrap();

    assert!(ctl.platform().is_maximized(w.notepad));
    assert_eq!(ctl.get_active_window().unwrap(), w.notepad);
    assert_eq!(ctl.platform().z_order()[0], w.notepad);
}

#[test]
fn show_no_activate_leaves_focus_alone() {
    let (ctl, w) = desktop();
    ctl.platform().focus(w.editor);

    ctl.show_window(w.notepad, WindowState::ShowNa).unwrap();

    assert_eq!(ctl.get_active_window().unwrap(), w.editor);
}

#[test]
fn minimizing_the_active_window_leaves_no_active_window() {
    let (ctl, w) = desktop();
    ctl.platform().focus(w.notepad);

    ctl.show_window(w.notepad, WindowState::ShowMinNoActive).unwrap();

    assert!(ctl.platform().is_minimized(w.notepad));
    assert!(matches!(ctl.get_active_window(), Err(Error::NoActiveWindow)));
}

#[test]
fn show_window_fails_for_dead_handle() {
    let (ctl, w) = desktop();
    ctl.platform().destroy(w.notepad);

    let err = ctl.show_window(w.notepad, WindowState::Restore).unwrap_err();

    assert!(err.is_invalid_handle());
}

#[test]
fn set_foreground_window_activates() {
    let (ctl, w) = desktop();

    ctl.set_foreground_window(w.notepad).unwrap();

    assert_eq!(ctl.get_active_window().unwrap(), w.notepad);
}

#[test]
fn refused_foreground_request_is_not_an_error() {
    // Arrange
    let (ctl, w) = desktop();
    ctl.platform().focus(w.editor);
    ctl.platform().set_foreground_lock(true);

    // Act
    let result = ctl.set_foreground_window(w.notepad);

    // Assert
    assert!(result.is_ok());
    assert_eq!(ctl.get_active_window().unwrap(), w.editor);
}

// ---------------------------------------------------------------------------
// set_window_pos
// ---------------------------------------------------------------------------

#[test]
fn raise_without_move_or_size_changes_only_z_order() {
    // Arrange
    let (ctl, w) = desktop();
    let before = ctl.dimensions(w.notepad).unwrap();

    // Act
    ctl.set_window_pos(
        w.notepad,
        InsertAfter::Top,
        0,
        0,
        0,
        0,
        SwpFlags::NOMOVE | SwpFlags::NOSIZE,
    )
    .unwrap();

    // Assert
    assert_eq!(ctl.dimensions(w.notepad).unwrap(), before);
    assert_eq!(ctl.platform().z_order()[0], w.notepad);
}

#[test]
fn topmost_then_no_topmost() {
    let (ctl, w) = desktop();
    let flags = SwpFlags::NOMOVE | SwpFlags::NOSIZE | SwpFlags::NOACTIVATE;

    ctl.set_window_pos(w.notepad, InsertAfter::Topmost, 0, 0, 0, 0, flags)
        .unwrap();
    // A newly opened window stays behind the topmost one.
    let fresh = ctl.platform().add_window(WindowSpec::new("Fresh", "App"));

    assert!(ctl.platform().is_topmost(w.notepad));
    assert_eq!(&ctl.platform().z_order()[..2], &[w.notepad, fresh]);

    ctl.set_window_pos(w.notepad, InsertAfter::NoTopmost, 0, 0, 0, 0, flags)
        .unwrap();

    assert!(!ctl.platform().is_topmost(w.notepad));
}

#[test]
fn bottom_sends_window_to_the_back() {
    let (ctl, w) = desktop();

    ctl.set_window_pos(
        w.hidden,
        InsertAfter::Bottom,
        0,
        0,
        0,
        0,
        SwpFlags::NOMOVE | SwpFlags::NOSIZE | SwpFlags::NOACTIVATE,
    )
    .unwrap();

    assert_eq!(ctl.platform().z_order().last(), Some(&w.hidden));
}

#[test]
fn insert_after_window_places_behind_it() {
    let (ctl, w) = desktop();

    ctl.set_window_pos(
        w.notepad,
        InsertAfter::Window(w.save_dialog),
        0,
        0,
        0,
        0,
        SwpFlags::NOMOVE | SwpFlags::NOSIZE | SwpFlags::NOACTIVATE,
    )
    .unwrap();

    assert_eq!(
        ctl.platform().z_order(),
        vec![w.hidden, w.save_dialog, w.notepad, w.editor]
    );
}

#[test]
fn dead_insert_after_window_is_rejected() {
    let (ctl, w) = desktop();
    ctl.platform().destroy(w.editor);

    let err = ctl
        .set_window_pos(
            w.notepad,
            InsertAfter::Window(w.editor),
            0,
            0,
            0,
            0,
            SwpFlags::NOMOVE | SwpFlags::NOSIZE,
        )
        .unwrap_err();

    assert!(matches!(err, Error::InvalidHandle { handle } if handle == w.editor));
}

#[test]
fn insert_after_is_ignored_with_nozorder() {
    let (ctl, w) = desktop();
    let dead = WindowHandle::from_raw(0xDEAD0);

    ctl.set_window_pos(
        w.notepad,
        InsertAfter::Window(dead),
        5,
        5,
        0,
        0,
        SwpFlags::NOSIZE | SwpFlags::NOZORDER | SwpFlags::NOACTIVATE,
    )
    .unwrap();

    assert_eq!(ctl.dimensions(w.notepad).unwrap(), rect(5, 5, 205, 105));
}

#[test]
fn negative_size_is_rejected_unless_nosize() {
    let (ctl, w) = desktop();

    let err = ctl
        .set_window_pos(w.notepad, InsertAfter::Top, 0, 0, -1, 10, SwpFlags::NOZORDER)
        .unwrap_err();
    assert_eq!(err.code(), "INVALID_DIMENSIONS");

    ctl.set_window_pos(
        w.notepad,
        InsertAfter::Top,
        0,
        0,
        -1,
        10,
        SwpFlags::NOZORDER | SwpFlags::NOSIZE,
    )
    .unwrap();
    assert_eq!(ctl.dimensions(w.notepad).unwrap(), rect(0, 0, 200, 100));
}

#[test]
fn set_pos_can_hide_a_window() {
    let (ctl, w) = desktop();

    ctl.window(w.notepad)
        .set_pos(
            InsertAfter::Top,
            0,
            0,
            0,
            0,
            SwpFlags::from_list(&[
                SwpFlags::NOMOVE,
                SwpFlags::NOSIZE,
                SwpFlags::NOZORDER,
                SwpFlags::HIDEWINDOW,
            ]),
        )
        .unwrap();

    assert!(!ctl.is_visible(w.notepad));
}

// ---------------------------------------------------------------------------
// Registry interaction
// ---------------------------------------------------------------------------

#[test]
fn mutation_invalidates_cached_snapshot() {
    // Arrange
    let (ctl, w) = desktop();
    ctl.snapshot(w.notepad).unwrap();
    let registry = ctl.registry().unwrap();
    assert!(registry.contains(w.notepad));

    // Act
    ctl.move_window(w.notepad, 0, 0, 50, 50).unwrap();

    // Assert
    assert!(!registry.contains(w.notepad));
    assert_eq!(ctl.snapshot(w.notepad).unwrap().dimensions, rect(0, 0, 50, 50));
}

#[test]
fn cached_snapshot_of_a_dead_window_is_not_served() {
    let (ctl, w) = desktop();
    ctl.snapshot(w.editor).unwrap();

    ctl.platform().destroy(w.editor);

    assert!(ctl.snapshot(w.editor).unwrap_err().is_invalid_handle());
    assert!(!ctl.registry().unwrap().contains(w.editor));
}

#[test]
fn snapshot_reads_live_state_when_registry_is_disabled() {
    let desktop = MemoryDesktop::new();
    let h = desktop.add_window(WindowSpec::new("before", "App"));
    let config = Config {
        registry: RegistryConfig { enabled: false },
        ..Config::default()
    };
    let ctl = WinCtl::with_config(desktop, &config);

    assert!(ctl.registry().is_none());
    assert_eq!(ctl.snapshot(h).unwrap().title, "before");

    ctl.platform().set_title(h, "after");

    assert_eq!(ctl.snapshot(h).unwrap().title, "after");
}

#[test]
fn window_view_mutations_forward_to_layer() {
    let (ctl, w) = desktop();
    let win = ctl.window(w.notepad);

    win.move_to(10, 20, 30, 40).unwrap();
    win.move_relative(5, 5, 0, 0).unwrap();
    win.show(WindowState::Restore).unwrap();

    assert_eq!(win.dimensions().unwrap(), rect(15, 25, 45, 65));
    assert_eq!(win.snapshot().unwrap().dimensions, rect(15, 25, 45, 65));
}
