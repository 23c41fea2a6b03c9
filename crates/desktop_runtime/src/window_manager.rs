//! Window-state transition helpers used by the desktop reducer.
//!
//! Every helper works on a scratch copy owned by [`crate::reducer::reduce_desktop`], so callers
//! only ever observe whole new [`DesktopState`] records. Helpers assume `app_id` is registered;
//! the reducer checks that before calling in.

use crate::model::{
    AppId, DesktopState, OpenUpdate, ResizeEdge, WindowRect, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
};

/// Opens (or re-opens) a window, restores it, and gives it focus.
pub fn open_window(state: &mut DesktopState, app_id: &AppId) {
    if let Some(window) = state.window_mut(app_id) {
        window.open = true;
        window.minimized = false;
    }
    activate_window(state, app_id);
}

/// Makes `app_id` the single active window and raises it.
///
/// Closed windows cannot take focus; the call leaves state untouched for them.
pub fn activate_window(state: &mut DesktopState, app_id: &AppId) {
    let is_open = state.window(app_id).map(|w| w.open).unwrap_or(false);
    if !is_open {
        return;
    }

    let z_index = state.next_z_index;
    let already_top = state
        .window(app_id)
        .map(|w| w.z_index > 0 && w.z_index.saturating_add(1) == z_index)
        .unwrap_or(false);

    for window in &mut state.windows {
        window.active = &window.app_id == app_id;
    }
    if !already_top {
        if let Some(window) = state.window_mut(app_id) {
            window.z_index = z_index;
        }
        state.next_z_index = z_index.saturating_add(1);
    }
}

/// Flips the minimized flag of an open window without touching `open` or `active`.
pub fn toggle_minimize(state: &mut DesktopState, app_id: &AppId) {
    if let Some(window) = state.window_mut(app_id) {
        if window.open {
            window.minimized = !window.minimized;
        }
    }
}

/// Applies a [`OpenUpdate`] from a window's own chrome.
///
/// Closing clears `minimized` and `active` so a closed window never lingers in either state.
/// Opening through this path only sets the flag; focus is left to [`open_window`].
pub fn apply_open_update(state: &mut DesktopState, update: &OpenUpdate) {
    let Some(window) = state.window_mut(update.app_id()) else {
        return;
    };
    let open = match update {
        OpenUpdate::SetOpen(_, open) => *open,
        OpenUpdate::ToggleOpen(_) => !window.open,
    };
    window.open = open;
    if !open {
        window.minimized = false;
        window.active = false;
    }
}

/// Taskbar button behavior: restore-and-focus, minimize the focused window, or focus.
pub fn toggle_taskbar_entry(state: &mut DesktopState, app_id: &AppId) {
    let Some(window) = state.window(app_id) else {
        return;
    };
    match (window.open, window.minimized, window.active) {
        (false, _, _) => open_window(state, app_id),
        (true, true, _) => {
            toggle_minimize(state, app_id);
            activate_window(state, app_id);
        }
        (true, false, true) => toggle_minimize(state, app_id),
        (true, false, false) => activate_window(state, app_id),
    }
}

/// Applies resize deltas for a given edge/corner drag, bounded by the desktop region.
pub fn resize_rect(
    start: WindowRect,
    edge: ResizeEdge,
    dx: i32,
    dy: i32,
    boundary: WindowRect,
) -> WindowRect {
    let resized = match edge {
        ResizeEdge::East => WindowRect {
            w: start.w + dx,
            ..start
        },
        ResizeEdge::South => WindowRect {
            h: start.h + dy,
            ..start
        },
        ResizeEdge::SouthEast => WindowRect {
            w: start.w + dx,
            h: start.h + dy,
            ..start
        },
    };
    WindowRect {
        w: resized.w.min(boundary.right() - resized.x),
        h: resized.h.min(boundary.bottom() - resized.y),
        ..resized
    }
    .clamped_min(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{apps::app_registry, model::WindowPhase};

    fn state() -> DesktopState {
        DesktopState::from_registry(app_registry())
    }

    #[test]
    fn activate_ignores_closed_windows() {
        let mut state = state();
        let before = state.clone();
        activate_window(&mut state, &AppId::from("about"));
        assert_eq!(state, before);
    }

    #[test]
    fn toggle_minimize_ignores_closed_windows() {
        let mut state = state();
        let before = state.clone();
        toggle_minimize(&mut state, &AppId::from("wordle"));
        assert_eq!(state, before);
    }

    #[test]
    fn reactivating_top_window_keeps_z_order_stable() {
        let mut state = state();
        let about = AppId::from("about");
        open_window(&mut state, &about);
        let z = state.window(&about).unwrap().z_index;
        let next = state.next_z_index;

        activate_window(&mut state, &about);

        assert_eq!(state.window(&about).unwrap().z_index, z);
        assert_eq!(state.next_z_index, next);
    }

    #[test]
    fn activation_raises_window_above_others() {
        let mut state = state();
        let about = AppId::from("about");
        let wordle = AppId::from("wordle");
        open_window(&mut state, &about);
        open_window(&mut state, &wordle);
        activate_window(&mut state, &about);

        let about_z = state.window(&about).unwrap().z_index;
        let wordle_z = state.window(&wordle).unwrap().z_index;
        assert!(about_z > wordle_z);
    }

    #[test]
    fn toggle_open_closes_and_clears_flags() {
        let mut state = state();
        let tictactoe = AppId::from("tictactoe");
        open_window(&mut state, &tictactoe);
        toggle_minimize(&mut state, &tictactoe);

        apply_open_update(&mut state, &OpenUpdate::ToggleOpen(tictactoe.clone()));

        let window = state.window(&tictactoe).unwrap();
        assert_eq!(window.phase(), WindowPhase::Closed);
        assert!(!window.minimized);
        assert!(!window.active);
    }

    #[test]
    fn set_open_true_does_not_take_focus() {
        let mut state = state();
        let about = AppId::from("about");
        let wordle = AppId::from("wordle");
        open_window(&mut state, &about);

        apply_open_update(&mut state, &OpenUpdate::SetOpen(wordle.clone(), true));

        assert_eq!(state.phase_of(&wordle), Some(WindowPhase::Inactive));
        assert_eq!(state.active_app_id(), Some(&about));
    }

    #[test]
    fn taskbar_relaunches_closed_window() {
        let mut state = state();
        let wordle = AppId::from("wordle");
        toggle_taskbar_entry(&mut state, &wordle);
        assert_eq!(state.phase_of(&wordle), Some(WindowPhase::Active));
    }

    #[test]
    fn resize_respects_minimum_and_boundary() {
        let boundary = WindowRect {
            x: 0,
            y: 0,
            w: 800,
            h: 572,
        };
        let start = WindowRect {
            x: 100,
            y: 100,
            w: 300,
            h: 200,
        };

        let shrunk = resize_rect(start, ResizeEdge::SouthEast, -400, -400, boundary);
        assert_eq!(shrunk.w, MIN_WINDOW_WIDTH);
        assert_eq!(shrunk.h, MIN_WINDOW_HEIGHT);

        let grown = resize_rect(start, ResizeEdge::SouthEast, 900, 900, boundary);
        assert_eq!(grown.w, 700);
        assert_eq!(grown.h, 472);

        let wider = resize_rect(start, ResizeEdge::East, 50, 90, boundary);
        assert_eq!((wider.w, wider.h), (350, 200));
    }
}
