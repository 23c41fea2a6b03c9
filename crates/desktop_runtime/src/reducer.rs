//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use thiserror::Error;

use crate::{
    model::{
        AppId, DesktopState, DragSession, InteractionState, OpenUpdate, PointerPosition,
        ResizeEdge, ResizeSession, WindowRect,
    },
    window_manager::{
        activate_window, apply_open_update, open_window, resize_rect, toggle_minimize,
        toggle_taskbar_entry,
    },
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`].
pub enum DesktopAction {
    /// Open (or refocus and restore) an app's window. Sent by desktop icons and deep links.
    OpenApp {
        /// App to open.
        app_id: AppId,
    },
    /// Give an open window focus.
    ActivateApp {
        /// App to focus.
        app_id: AppId,
    },
    /// Flip an open window between minimized and restored.
    ToggleMinimize {
        /// App to minimize or restore.
        app_id: AppId,
    },
    /// Update the `open` flag from the window's own controls.
    UpdateOpen(OpenUpdate),
    /// Taskbar button click.
    ToggleTaskbarEntry {
        /// App associated with the taskbar button.
        app_id: AppId,
    },
    /// Begin dragging a window by its title bar.
    BeginMove {
        /// Window being dragged.
        app_id: AppId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
        /// Region the window must stay inside.
        boundary: WindowRect,
    },
    /// Update an in-progress window drag.
    UpdateMove {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active window drag.
    EndMove,
    /// Begin resizing a window.
    BeginResize {
        /// Window being resized.
        app_id: AppId,
        /// Edge or corner being dragged.
        edge: ResizeEdge,
        /// Pointer position at resize start.
        pointer: PointerPosition,
        /// Region the window must stay inside.
        boundary: WindowRect,
    },
    /// Update an in-progress window resize.
    UpdateResize {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active window resize.
    EndResize,
}

impl DesktopAction {
    fn target_app(&self) -> Option<&AppId> {
        match self {
            Self::OpenApp { app_id }
            | Self::ActivateApp { app_id }
            | Self::ToggleMinimize { app_id }
            | Self::ToggleTaskbarEntry { app_id }
            | Self::BeginMove { app_id, .. }
            | Self::BeginResize { app_id, .. } => Some(app_id),
            Self::UpdateOpen(update) => Some(update.app_id()),
            Self::UpdateMove { .. } | Self::EndMove | Self::UpdateResize { .. } | Self::EndResize => {
                None
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Move keyboard focus into a window that just became active.
    FocusWindow(AppId),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for invalid actions.
pub enum ReducerError {
    /// The action referenced an app id that is not in the registry.
    #[error("unknown app `{0}`")]
    UnknownApp(AppId),
}

#[derive(Debug, Clone, PartialEq)]
/// Result of a single reducer step: the next records and the effects to run.
pub struct DesktopTransition {
    pub state: DesktopState,
    pub interaction: InteractionState,
    pub effects: Vec<RuntimeEffect>,
}

/// Applies a [`DesktopAction`] and returns the next desktop and interaction records.
///
/// Inputs are never modified; each call yields fresh records so views can compare old and new
/// state wholesale.
///
/// # Errors
///
/// Returns [`ReducerError::UnknownApp`] when the action targets an id that has no window state.
pub fn reduce_desktop(
    state: &DesktopState,
    interaction: &InteractionState,
    action: DesktopAction,
) -> Result<DesktopTransition, ReducerError> {
    if let Some(app_id) = action.target_app() {
        if state.window(app_id).is_none() {
            return Err(ReducerError::UnknownApp(app_id.clone()));
        }
    }

    let mut next = state.clone();
    let mut ui = interaction.clone();

    match action {
        DesktopAction::OpenApp { app_id } => open_window(&mut next, &app_id),
        DesktopAction::ActivateApp { app_id } => activate_window(&mut next, &app_id),
        DesktopAction::ToggleMinimize { app_id } => {
            toggle_minimize(&mut next, &app_id);
            if !next.window(&app_id).is_some_and(|w| w.is_visible()) {
                clear_sessions_for(&mut ui, &app_id);
            }
        }
        DesktopAction::UpdateOpen(update) => {
            apply_open_update(&mut next, &update);
            if !next.window(update.app_id()).map(|w| w.open).unwrap_or(false) {
                clear_sessions_for(&mut ui, update.app_id());
            }
        }
        DesktopAction::ToggleTaskbarEntry { app_id } => {
            toggle_taskbar_entry(&mut next, &app_id);
            if !next.window(&app_id).is_some_and(|w| w.is_visible()) {
                clear_sessions_for(&mut ui, &app_id);
            }
        }
        DesktopAction::BeginMove {
            app_id,
            pointer,
            boundary,
        } => {
            if let Some(rect_start) = visible_rect(&next, &app_id) {
                activate_window(&mut next, &app_id);
                ui.dragging = Some(DragSession {
                    app_id,
                    pointer_start: pointer,
                    rect_start,
                    boundary,
                });
            }
        }
        DesktopAction::UpdateMove { pointer } => {
            if let Some(session) = ui.dragging.as_ref() {
                let dx = pointer.x - session.pointer_start.x;
                let dy = pointer.y - session.pointer_start.y;
                if let Some(window) = next.window_mut(&session.app_id) {
                    window.rect = session
                        .rect_start
                        .offset(dx, dy)
                        .clamped_within(session.boundary);
                }
            }
        }
        DesktopAction::EndMove => ui.dragging = None,
        DesktopAction::BeginResize {
            app_id,
            edge,
            pointer,
            boundary,
        } => {
            let resizable = crate::apps::app_descriptor(&app_id)
                .map(|app| app.resizable)
                .unwrap_or(true);
            if let Some(rect_start) = visible_rect(&next, &app_id).filter(|_| resizable) {
                activate_window(&mut next, &app_id);
                ui.resizing = Some(ResizeSession {
                    app_id,
                    edge,
                    pointer_start: pointer,
                    rect_start,
                    boundary,
                });
            }
        }
        DesktopAction::UpdateResize { pointer } => {
            if let Some(session) = ui.resizing.as_ref() {
                let dx = pointer.x - session.pointer_start.x;
                let dy = pointer.y - session.pointer_start.y;
                if let Some(window) = next.window_mut(&session.app_id) {
                    window.rect =
                        resize_rect(session.rect_start, session.edge, dx, dy, session.boundary);
                }
            }
        }
        DesktopAction::EndResize => ui.resizing = None,
    }

    let mut effects = Vec::new();
    if let Some(app_id) = focus_target(state, &next) {
        effects.push(RuntimeEffect::FocusWindow(app_id.clone()));
    }

    Ok(DesktopTransition {
        state: next,
        interaction: ui,
        effects,
    })
}

/// The active window needs keyboard focus when focus moved to it or when it was just restored.
fn focus_target<'a>(prev: &DesktopState, next: &'a DesktopState) -> Option<&'a AppId> {
    let window = next.windows.iter().find(|w| w.active && w.is_visible())?;
    let was_focused_and_shown = prev
        .window(&window.app_id)
        .is_some_and(|w| w.active && w.is_visible());
    (!was_focused_and_shown).then_some(&window.app_id)
}

fn visible_rect(state: &DesktopState, app_id: &AppId) -> Option<WindowRect> {
    state
        .window(app_id)
        .filter(|w| w.is_visible())
        .map(|w| w.rect)
}

fn clear_sessions_for(interaction: &mut InteractionState, app_id: &AppId) {
    if interaction
        .dragging
        .as_ref()
        .is_some_and(|session| &session.app_id == app_id)
    {
        interaction.dragging = None;
    }
    if interaction
        .resizing
        .as_ref()
        .is_some_and(|session| &session.app_id == app_id)
    {
        interaction.resizing = None;
    }
}


#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use super::*;
    use crate::apps::app_registry;

    fn app_ids() -> Vec<AppId> {
        app_registry().iter().map(|app| app.id.clone()).collect()
    }

    fn action_strategy() -> impl Strategy<Value = DesktopAction> {
        let ids = app_ids();
        (0..ids.len(), 0u8..6).prop_map(move |(idx, kind)| {
            let app_id = ids[idx].clone();
            match kind {
                0 => DesktopAction::OpenApp { app_id },
                1 => DesktopAction::ActivateApp { app_id },
                2 => DesktopAction::ToggleMinimize { app_id },
                3 => DesktopAction::UpdateOpen(OpenUpdate::ToggleOpen(app_id)),
                4 => DesktopAction::UpdateOpen(OpenUpdate::SetOpen(app_id, true)),
                _ => DesktopAction::ToggleTaskbarEntry { app_id },
            }
        })
    }

    fn run(actions: Vec<DesktopAction>) -> DesktopState {
        let mut state = DesktopState::from_registry(app_registry());
        let interaction = InteractionState::default();
        for action in actions {
            state = reduce_desktop(&state, &interaction, action)
                .expect("registered app")
                .state;
        }
        state
    }

    proptest! {
        #[test]
        fn at_most_one_window_is_active(actions in prop::collection::vec(action_strategy(), 0..40)) {
            let state = run(actions);
            let active = state.windows.iter().filter(|w| w.active).count();
            prop_assert!(active <= 1, "{active} active windows");
        }

        #[test]
        fn flags_never_outlive_a_closed_window(actions in prop::collection::vec(action_strategy(), 0..40)) {
            let state = run(actions);
            for window in state.windows.iter().filter(|w| !w.open) {
                prop_assert!(!window.minimized && !window.active, "{:?}", window);
            }
        }

        #[test]
        fn open_converges_regardless_of_history(
            actions in prop::collection::vec(action_strategy(), 0..40),
            idx in 0usize..3,
        ) {
            let app_id = app_ids()[idx].clone();
            let mut actions = actions;
            actions.push(DesktopAction::OpenApp { app_id: app_id.clone() });
            let state = run(actions);
            let window = state.window(&app_id).expect("window");
            prop_assert!(window.open && !window.minimized && window.active);
        }

        #[test]
        fn toggle_minimize_twice_is_identity(
            actions in prop::collection::vec(action_strategy(), 0..40),
            idx in 0usize..3,
        ) {
            let app_id = app_ids()[idx].clone();
            let before = run(actions.clone());
            let mut twice = actions;
            twice.push(DesktopAction::ToggleMinimize { app_id: app_id.clone() });
            twice.push(DesktopAction::ToggleMinimize { app_id: app_id.clone() });
            let after = run(twice);
            prop_assert_eq!(
                before.window(&app_id).map(|w| w.minimized),
                after.window(&app_id).map(|w| w.minimized)
            );
        }
    }
}
