//! Host-side helpers for executing reducer effects and querying browser environment state.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

use crate::{
    model::{AppId, WindowRect},
    reducer::RuntimeEffect,
};

const FALLBACK_VIEWPORT_WIDTH: i32 = 1024;
const FALLBACK_VIEWPORT_HEIGHT: i32 = 768;

/// DOM id of the window element rendered for `app_id`.
pub fn window_dom_id(app_id: &AppId) -> String {
    format!("desktop-window-{app_id}")
}

/// DOM id of the taskbar button rendered for `app_id`.
pub fn taskbar_button_dom_id(app_id: &AppId) -> String {
    format!("taskbar-button-{app_id}")
}

#[derive(Clone, Copy, Debug, Default)]
/// Browser host used by the desktop runtime for side effects and viewport queries.
pub struct DesktopHostContext;

impl DesktopHostContext {
    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::FocusWindow(app_id) => self.focus_window(&app_id),
        }
    }

    /// Moves keyboard focus onto a window element after the current render settles.
    pub fn focus_window(&self, app_id: &AppId) {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            let Some(document) = window.document() else {
                return;
            };
            let Some(element) = document.get_element_by_id(&window_dom_id(app_id)) else {
                return;
            };
            let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() else {
                return;
            };
            let callback = Closure::once_into_js(move || {
                let _ = element.focus();
            });
            let _ = window
                .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), 0);
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = app_id;
    }

    /// Returns the desktop region windows may occupy (the viewport minus the taskbar).
    pub fn desktop_viewport_rect(&self, taskbar_height_px: i32) -> WindowRect {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let width = window
                    .inner_width()
                    .ok()
                    .and_then(|value| value.as_f64())
                    .map(|value| value as i32)
                    .unwrap_or(FALLBACK_VIEWPORT_WIDTH);
                let height = window
                    .inner_height()
                    .ok()
                    .and_then(|value| value.as_f64())
                    .map(|value| value as i32)
                    .unwrap_or(FALLBACK_VIEWPORT_HEIGHT);

                return WindowRect {
                    x: 0,
                    y: 0,
                    w: width.max(320),
                    h: (height - taskbar_height_px).max(200),
                };
            }
        }

        WindowRect {
            x: 0,
            y: 0,
            w: FALLBACK_VIEWPORT_WIDTH,
            h: FALLBACK_VIEWPORT_HEIGHT - taskbar_height_px,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_viewport_excludes_taskbar() {
        let rect = DesktopHostContext.desktop_viewport_rect(28);
        assert_eq!(rect.w, 1024);
        assert_eq!(rect.h, 740);
    }

    #[test]
    fn dom_ids_are_derived_from_app_id() {
        let app_id = AppId::from("wordle");
        assert_eq!(window_dom_id(&app_id), "desktop-window-wordle");
        assert_eq!(taskbar_button_dom_id(&app_id), "taskbar-button-wordle");
    }
}
