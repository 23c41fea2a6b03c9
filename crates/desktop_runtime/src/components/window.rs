use super::*;
use crate::{
    host::window_dom_id,
    icons::IconName,
    model::{ResizeEdge, WindowState},
};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

fn is_primary_press(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn window_style(window: &WindowState) -> String {
    format!(
        "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
        window.rect.x, window.rect.y, window.rect.w, window.rect.h, window.z_index
    )
}

fn resize_edge_class(edge: ResizeEdge) -> &'static str {
    match edge {
        ResizeEdge::East => "edge-e",
        ResizeEdge::South => "edge-s",
        ResizeEdge::SouthEast => "edge-se",
    }
}

/// Pointer gestures the window chrome reports to its owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ChromeGesture {
    Move {
        pointer: PointerPosition,
        boundary: WindowRect,
    },
    Resize {
        edge: ResizeEdge,
        pointer: PointerPosition,
        boundary: WindowRect,
    },
}

#[component]
/// Draggable, resizable window chrome.
///
/// The window does not own any state: it renders from `window` and reports everything the user
/// does through the callbacks.
pub(super) fn DesktopWindow(
    app_id: AppId,
    title: &'static str,
    icon: IconName,
    resizable: bool,
    drag_boundary: Signal<WindowRect>,
    window: Signal<Option<WindowState>>,
    on_open_change: Callback<OpenUpdate>,
    on_activate: Callback<()>,
    on_minimize_restore: Callback<()>,
    on_gesture: Callback<ChromeGesture>,
    children: ChildrenFn,
) -> impl IntoView {
    let dom_id = window_dom_id(&app_id);
    let is_open = move || window.get().map(|w| w.open).unwrap_or(false);

    let focus = move |_: web_sys::PointerEvent| {
        let should_focus = window.get_untracked().map(|w| !w.active).unwrap_or(false);
        if should_focus {
            on_activate.call(());
        }
    };
    let begin_move = move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        on_gesture.call(ChromeGesture::Move {
            pointer: pointer_from_pointer_event(&ev),
            boundary: drag_boundary.get_untracked(),
        });
    };
    let close = {
        let app_id = app_id.clone();
        move |ev: web_sys::MouseEvent| {
            stop_mouse_event(&ev);
            on_open_change.call(OpenUpdate::ToggleOpen(app_id.clone()));
        }
    };

    view! {
        <Show when=is_open fallback=|| ()>
            <section
                id=dom_id.clone()
                class="desktop-window"
                class:active=move || window.get().map(|w| w.active).unwrap_or(false)
                hidden=move || window.get().map(|w| w.minimized).unwrap_or(false)
                style=move || window.get().map(|w| window_style(&w)).unwrap_or_default()
                tabindex="-1"
                role="dialog"
                aria-label=title
                on:pointerdown=focus
            >
                <header class="titlebar" on:pointerdown=begin_move>
                    <div class="titlebar-title">
                        <Icon icon=icon size=IconSize::Sm />
                        <span>{title}</span>
                    </div>
                    <div class="titlebar-controls">
                        <button
                            aria-label="Minimize window"
                            on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                            on:click=move |ev| {
                                stop_mouse_event(&ev);
                                on_minimize_restore.call(());
                            }
                        >
                            <Icon icon=IconName::WindowMinimize size=IconSize::Xs />
                        </button>
                        <button
                            aria-label="Close window"
                            on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                            on:click=close.clone()
                        >
                            <Icon icon=IconName::Dismiss size=IconSize::Xs />
                        </button>
                    </div>
                </header>
                <div class="window-body">{children()}</div>
                {resizable
                    .then(|| {
                        view! {
                            <WindowResizeHandle edge=ResizeEdge::East drag_boundary on_gesture />
                            <WindowResizeHandle edge=ResizeEdge::South drag_boundary on_gesture />
                            <WindowResizeHandle
                                edge=ResizeEdge::SouthEast
                                drag_boundary
                                on_gesture
                            />
                        }
                    })}
            </section>
        </Show>
    }
}

#[component]
fn WindowResizeHandle(
    edge: ResizeEdge,
    drag_boundary: Signal<WindowRect>,
    on_gesture: Callback<ChromeGesture>,
) -> impl IntoView {
    let class_name = format!("window-resize-handle {}", resize_edge_class(edge));

    let on_pointerdown = move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        on_gesture.call(ChromeGesture::Resize {
            edge,
            pointer: pointer_from_pointer_event(&ev),
            boundary: drag_boundary.get_untracked(),
        });
    };

    view! {
        <div
            class=class_name
            aria-hidden="true"
            on:pointerdown=on_pointerdown
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_style_places_window_by_rect_and_stack_order() {
        let mut window = WindowState::closed(
            AppId::from("about"),
            WindowRect {
                x: 120,
                y: 32,
                w: 400,
                h: 350,
            },
        );
        window.z_index = 4;

        assert_eq!(
            window_style(&window),
            "left:120px;top:32px;width:400px;height:350px;z-index:4;"
        );
    }
}
