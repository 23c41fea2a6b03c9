//! Desktop shell UI composition: icon grid, window layer, and taskbar.

mod taskbar;
mod window;

use leptos::*;

use self::{
    taskbar::Taskbar,
    window::{ChromeGesture, DesktopWindow},
};

use crate::{
    apps::{self, AppDescriptor},
    icons::{Icon, IconSize},
    model::{AppId, OpenUpdate, PointerPosition, WindowRect, TASKBAR_HEIGHT_PX},
    reducer::DesktopAction,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

fn end_active_pointer_interaction(runtime: DesktopRuntimeContext) {
    let interaction = runtime.interaction.get_untracked();
    if interaction.dragging.is_some() {
        runtime.dispatch_action(DesktopAction::EndMove);
    }
    if interaction.resizing.is_some() {
        runtime.dispatch_action(DesktopAction::EndResize);
    }
}

#[component]
/// Renders the full desktop shell: icons, open windows, and the taskbar.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let selected_icon = create_rw_signal(None::<AppId>);
    let viewport = create_rw_signal(
        runtime
            .host
            .get_value()
            .desktop_viewport_rect(TASKBAR_HEIGHT_PX),
    );

    let resize_listener = window_event_listener(ev::resize, move |_| {
        viewport.set(
            runtime
                .host
                .get_value()
                .desktop_viewport_rect(TASKBAR_HEIGHT_PX),
        );
    });
    on_cleanup(move || resize_listener.remove());

    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        let pointer = pointer_from_pointer_event(&ev);
        let interaction = runtime.interaction.get_untracked();

        if interaction.dragging.is_some() {
            runtime.dispatch_action(DesktopAction::UpdateMove { pointer });
        }
        if interaction.resizing.is_some() {
            runtime.dispatch_action(DesktopAction::UpdateResize { pointer });
        }
    };
    let on_pointer_end = move |_| end_active_pointer_interaction(runtime);

    view! {
        <div
            id="desktop-shell-root"
            class="desktop-shell"
            tabindex="-1"
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_end
            on:pointercancel=on_pointer_end
        >
            <div
                class="desktop-surface"
                style=move || format!("height:{}px;", viewport.get().h)
                on:mousedown=move |_| selected_icon.set(None)
            >
                <ul class="desktop-icons" role="listbox" aria-label="Desktop">
                    {apps::app_registry()
                        .iter()
                        .map(|app| view! { <DesktopIcon app=app selected_icon=selected_icon /> })
                        .collect_view()}
                </ul>

                <div class="desktop-window-layer">
                    {apps::app_registry()
                        .iter()
                        .map(|app| view! { <AppWindow app=app drag_boundary=viewport.into() /> })
                        .collect_view()}
                </div>
            </div>

            <Taskbar />
        </div>
    }
}

#[component]
fn DesktopIcon(
    app: &'static AppDescriptor,
    selected_icon: RwSignal<Option<AppId>>,
) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let app_id = app.id.clone();
    let is_selected = {
        let app_id = app_id.clone();
        Signal::derive(move || selected_icon.get().as_ref() == Some(&app_id))
    };
    let select = {
        let app_id = app_id.clone();
        move |ev: web_sys::MouseEvent| {
            ev.stop_propagation();
            selected_icon.set(Some(app_id.clone()));
        }
    };
    let open = {
        let app_id = app_id.clone();
        move || {
            runtime.dispatch_action(DesktopAction::OpenApp {
                app_id: app_id.clone(),
            })
        }
    };
    let open_on_key = {
        let open = open.clone();
        move |ev: web_sys::KeyboardEvent| {
            if is_activation_key(&ev.key()) {
                ev.prevent_default();
                open();
            }
        }
    };

    view! {
        <li role="none">
            <button
                class="desktop-icon"
                class:selected=is_selected
                role="option"
                aria-selected=move || is_selected.get().to_string()
                on:mousedown=select
                on:dblclick=move |_| open()
                on:keydown=open_on_key
            >
                <Icon icon=app.icon size=IconSize::Lg />
                <span class="desktop-icon-label">{app.label.as_str()}</span>
            </button>
        </li>
    }
}

#[component]
fn AppWindow(app: &'static AppDescriptor, drag_boundary: Signal<WindowRect>) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let window = {
        let app_id = app.id.clone();
        Signal::derive(move || runtime.state.get().window(&app_id).cloned())
    };

    let on_open_change = Callback::new(move |update: OpenUpdate| {
        runtime.dispatch_action(DesktopAction::UpdateOpen(update));
    });
    let on_activate = Callback::new(move |_: ()| {
        runtime.dispatch_action(DesktopAction::ActivateApp {
            app_id: app.id.clone(),
        });
    });
    let on_minimize_restore = Callback::new(move |_: ()| {
        runtime.dispatch_action(DesktopAction::ToggleMinimize {
            app_id: app.id.clone(),
        });
    });
    let on_gesture = Callback::new(move |gesture: ChromeGesture| {
        let app_id = app.id.clone();
        let action = match gesture {
            ChromeGesture::Move { pointer, boundary } => DesktopAction::BeginMove {
                app_id,
                pointer,
                boundary,
            },
            ChromeGesture::Resize {
                edge,
                pointer,
                boundary,
            } => DesktopAction::BeginResize {
                app_id,
                edge,
                pointer,
                boundary,
            },
        };
        runtime.dispatch_action(action);
    });

    view! {
        <DesktopWindow
            app_id=app.id.clone()
            title=app.label.as_str()
            icon=app.icon
            resizable=app.resizable
            drag_boundary=drag_boundary
            window=window
            on_open_change=on_open_change
            on_activate=on_activate
            on_minimize_restore=on_minimize_restore
            on_gesture=on_gesture
        >
            {apps::render_app_contents(app.content)}
        </DesktopWindow>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activation_keys_match_button_semantics() {
        assert!(is_activation_key("Enter"));
        assert!(is_activation_key(" "));
        assert!(!is_activation_key("Escape"));
        assert!(!is_activation_key("a"));
    }
}
