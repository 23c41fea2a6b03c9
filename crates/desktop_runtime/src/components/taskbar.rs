use std::time::Duration;

use super::*;
use crate::{host::taskbar_button_dom_id, model::WindowState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TaskbarClockSnapshot {
    hour: u32,
    minute: u32,
}

impl TaskbarClockSnapshot {
    fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                hour: date.get_hours(),
                minute: date.get_minutes(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self { hour: 0, minute: 0 }
        }
    }

    /// Twelve-hour clock text in the classic tray style, e.g. `"9:05 PM"`.
    fn label(self) -> String {
        let suffix = if self.hour < 12 { "AM" } else { "PM" };
        let hour = match self.hour % 12 {
            0 => 12,
            hour => hour,
        };
        format!("{hour}:{:02} {suffix}", self.minute)
    }
}

/// Whether a taskbar button should render pressed: focused and on screen.
fn taskbar_button_pressed(window: &WindowState) -> bool {
    window.active && !window.minimized
}

#[component]
pub(super) fn Taskbar() -> impl IntoView {
    view! {
        <footer
            class="taskbar"
            role="toolbar"
            aria-label="Taskbar"
            style=format!("height:{TASKBAR_HEIGHT_PX}px;")
        >
            <div class="taskbar-running">
                {apps::app_registry()
                    .iter()
                    .map(|app| view! { <TaskbarButton app=app /> })
                    .collect_view()}
            </div>
            <TaskbarClock />
        </footer>
    }
}

#[component]
fn TaskbarButton(app: &'static AppDescriptor) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let window = {
        let app_id = app.id.clone();
        Signal::derive(move || runtime.state.get().window(&app_id).cloned())
    };
    let is_open = move || window.get().map(|w| w.open).unwrap_or(false);
    let pressed = move || {
        window
            .get()
            .map(|w| taskbar_button_pressed(&w))
            .unwrap_or(false)
    };
    let toggle = move |_| {
        runtime.dispatch_action(DesktopAction::ToggleTaskbarEntry {
            app_id: app.id.clone(),
        });
    };

    view! {
        <Show when=is_open fallback=|| ()>
            <button
                id=taskbar_button_dom_id(&app.id)
                class="taskbar-button"
                class:pressed=pressed
                aria-pressed=move || pressed().to_string()
                title=app.label.as_str()
                on:click=toggle
            >
                <Icon icon=app.icon size=IconSize::Sm />
                <span class="taskbar-button-label">{app.label.as_str()}</span>
            </button>
        </Show>
    }
}

#[component]
fn TaskbarClock() -> impl IntoView {
    let clock_now = create_rw_signal(TaskbarClockSnapshot::now());

    if let Ok(interval) = set_interval_with_handle(
        move || clock_now.set(TaskbarClockSnapshot::now()),
        Duration::from_secs(1),
    ) {
        on_cleanup(move || interval.clear());
    }

    view! {
        <div class="taskbar-tray" aria-live="off">
            <time class="taskbar-clock">{move || clock_now.get().label()}</time>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn clock_label_uses_twelve_hour_format() {
        let label = |hour, minute| TaskbarClockSnapshot { hour, minute }.label();
        assert_eq!(label(0, 0), "12:00 AM");
        assert_eq!(label(9, 5), "9:05 AM");
        assert_eq!(label(12, 30), "12:30 PM");
        assert_eq!(label(21, 59), "9:59 PM");
    }

    #[test]
    fn minimized_active_window_is_not_pressed() {
        let mut window = WindowState::closed(
            AppId::from("wordle"),
            WindowRect {
                x: 0,
                y: 0,
                w: 400,
                h: 350,
            },
        );
        window.open = true;
        window.active = true;
        assert!(taskbar_button_pressed(&window));

        window.minimized = true;
        assert!(!taskbar_button_pressed(&window));
    }
}
