//! Small SVG glyph catalog for desktop icons and window chrome.
//!
//! Window-control paths come from Fluent UI System Icons (regular 24px); the app glyphs are
//! drawn on the same 24px grid so every icon shares one renderer.

use leptos::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Semantic icon identifiers used by the catalog and shell components.
pub enum IconName {
    /// "My Computer"-style monitor.
    Computer,
    /// Game controller.
    Joystick,
    /// Text document.
    Notepad,
    /// Window minimize control.
    WindowMinimize,
    /// Close control.
    Dismiss,
}

impl IconName {
    /// Stable token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Computer => "computer",
            Self::Joystick => "joystick",
            Self::Notepad => "notepad",
            Self::WindowMinimize => "window-minimize",
            Self::Dismiss => "dismiss",
        }
    }

    fn svg_body(self) -> &'static str {
        match self {
            Self::Computer => {
                r#"<path d="M4.75 3A2.75 2.75 0 0 0 2 5.75v8.5A2.75 2.75 0 0 0 4.75 17H9v2.5H7.75a.75.75 0 0 0 0 1.5h8.5a.75.75 0 0 0 0-1.5H15V17h4.25A2.75 2.75 0 0 0 22 14.25v-8.5A2.75 2.75 0 0 0 19.25 3H4.75ZM13.5 17v2.5h-3V17h3ZM3.5 5.75c0-.69.56-1.25 1.25-1.25h14.5c.69 0 1.25.56 1.25 1.25v8.5c0 .69-.56 1.25-1.25 1.25H4.75c-.69 0-1.25-.56-1.25-1.25v-8.5Z"/>"#
            }
            Self::Joystick => {
                r#"<path d="M7.5 7A5.5 5.5 0 0 0 2 12.5v1A3.5 3.5 0 0 0 5.5 17c1.2 0 2.1-.6 2.8-1.5h7.4c.7.9 1.6 1.5 2.8 1.5a3.5 3.5 0 0 0 3.5-3.5v-1A5.5 5.5 0 0 0 16.5 7h-9ZM3.5 12.5a4 4 0 0 1 4-4h9a4 4 0 0 1 4 4v1a2 2 0 0 1-2 2c-.7 0-1.2-.4-1.7-1.1a.75.75 0 0 0-.6-.4H7.8a.75.75 0 0 0-.6.4c-.5.7-1 1.1-1.7 1.1a2 2 0 0 1-2-2v-1ZM8 10a.75.75 0 0 0-.75.75v1h-1a.75.75 0 0 0 0 1.5h1v1a.75.75 0 0 0 1.5 0v-1h1a.75.75 0 0 0 0-1.5h-1v-1A.75.75 0 0 0 8 10Zm8.5 1.5a1 1 0 1 0 0-2 1 1 0 0 0 0 2Zm-1 2a1 1 0 1 0 0-2 1 1 0 0 0 0 2Z"/>"#
            }
            Self::Notepad => {
                r#"<path d="M8.75 11.5a.75.75 0 0 0 0 1.5h6.5a.75.75 0 0 0 0-1.5h-6.5Zm0 2.75a.75.75 0 0 0 0 1.5h6.5a.75.75 0 0 0 0-1.5h-6.5Zm0 2.75a.75.75 0 0 0 0 1.5h6.5a.75.75 0 0 0 0-1.5h-6.5Zm4.84-14.41L19.4 8.4A2 2 0 0 1 20 9.83V20a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V4c0-1.1.9-2 2-2h6.17c.52 0 1.05.22 1.42.59ZM18 20.5a.5.5 0 0 0 .5-.5V10H14a2 2 0 0 1-2-2V3.5H6a.5.5 0 0 0-.5.5v16c0 .27.22.5.5.5h12Zm-.62-12L13.5 4.62V8c0 .28.22.5.5.5h3.38Z"/>"#
            }
            Self::WindowMinimize => {
                r#"<path d="M3.75 12.5h16.5a.75.75 0 0 0 0-1.5H3.75a.75.75 0 0 0 0 1.5Z"/>"#
            }
            Self::Dismiss => {
                r#"<path d="m4.4 4.55.07-.08a.75.75 0 0 1 .98-.07l.08.07L12 10.94l6.47-6.47a.75.75 0 1 1 1.06 1.06L13.06 12l6.47 6.47c.27.27.3.68.07.98l-.07.08a.75.75 0 0 1-.98.07l-.08-.07L12 13.06l-6.47 6.47a.75.75 0 0 1-1.06-1.06L10.94 12 4.47 5.53a.75.75 0 0 1-.07-.98l.07-.08-.07.08Z"/>"#
            }
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconSize {
    /// 12px window-control glyph.
    Xs,
    /// 16px taskbar/title bar icon.
    #[default]
    Sm,
    /// 32px desktop icon.
    Lg,
}

impl IconSize {
    pub const fn px(self) -> u16 {
        match self {
            Self::Xs => 12,
            Self::Sm => 16,
            Self::Lg => 32,
        }
    }

    pub const fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Lg => "lg",
        }
    }
}

#[component]
/// Renders an icon from the shell glyph catalog.
pub fn Icon(
    icon: IconName,
    #[prop(default = IconSize::Sm)] size: IconSize,
) -> impl IntoView {
    let size_px = size.px().to_string();

    view! {
        <svg
            class="ui-icon"
            data-icon=icon.token()
            data-size=size.token()
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            width=size_px.clone()
            height=size_px
            fill="currentColor"
            focusable="false"
            aria-hidden="true"
            inner_html=icon.svg_body()
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_icon_tokens_match_serde_names() {
        for icon in [IconName::Computer, IconName::Joystick, IconName::Notepad] {
            let raw = serde_json::to_string(&icon).expect("serialize");
            assert_eq!(raw, format!("\"{}\"", icon.token()));
        }
    }
}
