use std::fmt;

use serde::{Deserialize, Serialize};

use crate::apps::AppDescriptor;

pub const TASKBAR_HEIGHT_PX: i32 = 28;
pub const MIN_WINDOW_WIDTH: i32 = 160;
pub const MIN_WINDOW_HEIGHT: i32 = 120;
pub const CASCADE_ORIGIN_X: i32 = 120;
pub const CASCADE_ORIGIN_Y: i32 = 32;
pub const CASCADE_STEP: i32 = 24;

/// Stable identifier of a launchable application (`"about"`, `"wordle"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppId(pub String);

impl AppId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AppId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    pub fn clamped_min(self, min_w: i32, min_h: i32) -> Self {
        Self {
            w: self.w.max(min_w),
            h: self.h.max(min_h),
            ..self
        }
    }

    /// Keeps the rect's origin inside `boundary` so the window cannot be dragged off the desktop.
    ///
    /// A rect larger than the boundary is pinned to the boundary's top-left corner.
    pub fn clamped_within(self, boundary: WindowRect) -> Self {
        let max_x = (boundary.x + boundary.w - self.w).max(boundary.x);
        let max_y = (boundary.y + boundary.h - self.h).max(boundary.y);
        Self {
            x: self.x.clamp(boundary.x, max_x),
            y: self.y.clamp(boundary.y, max_y),
            ..self
        }
    }

    pub fn right(self) -> i32 {
        self.x + self.w
    }

    pub fn bottom(self) -> i32 {
        self.y + self.h
    }
}

/// The composite state a window is rendered in, derived from its three flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowPhase {
    /// No window rendered, no taskbar entry.
    Closed,
    /// Visible and focused.
    Active,
    /// Visible, another window (or none) holds focus.
    Inactive,
    /// Hidden, taskbar entry still present.
    Minimized,
}

/// Open/minimized/active flags and geometry for one application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowState {
    pub app_id: AppId,
    pub open: bool,
    pub minimized: bool,
    pub active: bool,
    pub rect: WindowRect,
    pub z_index: u32,
}

impl WindowState {
    pub fn closed(app_id: AppId, rect: WindowRect) -> Self {
        Self {
            app_id,
            open: false,
            minimized: false,
            active: false,
            rect,
            z_index: 0,
        }
    }

    pub fn phase(&self) -> WindowPhase {
        match (self.open, self.minimized, self.active) {
            (false, _, _) => WindowPhase::Closed,
            (true, true, _) => WindowPhase::Minimized,
            (true, false, true) => WindowPhase::Active,
            (true, false, false) => WindowPhase::Inactive,
        }
    }

    /// Whether the desktop should draw this window.
    pub fn is_visible(&self) -> bool {
        self.open && !self.minimized
    }
}

/// Immutable desktop record; every reducer action produces a fresh copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopState {
    pub windows: Vec<WindowState>,
    pub next_z_index: u32,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self::from_registry(crate::apps::app_registry())
    }
}

impl DesktopState {
    /// Seeds one closed [`WindowState`] per descriptor, cascading initial positions.
    pub fn from_registry(apps: &[AppDescriptor]) -> Self {
        let windows = apps
            .iter()
            .enumerate()
            .map(|(idx, app)| {
                let step = idx as i32 * CASCADE_STEP;
                let rect = WindowRect {
                    x: CASCADE_ORIGIN_X + step,
                    y: CASCADE_ORIGIN_Y + step,
                    w: app.preferred_width,
                    h: app.preferred_height,
                };
                WindowState::closed(app.id.clone(), rect)
            })
            .collect();
        Self {
            windows,
            next_z_index: 1,
        }
    }

    pub fn window(&self, app_id: &AppId) -> Option<&WindowState> {
        self.windows.iter().find(|w| &w.app_id == app_id)
    }

    pub(crate) fn window_mut(&mut self, app_id: &AppId) -> Option<&mut WindowState> {
        self.windows.iter_mut().find(|w| &w.app_id == app_id)
    }

    pub fn active_app_id(&self) -> Option<&AppId> {
        self.windows.iter().find(|w| w.active).map(|w| &w.app_id)
    }

    /// Windows with a taskbar entry, in registry order.
    pub fn open_windows(&self) -> impl Iterator<Item = &WindowState> {
        self.windows.iter().filter(|w| w.open)
    }

    pub fn phase_of(&self, app_id: &AppId) -> Option<WindowPhase> {
        self.window(app_id).map(WindowState::phase)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResizeEdge {
    East,
    South,
    SouthEast,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub app_id: AppId,
    pub pointer_start: PointerPosition,
    pub rect_start: WindowRect,
    pub boundary: WindowRect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeSession {
    pub app_id: AppId,
    pub edge: ResizeEdge,
    pub pointer_start: PointerPosition,
    pub rect_start: WindowRect,
    pub boundary: WindowRect,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub dragging: Option<DragSession>,
    pub resizing: Option<ResizeSession>,
}

/// Explicit update for a window's `open` flag, issued by the window's own chrome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenUpdate {
    SetOpen(AppId, bool),
    ToggleOpen(AppId),
}

impl OpenUpdate {
    pub fn app_id(&self) -> &AppId {
        match self {
            Self::SetOpen(app_id, _) | Self::ToggleOpen(app_id) => app_id,
        }
    }
}
