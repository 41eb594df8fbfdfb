use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identity of a managed window, unique among open windows.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId(pub String);

impl WindowId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for WindowId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<&str> for WindowId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
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
    pub fn right(self) -> i32 {
        self.x + self.w
    }

    pub fn bottom(self) -> i32 {
        self.y + self.h
    }

    pub fn center(self) -> PointerPosition {
        PointerPosition {
            x: self.x + self.w / 2,
            y: self.y + self.h / 2,
        }
    }
}

/// Size of the browser viewport the desktop is rendered into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowState {
    Normal,
    /// Hidden in the taskbar. `fullscreen` records the state to return to on restore.
    Minimized { fullscreen: bool },
    Fullscreen,
}

impl WindowState {
    pub fn is_minimized(self) -> bool {
        matches!(self, Self::Minimized { .. })
    }

    pub fn is_fullscreen(self) -> bool {
        matches!(self, Self::Fullscreen)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Minimized { .. } => "minimized",
            Self::Fullscreen => "fullscreen",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub id: WindowId,
    pub title: String,
    pub rect: WindowRect,
    pub state: WindowState,
    /// Geometry captured right before entering fullscreen.
    pub saved_rect: Option<WindowRect>,
    pub z_order: u64,
    /// Cached from the manager's stack; see [`crate::window_manager::WindowManager::focused_window_id`].
    pub is_focused: bool,
}

impl WindowRecord {
    pub fn is_visible(&self) -> bool {
        !self.state.is_minimized()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResizeEdge {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl ResizeEdge {
    pub const ALL: [ResizeEdge; 8] = [
        ResizeEdge::North,
        ResizeEdge::South,
        ResizeEdge::East,
        ResizeEdge::West,
        ResizeEdge::NorthEast,
        ResizeEdge::NorthWest,
        ResizeEdge::SouthEast,
        ResizeEdge::SouthWest,
    ];

    pub fn touches_north(self) -> bool {
        matches!(self, Self::North | Self::NorthEast | Self::NorthWest)
    }

    pub fn touches_south(self) -> bool {
        matches!(self, Self::South | Self::SouthEast | Self::SouthWest)
    }

    pub fn touches_east(self) -> bool {
        matches!(self, Self::East | Self::NorthEast | Self::SouthEast)
    }

    pub fn touches_west(self) -> bool {
        matches!(self, Self::West | Self::NorthWest | Self::SouthWest)
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::North => "edge-n",
            Self::South => "edge-s",
            Self::East => "edge-e",
            Self::West => "edge-w",
            Self::NorthEast => "edge-ne",
            Self::NorthWest => "edge-nw",
            Self::SouthEast => "edge-se",
            Self::SouthWest => "edge-sw",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub window_id: WindowId,
    /// Pointer position relative to the window origin at drag start.
    pub offset: PointerPosition,
    /// Press point on a fullscreen window. Fullscreen is only left once the pointer travels
    /// past the drag threshold, so a titlebar double-click still toggles.
    pub fullscreen_press: Option<PointerPosition>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeSession {
    pub window_id: WindowId,
    pub edge: ResizeEdge,
    pub pointer_start: PointerPosition,
    pub rect_start: WindowRect,
}

/// Pointer interaction in progress. Dragging and resizing never overlap.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    Dragging(DragSession),
    Resizing(ResizeSession),
}

impl InteractionState {
    pub fn window_id(&self) -> Option<&WindowId> {
        match self {
            Self::Idle => None,
            Self::Dragging(session) => Some(&session.window_id),
            Self::Resizing(session) => Some(&session.window_id),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

/// Row shape consumed by the taskbar and the `windows` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSummary {
    pub id: WindowId,
    pub title: String,
    pub state: WindowState,
    pub minimized: bool,
    pub focused: bool,
}
