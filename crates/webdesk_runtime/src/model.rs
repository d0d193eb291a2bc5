//! Data model for the webdesk window manager.
//!
//! Window identity is stringly keyed: the id is stable for the lifetime of a
//! record and doubles as the fallback display title. Geometry lives in a
//! separate id-keyed map so that a permanent window keeps its position and
//! size across close/open cycles.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use webdesk_ui::IconName;

/// Height of the top chrome bar. Windows may never be dragged above it.
pub const TOP_BAR_HEIGHT_PX: i32 = 32;
/// Height of the bottom dock.
pub const DOCK_HEIGHT_PX: i32 = 64;
/// Extra breathing room kept below windows, above the dock.
pub const BOTTOM_BUFFER_PX: i32 = 16;
/// Viewport widths at or below this render the mobile layout.
pub const MOBILE_BREAKPOINT_PX: i32 = 768;
/// Minimum allowed managed window width.
pub const MIN_WINDOW_WIDTH: i32 = 200;
/// Minimum allowed managed window height.
pub const MIN_WINDOW_HEIGHT: i32 = 100;
/// Fallback window width before any user mutation.
pub const DEFAULT_WINDOW_WIDTH: i32 = 800;
/// Fallback window height before any user mutation.
pub const DEFAULT_WINDOW_HEIGHT: i32 = 600;
/// Delay between closing a non-permanent window and dropping its record,
/// giving the exit animation time to finish.
pub const WINDOW_EXIT_MS: u64 = 220;

/// Stable string identity of a window. Unique within the registry.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId(pub String);

impl WindowId {
    /// Borrows the raw id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for WindowId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Position and size of a window, in desktop-layer pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    /// Lower-bounds width and height.
    pub fn clamped_min(self, min_w: i32, min_h: i32) -> Self {
        Self {
            w: self.w.max(min_w),
            h: self.h.max(min_h),
            ..self
        }
    }
}

impl Default for WindowRect {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            w: DEFAULT_WINDOW_WIDTH,
            h: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

/// One logical application window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowRecord {
    /// Registry identity; also the fallback display title.
    pub id: WindowId,
    /// Whether the window is currently rendered.
    pub is_open: bool,
    /// Hidden-but-retained flag; meaningful only for non-permanent windows.
    pub is_minimized: bool,
    /// Permanent windows are only ever shown/hidden, never removed.
    pub is_permanent: bool,
    /// Marks a non-permanent window whose removal timer is running.
    pub is_closing: bool,
    /// Stacking order; strictly increases on activation.
    pub z_index: u32,
    /// Visual asset shown in chrome, dock, and icons.
    pub icon: IconName,
    /// Routing key for windows instantiated from a link or icon.
    pub url: Option<String>,
}

impl WindowRecord {
    /// Builds a permanent window record, initially hidden at `z = 1`.
    pub fn permanent(id: &str, icon: IconName) -> Self {
        Self {
            id: WindowId::from(id),
            is_open: false,
            is_minimized: false,
            is_permanent: true,
            is_closing: false,
            z_index: 1,
            icon,
            url: None,
        }
    }

    /// Builds a non-permanent window record for a route key, opened visible.
    pub fn linked(route: &str, icon: IconName) -> Self {
        Self {
            id: WindowId::from(route),
            is_open: true,
            is_minimized: false,
            is_permanent: false,
            is_closing: false,
            z_index: 1,
            icon,
            url: Some(route.to_string()),
        }
    }

    /// A window is visible when open and not minimized (and not mid-exit).
    pub fn is_visible(&self) -> bool {
        self.is_open && !self.is_minimized && !self.is_closing
    }
}

/// Pointer coordinates in client space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

/// The five resize affordances a window exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeEdge {
    Left,
    Right,
    Bottom,
    BottomLeft,
    BottomRight,
}

/// Ephemeral pointer-gesture state. At most one is active globally.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Interaction {
    /// No active gesture.
    #[default]
    Idle,
    /// A titlebar drag; `pointer_offset` preserves the grab point so the
    /// cursor-to-corner relationship is exact on every move.
    Dragging {
        window_id: WindowId,
        pointer_offset: PointerPosition,
    },
    /// An edge/corner resize anchored at the grab-time geometry.
    Resizing {
        window_id: WindowId,
        edge: ResizeEdge,
        anchor: WindowRect,
    },
}

impl Interaction {
    /// Whether this gesture targets `window_id`.
    pub fn targets(&self, window_id: &WindowId) -> bool {
        match self {
            Self::Idle => false,
            Self::Dragging { window_id: id, .. } | Self::Resizing { window_id: id, .. } => {
                id == window_id
            }
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

/// Ambient viewport dimensions, refreshed on resize events only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportSize {
    pub width: i32,
    pub height: i32,
}

impl Default for ViewportSize {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 800,
        }
    }
}

/// Session-persisted shell preferences. Window geometry and stacking are
/// intentionally not part of this; they reset every session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellPrefs {
    /// Opaque wallpaper preset token; resolved by [`crate::wallpaper`].
    pub wallpaper_id: String,
    /// Opaque language token; string lookup is an external collaborator.
    pub language: String,
}

impl Default for ShellPrefs {
    fn default() -> Self {
        Self {
            wallpaper_id: "aurora".to_string(),
            language: "en".to_string(),
        }
    }
}

/// Authoritative shared state for the desktop shell.
///
/// All mutation flows through [`crate::reducer::reduce_desktop`]; rendering
/// consumers take snapshot reads only.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DesktopState {
    /// Window registry in insertion order (insertion order breaks z ties).
    pub windows: Vec<WindowRecord>,
    /// Per-window geometry, created lazily on first mutation.
    pub geometry: BTreeMap<WindowId, WindowRect>,
    /// Last observed viewport dimensions.
    pub viewport: ViewportSize,
    /// Persisted shell preferences.
    pub prefs: ShellPrefs,
    /// Whether the search overlay is shown.
    pub search_open: bool,
}

impl DesktopState {
    /// Looks up a window record by id.
    pub fn window(&self, window_id: &WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| &w.id == window_id)
    }

    /// Mutable window lookup; `None` for unknown ids (callers treat that as
    /// a no-op, never an error).
    pub fn window_mut(&mut self, window_id: &WindowId) -> Option<&mut WindowRecord> {
        self.windows.iter_mut().find(|w| &w.id == window_id)
    }

    /// Stored geometry for a window, or the manager fallback before the
    /// first position/size mutation.
    pub fn geometry_or_default(&self, window_id: &WindowId) -> WindowRect {
        self.geometry
            .get(window_id)
            .copied()
            .unwrap_or_default()
    }

    /// The id of the top-most visible window, if any.
    pub fn top_window_id(&self) -> Option<WindowId> {
        crate::window_manager::stacking_order(self)
            .into_iter()
            .filter(|w| w.is_visible())
            .next_back()
            .map(|w| w.id)
    }
}
