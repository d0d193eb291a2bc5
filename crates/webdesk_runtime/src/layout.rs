//! Layout math: viewport mode detection and effective window geometry.
//!
//! Geometry mutation (drag, resize, viewport reclamp) always happens on the
//! stored map; this module decides what actually reaches the screen. In
//! mobile mode the stored geometry is ignored entirely and left untouched,
//! so flipping modes back and forth never corrupts a desktop layout.

use crate::model::{
    DesktopState, ViewportSize, WindowRect, BOTTOM_BUFFER_PX, DOCK_HEIGHT_PX, MIN_WINDOW_HEIGHT,
    MIN_WINDOW_WIDTH, MOBILE_BREAKPOINT_PX, TOP_BAR_HEIGHT_PX,
};

const MOBILE_WINDOW_INSET_PX: i32 = 8;

/// The desktop/mobile layout branch, derived from viewport width only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportMode {
    Desktop,
    Mobile,
}

/// Derives the layout mode. Recomputed on resize events, never per frame.
pub fn viewport_mode(viewport: ViewportSize) -> ViewportMode {
    if viewport.width <= MOBILE_BREAKPOINT_PX {
        ViewportMode::Mobile
    } else {
        ViewportMode::Desktop
    }
}

/// Tallest a window may be: the viewport minus dock and bottom buffer.
pub fn max_window_height(viewport: ViewportSize) -> i32 {
    (viewport.height - DOCK_HEIGHT_PX - BOTTOM_BUFFER_PX).max(MIN_WINDOW_HEIGHT)
}

/// Vertical floor: no window top edge above the chrome bar.
pub fn floor_y(y: i32) -> i32 {
    y.max(TOP_BAR_HEIGHT_PX)
}

/// Applies the desktop-mode storage clamp: vertical floor plus the viewport
/// height ceiling. Width is never clamped here; only user resizes change it.
pub fn clamp_stored(rect: WindowRect, viewport: ViewportSize) -> WindowRect {
    WindowRect {
        y: floor_y(rect.y),
        h: rect.h.min(max_window_height(viewport)),
        ..rect
    }
    .clamped_min(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)
}

/// Computes the on-screen geometry for a window.
///
/// Mobile mode overrides position and size with the fixed near-fullscreen
/// panel between top bar and dock; the stored rect is accepted but unused.
pub fn effective_rect(mode: ViewportMode, stored: WindowRect, viewport: ViewportSize) -> WindowRect {
    match mode {
        ViewportMode::Mobile => WindowRect {
            x: MOBILE_WINDOW_INSET_PX,
            y: TOP_BAR_HEIGHT_PX + MOBILE_WINDOW_INSET_PX,
            w: viewport.width - 2 * MOBILE_WINDOW_INSET_PX,
            h: viewport.height - TOP_BAR_HEIGHT_PX - DOCK_HEIGHT_PX - 2 * MOBILE_WINDOW_INSET_PX,
        }
        .clamped_min(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT),
        ViewportMode::Desktop => WindowRect {
            h: stored.h.min(max_window_height(viewport)),
            ..stored
        },
    }
}

/// Reclamps the stored geometry of every open window after a viewport
/// resize: height against the new maximum, top edge against the floor.
///
/// Skipped entirely in mobile mode, where stored geometry is inert; the
/// clamp runs against the desktop viewport once the mode flips back.
pub fn reclamp_open_windows(state: &mut DesktopState) {
    if viewport_mode(state.viewport) == ViewportMode::Mobile {
        return;
    }
    let viewport = state.viewport;
    let open_ids: Vec<_> = state
        .windows
        .iter()
        .filter(|w| w.is_open)
        .map(|w| w.id.clone())
        .collect();
    for id in open_ids {
        if let Some(rect) = state.geometry.get_mut(&id) {
            *rect = clamp_stored(*rect, viewport);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn viewport(width: i32, height: i32) -> ViewportSize {
        ViewportSize { width, height }
    }

    #[test]
    fn mode_flips_exactly_at_breakpoint() {
        assert_eq!(viewport_mode(viewport(768, 900)), ViewportMode::Mobile);
        assert_eq!(viewport_mode(viewport(769, 900)), ViewportMode::Desktop);
        assert_eq!(viewport_mode(viewport(320, 600)), ViewportMode::Mobile);
    }

    #[test]
    fn mobile_rect_ignores_stored_geometry() {
        let stored = WindowRect {
            x: 400,
            y: 250,
            w: 640,
            h: 480,
        };
        let vp = viewport(390, 844);

        let a = effective_rect(ViewportMode::Mobile, stored, vp);
        let b = effective_rect(ViewportMode::Mobile, WindowRect::default(), vp);
        assert_eq!(a, b);
        assert_eq!(a.x, MOBILE_WINDOW_INSET_PX);
        assert_eq!(a.y, TOP_BAR_HEIGHT_PX + MOBILE_WINDOW_INSET_PX);
    }

    #[test]
    fn desktop_rect_clamps_height_but_keeps_position() {
        let stored = WindowRect {
            x: -120,
            y: TOP_BAR_HEIGHT_PX,
            w: 800,
            h: 2000,
        };
        let vp = viewport(1440, 900);

        let rect = effective_rect(ViewportMode::Desktop, stored, vp);
        assert_eq!(rect.x, -120);
        assert_eq!(rect.w, 800);
        assert_eq!(rect.h, max_window_height(vp));
    }

    #[test]
    fn stored_clamp_enforces_floor_and_ceiling() {
        let vp = viewport(1280, 800);
        let rect = clamp_stored(
            WindowRect {
                x: 10,
                y: -40,
                w: 500,
                h: 5000,
            },
            vp,
        );
        assert_eq!(rect.y, TOP_BAR_HEIGHT_PX);
        assert_eq!(rect.h, max_window_height(vp));
    }

    #[test]
    fn mobile_reclamp_leaves_stored_geometry_alone() {
        use crate::model::{WindowId, WindowRecord};
        use webdesk_ui::IconName;

        let mut state = DesktopState::default();
        state
            .windows
            .push(WindowRecord::linked("minder", IconName::Document));
        let tall = WindowRect {
            x: 40,
            y: 60,
            w: 800,
            h: 700,
        };
        state.geometry.insert(WindowId::from("minder"), tall);

        // A mobile viewport far too short for the stored height.
        state.viewport = viewport(390, 500);
        reclamp_open_windows(&mut state);
        assert_eq!(state.geometry[&WindowId::from("minder")], tall);
    }

    #[test]
    fn stored_clamp_repairs_degenerate_sizes() {
        let vp = viewport(1280, 800);
        let rect = clamp_stored(
            WindowRect {
                x: 0,
                y: 100,
                w: -50,
                h: 0,
            },
            vp,
        );
        assert_eq!(rect.w, MIN_WINDOW_WIDTH);
        assert_eq!(rect.h, MIN_WINDOW_HEIGHT);
    }
}
