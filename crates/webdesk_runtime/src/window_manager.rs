//! Registry and stacking transition helpers used by the desktop reducer.
//!
//! Every operation here is a silent no-op for unknown ids: stale references
//! are expected while a removal animation is in flight, and a UI registry
//! never turns them into errors.

use crate::layout;
use crate::model::{
    DesktopState, Interaction, PointerPosition, ResizeEdge, WindowId, WindowRecord, WindowRect,
    MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
};
use webdesk_ui::IconName;

/// Outcome of a close request; the reducer maps this to side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloseOutcome {
    /// Permanent window hidden in place.
    Hidden,
    /// Non-permanent window marked closing; removal must be scheduled.
    RemovalPending(WindowId),
    /// Unknown id; nothing happened.
    Ignored,
}

/// Raises `window_id` strictly above every other window and clears its
/// minimized flag.
///
/// `new_z = max(z over all windows) + 1`: monotonic without renumbering, so
/// relative order of untouched windows is preserved. Raising the current top
/// window still increments, which is fine: only relative order matters.
pub fn raise_window(state: &mut DesktopState, window_id: &WindowId) {
    let top = state.windows.iter().map(|w| w.z_index).max().unwrap_or(0);
    if let Some(window) = state.window_mut(window_id) {
        window.z_index = top + 1;
        window.is_minimized = false;
    }
}

/// Registry snapshot in render order: ascending z, ties broken by insertion
/// order (the never-activated permanent set all starts at `z = 1`).
pub fn stacking_order(state: &DesktopState) -> Vec<WindowRecord> {
    let mut windows = state.windows.clone();
    // Vec order is insertion order and the sort is stable.
    windows.sort_by_key(|w| w.z_index);
    windows
}

/// Materializes the geometry record for a window entering the open state,
/// applying the vertical floor and height ceiling.
fn settle_open_geometry(state: &mut DesktopState, window_id: &WindowId) {
    let rect = layout::clamp_stored(state.geometry_or_default(window_id), state.viewport);
    state.geometry.insert(window_id.clone(), rect);
}

/// Toggles a window per its permanence class.
///
/// Permanent windows flip `is_open`; non-permanent windows flip
/// `is_minimized` and are forced open. Any transition into visibility
/// raises the window.
pub fn toggle_window(state: &mut DesktopState, window_id: &WindowId) {
    let Some(window) = state.window_mut(window_id) else {
        return;
    };

    let became_visible = if window.is_permanent {
        window.is_open = !window.is_open;
        if !window.is_open {
            window.is_minimized = false;
        }
        window.is_open
    } else {
        window.is_minimized = !window.is_minimized;
        window.is_open = true;
        window.is_closing = false;
        !window.is_minimized
    };

    if became_visible {
        settle_open_geometry(state, window_id);
        raise_window(state, window_id);
    }
}

/// Opens (or re-raises) the non-permanent window for a route key.
///
/// Idempotent: an existing record is re-opened and raised; otherwise a
/// fresh record is inserted. Returns the window id.
pub fn open_linked_window(state: &mut DesktopState, route: &str, icon: IconName) -> WindowId {
    let window_id = WindowId::from(route);
    match state.window_mut(&window_id) {
        Some(window) => {
            window.is_open = true;
            window.is_minimized = false;
            window.is_closing = false;
        }
        None => {
            state.windows.push(WindowRecord::linked(route, icon));
        }
    }
    settle_open_geometry(state, &window_id);
    raise_window(state, &window_id);
    window_id
}

/// Unhides and raises a window (dock/search activation path).
pub fn bring_to_front(state: &mut DesktopState, window_id: &WindowId) {
    if let Some(window) = state.window_mut(window_id) {
        if !window.is_open || window.is_closing {
            return;
        }
        window.is_minimized = false;
        raise_window(state, window_id);
    }
}

/// Closes a window. Permanent records are hidden in place; non-permanent
/// records are marked closing and must be removed after the exit delay.
/// A gesture targeting the window is cancelled either way.
pub fn close_window(
    state: &mut DesktopState,
    interaction: &mut Interaction,
    window_id: &WindowId,
) -> CloseOutcome {
    cancel_interaction_for(interaction, window_id);
    let Some(window) = state.window_mut(window_id) else {
        return CloseOutcome::Ignored;
    };

    if window.is_permanent {
        window.is_open = false;
        window.is_minimized = false;
        CloseOutcome::Hidden
    } else {
        window.is_closing = true;
        window.is_minimized = false;
        CloseOutcome::RemovalPending(window_id.clone())
    }
}

/// Drops a non-permanent record and its geometry from the registry. The
/// permanence invariant holds here too: permanent records are never removed.
///
/// Removal requires `is_closing` to still be set. Reopening a route clears
/// the flag, which voids the pending removal timer; without this gate the
/// stale timer would delete a window the user just brought back.
pub fn remove_window(
    state: &mut DesktopState,
    interaction: &mut Interaction,
    window_id: &WindowId,
) {
    let removable = state
        .window(window_id)
        .map(|w| !w.is_permanent && w.is_closing)
        .unwrap_or(false);
    if !removable {
        return;
    }
    cancel_interaction_for(interaction, window_id);
    state.windows.retain(|w| &w.id != window_id);
    state.geometry.remove(window_id);
}

/// Terminates the active gesture if it targets `window_id`, so no
/// interaction is left referencing a hidden or deleted record.
pub fn cancel_interaction_for(interaction: &mut Interaction, window_id: &WindowId) {
    if interaction.targets(window_id) {
        *interaction = Interaction::Idle;
    }
}

/// New top-left corner for a dragged window: the grab offset keeps the
/// cursor at the exact point it grabbed. Horizontal travel is unbounded.
pub fn drag_position(pointer: PointerPosition, offset: PointerPosition) -> (i32, i32) {
    (
        pointer.x - offset.x,
        layout::floor_y(pointer.y - offset.y),
    )
}

/// Recomputes a resizing window's rect from its grab-time anchor and the
/// current pointer.
///
/// Left-edge grabs shift `x` to the pointer so the right edge stays pinned,
/// including while the minimum-width floor is engaged.
pub fn resize_rect(anchor: WindowRect, edge: ResizeEdge, pointer: PointerPosition) -> WindowRect {
    let anchor_right = anchor.x + anchor.w;
    let mut rect = anchor;

    match edge {
        ResizeEdge::Right => {
            rect.w = pointer.x - anchor.x;
        }
        ResizeEdge::Bottom => {
            rect.h = pointer.y - anchor.y;
        }
        ResizeEdge::BottomRight => {
            rect.w = pointer.x - anchor.x;
            rect.h = pointer.y - anchor.y;
        }
        ResizeEdge::Left => {
            rect.w = anchor_right - pointer.x;
            rect.x = pointer.x;
        }
        ResizeEdge::BottomLeft => {
            rect.w = anchor_right - pointer.x;
            rect.x = pointer.x;
            rect.h = pointer.y - anchor.y;
        }
    }

    rect = rect.clamped_min(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT);
    if matches!(edge, ResizeEdge::Left | ResizeEdge::BottomLeft) {
        rect.x = anchor_right - rect.w;
    }
    rect
}
