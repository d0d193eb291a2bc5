//! Reducer actions, side-effect intents, and transition logic for the
//! desktop shell.
//!
//! [`reduce_desktop`] is the only mutation path for [`DesktopState`] and the
//! active [`Interaction`]. It is synchronous and pure: browser work
//! (persistence, timers, external navigation) is returned as
//! [`RuntimeEffect`] intents for the host to execute.

use crate::layout::{self, ViewportMode};
use crate::model::{
    DesktopState, Interaction, PointerPosition, ResizeEdge, ShellPrefs, ViewportSize, WindowId,
};
use crate::window_manager::{self, CloseOutcome};
use crate::{apps, wallpaper};

/// Actions accepted by [`reduce_desktop`].
#[derive(Debug, Clone, PartialEq)]
pub enum DesktopAction {
    /// Show/hide a permanent window, or minimize/restore a linked one.
    ToggleWindow { window_id: WindowId },
    /// Open (or re-raise) the linked window for a route key.
    OpenUrl { route: String },
    /// Close a window per its permanence class.
    CloseWindow { window_id: WindowId },
    /// Second phase of a linked-window close, after the exit delay.
    RemoveWindow { window_id: WindowId },
    /// Unhide and raise a window.
    BringToFront { window_id: WindowId },
    /// Begin a titlebar drag (desktop mode only).
    BeginDrag {
        window_id: WindowId,
        pointer: PointerPosition,
    },
    /// Move the dragged window to follow the pointer.
    UpdateDrag { pointer: PointerPosition },
    /// Begin an edge/corner resize (desktop mode only).
    BeginResize {
        window_id: WindowId,
        edge: ResizeEdge,
        pointer: PointerPosition,
    },
    /// Recompute the resizing window's rect from the current pointer.
    UpdateResize { pointer: PointerPosition },
    /// Pointer released or cancelled anywhere in the document.
    EndPointerInteraction,
    /// Viewport dimensions changed; re-derive mode and reclamp geometry.
    ViewportResized { width: i32, height: i32 },
    /// Select a wallpaper preset by opaque token.
    SetWallpaper { wallpaper_id: String },
    /// Select a language token (lookup is an external collaborator).
    SetLanguage { language: String },
    /// Restore persisted preferences at boot.
    HydratePrefs { prefs: ShellPrefs },
    /// Show/hide the search overlay.
    ToggleSearch,
    /// Hide the search overlay if shown.
    CloseSearch,
    /// Leave the shell for an external URL.
    OpenExternal { url: String },
}

/// Side-effect intents emitted by the reducer for the host to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeEffect {
    /// Persist [`ShellPrefs`] to local storage.
    PersistPrefs,
    /// Start the exit-animation timer, then dispatch
    /// [`DesktopAction::RemoveWindow`].
    ScheduleWindowRemoval(WindowId),
    /// Navigate a new tab to an external URL.
    OpenExternalUrl(String),
}

/// Applies one action to the shell state and collects resulting effects.
///
/// Operations referencing unknown window ids are silent no-ops; stale ids
/// are expected during removal animations and never surface as errors.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut Interaction,
    action: DesktopAction,
) -> Vec<RuntimeEffect> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::ToggleWindow { window_id } => {
            window_manager::toggle_window(state, &window_id);
        }
        DesktopAction::OpenUrl { route } => {
            window_manager::open_linked_window(state, &route, apps::route_icon(&route));
            state.search_open = false;
        }
        DesktopAction::CloseWindow { window_id } => {
            if let CloseOutcome::RemovalPending(window_id) =
                window_manager::close_window(state, interaction, &window_id)
            {
                effects.push(RuntimeEffect::ScheduleWindowRemoval(window_id));
            }
        }
        DesktopAction::RemoveWindow { window_id } => {
            window_manager::remove_window(state, interaction, &window_id);
        }
        DesktopAction::BringToFront { window_id } => {
            window_manager::bring_to_front(state, &window_id);
        }
        DesktopAction::BeginDrag { window_id, pointer } => {
            if layout::viewport_mode(state.viewport) != ViewportMode::Desktop {
                return effects;
            }
            let Some(window) = state.window(&window_id) else {
                return effects;
            };
            if !window.is_visible() {
                return effects;
            }
            let rect = state.geometry_or_default(&window_id);
            window_manager::raise_window(state, &window_id);
            *interaction = Interaction::Dragging {
                window_id,
                pointer_offset: PointerPosition {
                    x: pointer.x - rect.x,
                    y: pointer.y - rect.y,
                },
            };
        }
        DesktopAction::UpdateDrag { pointer } => {
            if let Interaction::Dragging {
                window_id,
                pointer_offset,
            } = interaction.clone()
            {
                let (x, y) = window_manager::drag_position(pointer, pointer_offset);
                let mut rect = state.geometry_or_default(&window_id);
                rect.x = x;
                rect.y = y;
                state.geometry.insert(window_id, rect);
            }
        }
        DesktopAction::BeginResize {
            window_id,
            edge,
            pointer: _,
        } => {
            if layout::viewport_mode(state.viewport) != ViewportMode::Desktop {
                return effects;
            }
            let Some(window) = state.window(&window_id) else {
                return effects;
            };
            if !window.is_visible() {
                return effects;
            }
            let anchor = state.geometry_or_default(&window_id);
            *interaction = Interaction::Resizing {
                window_id,
                edge,
                anchor,
            };
        }
        DesktopAction::UpdateResize { pointer } => {
            if let Interaction::Resizing {
                window_id,
                edge,
                anchor,
            } = interaction.clone()
            {
                let rect = window_manager::resize_rect(anchor, edge, pointer);
                state.geometry.insert(window_id, rect);
            }
        }
        DesktopAction::EndPointerInteraction => {
            // Max height is deliberately not enforced during an active
            // resize; it is settled here, on gesture completion.
            if let Interaction::Resizing { window_id, .. } = interaction.clone() {
                if let Some(rect) = state.geometry.get_mut(&window_id) {
                    *rect = layout::clamp_stored(*rect, state.viewport);
                }
            }
            *interaction = Interaction::Idle;
        }
        DesktopAction::ViewportResized { width, height } => {
            state.viewport = ViewportSize { width, height };
            // Dragging and resizing are undefined in mobile mode, so a
            // mid-gesture flip ends the gesture rather than letting it keep
            // mutating stored desktop geometry.
            if layout::viewport_mode(state.viewport) == ViewportMode::Mobile {
                *interaction = Interaction::Idle;
            }
            layout::reclamp_open_windows(state);
        }
        DesktopAction::SetWallpaper { wallpaper_id } => {
            state.prefs.wallpaper_id = wallpaper::resolve_preset(&wallpaper_id).id.to_string();
            effects.push(RuntimeEffect::PersistPrefs);
        }
        DesktopAction::SetLanguage { language } => {
            state.prefs.language = language;
            effects.push(RuntimeEffect::PersistPrefs);
        }
        DesktopAction::HydratePrefs { prefs } => {
            state.prefs = prefs;
        }
        DesktopAction::ToggleSearch => {
            state.search_open = !state.search_open;
        }
        DesktopAction::CloseSearch => {
            state.search_open = false;
        }
        DesktopAction::OpenExternal { url } => {
            effects.push(RuntimeEffect::OpenExternalUrl(url));
        }
    }

    effects
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{
        WindowRect, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, MIN_WINDOW_HEIGHT,
        MIN_WINDOW_WIDTH, TOP_BAR_HEIGHT_PX,
    };
    use crate::window_manager::stacking_order;

    fn boot() -> (DesktopState, Interaction) {
        (apps::initial_state(), Interaction::Idle)
    }

    fn id(raw: &str) -> WindowId {
        WindowId::from(raw)
    }

    fn dispatch(
        state: &mut DesktopState,
        interaction: &mut Interaction,
        action: DesktopAction,
    ) -> Vec<RuntimeEffect> {
        reduce_desktop(state, interaction, action)
    }

    fn open(state: &mut DesktopState, interaction: &mut Interaction, raw: &str) {
        if !state.window(&id(raw)).map(|w| w.is_open).unwrap_or(false) {
            dispatch(
                state,
                interaction,
                DesktopAction::ToggleWindow { window_id: id(raw) },
            );
        }
    }

    #[test]
    fn bring_to_front_is_strictly_monotonic() {
        let (mut state, mut interaction) = boot();
        for raw in ["about-me", "projects", "contact"] {
            open(&mut state, &mut interaction, raw);
        }

        // A, B, C all visible; activate B, A, C in turn.
        for raw in ["projects", "about-me", "contact"] {
            dispatch(
                &mut state,
                &mut interaction,
                DesktopAction::BringToFront { window_id: id(raw) },
            );
        }

        let z = |raw: &str| state.window(&id(raw)).unwrap().z_index;
        assert!(z("contact") > z("about-me"));
        assert!(z("about-me") > z("projects"));

        let top_to_bottom: Vec<_> = stacking_order(&state)
            .into_iter()
            .rev()
            .filter(|w| w.is_visible())
            .map(|w| w.id.0)
            .collect();
        assert_eq!(top_to_bottom, vec!["contact", "about-me", "projects"]);
    }

    #[test]
    fn permanent_close_hides_without_removal() {
        let (mut state, mut interaction) = boot();
        open(&mut state, &mut interaction, "settings");

        let effects = dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow {
                window_id: id("settings"),
            },
        );

        assert!(effects.is_empty());
        let window = state.window(&id("settings")).expect("record retained");
        assert!(!window.is_open);
        assert!(!window.is_minimized);
    }

    #[test]
    fn linked_close_schedules_removal_then_drops_record() {
        let (mut state, mut interaction) = boot();
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::OpenUrl {
                route: "minder".to_string(),
            },
        );
        assert!(state.window(&id("minder")).is_some());

        let effects = dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow {
                window_id: id("minder"),
            },
        );
        assert_eq!(
            effects,
            vec![RuntimeEffect::ScheduleWindowRemoval(id("minder"))]
        );

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::RemoveWindow {
                window_id: id("minder"),
            },
        );
        assert!(state.window(&id("minder")).is_none());
    }

    #[test]
    fn reopening_before_the_removal_timer_keeps_the_window() {
        let (mut state, mut interaction) = boot();
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::OpenUrl {
                route: "minder".to_string(),
            },
        );

        let effects = dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow {
                window_id: id("minder"),
            },
        );
        assert_eq!(
            effects,
            vec![RuntimeEffect::ScheduleWindowRemoval(id("minder"))]
        );

        // Reopen while the exit timer is still pending.
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::OpenUrl {
                route: "minder".to_string(),
            },
        );
        let window = state.window(&id("minder")).expect("reopened record");
        assert!(window.is_open && !window.is_closing);

        // The timer fires anyway; the reopened window must survive it.
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::RemoveWindow {
                window_id: id("minder"),
            },
        );
        assert!(state.window(&id("minder")).is_some());
    }

    #[test]
    fn restoring_before_the_removal_timer_keeps_the_window() {
        let (mut state, mut interaction) = boot();
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::OpenUrl {
                route: "minder".to_string(),
            },
        );
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow {
                window_id: id("minder"),
            },
        );

        // Toggle restores the record and voids the pending removal.
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleWindow { window_id: id("minder") },
        );
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::RemoveWindow {
                window_id: id("minder"),
            },
        );
        assert!(state.window(&id("minder")).is_some());
    }

    #[test]
    fn reopened_route_gets_fresh_fallback_geometry() {
        let (mut state, mut interaction) = boot();
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::OpenUrl {
                route: "minder".to_string(),
            },
        );

        // Drag it somewhere distinctive, then close and fully remove.
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::BeginDrag {
                window_id: id("minder"),
                pointer: PointerPosition { x: 10, y: 40 },
            },
        );
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateDrag {
                pointer: PointerPosition { x: 410, y: 340 },
            },
        );
        dispatch(&mut state, &mut interaction, DesktopAction::EndPointerInteraction);
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow {
                window_id: id("minder"),
            },
        );
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::RemoveWindow {
                window_id: id("minder"),
            },
        );
        assert!(state.geometry.get(&id("minder")).is_none());

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::OpenUrl {
                route: "minder".to_string(),
            },
        );
        let rect = state.geometry_or_default(&id("minder"));
        assert_eq!(rect.w, DEFAULT_WINDOW_WIDTH);
        assert_eq!(rect.h, DEFAULT_WINDOW_HEIGHT);
        assert_eq!(rect.y, TOP_BAR_HEIGHT_PX, "open transition applies the floor");
    }

    #[test]
    fn drag_without_movement_leaves_geometry_unchanged() {
        let (mut state, mut interaction) = boot();
        open(&mut state, &mut interaction, "projects");
        let before = state.geometry_or_default(&id("projects"));

        let pointer = PointerPosition {
            x: before.x + 30,
            y: before.y + 8,
        };
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::BeginDrag {
                window_id: id("projects"),
                pointer,
            },
        );
        dispatch(&mut state, &mut interaction, DesktopAction::UpdateDrag { pointer });
        dispatch(&mut state, &mut interaction, DesktopAction::EndPointerInteraction);

        assert_eq!(state.geometry_or_default(&id("projects")), before);
        assert_eq!(interaction, Interaction::Idle);
    }

    #[test]
    fn drag_applies_vertical_floor_but_not_horizontal() {
        let (mut state, mut interaction) = boot();
        open(&mut state, &mut interaction, "projects");

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::BeginDrag {
                window_id: id("projects"),
                pointer: PointerPosition { x: 0, y: 0 },
            },
        );
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateDrag {
                pointer: PointerPosition { x: -900, y: -900 },
            },
        );

        let rect = state.geometry_or_default(&id("projects"));
        assert_eq!(rect.y, TOP_BAR_HEIGHT_PX);
        assert!(rect.x < 0, "windows may leave the viewport horizontally");
    }

    #[test]
    fn resize_respects_min_floors_past_the_boundary() {
        let (mut state, mut interaction) = boot();
        open(&mut state, &mut interaction, "contact");

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::BeginResize {
                window_id: id("contact"),
                edge: ResizeEdge::BottomRight,
                pointer: PointerPosition { x: 0, y: 0 },
            },
        );
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateResize {
                pointer: PointerPosition { x: -4000, y: -4000 },
            },
        );
        dispatch(&mut state, &mut interaction, DesktopAction::EndPointerInteraction);

        let rect = state.geometry_or_default(&id("contact"));
        assert_eq!(rect.w, MIN_WINDOW_WIDTH);
        assert_eq!(rect.h, MIN_WINDOW_HEIGHT);
    }

    #[test]
    fn resize_completion_settles_height_against_viewport() {
        let (mut state, mut interaction) = boot();
        open(&mut state, &mut interaction, "contact");

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::BeginResize {
                window_id: id("contact"),
                edge: ResizeEdge::Bottom,
                pointer: PointerPosition { x: 0, y: 0 },
            },
        );
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateResize {
                pointer: PointerPosition { x: 0, y: 9000 },
            },
        );
        // Mid-gesture the height may exceed the viewport ceiling.
        let mid = state.geometry_or_default(&id("contact"));
        assert!(mid.h > layout::max_window_height(state.viewport));

        dispatch(&mut state, &mut interaction, DesktopAction::EndPointerInteraction);
        let rect = state.geometry_or_default(&id("contact"));
        assert_eq!(rect.h, layout::max_window_height(state.viewport));
    }

    #[test]
    fn viewport_resize_reclamps_every_open_window() {
        let (mut state, mut interaction) = boot();
        open(&mut state, &mut interaction, "about-me");
        open(&mut state, &mut interaction, "projects");

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::ViewportResized {
                width: 1024,
                height: 400,
            },
        );

        let max_h = layout::max_window_height(state.viewport);
        for raw in ["about-me", "projects"] {
            let rect = state.geometry_or_default(&id(raw));
            assert!(rect.h <= max_h, "{raw} height reclamped");
            assert!(rect.y >= TOP_BAR_HEIGHT_PX, "{raw} floor holds");
            assert_eq!(rect.w, DEFAULT_WINDOW_WIDTH, "{raw} width untouched");
        }
    }

    #[test]
    fn mode_round_trip_preserves_stored_geometry() {
        let (mut state, mut interaction) = boot();
        open(&mut state, &mut interaction, "projects");
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::BeginDrag {
                window_id: id("projects"),
                pointer: PointerPosition { x: 0, y: TOP_BAR_HEIGHT_PX },
            },
        );
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateDrag {
                pointer: PointerPosition { x: 260, y: 140 },
            },
        );
        dispatch(&mut state, &mut interaction, DesktopAction::EndPointerInteraction);
        let stored = state.geometry_or_default(&id("projects"));

        // Into mobile and back, keeping the same height budget.
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::ViewportResized {
                width: 600,
                height: 800,
            },
        );
        assert_eq!(
            layout::viewport_mode(state.viewport),
            ViewportMode::Mobile
        );
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::ViewportResized {
                width: 1280,
                height: 800,
            },
        );

        assert_eq!(state.geometry_or_default(&id("projects")), stored);
    }

    #[test]
    fn drag_and_resize_are_rejected_in_mobile_mode() {
        let (mut state, mut interaction) = boot();
        open(&mut state, &mut interaction, "projects");
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::ViewportResized {
                width: 480,
                height: 800,
            },
        );

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::BeginDrag {
                window_id: id("projects"),
                pointer: PointerPosition { x: 5, y: 40 },
            },
        );
        assert_eq!(interaction, Interaction::Idle);

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::BeginResize {
                window_id: id("projects"),
                edge: ResizeEdge::Right,
                pointer: PointerPosition { x: 5, y: 40 },
            },
        );
        assert_eq!(interaction, Interaction::Idle);
    }

    #[test]
    fn mode_flip_to_mobile_ends_an_active_drag() {
        let (mut state, mut interaction) = boot();
        open(&mut state, &mut interaction, "projects");
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::BeginDrag {
                window_id: id("projects"),
                pointer: PointerPosition { x: 0, y: TOP_BAR_HEIGHT_PX },
            },
        );
        assert!(!interaction.is_idle());
        let stored = state.geometry_or_default(&id("projects"));

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::ViewportResized {
                width: 600,
                height: 800,
            },
        );
        assert_eq!(interaction, Interaction::Idle);

        // A straggling move event after the flip must not touch geometry.
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateDrag {
                pointer: PointerPosition { x: 500, y: 500 },
            },
        );
        assert_eq!(state.geometry_or_default(&id("projects")), stored);
    }

    #[test]
    fn closing_drag_target_cancels_the_gesture() {
        let (mut state, mut interaction) = boot();
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::OpenUrl {
                route: "minder".to_string(),
            },
        );
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::BeginDrag {
                window_id: id("minder"),
                pointer: PointerPosition { x: 20, y: 60 },
            },
        );
        assert!(!interaction.is_idle());

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow {
                window_id: id("minder"),
            },
        );
        assert_eq!(interaction, Interaction::Idle);
    }

    #[test]
    fn unknown_ids_are_silent_noops() {
        let (mut state, mut interaction) = boot();
        let before = state.clone();

        for action in [
            DesktopAction::ToggleWindow { window_id: id("ghost") },
            DesktopAction::CloseWindow { window_id: id("ghost") },
            DesktopAction::RemoveWindow { window_id: id("ghost") },
            DesktopAction::BringToFront { window_id: id("ghost") },
            DesktopAction::BeginDrag {
                window_id: id("ghost"),
                pointer: PointerPosition::default(),
            },
        ] {
            let effects = dispatch(&mut state, &mut interaction, action);
            assert!(effects.is_empty());
        }
        assert_eq!(state, before);
        assert_eq!(interaction, Interaction::Idle);
    }

    #[test]
    fn open_url_is_idempotent_besides_raising() {
        let (mut state, mut interaction) = boot();
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::OpenUrl {
                route: "minder".to_string(),
            },
        );
        let records = state.windows.len();
        let z_before = state.window(&id("minder")).unwrap().z_index;

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::OpenUrl {
                route: "minder".to_string(),
            },
        );
        assert_eq!(state.windows.len(), records);
        assert!(state.window(&id("minder")).unwrap().z_index > z_before);
    }

    #[test]
    fn toggle_minimizes_and_restores_linked_windows() {
        let (mut state, mut interaction) = boot();
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::OpenUrl {
                route: "minder".to_string(),
            },
        );

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleWindow { window_id: id("minder") },
        );
        let window = state.window(&id("minder")).unwrap();
        assert!(window.is_open && window.is_minimized);

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleWindow { window_id: id("minder") },
        );
        let window = state.window(&id("minder")).unwrap();
        assert!(window.is_visible());
    }

    #[test]
    fn wallpaper_selection_persists_and_falls_back() {
        let (mut state, mut interaction) = boot();
        let effects = dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::SetWallpaper {
                wallpaper_id: "definitely-not-a-preset".to_string(),
            },
        );
        assert_eq!(effects, vec![RuntimeEffect::PersistPrefs]);
        assert_eq!(state.prefs.wallpaper_id, ShellPrefs::default().wallpaper_id);

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::SetWallpaper {
                wallpaper_id: "graphite".to_string(),
            },
        );
        assert_eq!(state.prefs.wallpaper_id, "graphite");
    }

    #[test]
    fn geometry_rect_defaults_match_fallback() {
        let (state, _) = boot();
        let rect = state.geometry_or_default(&id("never-touched"));
        assert_eq!(
            rect,
            WindowRect {
                x: 0,
                y: 0,
                w: DEFAULT_WINDOW_WIDTH,
                h: DEFAULT_WINDOW_HEIGHT
            }
        );
    }
}
