use super::*;
use crate::layout::{self, ViewportMode};
use crate::model::{ResizeEdge, WindowId};
use webdesk_ui::{
    IconName, ResizeHandle, WindowBody, WindowControlButton, WindowControls, WindowFrame,
    WindowTitle, WindowTitleBar,
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

fn accepts_pointer_gesture(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

fn resize_edge_slot(edge: ResizeEdge) -> &'static str {
    match edge {
        ResizeEdge::Left => "edge-left",
        ResizeEdge::Right => "edge-right",
        ResizeEdge::Bottom => "edge-bottom",
        ResizeEdge::BottomLeft => "edge-bottom-left",
        ResizeEdge::BottomRight => "edge-bottom-right",
    }
}

const RESIZE_EDGES: [ResizeEdge; 5] = [
    ResizeEdge::Left,
    ResizeEdge::Right,
    ResizeEdge::Bottom,
    ResizeEdge::BottomLeft,
    ResizeEdge::BottomRight,
];

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let window_id = store_value(window_id);

    let window = Signal::derive(move || {
        state
            .get()
            .windows
            .into_iter()
            .find(|w| w.id == window_id.get_value())
    });
    let mode = Signal::derive(move || layout::viewport_mode(state.get().viewport));
    let frame_style = Signal::derive(move || {
        let desktop = state.get();
        let rect = layout::effective_rect(
            layout::viewport_mode(desktop.viewport),
            desktop.geometry_or_default(&window_id.get_value()),
            desktop.viewport,
        );
        let z = desktop
            .window(&window_id.get_value())
            .map(|w| w.z_index)
            .unwrap_or(0);
        format!(
            "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
            rect.x, rect.y, rect.w, rect.h, z
        )
    });

    let focus = Callback::new(move |_ev: web_sys::PointerEvent| {
        let desktop = state.get_untracked();
        if desktop.top_window_id().as_ref() != Some(&window_id.get_value()) {
            runtime.dispatch_action(DesktopAction::BringToFront {
                window_id: window_id.get_value(),
            });
        }
    });
    let begin_drag = Callback::new(move |ev: web_sys::PointerEvent| {
        if !accepts_pointer_gesture(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        runtime.dispatch_action(DesktopAction::BeginDrag {
            window_id: window_id.get_value(),
            pointer: pointer_from_pointer_event(&ev),
        });
    });
    let swallow_pointerdown = Callback::new(move |ev: web_sys::PointerEvent| {
        ev.prevent_default();
        ev.stop_propagation();
    });
    let minimize = Callback::new(move |ev: ev::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.dispatch_action(DesktopAction::ToggleWindow {
            window_id: window_id.get_value(),
        });
    });
    let close = Callback::new(move |ev: ev::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.dispatch_action(DesktopAction::CloseWindow {
            window_id: window_id.get_value(),
        });
    });

    view! {
        <Show when=move || window.get().map(|w| w.is_open).unwrap_or(false) fallback=|| ()>
            {move || {
                let Some(win) = window.get() else {
                    return ().into_view();
                };
                let title = apps::window_title(&win.id);
                let icon = win.icon;
                let can_minimize = !win.is_permanent;

                view! {
                    <WindowFrame
                        style=frame_style
                        aria_label=title.clone()
                        minimized=win.is_minimized
                        closing=win.is_closing
                        on_pointerdown=focus
                    >
                        <WindowTitleBar on_pointerdown=begin_drag>
                            <WindowTitle>
                                <Icon icon=icon size=IconSize::Sm />
                                <span>{title.clone()}</span>
                            </WindowTitle>
                            <WindowControls>
                                <Show when=move || can_minimize fallback=|| ()>
                                    <WindowControlButton
                                        aria_label="Minimize window".to_string()
                                        on_pointerdown=swallow_pointerdown
                                        on_click=minimize
                                    >
                                        <Icon icon=IconName::Minimize size=IconSize::Xs />
                                    </WindowControlButton>
                                </Show>
                                <WindowControlButton
                                    aria_label="Close window".to_string()
                                    on_pointerdown=swallow_pointerdown
                                    on_click=close
                                >
                                    <Icon icon=IconName::Dismiss size=IconSize::Xs />
                                </WindowControlButton>
                            </WindowControls>
                        </WindowTitleBar>
                        <WindowBody>{apps::render_window_contents(&win)}</WindowBody>
                        <Show when=move || mode.get() == ViewportMode::Desktop fallback=|| ()>
                            {RESIZE_EDGES
                                .into_iter()
                                .map(|edge| {
                                    let on_pointerdown =
                                        Callback::new(move |ev: web_sys::PointerEvent| {
                                            if !accepts_pointer_gesture(&ev) {
                                                return;
                                            }
                                            try_set_pointer_capture(&ev);
                                            ev.prevent_default();
                                            ev.stop_propagation();
                                            runtime.dispatch_action(DesktopAction::BeginResize {
                                                window_id: window_id.get_value(),
                                                edge,
                                                pointer: pointer_from_pointer_event(&ev),
                                            });
                                        });
                                    view! {
                                        <ResizeHandle
                                            edge=resize_edge_slot(edge)
                                            on_pointerdown=on_pointerdown
                                        />
                                    }
                                })
                                .collect_view()}
                        </Show>
                    </WindowFrame>
                }
                .into_view()
            }}
        </Show>
    }
}
