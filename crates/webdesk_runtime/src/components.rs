//! Desktop shell UI composition and interaction surfaces.

mod dock;
mod search;
mod top_bar;
mod window;

use leptos::*;

use self::{dock::ShellDock, search::SearchOverlay, top_bar::ShellTopBar, window::DesktopWindow};

use crate::{
    apps::{self, LinkAction},
    host,
    model::{Interaction, PointerPosition},
    reducer::DesktopAction,
    wallpaper, window_manager,
};
use webdesk_ui::{
    DesktopBackdrop, DesktopIconButton, DesktopIconGrid, DesktopRoot, DesktopWindowLayer, Icon,
    IconSize,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

fn stop_mouse_event(ev: &ev::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

#[component]
/// Renders the full desktop shell UI and wires document-level input.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    // Measure once at mount; resize events keep it current afterwards.
    create_effect(move |_| {
        let viewport = host::viewport_size();
        runtime.dispatch_action(DesktopAction::ViewportResized {
            width: viewport.width,
            height: viewport.height,
        });
    });

    let resize_listener = window_event_listener(ev::resize, move |_| {
        let viewport = host::viewport_size();
        runtime.dispatch_action(DesktopAction::ViewportResized {
            width: viewport.width,
            height: viewport.height,
        });
    });
    on_cleanup(move || resize_listener.remove());

    let keydown_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() {
            return;
        }
        if (ev.ctrl_key() || ev.meta_key()) && ev.key().eq_ignore_ascii_case("k") {
            ev.prevent_default();
            runtime.dispatch_action(DesktopAction::ToggleSearch);
            return;
        }
        if ev.key() == "Escape" && state.get_untracked().search_open {
            ev.prevent_default();
            runtime.dispatch_action(DesktopAction::CloseSearch);
        }
    });
    on_cleanup(move || keydown_listener.remove());

    // Pointer tracking is document-level so drags survive the pointer leaving
    // the window frame, and frame-coalesced so a fast mouse produces at most
    // one reducer dispatch per paint.
    let pending_pointer = store_value(None::<PointerPosition>);
    let move_listener = window_event_listener(ev::pointermove, move |ev| {
        if runtime.interaction.get_untracked().is_idle() {
            return;
        }
        let frame_scheduled = pending_pointer.get_value().is_some();
        pending_pointer.set_value(Some(pointer_from_pointer_event(&ev)));
        if frame_scheduled {
            return;
        }
        request_animation_frame(move || {
            let Some(pointer) = pending_pointer.get_value() else {
                return;
            };
            pending_pointer.set_value(None);
            match runtime.interaction.get_untracked() {
                Interaction::Dragging { .. } => {
                    runtime.dispatch_action(DesktopAction::UpdateDrag { pointer });
                }
                Interaction::Resizing { .. } => {
                    runtime.dispatch_action(DesktopAction::UpdateResize { pointer });
                }
                Interaction::Idle => {}
            }
        });
    });
    on_cleanup(move || move_listener.remove());

    let end_interaction = move || {
        pending_pointer.set_value(None);
        if !runtime.interaction.get_untracked().is_idle() {
            runtime.dispatch_action(DesktopAction::EndPointerInteraction);
        }
    };
    let up_listener = window_event_listener(ev::pointerup, move |_| end_interaction());
    on_cleanup(move || up_listener.remove());
    let cancel_listener = window_event_listener(ev::pointercancel, move |_| end_interaction());
    on_cleanup(move || cancel_listener.remove());

    let wallpaper_style = Signal::derive(move || {
        let prefs = state.get().prefs;
        format!(
            "background:{};",
            wallpaper::resolve_preset(&prefs.wallpaper_id).css_background
        )
    });

    view! {
        <DesktopRoot id="desktop-shell-root".to_string()>
            <ShellTopBar />
            <DesktopBackdrop style=wallpaper_style>
                <DesktopIconGrid>
                    <For
                        each=move || apps::desktop_icon_apps()
                        key=|app| app.id
                        let:app
                    >
                        <DesktopIconButton
                            aria_label=format!("Open {}", app.title)
                            on_click=Callback::new(move |_| {
                                runtime.dispatch_action(DesktopAction::ToggleWindow {
                                    window_id: app.id.into(),
                                });
                            })
                        >
                            <Icon icon=app.icon size=IconSize::Lg />
                            <span>{app.title}</span>
                        </DesktopIconButton>
                    </For>
                    <For
                        each=move || apps::desktop_links().iter().copied()
                        key=|link| link.label
                        let:link
                    >
                        <DesktopIconButton
                            aria_label=format!("Open {}", link.label)
                            on_click=Callback::new(move |_| {
                                runtime.dispatch_action(match link.action {
                                    LinkAction::OpenRoute(route) => DesktopAction::OpenUrl {
                                        route: route.to_string(),
                                    },
                                    LinkAction::ExternalUrl(url) => DesktopAction::OpenExternal {
                                        url: url.to_string(),
                                    },
                                });
                            })
                        >
                            <Icon icon=link.icon size=IconSize::Lg />
                            <span>{link.label}</span>
                        </DesktopIconButton>
                    </For>
                </DesktopIconGrid>

                <DesktopWindowLayer>
                    <For
                        each=move || window_manager::stacking_order(&state.get())
                        key=|win| win.id.clone()
                        let:win
                    >
                        <DesktopWindow window_id=win.id />
                    </For>
                </DesktopWindowLayer>
            </DesktopBackdrop>

            <ShellDock />

            <Show when=move || state.get().search_open fallback=|| ()>
                <SearchOverlay />
            </Show>
        </DesktopRoot>
    }
}
