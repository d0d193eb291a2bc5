use super::*;
use webdesk_ui::{Dock, DockButton};

#[component]
pub(super) fn ShellDock() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    view! {
        <Dock aria_label="Dock".to_string()>
            <For each=move || apps::dock_apps() key=|app| app.id let:app>
                {
                    let active = Signal::derive(move || {
                        state
                            .get()
                            .window(&app.id.into())
                            .map(|w| w.is_visible())
                            .unwrap_or(false)
                    });
                    view! {
                        <DockButton
                            aria_label=app.title.to_string()
                            title=app.title.to_string()
                            active=active
                            on_click=Callback::new(move |_| {
                                runtime.dispatch_action(DesktopAction::ToggleWindow {
                                    window_id: app.id.into(),
                                });
                            })
                        >
                            <Icon icon=app.icon size=IconSize::Md />
                        </DockButton>
                    }
                }
            </For>
        </Dock>
    }
}
