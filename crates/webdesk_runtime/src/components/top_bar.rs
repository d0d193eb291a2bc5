use super::*;
use std::time::Duration;
use webdesk_ui::{IconName, TopBar, TopBarButton, TopBarSection};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ClockSnapshot {
    hour: u32,
    minute: u32,
}

impl ClockSnapshot {
    fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                hour: date.get_hours(),
                minute: date.get_minutes(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self { hour: 0, minute: 0 }
        }
    }

    fn label(self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }
}

#[component]
pub(super) fn ShellTopBar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let clock = create_rw_signal(ClockSnapshot::now());
    if let Ok(interval) = set_interval_with_handle(
        move || clock.set(ClockSnapshot::now()),
        Duration::from_secs(1),
    ) {
        on_cleanup(move || interval.clear());
    }

    let search_open = Signal::derive(move || state.get().search_open);

    view! {
        <TopBar>
            <TopBarSection ui_slot="start">
                <span class="top-bar-wordmark">"webdesk"</span>
            </TopBarSection>
            <TopBarSection ui_slot="end">
                <TopBarButton
                    aria_label="Search".to_string()
                    pressed=search_open
                    on_click=Callback::new(move |_| {
                        runtime.dispatch_action(DesktopAction::ToggleSearch);
                    })
                >
                    <Icon icon=IconName::Search size=IconSize::Sm />
                </TopBarButton>
                <span class="top-bar-clock">{move || clock.get().label()}</span>
            </TopBarSection>
        </TopBar>
    }
}
