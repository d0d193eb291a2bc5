use super::*;
use webdesk_ui::{IconName, OverlayScrim};

/// One activatable row in the search results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum SearchHit {
    Window { window_id: String, title: String, icon: IconName },
    Route { route: String, label: String, icon: IconName },
    External { url: String, label: String, icon: IconName },
}

impl SearchHit {
    fn label(&self) -> &str {
        match self {
            Self::Window { title, .. } => title,
            Self::Route { label, .. } | Self::External { label, .. } => label,
        }
    }

    fn icon(&self) -> IconName {
        match self {
            Self::Window { icon, .. } | Self::Route { icon, .. } | Self::External { icon, .. } => {
                *icon
            }
        }
    }
}

/// Case-insensitive substring match over everything launchable from the
/// desktop. An empty query lists the full catalogue.
pub(super) fn search_hits(query: &str) -> Vec<SearchHit> {
    let needle = query.trim().to_lowercase();
    let matches = |label: &str| needle.is_empty() || label.to_lowercase().contains(&needle);

    let mut hits = Vec::new();
    for app in apps::permanent_apps() {
        if matches(app.title) {
            hits.push(SearchHit::Window {
                window_id: app.id.to_string(),
                title: app.title.to_string(),
                icon: app.icon,
            });
        }
    }
    for link in apps::desktop_links() {
        if matches(link.label) {
            match link.action {
                LinkAction::OpenRoute(route) => hits.push(SearchHit::Route {
                    route: route.to_string(),
                    label: link.label.to_string(),
                    icon: link.icon,
                }),
                LinkAction::ExternalUrl(url) => hits.push(SearchHit::External {
                    url: url.to_string(),
                    label: link.label.to_string(),
                    icon: link.icon,
                }),
            }
        }
    }
    hits
}

fn activate_hit(runtime: DesktopRuntimeContext, hit: &SearchHit) {
    match hit {
        SearchHit::Window { window_id, .. } => {
            let window_id = crate::model::WindowId::from(window_id.as_str());
            let is_open = runtime
                .state
                .get_untracked()
                .window(&window_id)
                .map(|w| w.is_open)
                .unwrap_or(false);
            if is_open {
                runtime.dispatch_action(DesktopAction::BringToFront { window_id });
            } else {
                runtime.dispatch_action(DesktopAction::ToggleWindow { window_id });
            }
        }
        SearchHit::Route { route, .. } => {
            runtime.dispatch_action(DesktopAction::OpenUrl {
                route: route.clone(),
            });
        }
        SearchHit::External { url, .. } => {
            runtime.dispatch_action(DesktopAction::OpenExternal { url: url.clone() });
        }
    }
    runtime.dispatch_action(DesktopAction::CloseSearch);
}

#[component]
pub(super) fn SearchOverlay() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let query = create_rw_signal(String::new());
    let hits = Signal::derive(move || search_hits(&query.get()));

    let dismiss = Callback::new(move |_: ev::MouseEvent| {
        runtime.dispatch_action(DesktopAction::CloseSearch);
    });
    let submit_first = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            if let Some(hit) = hits.get_untracked().first() {
                activate_hit(runtime, hit);
            }
        }
    };

    view! {
        <OverlayScrim on_mousedown=dismiss>
            <div
                class="search-panel"
                role="dialog"
                aria-label="Search"
                on:mousedown=move |ev| ev.stop_propagation()
            >
                <input
                    type="search"
                    class="search-input"
                    placeholder="Search the desktop"
                    autofocus=true
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                    on:keydown=submit_first
                />
                <ul class="search-results" role="listbox">
                    <For
                        each=move || hits.get()
                        key=|hit| hit.label().to_string()
                        let:hit
                    >
                        {
                            let activate = {
                                let hit = hit.clone();
                                move |_| activate_hit(runtime, &hit)
                            };
                            view! {
                                <li role="option">
                                    <button type="button" on:click=activate>
                                        <Icon icon=hit.icon() size=IconSize::Sm />
                                        <span>{hit.label().to_string()}</span>
                                    </button>
                                </li>
                            }
                        }
                    </For>
                </ul>
            </div>
        </OverlayScrim>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_query_lists_every_launchable() {
        let hits = search_hits("");
        assert_eq!(
            hits.len(),
            apps::permanent_apps().len() + apps::desktop_links().len()
        );
    }

    #[test]
    fn matching_is_case_insensitive_substring() {
        let hits = search_hits("ABOUT");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].label(), "About Me");

        assert!(search_hits("no such thing").is_empty());
    }
}
