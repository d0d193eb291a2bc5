//! Permanent window registry, desktop link targets, and content resolution.
//!
//! The window manager never hard-codes what a window shows; it asks this
//! table. Unrecognized ids resolve to a placeholder panel, never a panic.

use leptos::*;
use webdesk_ui::{Icon, IconName, IconSize};

use crate::model::{DesktopState, WindowId, WindowRecord};
use crate::reducer::DesktopAction;
use crate::runtime_context::use_desktop_runtime;
use crate::{wallpaper, window_manager};

/// Descriptor for one permanent window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppDescriptor {
    pub id: &'static str,
    pub title: &'static str,
    pub icon: IconName,
    /// Dockable windows get a dock button.
    pub show_in_dock: bool,
    /// Launchable-from-desktop windows get a desktop icon.
    pub show_on_desktop: bool,
}

// The game is launchable from its desktop icon but intentionally kept out
// of the dock.
const PERMANENT_APPS: [AppDescriptor; 5] = [
    AppDescriptor {
        id: "about-me",
        title: "About Me",
        icon: IconName::Person,
        show_in_dock: true,
        show_on_desktop: true,
    },
    AppDescriptor {
        id: "projects",
        title: "Projects",
        icon: IconName::Folder,
        show_in_dock: true,
        show_on_desktop: true,
    },
    AppDescriptor {
        id: "contact",
        title: "Contact",
        icon: IconName::Mail,
        show_in_dock: true,
        show_on_desktop: true,
    },
    AppDescriptor {
        id: "settings",
        title: "Settings",
        icon: IconName::Settings,
        show_in_dock: true,
        show_on_desktop: false,
    },
    AppDescriptor {
        id: "game",
        title: "Game",
        icon: IconName::Game,
        show_in_dock: false,
        show_on_desktop: true,
    },
];

/// What a desktop link icon does when activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkAction {
    /// Open a non-permanent window for this route key.
    OpenRoute(&'static str),
    /// Leave the shell for an external URL.
    ExternalUrl(&'static str),
}

/// A desktop icon that is a link rather than a permanent window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DesktopLink {
    pub label: &'static str,
    pub icon: IconName,
    pub action: LinkAction,
}

const DESKTOP_LINKS: [DesktopLink; 2] = [
    DesktopLink {
        label: "Minder",
        icon: IconName::Document,
        action: LinkAction::OpenRoute("minder"),
    },
    DesktopLink {
        label: "Source",
        icon: IconName::ExternalLink,
        action: LinkAction::ExternalUrl("https://github.com/webdesk/webdesk"),
    },
];

/// The fixed permanent set, in registry insertion order.
pub fn permanent_apps() -> &'static [AppDescriptor] {
    &PERMANENT_APPS
}

/// Windows shown in the dock.
pub fn dock_apps() -> Vec<AppDescriptor> {
    permanent_apps()
        .iter()
        .copied()
        .filter(|app| app.show_in_dock)
        .collect()
}

/// Windows launchable from the desktop icon grid.
pub fn desktop_icon_apps() -> Vec<AppDescriptor> {
    permanent_apps()
        .iter()
        .copied()
        .filter(|app| app.show_on_desktop)
        .collect()
}

/// Link-style desktop icons.
pub fn desktop_links() -> &'static [DesktopLink] {
    &DESKTOP_LINKS
}

/// Display title for any window id; the id itself is the fallback title.
pub fn window_title(window_id: &WindowId) -> String {
    permanent_apps()
        .iter()
        .find(|app| app.id == window_id.as_str())
        .map(|app| app.title.to_string())
        .unwrap_or_else(|| window_id.to_string())
}

/// Icon for a non-permanent window created from a route key.
pub fn route_icon(route: &str) -> IconName {
    DESKTOP_LINKS
        .iter()
        .find_map(|link| match link.action {
            LinkAction::OpenRoute(r) if r == route => Some(link.icon),
            _ => None,
        })
        .unwrap_or(IconName::Document)
}

/// Builds the boot-time shell state: the permanent set registered once,
/// with the about panel opened.
pub fn initial_state() -> DesktopState {
    let mut state = DesktopState::default();
    for app in permanent_apps() {
        state.windows.push(WindowRecord::permanent(app.id, app.icon));
    }
    window_manager::toggle_window(&mut state, &WindowId::from("about-me"));
    state
}

/// Resolves the content panel for a window.
pub fn render_window_contents(window: &WindowRecord) -> View {
    match window.id.as_str() {
        "about-me" => view! { <AboutPanel /> }.into_view(),
        "projects" => view! { <ProjectsPanel /> }.into_view(),
        "contact" => view! { <ContactPanel /> }.into_view(),
        "settings" => view! { <SettingsPanel /> }.into_view(),
        "game" => view! { <GamePanel /> }.into_view(),
        _ => match window.url.clone() {
            Some(route) => view! { <LinkedRoutePanel route=route /> }.into_view(),
            None => view! { <UnavailablePanel /> }.into_view(),
        },
    }
}

#[component]
fn AboutPanel() -> impl IntoView {
    view! {
        <article class="panel panel-about">
            <h2>"Hello"</h2>
            <p>"This desktop runs entirely in your browser tab. Drag the windows around, stack them, resize them from the edges."</p>
            <p>"The dock below toggles the main panels; the magnifier in the top bar searches everything on the desktop."</p>
        </article>
    }
}

#[component]
fn ProjectsPanel() -> impl IntoView {
    view! {
        <article class="panel panel-projects">
            <h2>"Projects"</h2>
            <ul>
                <li>"Minder — double-click its desktop icon to open it in a window of its own."</li>
                <li>"This shell — the window manager you are using right now."</li>
            </ul>
        </article>
    }
}

#[component]
fn ContactPanel() -> impl IntoView {
    view! {
        <article class="panel panel-contact">
            <h2>"Contact"</h2>
            <form class="contact-form" on:submit=move |ev| ev.prevent_default()>
                <label>"Name" <input type="text" name="name" /></label>
                <label>"Message" <textarea name="message" rows="5"></textarea></label>
                <button type="submit">"Send"</button>
            </form>
        </article>
    }
}

#[component]
fn SettingsPanel() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let active_wallpaper = Signal::derive(move || runtime.state.get().prefs.wallpaper_id);
    let language = Signal::derive(move || runtime.state.get().prefs.language);

    view! {
        <article class="panel panel-settings">
            <h2>"Settings"</h2>
            <section>
                <h3>
                    <Icon icon=IconName::Wallpaper size=IconSize::Sm />
                    "Wallpaper"
                </h3>
                <div class="wallpaper-picker" role="group" aria-label="Wallpaper presets">
                    <For
                        each=move || wallpaper::presets().iter().copied()
                        key=|preset| preset.id
                        let:preset
                    >
                        <button
                            type="button"
                            data-selected=move || (active_wallpaper.get() == preset.id).to_string()
                            style=format!("background:{};", preset.css_background)
                            on:click=move |_| {
                                runtime.dispatch_action(DesktopAction::SetWallpaper {
                                    wallpaper_id: preset.id.to_string(),
                                });
                            }
                        >
                            {preset.label}
                        </button>
                    </For>
                </div>
            </section>
            <section>
                <h3>"Language"</h3>
                <select
                    prop:value=move || language.get()
                    on:change=move |ev| {
                        runtime.dispatch_action(DesktopAction::SetLanguage {
                            language: event_target_value(&ev),
                        });
                    }
                >
                    <option value="en">"English"</option>
                    <option value="de">"Deutsch"</option>
                    <option value="fr">"Français"</option>
                </select>
            </section>
        </article>
    }
}

#[component]
fn GamePanel() -> impl IntoView {
    view! {
        <article class="panel panel-game">
            <h2>"Game"</h2>
            <p>"The embedded game mounts here. It receives only the window dimensions; the window manager knows nothing about it."</p>
        </article>
    }
}

#[component]
fn LinkedRoutePanel(route: String) -> impl IntoView {
    view! {
        <article class="panel panel-linked">
            <h2>{route.clone()}</h2>
            <p>"Content for this route is rendered by the site layer."</p>
        </article>
    }
}

#[component]
fn UnavailablePanel() -> impl IntoView {
    view! {
        <article class="panel panel-unavailable">
            <p>"Content unavailable."</p>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn game_is_launchable_but_not_dockable() {
        assert!(dock_apps().iter().all(|app| app.id != "game"));
        assert!(desktop_icon_apps().iter().any(|app| app.id == "game"));
    }

    #[test]
    fn initial_state_registers_whole_permanent_set_once() {
        let state = initial_state();
        assert_eq!(state.windows.len(), PERMANENT_APPS.len());
        assert!(state.windows.iter().all(|w| w.is_permanent));
        assert!(state.window(&WindowId::from("about-me")).unwrap().is_open);
    }

    #[test]
    fn titles_fall_back_to_the_id() {
        assert_eq!(window_title(&WindowId::from("settings")), "Settings");
        assert_eq!(window_title(&WindowId::from("minder")), "minder");
    }
}
