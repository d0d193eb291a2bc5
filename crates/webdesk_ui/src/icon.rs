//! Centralized inline-SVG icon API.

use leptos::*;

/// Stable icon identifiers used across the shell and content panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconName {
    /// Person silhouette (about panel).
    Person,
    /// Folder (projects panel).
    Folder,
    /// Envelope (contact panel).
    Mail,
    /// Gear (settings panel).
    Settings,
    /// Game controller (embedded game).
    Game,
    /// Magnifier (search overlay).
    Search,
    /// Close cross.
    Dismiss,
    /// Minimize dash.
    Minimize,
    /// External link arrow.
    ExternalLink,
    /// Generic document/link window.
    Document,
    /// Picture frame (wallpaper).
    Wallpaper,
}

impl IconName {
    fn path_data(self) -> &'static str {
        match self {
            Self::Person => {
                "M12 12a4 4 0 1 0 0-8 4 4 0 0 0 0 8Zm0 2c-4 0-7 2-7 5v1h14v-1c0-3-3-5-7-5Z"
            }
            Self::Folder => {
                "M4 5h5l2 2h9a1 1 0 0 1 1 1v10a1 1 0 0 1-1 1H4a1 1 0 0 1-1-1V6a1 1 0 0 1 1-1Z"
            }
            Self::Mail => "M3 6h18v12H3V6Zm0 1 9 6 9-6",
            Self::Settings => {
                "M12 15.5A3.5 3.5 0 1 0 12 8.5a3.5 3.5 0 0 0 0 7Zm8-3.5-2 .6.5 2-1.8 1.1-1.4-1.5-1.9.8-.2 2.1h-2.1l-.3-2.1-1.9-.8-1.4 1.5L5.5 14.6l.5-2-2-.6 2-.6-.5-2 1.8-1.1 1.4 1.5 1.9-.8.3-2.1h2.1l.2 2.1 1.9.8 1.4-1.5 1.8 1.1-.5 2 2 .6Z"
            }
            Self::Game => {
                "M7 8h10a4 4 0 0 1 4 4v3a2 2 0 0 1-3.7 1L16 14H8l-1.3 2A2 2 0 0 1 3 15v-3a4 4 0 0 1 4-4Zm1 3v2m-1-1h2m7-1h.01M18 13h.01"
            }
            Self::Search => "M10.5 17a6.5 6.5 0 1 1 0-13 6.5 6.5 0 0 1 0 13Zm4.8-1.7L20 20",
            Self::Dismiss => "m6 6 12 12M18 6 6 18",
            Self::Minimize => "M5 12h14",
            Self::ExternalLink => "M14 4h6v6m0-6L10 14M9 5H5v14h14v-4",
            Self::Document => "M7 3h7l5 5v13H7V3Zm7 0v5h5",
            Self::Wallpaper => {
                "M4 5h16v14H4V5Zm3 10 3-4 3 3 2-2 4 3M9 9h.01"
            }
        }
    }
}

/// Icon sizing tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconSize {
    /// Dense chrome controls.
    Xs,
    /// Title bars and dock labels.
    Sm,
    /// Default.
    Md,
    /// Desktop icon grid.
    Lg,
}

impl IconSize {
    fn px(self) -> &'static str {
        match self {
            Self::Xs => "12",
            Self::Sm => "16",
            Self::Md => "20",
            Self::Lg => "32",
        }
    }
}

impl Default for IconSize {
    fn default() -> Self {
        Self::Md
    }
}

#[component]
/// Renders a stroke-styled inline SVG icon.
pub fn Icon(
    /// Icon glyph to render.
    icon: IconName,
    /// Rendered size token.
    #[prop(optional)]
    size: IconSize,
) -> impl IntoView {
    let px = size.px();
    view! {
        <svg
            class="ui-icon"
            data-ui-primitive="true"
            data-ui-kind="icon"
            width=px
            height=px
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="1.6"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d=icon.path_data()></path>
        </svg>
    }
}
