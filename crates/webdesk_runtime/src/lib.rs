pub mod apps;
pub mod components;
pub mod effect_executor;
pub mod host;
pub mod layout;
pub mod model;
pub mod persistence;
pub mod reducer;
pub mod runtime_context;
pub mod wallpaper;
pub mod window_manager;

pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use model::*;
pub use persistence::{load_prefs, save_prefs};
pub use reducer::{reduce_desktop, DesktopAction, RuntimeEffect};
