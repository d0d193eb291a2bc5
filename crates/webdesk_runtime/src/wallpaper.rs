//! Wallpaper preset catalog and token resolution.
//!
//! Preset ids are opaque tokens as far as the window manager is concerned;
//! this module is the one place that turns them into CSS backgrounds.

/// One selectable wallpaper preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallpaperPreset {
    /// Stable token stored in [`crate::model::ShellPrefs`].
    pub id: &'static str,
    /// Human label shown in the settings panel.
    pub label: &'static str,
    /// CSS background value for the backdrop layer.
    pub css_background: &'static str,
}

const PRESETS: [WallpaperPreset; 4] = [
    WallpaperPreset {
        id: "aurora",
        label: "Aurora",
        css_background: "linear-gradient(160deg, #0b1d3a 0%, #14532d 55%, #115e59 100%)",
    },
    WallpaperPreset {
        id: "dusk",
        label: "Dusk",
        css_background: "linear-gradient(200deg, #1e1b4b 0%, #701a75 60%, #9f1239 100%)",
    },
    WallpaperPreset {
        id: "graphite",
        label: "Graphite",
        css_background: "linear-gradient(180deg, #18181b 0%, #3f3f46 100%)",
    },
    WallpaperPreset {
        id: "paper",
        label: "Paper",
        css_background: "linear-gradient(180deg, #f5f5f4 0%, #d6d3d1 100%)",
    },
];

/// The full preset catalog, in display order.
pub fn presets() -> &'static [WallpaperPreset] {
    &PRESETS
}

/// Resolves a wallpaper token, falling back to the first preset for
/// unrecognized ids so a stale persisted token never breaks the backdrop.
pub fn resolve_preset(wallpaper_id: &str) -> WallpaperPreset {
    PRESETS
        .iter()
        .copied()
        .find(|preset| preset.id == wallpaper_id)
        .unwrap_or(PRESETS[0])
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::ShellPrefs;

    #[test]
    fn default_prefs_point_at_a_real_preset() {
        let prefs = ShellPrefs::default();
        assert_eq!(resolve_preset(&prefs.wallpaper_id).id, prefs.wallpaper_id);
    }

    #[test]
    fn unknown_token_falls_back_to_first_preset() {
        assert_eq!(resolve_preset("missing").id, PRESETS[0].id);
    }
}
