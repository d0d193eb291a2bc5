//! Browser environment queries and outward-facing side effects.
//!
//! Everything here touches `web_sys` directly, so each function carries a
//! non-wasm stub that keeps the reducer and layout tests runnable on the
//! host toolchain.

use crate::model::ViewportSize;

/// Measures the current browser viewport.
#[cfg(target_arch = "wasm32")]
pub fn viewport_size() -> ViewportSize {
    fn measure() -> Option<ViewportSize> {
        let window = web_sys::window()?;
        let width = window.inner_width().ok()?.as_f64()?;
        let height = window.inner_height().ok()?.as_f64()?;
        Some(ViewportSize {
            width: width as i32,
            height: height as i32,
        })
    }
    measure().unwrap_or_default()
}

/// Non-wasm stub returning the default viewport.
#[cfg(not(target_arch = "wasm32"))]
pub fn viewport_size() -> ViewportSize {
    ViewportSize::default()
}

/// Opens a URL in a new tab, leaving the shell untouched.
#[cfg(target_arch = "wasm32")]
pub fn open_external_url(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(err) = window.open_with_url_and_target(url, "_blank") {
        leptos::logging::warn!("open external url failed: {err:?}");
    }
}

/// Non-wasm stub; external navigation only exists in a browser.
#[cfg(not(target_arch = "wasm32"))]
pub fn open_external_url(_url: &str) {}
