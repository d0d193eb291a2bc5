//! Explicit runtime effect-queue executor for reducer-emitted side effects.

use std::time::Duration;

use leptos::*;

use crate::{
    host,
    model::{WindowId, WINDOW_EXIT_MS},
    persistence,
    reducer::{DesktopAction, RuntimeEffect},
    runtime_context::DesktopRuntimeContext,
};

/// Installs the effect executor that drains reducer-emitted runtime effects in order.
pub fn install(runtime: DesktopRuntimeContext) {
    // Clear the current queue before processing so nested dispatches enqueue a
    // fresh batch instead of being overwritten by the in-flight drain.
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        runtime.effects.set(Vec::new());

        for effect in queued {
            run_runtime_effect(runtime, effect);
        }
    });
}

fn run_runtime_effect(runtime: DesktopRuntimeContext, effect: RuntimeEffect) {
    match effect {
        RuntimeEffect::PersistPrefs => {
            let prefs = runtime.state.get_untracked().prefs;
            if let Err(err) = persistence::save_prefs(&prefs) {
                logging::warn!("persist prefs failed: {err}");
            }
        }
        RuntimeEffect::ScheduleWindowRemoval(window_id) => {
            schedule_window_removal(runtime, window_id);
        }
        RuntimeEffect::OpenExternalUrl(url) => host::open_external_url(&url),
    }
}

/// Removes a closing window only after its exit animation has played out.
fn schedule_window_removal(runtime: DesktopRuntimeContext, window_id: WindowId) {
    set_timeout(
        move || {
            runtime.dispatch_action(DesktopAction::RemoveWindow { window_id });
        },
        Duration::from_millis(WINDOW_EXIT_MS),
    );
}
