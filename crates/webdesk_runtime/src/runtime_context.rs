//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer container and the runtime effect
//! queue. UI composition stays in [`crate::components`].

use leptos::*;

use crate::{
    apps, effect_executor, persistence,
    model::{DesktopState, Interaction},
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Reactive desktop state signal.
    pub state: RwSignal<DesktopState>,
    /// Reactive pointer interaction signal.
    pub interaction: RwSignal<Interaction>,
    /// Queue of runtime effects emitted by the reducer and drained by the executor.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components.
pub fn DesktopProvider(children: Children) -> impl IntoView {
    let state = create_rw_signal(apps::initial_state());
    let interaction = create_rw_signal(Interaction::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let mut pointer = interaction.get_untracked();
        let previous_desktop = desktop.clone();
        let previous_pointer = pointer.clone();

        let new_effects = reduce_desktop(&mut desktop, &mut pointer, action);

        if desktop != previous_desktop {
            state.set(desktop);
        }
        if pointer != previous_pointer {
            interaction.set(pointer);
        }
        if !new_effects.is_empty() {
            let mut queue = effects.get_untracked();
            queue.extend(new_effects);
            effects.set(queue);
        }
    });

    let runtime = DesktopRuntimeContext {
        state,
        interaction,
        effects,
        dispatch,
    };

    provide_context(runtime);

    effect_executor::install(runtime);

    match persistence::load_prefs() {
        Ok(Some(prefs)) => runtime.dispatch_action(DesktopAction::HydratePrefs { prefs }),
        Ok(None) => {}
        Err(err) => logging::warn!("prefs hydration failed: {err}"),
    }

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
