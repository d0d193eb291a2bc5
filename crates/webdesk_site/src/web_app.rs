use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use webdesk_runtime::{use_desktop_runtime, DesktopAction, DesktopProvider, DesktopShell};

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="webdesk" />
        <Meta name="description" content="A desktop-style shell that lives in a browser tab." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=DesktopEntry />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    view! {
        <DesktopProvider>
            <DeepLinkBoot />
            <DesktopShell />
        </DesktopProvider>
    }
}

/// Opens the window named by `/?open=<route>` once at boot. Idempotent by
/// construction: the reducer treats a repeat open of the same route as a
/// re-raise.
#[component]
fn DeepLinkBoot() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let query = use_query_map();

    create_effect(move |_| {
        if let Some(route) = query.get_untracked().get("open").cloned() {
            if !route.is_empty() {
                runtime.dispatch_action(DesktopAction::OpenUrl { route });
            }
        }
    });
}
