use desktop_runtime::{
    components::use_desktop_runtime, DesktopAction, DesktopProvider, DesktopShell,
};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::deep_link::parse_open_targets;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Desktop 95" />
        <Meta name="description" content="A retro 95-style desktop in the browser." />

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
            <DeepLinkLauncher />
            <DesktopShell />
        </DesktopProvider>
    }
}

#[component]
fn DeepLinkLauncher() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let query = use_query_map();
    let targets = query.with_untracked(|map| {
        map.get("open")
            .map(|raw| parse_open_targets(raw))
            .unwrap_or_default()
    });

    if !targets.is_empty() {
        logging::log!("opening {} app(s) from deep link", targets.len());
    }
    for app_id in targets {
        runtime.dispatch_action(DesktopAction::OpenApp { app_id });
    }
}
