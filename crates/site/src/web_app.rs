use desktop_runtime::{
    use_desktop_runtime, DesktopIcon, DesktopProvider, DesktopShell, OpenWindowRequest, WindowId,
    WindowManagerConfig,
};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::content::{content_registry, DESKTOP_ENTRIES};

const SITE_CONFIG: &str = include_str!("../desktop.json");

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Desktop" />
        <Meta name="description" content="A desktop-style personal website shell." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=DesktopEntry />
                    <Route path="/open/:id" view=OpenRoute />
                </Routes>
            </main>
        </Router>
    }
}

/// Loads the bundled window-manager config, falling back to defaults when it is invalid.
pub fn site_config() -> WindowManagerConfig {
    WindowManagerConfig::from_json(SITE_CONFIG).unwrap_or_else(|err| {
        logging::warn!("invalid desktop config, using defaults: {err}");
        WindowManagerConfig::default()
    })
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    desktop(String::new())
}

/// `/open/:id` renders the desktop with that window already open.
#[component]
fn OpenRoute() -> impl IntoView {
    let params = use_params_map();
    let target = params.with_untracked(|map| map.get("id").cloned());
    desktop(target.unwrap_or_default())
}

fn desktop(initial: String) -> impl IntoView {
    view! {
        <DesktopProvider config=site_config()>
            <DesktopShell registry=content_registry()>
                {DESKTOP_ENTRIES
                    .into_iter()
                    .map(|(id, label)| view! { <DesktopIcon window_id=id label=label /> })
                    .collect_view()}
            </DesktopShell>
            <DeepLinkOpener initial=initial />
        </DesktopProvider>
    }
}

/// Publishes open requests for `?open=a,b` plus any `initial` targets, once, on mount.
#[component]
fn DeepLinkOpener(#[prop(optional, into)] initial: String) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let query = use_query_map();
    let from_query = query
        .with_untracked(|map| map.get("open").cloned())
        .unwrap_or_default();

    let publisher = runtime.publisher();
    for window_id in parse_open_targets(&format!("{initial},{from_query}")) {
        publisher.publish(OpenWindowRequest::focused(window_id));
    }
}

/// Splits a comma-separated list of window ids, dropping blanks and repeats.
pub fn parse_open_targets(raw: &str) -> Vec<WindowId> {
    let mut targets: Vec<WindowId> = Vec::new();
    for part in raw.split(',').map(str::trim).filter(|part| !part.is_empty()) {
        let window_id = WindowId::from(part);
        if !targets.contains(&window_id) {
            targets.push(window_id);
        }
    }
    targets
}
