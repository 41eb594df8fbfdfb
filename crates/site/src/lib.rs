//! Browser entry crate: wires window content, desktop icons and deep links into the desktop
//! runtime.

mod content;
mod web_app;

pub use content::{content_registry, TerminalPanel, DESKTOP_ENTRIES};
pub use web_app::{parse_open_targets, site_config, DesktopEntry, SiteApp};

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <SiteApp /> })
}
