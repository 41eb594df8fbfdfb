//! Browser-side queries and effect execution for the desktop runtime.
//!
//! Everything that touches `web_sys` lives here so the reducer and window manager stay pure. On
//! non-wasm targets the queries fall back to fixed values.

use leptos::SignalUpdate;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

use crate::{
    model::{Viewport, WindowId, WindowRect},
    reducer::RuntimeEffect,
    runtime_context::DesktopRuntimeContext,
};

/// DOM id of the `<section>` that renders a window.
pub fn window_dom_id(window_id: &WindowId) -> String {
    format!("desktop-window-{}", window_id.as_str())
}

/// Current browser viewport size, including the strip occupied by the taskbar.
pub fn desktop_viewport() -> Viewport {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let fallback = Viewport::default();
            let width = window
                .inner_width()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(fallback.width);
            let height = window
                .inner_height()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(fallback.height);
            return Viewport { width, height };
        }
    }

    Viewport::default()
}

/// Converts an element's bounding client rect into a [`WindowRect`].
pub fn element_rect(element: &web_sys::Element) -> WindowRect {
    let rect = element.get_bounding_client_rect();
    WindowRect {
        x: rect.left().round() as i32,
        y: rect.top().round() as i32,
        w: rect.width().round() as i32,
        h: rect.height().round() as i32,
    }
}

/// Moves keyboard focus into a window after the current render pass.
pub fn focus_window_element(window_id: &WindowId) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };
        let Some(element) = document.get_element_by_id(&window_dom_id(window_id)) else {
            return;
        };
        let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() else {
            return;
        };
        let callback = Closure::once_into_js(move || {
            let _ = element.focus();
        });
        let _ = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), 0);
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = window_id;
}

/// Executes one reducer-emitted effect.
pub fn run_runtime_effect(runtime: DesktopRuntimeContext, effect: RuntimeEffect) {
    match effect {
        RuntimeEffect::FocusWindowInput(window_id) => focus_window_element(&window_id),
        RuntimeEffect::AnimateMinimize { window_id, target } => {
            runtime.minimize_animations.update(|animations| {
                animations.insert(window_id, target);
            });
        }
    }
}
