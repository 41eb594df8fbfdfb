//! Desktop shell UI composition: the window layer, desktop icons and the taskbar.

mod taskbar;
mod window;

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use leptos::*;

use self::{taskbar::Taskbar, window::DesktopWindow};
use crate::{
    host,
    listener_scope::ListenerScope,
    model::{InteractionState, PointerPosition, WindowId},
    open_request::OpenWindowRequest,
    reducer::DesktopAction,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

/// Renders the body of one window kind.
pub type ContentRenderer = Rc<dyn Fn() -> View>;

#[derive(Clone, Default)]
/// Maps window ids to the view rendered inside their window body.
pub struct ContentRegistry {
    renderers: HashMap<WindowId, ContentRenderer>,
}

impl ContentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the body renderer for `window_id`, replacing any earlier one.
    pub fn with(
        mut self,
        window_id: impl Into<WindowId>,
        render: impl Fn() -> View + 'static,
    ) -> Self {
        self.renderers.insert(window_id.into(), Rc::new(render));
        self
    }

    /// Renders the body for `window_id`, or a placeholder for unknown ids.
    pub fn render(&self, window_id: &WindowId) -> View {
        match self.renderers.get(window_id) {
            Some(render) => render(),
            None => view! { <p class="window-body-empty">"Nothing to show here yet."</p> }
                .into_view(),
        }
    }
}

#[component]
/// Renders the full desktop shell and its window layer.
///
/// `children` are rendered on the desktop surface beneath the windows, typically a set of
/// [`DesktopIcon`] launchers.
pub fn DesktopShell(
    registry: ContentRegistry,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let window_ids = create_memo(move |_| {
        runtime.manager.with(|manager| {
            manager
                .windows()
                .iter()
                .map(|w| w.id.clone())
                .collect::<Vec<_>>()
        })
    });
    let desktop_height = move || {
        runtime
            .manager
            .with(|manager| manager.viewport().height - manager.config().taskbar_height)
            .max(0)
    };

    view! {
        <div id="desktop-shell-root" class="desktop-shell" tabindex="-1">
            <div
                class="desktop-surface"
                style=move || format!("height:{}px;", desktop_height())
            >
                {children.map(|children| children())}
            </div>
            <div class="desktop-window-layer">
                <For
                    each=move || window_ids.get()
                    key=|window_id| window_id.clone()
                    children=move |window_id: WindowId| {
                        let content = registry.render(&window_id);
                        view! { <DesktopWindow window_id=window_id content=content /> }
                    }
                />
            </div>
            <Taskbar />
        </div>
    }
}

#[component]
/// Desktop launcher that publishes an open request for `window_id` on activation.
pub fn DesktopIcon(
    #[prop(into)] window_id: WindowId,
    #[prop(into)] label: String,
) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let window_id = store_value(window_id);
    let launch = move || {
        runtime
            .publisher()
            .publish(OpenWindowRequest::focused(window_id.get_value()));
    };

    view! {
        <button
            class="desktop-icon"
            aria-label=format!("Open {label}")
            on:dblclick=move |_| launch()
            on:keydown=move |ev: web_sys::KeyboardEvent| {
                if ev.key() == "Enter" {
                    ev.prevent_default();
                    launch();
                }
            }
        >
            <span class="desktop-icon-glyph" aria-hidden="true"></span>
            <span class="desktop-icon-label">{label.clone()}</span>
        </button>
    }
}

/// Slot holding the global listeners of the pointer session a window currently owns.
type PointerSessionSlot = Rc<RefCell<Option<ListenerScope>>>;

/// Installs window-level pointer listeners for the active drag or resize.
///
/// The listeners live in a [`ListenerScope`] stored in `slot`; pointer-up, pointer-cancel and
/// component cleanup all detach them. Storing a new scope drops any previous one first.
fn start_pointer_session(runtime: DesktopRuntimeContext, slot: &PointerSessionSlot) {
    let mut scope = ListenerScope::new();

    let move_listener = window_event_listener(ev::pointermove, move |ev| {
        let pointer = pointer_from_pointer_event(&ev);
        let action = runtime.manager.with_untracked(|manager| match manager.interaction() {
            InteractionState::Idle => None,
            InteractionState::Dragging(_) => Some(DesktopAction::UpdateMove { pointer }),
            InteractionState::Resizing(_) => Some(DesktopAction::UpdateResize { pointer }),
        });
        if let Some(action) = action {
            runtime.dispatch_action(action);
        }
    });
    scope.on_release(move || move_listener.remove());

    let end_session = move |slot: &PointerSessionSlot| {
        let finished = slot.clone();
        move || {
            runtime.dispatch_action(DesktopAction::EndInteraction);
            let scope = finished.borrow_mut().take();
            if let Some(scope) = scope {
                scope.release();
            }
        }
    };
    let on_up = end_session(slot);
    let up_listener = window_event_listener(ev::pointerup, move |_| on_up());
    scope.on_release(move || up_listener.remove());
    let on_cancel = end_session(slot);
    let cancel_listener = window_event_listener(ev::pointercancel, move |_| on_cancel());
    scope.on_release(move || cancel_listener.remove());

    let previous = slot.borrow_mut().replace(scope);
    drop(previous);
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn is_primary_press(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

fn publish_icon_rect(
    runtime: DesktopRuntimeContext,
    window_id: WindowId,
    element: &web_sys::Element,
) {
    let rect = host::element_rect(element);
    runtime
        .icons
        .update_value(|icons| icons.publish(window_id, rect));
}
