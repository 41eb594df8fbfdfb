//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived window manager signal, the runtime effect queue, the taskbar
//! icon registry and the single open-request subscription. UI composition stays in
//! [`crate::components`].

use std::collections::HashMap;

use leptos::*;

use crate::{
    config::WindowManagerConfig,
    effect_executor, host,
    model::WindowId,
    open_request::{OpenRequestBus, OpenRequestPublisher},
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
    taskbar_registry::{MinimizeTarget, TaskbarIconRegistry},
    window_manager::WindowManager,
};

#[derive(Clone, Copy)]
/// Leptos context for reading window-manager state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Reactive window manager state.
    pub manager: RwSignal<WindowManager>,
    /// Taskbar button rects, written by the taskbar and read when minimizing.
    pub icons: StoredValue<TaskbarIconRegistry>,
    /// Channel producers publish open requests on.
    pub open_requests: StoredValue<OpenRequestBus>,
    /// Queue of runtime effects emitted by the reducer and processed by the shell.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Latest minimize animation target per window.
    pub minimize_animations: RwSignal<HashMap<WindowId, MinimizeTarget>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }

    /// Returns a publish-only handle to the open-request channel.
    pub fn publisher(&self) -> OpenRequestPublisher {
        self.open_requests.with_value(OpenRequestBus::publisher)
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components.
pub fn DesktopProvider(
    /// Window-manager tuning; defaults apply when omitted.
    #[prop(optional)]
    config: Option<WindowManagerConfig>,
    /// Channel shared with producers created outside the provider.
    #[prop(optional)]
    open_requests: Option<OpenRequestBus>,
    children: Children,
) -> impl IntoView {
    let manager = create_rw_signal(WindowManager::new(
        config.unwrap_or_default(),
        host::desktop_viewport(),
    ));
    let icons = store_value(TaskbarIconRegistry::default());
    let bus = open_requests.unwrap_or_default();
    let open_requests = store_value(bus.clone());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());
    let minimize_animations = create_rw_signal(HashMap::new());

    let dispatch = Callback::new(move |action: DesktopAction| {
        let previous = manager.get_untracked();
        let mut next = previous.clone();
        let new_effects = icons.with_value(|registry| reduce_desktop(&mut next, registry, action));
        if next != previous {
            manager.set(next);
        }
        if !new_effects.is_empty() {
            effects.update(|queue| queue.extend(new_effects));
        }
    });

    let runtime = DesktopRuntimeContext {
        manager,
        icons,
        open_requests,
        effects,
        minimize_animations,
        dispatch,
    };

    provide_context(runtime);
    effect_executor::install(runtime);

    match bus.subscribe(move |request| dispatch.call(DesktopAction::HandleOpenRequest(request))) {
        Ok(subscription) => on_cleanup(move || drop(subscription)),
        Err(err) => logging::warn!("open-request subscription failed: {err}"),
    }

    let resize_listener = window_event_listener(ev::resize, move |_| {
        dispatch.call(DesktopAction::SetViewport {
            viewport: host::desktop_viewport(),
        });
    });
    on_cleanup(move || resize_listener.remove());

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
