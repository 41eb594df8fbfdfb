use super::*;
use crate::model::{ResizeEdge, WindowState};

#[component]
pub(super) fn DesktopWindow(window_id: WindowId, content: View) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let dom_id = host::window_dom_id(&window_id);
    let cleanup_id = window_id.clone();
    let window_id = store_value(window_id);
    let pointer_session = PointerSessionSlot::default();

    on_cleanup({
        let pointer_session = pointer_session.clone();
        move || {
            let scope = pointer_session.borrow_mut().take();
            drop(scope);
            runtime.minimize_animations.try_update(|animations| {
                animations.remove(&cleanup_id);
            });
        }
    });

    let window = create_memo(move |_| {
        runtime
            .manager
            .with(|manager| window_id.with_value(|id| manager.window(id).cloned()))
    });
    let title = window
        .get_untracked()
        .map(|w| w.title)
        .unwrap_or_default();

    let style = move || {
        let Some(win) = window.get() else {
            return String::new();
        };
        let mut style = format!(
            "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
            win.rect.x, win.rect.y, win.rect.w, win.rect.h, win.z_order
        );
        if win.state.is_minimized() {
            let target = runtime
                .minimize_animations
                .with(|animations| animations.get(&win.id).copied());
            if let Some(target) = target {
                style.push_str(&format!(
                    "--minimize-dx:{}px;--minimize-dy:{}px;",
                    target.dx, target.dy
                ));
            }
        }
        style
    };
    let class = move || {
        window.with(|win| {
            let Some(win) = win else {
                return "desktop-window".to_string();
            };
            format!(
                "desktop-window{}{}{}",
                if win.is_focused { " focused" } else { "" },
                if win.state.is_minimized() { " minimized" } else { "" },
                if win.state.is_fullscreen() { " fullscreen" } else { "" },
            )
        })
    };
    let is_fullscreen =
        move || window.with(|win| win.as_ref().is_some_and(|w| w.state.is_fullscreen()));
    let resizable = move || {
        window.with(|win| {
            win.as_ref()
                .is_some_and(|w| w.state == WindowState::Normal)
        })
    };

    let focus = move |_: web_sys::PointerEvent| {
        let should_focus =
            window.with_untracked(|win| win.as_ref().is_some_and(|w| !w.is_focused));
        if should_focus {
            runtime.dispatch_action(DesktopAction::FocusWindow {
                window_id: window_id.get_value(),
            });
        }
    };
    let begin_move = {
        let session = pointer_session.clone();
        move |ev: web_sys::PointerEvent| {
            if !is_primary_press(&ev) {
                return;
            }
            ev.prevent_default();
            ev.stop_propagation();
            runtime.dispatch_action(DesktopAction::BeginMove {
                window_id: window_id.get_value(),
                pointer: pointer_from_pointer_event(&ev),
            });
            if !runtime.manager.with_untracked(|m| m.interaction().is_idle()) {
                start_pointer_session(runtime, &session);
            }
        }
    };
    let toggle_fullscreen = move || {
        runtime.dispatch_action(DesktopAction::ToggleFullscreen {
            window_id: window_id.get_value(),
        });
    };
    let swallow_pointer = |ev: web_sys::PointerEvent| {
        ev.prevent_default();
        ev.stop_propagation();
    };

    view! {
        <section
            id=dom_id
            class=class
            style=style
            tabindex="-1"
            role="dialog"
            aria-label=title.clone()
            on:pointerdown=focus
        >
            <header
                class="titlebar"
                on:pointerdown=begin_move
                on:dblclick=move |ev: web_sys::MouseEvent| {
                    stop_mouse_event(&ev);
                    toggle_fullscreen();
                }
            >
                <span class="titlebar-title">{title}</span>
                <div class="titlebar-controls">
                    <button
                        aria-label="Minimize window"
                        on:pointerdown=swallow_pointer
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            runtime.dispatch_action(DesktopAction::MinimizeWindow {
                                window_id: window_id.get_value(),
                            });
                        }
                    >
                        "_"
                    </button>
                    <button
                        aria-label=move || {
                            if is_fullscreen() { "Exit fullscreen" } else { "Enter fullscreen" }
                        }
                        on:pointerdown=swallow_pointer
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            toggle_fullscreen();
                        }
                    >
                        {move || if is_fullscreen() { "❐" } else { "□" }}
                    </button>
                    <button
                        aria-label="Close window"
                        on:pointerdown=swallow_pointer
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            runtime.dispatch_action(DesktopAction::CloseWindow {
                                window_id: window_id.get_value(),
                            });
                        }
                    >
                        "×"
                    </button>
                </div>
            </header>
            <div class="window-body">{content}</div>
            <Show when=resizable fallback=|| ()>
                {ResizeEdge::ALL
                    .into_iter()
                    .map(|edge| {
                        view! {
                            <WindowResizeHandle
                                window_id=window_id
                                edge=edge
                                session=pointer_session.clone()
                            />
                        }
                    })
                    .collect_view()}
            </Show>
        </section>
    }
}

#[component]
fn WindowResizeHandle(
    window_id: StoredValue<WindowId>,
    edge: ResizeEdge,
    session: PointerSessionSlot,
) -> impl IntoView {
    let runtime = use_desktop_runtime();

    let on_pointerdown = move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginResize {
            window_id: window_id.get_value(),
            edge,
            pointer: pointer_from_pointer_event(&ev),
        });
        if !runtime.manager.with_untracked(|m| m.interaction().is_idle()) {
            start_pointer_session(runtime, &session);
        }
    };

    view! {
        <div
            class=format!("window-resize-handle {}", edge.css_class())
            aria-hidden="true"
            on:pointerdown=on_pointerdown
        />
    }
}
