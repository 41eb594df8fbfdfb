use super::*;
use crate::{model::Viewport, window_manager::WindowManager};

#[component]
pub(super) fn Taskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let window_ids = create_memo(move |_| {
        runtime.manager.with(|manager| {
            manager
                .summaries()
                .into_iter()
                .map(|entry| entry.id)
                .collect::<Vec<_>>()
        })
    });
    let height = move || runtime.manager.with(|manager| manager.config().taskbar_height);

    view! {
        <nav
            class="taskbar"
            aria-label="Open windows"
            style=move || format!("height:{}px;", height())
        >
            <For
                each=move || window_ids.get()
                key=|window_id| window_id.clone()
                children=move |window_id: WindowId| {
                    view! { <TaskbarButton window_id=window_id /> }
                }
            />
        </nav>
    }
}

/// Button for one open window. Minimized windows are restored; anything else is re-opened,
/// which focuses it.
#[component]
fn TaskbarButton(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let button_ref = create_node_ref::<html::Button>();
    let withdraw_id = window_id.clone();
    let window_id = store_value(window_id);

    let entry = create_memo(move |_| {
        runtime.manager.with(|manager| {
            window_id.with_value(|id| {
                manager
                    .summaries()
                    .into_iter()
                    .find(|entry| &entry.id == id)
            })
        })
    });
    let row_layout = create_memo(move |_| runtime.manager.with(button_row_layout));

    // Buttons shift whenever the row or the viewport changes; republish the rect each time.
    create_effect(move |_| {
        entry.track();
        row_layout.track();
        if let Some(button) = button_ref.get() {
            publish_icon_rect(runtime, window_id.get_value(), &button);
        }
    });
    on_cleanup(move || {
        runtime
            .icons
            .try_update_value(|icons| icons.withdraw(&withdraw_id));
    });

    let activate = move |_| {
        let Some(current) = entry.get_untracked() else {
            return;
        };
        if current.minimized {
            runtime.dispatch_action(DesktopAction::RestoreWindow {
                window_id: current.id,
            });
        } else {
            runtime
                .publisher()
                .publish(OpenWindowRequest::focused(current.id));
        }
    };

    view! {
        <button
            node_ref=button_ref
            class=move || {
                entry
                    .with(|entry| {
                        entry.as_ref().map(|e| {
                            format!(
                                "taskbar-button{}{}",
                                if e.focused { " focused" } else { "" },
                                if e.minimized { " minimized" } else { "" },
                            )
                        })
                    })
                    .unwrap_or_else(|| "taskbar-button".to_string())
            }
            aria-pressed=move || entry.with(|e| e.as_ref().is_some_and(|e| e.focused)).to_string()
            on:click=activate
        >
            {move || entry.with(|e| e.as_ref().map(|e| e.title.clone()).unwrap_or_default())}
        </button>
    }
}

/// Inputs that move taskbar buttons on screen: the number of buttons and the viewport.
fn button_row_layout(manager: &WindowManager) -> (usize, Viewport) {
    (manager.windows().len(), manager.viewport())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::{assert_eq, assert_ne};

    use super::*;

    #[test]
    fn row_layout_changes_with_viewport_and_window_count() {
        let mut manager = WindowManager::default();
        let initial = button_row_layout(&manager);

        manager.set_viewport(Viewport {
            width: 1024,
            height: 768,
        });
        let resized = button_row_layout(&manager);
        assert_ne!(resized, initial);
        assert_eq!(
            resized,
            (
                0,
                Viewport {
                    width: 1024,
                    height: 768
                }
            )
        );

        manager.open(WindowId::from("about"));
        assert_eq!(button_row_layout(&manager).0, 1);
    }
}
