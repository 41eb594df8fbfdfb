//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use leptos::logging;

use crate::{
    model::{PointerPosition, ResizeEdge, Viewport, WindowId},
    open_request::OpenWindowRequest,
    taskbar_registry::{IconPositionQuery, MinimizeTarget},
    window_manager::WindowManager,
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate the [`WindowManager`].
pub enum DesktopAction {
    /// Open (or refocus) a window by id.
    OpenWindow {
        /// Window to open.
        window_id: WindowId,
    },
    /// Handle a request received on the open-request channel.
    HandleOpenRequest(OpenWindowRequest),
    /// Close a window by id.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Focus (and raise) a window by id.
    FocusWindow {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Minimize a window to the taskbar.
    MinimizeWindow {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Restore a minimized window.
    RestoreWindow {
        /// Window to restore.
        window_id: WindowId,
    },
    /// Enter or leave fullscreen.
    ToggleFullscreen {
        /// Window to toggle.
        window_id: WindowId,
    },
    /// Begin dragging a window.
    BeginMove {
        /// Window being dragged.
        window_id: WindowId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Update an in-progress window drag.
    UpdateMove {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active window drag.
    EndMove,
    /// Begin resizing a window.
    BeginResize {
        /// Window being resized.
        window_id: WindowId,
        /// Edge or corner being dragged.
        edge: ResizeEdge,
        /// Pointer position at resize start.
        pointer: PointerPosition,
    },
    /// Update an in-progress window resize.
    UpdateResize {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active window resize.
    EndResize,
    /// End whichever pointer session is active (pointer-up, pointer-cancel, teardown).
    EndInteraction,
    /// The host viewport changed size.
    SetViewport {
        /// New viewport size.
        viewport: Viewport,
    },
}

#[derive(Debug, Clone, PartialEq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Move keyboard focus into the newly focused window.
    FocusWindowInput(WindowId),
    /// Play the collapse animation of a window toward its minimize target.
    AnimateMinimize {
        /// Window being minimized.
        window_id: WindowId,
        /// Resolved animation target.
        target: MinimizeTarget,
    },
}

/// Applies a [`DesktopAction`] to the window manager and collects resulting side effects.
///
/// Actions that reference unknown windows, or windows in a state that does not accept them, are
/// ignored and produce no effects.
pub fn reduce_desktop(
    manager: &mut WindowManager,
    icons: &impl IconPositionQuery,
    action: DesktopAction,
) -> Vec<RuntimeEffect> {
    let mut effects = Vec::new();
    let focused_before = manager.focused_window_id().cloned();

    let applied = match &action {
        DesktopAction::OpenWindow { window_id } => manager.open(window_id.clone()),
        DesktopAction::HandleOpenRequest(request) => manager.handle_open_request(request.clone()),
        DesktopAction::CloseWindow { window_id } => manager.close(window_id),
        DesktopAction::FocusWindow { window_id } => manager.focus(window_id),
        DesktopAction::MinimizeWindow { window_id } => match manager.minimize(window_id, icons) {
            Some(target) => {
                effects.push(RuntimeEffect::AnimateMinimize {
                    window_id: window_id.clone(),
                    target,
                });
                true
            }
            None => false,
        },
        DesktopAction::RestoreWindow { window_id } => manager.restore(window_id),
        DesktopAction::ToggleFullscreen { window_id } => manager.toggle_fullscreen(window_id),
        DesktopAction::BeginMove { window_id, pointer } => manager.begin_drag(window_id, *pointer),
        DesktopAction::UpdateMove { pointer } => {
            manager.update_drag(*pointer);
            true
        }
        DesktopAction::EndMove => {
            manager.end_drag();
            true
        }
        DesktopAction::BeginResize {
            window_id,
            edge,
            pointer,
        } => manager.begin_resize(window_id, *edge, *pointer),
        DesktopAction::UpdateResize { pointer } => {
            manager.update_resize(*pointer);
            true
        }
        DesktopAction::EndResize => {
            manager.end_resize();
            true
        }
        DesktopAction::EndInteraction => {
            manager.end_interaction();
            true
        }
        DesktopAction::SetViewport { viewport } => {
            manager.set_viewport(*viewport);
            true
        }
    };

    if !applied {
        logging::debug_warn!("desktop action ignored: {action:?}");
    }

    let focused_after = manager.focused_window_id().cloned();
    if let Some(window_id) = focused_after {
        let gained_focus = focused_before.as_ref() != Some(&window_id);
        let explicit_focus = applied
            && matches!(
                action,
                DesktopAction::OpenWindow { .. }
                    | DesktopAction::HandleOpenRequest(_)
                    | DesktopAction::FocusWindow { .. }
                    | DesktopAction::RestoreWindow { .. }
            );
        if gained_focus || explicit_focus {
            effects.push(RuntimeEffect::FocusWindowInput(window_id));
        }
    }

    effects
}
