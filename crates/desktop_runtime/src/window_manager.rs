//! Window lifecycle and focus/z-order arbitration.
//!
//! [`WindowManager`] owns every open [`WindowRecord`] and the single active pointer interaction.
//! All operations are silent no-ops on unknown ids and report whether anything changed.

use crate::{
    config::WindowManagerConfig,
    geometry,
    model::{
        DragSession, InteractionState, PointerPosition, ResizeEdge, ResizeSession, Viewport,
        WindowId, WindowRecord, WindowRect, WindowState, WindowSummary,
    },
    open_request::OpenWindowRequest,
    taskbar_registry::{resolve_minimize_target, IconPositionQuery, MinimizeTarget},
};

/// Initial geometry rule for a newly created window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Staggered by the number of windows already open.
    Cascade,
    /// Covers the desktop above the taskbar.
    Fullscreen,
    /// Explicit geometry, clamped into the viewport.
    At(WindowRect),
}

#[derive(Debug, Clone, PartialEq)]
pub struct WindowManager {
    config: WindowManagerConfig,
    viewport: Viewport,
    windows: Vec<WindowRecord>,
    next_z_order: u64,
    interaction: InteractionState,
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new(WindowManagerConfig::default(), Viewport::default())
    }
}

impl WindowManager {
    pub fn new(config: WindowManagerConfig, viewport: Viewport) -> Self {
        Self {
            config,
            viewport,
            windows: Vec::new(),
            next_z_order: 1,
            interaction: InteractionState::Idle,
        }
    }

    pub fn config(&self) -> &WindowManagerConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Open windows in creation order.
    pub fn windows(&self) -> &[WindowRecord] {
        &self.windows
    }

    pub fn window(&self, window_id: &WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| &w.id == window_id)
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    pub fn focused_window_id(&self) -> Option<&WindowId> {
        self.windows.iter().find(|w| w.is_focused).map(|w| &w.id)
    }

    /// Opens `window_id` using the configured placement for that id.
    pub fn open(&mut self, window_id: WindowId) -> bool {
        let placement = if self.config.opens_fullscreen(&window_id) {
            Placement::Fullscreen
        } else {
            Placement::Cascade
        };
        self.open_with(window_id, placement)
    }

    /// Creates the window if needed, un-minimizes it if minimized, and focuses it.
    ///
    /// `placement` only applies when a new record is created; existing windows keep their
    /// geometry.
    pub fn open_with(&mut self, window_id: WindowId, placement: Placement) -> bool {
        let existing = self.window(&window_id).map(|w| w.state);
        match existing {
            Some(WindowState::Minimized { .. }) => return self.restore(&window_id),
            Some(_) => return self.focus(&window_id),
            None => {}
        }

        let (rect, state) = match placement {
            Placement::Cascade => (
                geometry::cascade_rect(self.windows.len(), &self.config, self.viewport),
                WindowState::Normal,
            ),
            Placement::Fullscreen => (
                geometry::fullscreen_rect(self.viewport, self.config.taskbar_height),
                WindowState::Fullscreen,
            ),
            Placement::At(rect) => (
                geometry::fit_rect_to_viewport(rect, &self.config, self.viewport),
                WindowState::Normal,
            ),
        };
        self.windows.push(WindowRecord {
            title: self.config.title_for(&window_id),
            id: window_id.clone(),
            rect,
            state,
            saved_rect: None,
            z_order: 0,
            is_focused: false,
        });
        self.focus(&window_id)
    }

    /// Handles a request published on the open-request channel: `open`, then `focus` when the
    /// request asks for it.
    pub fn handle_open_request(&mut self, request: OpenWindowRequest) -> bool {
        let opened = self.open(request.window_id.clone());
        if request.request_focus {
            return self.focus(&request.window_id) || opened;
        }
        opened
    }

    /// Removes the record; focus falls to the highest remaining visible window.
    pub fn close(&mut self, window_id: &WindowId) -> bool {
        let before_len = self.windows.len();
        self.windows.retain(|w| &w.id != window_id);
        if self.windows.len() == before_len {
            return false;
        }
        self.cancel_interaction_for(window_id);
        self.refresh_focus();
        true
    }

    /// Assigns the next z-order to a visible window, making it the focused one.
    pub fn focus(&mut self, window_id: &WindowId) -> bool {
        let z_order = self.next_z_order;
        let Some(window) = self.window_mut(window_id) else {
            return false;
        };
        if window.state.is_minimized() {
            return false;
        }
        window.z_order = z_order;
        self.next_z_order += 1;
        self.refresh_focus();
        true
    }

    /// Hides the window in the taskbar, keeping its geometry and fullscreen snapshot.
    ///
    /// Returns the animation target, or `None` when nothing was minimized.
    pub fn minimize(
        &mut self,
        window_id: &WindowId,
        icons: &impl IconPositionQuery,
    ) -> Option<MinimizeTarget> {
        let viewport = self.viewport;
        let window = self.window_mut(window_id)?;
        let fullscreen = match window.state {
            WindowState::Minimized { .. } => return None,
            WindowState::Normal => false,
            WindowState::Fullscreen => true,
        };
        window.state = WindowState::Minimized { fullscreen };
        let target = resolve_minimize_target(window_id, window.rect, viewport, icons);
        self.cancel_interaction_for(window_id);
        self.refresh_focus();
        Some(target)
    }

    /// Returns a minimized window to the state it was minimized from and focuses it.
    ///
    /// Restoring a visible window only focuses it.
    pub fn restore(&mut self, window_id: &WindowId) -> bool {
        let config = self.config.clone();
        let viewport = self.viewport;
        let Some(window) = self.window_mut(window_id) else {
            return false;
        };
        if let WindowState::Minimized { fullscreen } = window.state {
            if fullscreen {
                window.state = WindowState::Fullscreen;
                window.rect = geometry::fullscreen_rect(viewport, config.taskbar_height);
                window.saved_rect = window
                    .saved_rect
                    .map(|saved| geometry::fit_rect_to_viewport(saved, &config, viewport));
            } else {
                window.state = WindowState::Normal;
                window.rect = geometry::fit_rect_to_viewport(window.rect, &config, viewport);
            }
        }
        self.focus(window_id)
    }

    /// Enters fullscreen (snapshotting geometry) or exits it (restoring the snapshot).
    pub fn toggle_fullscreen(&mut self, window_id: &WindowId) -> bool {
        let Some(state) = self.window(window_id).map(|w| w.state) else {
            return false;
        };
        match state {
            WindowState::Minimized { .. } => return false,
            WindowState::Normal => self.enter_fullscreen(window_id),
            WindowState::Fullscreen => self.exit_fullscreen(window_id),
        }
        true
    }

    fn enter_fullscreen(&mut self, window_id: &WindowId) {
        let rect = geometry::fullscreen_rect(self.viewport, self.config.taskbar_height);
        if let Some(window) = self.window_mut(window_id) {
            window.saved_rect = Some(window.rect);
            window.rect = rect;
            window.state = WindowState::Fullscreen;
        }
        self.cancel_interaction_for(window_id);
    }

    fn exit_fullscreen(&mut self, window_id: &WindowId) {
        let fallback = geometry::default_rect(&self.config, self.viewport);
        if let Some(window) = self.window_mut(window_id) {
            window.rect = window.saved_rect.take().unwrap_or(fallback);
            window.state = WindowState::Normal;
        }
    }

    /// Starts dragging a window.
    ///
    /// A fullscreen window stays fullscreen until the pointer moves past the drag threshold; it
    /// is then restored and dragged with the offset taken against the restored rect.
    pub fn begin_drag(&mut self, window_id: &WindowId, pointer: PointerPosition) -> bool {
        let fullscreen = match self.window(window_id).map(|w| w.state) {
            None | Some(WindowState::Minimized { .. }) => return false,
            Some(WindowState::Fullscreen) => true,
            Some(WindowState::Normal) => false,
        };
        self.focus(window_id);
        let fallback = geometry::default_rect(&self.config, self.viewport);
        let Some(window) = self.window(window_id) else {
            return false;
        };
        let origin = if fullscreen {
            window.saved_rect.unwrap_or(fallback)
        } else {
            window.rect
        };
        self.interaction = InteractionState::Dragging(DragSession {
            window_id: window_id.clone(),
            offset: geometry::drag_offset(origin, pointer),
            fullscreen_press: fullscreen.then_some(pointer),
        });
        true
    }

    pub fn update_drag(&mut self, pointer: PointerPosition) -> bool {
        let InteractionState::Dragging(session) = &mut self.interaction else {
            return false;
        };
        let offset = session.offset;
        let window_id = session.window_id.clone();
        if let Some(press) = session.fullscreen_press {
            if !geometry::exceeds_drag_threshold(press, pointer) {
                return false;
            }
            session.fullscreen_press = None;
            if self.window(&window_id).map(|w| w.state) == Some(WindowState::Fullscreen) {
                self.exit_fullscreen(&window_id);
            }
        }
        let viewport = self.viewport;
        let Some(window) = self.window_mut(&window_id) else {
            return false;
        };
        if window.state != WindowState::Normal {
            return false;
        }
        let moved = geometry::drag_rect(window.rect, pointer, offset, viewport);
        let changed = moved != window.rect;
        window.rect = moved;
        changed
    }

    pub fn end_drag(&mut self) -> bool {
        if matches!(self.interaction, InteractionState::Dragging(_)) {
            self.interaction = InteractionState::Idle;
            return true;
        }
        false
    }

    /// Starts resizing from `edge`. Disabled for fullscreen and minimized windows.
    pub fn begin_resize(
        &mut self,
        window_id: &WindowId,
        edge: ResizeEdge,
        pointer: PointerPosition,
    ) -> bool {
        let Some(rect_start) = self
            .window(window_id)
            .filter(|w| w.state == WindowState::Normal)
            .map(|w| w.rect)
        else {
            return false;
        };
        self.focus(window_id);
        self.interaction = InteractionState::Resizing(ResizeSession {
            window_id: window_id.clone(),
            edge,
            pointer_start: pointer,
            rect_start,
        });
        true
    }

    pub fn update_resize(&mut self, pointer: PointerPosition) -> bool {
        let InteractionState::Resizing(session) = &self.interaction else {
            return false;
        };
        let session = session.clone();
        let config = self.config.clone();
        let viewport = self.viewport;
        let Some(window) = self.window_mut(&session.window_id) else {
            return false;
        };
        if window.state != WindowState::Normal {
            return false;
        }
        let resized = geometry::resize_rect(
            session.rect_start,
            session.edge,
            pointer.x - session.pointer_start.x,
            pointer.y - session.pointer_start.y,
            &config,
            viewport,
        );
        let changed = resized != window.rect;
        window.rect = resized;
        changed
    }

    pub fn end_resize(&mut self) -> bool {
        if matches!(self.interaction, InteractionState::Resizing(_)) {
            self.interaction = InteractionState::Idle;
            return true;
        }
        false
    }

    /// Ends whichever pointer session is active.
    pub fn end_interaction(&mut self) -> bool {
        let was_active = !self.interaction.is_idle();
        self.interaction = InteractionState::Idle;
        was_active
    }

    /// Applies a new viewport size, refitting fullscreen windows and clamping normal ones.
    ///
    /// Minimized windows are left untouched until they are restored.
    pub fn set_viewport(&mut self, viewport: Viewport) -> bool {
        if viewport == self.viewport {
            return false;
        }
        self.viewport = viewport;
        let fullscreen = geometry::fullscreen_rect(viewport, self.config.taskbar_height);
        for window in &mut self.windows {
            match window.state {
                WindowState::Normal => {
                    window.rect =
                        geometry::fit_rect_to_viewport(window.rect, &self.config, viewport);
                }
                WindowState::Fullscreen => {
                    window.rect = fullscreen;
                    window.saved_rect = window.saved_rect.map(|saved| {
                        geometry::fit_rect_to_viewport(saved, &self.config, viewport)
                    });
                }
                WindowState::Minimized { .. } => {}
            }
        }
        true
    }

    pub fn summaries(&self) -> Vec<WindowSummary> {
        self.windows
            .iter()
            .map(|w| WindowSummary {
                id: w.id.clone(),
                title: w.title.clone(),
                state: w.state,
                minimized: w.state.is_minimized(),
                focused: w.is_focused,
            })
            .collect()
    }

    fn window_mut(&mut self, window_id: &WindowId) -> Option<&mut WindowRecord> {
        self.windows.iter_mut().find(|w| &w.id == window_id)
    }

    fn cancel_interaction_for(&mut self, window_id: &WindowId) {
        if self.interaction.window_id() == Some(window_id) {
            self.interaction = InteractionState::Idle;
        }
    }

    /// Marks the visible window with the highest z-order as focused, clearing all others.
    fn refresh_focus(&mut self) {
        let top = self
            .windows
            .iter()
            .filter(|w| w.is_visible())
            .max_by_key(|w| w.z_order)
            .map(|w| w.id.clone());
        for window in &mut self.windows {
            window.is_focused = Some(&window.id) == top.as_ref();
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::taskbar_registry::{MinimizeTargetSource, TaskbarIconRegistry};

    fn id(raw: &str) -> WindowId {
        WindowId::from(raw)
    }

    fn manager() -> WindowManager {
        WindowManager::new(
            WindowManagerConfig::default(),
            Viewport {
                width: 1920,
                height: 1080,
            },
        )
    }

    fn rect_of(wm: &WindowManager, raw: &str) -> WindowRect {
        wm.window(&id(raw)).expect("window").rect
    }

    #[test]
    fn open_creates_cascaded_focused_window() {
        let mut wm = manager();
        assert!(wm.open(id("about")));
        assert!(wm.open(id("projects")));

        assert_eq!(
            rect_of(&wm, "about"),
            WindowRect {
                x: 50,
                y: 50,
                w: 1000,
                h: 800
            }
        );
        assert_eq!(
            rect_of(&wm, "projects"),
            WindowRect {
                x: 80,
                y: 80,
                w: 1000,
                h: 800
            }
        );
        assert_eq!(wm.focused_window_id(), Some(&id("projects")));
        assert_eq!(wm.window(&id("about")).unwrap().title, "About");
    }

    #[test]
    fn reopening_focuses_without_duplicating_or_moving() {
        let mut wm = manager();
        wm.open(id("about"));
        wm.open(id("contact"));
        let before = rect_of(&wm, "about");

        assert!(wm.open(id("about")));

        assert_eq!(wm.windows().len(), 2);
        assert_eq!(rect_of(&wm, "about"), before);
        assert_eq!(wm.focused_window_id(), Some(&id("about")));
    }

    #[test]
    fn reopening_minimized_window_restores_it() {
        let mut wm = manager();
        wm.open(id("about"));
        wm.minimize(&id("about"), &TaskbarIconRegistry::default());

        assert!(wm.open(id("about")));

        let record = wm.window(&id("about")).unwrap();
        assert_eq!(record.state, WindowState::Normal);
        assert!(record.is_focused);
    }

    #[test]
    fn focus_always_assigns_strictly_increasing_z_order() {
        let mut wm = manager();
        wm.open(id("a"));
        wm.open(id("b"));
        let mut last = wm.windows().iter().map(|w| w.z_order).max().unwrap();
        for raw in ["a", "a", "b", "a"] {
            assert!(wm.focus(&id(raw)));
            let z = wm.window(&id(raw)).unwrap().z_order;
            assert!(z > last);
            last = z;
            assert_eq!(wm.focused_window_id(), Some(&id(raw)));
        }
    }

    #[test]
    fn focus_ignores_unknown_and_minimized_windows() {
        let mut wm = manager();
        wm.open(id("a"));
        wm.open(id("b"));
        wm.minimize(&id("a"), &TaskbarIconRegistry::default());
        let snapshot = wm.clone();

        assert!(!wm.focus(&id("missing")));
        assert!(!wm.focus(&id("a")));
        assert_eq!(wm, snapshot);
    }

    #[test]
    fn closing_focused_window_hands_focus_to_highest_visible() {
        let mut wm = manager();
        wm.open(id("a"));
        wm.open(id("b"));
        wm.open(id("c"));
        wm.focus(&id("a"));
        wm.minimize(&id("c"), &TaskbarIconRegistry::default());

        assert!(wm.close(&id("a")));
        assert_eq!(wm.focused_window_id(), Some(&id("b")));

        assert!(wm.close(&id("b")));
        assert_eq!(wm.focused_window_id(), None);
        assert!(!wm.close(&id("b")));
    }

    #[test]
    fn minimize_preserves_fullscreen_and_snapshot() {
        let mut wm = manager();
        wm.open(id("about"));
        wm.toggle_fullscreen(&id("about"));
        let before = wm.window(&id("about")).unwrap().clone();

        let target = wm
            .minimize(&id("about"), &TaskbarIconRegistry::default())
            .expect("minimized");
        assert_eq!(target.source, MinimizeTargetSource::Fallback);
        assert_eq!(
            wm.window(&id("about")).unwrap().state,
            WindowState::Minimized { fullscreen: true }
        );
        assert!(wm
            .minimize(&id("about"), &TaskbarIconRegistry::default())
            .is_none());

        assert!(wm.restore(&id("about")));
        let after = wm.window(&id("about")).unwrap();
        assert_eq!(after.state, WindowState::Fullscreen);
        assert_eq!(after.rect, before.rect);
        assert_eq!(after.saved_rect, before.saved_rect);
    }

    #[test]
    fn minimize_uses_published_icon_rect() {
        let mut wm = manager();
        wm.open(id("about"));
        let mut icons = TaskbarIconRegistry::default();
        icons.publish(
            id("about"),
            WindowRect {
                x: 100,
                y: 1040,
                w: 40,
                h: 40,
            },
        );

        let target = wm.minimize(&id("about"), &icons).expect("minimized");
        assert_eq!(target.source, MinimizeTargetSource::TaskbarIcon);
        assert_eq!(target.point, PointerPosition { x: 120, y: 1060 });
        assert_eq!((target.dx, target.dy), (120 - 550, 1060 - 450));
    }

    #[test]
    fn fullscreen_round_trip_restores_exact_geometry() {
        let mut wm = manager();
        wm.open(id("about"));
        wm.begin_drag(&id("about"), PointerPosition { x: 60, y: 60 });
        wm.update_drag(PointerPosition { x: 333, y: 127 });
        wm.end_drag();
        let before = rect_of(&wm, "about");

        assert!(wm.toggle_fullscreen(&id("about")));
        assert_eq!(
            rect_of(&wm, "about"),
            WindowRect {
                x: 0,
                y: 0,
                w: 1920,
                h: 1032
            }
        );
        assert_eq!(wm.window(&id("about")).unwrap().saved_rect, Some(before));

        assert!(wm.toggle_fullscreen(&id("about")));
        assert_eq!(rect_of(&wm, "about"), before);
        assert_eq!(wm.window(&id("about")).unwrap().saved_rect, None);
    }

    #[test]
    fn drag_from_fullscreen_restores_once_the_pointer_moves() {
        let mut wm = manager();
        wm.open(id("about"));
        wm.toggle_fullscreen(&id("about"));

        assert!(wm.begin_drag(&id("about"), PointerPosition { x: 70, y: 60 }));
        assert_eq!(wm.window(&id("about")).unwrap().state, WindowState::Fullscreen);

        assert!(!wm.update_drag(PointerPosition { x: 73, y: 62 }));
        assert_eq!(wm.window(&id("about")).unwrap().state, WindowState::Fullscreen);

        assert!(wm.update_drag(PointerPosition { x: 120, y: 90 }));
        let record = wm.window(&id("about")).unwrap();
        assert_eq!(record.state, WindowState::Normal);
        assert_eq!(record.saved_rect, None);
        assert_eq!(
            record.rect,
            WindowRect {
                x: 100,
                y: 80,
                w: 1000,
                h: 800
            }
        );
    }

    #[test]
    fn titlebar_double_click_leaves_fullscreen() {
        let mut wm = manager();
        wm.open(id("about"));
        wm.toggle_fullscreen(&id("about"));

        // Both presses of a double-click begin a drag without real movement.
        for _ in 0..2 {
            wm.begin_drag(&id("about"), PointerPosition { x: 70, y: 60 });
            wm.update_drag(PointerPosition { x: 71, y: 60 });
            wm.end_drag();
        }
        assert_eq!(wm.window(&id("about")).unwrap().state, WindowState::Fullscreen);

        wm.toggle_fullscreen(&id("about"));
        let record = wm.window(&id("about")).unwrap();
        assert_eq!(record.state, WindowState::Normal);
        assert_eq!(
            record.rect,
            WindowRect {
                x: 50,
                y: 50,
                w: 1000,
                h: 800
            }
        );
    }

    #[test]
    fn drag_and_resize_are_mutually_exclusive() {
        let mut wm = manager();
        wm.open(id("about"));
        wm.begin_drag(&id("about"), PointerPosition { x: 60, y: 60 });
        wm.begin_resize(
            &id("about"),
            ResizeEdge::East,
            PointerPosition { x: 1050, y: 300 },
        );

        assert!(matches!(wm.interaction(), InteractionState::Resizing(_)));
        assert!(!wm.update_drag(PointerPosition { x: 500, y: 500 }));
        assert!(!wm.end_drag());
        assert!(wm.end_resize());
        assert!(wm.interaction().is_idle());
    }

    #[test]
    fn resize_is_disabled_while_fullscreen_or_minimized() {
        let mut wm = manager();
        wm.open(id("portfolio"));
        let origin = PointerPosition { x: 0, y: 0 };
        assert!(!wm.begin_resize(&id("portfolio"), ResizeEdge::SouthEast, origin));

        wm.open(id("about"));
        wm.minimize(&id("about"), &TaskbarIconRegistry::default());
        assert!(!wm.begin_resize(&id("about"), ResizeEdge::South, origin));
        assert!(!wm.begin_drag(&id("about"), origin));
    }

    #[test]
    fn west_resize_through_manager_anchors_right_edge() {
        let mut wm = manager();
        wm.open(id("about"));
        let start = rect_of(&wm, "about");
        wm.begin_resize(&id("about"), ResizeEdge::West, PointerPosition { x: 50, y: 300 });
        for x in [10, 300, 700, 900, 1200] {
            wm.update_resize(PointerPosition { x, y: 300 });
            assert_eq!(rect_of(&wm, "about").right(), start.right());
        }
        assert_eq!(rect_of(&wm, "about").w, 300);
    }

    #[test]
    fn closing_mid_drag_cancels_session() {
        let mut wm = manager();
        wm.open(id("about"));
        wm.begin_drag(&id("about"), PointerPosition { x: 60, y: 60 });
        wm.close(&id("about"));

        assert!(wm.interaction().is_idle());
        assert!(!wm.update_drag(PointerPosition { x: 90, y: 90 }));
    }

    #[test]
    fn open_requests_always_raise_the_window() {
        let mut wm = manager();
        wm.open(id("a"));
        wm.open(id("b"));
        let z_before = wm.window(&id("a")).unwrap().z_order;

        assert!(wm.handle_open_request(OpenWindowRequest::new(id("a"), false)));
        assert_eq!(wm.focused_window_id(), Some(&id("a")));
        assert!(wm.window(&id("a")).unwrap().z_order > z_before);

        let z_before = wm.window(&id("b")).unwrap().z_order;
        assert!(wm.handle_open_request(OpenWindowRequest::new(id("b"), true)));
        assert_eq!(wm.focused_window_id(), Some(&id("b")));
        assert_eq!(wm.window(&id("b")).unwrap().z_order, z_before + 3);

        assert!(wm.handle_open_request(OpenWindowRequest::new(id("c"), false)));
        assert_eq!(wm.windows().len(), 3);
        assert_eq!(wm.focused_window_id(), Some(&id("c")));
    }

    #[test]
    fn viewport_shrink_refits_visible_windows_only() {
        let mut wm = manager();
        wm.open(id("a"));
        wm.open(id("portfolio"));
        wm.open(id("b"));
        let minimized_rect = rect_of(&wm, "b");
        wm.minimize(&id("b"), &TaskbarIconRegistry::default());

        assert!(wm.set_viewport(Viewport {
            width: 900,
            height: 700
        }));

        assert_eq!(
            rect_of(&wm, "a"),
            WindowRect {
                x: 0,
                y: 0,
                w: 900,
                h: 700
            }
        );
        assert_eq!(
            rect_of(&wm, "portfolio"),
            WindowRect {
                x: 0,
                y: 0,
                w: 900,
                h: 652
            }
        );
        assert_eq!(rect_of(&wm, "b"), minimized_rect);
        assert!(!wm.set_viewport(wm.viewport()));
    }
}
