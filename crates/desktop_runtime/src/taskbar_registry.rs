//! Push-based registry of taskbar button rectangles and minimize-animation targeting.
//!
//! The taskbar publishes the on-screen rect of every button it renders. Minimizing reads the
//! registry to decide where the collapse animation glides to; a missing entry only changes the
//! animation target, never the state transition.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::{PointerPosition, Viewport, WindowId, WindowRect};

/// Read-only lookup of the screen rect of a window's taskbar affordance.
pub trait IconPositionQuery {
    fn icon_rect(&self, window_id: &WindowId) -> Option<WindowRect>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskbarIconRegistry {
    rects: HashMap<WindowId, WindowRect>,
}

impl TaskbarIconRegistry {
    /// Records the latest rect for a rendered taskbar button.
    pub fn publish(&mut self, window_id: WindowId, rect: WindowRect) {
        self.rects.insert(window_id, rect);
    }

    /// Drops the rect of a button that is no longer rendered.
    pub fn withdraw(&mut self, window_id: &WindowId) {
        self.rects.remove(window_id);
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}

impl IconPositionQuery for TaskbarIconRegistry {
    fn icon_rect(&self, window_id: &WindowId) -> Option<WindowRect> {
        self.rects.get(window_id).copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MinimizeTargetSource {
    TaskbarIcon,
    Fallback,
}

/// Point a minimizing window animates toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinimizeTarget {
    /// Absolute screen point.
    pub point: PointerPosition,
    /// Translation from the window's center to `point`.
    pub dx: i32,
    pub dy: i32,
    pub source: MinimizeTargetSource,
}

/// Resolves the collapse target for a window currently occupying `window_rect`.
pub fn resolve_minimize_target(
    window_id: &WindowId,
    window_rect: WindowRect,
    viewport: Viewport,
    icons: &impl IconPositionQuery,
) -> MinimizeTarget {
    let (point, source) = match icons.icon_rect(window_id) {
        Some(icon) => (icon.center(), MinimizeTargetSource::TaskbarIcon),
        None => (
            PointerPosition {
                x: viewport.width / 2,
                y: viewport.height,
            },
            MinimizeTargetSource::Fallback,
        ),
    };
    let origin = window_rect.center();
    MinimizeTarget {
        point,
        dx: point.x - origin.x,
        dy: point.y - origin.y,
        source,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const VIEWPORT: Viewport = Viewport {
        width: 1600,
        height: 1000,
    };

    #[test]
    fn targets_published_icon_center() {
        let mut icons = TaskbarIconRegistry::default();
        icons.publish(
            WindowId::from("about"),
            WindowRect {
                x: 200,
                y: 960,
                w: 40,
                h: 40,
            },
        );
        let target = resolve_minimize_target(
            &WindowId::from("about"),
            WindowRect {
                x: 100,
                y: 100,
                w: 400,
                h: 200,
            },
            VIEWPORT,
            &icons,
        );
        assert_eq!(target.point, PointerPosition { x: 220, y: 980 });
        assert_eq!((target.dx, target.dy), (-80, 780));
        assert_eq!(target.source, MinimizeTargetSource::TaskbarIcon);
    }

    #[test]
    fn falls_back_to_bottom_center_when_icon_missing() {
        let mut icons = TaskbarIconRegistry::default();
        icons.publish(
            WindowId::from("about"),
            WindowRect {
                x: 0,
                y: 0,
                w: 10,
                h: 10,
            },
        );
        icons.withdraw(&WindowId::from("about"));
        assert!(icons.is_empty());

        let target = resolve_minimize_target(
            &WindowId::from("about"),
            WindowRect {
                x: 0,
                y: 0,
                w: 800,
                h: 600,
            },
            VIEWPORT,
            &icons,
        );
        assert_eq!(target.point, PointerPosition { x: 800, y: 1000 });
        assert_eq!((target.dx, target.dy), (400, 700));
        assert_eq!(target.source, MinimizeTargetSource::Fallback);
    }
}
