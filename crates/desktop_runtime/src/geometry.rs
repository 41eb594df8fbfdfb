//! Pure per-window geometry: drag, eight-way resize, fullscreen and placement arithmetic.
//!
//! Nothing here knows about other windows. Every function takes the starting geometry plus the
//! viewport and returns the new rectangle; callers write the result back into the record.

use crate::{
    config::WindowManagerConfig,
    model::{PointerPosition, ResizeEdge, Viewport, WindowRect},
};

/// Pointer travel, per axis, that turns a press on a fullscreen titlebar into a drag.
pub const DRAG_THRESHOLD_PX: i32 = 4;

/// Clamps `value` into `[0, max]`, letting `0` win when the range is empty.
fn clamp_to_span(value: i32, max: i32) -> i32 {
    value.min(max).max(0)
}

/// Pointer offset from the window origin, captured when a drag begins.
pub fn drag_offset(rect: WindowRect, pointer: PointerPosition) -> PointerPosition {
    PointerPosition {
        x: pointer.x - rect.x,
        y: pointer.y - rect.y,
    }
}

/// Whether the pointer has left the press point by more than [`DRAG_THRESHOLD_PX`].
pub fn exceeds_drag_threshold(press: PointerPosition, pointer: PointerPosition) -> bool {
    (pointer.x - press.x).abs() > DRAG_THRESHOLD_PX
        || (pointer.y - press.y).abs() > DRAG_THRESHOLD_PX
}

/// Moves `rect` so its origin follows the pointer, kept fully inside the viewport.
pub fn drag_rect(
    rect: WindowRect,
    pointer: PointerPosition,
    offset: PointerPosition,
    viewport: Viewport,
) -> WindowRect {
    WindowRect {
        x: clamp_to_span(pointer.x - offset.x, viewport.width - rect.w),
        y: clamp_to_span(pointer.y - offset.y, viewport.height - rect.h),
        ..rect
    }
}

/// Applies a resize delta for `edge` to the geometry captured at resize start.
///
/// East/south edges change the size directly. West/north edges keep the opposite edge fixed,
/// including when the size hits the floor. Growth stops at the viewport boundary.
pub fn resize_rect(
    start: WindowRect,
    edge: ResizeEdge,
    dx: i32,
    dy: i32,
    config: &WindowManagerConfig,
    viewport: Viewport,
) -> WindowRect {
    let (x, w) = if edge.touches_east() {
        let w = (start.w + dx)
            .min(viewport.width - start.x)
            .max(config.min_width);
        (start.x, w)
    } else if edge.touches_west() {
        let right = start.right();
        let w = (start.w - dx).min(right).max(config.min_width);
        (right - w, w)
    } else {
        (start.x, start.w)
    };

    let (y, h) = if edge.touches_south() {
        let h = (start.h + dy)
            .min(viewport.height - start.y)
            .max(config.min_height);
        (start.y, h)
    } else if edge.touches_north() {
        let bottom = start.bottom();
        let h = (start.h - dy).min(bottom).max(config.min_height);
        (bottom - h, h)
    } else {
        (start.y, start.h)
    };

    WindowRect { x, y, w, h }
}

/// Geometry of a fullscreen window: the whole viewport minus the taskbar strip.
pub fn fullscreen_rect(viewport: Viewport, taskbar_height: i32) -> WindowRect {
    WindowRect {
        x: 0,
        y: 0,
        w: viewport.width,
        h: (viewport.height - taskbar_height).max(0),
    }
}

/// Staggered placement for the window opened while `index` others are already open.
pub fn cascade_rect(index: usize, config: &WindowManagerConfig, viewport: Viewport) -> WindowRect {
    let step = i32::try_from(index)
        .unwrap_or(i32::MAX)
        .saturating_mul(config.cascade_step);
    let offset = config.cascade_base.saturating_add(step);
    fit_rect_to_viewport(
        WindowRect {
            x: offset,
            y: offset,
            w: config.default_width,
            h: config.default_height,
        },
        config,
        viewport,
    )
}

/// Fallback geometry when leaving fullscreen without a saved snapshot.
pub fn default_rect(config: &WindowManagerConfig, viewport: Viewport) -> WindowRect {
    cascade_rect(0, config, viewport)
}

/// Shrinks and moves `rect` so it lies inside the viewport, never below the size floors.
pub fn fit_rect_to_viewport(
    rect: WindowRect,
    config: &WindowManagerConfig,
    viewport: Viewport,
) -> WindowRect {
    let w = rect.w.min(viewport.width).max(config.min_width);
    let h = rect.h.min(viewport.height).max(config.min_height);
    WindowRect {
        x: clamp_to_span(rect.x, viewport.width - w),
        y: clamp_to_span(rect.y, viewport.height - h),
        w,
        h,
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

    fn rect(x: i32, y: i32, w: i32, h: i32) -> WindowRect {
        WindowRect { x, y, w, h }
    }

    #[test]
    fn drag_follows_pointer_minus_offset() {
        let start = rect(100, 100, 400, 300);
        let offset = drag_offset(start, PointerPosition { x: 120, y: 110 });
        let moved = drag_rect(start, PointerPosition { x: 320, y: 410 }, offset, VIEWPORT);
        assert_eq!(moved, rect(300, 400, 400, 300));
    }

    #[test]
    fn drag_threshold_is_per_axis_and_exclusive() {
        let press = PointerPosition { x: 100, y: 100 };
        assert!(!exceeds_drag_threshold(press, PointerPosition { x: 104, y: 96 }));
        assert!(exceeds_drag_threshold(press, PointerPosition { x: 105, y: 100 }));
        assert!(exceeds_drag_threshold(press, PointerPosition { x: 100, y: 95 }));
    }

    #[test]
    fn drag_clamps_to_every_viewport_edge() {
        let start = rect(100, 100, 400, 300);
        let offset = PointerPosition { x: 10, y: 10 };

        let top_left = drag_rect(start, PointerPosition { x: -500, y: -20 }, offset, VIEWPORT);
        assert_eq!((top_left.x, top_left.y), (0, 0));

        let bottom_right = drag_rect(start, PointerPosition { x: 9000, y: 9000 }, offset, VIEWPORT);
        assert_eq!((bottom_right.x, bottom_right.y), (1200, 700));
    }

    #[test]
    fn drag_of_oversized_window_pins_to_origin() {
        let start = rect(0, 0, 2000, 1200);
        let moved = drag_rect(
            start,
            PointerPosition { x: 300, y: 300 },
            PointerPosition { x: 0, y: 0 },
            VIEWPORT,
        );
        assert_eq!((moved.x, moved.y), (0, 0));
    }

    #[test]
    fn east_and_south_resize_change_size_only() {
        let config = WindowManagerConfig::default();
        let start = rect(100, 100, 500, 400);
        let resized = resize_rect(start, ResizeEdge::SouthEast, 60, -50, &config, VIEWPORT);
        assert_eq!(resized, rect(100, 100, 560, 350));
    }

    #[test]
    fn east_resize_respects_floor_and_viewport() {
        let config = WindowManagerConfig::default();
        let start = rect(100, 100, 500, 400);
        assert_eq!(
            resize_rect(start, ResizeEdge::East, -900, 0, &config, VIEWPORT).w,
            config.min_width
        );
        assert_eq!(
            resize_rect(start, ResizeEdge::East, 5000, 0, &config, VIEWPORT).w,
            1500
        );
    }

    #[test]
    fn west_resize_keeps_right_edge_fixed() {
        let config = WindowManagerConfig::default();
        let start = rect(400, 100, 500, 400);
        for dx in [-200, -1, 0, 35, 199, 200, 201, 450, 10_000] {
            let resized = resize_rect(start, ResizeEdge::West, dx, 0, &config, VIEWPORT);
            assert_eq!(resized.right(), start.right(), "dx = {dx}");
            assert!(resized.w >= config.min_width);
            assert!(resized.x >= 0);
        }
    }

    #[test]
    fn west_resize_stops_moving_origin_at_floor() {
        let config = WindowManagerConfig::default();
        let start = rect(400, 100, 500, 400);
        let at_floor = resize_rect(start, ResizeEdge::West, 200, 0, &config, VIEWPORT);
        let past_floor = resize_rect(start, ResizeEdge::West, 320, 0, &config, VIEWPORT);
        assert_eq!(at_floor, rect(600, 100, 300, 400));
        assert_eq!(past_floor, at_floor);
    }

    #[test]
    fn west_resize_cannot_push_origin_off_screen() {
        let config = WindowManagerConfig::default();
        let start = rect(40, 100, 500, 400);
        let resized = resize_rect(start, ResizeEdge::West, -300, 0, &config, VIEWPORT);
        assert_eq!(resized, rect(0, 100, 540, 400));
    }

    #[test]
    fn north_resize_keeps_bottom_edge_fixed() {
        let config = WindowManagerConfig::default();
        let start = rect(100, 300, 500, 400);
        for dy in [-400, -300, -10, 0, 150, 200, 201, 900] {
            let resized = resize_rect(start, ResizeEdge::North, 0, dy, &config, VIEWPORT);
            assert_eq!(resized.bottom(), start.bottom(), "dy = {dy}");
            assert!(resized.h >= config.min_height);
        }
    }

    #[test]
    fn corner_resize_combines_axis_rules() {
        let config = WindowManagerConfig::default();
        let start = rect(400, 300, 500, 400);

        let nw = resize_rect(start, ResizeEdge::NorthWest, -50, 1000, &config, VIEWPORT);
        assert_eq!(nw, rect(350, 500, 550, 200));

        let sw = resize_rect(start, ResizeEdge::SouthWest, 100, 20, &config, VIEWPORT);
        assert_eq!(sw, rect(500, 300, 400, 420));

        let ne = resize_rect(start, ResizeEdge::NorthEast, 30, -30, &config, VIEWPORT);
        assert_eq!(ne, rect(400, 270, 530, 430));
    }

    #[test]
    fn fullscreen_excludes_taskbar() {
        assert_eq!(fullscreen_rect(VIEWPORT, 48), rect(0, 0, 1600, 952));
    }

    #[test]
    fn cascade_offsets_by_index_and_stays_on_screen() {
        let config = WindowManagerConfig::default();
        assert_eq!(cascade_rect(0, &config, VIEWPORT), rect(50, 50, 1000, 800));
        assert_eq!(cascade_rect(2, &config, VIEWPORT), rect(110, 110, 1000, 800));

        let far = cascade_rect(40, &config, VIEWPORT);
        assert_eq!(far, rect(600, 200, 1000, 800));
    }

    #[test]
    fn cascade_shrinks_to_small_viewport_but_not_below_floor() {
        let config = WindowManagerConfig::default();
        let small = Viewport {
            width: 800,
            height: 600,
        };
        assert_eq!(cascade_rect(0, &config, small), rect(0, 0, 800, 600));

        let tiny = Viewport {
            width: 200,
            height: 100,
        };
        let placed = cascade_rect(3, &config, tiny);
        assert_eq!(placed, rect(0, 0, 300, 200));
    }
}
