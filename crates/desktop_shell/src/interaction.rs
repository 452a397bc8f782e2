//! Shell-side drag/resize interaction state and geometry math.
//!
//! Sessions live outside the registry: a pointer move only updates the
//! session's current pointer, the window renders a preview rect derived
//! from the session, and a single `update` is committed to the registry
//! when the gesture completes.

use window_core::{WindowKey, WindowRect};

pub const MIN_WINDOW_WIDTH: i32 = 320;
pub const MIN_WINDOW_HEIGHT: i32 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeEdge {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub key: WindowKey,
    pub pointer_start: PointerPosition,
    pub pointer: PointerPosition,
    pub rect_start: WindowRect,
}

impl DragSession {
    pub fn begin(key: WindowKey, pointer: PointerPosition, rect_start: WindowRect) -> Self {
        Self {
            key,
            pointer_start: pointer,
            pointer,
            rect_start,
        }
    }

    /// Rect the window renders while the drag is in flight.
    pub fn preview_rect(&self) -> WindowRect {
        let dx = self.pointer.x - self.pointer_start.x;
        let dy = self.pointer.y - self.pointer_start.y;
        self.rect_start.offset(dx, dy)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeSession {
    pub key: WindowKey,
    pub edge: ResizeEdge,
    pub pointer_start: PointerPosition,
    pub pointer: PointerPosition,
    pub rect_start: WindowRect,
}

impl ResizeSession {
    pub fn begin(
        key: WindowKey,
        edge: ResizeEdge,
        pointer: PointerPosition,
        rect_start: WindowRect,
    ) -> Self {
        Self {
            key,
            edge,
            pointer_start: pointer,
            pointer,
            rect_start,
        }
    }

    /// Rect the window renders while the resize is in flight, held to the
    /// minimum window size.
    pub fn preview_rect(&self) -> WindowRect {
        let dx = self.pointer.x - self.pointer_start.x;
        let dy = self.pointer.y - self.pointer_start.y;
        resize_rect(self.rect_start, self.edge, dx, dy)
            .clamped_min(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub dragging: Option<DragSession>,
    pub resizing: Option<ResizeSession>,
}

impl InteractionState {
    pub fn is_active(&self) -> bool {
        self.dragging.is_some() || self.resizing.is_some()
    }
}

pub fn resize_rect(start: WindowRect, edge: ResizeEdge, dx: i32, dy: i32) -> WindowRect {
    match edge {
        ResizeEdge::East => WindowRect {
            w: start.w + dx,
            ..start
        },
        ResizeEdge::West => WindowRect {
            x: start.x + dx,
            w: start.w - dx,
            ..start
        },
        ResizeEdge::South => WindowRect {
            h: start.h + dy,
            ..start
        },
        ResizeEdge::North => WindowRect {
            y: start.y + dy,
            h: start.h - dy,
            ..start
        },
        ResizeEdge::NorthEast => WindowRect {
            y: start.y + dy,
            h: start.h - dy,
            w: start.w + dx,
            ..start
        },
        ResizeEdge::NorthWest => WindowRect {
            x: start.x + dx,
            y: start.y + dy,
            w: start.w - dx,
            h: start.h - dy,
        },
        ResizeEdge::SouthEast => WindowRect {
            w: start.w + dx,
            h: start.h + dy,
            ..start
        },
        ResizeEdge::SouthWest => WindowRect {
            x: start.x + dx,
            w: start.w - dx,
            h: start.h + dy,
            ..start
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn start_rect() -> WindowRect {
        WindowRect::new(100, 100, 640, 400)
    }

    fn pointer(x: i32, y: i32) -> PointerPosition {
        PointerPosition { x, y }
    }

    #[test]
    fn drag_preview_follows_the_pointer_delta() {
        let mut session = DragSession::begin(WindowKey::new("info"), pointer(500, 300), start_rect());
        session.pointer = pointer(530, 260);

        assert_eq!(session.preview_rect(), WindowRect::new(130, 60, 640, 400));
    }

    #[test]
    fn drag_preview_without_movement_is_the_start_rect() {
        let session = DragSession::begin(WindowKey::new("info"), pointer(500, 300), start_rect());
        assert_eq!(session.preview_rect(), start_rect());
    }

    #[test]
    fn east_and_south_edges_grow_without_moving_the_origin() {
        assert_eq!(
            resize_rect(start_rect(), ResizeEdge::East, 40, 999),
            WindowRect::new(100, 100, 680, 400)
        );
        assert_eq!(
            resize_rect(start_rect(), ResizeEdge::South, 999, 25),
            WindowRect::new(100, 100, 640, 425)
        );
    }

    #[test]
    fn west_and_north_edges_move_the_origin_while_resizing() {
        assert_eq!(
            resize_rect(start_rect(), ResizeEdge::West, 30, 0),
            WindowRect::new(130, 100, 610, 400)
        );
        assert_eq!(
            resize_rect(start_rect(), ResizeEdge::North, 0, -20),
            WindowRect::new(100, 80, 640, 420)
        );
    }

    #[test]
    fn corner_edges_combine_both_axes() {
        assert_eq!(
            resize_rect(start_rect(), ResizeEdge::NorthWest, 10, 15),
            WindowRect::new(110, 115, 630, 385)
        );
        assert_eq!(
            resize_rect(start_rect(), ResizeEdge::SouthEast, -10, -15),
            WindowRect::new(100, 100, 630, 385)
        );
        assert_eq!(
            resize_rect(start_rect(), ResizeEdge::NorthEast, 10, 15),
            WindowRect::new(100, 115, 650, 385)
        );
        assert_eq!(
            resize_rect(start_rect(), ResizeEdge::SouthWest, 10, 15),
            WindowRect::new(110, 100, 630, 415)
        );
    }

    #[test]
    fn resize_preview_is_held_to_the_minimum_size() {
        let mut session = ResizeSession::begin(
            WindowKey::new("info"),
            ResizeEdge::SouthEast,
            pointer(740, 500),
            start_rect(),
        );
        session.pointer = pointer(140, 90);

        let preview = session.preview_rect();
        assert_eq!((preview.w, preview.h), (MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT));
        assert_eq!((preview.x, preview.y), (100, 100));
    }

    #[test]
    fn interaction_state_reports_activity() {
        let mut state = InteractionState::default();
        assert!(!state.is_active());

        state.dragging = Some(DragSession::begin(
            WindowKey::new("info"),
            pointer(0, 0),
            start_rect(),
        ));
        assert!(state.is_active());
    }
}
