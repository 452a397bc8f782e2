//! Window registry: the single source of truth for every window the desktop
//! has ever opened, keyed by stable [`WindowKey`].
//!
//! Records are never removed. Closing a window clears its `open` flag and
//! keeps the record around so a later open of the same key reuses the slot.
//! Stacking is a monotonic counter: whichever open, visible window holds the
//! highest `stack_order` is focused. Operations on unknown keys are silent
//! no-ops.

use crate::model::{
    OpenWindowRequest, RectPatch, WindowKey, WindowRecord, WindowRect, STACK_ORDER_BASE,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowRegistry {
    windows: Vec<WindowRecord>,
    next_stack_order: u64,
}

impl Default for WindowRegistry {
    fn default() -> Self {
        Self {
            windows: Vec::new(),
            next_stack_order: STACK_ORDER_BASE,
        }
    }
}

impl WindowRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn fresh_stack_order(&mut self) -> u64 {
        let order = self.next_stack_order;
        self.next_stack_order = self.next_stack_order.saturating_add(1);
        order
    }

    fn find_window_mut(&mut self, key: &WindowKey) -> Option<&mut WindowRecord> {
        self.windows.iter_mut().find(|window| &window.key == key)
    }

    /// Opens a window from `request`, bringing it to the front.
    ///
    /// A first open for the key inserts a new record. Opening a key that
    /// already has a record (open, minimized, or closed) reuses the slot:
    /// the title, content, rect, and maximized flag are taken from the
    /// request, the window becomes open and visible, and it receives a
    /// fresh stack order.
    pub fn open(&mut self, request: OpenWindowRequest) {
        let stack_order = self.fresh_stack_order();
        match self.find_window_mut(&request.key) {
            Some(window) => {
                window.title = request.title;
                window.content = request.content;
                window.rect = request.rect;
                window.maximized = request.maximized;
                window.open = true;
                window.minimized = request.minimized;
                window.stack_order = stack_order;
            }
            None => {
                self.windows.push(WindowRecord {
                    key: request.key,
                    title: request.title,
                    content: request.content,
                    open: true,
                    minimized: request.minimized,
                    maximized: request.maximized,
                    rect: request.rect,
                    stack_order,
                });
            }
        }
    }

    /// Marks the window closed. Its record, rect, and flags survive for a
    /// later reopen.
    pub fn close(&mut self, key: &WindowKey) {
        if let Some(window) = self.find_window_mut(key) {
            window.open = false;
        }
    }

    /// Toggles the minimized flag. Nothing else changes, so restoring a
    /// minimized window returns it exactly where it was in the stack.
    pub fn minimize(&mut self, key: &WindowKey) {
        if let Some(window) = self.find_window_mut(key) {
            window.minimized = !window.minimized;
        }
    }

    /// Toggles the maximized flag. The stored rect is untouched, so leaving
    /// the maximized state restores the previous geometry.
    pub fn maximize(&mut self, key: &WindowKey) {
        if let Some(window) = self.find_window_mut(key) {
            window.maximized = !window.maximized;
        }
    }

    /// Brings the window to the front and un-minimizes it.
    pub fn focus(&mut self, key: &WindowKey) {
        let Some(index) = self.windows.iter().position(|window| &window.key == key) else {
            return;
        };
        let stack_order = self.fresh_stack_order();
        let window = &mut self.windows[index];
        window.stack_order = stack_order;
        window.minimized = false;
    }

    /// Merges `patch` into the window's rect. Absent fields keep their
    /// current value.
    pub fn update(&mut self, key: &WindowKey, patch: RectPatch) {
        if let Some(window) = self.find_window_mut(key) {
            if let Some(x) = patch.x {
                window.rect.x = x;
            }
            if let Some(y) = patch.y {
                window.rect.y = y;
            }
            if let Some(w) = patch.w {
                window.rect.w = w;
            }
            if let Some(h) = patch.h {
                window.rect.h = h;
            }
        }
    }

    pub fn windows(&self) -> &[WindowRecord] {
        &self.windows
    }

    pub fn get(&self, key: &WindowKey) -> Option<&WindowRecord> {
        self.windows.iter().find(|window| &window.key == key)
    }

    pub fn open_count(&self) -> usize {
        self.windows.iter().filter(|window| window.open).count()
    }

    /// The key of the frontmost open, visible window, if any.
    pub fn focused_key(&self) -> Option<&WindowKey> {
        self.windows
            .iter()
            .filter(|window| window.open && !window.minimized)
            .max_by_key(|window| window.stack_order)
            .map(|window| &window.key)
    }
}
