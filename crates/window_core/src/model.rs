use portfolio_content::Project;
use serde::{Deserialize, Serialize};

pub const STACK_ORDER_BASE: u64 = 1000;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowKey(String);

impl WindowKey {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WindowKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StaticPane {
    Education,
    Experience,
    About,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowContent {
    Static(StaticPane),
    ProjectBrowser,
    ProjectDetail(Project),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    pub fn clamped_min(self, min_w: i32, min_h: i32) -> Self {
        Self {
            w: self.w.max(min_w),
            h: self.h.max(min_h),
            ..self
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub key: WindowKey,
    pub title: String,
    pub content: WindowContent,
    pub open: bool,
    pub minimized: bool,
    pub maximized: bool,
    pub rect: WindowRect,
    pub stack_order: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenWindowRequest {
    pub key: WindowKey,
    pub title: String,
    pub content: WindowContent,
    pub rect: WindowRect,
    pub minimized: bool,
    pub maximized: bool,
}

impl OpenWindowRequest {
    pub fn new(key: WindowKey, title: String, content: WindowContent, rect: WindowRect) -> Self {
        Self {
            key,
            title,
            content,
            rect,
            minimized: false,
            maximized: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RectPatch {
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub w: Option<i32>,
    pub h: Option<i32>,
}

impl RectPatch {
    pub fn position(x: i32, y: i32) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }

    pub fn size(w: i32, h: i32) -> Self {
        Self {
            w: Some(w),
            h: Some(h),
            ..Self::default()
        }
    }

    pub fn bounds(rect: WindowRect) -> Self {
        Self {
            x: Some(rect.x),
            y: Some(rect.y),
            w: Some(rect.w),
            h: Some(rect.h),
        }
    }
}
