pub mod components;
pub mod context;
pub mod host;
pub mod icons;
pub mod interaction;

pub use components::{BootScreen, DesktopShell, LockScreen, DOCK_HEIGHT_PX};
pub use context::{use_desktop, DesktopContext, DesktopProvider};
pub use host::{desktop_viewport, ClockSnapshot};
pub use icons::{Icon, IconName, IconSize};
pub use interaction::{
    DragSession, InteractionState, PointerPosition, ResizeEdge, ResizeSession, MIN_WINDOW_HEIGHT,
    MIN_WINDOW_WIDTH,
};
