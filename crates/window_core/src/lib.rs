//! Core window bookkeeping for the desktop simulation: the window registry,
//! the launch dispatcher, and the double-activation gate. Everything here is
//! plain synchronous state with no rendering dependencies, so it tests
//! without a browser.

pub mod activation;
pub mod launcher;
pub mod model;
pub mod registry;

pub use activation::{
    ActivationGate, GateTransition, DEFAULT_ACTIVATION_DELAY, POINTER_ACTIVATION_DELAY,
    TOUCH_ACTIVATION_DELAY,
};
pub use launcher::{
    launch, launch_app, launch_project, placement_rect, LaunchTarget, PROJECT_WINDOW_HEIGHT,
    PROJECT_WINDOW_WIDTH, STATIC_PANE_HEIGHT, STATIC_PANE_WIDTH,
};
pub use model::*;
pub use registry::WindowRegistry;
