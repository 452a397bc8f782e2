//! Reactive container and context wiring for the desktop shell.
//!
//! This module owns the window registry signal, the pointer interaction
//! signal, and the loaded project catalog. UI composition stays in
//! [`crate::components`].

use leptos::*;
use portfolio_content::{load_projects_reporting, Project};
use window_core::{launcher, LaunchTarget, RectPatch, WindowKey, WindowRect, WindowRegistry};

use crate::interaction::InteractionState;

#[derive(Clone, Copy)]
/// Leptos context giving components access to the window registry, the
/// drag/resize interaction state, and the project catalog.
pub struct DesktopContext {
    /// Authoritative window registry signal.
    pub registry: RwSignal<WindowRegistry>,
    /// Pointer drag/resize interaction state signal.
    pub interaction: RwSignal<InteractionState>,
    /// Project records loaded from the embedded catalog.
    pub projects: RwSignal<Vec<Project>>,
}

impl DesktopContext {
    /// Runs the launch dispatcher for `target` against the registry.
    pub fn launch(&self, target: LaunchTarget, viewport: WindowRect) {
        self.registry
            .update(|registry| launcher::launch(registry, target, viewport));
    }

    /// Runs the launch dispatcher by application id; unknown ids do nothing.
    pub fn launch_app(&self, app_id: &str, viewport: WindowRect) {
        self.registry
            .update(|registry| launcher::launch_app(registry, app_id, viewport));
    }

    /// Opens (or toggles) the detail window for one project record.
    pub fn launch_project(&self, project: Project, viewport: WindowRect) {
        self.registry
            .update(|registry| launcher::launch_project(registry, project, viewport));
    }

    pub fn close(&self, key: &WindowKey) {
        self.registry.update(|registry| registry.close(key));
    }

    pub fn minimize(&self, key: &WindowKey) {
        self.registry.update(|registry| registry.minimize(key));
    }

    pub fn maximize(&self, key: &WindowKey) {
        self.registry.update(|registry| registry.maximize(key));
    }

    pub fn focus(&self, key: &WindowKey) {
        self.registry.update(|registry| registry.focus(key));
    }

    /// Commits a drag/resize result back into the registry.
    pub fn update_rect(&self, key: &WindowKey, patch: RectPatch) {
        self.registry.update(|registry| registry.update(key, patch));
    }
}

#[component]
/// Provides [`DesktopContext`] to descendant components and loads the
/// embedded project catalog.
pub fn DesktopProvider(children: Children) -> impl IntoView {
    let registry = create_rw_signal(WindowRegistry::new());
    let interaction = create_rw_signal(InteractionState::default());
    let records = load_projects_reporting(|name, err| {
        logging::warn!("skipping project document `{name}`: {err}");
    });
    let projects = create_rw_signal(records);

    provide_context(DesktopContext {
        registry,
        interaction,
        projects,
    });

    children().into_view()
}

/// Returns the current [`DesktopContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop() -> DesktopContext {
    use_context::<DesktopContext>().expect("DesktopContext not provided")
}
