//! Launch dispatcher: translates logical activations (dock clicks, icon
//! double-clicks, project rows) into registry calls with computed default
//! geometry.

use portfolio_content::Project;

use crate::model::{OpenWindowRequest, StaticPane, WindowContent, WindowKey, WindowRect};
use crate::registry::WindowRegistry;

pub const STATIC_PANE_WIDTH: i32 = 900;
pub const STATIC_PANE_HEIGHT: i32 = 500;
pub const PROJECT_WINDOW_WIDTH: i32 = 800;
pub const PROJECT_WINDOW_HEIGHT: i32 = 450;

pub const OPEN_STAGGER_X: i32 = 50;
pub const VERTICAL_STAGGER_CYCLE: [i32; 5] = [0, -30, 30, -60, 60];

/// One logical thing the desktop can open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchTarget {
    Education,
    Experience,
    About,
    Projects,
    ProjectDetail(Project),
}

impl LaunchTarget {
    /// Resolves a dock/icon application id. Unknown ids resolve to `None`.
    pub fn from_app_id(app_id: &str) -> Option<Self> {
        match app_id {
            "education" => Some(Self::Education),
            "experience" => Some(Self::Experience),
            "info" => Some(Self::About),
            "projects" => Some(Self::Projects),
            _ => None,
        }
    }

    pub fn window_key(&self) -> WindowKey {
        match self {
            Self::Education => WindowKey::new("education"),
            Self::Experience => WindowKey::new("experience"),
            Self::About => WindowKey::new("info"),
            Self::Projects => WindowKey::new("projects"),
            Self::ProjectDetail(project) => WindowKey::new(format!("project-{}", project.slug)),
        }
    }

    pub fn title(&self) -> String {
        match self {
            Self::Education => "Education".to_string(),
            Self::Experience => "Experience".to_string(),
            Self::About => "About Me".to_string(),
            Self::Projects => "Projects".to_string(),
            Self::ProjectDetail(project) => project.title.clone(),
        }
    }

    fn content(&self) -> WindowContent {
        match self {
            Self::Education => WindowContent::Static(StaticPane::Education),
            Self::Experience => WindowContent::Static(StaticPane::Experience),
            Self::About => WindowContent::Static(StaticPane::About),
            Self::Projects => WindowContent::ProjectBrowser,
            Self::ProjectDetail(project) => WindowContent::ProjectDetail(project.clone()),
        }
    }

    pub fn default_size(&self) -> (i32, i32) {
        match self {
            Self::Education | Self::Experience | Self::About => {
                (STATIC_PANE_WIDTH, STATIC_PANE_HEIGHT)
            }
            Self::Projects | Self::ProjectDetail(_) => (PROJECT_WINDOW_WIDTH, PROJECT_WINDOW_HEIGHT),
        }
    }
}

/// Computes where the next window opens.
///
/// The base position centers `size` inside `viewport` (never above or left
/// of it). Each already-open window pushes the new one right by a fixed
/// stagger and through a short cycle of vertical offsets, so windows opened
/// in sequence never land exactly on top of each other.
pub fn placement_rect(open_count: usize, size: (i32, i32), viewport: WindowRect) -> WindowRect {
    let (w, h) = size;
    let base_x = viewport.x + ((viewport.w - w) / 2).max(0);
    let base_y = viewport.y + ((viewport.h - h) / 2).max(0);
    let dx = open_count as i32 * OPEN_STAGGER_X;
    let dy = VERTICAL_STAGGER_CYCLE[open_count % VERTICAL_STAGGER_CYCLE.len()];
    WindowRect::new(base_x, base_y, w, h).offset(dx, dy)
}

/// Routes one activation of `target` through the registry.
///
/// An open, visible window minimizes; an open, minimized window restores
/// and focuses; anything else (absent or closed) opens fresh at a
/// [`placement_rect`] position.
pub fn launch(registry: &mut WindowRegistry, target: LaunchTarget, viewport: WindowRect) {
    let key = target.window_key();
    if let Some(window) = registry.get(&key) {
        if window.open {
            if window.minimized {
                registry.focus(&key);
            } else {
                registry.minimize(&key);
            }
            return;
        }
    }
    let rect = placement_rect(registry.open_count(), target.default_size(), viewport);
    let title = target.title();
    let content = target.content();
    registry.open(OpenWindowRequest::new(key, title, content, rect));
}

/// Launches by application id; unknown ids do nothing.
pub fn launch_app(registry: &mut WindowRegistry, app_id: &str, viewport: WindowRect) {
    if let Some(target) = LaunchTarget::from_app_id(app_id) {
        launch(registry, target, viewport);
    }
}

/// Opens (or toggles) the detail pane for one project record.
pub fn launch_project(registry: &mut WindowRegistry, project: Project, viewport: WindowRect) {
    launch(registry, LaunchTarget::ProjectDetail(project), viewport);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::STACK_ORDER_BASE;
    use pretty_assertions::assert_eq;

    fn viewport() -> WindowRect {
        WindowRect::new(0, 0, 1200, 800)
    }

    fn sample_project(slug: &str) -> Project {
        Project {
            slug: slug.to_string(),
            title: "HandAR".to_string(),
            stack: vec!["Unity".to_string(), "ARKit".to_string()],
            tags: Vec::new(),
            category: Some("XR Projects".to_string()),
            cover: None,
            gallery: Vec::new(),
            links: Vec::new(),
            body: "Hand-tracked AR interaction demo.".to_string(),
        }
    }

    #[test]
    fn first_window_centers_in_the_viewport() {
        let rect = placement_rect(0, (800, 800), viewport());
        assert_eq!(rect, WindowRect::new(200, 0, 800, 800));
    }

    #[test]
    fn centering_never_places_above_or_left_of_the_viewport() {
        let rect = placement_rect(0, (1400, 900), viewport());
        assert_eq!((rect.x, rect.y), (0, 0));
    }

    #[test]
    fn later_windows_stagger_right_and_cycle_vertically() {
        let size = (800, 450);
        let base = placement_rect(0, size, viewport());
        for count in 1..7 {
            let rect = placement_rect(count, size, viewport());
            assert_eq!(rect.x, base.x + count as i32 * OPEN_STAGGER_X);
            assert_eq!(
                rect.y,
                base.y + VERTICAL_STAGGER_CYCLE[count % VERTICAL_STAGGER_CYCLE.len()]
            );
        }
    }

    #[test]
    fn launching_an_absent_app_opens_it_front_and_centered() {
        let mut registry = WindowRegistry::new();
        launch_app(&mut registry, "projects", viewport());

        let window = registry.get(&WindowKey::new("projects")).unwrap();
        assert!(window.open);
        assert_eq!(window.title, "Projects");
        assert_eq!(window.content, WindowContent::ProjectBrowser);
        assert_eq!(window.rect, WindowRect::new(200, 175, 800, 450));
        assert_eq!(window.stack_order, STACK_ORDER_BASE);
    }

    #[test]
    fn static_panes_and_project_panes_carry_distinct_sizes() {
        let mut registry = WindowRegistry::new();
        launch_app(&mut registry, "education", viewport());
        launch_project(&mut registry, sample_project("handar"), viewport());

        let education = registry.get(&WindowKey::new("education")).unwrap();
        assert_eq!((education.rect.w, education.rect.h), (900, 500));

        let detail = registry.get(&WindowKey::new("project-handar")).unwrap();
        assert_eq!((detail.rect.w, detail.rect.h), (800, 450));
        assert_eq!(detail.title, "HandAR");
    }

    #[test]
    fn launching_a_visible_app_minimizes_without_refocusing() {
        let mut registry = WindowRegistry::new();
        launch_app(&mut registry, "info", viewport());
        let order_before = registry.get(&WindowKey::new("info")).unwrap().stack_order;

        launch_app(&mut registry, "info", viewport());
        let window = registry.get(&WindowKey::new("info")).unwrap();
        assert!(window.open);
        assert!(window.minimized);
        assert_eq!(window.stack_order, order_before);
    }

    #[test]
    fn launching_a_minimized_app_restores_and_focuses() {
        let mut registry = WindowRegistry::new();
        launch_app(&mut registry, "info", viewport());
        launch_app(&mut registry, "education", viewport());
        launch_app(&mut registry, "info", viewport());
        assert!(registry.get(&WindowKey::new("info")).unwrap().minimized);

        launch_app(&mut registry, "info", viewport());
        let window = registry.get(&WindowKey::new("info")).unwrap();
        assert!(!window.minimized);
        assert_eq!(window.stack_order, STACK_ORDER_BASE + 2);
        assert_eq!(registry.focused_key(), Some(&WindowKey::new("info")));
    }

    #[test]
    fn relaunching_a_closed_app_recomputes_placement() {
        let mut registry = WindowRegistry::new();
        launch_app(&mut registry, "info", viewport());
        launch_app(&mut registry, "education", viewport());
        registry.close(&WindowKey::new("info"));

        launch_app(&mut registry, "info", viewport());
        let window = registry.get(&WindowKey::new("info")).unwrap();
        assert!(window.open);
        assert!(!window.minimized);
        // One window remained open, so the reopened pane sits one stagger out.
        assert_eq!(
            window.rect,
            placement_rect(1, (STATIC_PANE_WIDTH, STATIC_PANE_HEIGHT), viewport())
        );
    }

    #[test]
    fn unknown_app_ids_are_ignored() {
        let mut registry = WindowRegistry::new();
        launch_app(&mut registry, "solitaire", viewport());
        assert_eq!(registry.windows().len(), 0);
    }

    #[test]
    fn project_windows_key_by_slug() {
        let mut registry = WindowRegistry::new();
        launch_project(&mut registry, sample_project("handar"), viewport());
        launch_project(&mut registry, sample_project("galileoar"), viewport());

        assert_eq!(registry.open_count(), 2);
        assert!(registry.get(&WindowKey::new("project-handar")).is_some());
        assert!(registry.get(&WindowKey::new("project-galileoar")).is_some());
    }
}
