//! Desktop shell UI composition and interaction surfaces.

mod boot;
mod dock;
mod lock;
mod panes;
mod window;

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::*;
use window_core::{
    ActivationGate, GateTransition, RectPatch, StaticPane, WindowContent, WindowKey, WindowRecord,
    DEFAULT_ACTIVATION_DELAY, POINTER_ACTIVATION_DELAY, TOUCH_ACTIVATION_DELAY,
};

use self::{dock::Dock, window::DesktopWindow};

use crate::{
    context::{use_desktop, DesktopContext},
    host::desktop_viewport,
    icons::{Icon, IconName, IconSize},
    interaction::{DragSession, InteractionState, PointerPosition, ResizeEdge, ResizeSession},
};

pub use self::boot::BootScreen;
pub use self::lock::LockScreen;

pub const DOCK_HEIGHT_PX: i32 = 56;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ShellApplication {
    id: &'static str,
    label: &'static str,
    icon: IconName,
}

const SHELL_APPLICATIONS: [ShellApplication; 4] = [
    ShellApplication {
        id: "education",
        label: "Education",
        icon: IconName::GraduationCap,
    },
    ShellApplication {
        id: "experience",
        label: "Experience",
        icon: IconName::Briefcase,
    },
    ShellApplication {
        id: "info",
        label: "About Me",
        icon: IconName::Person,
    },
    ShellApplication {
        id: "projects",
        label: "Projects",
        icon: IconName::FolderOpen,
    },
];

fn window_icon_name(content: &WindowContent) -> IconName {
    match content {
        WindowContent::Static(StaticPane::Education) => IconName::GraduationCap,
        WindowContent::Static(StaticPane::Experience) => IconName::Briefcase,
        WindowContent::Static(StaticPane::About) => IconName::Person,
        WindowContent::ProjectBrowser => IconName::FolderOpen,
        WindowContent::ProjectDetail(_) => IconName::DocumentText,
    }
}

#[component]
/// Renders the desktop surface: icon grid, window layer, and dock.
pub fn DesktopShell() -> impl IntoView {
    let desktop = use_desktop();
    let selected_icon = create_rw_signal(None::<&'static str>);

    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        if !desktop.interaction.get_untracked().is_active() {
            return;
        }
        let pointer = pointer_from_pointer_event(&ev);
        desktop.interaction.update(|interaction| {
            if let Some(session) = interaction.dragging.as_mut() {
                session.pointer = pointer;
            }
            if let Some(session) = interaction.resizing.as_mut() {
                session.pointer = pointer;
            }
        });
    };
    let on_pointer_end = move |_| end_active_pointer_interaction(desktop);

    view! {
        <div
            class="desktop-shell"
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_end
            on:pointercancel=on_pointer_end
        >
            <div class="desktop-surface">
                <div
                    class="desktop-dismiss-layer"
                    on:mousedown=move |_| selected_icon.set(None)
                />
                <div class="desktop-icon-grid">
                    <For each=move || SHELL_APPLICATIONS key=|app| app.id let:app>
                        <DesktopIconButton app=app selected=selected_icon />
                    </For>
                </div>
                <div class="window-layer">
                    <For
                        each=move || desktop.registry.get().windows().to_vec()
                        key=|win| win.key.clone()
                        let:win
                    >
                        <DesktopWindow window_key=win.key />
                    </For>
                </div>
            </div>
            <Dock />
        </div>
    }
}

#[component]
fn DesktopIconButton(
    app: ShellApplication,
    selected: RwSignal<Option<&'static str>>,
) -> impl IntoView {
    let desktop = use_desktop();
    let launch = move || {
        selected.set(Some(app.id));
        desktop.launch_app(app.id, desktop_viewport(DOCK_HEIGHT_PX));
    };

    let gate = Rc::new(RefCell::new(ActivationGate::new(
        desktop_activation_delay(),
        move || selected.set(Some(app.id)),
        launch,
    )));
    let pending = Rc::new(Cell::new(None::<TimeoutHandle>));

    let on_click = {
        let gate = Rc::clone(&gate);
        let pending = Rc::clone(&pending);
        move |_| {
            let transition = gate.borrow_mut().activate();
            match transition {
                GateTransition::Armed => {
                    let delay = gate.borrow().delay();
                    let gate = Rc::clone(&gate);
                    if let Ok(handle) =
                        set_timeout_with_handle(move || gate.borrow_mut().expire(), delay)
                    {
                        if let Some(stale) = pending.replace(Some(handle)) {
                            stale.clear();
                        }
                    }
                }
                GateTransition::DoubleFired => {
                    if let Some(handle) = pending.take() {
                        handle.clear();
                    }
                }
            }
        }
    };

    on_cleanup(move || {
        if let Some(handle) = pending.take() {
            handle.clear();
        }
    });

    view! {
        <button
            class="desktop-icon"
            class:selected=move || selected.get() == Some(app.id)
            on:click=on_click
            on:keydown=move |ev: web_sys::KeyboardEvent| {
                if ev.key() == "Enter" {
                    ev.prevent_default();
                    launch();
                }
            }
        >
            <span class="desktop-icon-glyph">
                <Icon icon=app.icon size=IconSize::Lg />
            </span>
            <span class="desktop-icon-label">{app.label}</span>
        </button>
    }
}

/// The double-activation window, chosen by the primary pointing device.
fn desktop_activation_delay() -> Duration {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(query)) = window.match_media("(pointer: coarse)") {
                return if query.matches() {
                    TOUCH_ACTIVATION_DELAY
                } else {
                    POINTER_ACTIVATION_DELAY
                };
            }
        }
    }

    DEFAULT_ACTIVATION_DELAY
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

/// Commits the active drag/resize session to the registry and clears it.
/// A stray pointer-up with no session does nothing.
fn end_active_pointer_interaction(desktop: DesktopContext) {
    let interaction = desktop.interaction.get_untracked();
    if !interaction.is_active() {
        return;
    }

    if let Some(session) = interaction.dragging {
        let preview = session.preview_rect();
        desktop.update_rect(&session.key, RectPatch::position(preview.x, preview.y));
    }
    if let Some(session) = interaction.resizing {
        let preview = session.preview_rect();
        desktop.update_rect(&session.key, RectPatch::bounds(preview));
    }

    desktop.interaction.set(InteractionState::default());
}

fn resize_edge_class(edge: ResizeEdge) -> &'static str {
    match edge {
        ResizeEdge::North => "edge-n",
        ResizeEdge::South => "edge-s",
        ResizeEdge::East => "edge-e",
        ResizeEdge::West => "edge-w",
        ResizeEdge::NorthEast => "edge-ne",
        ResizeEdge::NorthWest => "edge-nw",
        ResizeEdge::SouthEast => "edge-se",
        ResizeEdge::SouthWest => "edge-sw",
    }
}
