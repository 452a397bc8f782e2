use super::*;
use super::panes::{AboutPane, EducationPane, ExperiencePane, ProjectBrowser, ProjectDetailPane};
use window_core::WindowRect;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

#[component]
pub(super) fn DesktopWindow(window_key: WindowKey) -> impl IntoView {
    let desktop = use_desktop();
    let key = store_value(window_key);

    let window = Signal::derive(move || {
        key.with_value(|key| desktop.registry.get().get(key).cloned())
    });
    let visible = move || {
        window
            .get()
            .map(|win| win.open && !win.minimized)
            .unwrap_or(false)
    };
    let focused = Signal::derive(move || {
        key.with_value(|key| desktop.registry.get().focused_key() == Some(key))
    });
    // Preview rect while a gesture is in flight, host viewport while
    // maximized, stored rect otherwise.
    let render_rect = Signal::derive(move || {
        let Some(win) = window.get() else {
            return WindowRect::new(0, 0, 0, 0);
        };
        if win.maximized {
            return desktop_viewport(DOCK_HEIGHT_PX);
        }
        let interaction = desktop.interaction.get();
        if let Some(session) = interaction.dragging.as_ref() {
            if key.with_value(|key| &session.key == key) {
                return session.preview_rect();
            }
        }
        if let Some(session) = interaction.resizing.as_ref() {
            if key.with_value(|key| &session.key == key) {
                return session.preview_rect();
            }
        }
        win.rect
    });

    let focus = move |_| {
        if !focused.get_untracked() {
            key.with_value(|key| desktop.focus(key));
        }
    };
    let minimize = move |_| key.with_value(|key| desktop.minimize(key));
    let close = move |_| key.with_value(|key| desktop.close(key));
    let toggle_maximize = move |_| key.with_value(|key| desktop.maximize(key));
    let begin_move = move |ev: web_sys::PointerEvent| {
        if ev.pointer_type() == "mouse" && ev.button() != 0 {
            return;
        }
        if ev.pointer_type() != "mouse" && !ev.is_primary() {
            return;
        }
        let Some(win) = window.get_untracked() else {
            return;
        };
        if win.maximized {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        if !focused.get_untracked() {
            key.with_value(|key| desktop.focus(key));
        }
        desktop.interaction.update(|interaction| {
            interaction.dragging = Some(DragSession::begin(
                win.key.clone(),
                pointer_from_pointer_event(&ev),
                win.rect,
            ));
        });
    };
    let titlebar_double_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        key.with_value(|key| desktop.maximize(key));
    };

    view! {
        <Show when=visible fallback=|| ()>
            {move || {
                let win = window.get().expect("window exists while shown");
                let rect = render_rect.get();
                let style = format!(
                    "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
                    rect.x, rect.y, rect.w, rect.h, win.stack_order
                );
                let focused_class = if focused.get() { " focused" } else { "" };
                let maximized_class = if win.maximized { " maximized" } else { "" };

                view! {
                    <section
                        class=format!("desktop-window{}{}", focused_class, maximized_class)
                        style=style
                        on:pointerdown=focus
                        role="dialog"
                        aria-label=win.title.clone()
                    >
                        <header
                            class="titlebar"
                            on:pointerdown=begin_move
                            on:dblclick=titlebar_double_click
                        >
                            <div class="titlebar-title">
                                <span class="titlebar-app-icon" aria-hidden="true">
                                    <Icon icon=window_icon_name(&win.content) size=IconSize::Sm />
                                </span>
                                <span>{win.title.clone()}</span>
                            </div>
                            <div class="titlebar-controls">
                                <button
                                    aria-label="Minimize window"
                                    on:pointerdown=move |ev: web_sys::PointerEvent| {
                                        ev.prevent_default();
                                        ev.stop_propagation();
                                    }
                                    on:mousedown=move |ev| stop_mouse_event(&ev)
                                    on:click=move |ev| {
                                        stop_mouse_event(&ev);
                                        minimize(ev);
                                    }
                                >
                                    <Icon icon=IconName::WindowMinimize size=IconSize::Xs />
                                </button>
                                <button
                                    aria-label=if win.maximized {
                                        "Restore window"
                                    } else {
                                        "Maximize window"
                                    }
                                    on:pointerdown=move |ev: web_sys::PointerEvent| {
                                        ev.prevent_default();
                                        ev.stop_propagation();
                                    }
                                    on:mousedown=move |ev| stop_mouse_event(&ev)
                                    on:click=move |ev| {
                                        stop_mouse_event(&ev);
                                        toggle_maximize(ev);
                                    }
                                >
                                    <Icon
                                        icon=if win.maximized {
                                            IconName::WindowRestore
                                        } else {
                                            IconName::WindowMaximize
                                        }
                                        size=IconSize::Xs
                                    />
                                </button>
                                <button
                                    aria-label="Close window"
                                    on:pointerdown=move |ev: web_sys::PointerEvent| {
                                        ev.prevent_default();
                                        ev.stop_propagation();
                                    }
                                    on:mousedown=move |ev| stop_mouse_event(&ev)
                                    on:click=move |ev| {
                                        stop_mouse_event(&ev);
                                        close(ev);
                                    }
                                >
                                    <Icon icon=IconName::Dismiss size=IconSize::Xs />
                                </button>
                            </div>
                        </header>
                        <div class="window-body">
                            <WindowBody content=win.content.clone() />
                        </div>
                        <Show
                            when=move || {
                                window.get().map(|win| !win.maximized).unwrap_or(false)
                            }
                            fallback=|| ()
                        >
                            <WindowResizeHandle window=window edge=ResizeEdge::North />
                            <WindowResizeHandle window=window edge=ResizeEdge::South />
                            <WindowResizeHandle window=window edge=ResizeEdge::East />
                            <WindowResizeHandle window=window edge=ResizeEdge::West />
                            <WindowResizeHandle window=window edge=ResizeEdge::NorthEast />
                            <WindowResizeHandle window=window edge=ResizeEdge::NorthWest />
                            <WindowResizeHandle window=window edge=ResizeEdge::SouthEast />
                            <WindowResizeHandle window=window edge=ResizeEdge::SouthWest />
                        </Show>
                    </section>
                }
                    .into_view()
            }}
        </Show>
    }
}

#[component]
fn WindowResizeHandle(window: Signal<Option<WindowRecord>>, edge: ResizeEdge) -> impl IntoView {
    let desktop = use_desktop();
    let class_name = format!("window-resize-handle {}", resize_edge_class(edge));

    let on_pointerdown = move |ev: web_sys::PointerEvent| {
        if ev.pointer_type() == "mouse" && ev.button() != 0 {
            return;
        }
        if ev.pointer_type() != "mouse" && !ev.is_primary() {
            return;
        }
        let Some(win) = window.get_untracked() else {
            return;
        };
        if win.maximized {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        if desktop.registry.get_untracked().focused_key() != Some(&win.key) {
            desktop.focus(&win.key);
        }
        desktop.interaction.update(|interaction| {
            interaction.resizing = Some(ResizeSession::begin(
                win.key.clone(),
                edge,
                pointer_from_pointer_event(&ev),
                win.rect,
            ));
        });
    };

    view! {
        <div
            class=class_name
            aria-hidden="true"
            on:pointerdown=on_pointerdown
        />
    }
}

#[component]
fn WindowBody(content: WindowContent) -> impl IntoView {
    match content {
        WindowContent::Static(StaticPane::Education) => view! { <EducationPane /> }.into_view(),
        WindowContent::Static(StaticPane::Experience) => view! { <ExperiencePane /> }.into_view(),
        WindowContent::Static(StaticPane::About) => view! { <AboutPane /> }.into_view(),
        WindowContent::ProjectBrowser => view! { <ProjectBrowser /> }.into_view(),
        WindowContent::ProjectDetail(project) => {
            view! { <ProjectDetailPane project=project /> }.into_view()
        }
    }
}
