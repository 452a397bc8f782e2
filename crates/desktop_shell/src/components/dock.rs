use super::*;
use crate::host::ClockSnapshot;
use window_core::WindowRegistry;

#[component]
pub(super) fn Dock() -> impl IntoView {
    let desktop = use_desktop();
    let project_windows = Signal::derive(move || {
        open_project_windows(&desktop.registry.get())
    });

    view! {
        <footer class="dock" style=format!("height:{}px;", DOCK_HEIGHT_PX)>
            <div class="dock-apps" role="toolbar" aria-label="Applications">
                <For each=move || SHELL_APPLICATIONS key=|app| app.id let:app>
                    <DockAppButton app=app />
                </For>
            </div>
            <Show when=move || !project_windows.get().is_empty() fallback=|| ()>
                <div class="dock-separator" aria-hidden="true"></div>
                <div class="dock-windows" role="toolbar" aria-label="Project windows">
                    <For
                        each=move || project_windows.get()
                        key=|win| win.key.clone()
                        let:win
                    >
                        <DockWindowButton window_key=win.key />
                    </For>
                </div>
            </Show>
            <DockClock />
        </footer>
    }
}

#[component]
fn DockAppButton(app: ShellApplication) -> impl IntoView {
    let desktop = use_desktop();
    let record = Signal::derive(move || {
        desktop.registry.get().get(&WindowKey::new(app.id)).cloned()
    });
    let running = move || record.get().map(|win| win.open).unwrap_or(false);
    let minimized = move || {
        record
            .get()
            .map(|win| win.open && win.minimized)
            .unwrap_or(false)
    };

    view! {
        <button
            class="dock-button"
            class:running=running
            class:minimized=minimized
            aria-label=app.label
            title=app.label
            on:click=move |_| desktop.launch_app(app.id, desktop_viewport(DOCK_HEIGHT_PX))
        >
            <Icon icon=app.icon size=IconSize::Lg />
            <span class="dock-indicator" aria-hidden="true"></span>
        </button>
    }
}

#[component]
fn DockWindowButton(window_key: WindowKey) -> impl IntoView {
    let desktop = use_desktop();
    let key = store_value(window_key);
    let record = Signal::derive(move || {
        key.with_value(|key| desktop.registry.get().get(key).cloned())
    });
    let minimized = move || record.get().map(|win| win.minimized).unwrap_or(false);
    let title = Signal::derive(move || record.get().map(|win| win.title).unwrap_or_default());

    view! {
        <button
            class="dock-button dock-window-button"
            class:minimized=minimized
            title=move || title.get()
            on:click=move |_| key.with_value(|key| desktop.focus(key))
        >
            <Icon icon=IconName::DocumentText size=IconSize::Sm />
            <span class="dock-window-title">{move || title.get()}</span>
        </button>
    }
}

#[component]
fn DockClock() -> impl IntoView {
    let now = create_rw_signal(ClockSnapshot::now());

    if let Ok(interval) = set_interval_with_handle(
        move || now.set(ClockSnapshot::now()),
        Duration::from_secs(1),
    ) {
        on_cleanup(move || interval.clear());
    }

    view! {
        <div class="dock-clock" role="status" aria-label="Clock">
            {move || now.get().hour_minute()}
        </div>
    }
}

fn open_project_windows(registry: &WindowRegistry) -> Vec<WindowRecord> {
    registry
        .windows()
        .iter()
        .filter(|win| win.open && matches!(win.content, WindowContent::ProjectDetail(_)))
        .cloned()
        .collect()
}
