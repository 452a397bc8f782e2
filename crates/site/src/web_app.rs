use desktop_shell::{BootScreen, DesktopProvider, DesktopShell, LockScreen};
use leptos::*;
use leptos_meta::*;

/// Session staging for the single-page desktop. Phases only ever advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionPhase {
    Booting,
    Locked,
    Desktop,
}

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    let phase = create_rw_signal(SessionPhase::Booting);

    view! {
        <Title text="XR & Computer Graphics Portfolio" />
        <Meta
            name="description"
            content="Interactive desktop portfolio showcasing XR development and computer graphics projects."
        />

        <main class="site-root">
            {move || match phase.get() {
                SessionPhase::Booting => {
                    view! {
                        <BootScreen on_complete=move |_: ()| phase.set(SessionPhase::Locked) />
                    }
                        .into_view()
                }
                SessionPhase::Locked => {
                    view! {
                        <LockScreen on_unlock=move |_: ()| phase.set(SessionPhase::Desktop) />
                    }
                        .into_view()
                }
                SessionPhase::Desktop => view! { <DesktopEntry /> }.into_view(),
            }}
        </main>
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    view! {
        <DesktopProvider>
            <DesktopShell />
        </DesktopProvider>
    }
}
