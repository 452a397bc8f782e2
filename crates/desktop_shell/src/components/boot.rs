use super::*;

const BOOT_TICK: Duration = Duration::from_millis(30);
const BOOT_SETTLE: Duration = Duration::from_millis(100);

#[component]
/// Splash that fills a progress bar over about three seconds, then reports
/// completion once.
pub fn BootScreen(#[prop(into)] on_complete: Callback<()>) -> impl IntoView {
    let progress = create_rw_signal(0u32);
    let settle = Rc::new(Cell::new(None::<TimeoutHandle>));

    {
        let settle = Rc::clone(&settle);
        if let Ok(interval) = set_interval_with_handle(
            move || {
                let previous = progress.get_untracked();
                if previous >= 100 {
                    return;
                }
                let next = previous + 1;
                progress.set(next);
                if next >= 100 {
                    if let Ok(handle) =
                        set_timeout_with_handle(move || on_complete.call(()), BOOT_SETTLE)
                    {
                        settle.set(Some(handle));
                    }
                }
            },
            BOOT_TICK,
        ) {
            on_cleanup(move || interval.clear());
        }
    }

    on_cleanup(move || {
        if let Some(handle) = settle.take() {
            handle.clear();
        }
    });

    view! {
        <div class="boot-screen" role="status">
            <div class="boot-title">
                <h1>"System Booting"</h1>
                <p>"Initializing Portfolio"</p>
            </div>
            <div class="boot-progress-track">
                <div
                    class="boot-progress-fill"
                    style=move || format!("width:{}%;", progress.get())
                ></div>
            </div>
            <p class="boot-progress-value">{move || format!("{}%", progress.get())}</p>
            <div class="boot-dots">
                <span></span>
                <span></span>
                <span></span>
            </div>
        </div>
    }
}
