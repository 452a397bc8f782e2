use super::*;
use crate::host::ClockSnapshot;

const UNLOCK_ANIMATION: Duration = Duration::from_millis(800);

#[component]
/// Lock surface shown between boot and the desktop: live clock, owner
/// profile, and the unlock control. Unlock waits out a short animation
/// before handing off.
pub fn LockScreen(#[prop(into)] on_unlock: Callback<()>) -> impl IntoView {
    let now = create_rw_signal(ClockSnapshot::now());
    let unlocking = create_rw_signal(false);
    let pending = Rc::new(Cell::new(None::<TimeoutHandle>));

    if let Ok(interval) = set_interval_with_handle(
        move || now.set(ClockSnapshot::now()),
        Duration::from_secs(1),
    ) {
        on_cleanup(move || interval.clear());
    }

    {
        let pending = Rc::clone(&pending);
        on_cleanup(move || {
            if let Some(handle) = pending.take() {
                handle.clear();
            }
        });
    }

    let begin_unlock = {
        let pending = Rc::clone(&pending);
        move || {
            if unlocking.get_untracked() {
                return;
            }
            unlocking.set(true);
            if let Ok(handle) =
                set_timeout_with_handle(move || on_unlock.call(()), UNLOCK_ANIMATION)
            {
                pending.set(Some(handle));
            }
        }
    };

    let unlock_on_enter = {
        let begin_unlock = begin_unlock.clone();
        window_event_listener(ev::keydown, move |ev| {
            if ev.default_prevented() || ev.key() != "Enter" {
                return;
            }
            ev.prevent_default();
            begin_unlock();
        })
    };
    on_cleanup(move || unlock_on_enter.remove());

    view! {
        <div class="lock-screen" class:unlocking=move || unlocking.get()>
            <div class="lock-status-bar">
                <span class="lock-status-brand">"Portfolio OS"</span>
            </div>
            <div class="lock-body">
                <div class="lock-clock">
                    <span class="lock-clock-time">{move || now.get().hour_minute()}</span>
                    <span class="lock-clock-date">{move || now.get().long_date()}</span>
                </div>
                <div class="lock-profile">
                    <span class="lock-avatar">"LK"</span>
                    <h2>"Lyes KHOUMERI"</h2>
                    <p>"XR & Computer Graphics Engineer"</p>
                </div>
                <div class="lock-unlock">
                    <p class="lock-hint">"Click to unlock and explore portfolio"</p>
                    <button
                        class="lock-unlock-button"
                        disabled=move || unlocking.get()
                        on:click=move |_| begin_unlock()
                    >
                        <Icon icon=IconName::LockClosed size=IconSize::Md />
                        <span>"Unlock Portfolio"</span>
                    </button>
                </div>
            </div>
        </div>
    }
}
