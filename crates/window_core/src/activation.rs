//! Single/double activation disambiguation.
//!
//! Each icon owns one gate instance. The gate holds no timer of its own:
//! the caller schedules a timeout for [`ActivationGate::delay`] whenever an
//! activation returns [`GateTransition::Armed`] and calls
//! [`ActivationGate::expire`] when it fires. A second activation inside the
//! delay resolves as a double and the caller drops the pending timeout.

use std::time::Duration;

pub const DEFAULT_ACTIVATION_DELAY: Duration = Duration::from_millis(250);
pub const TOUCH_ACTIVATION_DELAY: Duration = Duration::from_millis(300);
pub const POINTER_ACTIVATION_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GateState {
    Idle,
    AwaitingSecond,
}

/// What one [`ActivationGate::activate`] call resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateTransition {
    /// First activation: the gate armed and the caller starts the expiry
    /// timer.
    Armed,
    /// Second activation within the delay: the double callback already
    /// fired and the pending timer should be dropped.
    DoubleFired,
}

pub struct ActivationGate<S, D> {
    delay: Duration,
    state: GateState,
    on_single: S,
    on_double: D,
}

impl<S, D> ActivationGate<S, D>
where
    S: FnMut(),
    D: FnMut(),
{
    pub fn new(delay: Duration, on_single: S, on_double: D) -> Self {
        Self {
            delay,
            state: GateState::Idle,
            on_single,
            on_double,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn is_armed(&self) -> bool {
        self.state == GateState::AwaitingSecond
    }

    /// Feeds one activation through the gate.
    pub fn activate(&mut self) -> GateTransition {
        match self.state {
            GateState::Idle => {
                self.state = GateState::AwaitingSecond;
                GateTransition::Armed
            }
            GateState::AwaitingSecond => {
                self.state = GateState::Idle;
                (self.on_double)();
                GateTransition::DoubleFired
            }
        }
    }

    /// Resolves an armed gate as a single activation. Idle gates ignore the
    /// call, so a stale timer arriving after a double is harmless.
    pub fn expire(&mut self) {
        if self.state == GateState::AwaitingSecond {
            self.state = GateState::Idle;
            (self.on_single)();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counters() -> (Rc<Cell<u32>>, Rc<Cell<u32>>) {
        (Rc::new(Cell::new(0)), Rc::new(Cell::new(0)))
    }

    fn gate(
        singles: &Rc<Cell<u32>>,
        doubles: &Rc<Cell<u32>>,
    ) -> ActivationGate<impl FnMut(), impl FnMut()> {
        let singles = Rc::clone(singles);
        let doubles = Rc::clone(doubles);
        ActivationGate::new(
            DEFAULT_ACTIVATION_DELAY,
            move || singles.set(singles.get() + 1),
            move || doubles.set(doubles.get() + 1),
        )
    }

    #[test]
    fn lone_activation_fires_single_on_expiry() {
        let (singles, doubles) = counters();
        let mut gate = gate(&singles, &doubles);

        assert_eq!(gate.activate(), GateTransition::Armed);
        assert!(gate.is_armed());
        gate.expire();

        assert_eq!((singles.get(), doubles.get()), (1, 0));
        assert!(!gate.is_armed());
    }

    #[test]
    fn second_activation_within_delay_fires_double_only() {
        let (singles, doubles) = counters();
        let mut gate = gate(&singles, &doubles);

        assert_eq!(gate.activate(), GateTransition::Armed);
        assert_eq!(gate.activate(), GateTransition::DoubleFired);
        // Stale timer from the first activation.
        gate.expire();

        assert_eq!((singles.get(), doubles.get()), (0, 1));
    }

    #[test]
    fn gate_rearms_after_each_resolution() {
        let (singles, doubles) = counters();
        let mut gate = gate(&singles, &doubles);

        gate.activate();
        gate.expire();
        gate.activate();
        gate.activate();
        gate.activate();
        gate.expire();

        assert_eq!((singles.get(), doubles.get()), (2, 1));
    }

    #[test]
    fn expiry_while_idle_does_nothing() {
        let (singles, doubles) = counters();
        let mut gate = gate(&singles, &doubles);

        gate.expire();
        assert_eq!((singles.get(), doubles.get()), (0, 0));
    }

    #[test]
    fn preset_delays_cover_input_affordances() {
        assert_eq!(DEFAULT_ACTIVATION_DELAY, Duration::from_millis(250));
        assert_eq!(TOUCH_ACTIVATION_DELAY, Duration::from_millis(300));
        assert_eq!(POINTER_ACTIVATION_DELAY, Duration::from_millis(500));
        assert!(TOUCH_ACTIVATION_DELAY < POINTER_ACTIVATION_DELAY);
    }
}
