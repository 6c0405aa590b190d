// Selector lifecycle notifications.

use rand::rngs::StdRng;

// Lifecycle hooks that let selectors manage internal caches and recorded
// state across phase and step boundaries.
//
// The phase calls these in order: `phase_started`, then per step
// `step_started` / `step_ended`, then `phase_ended`. Composite selectors
// must propagate every call to each wrapped selector.
//
// The working random source is passed in so refresh decisions (a shuffle
// seed, for instance) consume draws from the single solver stream and stay
// reproducible under a fixed seed.
pub trait SelectorLifecycle {
    fn phase_started(&mut self, _rng: &mut StdRng) {}

    fn step_started(&mut self, _rng: &mut StdRng) {}

    fn step_ended(&mut self) {}

    fn phase_ended(&mut self) {}
}
