use rand::rngs::StdRng;
use rand::SeedableRng;

use plancraft_core::domain::PlanningSolution;
use plancraft_core::score::{HardSoftScore, SimpleScore};
use plancraft_test::MinimalSolution;

use super::*;

/// Two-level solution stub for exercising per-level acceptance.
#[derive(Clone, Debug)]
struct HardSoftSolution;

impl PlanningSolution for HardSoftSolution {
    type Score = HardSoftScore;

    fn score(&self) -> Option<HardSoftScore> {
        None
    }

    fn set_score(&mut self, _score: Option<HardSoftScore>) {}
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(0)
}

fn simple_accepted(
    acceptor: &mut impl Acceptor<MinimalSolution>,
    last_step: i64,
    candidate: i64,
) -> bool {
    acceptor.is_accepted(
        &mut rng(),
        &SimpleScore::of(last_step),
        &SimpleScore::of(candidate),
    )
}

#[test]
fn test_hill_climbing_accepts_only_strict_improvement() {
    let mut acceptor = HillClimbingAcceptor::new();

    assert!(simple_accepted(&mut acceptor, -2, -1));
    assert!(!simple_accepted(&mut acceptor, -2, -2));
    assert!(!simple_accepted(&mut acceptor, -2, -3));
}

#[test]
fn test_late_acceptance_uses_historical_score() {
    let mut acceptor: LateAcceptanceAcceptor<MinimalSolution> =
        LateAcceptanceAcceptor::new(2).with_hill_climbing(false);
    Acceptor::<MinimalSolution>::phase_started(&mut acceptor, &SimpleScore::of(-10));

    // Matches the score from two steps ago even though it worsens
    assert!(simple_accepted(&mut acceptor, -5, -10));
    assert!(!simple_accepted(&mut acceptor, -5, -11));

    // Two improving steps push -10 out of the window
    acceptor.step_ended(&SimpleScore::of(-5));
    acceptor.step_ended(&SimpleScore::of(-4));
    assert!(!simple_accepted(&mut acceptor, -4, -10));
    assert!(simple_accepted(&mut acceptor, -4, -5));
}

#[test]
fn test_late_acceptance_hill_climbing_clause() {
    let mut acceptor: LateAcceptanceAcceptor<MinimalSolution> = LateAcceptanceAcceptor::new(1);
    Acceptor::<MinimalSolution>::phase_started(&mut acceptor, &SimpleScore::of(-100));
    acceptor.step_ended(&SimpleScore::of(-100));

    // Sideways relative to the last step, far below the late score works too
    assert!(simple_accepted(&mut acceptor, -3, -3));

    let mut strict: LateAcceptanceAcceptor<MinimalSolution> =
        LateAcceptanceAcceptor::new(1).with_hill_climbing(false);
    Acceptor::<MinimalSolution>::phase_started(&mut strict, &SimpleScore::of(-2));
    strict.step_ended(&SimpleScore::of(-2));
    assert!(!simple_accepted(&mut strict, -3, -3));
}

#[test]
#[should_panic(expected = "late acceptance size")]
fn test_late_acceptance_rejects_zero_size() {
    let _ = LateAcceptanceAcceptor::<MinimalSolution>::new(0);
}

#[test]
fn test_simulated_annealing_always_accepts_non_worsening() {
    let mut acceptor: SimulatedAnnealingAcceptor<MinimalSolution> =
        SimulatedAnnealingAcceptor::new(SimpleScore::of(0), 100);

    assert!(simple_accepted(&mut acceptor, -5, -4));
    assert!(simple_accepted(&mut acceptor, -5, -5));
}

#[test]
fn test_simulated_annealing_hot_accepts_small_worsening() {
    let mut acceptor: SimulatedAnnealingAcceptor<MinimalSolution> =
        SimulatedAnnealingAcceptor::new(SimpleScore::of(1_000_000), 100);
    Acceptor::<MinimalSolution>::phase_started(&mut acceptor, &SimpleScore::of(-5));

    // exp(-1 / 1000000) is close to 1, so every seed in this range accepts
    for seed in 0..32 {
        let mut rng = StdRng::seed_from_u64(seed);
        assert!(acceptor.is_accepted(&mut rng, &SimpleScore::of(-5), &SimpleScore::of(-6)));
    }
}

#[test]
fn test_simulated_annealing_cold_rejects_worsening() {
    let mut acceptor: SimulatedAnnealingAcceptor<MinimalSolution> =
        SimulatedAnnealingAcceptor::new(SimpleScore::of(1_000_000), 10);
    Acceptor::<MinimalSolution>::phase_started(&mut acceptor, &SimpleScore::of(-5));
    for _ in 0..10 {
        acceptor.step_ended(&SimpleScore::of(-5));
    }

    // Fully cooled, exp(-1 / MIN_TEMPERATURE) underflows to zero
    for seed in 0..32 {
        let mut rng = StdRng::seed_from_u64(seed);
        assert!(!acceptor.is_accepted(&mut rng, &SimpleScore::of(-5), &SimpleScore::of(-6)));
    }
}

#[test]
fn test_simulated_annealing_per_level_temperatures() {
    // Soft level is hot, hard level is cold
    let mut acceptor: SimulatedAnnealingAcceptor<HardSoftSolution> =
        SimulatedAnnealingAcceptor::new(HardSoftScore::of(0, 1_000_000), 100);
    Acceptor::<HardSoftSolution>::phase_started(&mut acceptor, &HardSoftScore::of(0, -10));

    for seed in 0..32 {
        let mut rng = StdRng::seed_from_u64(seed);
        assert!(acceptor.is_accepted(
            &mut rng,
            &HardSoftScore::of(0, -10),
            &HardSoftScore::of(0, -11)
        ));
        assert!(!acceptor.is_accepted(
            &mut rng,
            &HardSoftScore::of(0, -10),
            &HardSoftScore::of(-1, -10)
        ));
    }
}

#[test]
#[should_panic(expected = "negative level")]
fn test_simulated_annealing_rejects_negative_temperature() {
    let _ = SimulatedAnnealingAcceptor::<MinimalSolution>::new(SimpleScore::of(-1), 100);
}

#[test]
fn test_simulated_annealing_phase_started_resets_cooling() {
    let mut acceptor: SimulatedAnnealingAcceptor<MinimalSolution> =
        SimulatedAnnealingAcceptor::new(SimpleScore::of(1_000_000), 10);
    for _ in 0..10 {
        Acceptor::<MinimalSolution>::step_ended(&mut acceptor, &SimpleScore::of(-5));
    }
    Acceptor::<MinimalSolution>::phase_started(&mut acceptor, &SimpleScore::of(-5));

    let mut rng = StdRng::seed_from_u64(1);
    assert!(acceptor.is_accepted(&mut rng, &SimpleScore::of(-5), &SimpleScore::of(-6)));
}
