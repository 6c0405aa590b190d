//! Tests for solver configuration.

use plancraft_core::score::{HardSoftScore, SimpleScore};

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        environment_mode = "reproducible"
        random_seed = 42

        [termination]
        seconds_spent_limit = 30

        [[phases]]
        type = "local_search"
        [phases.acceptor]
        type = "late_acceptance"
        late_acceptance_size = 400
    "#;

    let config = SolverConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.environment_mode, EnvironmentMode::Reproducible);
    assert_eq!(config.random_seed, Some(42));
    assert_eq!(config.termination.unwrap().seconds_spent_limit, Some(30));
    assert_eq!(config.phases.len(), 1);

    let PhaseConfig::LocalSearch(local_search) = &config.phases[0];
    match local_search.acceptor.as_ref().unwrap() {
        AcceptorConfig::LateAcceptance(late) => assert_eq!(late.size(), 400),
        other => panic!("unexpected acceptor {other:?}"),
    }
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        environment_mode: reproducible
        random_seed: 42
        termination:
          seconds_spent_limit: 30
        phases:
          - type: local_search
            acceptor:
              type: late_acceptance
              late_acceptance_size: 400
    "#;

    let config = SolverConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.environment_mode, EnvironmentMode::Reproducible);
    assert_eq!(config.random_seed, Some(42));
}

#[test]
fn test_forager_and_selector_parsing() {
    let toml = r#"
        [[phases]]
        type = "local_search"

        [phases.forager]
        accepted_count_limit = 1000
        pick_early_type = "first_best_score_improving"
        break_tie_randomly = false

        [phases.move_selector]
        type = "union_move_selector"

        [[phases.move_selector.selectors]]
        type = "change_move_selector"
        variable_name = "row"
        cache_type = "phase"
        selection_order = "shuffled"

        [[phases.move_selector.selectors]]
        type = "swap_move_selector"
    "#;

    let config = SolverConfig::from_toml_str(toml).unwrap();
    let PhaseConfig::LocalSearch(local_search) = &config.phases[0];

    let forager = local_search.forager.as_ref().unwrap();
    assert_eq!(forager.accepted_count_limit, Some(1000));
    assert_eq!(
        forager.pick_early_type,
        Some(PickEarlyType::FirstBestScoreImproving)
    );
    assert_eq!(forager.break_tie_randomly, Some(false));
    assert_eq!(local_search.accepted_count_limit(), Some(1000));

    match local_search.move_selector.as_ref().unwrap() {
        MoveSelectorConfig::UnionMoveSelector(union) => {
            assert_eq!(union.selectors.len(), 2);
            match &union.selectors[0] {
                MoveSelectorConfig::ChangeMoveSelector(change) => {
                    assert_eq!(change.variable_name.as_deref(), Some("row"));
                    assert_eq!(change.cache_type, Some(CacheType::Phase));
                    assert_eq!(
                        change.selection_order,
                        Some(SelectionOrderConfig::Shuffled)
                    );
                }
                other => panic!("unexpected selector {other:?}"),
            }
        }
        other => panic!("unexpected selector {other:?}"),
    }
}

#[test]
fn test_accepted_count_limit_defaults_to_one_with_acceptor() {
    let toml = r#"
        [[phases]]
        type = "local_search"
        [phases.acceptor]
        type = "hill_climbing"
    "#;

    let config = SolverConfig::from_toml_str(toml).unwrap();
    let PhaseConfig::LocalSearch(local_search) = &config.phases[0];
    assert_eq!(local_search.accepted_count_limit(), Some(1));

    let empty = LocalSearchConfig::default();
    assert_eq!(empty.accepted_count_limit(), None);
}

#[test]
fn test_simulated_annealing_parsing() {
    let toml = r#"
        [[phases]]
        type = "local_search"
        [phases.acceptor]
        type = "simulated_annealing"
        starting_temperature = "0hard/50soft"
        step_budget = 10000
    "#;

    let config = SolverConfig::from_toml_str(toml).unwrap();
    let PhaseConfig::LocalSearch(local_search) = &config.phases[0];
    match local_search.acceptor.as_ref().unwrap() {
        AcceptorConfig::SimulatedAnnealing(sa) => {
            let temperature: HardSoftScore =
                HardSoftScore::parse(sa.starting_temperature.as_deref().unwrap()).unwrap();
            assert_eq!(temperature, HardSoftScore::of(0, 50));
            assert_eq!(sa.step_budget, Some(10000));
        }
        other => panic!("unexpected acceptor {other:?}"),
    }
}

#[test]
fn test_best_score_limit_parsing() {
    let termination = TerminationConfig {
        best_score_limit: Some("0".to_string()),
        ..TerminationConfig::default()
    };
    let limit: Option<SimpleScore> = termination.best_score_limit_as().unwrap();
    assert_eq!(limit, Some(SimpleScore::of(0)));

    let bad = TerminationConfig {
        best_score_limit: Some("not a score".to_string()),
        ..TerminationConfig::default()
    };
    assert!(bad.best_score_limit_as::<SimpleScore>().is_err());
}

#[test]
fn test_time_limit_combines_minutes_and_seconds() {
    let termination = TerminationConfig {
        seconds_spent_limit: Some(30),
        minutes_spent_limit: Some(2),
        ..TerminationConfig::default()
    };
    assert_eq!(termination.time_limit(), Some(Duration::from_secs(150)));
    assert_eq!(TerminationConfig::default().time_limit(), None);
}

#[test]
fn test_builder() {
    let config = SolverConfig::new()
        .with_random_seed(123)
        .with_termination_seconds(60)
        .with_phase(PhaseConfig::LocalSearch(LocalSearchConfig::default()));

    assert_eq!(config.random_seed, Some(123));
    assert_eq!(config.phases.len(), 1);
    assert_eq!(config.time_limit(), Some(Duration::from_secs(60)));
}
