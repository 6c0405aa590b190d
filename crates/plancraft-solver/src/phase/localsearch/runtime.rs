//! Mapping from serde configuration onto local search components.

use std::fmt;
use std::fmt::Debug;

use rand::rngs::StdRng;

use plancraft_config::{
    AcceptorConfig, ConfigError, LocalSearchConfig, PickEarlyType as PickEarlyTypeConfig,
};
use plancraft_core::domain::PlanningSolution;
use plancraft_core::score::{ParseableScore, Score};

use super::acceptor::{
    Acceptor, HillClimbingAcceptor, LateAcceptanceAcceptor, SimulatedAnnealingAcceptor,
};
use super::forager::{AcceptedForager, PickEarlyType};

/// Annealing step budget used when the config leaves it unset.
const DEFAULT_ANNEALING_STEP_BUDGET: u64 = 10_000;

/// Acceptor resolved from configuration, dispatching to the concrete policy.
pub enum RuntimeAcceptor<S: PlanningSolution> {
    HillClimbing(HillClimbingAcceptor),
    LateAcceptance(LateAcceptanceAcceptor<S>),
    SimulatedAnnealing(SimulatedAnnealingAcceptor<S>),
}

impl<S: PlanningSolution> Debug for RuntimeAcceptor<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeAcceptor::HillClimbing(acceptor) => Debug::fmt(acceptor, f),
            RuntimeAcceptor::LateAcceptance(acceptor) => Debug::fmt(acceptor, f),
            RuntimeAcceptor::SimulatedAnnealing(acceptor) => Debug::fmt(acceptor, f),
        }
    }
}

impl<S: PlanningSolution> Acceptor<S> for RuntimeAcceptor<S> {
    fn is_accepted(
        &mut self,
        rng: &mut StdRng,
        last_step_score: &S::Score,
        move_score: &S::Score,
    ) -> bool {
        match self {
            RuntimeAcceptor::HillClimbing(acceptor) => {
                Acceptor::<S>::is_accepted(acceptor, rng, last_step_score, move_score)
            }
            RuntimeAcceptor::LateAcceptance(acceptor) => {
                acceptor.is_accepted(rng, last_step_score, move_score)
            }
            RuntimeAcceptor::SimulatedAnnealing(acceptor) => {
                acceptor.is_accepted(rng, last_step_score, move_score)
            }
        }
    }

    fn phase_started(&mut self, initial_score: &S::Score) {
        match self {
            RuntimeAcceptor::HillClimbing(acceptor) => {
                Acceptor::<S>::phase_started(acceptor, initial_score)
            }
            RuntimeAcceptor::LateAcceptance(acceptor) => acceptor.phase_started(initial_score),
            RuntimeAcceptor::SimulatedAnnealing(acceptor) => acceptor.phase_started(initial_score),
        }
    }

    fn phase_ended(&mut self) {
        match self {
            RuntimeAcceptor::HillClimbing(acceptor) => Acceptor::<S>::phase_ended(acceptor),
            RuntimeAcceptor::LateAcceptance(acceptor) => Acceptor::<S>::phase_ended(acceptor),
            RuntimeAcceptor::SimulatedAnnealing(acceptor) => Acceptor::<S>::phase_ended(acceptor),
        }
    }

    fn step_started(&mut self) {
        match self {
            RuntimeAcceptor::HillClimbing(acceptor) => Acceptor::<S>::step_started(acceptor),
            RuntimeAcceptor::LateAcceptance(acceptor) => Acceptor::<S>::step_started(acceptor),
            RuntimeAcceptor::SimulatedAnnealing(acceptor) => Acceptor::<S>::step_started(acceptor),
        }
    }

    fn step_ended(&mut self, step_score: &S::Score) {
        match self {
            RuntimeAcceptor::HillClimbing(acceptor) => {
                Acceptor::<S>::step_ended(acceptor, step_score)
            }
            RuntimeAcceptor::LateAcceptance(acceptor) => acceptor.step_ended(step_score),
            RuntimeAcceptor::SimulatedAnnealing(acceptor) => acceptor.step_ended(step_score),
        }
    }
}

/// Local search settings resolved from a [`LocalSearchConfig`].
///
/// Score strings are parsed and ranges validated up front, so a bad config
/// surfaces as a [`ConfigError`] before solving starts instead of a panic
/// mid-solve.
pub struct LocalSearchRuntimeConfig<S: PlanningSolution> {
    acceptor: Option<RuntimeAcceptor<S>>,
    accepted_count_limit: Option<usize>,
    pick_early_type: PickEarlyType,
    break_tie_randomly: bool,
    pick_unaccepted_fallback: bool,
}

impl<S: PlanningSolution> Debug for LocalSearchRuntimeConfig<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalSearchRuntimeConfig")
            .field("acceptor", &self.acceptor)
            .field("accepted_count_limit", &self.accepted_count_limit)
            .field("pick_early_type", &self.pick_early_type)
            .field("break_tie_randomly", &self.break_tie_randomly)
            .field("pick_unaccepted_fallback", &self.pick_unaccepted_fallback)
            .finish()
    }
}

impl<S: PlanningSolution> LocalSearchRuntimeConfig<S>
where
    S::Score: ParseableScore,
{
    /// Resolves a serde-level phase config into concrete component settings.
    pub fn resolve(config: &LocalSearchConfig) -> Result<Self, ConfigError> {
        let acceptor = config
            .acceptor
            .as_ref()
            .map(build_acceptor::<S>)
            .transpose()?;
        let forager = config.forager.clone().unwrap_or_default();
        Ok(Self {
            acceptor,
            accepted_count_limit: config.accepted_count_limit(),
            pick_early_type: forager
                .pick_early_type
                .map(pick_early_from_config)
                .unwrap_or_default(),
            break_tie_randomly: forager.break_tie_randomly.unwrap_or(true),
            pick_unaccepted_fallback: forager.pick_unaccepted_fallback.unwrap_or(false),
        })
    }
}

impl<S: PlanningSolution> LocalSearchRuntimeConfig<S> {
    /// The effective accepted count limit for the forager.
    pub fn accepted_count_limit(&self) -> Option<usize> {
        self.accepted_count_limit
    }

    pub fn pick_early_type(&self) -> PickEarlyType {
        self.pick_early_type
    }

    /// Builds the forager with the resolved settings.
    pub fn build_forager(&self) -> AcceptedForager<S::Score> {
        AcceptedForager::new(self.accepted_count_limit)
            .with_pick_early_type(self.pick_early_type)
            .with_break_tie_randomly(self.break_tie_randomly)
            .with_pick_unaccepted_fallback(self.pick_unaccepted_fallback)
    }

    /// Returns the configured acceptor, defaulting to hill climbing.
    pub fn into_acceptor(self) -> RuntimeAcceptor<S> {
        self.acceptor
            .unwrap_or(RuntimeAcceptor::HillClimbing(HillClimbingAcceptor::new()))
    }
}

fn pick_early_from_config(value: PickEarlyTypeConfig) -> PickEarlyType {
    match value {
        PickEarlyTypeConfig::Never => PickEarlyType::Never,
        PickEarlyTypeConfig::FirstBestScoreImproving => PickEarlyType::FirstBestScoreImproving,
        PickEarlyTypeConfig::FirstLastStepScoreImproving => {
            PickEarlyType::FirstLastStepScoreImproving
        }
    }
}

fn build_acceptor<S>(config: &AcceptorConfig) -> Result<RuntimeAcceptor<S>, ConfigError>
where
    S: PlanningSolution,
    S::Score: ParseableScore,
{
    match config {
        AcceptorConfig::HillClimbing => {
            Ok(RuntimeAcceptor::HillClimbing(HillClimbingAcceptor::new()))
        }
        AcceptorConfig::LateAcceptance(late) => {
            if late.size() == 0 {
                return Err(ConfigError::Invalid(
                    "late_acceptance_size must be at least 1".to_string(),
                ));
            }
            let acceptor = LateAcceptanceAcceptor::new(late.size())
                .with_hill_climbing(late.hill_climbing_enabled.unwrap_or(true));
            Ok(RuntimeAcceptor::LateAcceptance(acceptor))
        }
        AcceptorConfig::SimulatedAnnealing(annealing) => {
            let raw = annealing.starting_temperature.as_deref().ok_or_else(|| {
                ConfigError::Invalid(
                    "simulated annealing requires a starting_temperature".to_string(),
                )
            })?;
            let starting_temperature = S::Score::parse(raw).map_err(|err| {
                ConfigError::Invalid(format!("bad starting_temperature {raw:?}: {err}"))
            })?;
            if starting_temperature
                .to_level_numbers()
                .iter()
                .any(|&level| level < 0)
            {
                return Err(ConfigError::Invalid(format!(
                    "starting_temperature {raw:?} has a negative level"
                )));
            }
            let step_budget = annealing
                .step_budget
                .unwrap_or(DEFAULT_ANNEALING_STEP_BUDGET);
            if step_budget == 0 {
                return Err(ConfigError::Invalid(
                    "step_budget must be at least 1".to_string(),
                ));
            }
            Ok(RuntimeAcceptor::SimulatedAnnealing(
                SimulatedAnnealingAcceptor::new(starting_temperature, step_budget),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use plancraft_config::{PhaseConfig, SolverConfig};
    use plancraft_core::score::SimpleScore;
    use plancraft_test::nqueens::{create_nqueens_director, get_queen_row, set_queen_row};
    use plancraft_test::NQueensSolution;

    use super::*;
    use crate::heuristic::selector::ChangeMoveSelector;
    use crate::phase::localsearch::LocalSearchPhase;
    use crate::phase::Phase;
    use crate::scope::SolverScope;

    fn local_search_config(toml: &str) -> LocalSearchConfig {
        let config = SolverConfig::from_toml_str(toml).unwrap();
        let PhaseConfig::LocalSearch(local_search) = config.phases[0].clone();
        local_search
    }

    #[test]
    fn test_resolve_late_acceptance() {
        let config = local_search_config(
            r#"
            [[phases]]
            type = "local_search"
            [phases.acceptor]
            type = "late_acceptance"
            late_acceptance_size = 50
        "#,
        );
        let runtime = LocalSearchRuntimeConfig::<NQueensSolution>::resolve(&config).unwrap();

        assert_eq!(runtime.accepted_count_limit(), Some(1));
        assert!(matches!(
            runtime.into_acceptor(),
            RuntimeAcceptor::LateAcceptance(_)
        ));
    }

    #[test]
    fn test_resolve_simulated_annealing() {
        let config = local_search_config(
            r#"
            [[phases]]
            type = "local_search"
            [phases.acceptor]
            type = "simulated_annealing"
            starting_temperature = "5"
            step_budget = 100
        "#,
        );
        let runtime = LocalSearchRuntimeConfig::<NQueensSolution>::resolve(&config).unwrap();

        assert!(matches!(
            runtime.into_acceptor(),
            RuntimeAcceptor::SimulatedAnnealing(_)
        ));
    }

    #[test]
    fn test_missing_temperature_is_invalid() {
        let config = local_search_config(
            r#"
            [[phases]]
            type = "local_search"
            [phases.acceptor]
            type = "simulated_annealing"
        "#,
        );
        let result = LocalSearchRuntimeConfig::<NQueensSolution>::resolve(&config);

        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_unparseable_temperature_is_invalid() {
        let config = local_search_config(
            r#"
            [[phases]]
            type = "local_search"
            [phases.acceptor]
            type = "simulated_annealing"
            starting_temperature = "toasty"
        "#,
        );
        let result = LocalSearchRuntimeConfig::<NQueensSolution>::resolve(&config);

        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_default_acceptor_is_hill_climbing() {
        let config = local_search_config(
            r#"
            [[phases]]
            type = "local_search"
        "#,
        );
        let runtime = LocalSearchRuntimeConfig::<NQueensSolution>::resolve(&config).unwrap();

        assert_eq!(runtime.accepted_count_limit(), None);
        assert!(matches!(
            runtime.into_acceptor(),
            RuntimeAcceptor::HillClimbing(_)
        ));
    }

    #[test]
    fn test_forager_settings_are_mapped() {
        let config = local_search_config(
            r#"
            [[phases]]
            type = "local_search"
            [phases.forager]
            accepted_count_limit = 8
            pick_early_type = "first_best_score_improving"
            break_tie_randomly = false
        "#,
        );
        let runtime = LocalSearchRuntimeConfig::<NQueensSolution>::resolve(&config).unwrap();

        assert_eq!(runtime.accepted_count_limit(), Some(8));
        assert_eq!(
            runtime.pick_early_type(),
            PickEarlyType::FirstBestScoreImproving
        );
    }

    #[test]
    fn test_configured_phase_solves() {
        let config = local_search_config(
            r#"
            [[phases]]
            type = "local_search"
            [phases.acceptor]
            type = "late_acceptance"
            late_acceptance_size = 4
        "#,
        );
        let runtime = LocalSearchRuntimeConfig::<NQueensSolution>::resolve(&config).unwrap();
        let forager = runtime.build_forager();
        let selector: ChangeMoveSelector<
            NQueensSolution,
            i64,
            crate::heuristic::selector::FromSolutionEntitySelector,
            crate::heuristic::selector::StaticValueSelector<NQueensSolution, i64>,
        > = ChangeMoveSelector::simple(get_queen_row, set_queen_row, 0, "row", vec![0, 1, 2, 3]);

        let mut solver_scope = SolverScope::with_seed(create_nqueens_director(&[0, 0]), 11);
        solver_scope.start_solving();
        solver_scope.update_best_solution();

        let mut phase = LocalSearchPhase::new(selector, runtime.into_acceptor(), forager)
            .with_step_limit(20);
        phase.solve(&mut solver_scope);

        assert_eq!(solver_scope.best_score(), Some(&SimpleScore::of(0)));
    }
}
