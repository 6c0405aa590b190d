//! Cache scope configuration for caching selectors.

/// The lifecycle boundary at which a caching selector rebuilds its snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SelectionCacheType {
    /// Rebuild the snapshot at the start of every step.
    #[default]
    Step,

    /// Rebuild the snapshot at the start of every phase.
    Phase,

    /// Build the snapshot once and keep it for the entire solver run.
    Run,
}

impl SelectionCacheType {
    /// True if a snapshot with this scope must be discarded at a step start.
    pub fn invalidates_on_step(&self) -> bool {
        matches!(self, SelectionCacheType::Step)
    }

    /// True if a snapshot with this scope must be discarded at a phase start.
    pub fn invalidates_on_phase(&self) -> bool {
        matches!(self, SelectionCacheType::Step | SelectionCacheType::Phase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_scope_invalidates_everywhere() {
        assert!(SelectionCacheType::Step.invalidates_on_step());
        assert!(SelectionCacheType::Step.invalidates_on_phase());
    }

    #[test]
    fn test_phase_scope_survives_steps() {
        assert!(!SelectionCacheType::Phase.invalidates_on_step());
        assert!(SelectionCacheType::Phase.invalidates_on_phase());
    }

    #[test]
    fn test_run_scope_never_invalidates() {
        assert!(!SelectionCacheType::Run.invalidates_on_step());
        assert!(!SelectionCacheType::Run.invalidates_on_phase());
    }

    #[test]
    fn test_default_is_step() {
        assert_eq!(SelectionCacheType::default(), SelectionCacheType::Step);
    }
}
