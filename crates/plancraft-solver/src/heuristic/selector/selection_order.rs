//! Selection order configuration for selectors.

/// Defines the order in which elements are selected from a selector.
///
/// This is configuration-facing: a selector graph builder resolves the
/// order and picks the matching decorator (shuffling, sorting) and cache
/// scope for each child selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SelectionOrder {
    /// Inherit the selection order from the parent configuration.
    ///
    /// If there is no parent to inherit from, defaults to `Random`.
    #[default]
    Inherit,

    /// Select elements in their original order.
    ///
    /// Deterministic and reproducible without any caching.
    Original,

    /// Select elements in random order without shuffling.
    ///
    /// The same element may be selected multiple times. Scales well
    /// because it does not require caching.
    Random,

    /// Select elements in random order by shuffling a cached snapshot.
    ///
    /// Each element is selected exactly once per refresh. Requires caching
    /// at step scope or wider.
    Shuffled,

    /// Select elements in sorted order.
    ///
    /// Each element is selected exactly once per refresh. Requires caching
    /// at step scope or wider.
    Sorted,
}

impl SelectionOrder {
    /// Resolves the selection order by inheriting from a parent if necessary.
    ///
    /// Returns a concrete order (never `Inherit`).
    pub fn resolve(self, inherited: SelectionOrder) -> SelectionOrder {
        match self {
            SelectionOrder::Inherit => {
                if inherited == SelectionOrder::Inherit {
                    SelectionOrder::Random
                } else {
                    inherited
                }
            }
            other => other,
        }
    }

    /// Returns `true` if this selection order implies random selection.
    pub fn is_random(&self) -> bool {
        matches!(self, SelectionOrder::Random | SelectionOrder::Shuffled)
    }

    /// Returns `true` if this selection order requires a cached snapshot
    /// before iteration can begin.
    pub fn requires_caching(&self) -> bool {
        matches!(self, SelectionOrder::Shuffled | SelectionOrder::Sorted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_inherit_from_parent() {
        assert_eq!(
            SelectionOrder::Inherit.resolve(SelectionOrder::Original),
            SelectionOrder::Original
        );
        assert_eq!(
            SelectionOrder::Inherit.resolve(SelectionOrder::Shuffled),
            SelectionOrder::Shuffled
        );
    }

    #[test]
    fn test_resolve_inherit_from_inherit_defaults_to_random() {
        assert_eq!(
            SelectionOrder::Inherit.resolve(SelectionOrder::Inherit),
            SelectionOrder::Random
        );
    }

    #[test]
    fn test_resolve_concrete_order_wins() {
        assert_eq!(
            SelectionOrder::Original.resolve(SelectionOrder::Random),
            SelectionOrder::Original
        );
    }

    #[test]
    fn test_is_random() {
        assert!(SelectionOrder::Random.is_random());
        assert!(SelectionOrder::Shuffled.is_random());
        assert!(!SelectionOrder::Original.is_random());
        assert!(!SelectionOrder::Sorted.is_random());
    }

    #[test]
    fn test_requires_caching() {
        assert!(SelectionOrder::Shuffled.requires_caching());
        assert!(SelectionOrder::Sorted.requires_caching());
        assert!(!SelectionOrder::Original.requires_caching());
        assert!(!SelectionOrder::Random.requires_caching());
    }
}
