//! Variable type definitions

/// The type of a planning variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariableType {
    /// A genuine planning variable that the solver optimizes.
    Genuine,
    /// A chained planning variable where entities form chains rooted at anchors.
    Chained,
    /// A list variable containing multiple values.
    List,
    /// A shadow variable computed from other variables.
    Shadow(ShadowVariableKind),
}

/// The kind of shadow variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShadowVariableKind {
    /// Custom shadow variable with user-defined listener.
    Custom,
    /// Inverse of another variable (bidirectional relationship).
    InverseRelation,
    /// Index within a list variable.
    Index,
    /// Next element in a list variable.
    NextElement,
    /// Previous element in a list variable.
    PreviousElement,
    /// Anchor in a chained variable.
    Anchor,
    /// Cascading update from other shadow variables.
    Cascading,
    /// Piggyback on another shadow variable's listener.
    Piggyback,
}

/// The type of value range for a planning variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueRangeType {
    /// A collection of discrete values provided by the solution.
    Collection,
    /// A countable range (e.g., integers from 1 to 100).
    CountableRange {
        /// Inclusive start of the range.
        from: i64,
        /// Exclusive end of the range.
        to: i64,
    },
    /// A value range that differs per entity.
    EntityDependent,
}

impl VariableType {
    /// Returns true if this is a genuine (non-shadow) variable.
    ///
    /// Genuine variables include basic, chained, and list variables.
    pub fn is_genuine(&self) -> bool {
        matches!(
            self,
            VariableType::Genuine | VariableType::Chained | VariableType::List
        )
    }

    /// Returns true if this is a shadow variable.
    pub fn is_shadow(&self) -> bool {
        matches!(self, VariableType::Shadow(_))
    }

    /// Returns true if this is a list variable.
    pub fn is_list(&self) -> bool {
        matches!(self, VariableType::List)
    }

    /// Returns true if this is a chained variable.
    pub fn is_chained(&self) -> bool {
        matches!(self, VariableType::Chained)
    }

    /// Returns true if this is a basic genuine variable (not chained or list).
    pub fn is_basic(&self) -> bool {
        matches!(self, VariableType::Genuine)
    }
}

impl ShadowVariableKind {
    /// Returns true if this shadow variable requires a custom listener.
    pub fn requires_listener(&self) -> bool {
        matches!(
            self,
            ShadowVariableKind::Custom | ShadowVariableKind::Cascading
        )
    }

    /// Returns true if this shadow variable is automatically maintained.
    pub fn is_automatic(&self) -> bool {
        matches!(
            self,
            ShadowVariableKind::InverseRelation
                | ShadowVariableKind::Index
                | ShadowVariableKind::NextElement
                | ShadowVariableKind::PreviousElement
                | ShadowVariableKind::Anchor
        )
    }

    /// Returns true if this shadow variable piggybacks on another
    /// shadow variable's listener rather than having its own.
    pub fn is_piggyback(&self) -> bool {
        matches!(self, ShadowVariableKind::Piggyback)
    }
}

impl ValueRangeType {
    /// Returns true if the value range is the same for every entity.
    ///
    /// Selectors that replay one value stream to multiple consumers only
    /// support entity-independent ranges.
    pub fn is_entity_independent(&self) -> bool {
        !matches!(self, ValueRangeType::EntityDependent)
    }
}
